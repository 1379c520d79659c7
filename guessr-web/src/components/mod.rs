pub mod confetti;
pub mod guess_form;
pub mod message;
pub mod meta_panel;
pub mod theme_toggle;
