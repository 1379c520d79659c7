use crate::game::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let label = match p.theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };
    html! {
        <button
            id="themeToggle"
            type="button"
            class="theme-toggle"
            aria-label={label}
            title={label}
            {onclick}
        >
            { p.theme.toggle_icon() }
        </button>
    }
}
