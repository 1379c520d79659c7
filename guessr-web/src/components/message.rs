use crate::game::Feedback;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub feedback: Feedback,
}

#[function_component(MessageLine)]
pub fn message_line(p: &Props) -> Html {
    html! {
        <p id="message" class={p.feedback.css_classes()} role="status" aria-live="polite">
            { p.feedback.message.clone() }
        </p>
    }
}
