use crate::game::{GuessRange, format_history};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub range: GuessRange,
    pub attempts: u32,
    #[prop_or_default]
    pub history: Vec<i32>,
}

#[function_component(MetaPanel)]
pub fn meta_panel(p: &Props) -> Html {
    html! {
        <section class="meta" aria-label="Game progress">
            <p class="range-hint">
                { "Guess a number between " }
                <span id="min">{ p.range.min() }</span>
                { " and " }
                <span id="max">{ p.range.max() }</span>
            </p>
            <p>{ "Attempts: " }<span id="attempts">{ p.attempts }</span></p>
            <p>{ "History: " }<span id="history">{ format_history(&p.history) }</span></p>
        </section>
    }
}
