pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;

#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    /// Fixed session seed; a fresh entropy seed is drawn when absent.
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = state::use_app_state(props.seed);
    let handlers = AppHandlers::new(&state);
    view(&state, &handlers)
}

#[cfg(target_arch = "wasm32")]
fn view(state: &state::AppState, handlers: &AppHandlers) -> Html {
    use crate::components::confetti::ConfettiLayer;
    use crate::components::guess_form::GuessForm;
    use crate::components::message::MessageLine;
    use crate::components::meta_panel::MetaPanel;
    use crate::components::theme_toggle::ThemeToggle;

    let range = state.game.borrow().engine.range();
    let on_restart = {
        let cb = handlers.restart.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <main class="container">
            <header class="title-row">
                <h1>{ "Guess the Number" }</h1>
                <ThemeToggle
                    theme={*state.theme}
                    on_toggle={handlers.toggle_theme.clone()}
                />
            </header>
            <MetaPanel
                range={range}
                attempts={state.stats.attempts}
                history={state.stats.history.clone()}
            />
            <GuessForm
                value={(*state.input).clone()}
                min={range.min()}
                max={range.max()}
                disabled={state.input_disabled()}
                evaluating={*state.evaluating}
                on_input={handlers.input.clone()}
                on_check={handlers.check.clone()}
            />
            <MessageLine feedback={(*state.feedback).clone()} />
            <button id="restartBtn" type="button" class="secondary" onclick={on_restart}>
                { "Restart" }
            </button>
            if let Some(active) = (*state.celebration).clone() {
                <ConfettiLayer
                    key={active.id.to_string()}
                    plan={active.plan}
                    fading={active.fading}
                />
            }
        </main>
    }
}
