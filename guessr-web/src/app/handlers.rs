use crate::app::state::{ActiveCelebration, AppState};
use crate::dom::{focus_by_id, js_error_message, sleep_ms};
use crate::game::Feedback;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub const GUESS_INPUT_ID: &str = "guessInput";

#[derive(Clone)]
pub struct AppHandlers {
    pub input: Callback<String>,
    pub check: Callback<()>,
    pub restart: Callback<()>,
    pub toggle_theme: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            input: build_input(state),
            check: build_check(state),
            restart: build_restart(state),
            toggle_theme: build_toggle_theme(state),
        }
    }
}

fn build_input(state: &AppState) -> Callback<String> {
    let input = state.input.clone();
    Callback::from(move |value: String| input.set(AttrValue::from(value)))
}

fn build_check(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        if state.input_disabled() {
            return;
        }
        let raw = state.input.to_string();
        if raw.trim().is_empty() {
            state.feedback.set(Feedback::empty_input());
            return;
        }

        state.evaluating.set(true);
        let ticket = *state.generation.borrow();
        let delay_ms = state.config.evaluate_delay_ms;
        let state = state.clone();
        spawn_local(async move {
            if let Err(err) = sleep_ms(delay_ms).await {
                log::warn!("Evaluation timer failed: {}", js_error_message(&err));
            }
            if *state.generation.borrow() != ticket {
                log::debug!("Dropping evaluation for a restarted session");
                return;
            }

            let outcome = state.game.borrow_mut().engine.submit(&raw);
            state.evaluating.set(false);
            state.feedback.set(Feedback::for_outcome(&outcome));
            state.sync_stats();
            if outcome.is_win() {
                state.locked.set(true);
                celebrate(&state);
            }
        });
    })
}

/// Draw and show the win celebration, then fade and remove it on timers.
fn celebrate(state: &AppState) {
    let plan = Rc::new(
        state
            .game
            .borrow()
            .draw_celebration(&state.config.celebration),
    );
    crate::audio::play_into(&state.audio, &plan.chord);

    let id = {
        let mut seq = state.celebration_seq.borrow_mut();
        *seq += 1;
        *seq
    };
    state.celebration.set(Some(ActiveCelebration {
        id,
        plan: Rc::clone(&plan),
        fading: false,
    }));

    let handle = state.celebration.clone();
    let seq = state.celebration_seq.clone();
    spawn_local(async move {
        if sleep_ms(plan.fade_after_ms).await.is_err() || *seq.borrow() != id {
            return;
        }
        let remove_after_ms = plan.remove_after_ms;
        handle.set(Some(ActiveCelebration {
            id,
            plan,
            fading: true,
        }));
        if sleep_ms(remove_after_ms).await.is_err() || *seq.borrow() != id {
            return;
        }
        handle.set(None);
    });
}

fn build_restart(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        *state.generation.borrow_mut() += 1;
        *state.celebration_seq.borrow_mut() += 1;
        state.game.borrow_mut().engine.restart();
        crate::audio::stop(&state.audio);

        state.input.set(AttrValue::from(""));
        state.evaluating.set(false);
        state.locked.set(false);
        state.celebration.set(None);
        state.feedback.set(Feedback::restarted());
        state.sync_stats();
        focus_by_id(GUESS_INPUT_ID);
    })
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    let key = state.config.theme_key.clone();
    Callback::from(move |()| {
        let next = crate::theme::toggle_theme(&key, *theme);
        theme.set(next);
    })
}
