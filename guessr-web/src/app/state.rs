use crate::audio::AudioSlot;
use crate::game::{CelebrationPlan, Feedback, GameConfig, SessionStats, Theme, WebGame};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// A celebration currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCelebration {
    pub id: u64,
    pub plan: Rc<CelebrationPlan>,
    pub fading: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub game: Rc<RefCell<WebGame>>,
    pub config: Rc<GameConfig>,
    pub input: UseStateHandle<AttrValue>,
    pub feedback: UseStateHandle<Feedback>,
    pub stats: UseStateHandle<SessionStats>,
    pub evaluating: UseStateHandle<bool>,
    pub locked: UseStateHandle<bool>,
    pub theme: UseStateHandle<Theme>,
    pub celebration: UseStateHandle<Option<ActiveCelebration>>,
    /// Bumped on restart; a pending evaluation from an older generation is dropped.
    pub generation: Rc<RefCell<u64>>,
    pub celebration_seq: Rc<RefCell<u64>>,
    pub audio: AudioSlot,
}

#[hook]
pub fn use_app_state(seed: Option<u64>) -> AppState {
    let config = use_memo((), |_| crate::game::load_config());
    let theme_key = config.theme_key.clone();
    AppState {
        game: use_mut_ref(move || {
            WebGame::from_seed(seed.unwrap_or_else(crate::dom::entropy_seed))
        }),
        config,
        input: use_state(|| AttrValue::from("")),
        feedback: use_state(Feedback::welcome),
        stats: use_state(SessionStats::default),
        evaluating: use_state(|| false),
        locked: use_state(|| false),
        theme: use_state(move || crate::theme::preference(&theme_key).load()),
        celebration: use_state(|| None::<ActiveCelebration>),
        generation: use_mut_ref(|| 0_u64),
        celebration_seq: use_mut_ref(|| 0_u64),
        audio: use_mut_ref(|| None::<web_sys::AudioContext>),
    }
}

impl AppState {
    /// Whether the guess controls should refuse input.
    #[must_use]
    pub fn input_disabled(&self) -> bool {
        *self.evaluating || *self.locked
    }

    /// Copy the engine's counters into render state.
    pub fn sync_stats(&self) {
        self.stats.set(self.game.borrow().engine.stats());
    }
}
