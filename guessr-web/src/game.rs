//! Web-specific game engine implementation
//!
//! This module provides the browser implementations of the guessr-game traits
//! and re-exports the core game logic types.

use std::rc::Rc;

// Re-export all types from guessr-game
pub use guessr_game::*;

/// Game engine bound to the page's shared random streams.
pub type WebEngine = GuessEngine<Rc<RngBundle>>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage rejected the operation: {0}")]
    Rejected(String),
}

/// [`PreferenceStore`] backed by `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    type Error = StorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|e| StorageError::Unavailable(crate::dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Rejected(crate::dom::js_error_message(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        let storage = crate::dom::local_storage()
            .map_err(|e| StorageError::Unavailable(crate::dom::js_error_message(&e)))?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(crate::dom::js_error_message(&e)))
    }
}

/// Presentation config embedded at build time.
const CONFIG_JSON: &str = include_str!("../static/config.json");

/// Load the embedded config, falling back to defaults when it is unusable.
#[must_use]
pub fn load_config() -> GameConfig {
    parse_config_or_default(CONFIG_JSON)
}

fn parse_config_or_default(json: &str) -> GameConfig {
    GameConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("Failed to load game config, using defaults: {err}");
        GameConfig::default_config()
    })
}

/// Engine plus the bundle its celebration stream is drawn from.
pub struct WebGame {
    pub engine: WebEngine,
    pub bundle: Rc<RngBundle>,
}

impl WebGame {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let bundle = Rc::new(RngBundle::from_user_seed(seed));
        let engine = GuessEngine::classic(Rc::clone(&bundle));
        Self { engine, bundle }
    }

    /// Draw the celebration for the win that just happened.
    #[must_use]
    pub fn draw_celebration(&self, cfg: &CelebrationConfig) -> CelebrationPlan {
        CelebrationPlan::draw(&mut *self.bundle.celebration(), cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let cfg = GameConfig::from_json(CONFIG_JSON).expect("embedded config is valid");
        assert_eq!(cfg.theme_key, "rn_theme");
        assert_eq!(cfg.evaluate_delay_ms, 900);
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        assert_eq!(
            parse_config_or_default("{ nope"),
            GameConfig::default_config()
        );
    }

    #[test]
    fn web_game_celebration_does_not_move_secrets() {
        let mut plain = WebGame::from_seed(99);
        let mut celebrating = WebGame::from_seed(99);
        let cfg = CelebrationConfig::default_config();
        for _ in 0..3 {
            assert_eq!(plain.engine.secret(), celebrating.engine.secret());
            let _ = celebrating.draw_celebration(&cfg);
            plain.engine.restart();
            celebrating.engine.restart();
        }
    }
}
