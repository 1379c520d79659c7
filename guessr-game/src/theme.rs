//! Light/dark theme preference.
use serde::{Deserialize, Serialize};

use crate::PreferenceStore;

/// Colour scheme for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything unknown is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class added to the root element, if any.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }

    /// Icon on the toggle button: it shows the theme a click switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Theme persisted through a [`PreferenceStore`].
///
/// Storage failures never surface: reads fall back to [`Theme::Light`] and
/// writes are logged and dropped.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Theme saved by a previous visit, or the default.
    #[must_use]
    pub fn load(&self) -> Theme {
        match self.store.read(&self.key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::debug!("ignoring unknown theme value {raw:?}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference unavailable: {err}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(err) = self.store.write(&self.key, theme.as_str()) {
            log::warn!("failed to persist theme preference: {err}");
        }
    }

    /// Flip `current`, persist the result and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}
