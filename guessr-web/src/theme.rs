// Theme helpers

use crate::game::{LocalStorageStore, Theme, ThemePreference};

/// Theme preference persisted in `localStorage` under `key`.
#[must_use]
pub fn preference(key: &str) -> ThemePreference<LocalStorageStore> {
    ThemePreference::new(LocalStorageStore, key)
}

/// Apply a theme to the document
///
/// Adds or removes the 'dark' class on the HTML element. Does nothing when
/// no document is available.
pub fn apply_theme(theme: Theme) {
    let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };

    let _ = match theme.css_class() {
        Some(class) => html.class_list().add_1(class),
        None => html.class_list().remove_1("dark"),
    };
}

/// Read the saved theme and apply it to the document.
pub fn restore_theme(key: &str) -> Theme {
    let theme = preference(key).load();
    apply_theme(theme);
    theme
}

/// Flip the theme, persist the choice, and return the new value.
pub fn toggle_theme(key: &str, current: Theme) -> Theme {
    let next = preference(key).toggle(current);
    apply_theme(next);
    next
}
