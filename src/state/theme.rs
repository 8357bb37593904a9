//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the dark class
//! to the `<html>` element. Toggle writes back to `localStorage`, updates the
//! class, and keeps the toggle checkbox in step.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort. Unavailable storage reads as unset
//! and a rejected write is logged; the page still switches theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::dom::{Element, KeyValueStore};

/// Resolved page theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted in storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Theme for a toggle checkbox state.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }
}

/// What storage says about the theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Unset,
    Light,
    Dark,
}

impl ThemePreference {
    /// Interpret a stored value. Only `"dark"` means dark; any other present
    /// value means light.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Unset,
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }

    /// Resolve against the OS color-scheme signal.
    #[must_use]
    pub fn resolve(self, os_prefers_dark: bool) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
            Self::Unset if os_prefers_dark => Theme::Dark,
            Self::Unset => Theme::Light,
        }
    }
}

/// The single persisted theme flag.
pub struct PreferenceStore<S> {
    store: Option<S>,
    key: String,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: Option<S>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Read the stored preference. Missing storage reads as unset.
    pub fn read(&self) -> ThemePreference {
        let raw = self.store.as_ref().and_then(|s| s.get(&self.key));
        ThemePreference::from_stored(raw.as_deref())
    }

    /// Persist `theme`. Failures are logged, never surfaced.
    pub fn write(&self, theme: Theme) {
        let Some(store) = self.store.as_ref() else {
            log::warn!("theme: storage unavailable, preference not saved");
            return;
        };
        if let Err(err) = store.set(&self.key, theme.as_str()) {
            log::warn!("theme: {err}");
        }
    }
}

/// Keeps the root class, the toggle checkbox and storage in agreement.
pub struct ThemeController<E, S> {
    root: E,
    toggle: E,
    prefs: PreferenceStore<S>,
    dark_class: String,
    current: Theme,
}

impl<E: Element, S: KeyValueStore> ThemeController<E, S> {
    /// Resolve the initial theme and apply it.
    pub fn new(root: E, toggle: E, prefs: PreferenceStore<S>, dark_class: impl Into<String>, os_prefers_dark: bool) -> Self {
        let mut controller = Self { root, toggle, prefs, dark_class: dark_class.into(), current: Theme::Light };
        let initial = controller.resolve_initial_theme(os_prefers_dark);
        controller.apply(initial);
        controller
    }

    /// Stored preference, falling back to the OS signal when unset.
    pub fn resolve_initial_theme(&self, os_prefers_dark: bool) -> Theme {
        self.prefs.read().resolve(os_prefers_dark)
    }

    /// Set or clear the dark class on the root and sync the checkbox.
    pub fn apply(&mut self, theme: Theme) {
        if theme.is_dark() {
            self.root.add_class(&self.dark_class);
        } else {
            self.root.remove_class(&self.dark_class);
        }
        self.toggle.set_checked(theme.is_dark());
        self.current = theme;
    }

    /// The toggle changed: apply and persist.
    pub fn on_toggle(&mut self, checked: bool) -> Theme {
        let next = Theme::from_checked(checked);
        self.apply(next);
        self.prefs.write(next);
        log::debug!("theme: switched to {}", next.as_str());
        next
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }
}
