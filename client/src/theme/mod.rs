//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! The preference lives in one persisted key (`theme`) and is mirrored onto a
//! `dark` class on the `<html>` element. `ThemeResolver` owns both sides and
//! is the only code that touches them; views read the resolved value from
//! `UiState`.
//!
//! Browser access is injected through the traits in `resolver`, so the
//! resolution rules run unchanged against in-memory fakes in tests.


pub mod browser;
pub mod resolver;

use std::fmt;

pub use resolver::{AmbientScheme, PreferenceStore, RootAttribute, ThemeResolver};

/// Key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Media query reporting the platform color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Resolved display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Interpret a stored value. Only the exact string `"dark"` selects dark.
    pub fn from_persisted(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// Value written to the persisted key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon shown on the navbar toggle button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the opposite preference. Callers pass the result to `apply`.
pub fn toggle(current: ThemePreference) -> ThemePreference {
    match current {
        ThemePreference::Light => ThemePreference::Dark,
        ThemePreference::Dark => ThemePreference::Light,
    }
}

/// Failures while touching browser storage or the document.
///
/// Never surfaced past `ThemeResolver`: reads degrade to "absent" and writes
/// are logged and dropped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("no browser window")]
    NoWindow,
    #[error("localStorage is disabled")]
    StorageUnavailable,
    #[error("localStorage {op} failed: {detail}")]
    Storage { op: &'static str, detail: String },
    #[error("document root element unavailable")]
    NoDocumentRoot,
    #[error("class list update failed: {0}")]
    ClassList(String),
}
