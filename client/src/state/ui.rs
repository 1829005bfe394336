//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Holds the resolved theme as published by `theme::browser`. Components
//! subscribe to this value; only the theme module touches storage or the
//! document root.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::theme::ThemePreference;

/// UI state provided as `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
}

impl UiState {
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
