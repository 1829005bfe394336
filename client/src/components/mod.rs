//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content blocks while reading shared
//! state from Leptos context providers.

pub mod navbar;
pub mod project_card;
