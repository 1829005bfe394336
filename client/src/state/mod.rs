//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is provided through Leptos context so components read a small
//! focused model instead of reaching for browser globals.

pub mod ui;
