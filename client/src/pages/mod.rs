//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per `routes::View`, plus the router fallback. Pages render
//! `content` data and delegate repeated blocks to `components`.

pub mod about;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod projects;
