//! Theme resolution against injected storage, ambient signal, and document.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use super::{STORAGE_KEY, ThemeError, ThemePreference};

/// Durable per-origin key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Platform color-scheme signal. Implementations report `false` when the
/// platform cannot be queried.
pub trait AmbientScheme {
    fn prefers_dark(&self) -> bool;
}

/// Root presentation node that styling rules key off.
pub trait RootAttribute {
    fn set_dark(&self, enabled: bool) -> Result<(), ThemeError>;
}

/// Owns the persisted preference and the root display attribute.
#[derive(Debug)]
pub struct ThemeResolver<S, A, R> {
    store: S,
    ambient: A,
    root: R,
}

impl<S, A, R> ThemeResolver<S, A, R>
where
    S: PreferenceStore,
    A: AmbientScheme,
    R: RootAttribute,
{
    pub fn new(store: S, ambient: A, root: R) -> Self {
        Self { store, ambient, root }
    }

    /// Pick the startup preference.
    ///
    /// A stored value wins (`"dark"` selects dark, anything else light). With
    /// nothing stored, or an unreadable store, the ambient signal decides.
    pub fn resolve_initial(&self) -> ThemePreference {
        match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => ThemePreference::from_persisted(&raw),
            Ok(None) => self.ambient_default(),
            Err(e) => {
                leptos::logging::warn!("theme preference unreadable, using ambient scheme: {e}");
                self.ambient_default()
            }
        }
    }

    /// Set the root attribute and persist `pref`, returning the applied value
    /// for the presentation layer to publish.
    pub fn apply(&self, pref: ThemePreference) -> ThemePreference {
        if let Err(e) = self.root.set_dark(pref.is_dark()) {
            leptos::logging::warn!("{pref} theme attribute not applied: {e}");
        }
        if let Err(e) = self.store.set(STORAGE_KEY, pref.as_str()) {
            leptos::logging::warn!("{pref} theme preference not persisted: {e}");
        }
        pref
    }

    fn ambient_default(&self) -> ThemePreference {
        ThemePreference::from_dark(self.ambient.prefers_dark())
    }
}
