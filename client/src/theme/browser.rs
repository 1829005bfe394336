//! Browser bindings for the theme resolver.
//!
//! Reads and writes `localStorage`, queries `prefers-color-scheme`, and toggles
//! the `dark` class on `<html>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside `hydrate` builds every entry point is a no-op that reports light,
//! so server rendering stays deterministic. The real preference is applied
//! by a client-only effect after hydration.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::ThemePreference;

/// Resolve the startup preference and apply it to the document.
pub fn startup() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        let resolver = web::resolver();
        resolver.apply(resolver.resolve_initial())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemePreference::Light
    }
}

/// Apply `pref` to the document and persist it.
pub fn commit(pref: ThemePreference) -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        web::resolver().apply(pref)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        pref
    }
}

#[cfg(feature = "hydrate")]
mod web {
    use wasm_bindgen::JsValue;

    use crate::theme::{
        AmbientScheme, DARK_CLASS, DARK_SCHEME_QUERY, PreferenceStore, RootAttribute, ThemeError,
        ThemeResolver,
    };

    pub(super) fn resolver() -> ThemeResolver<LocalStorage, MediaQueryScheme, DocumentRoot> {
        ThemeResolver::new(LocalStorage, MediaQueryScheme, DocumentRoot)
    }

    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }

    fn local_storage() -> Result<web_sys::Storage, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ThemeError::StorageUnavailable),
            Err(e) => Err(ThemeError::Storage { op: "open", detail: describe(&e) }),
        }
    }

    pub(super) struct LocalStorage;

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
            local_storage()?
                .get_item(key)
                .map_err(|e| ThemeError::Storage { op: "getItem", detail: describe(&e) })
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| ThemeError::Storage { op: "setItem", detail: describe(&e) })
        }
    }

    pub(super) struct MediaQueryScheme;

    impl AmbientScheme for MediaQueryScheme {
        fn prefers_dark(&self) -> bool {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.match_media(DARK_SCHEME_QUERY) {
                Ok(Some(mq)) => mq.matches(),
                Ok(None) => false,
                Err(e) => {
                    leptos::logging::warn!("matchMedia failed: {}", describe(&e));
                    false
                }
            }
        }
    }

    pub(super) struct DocumentRoot;

    impl RootAttribute for DocumentRoot {
        fn set_dark(&self, enabled: bool) -> Result<(), ThemeError> {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
                .ok_or(ThemeError::NoDocumentRoot)?;
            let class_list = root.class_list();
            let result = if enabled { class_list.add_1(DARK_CLASS) } else { class_list.remove_1(DARK_CLASS) };
            result.map_err(|e| ThemeError::ClassList(describe(&e)))
        }
    }
}
