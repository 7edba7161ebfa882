//! Browser Storage
//!
//! [`KeyValueStore`] over `window.localStorage`, scoped to the page origin.

use bizdash::store::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// `window.localStorage` handle
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

fn storage() -> StoreResult<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizdash::store::{DashboardStore, DatasetLoad};
    use bizdash::{Dataset, Theme};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trips_keys() {
        let store = LocalStore;
        store.set("bizdash:test", "value").unwrap();
        assert_eq!(store.get("bizdash:test").unwrap().as_deref(), Some("value"));
        store.remove("bizdash:test").unwrap();
        assert_eq!(store.get("bizdash:test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn dashboard_store_over_local_storage() {
        let store = DashboardStore::new(LocalStore);
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Some(Theme::Dark));

        store.save_dataset(&Dataset::seed()).unwrap();
        assert!(matches!(store.load_dataset(), DatasetLoad::Stored(d) if d == Dataset::seed()));
        store.clear_dataset().unwrap();
        assert!(matches!(store.load_dataset(), DatasetLoad::Missing));
    }
}
