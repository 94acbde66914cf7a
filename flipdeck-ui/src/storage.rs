//! `window.localStorage` backend for the card store

use flipdeck::store::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

/// The browser's local storage
///
/// Holds no state; the `Storage` object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", err))
}

fn storage() -> StoreResult<web_sys::Storage> {
    let window =
        web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        // Fails when the quota is exceeded, which large image faces can hit
        storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        storage()?.remove_item(key).map_err(js_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        let mut store = LocalStorage;
        store.set("flipdeck.test", "[]").unwrap();
        assert_eq!(store.get("flipdeck.test").unwrap().as_deref(), Some("[]"));
        store.remove("flipdeck.test").unwrap();
        assert_eq!(store.get("flipdeck.test").unwrap(), None);
    }
}
