use shelf_common::cart::CartEntry;
use shelf_common::error::StorageError;
use shelf_common::storage::{CartStore, KeyValueStore};

/// The browser tab's `sessionStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

/// Cart persistence for the current tab.
pub fn session_cart() -> CartStore<SessionStore> {
    CartStore::new(SessionStore)
}

/// Add one unit of `entry` to the session cart. Failures are logged, not
/// surfaced: the shopper still lands on the cart page.
pub fn add_to_cart(entry: CartEntry) {
    match session_cart().add_to_cart(entry) {
        Ok(cart) => tracing::debug!(lines = cart.len(), "Cart saved to session storage"),
        Err(e) => tracing::error!("Failed to save cart: {e}"),
    }
}

#[cfg(target_family = "wasm")]
impl SessionStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("No window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("sessionStorage disabled".to_string()))
    }
}

#[cfg(target_family = "wasm")]
impl KeyValueStore for SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
impl KeyValueStore for SessionStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(
            "sessionStorage only available in WASM".to_string(),
        ))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(
            "sessionStorage only available in WASM".to_string(),
        ))
    }
}
