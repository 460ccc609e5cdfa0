//! Session-scoped persistence of the cart.
//!
//! The browser's `sessionStorage` sits behind [`KeyValueStore`] so cart logic
//! runs the same against [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::cart::{Cart, CartEntry};
use crate::error::StorageError;

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart";
/// Key holding the cart's grand total, two-decimal text.
pub const TOTAL_PRICE_KEY: &str = "totalPrice";

/// String key/value storage with the shape of the Web Storage API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the cart blob through a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current cart; empty when nothing is stored yet or the blob is corrupt.
    pub fn load(&self) -> Result<Cart, StorageError> {
        let Some(raw) = self.store.get_item(CART_KEY)? else {
            return Ok(Cart::new());
        };
        match serde_json::from_str::<Option<Cart>>(&raw) {
            Ok(cart) => Ok(cart.unwrap_or_default()),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored cart: {e}");
                Ok(Cart::new())
            }
        }
    }

    /// Write the whole cart, then its total.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let json = serde_json::to_string(cart)?;
        self.store.set_item(CART_KEY, &json)?;
        self.store.set_item(TOTAL_PRICE_KEY, &cart.grand_total_label())?;
        Ok(())
    }

    /// Load, add one unit of `entry`, save. Returns the saved cart.
    pub fn add_to_cart(&self, entry: CartEntry) -> Result<Cart, StorageError> {
        let mut cart = self.load()?;
        let line = cart.add(entry);
        tracing::debug!(id = %line.id, quantity = line.quantity, "Cart line updated");
        self.save(&cart)?;
        Ok(cart)
    }

    pub fn stored_total(&self) -> Result<Option<String>, StorageError> {
        self.store.get_item(TOTAL_PRICE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, price: f64) -> CartEntry {
        CartEntry {
            id: id.into(),
            title: id.to_uppercase(),
            price,
            image_url: "img.png".into(),
        }
    }

    #[test]
    fn missing_cart_loads_empty() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn null_and_corrupt_blobs_load_empty() {
        let mem = MemoryStore::new();
        mem.set_item(CART_KEY, "null").unwrap();
        assert!(CartStore::new(&mem).load().unwrap().is_empty());

        mem.set_item(CART_KEY, "{not json").unwrap();
        assert!(CartStore::new(&mem).load().unwrap().is_empty());
    }

    #[test]
    fn add_persists_cart_and_total() {
        let mem = MemoryStore::new();
        let store = CartStore::new(&mem);
        store.add_to_cart(entry("a", 9.99)).unwrap();
        store.add_to_cart(entry("a", 9.99)).unwrap();

        let cart = store.load().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(store.stored_total().unwrap().as_deref(), Some("19.98"));

        let raw = mem.get_item(CART_KEY).unwrap().unwrap();
        assert!(raw.contains(r#""imageUrl":"img.png""#));
    }

    #[test]
    fn reads_cart_written_elsewhere() {
        let mem = MemoryStore::new();
        mem.set_item(
            CART_KEY,
            r#"[{"id":"x","title":"X","price":2.5,"quantity":3,"imageUrl":"x.png"}]"#,
        )
        .unwrap();
        let cart = CartStore::new(&mem).load().unwrap();
        assert_eq!(cart.grand_total_label(), "7.50");
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".into()))
        }
    }

    #[test]
    fn write_failure_propagates() {
        let err = CartStore::new(BrokenStore).add_to_cart(entry("a", 1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to write session storage: quota exceeded");
    }
}
