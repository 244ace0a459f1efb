//! Browser localStorage helpers for device-persisted UI flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so components
//! can remember small choices (a dismissed banner) without repeating web-sys
//! glue. State modules take a [`KeyValueStore`] so they can be tested with an
//! in-memory store.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

/// Minimal string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads nothing and drops writes outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        load_raw(key)
    }

    fn set(&self, key: &str, value: &str) {
        save_raw(key, value);
    }
}

/// Load the raw string stored in `localStorage` for `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to `localStorage` for `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::KeyValueStore;

    #[derive(Default)]
    pub struct MemoryStore {
        pub values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        }
    }
}
