//! `window.localStorage` as a [`KeyValueStore`].

use web_sys::Storage;

use crate::error::{platform_error, PortfolioError};
use crate::theme::KeyValueStore;

/// localStorage handle; absent when the browser blocks storage
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    fn handle(&self) -> Result<&Storage, PortfolioError> {
        self.storage
            .as_ref()
            .ok_or_else(|| PortfolioError::Platform("localStorage unavailable".into()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        self.handle()?
            .get_item(key)
            .map_err(|e| platform_error("localStorage.getItem", e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.handle()?
            .set_item(key, value)
            .map_err(|e| platform_error("localStorage.setItem", e))
    }
}
