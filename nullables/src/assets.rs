//! Nullable asset catalog.

use agora_store::{AssetCatalog, CancelToken, StoreError};
use agora_types::AssetRef;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory asset catalog holding pre-registered blob keys.
#[derive(Default)]
pub struct NullAssets {
    assets: Mutex<HashMap<String, String>>,
}

impl NullAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset key with a content type.
    pub fn insert(&self, asset: &AssetRef, content_type: &str) {
        self.assets
            .lock()
            .unwrap()
            .insert(asset.as_str().to_owned(), content_type.to_owned());
    }
}

impl AssetCatalog for NullAssets {
    fn exists(&self, asset: &AssetRef, cancel: &CancelToken) -> Result<bool, StoreError> {
        cancel.check()?;
        Ok(self.assets.lock().unwrap().contains_key(asset.as_str()))
    }

    fn content_type(
        &self,
        asset: &AssetRef,
        cancel: &CancelToken,
    ) -> Result<Option<String>, StoreError> {
        cancel.check()?;
        Ok(self.assets.lock().unwrap().get(asset.as_str()).cloned())
    }
}
