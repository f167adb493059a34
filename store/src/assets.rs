//! Asset catalog collaborator trait.

use crate::{CancelToken, StoreError};
use agora_types::AssetRef;

/// Existence and content-type lookups against the blob store.
///
/// Used for the image-required submission check; the core never reads blob
/// contents.
pub trait AssetCatalog {
    fn exists(&self, asset: &AssetRef, cancel: &CancelToken) -> Result<bool, StoreError>;

    fn content_type(
        &self,
        asset: &AssetRef,
        cancel: &CancelToken,
    ) -> Result<Option<String>, StoreError>;
}
