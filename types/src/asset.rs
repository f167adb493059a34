//! Opaque references into the blob store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a stored asset (an image blob key).
///
/// The core never dereferences these; existence and content-type checks go
/// through the `AssetCatalog` collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetRef {
    fn from(key: String) -> Self {
        Self(key)
    }
}
