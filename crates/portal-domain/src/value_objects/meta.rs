//! Public meta document
//!
//! The document served at [`crate::PUBLIC_META_PATH`] is kept as raw JSON so
//! that fields added by the backend pass through untouched. [`PublicMeta`]
//! is a typed view over the two fields the frontend reads.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Raw public meta document as returned by the endpoint
pub type MetaDocument = serde_json::Value;

/// Typed view of the public meta document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMeta {
    /// Service-type labels offered by the backend
    #[serde(default)]
    pub service_types: Vec<String>,

    /// Keys of the permission presets assignable to members
    #[serde(default)]
    pub permission_presets: Vec<String>,
}

impl PublicMeta {
    /// Build the typed view from a raw document
    pub fn from_document(document: &MetaDocument) -> Result<Self> {
        Ok(Self::deserialize(document)?)
    }
}
