//! Partition descriptor.
//!
//! Only `name` matters for naming; the remaining fields travel along so the
//! descriptor can be passed through as-is by whatever produced it.

use serde::{Deserialize, Serialize};

use super::qualified_name::QualifiedName;

/// A partition as handed over by a catalog backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionSpec {
    /// Partition-level name (`catalog/database/table/key=value`).
    pub name: QualifiedName,

    /// Storage location of the partition data, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-form metadata attached by users; kept as JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_metadata: Option<serde_json::Value>,
}

impl PartitionSpec {
    pub fn new(name: QualifiedName) -> Self {
        Self {
            name,
            location: None,
            definition_metadata: None,
        }
    }
}
