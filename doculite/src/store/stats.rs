use serde::Serialize;

/// Derived, display-only statistics for one database.
///
/// Only `collections_count` is exact. `storage_size` and `indexes_count`
/// are presentation heuristics computed from document counts plus a
/// randomized jitter term; they must not feed any dependent logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseStats {
    pub storage_size: String,
    pub collections_count: usize,
    pub indexes_count: usize,
}

impl DatabaseStats {
    /// The zero-valued stats tuple, returned for unknown databases.
    pub fn zero() -> Self {
        DatabaseStats {
            storage_size: "0 kB".to_string(),
            collections_count: 0,
            indexes_count: 0,
        }
    }
}
