use serde::{Deserialize, Serialize};

/// Key layout used inside the key-value medium.
///
/// The defaults match the layout existing planner data was written with,
/// so they should only be overridden for isolated stores (tests, profiles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Key of the collection record (JSON array of every entry).
    pub collection_key: String,

    /// Prefix of per-day record keys; the full key is `<prefix><YYYY-MM-DD>`.
    pub day_key_prefix: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            collection_key: "plannerEntries".to_string(),
            day_key_prefix: "planner-".to_string(),
        }
    }
}
