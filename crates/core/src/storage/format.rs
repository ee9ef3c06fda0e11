use chrono::NaiveDate;
use serde_json::Value;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::entry::{DailyEntry, DATE_FORMAT};

/// Per-day record key: `<prefix><YYYY-MM-DD>`, e.g. `planner-2024-01-05`.
pub fn day_key(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}{}", date.format(DATE_FORMAT))
}

/// Encode a single entry (per-day record).
pub fn encode_entry(entry: &DailyEntry) -> Result<String, CoreError> {
    serde_json::to_string(entry)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize entry {}: {e}", entry.date)))
}

/// Encode the collection record.
pub fn encode_collection(entries: &[DailyEntry]) -> Result<String, CoreError> {
    serde_json::to_string(entries)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize entry collection: {e}")))
}

/// Decode a per-day record. Malformed input reads as absent.
pub fn decode_entry(raw: &str) -> Option<DailyEntry> {
    match serde_json::from_str::<DailyEntry>(raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Ignoring malformed entry record: {}", e);
            None
        }
    }
}

/// Decode the collection record.
///
/// Anything that isn't a JSON array reads as an empty collection. Inside an
/// array, elements that don't parse as an entry are skipped and the rest kept.
pub fn decode_collection(raw: &str) -> Vec<DailyEntry> {
    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            warn!("Ignoring entry collection: not a JSON array");
            return Vec::new();
        }
        Err(e) => {
            warn!("Ignoring malformed entry collection: {}", e);
            return Vec::new();
        }
    };

    let total = items.len();
    let entries: Vec<DailyEntry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<DailyEntry>(item).ok())
        .collect();

    if entries.len() < total {
        warn!(
            "Skipped {} malformed element(s) of {} in entry collection",
            total - entries.len(),
            total
        );
    }
    entries
}
