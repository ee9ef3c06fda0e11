use chrono::NaiveDate;
use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::entry::DailyEntry;
use crate::models::settings::StoreSettings;

use super::format;
use super::traits::KeyValueStore;

/// Durable CRUD over daily entries, on top of any `KeyValueStore`.
///
/// Each saved day lives in two places:
/// - the collection record (`plannerEntries`): every entry in one JSON array,
///   used for listing, search and the dashboard;
/// - a per-day record (`planner-<date>`): the full entry, used to resume
///   editing one day without scanning the collection.
///
/// Reads never fail: a missing or corrupt record reads as empty/absent.
/// Writes propagate medium failures. `save` and `delete` each touch both
/// records with separate writes and no rollback, so a failure between the
/// two writes leaves the records out of step until the next successful save.
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStore> {
    store: S,
    settings: StoreSettings,
}

impl<S: KeyValueStore> EntryStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_settings(store, StoreSettings::default())
    }

    pub fn with_settings(store: S, settings: StoreSettings) -> Self {
        Self { store, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Borrow the underlying medium.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Key of the per-day record for `date`.
    #[must_use]
    pub fn day_key(&self, date: NaiveDate) -> String {
        format::day_key(&self.settings.day_key_prefix, date)
    }

    /// Every entry in the collection record, in stored order.
    /// Absent or malformed storage yields an empty list.
    #[must_use]
    pub fn load_all(&self) -> Vec<DailyEntry> {
        match self.store.get(&self.settings.collection_key) {
            Some(raw) => format::decode_collection(&raw),
            None => Vec::new(),
        }
    }

    /// The per-day record for `date`, or `None` if never saved (or unreadable).
    #[must_use]
    pub fn load_day(&self, date: NaiveDate) -> Option<DailyEntry> {
        let raw = self.store.get(&self.day_key(date))?;
        format::decode_entry(&raw)
    }

    /// Save `entry`, replacing any entry with the same date.
    ///
    /// Writes the per-day record first, then rewrites the collection with the
    /// matching element replaced in place (or the entry appended).
    pub fn save(&mut self, entry: &DailyEntry) -> Result<(), CoreError> {
        let mut entry = entry.clone();
        entry.set_water_intake(entry.water_intake);

        let key = self.day_key(entry.date);
        debug!("Writing per-day record {}", key);
        self.store.set(&key, &format::encode_entry(&entry)?)?;

        let mut entries = self.load_all();
        match entries.iter().position(|e| e.date == entry.date) {
            Some(idx) => entries[idx] = entry,
            None => entries.push(entry),
        }
        self.write_collection(&entries)?;

        info!("Saved entry {} ({} in collection)", key, entries.len());
        Ok(())
    }

    /// Delete the entry for `date` from both records.
    /// Deleting a date that was never saved is a no-op.
    pub fn delete(&mut self, date: NaiveDate) -> Result<(), CoreError> {
        let key = self.day_key(date);
        debug!("Removing per-day record {}", key);
        self.store.remove(&key)?;

        let mut entries = self.load_all();
        let before = entries.len();
        entries.retain(|e| e.date != date);
        if entries.len() != before {
            self.write_collection(&entries)?;
            info!("Deleted entry {} ({} left in collection)", key, entries.len());
        }
        Ok(())
    }

    fn write_collection(&mut self, entries: &[DailyEntry]) -> Result<(), CoreError> {
        let json = format::encode_collection(entries)?;
        self.store.set(&self.settings.collection_key, &json)
    }
}
