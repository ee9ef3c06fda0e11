pub mod errors;
pub mod models;
pub mod prompt;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    entry::{DailyEntry, DATE_FORMAT},
    settings::StoreSettings,
    summary::DashboardSummary,
};
use prompt::ConfirmPrompt;
use services::{index_service::EntryIndex, summary_service::SummaryService};
use storage::entry_store::EntryStore;
use storage::traits::KeyValueStore;
use tracing::{debug, info};

use errors::CoreError;

/// Parse a `YYYY-MM-DD` date as typed into the editor.
pub fn parse_date(input: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::ValidationError(format!("Invalid date '{input}': expected YYYY-MM-DD"))
    })
}

/// Main entry point for the Daily Planner core library.
///
/// Holds the entries loaded from storage and the services that derive the
/// dashboard from them. The collection is loaded once on open and reloaded
/// in full after every save or delete, so views never go stale.
#[must_use]
pub struct DailyPlanner<S: KeyValueStore> {
    store: EntryStore<S>,
    entries: Vec<DailyEntry>,
    index: EntryIndex,
    summary_service: SummaryService,
}

impl<S: KeyValueStore> std::fmt::Debug for DailyPlanner<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyPlanner")
            .field("entries", &self.entries.len())
            .field("settings", self.store.settings())
            .finish()
    }
}

impl<S: KeyValueStore> DailyPlanner<S> {
    /// Open a planner over `store` using the standard key layout.
    pub fn open(store: S) -> Self {
        Self::build(EntryStore::new(store))
    }

    /// Open a planner over `store` with a custom key layout.
    pub fn with_settings(store: S, settings: StoreSettings) -> Self {
        Self::build(EntryStore::with_settings(store, settings))
    }

    /// Re-read the collection from storage.
    pub fn reload(&mut self) {
        self.entries = self.store.load_all();
        debug!("Loaded {} entries", self.entries.len());
    }

    // ── Listing & Search ────────────────────────────────────────────

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> Vec<&DailyEntry> {
        self.index.sorted_by_date_descending(&self.entries)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The loaded entry for `date`, if any.
    #[must_use]
    pub fn get_entry(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Entries whose date or mood contains `term` (case-insensitive), newest first.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&DailyEntry> {
        let sorted = self.index.sorted_by_date_descending(&self.entries);
        self.index.filter_by_search_term(sorted, term)
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Dashboard stats, counting "this month" against `reference_date`.
    #[must_use]
    pub fn summary(&self, reference_date: NaiveDate) -> DashboardSummary {
        self.summary_service.get_summary(&self.entries, reference_date)
    }

    /// Dashboard stats for the current local date.
    #[must_use]
    pub fn summary_today(&self) -> DashboardSummary {
        self.summary(chrono::Local::now().date_naive())
    }

    // ── Editing ─────────────────────────────────────────────────────

    /// The entry to edit for `date`: the saved per-day record if there is one,
    /// otherwise a blank entry for that date. Nothing is written.
    pub fn open_day(&self, date: &str) -> Result<DailyEntry, CoreError> {
        let date = parse_date(date)?;
        Ok(self
            .store
            .load_day(date)
            .unwrap_or_else(|| DailyEntry::new(date)))
    }

    /// Save `entry` (replacing any entry for the same date) and reload.
    pub fn save_entry(&mut self, entry: &DailyEntry) -> Result<(), CoreError> {
        self.store.save(entry)?;
        self.reload();
        Ok(())
    }

    /// Delete the entry for `date` after asking `prompt`.
    /// Returns `false` without touching storage if the user declines.
    pub fn delete_entry(
        &mut self,
        date: NaiveDate,
        prompt: &mut impl ConfirmPrompt,
    ) -> Result<bool, CoreError> {
        let message = format!("Delete the entry for {}?", date.format(DATE_FORMAT));
        if !prompt.confirm(&message) {
            debug!("Deletion of {} cancelled", date);
            return Ok(false);
        }
        self.store.delete(date)?;
        self.reload();
        Ok(true)
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export the collection as pretty-printed JSON, in the persisted layout.
    pub fn export_entries_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize entries to JSON: {e}")))
    }

    /// Import entries from a JSON array, saving each one (an imported entry
    /// replaces any existing entry for its date). Returns the number saved.
    ///
    /// The whole document is parsed before anything is written, so a
    /// malformed import changes nothing.
    pub fn import_entries_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let entries: Vec<DailyEntry> = serde_json::from_str(json)?;
        for entry in &entries {
            self.store.save(entry)?;
        }
        self.reload();
        info!("Imported {} entries", entries.len());
        Ok(entries.len())
    }

    // ── Storage access ──────────────────────────────────────────────

    #[must_use]
    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    pub fn into_store(self) -> EntryStore<S> {
        self.store
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(store: EntryStore<S>) -> Self {
        let mut planner = Self {
            store,
            entries: Vec::new(),
            index: EntryIndex::new(),
            summary_service: SummaryService::new(),
        };
        planner.reload();
        planner
    }
}
