use chrono::NaiveDate;

use crate::models::entry::DailyEntry;
use crate::models::summary::DashboardSummary;
use crate::services::index_service::EntryIndex;

/// Builds the dashboard stat cards from the loaded collection.
pub struct SummaryService {
    index: EntryIndex,
}

impl SummaryService {
    pub fn new() -> Self {
        Self {
            index: EntryIndex::new(),
        }
    }

    /// Summarize `entries`, counting "this month" against `reference_date`.
    /// An empty collection gives zero counts and no mood.
    pub fn get_summary(&self, entries: &[DailyEntry], reference_date: NaiveDate) -> DashboardSummary {
        DashboardSummary {
            reference_date,
            total_entries: entries.len(),
            this_month: self.index.count_this_month(entries, reference_date),
            most_common_mood: self.index.most_common_mood(entries),
            max_water_intake: self.index.max_water_intake(entries),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
