use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::mood::Mood;

/// The dashboard's stat cards, computed over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Date the "this month" figure was computed against
    pub reference_date: NaiveDate,

    /// Number of saved entries
    pub total_entries: usize,

    /// Entries in the same calendar month and year as `reference_date`
    pub this_month: usize,

    /// Most frequent mood; `None` when there are no entries
    pub most_common_mood: Option<Mood>,

    /// Highest water intake recorded on any day (0 when empty)
    pub max_water_intake: u8,
}

impl DashboardSummary {
    /// Mood card text, e.g. `"happy 😊"`, or `"—"` when there is no data.
    pub fn mood_label(&self) -> String {
        match self.most_common_mood {
            Some(mood) => format!("{} {}", mood, mood.emoji()),
            None => "—".to_string(),
        }
    }
}
