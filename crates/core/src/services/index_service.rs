use chrono::{Datelike, NaiveDate};

use crate::models::entry::DailyEntry;
use crate::models::mood::Mood;

/// Read-only views over a loaded entry collection: ordering, search and the
/// dashboard aggregates.
///
/// Pure business logic — no I/O, no state. Every call recomputes from the
/// slice it's given; collections are one entry per day, so this stays cheap.
pub struct EntryIndex;

impl EntryIndex {
    pub fn new() -> Self {
        Self
    }

    /// Entries ordered by date, most recent first. The sort is stable.
    pub fn sorted_by_date_descending<'a, I>(&self, entries: I) -> Vec<&'a DailyEntry>
    where
        I: IntoIterator<Item = &'a DailyEntry>,
    {
        let mut sorted: Vec<&DailyEntry> = entries.into_iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Entries whose date (`YYYY-MM-DD`) or mood contains `term`,
    /// case-insensitively. An empty term matches everything. Input order is kept.
    pub fn filter_by_search_term<'a, I>(&self, entries: I, term: &str) -> Vec<&'a DailyEntry>
    where
        I: IntoIterator<Item = &'a DailyEntry>,
    {
        let needle = term.to_lowercase();
        entries
            .into_iter()
            .filter(|e| {
                e.date_key().to_lowercase().contains(&needle)
                    || e.mood.as_str().contains(&needle)
            })
            .collect()
    }

    /// Number of entries in the same calendar month and year as `reference`.
    pub fn count_this_month(&self, entries: &[DailyEntry], reference: NaiveDate) -> usize {
        entries
            .iter()
            .filter(|e| e.date.year() == reference.year() && e.date.month() == reference.month())
            .count()
    }

    /// The most frequent mood, or `None` for an empty collection.
    ///
    /// Ties go to the mood that was encountered first while scanning `entries`.
    pub fn most_common_mood(&self, entries: &[DailyEntry]) -> Option<Mood> {
        // (mood, count) in first-encounter order
        let mut counts: Vec<(Mood, usize)> = Vec::new();
        for entry in entries {
            match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
                Some((_, count)) => *count += 1,
                None => counts.push((entry.mood, 1)),
            }
        }

        let mut best: Option<(Mood, usize)> = None;
        for (mood, count) in counts {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }

    /// Highest water intake across entries; 0 for an empty collection.
    pub fn max_water_intake(&self, entries: &[DailyEntry]) -> u8 {
        entries.iter().map(|e| e.water_intake).max().unwrap_or(0)
    }
}

impl Default for EntryIndex {
    fn default() -> Self {
        Self::new()
    }
}
