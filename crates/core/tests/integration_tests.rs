// ═══════════════════════════════════════════════════════════════════
// Integration Tests — DailyPlanner facade end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use daily_planner_core::errors::CoreError;
use daily_planner_core::models::entry::DailyEntry;
use daily_planner_core::models::mood::Mood;
use daily_planner_core::models::settings::StoreSettings;
use daily_planner_core::models::weather::Weather;
use daily_planner_core::storage::file::FileStore;
use daily_planner_core::storage::memory::MemoryStore;
use daily_planner_core::storage::traits::KeyValueStore;
use daily_planner_core::{parse_date, DailyPlanner};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn planner_with_january() -> DailyPlanner<MemoryStore> {
    let mut planner = DailyPlanner::open(MemoryStore::new());

    let mut first = planner.open_day("2024-01-05").unwrap();
    first.mood = Mood::Happy;
    first.set_water_intake(3);
    planner.save_entry(&first).unwrap();

    let mut second = planner.open_day("2024-01-20").unwrap();
    second.mood = Mood::Happy;
    second.set_water_intake(5);
    planner.save_entry(&second).unwrap();

    planner
}

fn dates(entries: &[&DailyEntry]) -> Vec<String> {
    entries.iter().map(|e| e.date_key()).collect()
}

// ═══════════════════════════════════════════════════════════════════
// Opening & editing
// ═══════════════════════════════════════════════════════════════════

mod editing {
    use super::*;

    #[test]
    fn open_on_empty_store() {
        let planner = DailyPlanner::open(MemoryStore::new());
        assert_eq!(planner.entry_count(), 0);
        assert!(planner.entries().is_empty());
    }

    #[test]
    fn open_day_unsaved_gives_blank_entry() {
        let planner = DailyPlanner::open(MemoryStore::new());
        let e = planner.open_day("2024-05-01").unwrap();
        assert_eq!(e, DailyEntry::new(date(2024, 5, 1)));
        // Nothing written until save
        assert!(planner.store().store().is_empty());
    }

    #[test]
    fn open_day_resumes_saved_entry() {
        let mut planner = DailyPlanner::open(MemoryStore::new());
        let mut e = planner.open_day("2024-05-01").unwrap();
        e.weather = Weather::Windy;
        e.set_todo_text(0, "plant tomatoes");
        e.gratitude = "friends".into();
        planner.save_entry(&e).unwrap();

        assert_eq!(planner.open_day("2024-05-01").unwrap(), e);
    }

    #[test]
    fn open_day_rejects_bad_date() {
        let planner = DailyPlanner::open(MemoryStore::new());
        assert!(matches!(
            planner.open_day("05/01/2024"),
            Err(CoreError::ValidationError(_))
        ));
        assert!(matches!(
            planner.open_day(""),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn parse_date_trims_input() {
        assert_eq!(parse_date(" 2024-01-05 ").unwrap(), date(2024, 1, 5));
    }

    #[test]
    fn save_reloads_collection() {
        let planner = planner_with_january();
        assert_eq!(planner.entry_count(), 2);
        assert!(planner.get_entry(date(2024, 1, 20)).is_some());
    }

    #[test]
    fn resave_same_date_does_not_duplicate() {
        let mut planner = planner_with_january();
        let mut e = planner.open_day("2024-01-05").unwrap();
        e.mood = Mood::Angry;
        planner.save_entry(&e).unwrap();

        assert_eq!(planner.entry_count(), 2);
        assert_eq!(planner.get_entry(date(2024, 1, 5)).unwrap().mood, Mood::Angry);
    }

    #[test]
    fn entries_survive_reopen_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.json");

        let mut planner = DailyPlanner::open(FileStore::open(&path));
        let mut e = planner.open_day("2024-07-04").unwrap();
        e.mood = Mood::Excited;
        planner.save_entry(&e).unwrap();
        drop(planner);

        let reopened = DailyPlanner::open(FileStore::open(&path));
        assert_eq!(reopened.entries(), vec![&e]);
    }

    #[test]
    fn into_store_hands_back_the_medium() {
        let mut planner = DailyPlanner::open(MemoryStore::new());
        let e = planner.open_day("2024-01-05").unwrap();
        planner.save_entry(&e).unwrap();

        let mem = planner.into_store().into_inner();
        assert!(mem.contains_key("plannerEntries"));
        assert!(mem.contains_key("planner-2024-01-05"));
    }

    #[test]
    fn custom_settings_isolate_profiles() {
        let mut mem = MemoryStore::new();
        {
            let mut work = DailyPlanner::with_settings(
                &mut mem,
                StoreSettings {
                    collection_key: "work:entries".into(),
                    day_key_prefix: "work:".into(),
                },
            );
            let e = work.open_day("2024-01-05").unwrap();
            work.save_entry(&e).unwrap();
        }
        let personal = DailyPlanner::open(&mut mem);
        assert_eq!(personal.entry_count(), 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    #[test]
    fn entries_newest_first() {
        let planner = planner_with_january();
        assert_eq!(dates(&planner.entries()), ["2024-01-20", "2024-01-05"]);
    }

    #[test]
    fn search_by_mood_and_date() {
        let planner = planner_with_january();
        assert_eq!(dates(&planner.search("happy")), ["2024-01-20", "2024-01-05"]);
        assert_eq!(dates(&planner.search("2024-01-05")), ["2024-01-05"]);
        assert_eq!(dates(&planner.search("")), ["2024-01-20", "2024-01-05"]);
        assert!(planner.search("sad").is_empty());
    }

    #[test]
    fn summary_for_january() {
        let planner = planner_with_january();
        let s = planner.summary(date(2024, 1, 15));
        assert_eq!(s.total_entries, 2);
        assert_eq!(s.this_month, 2);
        assert_eq!(s.most_common_mood, Some(Mood::Happy));
        assert_eq!(s.max_water_intake, 5);
    }

    #[test]
    fn summary_today_on_empty_planner() {
        let planner = DailyPlanner::open(MemoryStore::new());
        let s = planner.summary_today();
        assert_eq!(s.total_entries, 0);
        assert_eq!(s.most_common_mood, None);
        assert_eq!(s.max_water_intake, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Deleting
// ═══════════════════════════════════════════════════════════════════

mod deleting {
    use super::*;

    #[test]
    fn confirmed_delete_removes_entry() {
        let mut planner = planner_with_january();
        let mut asked = Vec::new();
        let deleted = planner
            .delete_entry(date(2024, 1, 5), &mut |msg: &str| {
                asked.push(msg.to_string());
                true
            })
            .unwrap();

        assert!(deleted);
        assert_eq!(asked, ["Delete the entry for 2024-01-05?"]);
        assert_eq!(dates(&planner.entries()), ["2024-01-20"]);
        assert!(planner.store().load_day(date(2024, 1, 5)).is_none());
    }

    #[test]
    fn declined_delete_keeps_entry() {
        let mut planner = planner_with_january();
        let deleted = planner
            .delete_entry(date(2024, 1, 5), &mut |_: &str| false)
            .unwrap();

        assert!(!deleted);
        assert_eq!(planner.entry_count(), 2);
        assert!(planner.store().load_day(date(2024, 1, 5)).is_some());
    }

    #[test]
    fn delete_unknown_date_is_harmless() {
        let mut planner = planner_with_january();
        let deleted = planner
            .delete_entry(date(2030, 1, 1), &mut |_: &str| true)
            .unwrap();
        assert!(deleted);
        assert_eq!(planner.entry_count(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Export / Import
// ═══════════════════════════════════════════════════════════════════

mod export_import {
    use super::*;

    #[test]
    fn export_then_import_into_fresh_planner() {
        let source = planner_with_january();
        let json = source.export_entries_to_json().unwrap();

        let mut target = DailyPlanner::open(MemoryStore::new());
        assert_eq!(target.import_entries_from_json(&json).unwrap(), 2);
        assert_eq!(target.entries(), source.entries());
        assert!(target.store().load_day(date(2024, 1, 20)).is_some());
    }

    #[test]
    fn import_replaces_existing_dates() {
        let mut planner = planner_with_january();
        let json = r#"[{ "date": "2024-01-05", "mood": "sad", "waterIntake": 1 }]"#;
        assert_eq!(planner.import_entries_from_json(json).unwrap(), 1);

        assert_eq!(planner.entry_count(), 2);
        let e = planner.get_entry(date(2024, 1, 5)).unwrap();
        assert_eq!(e.mood, Mood::Sad);
        assert_eq!(e.water_intake, 1);
    }

    #[test]
    fn malformed_import_writes_nothing() {
        let mut planner = DailyPlanner::open(MemoryStore::new());
        let json = r#"[{ "date": "2024-01-05" }, { "mood": "sad" }]"#;
        assert!(matches!(
            planner.import_entries_from_json(json),
            Err(CoreError::Deserialization(_))
        ));
        assert_eq!(planner.entry_count(), 0);
        assert!(planner.store().store().get("plannerEntries").is_none());
    }
}
