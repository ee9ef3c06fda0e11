use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::mood::Mood;
use super::weather::Weather;

/// Upper bound of the water-intake control (glasses per day).
pub const MAX_WATER_INTAKE: u8 = 6;

/// Date format used for keys, search and the persisted `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A form value that may have been saved as either a number or free text
/// (exercise minutes/steps, money amounts).
///
/// Loading is lenient: `null` becomes empty text and booleans are kept as
/// their text form, so one odd field doesn't discard a whole day.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Number(n) => n.serialize(serializer),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => FieldValue::Number(n),
            Value::String(s) => FieldValue::Text(s),
            Value::Null => FieldValue::default(),
            other => FieldValue::Text(other.to_string()),
        })
    }
}

/// One task on the day's list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, deserialize_with = "null_as_default")]
    pub minutes: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: FieldValue,
}

/// Money in and out for the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Money {
    #[serde(default, deserialize_with = "null_as_default")]
    pub income: FieldValue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expense: FieldValue,
    /// Where the income came from
    #[serde(default, rename = "from", deserialize_with = "null_as_default")]
    pub source: String,
    /// What the expense was for
    #[serde(default, rename = "for", deserialize_with = "null_as_default")]
    pub purpose: String,
}

/// The planner record for a single calendar day.
///
/// `date` is the primary key: the store keeps at most one entry per date and
/// saving replaces the whole record. Every other field is optional on load:
/// a missing key or an explicit `null` falls back to the default, so records
/// written by older versions (or with fields blanked out) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    pub date: NaiveDate,

    #[serde(default, deserialize_with = "null_as_default")]
    pub weather: Weather,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mood: Mood,

    /// Task list, in the order the tasks were added
    #[serde(default, deserialize_with = "null_as_default")]
    pub todos: Vec<TodoItem>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reminders: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub breakfast: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lunch: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dinner: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snacks: String,

    /// Glasses of water, always within `0..=MAX_WATER_INTAKE`
    #[serde(default, deserialize_with = "deserialize_water_intake")]
    pub water_intake: u8,

    #[serde(default, deserialize_with = "null_as_default")]
    pub exercise: Exercise,

    #[serde(default, deserialize_with = "null_as_default")]
    pub gratitude: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub money: Money,

    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,

    /// Plans for the next day
    #[serde(default, deserialize_with = "null_as_default")]
    pub tomorrow: String,
}

impl DailyEntry {
    /// A blank entry as the editor presents it for a date that has never
    /// been saved: sunny, happy, one empty task, everything else empty.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weather: Weather::default(),
            mood: Mood::default(),
            todos: vec![TodoItem::default()],
            goals: String::new(),
            reminders: String::new(),
            breakfast: String::new(),
            lunch: String::new(),
            dinner: String::new(),
            snacks: String::new(),
            water_intake: 0,
            exercise: Exercise::default(),
            gratitude: String::new(),
            money: Money::default(),
            notes: String::new(),
            tomorrow: String::new(),
        }
    }

    /// The date as `YYYY-MM-DD`, the form used in storage keys and search.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    // ── Draft editing ───────────────────────────────────────────────

    /// Append an empty, uncompleted task.
    pub fn add_todo(&mut self) {
        self.todos.push(TodoItem::default());
    }

    /// Remove the task at `index`. Returns `false` if there was none.
    pub fn remove_todo(&mut self, index: usize) -> bool {
        if index < self.todos.len() {
            self.todos.remove(index);
            true
        } else {
            false
        }
    }

    pub fn set_todo_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.todos.get_mut(index) {
            Some(todo) => {
                todo.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_todo_completed(&mut self, index: usize, completed: bool) -> bool {
        match self.todos.get_mut(index) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Set water intake, clamped to `0..=MAX_WATER_INTAKE`.
    pub fn set_water_intake(&mut self, glasses: u8) {
        self.water_intake = glasses.min(MAX_WATER_INTAKE);
    }

    /// Number of completed tasks (the "done" half of the done/total badge).
    pub fn completed_todos(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

/// Accepts any JSON number, a numeric string, or `null`, and clamps the
/// result into the water control's range. Unusable values read as 0.
fn deserialize_water_intake<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(raw.map(clamp_water_intake).unwrap_or(0))
}

fn clamp_water_intake(value: f64) -> u8 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= f64::from(MAX_WATER_INTAKE) {
        MAX_WATER_INTAKE
    } else {
        value as u8
    }
}

/// Reads an explicit `null` the same as a missing key: the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
