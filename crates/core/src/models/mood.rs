use serde::{Deserialize, Serialize};

/// How the day felt. Stored lowercase (`"happy"`, `"sad"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Neutral,
    Excited,
    Tired,
    Angry,
}

impl Mood {
    /// Every mood, in the order the editor offers them.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Neutral,
        Mood::Excited,
        Mood::Tired,
        Mood::Angry,
    ];

    /// Lowercase name, identical to the persisted form. Search matches against this.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Neutral => "neutral",
            Mood::Excited => "excited",
            Mood::Tired => "tired",
            Mood::Angry => "angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Neutral => "😐",
            Mood::Excited => "🎉",
            Mood::Tired => "😴",
            Mood::Angry => "😠",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
