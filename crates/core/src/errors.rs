use thiserror::Error;

/// Unified error type for the entire daily-planner-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Absent or corrupt stored data is never reported through this type:
/// reads degrade to empty/absent instead. Only write-side failures of the
/// storage medium and caller input problems surface here.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage medium ──────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Input ───────────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
