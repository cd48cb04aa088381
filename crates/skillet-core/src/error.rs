use thiserror::Error;

/// Unified error type for the entire skillet workspace.
#[derive(Error, Debug)]
pub enum SkilletError {
    // ── Corpus errors ──────────────────────────────────────────
    #[error("corpus error: {0}")]
    Corpus(String),

    #[error("skill '{name}': {reason}")]
    Skill { name: String, reason: String },

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    // ── Validator input errors ─────────────────────────────────
    // Bad input handed to a validator (missing file, unparseable JSON).
    // The CLI maps these to exit code 2.
    #[error("input error: {0}")]
    Input(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkilletError>;
