use goldbach_core::GoldbachError;

/// Errors from a data-collection run.
#[derive(Debug, thiserror::Error)]
pub enum CrossoverError {
    #[error(transparent)]
    Goldbach(#[from] GoldbachError),

    #[error("invalid sampling range: min_n = {min} exceeds max_n = {max}")]
    InvalidRange { min: u64, max: u64 },

    #[error("invalid option --{key}={value}")]
    InvalidOption { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
