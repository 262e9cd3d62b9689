//! Error taxonomy shared by every core operation.

use num_integer::Integer;

/// Errors raised by the counting, prediction and bias operations.
///
/// All validation happens before any computation starts; no partial
/// results are returned alongside an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoldbachError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("bias is undefined when the exact Goldbach count is zero")]
    UndefinedBias,
}

pub type Result<T> = std::result::Result<T, GoldbachError>;

/// Reject anything outside the Goldbach domain (even N >= 4).
pub(crate) fn ensure_goldbach_domain(n: u64) -> Result<()> {
    if n.is_odd() {
        return Err(GoldbachError::InvalidArgument(format!(
            "N must be even, got {n}"
        )));
    }
    if n < 4 {
        return Err(GoldbachError::InvalidArgument(format!(
            "N must be at least 4, got {n}"
        )));
    }
    Ok(())
}
