//! Motif construction errors

use crate::float_types::Real;

/// Everything that can go wrong while generating a motif.
///
/// Only the sampling constructors can fail; embedding, projection and
/// coincidence search are total over well-formed input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotifError {
    /// (InvalidParameter) A radius, sample count or ratio is out of range
    #[error("(InvalidParameter) `{name}` {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl MotifError {
    pub(crate) fn non_positive(name: &'static str, value: Real) -> Self {
        MotifError::InvalidParameter {
            name,
            reason: format!("must be a finite value > 0, got {value}"),
        }
    }

    pub(crate) fn zero_count(name: &'static str) -> Self {
        MotifError::InvalidParameter {
            name,
            reason: "must be at least 1".to_string(),
        }
    }
}
