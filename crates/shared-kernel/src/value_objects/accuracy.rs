// crates/shared-kernel/src/value_objects/accuracy.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fraction of correct predictions in `[0, 1]`.
///
/// NaN marks a slice that was not evaluated (too few samples); it serializes
/// to `null` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accuracy(f64);

impl Accuracy {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn not_evaluated() -> Self {
        Self(f64::NAN)
    }

    /// `correct / total`, or not-evaluated when `total == 0`.
    pub fn from_counts(correct: usize, total: usize) -> Self {
        if total == 0 {
            Self::not_evaluated()
        } else {
            #[allow(clippy::cast_precision_loss)]
            Self(correct as f64 / total as f64)
        }
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_evaluated(self) -> bool {
        !self.0.is_nan()
    }
}

impl From<Accuracy> for f64 {
    fn from(value: Accuracy) -> Self {
        value.0
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_evaluated() { write!(f, "{:.3}", self.0) } else { f.write_str("nan") }
    }
}
