//! Half-open sampling intervals used when spawning entities.

use crate::{TdError, TdResult};

/// A half-open interval `[min, max)` that spawn-time attributes are drawn from.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnRange {
    pub min: f32,
    pub max: f32,
}

impl SpawnRange {
    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `true` if `value` lies in `[min, max)`.
    #[inline]
    pub fn contains(self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    /// Reject empty, inverted, or non-finite ranges.
    ///
    /// `what` names the attribute in the resulting error.
    pub fn validate(self, what: &'static str) -> TdResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(TdError::InvalidRange { what, min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Like [`validate`](Self::validate), additionally requiring `min > 0`.
    pub fn validate_positive(self, what: &'static str) -> TdResult<()> {
        self.validate(what)?;
        if self.min <= 0.0 {
            return Err(TdError::NotPositive { what, value: self.min });
        }
        Ok(())
    }
}
