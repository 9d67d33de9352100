//! Scoring and speed rules.
//!
//! Each cleared line is worth a fixed number of points, and the gravity
//! interval shrinks one millisecond per point down to a floor:
//! `interval = max(min_drop_ms, base_drop_ms - score)`.

use thiserror::Error;

use crate::types::{BASE_DROP_MS, LINE_SCORE, MIN_DROP_MS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("minimum drop interval must be at least 1ms")]
    ZeroFloor,
    #[error("minimum drop interval {min_drop_ms}ms exceeds base interval {base_drop_ms}ms")]
    FloorAboveBase { min_drop_ms: u32, base_drop_ms: u32 },
    #[error("line score must be at least 1")]
    ZeroLineScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub base_drop_ms: u32,
    pub min_drop_ms: u32,
    pub line_score: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            base_drop_ms: BASE_DROP_MS,
            min_drop_ms: MIN_DROP_MS,
            line_score: LINE_SCORE,
        }
    }
}

impl Rules {
    /// Check the rule values, returning them unchanged when usable.
    pub fn validate(self) -> Result<Self, RulesError> {
        if self.min_drop_ms == 0 {
            return Err(RulesError::ZeroFloor);
        }
        if self.min_drop_ms > self.base_drop_ms {
            return Err(RulesError::FloorAboveBase {
                min_drop_ms: self.min_drop_ms,
                base_drop_ms: self.base_drop_ms,
            });
        }
        if self.line_score == 0 {
            return Err(RulesError::ZeroLineScore);
        }
        Ok(self)
    }

    /// Gravity interval for a given score, floor-clamped
    pub fn drop_interval_ms(&self, score: u32) -> u32 {
        self.base_drop_ms
            .saturating_sub(score)
            .max(self.min_drop_ms)
    }

    /// Points for clearing `lines` rows at once
    pub fn line_clear_points(&self, lines: u32) -> u32 {
        lines.saturating_mul(self.line_score)
    }
}
