//! Remap rules
//!
//! The numeric constants of the transform. The defaults rebase a glyph table whose code points
//! start at `0xBFB0` into the firmware's 16-bit code space, leaving the `512` placeholder entry
//! where it is.

use crate::keyfont::error::RemapError;
use serde::Deserialize;

pub const DEFAULT_SPECIAL_INDEX: i64 = 512;
pub const DEFAULT_OFFSET: i64 = 0xBFB0;
pub const DEFAULT_WRAP_BOUNDARY: i64 = 0x10000;

/// What to do when a shifted index ends up below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeIndexPolicy {
    /// Write the negative index as-is
    #[default]
    Allow,
    /// Abort the pass with [`RemapError::NegativeIndex`]
    Reject,
}

/// Constants injected into the line transform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemapRules {
    /// Index that is written unchanged and never overflows
    pub special_index: i64,
    /// Subtracted from every other index
    pub offset: i64,
    /// Overflow threshold, also the amount subtracted on overflow
    pub wrap_boundary: i64,
    #[serde(default)]
    pub negative_index: NegativeIndexPolicy,
}

impl RemapRules {
    pub fn new(special_index: i64, offset: i64, wrap_boundary: i64) -> Self {
        Self {
            special_index,
            offset,
            wrap_boundary,
            negative_index: NegativeIndexPolicy::Allow,
        }
    }

    pub fn with_negative_index(mut self, policy: NegativeIndexPolicy) -> Self {
        self.negative_index = policy;
        self
    }

    /// Check the rules before a pass.
    ///
    /// The wrap boundary must be positive so that subtracting it from an overflowing index
    /// stays in range.
    pub fn validate(&self) -> Result<(), RemapError> {
        if self.wrap_boundary <= 0 {
            return Err(RemapError::InvalidRules(format!(
                "wrap boundary must be positive, got {}",
                self.wrap_boundary
            )));
        }
        Ok(())
    }
}

impl Default for RemapRules {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIAL_INDEX, DEFAULT_OFFSET, DEFAULT_WRAP_BOUNDARY)
    }
}
