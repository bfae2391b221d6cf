//! Remap state threaded through a pass

use super::pattern::match_line;
use super::rules::RemapRules;

/// Glyph code used before the first matching line.
pub const INITIAL_HEX: &str = "0x0000";

/// Whether a line took part in the remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line matched; index and glyph code were replaced
    Remapped,
    /// The line did not match; the previous entry is echoed
    Passthrough,
}

/// The state carried from one line to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapState {
    /// Index of the most recent matching line, after offset and wrap
    pub index: i64,
    /// Glyph code of the most recent matching line, verbatim
    pub hex: String,
    /// Set by the first overflow and never cleared
    pub overflow_seen: bool,
    /// Glyph code of the line that first overflowed
    pub overflow_hex: String,
}

impl Default for RemapState {
    fn default() -> Self {
        Self {
            index: 0,
            hex: INITIAL_HEX.to_string(),
            overflow_seen: false,
            overflow_hex: INITIAL_HEX.to_string(),
        }
    }
}

impl RemapState {
    /// Consume this state and produce the one following `line`.
    pub fn advance(self, line: &str, rules: &RemapRules) -> (Self, LineOutcome) {
        let Some(found) = match_line(line) else {
            return (self, LineOutcome::Passthrough);
        };

        let special = found.index == rules.special_index;
        let index = if special {
            found.index
        } else {
            match found.index.checked_sub(rules.offset) {
                Some(shifted) => shifted,
                None => return (self, LineOutcome::Passthrough),
            }
        };

        let mut next = Self {
            index,
            hex: found.hex.to_string(),
            ..self
        };
        if !special && next.index >= rules.wrap_boundary {
            if !next.overflow_seen {
                next.overflow_hex = found.hex.to_string();
                next.overflow_seen = true;
            }
            next.index -= rules.wrap_boundary;
        }
        (next, LineOutcome::Remapped)
    }

    /// The glyph code of the first overflow, if any line overflowed.
    pub fn overflow_hex(&self) -> Option<&str> {
        self.overflow_seen.then_some(self.overflow_hex.as_str())
    }
}

/// Apply one line to `state`, discarding whether it matched.
pub fn transform(line: &str, state: RemapState, rules: &RemapRules) -> RemapState {
    state.advance(line, rules).0
}
