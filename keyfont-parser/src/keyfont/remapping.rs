//! Remapping
//!
//!     One input line either matches the glyph entry pattern or it does not. A match moves the
//!     captured code point by the configured offset and records the glyph code. A miss leaves
//!     the state untouched, so the output repeats the previous entry for that line.
//!
//!     The state is a plain value: [`RemapState::advance`] consumes it and hands back the next
//!     one, which lets the driver fold it over the input without any shared mutation.
//!
//! Overflow
//!
//!     A shifted index at or above the wrap boundary is an overflow event. It is folded back by
//!     subtracting the boundary once. Only the glyph code of the first such event is kept for
//!     the final report.

pub mod pattern;
pub mod rules;
pub mod state;

pub use pattern::{match_line, LineMatch};
pub use rules::{NegativeIndexPolicy, RemapRules};
pub use state::{transform, LineOutcome, RemapState, INITIAL_HEX};
