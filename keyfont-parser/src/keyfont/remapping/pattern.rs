//! Glyph entry pattern
//!
//! An entry is a decimal code point, a comma and a block comment holding the glyph code in
//! parentheses. Only the start of the line is anchored; anything after the comment is ignored.
//! The code point must be ASCII digits: other Unicode decimal digits do not make an entry.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled regex for a single glyph entry.
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]+),\s*/\*\s*\(\s*(0x[0-9a-fA-F]+)\s*\)\s*\*/").unwrap()
});

/// The raw captures of a matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// Decimal code point, before any offset is applied
    pub index: i64,
    /// Glyph code exactly as written, `0x` prefix included
    pub hex: &'a str,
}

/// Match a line against the glyph entry pattern.
///
/// A code point too large for `i64` is reported as no match.
pub fn match_line(line: &str) -> Option<LineMatch<'_>> {
    let captures = LINE_PATTERN.captures(line)?;
    let index = captures.get(1)?.as_str().parse().ok()?;
    let hex = captures.get(2)?.as_str();
    Some(LineMatch { index, hex })
}
