//! Output line template
//!
//!     Every input line produces exactly one output line of the form
//!
//!         ␠␠<index>,<TAB>/* <hex> */<LF>
//!
//!     The index is written in plain decimal (a leading minus sign when negative, no padding),
//!     the glyph code exactly as it was captured. Downstream tooling splices these lines into
//!     a C source file byte for byte, so the layout is fixed.

use crate::keyfont::remapping::RemapState;
use std::io::{self, Write};

/// Render one output line, trailing newline included.
pub fn format_line(index: i64, hex: &str) -> String {
    format!("  {},\t/* {} */\n", index, hex)
}

/// Write the entry held by `state` to `writer`.
pub fn write_entry<W: Write + ?Sized>(writer: &mut W, state: &RemapState) -> io::Result<()> {
    writer.write_all(format_line(state.index, &state.hex).as_bytes())
}
