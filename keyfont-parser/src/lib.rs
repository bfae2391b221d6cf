//! # keyfont-parser
//!
//! Rebases glyph tables for the keyfont.
//!
//! The input is a C array initializer where every entry carries a decimal code point and the
//! hexadecimal glyph code it maps to:
//!
//!     49200, /* (0xC030) */
//!
//! Each entry is rewritten with its code point moved into the 16-bit code space the firmware
//! expects, keeping the glyph code verbatim:
//!
//!     128,	/* 0xC030 */
//!
//! File Layout
//!
//!     src/keyfont/remapping   The per-line transform: pattern, rules and state
//!     src/keyfont/formats     The output line template
//!     src/keyfont/driver      The file pass threading state through every line
//!     src/keyfont/error       Errors surfaced by a pass

pub mod keyfont;
