//! Line scenarios for the remap transform
//!
//! Each case feeds a short glyph table through a fresh driver and checks the exact bytes of
//! the output along with the overflow report.

use keyfont_parser::keyfont::{Driver, NoProgress, RunSummary};
use rstest::rstest;
use std::io::Cursor;

fn remap(input: &str) -> (String, RunSummary) {
    let mut out = Vec::new();
    let summary = Driver::default()
        .run_stream(Cursor::new(input), &mut out, &mut NoProgress)
        .expect("in-memory pass to succeed");
    (String::from_utf8(out).expect("output to be utf-8"), summary)
}

#[rstest]
#[case::offset("  49200, /* (0xC030) */\n", "  128,\t/* 0xC030 */\n")]
#[case::special_index("   512, /* (0x0200) */\n", "  512,\t/* 0x0200 */\n")]
#[case::below_boundary("65600, /* (0xFFAA) */\n", "  16528,\t/* 0xFFAA */\n")]
#[case::at_boundary("114608, /* (0xABCD) */\n", "  0,\t/* 0xABCD */\n")]
#[case::lowercase_hex("49201, /* (0xc031) */\n", "  129,\t/* 0xc031 */\n")]
#[case::negative("100, /* (0x0064) */\n", "  -48972,\t/* 0x0064 */\n")]
#[case::zero_offset_result("49072, /* (0xBFB0) */\n", "  0,\t/* 0xBFB0 */\n")]
fn test_single_entry(#[case] input: &str, #[case] expected: &str) {
    let (out, summary) = remap(input);
    assert_eq!(out, expected);
    assert_eq!(summary.lines, 1);
    assert_eq!(summary.matched, 1);
}

#[rstest]
#[case::no_overflow("  49200, /* (0xC030) */\n   512, /* (0x0200) */\n", None)]
#[case::single("114608, /* (0xABCD) */\n", Some("0xABCD"))]
#[case::first_of_many(
    "49200, /* (0xC030) */\n114610, /* (0x0002) */\n114611, /* (0x0003) */\n",
    Some("0x0002")
)]
#[case::special_never_overflows("512, /* (0x0200) */\n", None)]
fn test_overflow_report(#[case] input: &str, #[case] expected: Option<&str>) {
    let (_, summary) = remap(input);
    assert_eq!(summary.overflow_hex(), expected);
    assert_eq!(summary.state.overflow_seen, expected.is_some());
}

#[test]
fn test_garbage_after_entry_repeats_it() {
    let (out, summary) = remap("  49200, /* (0xC030) */\ngarbage text\n");
    assert_eq!(out, "  128,\t/* 0xC030 */\n  128,\t/* 0xC030 */\n");
    assert_eq!(summary.lines, 2);
    assert_eq!(summary.matched, 1);
}

#[test]
fn test_full_table() {
    let input = "\
unsigned short glyphs[] = {
  49200, /* (0xC030) */
    512, /* (0x0200) */
  65600, /* (0xFFAA) */
 114608, /* (0xABCD) */
 114609, /* (0xABCE) */
};
";
    let (out, summary) = remap(input);
    let expected = concat!(
        "  0,\t/* 0x0000 */\n",
        "  128,\t/* 0xC030 */\n",
        "  512,\t/* 0x0200 */\n",
        "  16528,\t/* 0xFFAA */\n",
        "  0,\t/* 0xABCD */\n",
        "  1,\t/* 0xABCE */\n",
        "  1,\t/* 0xABCE */\n",
    );
    assert_eq!(out, expected);
    assert_eq!(summary.lines, 7);
    assert_eq!(summary.matched, 5);
    assert_eq!(summary.overflow_hex(), Some("0xABCD"));
}

#[rstest]
#[case::lf("49200, /* (0xC030) */\n512, /* (0x0200) */\n")]
#[case::crlf("49200, /* (0xC030) */\r\n512, /* (0x0200) */\r\n")]
#[case::cr("49200, /* (0xC030) */\r512, /* (0x0200) */\r")]
fn test_line_endings_give_one_entry_per_line(#[case] input: &str) {
    let (out, summary) = remap(input);
    assert_eq!(out, "  128,\t/* 0xC030 */\n  512,\t/* 0x0200 */\n");
    assert_eq!(summary.lines, 2);
}
