//! Console reporting
//!
//! Implements the library's progress hook on top of stdout: a running line counter while the
//! pass runs and a final report once it is done.

use keyfont_config::SummaryFormat;
use keyfont_parser::keyfont::{Progress, RemapState, RunSummary};

pub struct ConsoleProgress {
    show_counter: bool,
    summary: SummaryFormat,
}

impl ConsoleProgress {
    pub fn new(show_counter: bool, summary: SummaryFormat) -> Self {
        Self {
            show_counter,
            summary,
        }
    }
}

impl Progress for ConsoleProgress {
    fn line_processed(&mut self, count: usize, _state: &RemapState) {
        if self.show_counter {
            println!("{}", count);
        }
    }

    fn finished(&mut self, summary: &RunSummary) {
        match self.summary {
            SummaryFormat::Text => {
                if let Some(hex) = summary.overflow_hex() {
                    println!("first u16 overflow at {}", hex);
                }
            }
            SummaryFormat::Json => println!("{}", summary_to_json(summary)),
        }
    }
}

/// Convert a run summary to JSON-serializable format
pub fn summary_to_json(summary: &RunSummary) -> serde_json::Value {
    use serde_json::json;

    json!({
        "lines": summary.lines,
        "matched": summary.matched,
        "overflow": summary.state.overflow_seen,
        "overflow_hex": summary.overflow_hex(),
    })
}
