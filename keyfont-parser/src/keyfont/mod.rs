//! Main module for keyfont library functionality

pub mod driver;
pub mod error;
pub mod formats;
pub mod lines;
pub mod remapping;

pub use driver::{Driver, NoProgress, Progress, RunSummary};
pub use error::RemapError;
pub use remapping::{transform, LineOutcome, NegativeIndexPolicy, RemapRules, RemapState};
