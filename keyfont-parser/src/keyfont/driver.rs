//! File pass
//!
//! `Driver` folds [`RemapState`] over the lines of an input stream, writing one formatted entry
//! per line. It never prints: per-line and end-of-run signals go through a [`Progress`] hook
//! supplied by the caller.
//!
//! # Example
//!
//! ```rust
//! use keyfont_parser::keyfont::{Driver, NoProgress, RemapRules};
//!
//! let driver = Driver::new(RemapRules::default());
//! let summary = driver.run_files("input.txt", "output.txt", &mut NoProgress)?;
//! if let Some(hex) = summary.overflow_hex() {
//!     println!("first overflow at {}", hex);
//! }
//! ```

use crate::keyfont::error::RemapError;
use crate::keyfont::formats::write_entry;
use crate::keyfont::lines::TextLines;
use crate::keyfont::remapping::{LineOutcome, NegativeIndexPolicy, RemapRules, RemapState};
use std::fs::{self, File, Permissions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Observer for a running pass.
pub trait Progress {
    /// Called after the entry for line `count` (1-based) has been written.
    fn line_processed(&mut self, _count: usize, _state: &RemapState) {}

    /// Called once after the last line, when the output has been flushed.
    fn finished(&mut self, _summary: &RunSummary) {}
}

/// A [`Progress`] that ignores every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Outcome of a completed pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of input lines, and therefore output lines
    pub lines: usize,
    /// Number of lines that matched the entry pattern
    pub matched: usize,
    /// State after the last line
    pub state: RemapState,
}

impl RunSummary {
    /// Glyph code of the first overflowing entry, if there was one.
    pub fn overflow_hex(&self) -> Option<&str> {
        self.state.overflow_hex()
    }
}

/// Runs the remap over streams or files.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    rules: RemapRules,
    atomic_output: bool,
}

impl Driver {
    pub fn new(rules: RemapRules) -> Self {
        Self {
            rules,
            atomic_output: false,
        }
    }

    /// Write file output to a temporary file and move it into place only on success.
    pub fn atomic_output(mut self, enabled: bool) -> Self {
        self.atomic_output = enabled;
        self
    }

    pub fn rules(&self) -> &RemapRules {
        &self.rules
    }

    /// Remap every line of `reader` into `writer`.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Lines that do not match are not errors; they
    /// repeat the previous entry. The writer is flushed before [`Progress::finished`] is called.
    pub fn run_stream<R, W, P>(
        &self,
        reader: R,
        mut writer: W,
        progress: &mut P,
    ) -> Result<RunSummary, RemapError>
    where
        R: BufRead,
        W: Write,
        P: Progress + ?Sized,
    {
        self.rules.validate()?;

        let mut state = RemapState::default();
        let mut lines = 0;
        let mut matched = 0;

        for line in TextLines::new(reader) {
            let line = line.map_err(RemapError::Read)?;
            let (next, outcome) = state.advance(&line, &self.rules);
            state = next;
            lines += 1;

            if outcome == LineOutcome::Remapped {
                matched += 1;
                if state.index < 0 && self.rules.negative_index == NegativeIndexPolicy::Reject {
                    return Err(RemapError::NegativeIndex {
                        line: lines,
                        index: state.index,
                    });
                }
            }

            write_entry(&mut writer, &state).map_err(RemapError::Write)?;
            progress.line_processed(lines, &state);
        }
        writer.flush().map_err(RemapError::Write)?;

        let summary = RunSummary {
            lines,
            matched,
            state,
        };
        progress.finished(&summary);
        Ok(summary)
    }

    /// Remap the file at `input` into the file at `output`, replacing it.
    ///
    /// Both files are closed before this returns, whether the pass succeeded or not. Without
    /// atomic output a failed pass leaves a partially written `output` behind.
    pub fn run_files<P>(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        progress: &mut P,
    ) -> Result<RunSummary, RemapError>
    where
        P: Progress + ?Sized,
    {
        let input = input.as_ref();
        let output = output.as_ref();

        let reader = File::open(input)
            .map(BufReader::new)
            .map_err(|source| RemapError::Io {
                path: input.to_path_buf(),
                source,
            })?;

        if !self.atomic_output {
            let writer = File::create(output)
                .map(BufWriter::new)
                .map_err(|source| RemapError::Io {
                    path: output.to_path_buf(),
                    source,
                })?;
            return self
                .run_stream(reader, writer, progress)
                .map_err(|e| e.at_paths(input, output));
        }

        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = stage_output(dir, output).map_err(|source| RemapError::Io {
            path: output.to_path_buf(),
            source,
        })?;
        let summary = self
            .run_stream(reader, BufWriter::new(staged.as_file_mut()), progress)
            .map_err(|e| e.at_paths(input, output))?;
        staged.persist(output).map_err(|e| RemapError::Io {
            path: output.to_path_buf(),
            source: e.error,
        })?;
        Ok(summary)
    }
}

/// Create the temporary file an atomic pass writes into.
///
/// The staged file gets the permissions `output` already has, or those a fresh `File::create`
/// would give it, so replacing the output never changes who can read it.
fn stage_output(dir: &Path, output: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(output).ok().map(|meta| meta.permissions());
    let mut builder = Builder::new();
    if existing.is_none() {
        if let Some(permissions) = created_file_permissions() {
            builder.permissions(permissions);
        }
    }
    let staged = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions)?;
    }
    Ok(staged)
}

/// Mode requested by `File::create`; the process umask still applies.
#[cfg(unix)]
fn created_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn created_file_permissions() -> Option<Permissions> {
    None
}
