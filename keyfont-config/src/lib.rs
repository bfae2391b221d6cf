//! Layered configuration for keyfont.
//!
//! Precedence, lowest first: `defaults/keyfont.default.toml` (compiled in), `keyfont.toml` in
//! the working directory, a file named on the command line, then single-key overrides from
//! flags. The merged tree deserializes into [`KeyfontConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use keyfont_parser::keyfont::{Driver, RemapRules};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/keyfont.default.toml");

/// Top-level configuration consumed by keyfont applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyfontConfig {
    pub io: IoConfig,
    pub remap: RemapRules,
    pub report: ReportConfig,
}

impl KeyfontConfig {
    /// Build a driver carrying the configured rules and output mode.
    pub fn driver(&self) -> Driver {
        Driver::new(self.remap.clone()).atomic_output(self.io.atomic_output)
    }
}

/// Where the glyph tables live.
#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    pub input_path: String,
    pub output_path: String,
    pub atomic_output: bool,
}

/// Console reporting knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub progress: bool,
    pub summary: SummaryFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    Text,
    Json,
}

/// Name of the per-directory configuration file picked up by [`Loader::with_local_file`].
pub const LOCAL_FILE: &str = "keyfont.toml";

/// Layers configuration sources, lowest precedence first.
///
/// Every loader starts from the embedded defaults; each later layer only needs the keys it
/// changes.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer `keyfont.toml` from `dir`, if there is one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        self.layer_toml(dir.as_ref().join(LOCAL_FILE), false)
    }

    /// Layer a file the user asked for explicitly; [`Loader::build`] fails if it is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path, true)
    }

    fn layer_toml(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `remap.offset`. Overrides beat every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<KeyfontConfig, ConfigError> {
        let config = self.builder.build()?;
        config.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyfont_parser::keyfont::NegativeIndexPolicy;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert_eq!(config.io.input_path, "input.txt");
        assert_eq!(config.io.output_path, "output.txt");
        assert!(!config.io.atomic_output);
        assert_eq!(config.remap, RemapRules::default());
        assert!(config.report.progress);
        assert_eq!(config.report.summary, SummaryFormat::Text);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("remap.offset", 16i64)
            .expect("override to apply")
            .set_override("remap.negative_index", "reject")
            .expect("override to apply")
            .set_override("report.summary", "json")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.remap.offset, 16);
        assert_eq!(config.remap.special_index, 512);
        assert_eq!(config.remap.negative_index, NegativeIndexPolicy::Reject);
        assert_eq!(config.report.summary, SummaryFormat::Json);
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("keyfont.toml");
        fs::write(
            &path,
            "[io]\noutput_path = \"glyphs.inc\"\n\n[remap]\nwrap_boundary = 0x100\n",
        )
        .expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.io.output_path, "glyphs.inc");
        assert_eq!(config.io.input_path, "input.txt");
        assert_eq!(config.remap.wrap_boundary, 0x100);
        assert_eq!(config.driver().rules().wrap_boundary, 0x100);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_local_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Loader::new()
            .with_local_file(dir.path())
            .build()
            .expect("config to build");
        assert_eq!(config.remap, RemapRules::default());
    }

    #[test]
    fn explicit_file_beats_local_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(LOCAL_FILE), "[remap]\noffset = 1\nspecial_index = 2\n")
            .expect("write local config");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&explicit, "[remap]\noffset = 3\n").expect("write config");

        let config = Loader::new()
            .with_local_file(dir.path())
            .with_file(&explicit)
            .build()
            .expect("config to build");
        assert_eq!(config.remap.offset, 3);
        assert_eq!(config.remap.special_index, 2);
    }
}
