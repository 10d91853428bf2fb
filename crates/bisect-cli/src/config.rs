//! CLI configuration
//!
//! Optional TOML file. Looked up at `--config <PATH>` when given (which
//! must exist), otherwise `bisect.toml` in the working directory, otherwise
//! defaults. Command-line flags override file values.

use crate::error::CliError;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Config file looked up in the working directory
pub(crate) const DEFAULT_CONFIG_FILE: &str = "bisect.toml";

/// Settings read from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    /// Default output format
    pub(crate) format: OutputFormat,
    /// Verify the sorted precondition before searching
    pub(crate) checked: bool,
    /// Render the bisection path
    pub(crate) trace: bool,
    /// Default log level when `RUST_LOG` is unset
    pub(crate) log_level: String,
    /// Emit logs as JSON
    pub(crate) log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            checked: false,
            trace: false,
            log_level: "warn".to_string(),
            log_json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration for this invocation
    ///
    /// # Errors
    /// Returns error if an explicit path is unreadable, or any file found
    /// is malformed
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::discover(Path::new(".")),
        }
    }

    /// Load `bisect.toml` from `dir` if present, else defaults
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed
    pub(crate) fn discover(dir: &Path) -> Result<Self, CliError> {
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::from_file(&candidate)
        } else {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Read and parse a config file
    ///
    /// # Errors
    /// Returns [`CliError::Io`] or [`CliError::Config`]
    pub(crate) fn from_file(path: &Path) -> Result<Self, CliError> {
        let raw = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
        let config = Self::parse(&raw, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config text; `origin` is only used in error messages
    ///
    /// # Errors
    /// Returns [`CliError::Config`] on malformed TOML, unknown keys, or an
    /// unrecognised log level
    pub(crate) fn parse(raw: &str, origin: &Path) -> Result<Self, CliError> {
        let config: Self = toml::from_str(raw).map_err(|source| CliError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        config.base_level()?;
        Ok(config)
    }

    /// Configured log level
    ///
    /// # Errors
    /// Returns [`CliError::InvalidLogLevel`] if `log_level` is not a level name
    pub(crate) fn base_level(&self) -> Result<LevelFilter, CliError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| CliError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Configured level raised by `verbosity` steps, capped at `TRACE`
    ///
    /// # Errors
    /// Same as [`CliConfig::base_level`]
    pub(crate) fn effective_level(&self, verbosity: u8) -> Result<LevelFilter, CliError> {
        const LADDER: [LevelFilter; 6] = [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ];

        let base = self.base_level()?;
        let start = LADDER.iter().position(|l| *l == base).unwrap_or(2);
        let raised = (start + usize::from(verbosity)).min(LADDER.len() - 1);
        Ok(LADDER[raised])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn origin() -> &'static Path {
        Path::new("test.toml")
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config = CliConfig::parse("", origin()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn full_file() {
        let raw = r#"
            format = "json"
            checked = true
            trace = true
            log_level = "debug"
            log_json = true
        "#;
        let config = CliConfig::parse(raw, origin()).unwrap();

        assert_eq!(
            config,
            CliConfig {
                format: OutputFormat::Json,
                checked: true,
                trace: true,
                log_level: "debug".to_string(),
                log_json: true,
            }
        );
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = CliConfig::parse("colour = true", origin()).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn bad_format_rejected() {
        let err = CliConfig::parse(r#"format = "yaml""#, origin()).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }

    #[test]
    fn bad_log_level_rejected() {
        let err = CliConfig::parse(r#"log_level = "loud""#, origin()).unwrap_err();
        assert!(matches!(err, CliError::InvalidLogLevel(level) if level == "loud"));
    }

    #[test]
    fn verbosity_raises_level() {
        let config = CliConfig::default();
        assert_eq!(config.effective_level(0).unwrap(), LevelFilter::WARN);
        assert_eq!(config.effective_level(1).unwrap(), LevelFilter::INFO);
        assert_eq!(config.effective_level(2).unwrap(), LevelFilter::DEBUG);
        assert_eq!(config.effective_level(9).unwrap(), LevelFilter::TRACE);
    }

    #[test]
    fn discover_uses_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CliConfig::discover(dir.path()).unwrap(), CliConfig::default());
    }

    #[test]
    fn discover_reads_bisect_toml() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        writeln!(file, "trace = true").unwrap();

        let config = CliConfig::discover(dir.path()).unwrap();
        assert!(config.trace);
        assert!(!config.checked);
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
