//! Optional configuration file, read only when `--config` is given.
//!
//! # Sections
//!
//! | Section    | Purpose                                   |
//! |------------|-------------------------------------------|
//! | `[deploy]` | Shell used to run each step               |
//! | `[log]`    | Verbose output                            |
//!
//! ```toml
//! [deploy]
//! shell = ["sh", "-c"]
//!
//! [log]
//! verbose = true
//! ```
//!
//! Branch names and the remote are fixed and deliberately absent here.

mod error;

pub use error::ConfigError;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Step execution settings
    pub deploy: DeploySection,

    /// Output settings
    pub log: LogSection,
}

/// `[deploy]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeploySection {
    /// Program and leading arguments; the step's command line is appended.
    pub shell: Vec<String>,
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            shell: default_shell(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Print executed commands and their exit statuses.
    pub verbose: bool,
}

/// Platform shell used when none is configured.
fn default_shell() -> Vec<String> {
    let shell: &[&str] = if cfg!(windows) {
        &["cmd", "/C"]
    } else {
        &["sh", "-c"]
    };
    shell.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Build the configuration from CLI arguments.
    ///
    /// Reads `--config` when present, applies `--verbose`, then validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)
                .with_context(|| format!("failed to load config `{}`", path.display()))?,
            None => Self::default(),
        };

        config.log.verbose |= cli.verbose;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            println!("- {field}");
        }
    }

    /// Check that the configured shell can be started.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(program) = self.deploy.shell.first() else {
            return Err(ConfigError::Validation("`deploy.shell` is empty".into()));
        };
        if program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "`deploy.shell` program name is blank".into(),
            ));
        }

        which::which(program).map_err(|err| {
            ConfigError::Validation(format!("shell `{program}` not found on PATH: {err}"))
        })?;
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
