//! Relay configuration.
//!
//! The guest binary has no flag or environment surface, so it always runs
//! with [`RelayConfig::default`]. The type stays configurable so tests and
//! embedding hosts can point the relay at a different sandbox directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Fixed input path exposed by the host sandbox.
pub const DEFAULT_INPUT_PATH: &str = "/sandbox/input.txt";

/// Default log filter. Keeps successful runs silent on stderr.
pub const DEFAULT_LOG_FILTER: &str = "error";

/// Formatter used for diagnostics written to standard error.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Settings consumed by the relay and its telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    input_path: Utf8PathBuf,
    log_filter: String,
    log_format: LogFormat,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            input_path: Utf8PathBuf::from(DEFAULT_INPUT_PATH),
            log_filter: String::from(DEFAULT_LOG_FILTER),
            log_format: LogFormat::default(),
        }
    }
}

impl RelayConfig {
    /// Replaces the input path.
    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Replaces the tracing filter expression.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces the log output format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Path of the resource to relay.
    #[must_use]
    pub fn input_path(&self) -> &Utf8Path {
        &self.input_path
    }

    /// Tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Splits the input path into the sandbox directory and the file name
    /// opened beneath it.
    ///
    /// A bare file name resolves against `.`. Returns `None` when the path
    /// has no file name, for example `/`.
    #[must_use]
    pub fn sandbox_parts(&self) -> Option<(&Utf8Path, &str)> {
        split_sandbox_path(&self.input_path)
    }
}

pub(crate) fn split_sandbox_path(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Some((dir, name))
}
