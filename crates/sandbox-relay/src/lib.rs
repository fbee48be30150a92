//! Sandboxed-filesystem conformance guest.
//!
//! The `sandbox-relay` crate implements a probe that runs inside a host
//! sandbox (for example a WASI runtime with `/sandbox` preopened). It opens
//! the fixed resource [`DEFAULT_INPUT_PATH`] through a `cap-std` directory
//! capability, copies it one byte at a time to standard output, and stops
//! at the first failed open, read, or write. The outer harness compares the
//! captured output with its fixture and treats a non-zero exit as a failed
//! conformance check.
//!
//! Nothing is transformed: every byte value, including `0x00`, is written
//! exactly as read. End of resource is reported as `None` from
//! [`ResourceHandle::read_unit`], never as a reserved byte.
//!
//! ```rust,no_run
//! use sandbox_relay::{RelayConfig, run};
//!
//! # fn main() -> Result<(), sandbox_relay::RelayError> {
//! let mut captured = Vec::new();
//! let report = run(&RelayConfig::default(), &mut captured)?;
//! assert_eq!(report.units(), captured.len() as u64);
//! # Ok(()) }
//! ```

mod config;
mod error;
mod relay;
mod resource;
mod sink;
pub mod telemetry;

use std::io::Write;

pub use config::{DEFAULT_INPUT_PATH, DEFAULT_LOG_FILTER, LogFormat, RelayConfig};
pub use error::RelayError;
pub use relay::{ByteRelay, RelayReport};
pub use resource::{ResourceHandle, SandboxedFile, open};
pub use sink::OutputSink;

/// Opens the configured resource and relays it to `writer`.
///
/// # Errors
///
/// Returns [`RelayError::Open`] before anything is written when the
/// resource is unavailable, otherwise the first read or write failure.
pub fn run<W: Write>(config: &RelayConfig, writer: W) -> Result<RelayReport, RelayError> {
    let source = open(config.input_path())?;
    ByteRelay::new(source, OutputSink::new(writer)).run()
}

#[cfg(test)]
mod tests;
