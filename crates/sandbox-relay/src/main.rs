//! `read-file` guest entrypoint.
//!
//! Relays `/sandbox/input.txt` to standard output and exits with a failure
//! status on the first failed step.

use std::io::{self, Write};
use std::process::ExitCode;

use sandbox_relay::{ByteRelay, OutputSink, RelayConfig, RelayError, open, telemetry};

fn main() -> ExitCode {
    let config = RelayConfig::default();
    if let Err(error) = telemetry::initialise(&config) {
        writeln!(io::stderr().lock(), "{error}").ok();
    }

    match relay(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(io::stderr().lock(), "{error}").ok();
            ExitCode::FAILURE
        }
    }
}

fn relay(config: &RelayConfig) -> Result<(), RelayError> {
    let source = open(config.input_path())?;
    ByteRelay::new(source, OutputSink::stdout()).run()?;
    Ok(())
}
