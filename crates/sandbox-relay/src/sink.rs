//! Append-only output sink.

use std::io::{self, ErrorKind, StdoutLock, Write};

use tracing::warn;

use crate::error::RelayError;

/// Destination that accepts one unit at a time.
#[derive(Debug)]
pub struct OutputSink<W> {
    writer: W,
    written: u64,
}

impl OutputSink<StdoutLock<'static>> {
    /// Locks the process's standard output for exclusive use.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> OutputSink<W> {
    /// Wraps `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Writes exactly one unit.
    ///
    /// A write that accepts no bytes is a failure, never retried. Only
    /// interrupted writes are reissued.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Write`] when the writer rejects the unit.
    pub fn write_unit(&mut self, unit: u8) -> Result<(), RelayError> {
        loop {
            match self.writer.write(&[unit]) {
                Ok(0) => {
                    return Err(self.fail(io::Error::new(
                        ErrorKind::WriteZero,
                        "output sink accepted no bytes",
                    )));
                }
                Ok(_) => {
                    self.written += 1;
                    return Ok(());
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => return Err(self.fail(error)),
            }
        }
    }

    /// Flushes buffered units and releases the writer.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Write`] when the flush fails.
    pub fn finish(mut self) -> Result<W, RelayError> {
        match self.writer.flush() {
            Ok(()) => Ok(self.writer),
            Err(error) => Err(self.fail(error)),
        }
    }

    /// Number of units accepted so far.
    #[must_use]
    pub const fn written(&self) -> u64 {
        self.written
    }

    fn fail(&self, error: io::Error) -> RelayError {
        warn!(offset = self.written, %error, "output sink rejected write");
        RelayError::write(self.written, error)
    }
}
