//! The byte relay control loop.

use std::io::{Read, Write};

use tracing::debug;

use crate::error::RelayError;
use crate::resource::ResourceHandle;
use crate::sink::OutputSink;

/// Summary of a completed relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayReport {
    units: u64,
}

impl RelayReport {
    /// Number of units copied from the resource to the sink.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.units
    }
}

/// Copies every unit of a resource to a sink, stopping at the first failure.
#[derive(Debug)]
pub struct ByteRelay<R, W> {
    source: ResourceHandle<R>,
    sink: OutputSink<W>,
}

impl<R: Read, W: Write> ByteRelay<R, W> {
    /// Pairs an open resource with a sink.
    pub const fn new(source: ResourceHandle<R>, sink: OutputSink<W>) -> Self {
        Self { source, sink }
    }

    /// Runs the relay to exhaustion and flushes the sink.
    ///
    /// Units already written stay in the sink when a later step fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`RelayError::Read`] or [`RelayError::Write`]
    /// encountered.
    pub fn run(self) -> Result<RelayReport, RelayError> {
        let Self {
            mut source,
            mut sink,
        } = self;

        while let Some(unit) = source.read_unit()? {
            sink.write_unit(unit)?;
        }

        let units = sink.written();
        sink.finish()?;
        debug!(path = %source.path(), units, "relay complete");
        Ok(RelayReport { units })
    }
}
