//! Domain errors raised by the byte relay.
//!
//! Every variant is fatal to the guest. I/O errors are wrapped in `Arc` to
//! keep the error small enough for the `result_large_err` Clippy lint.

use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while relaying the sandboxed resource to the sink.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The input resource could not be opened through the sandbox mapping.
    #[error("failed to open sandboxed resource {path}: {source}")]
    Open {
        /// Path that was requested.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// Reading from an open resource failed before exhaustion.
    #[error("failed to read sandboxed resource {path} at byte {offset}: {source}")]
    Read {
        /// Path the handle is bound to.
        path: Utf8PathBuf,
        /// Number of units read successfully before the failure.
        offset: u64,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },

    /// The output sink rejected a unit or a flush.
    #[error("failed to write to output sink after {offset} bytes: {source}")]
    Write {
        /// Number of units accepted by the sink before the failure.
        offset: u64,
        /// Underlying I/O error.
        #[source]
        source: Arc<io::Error>,
    },
}

impl RelayError {
    pub(crate) fn open(path: impl Into<Utf8PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn write(offset: u64, source: io::Error) -> Self {
        Self::Write {
            offset,
            source: Arc::new(source),
        }
    }

    /// Returns the kind of the underlying I/O error.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } | Self::Write { source, .. } => {
                source.kind()
            }
        }
    }
}
