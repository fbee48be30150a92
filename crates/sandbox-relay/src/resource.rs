//! Sandboxed resource access.
//!
//! The resource is opened through a `cap-std` directory capability for the
//! sandbox root, so the guest only ever names paths relative to a directory
//! the host has granted. The handle reads one unit at a time and reports
//! exhaustion as `None` rather than an in-band sentinel value.

use std::io::{self, BufReader, ErrorKind, Read};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, File};
use tracing::{debug, warn};

use crate::config::split_sandbox_path;
use crate::error::RelayError;

/// Buffered reader over a file opened inside the sandbox directory.
pub type SandboxedFile = BufReader<File>;

#[derive(Debug)]
enum ReadState {
    Streaming,
    Exhausted,
    Failed(Arc<io::Error>),
}

/// Exclusive read capability bound to one sandboxed path.
#[derive(Debug)]
pub struct ResourceHandle<R> {
    path: Utf8PathBuf,
    reader: R,
    offset: u64,
    state: ReadState,
}

/// Opens `path` through the sandbox directory capability.
///
/// The parent directory is opened as a [`Dir`] capability and the file name
/// is resolved beneath it. Any host-side rejection surfaces as
/// [`RelayError::Open`].
///
/// # Errors
///
/// Returns [`RelayError::Open`] when the path has no file name, when the
/// sandbox directory cannot be opened, or when the file cannot be opened
/// within it.
pub fn open(path: &Utf8Path) -> Result<ResourceHandle<SandboxedFile>, RelayError> {
    let file = open_file(path).map_err(|source| {
        warn!(path = %path, error = %source, "sandboxed resource could not be opened");
        RelayError::open(path, source)
    })?;
    debug!(path = %path, "opened sandboxed resource");
    Ok(ResourceHandle::new(path, BufReader::new(file)))
}

fn open_file(path: &Utf8Path) -> io::Result<File> {
    let (root, name) = split_sandbox_path(path).ok_or_else(|| {
        io::Error::new(ErrorKind::InvalidInput, "input path has no file name")
    })?;
    let dir = Dir::open_ambient_dir(root, ambient_authority())?;
    dir.open(name)
}

impl<R: Read> ResourceHandle<R> {
    /// Binds an already-open reader to `path`.
    pub fn new(path: impl Into<Utf8PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            reader,
            offset: 0,
            state: ReadState::Streaming,
        }
    }

    /// Reads the next unit, or `None` once the resource is exhausted.
    ///
    /// After exhaustion or a failure the underlying reader is never consulted
    /// again: exhaustion keeps answering `None` and a failure keeps answering
    /// the same error. Interrupted reads are retried.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Read`] when the underlying reader fails.
    pub fn read_unit(&mut self) -> Result<Option<u8>, RelayError> {
        match &self.state {
            ReadState::Streaming => {}
            ReadState::Exhausted => return Ok(None),
            ReadState::Failed(source) => return Err(self.read_error(Arc::clone(source))),
        }

        let mut buffer = [0_u8; 1];
        loop {
            match self.reader.read(&mut buffer) {
                Ok(0) => {
                    self.state = ReadState::Exhausted;
                    return Ok(None);
                }
                Ok(_) => {
                    self.offset += 1;
                    let [unit] = buffer;
                    return Ok(Some(unit));
                }
                Err(error) if error.kind() == ErrorKind::Interrupted => {}
                Err(error) => {
                    warn!(path = %self.path, offset = self.offset, %error, "read failed");
                    let source = Arc::new(error);
                    self.state = ReadState::Failed(Arc::clone(&source));
                    return Err(self.read_error(source));
                }
            }
        }
    }

    /// Path the handle is bound to.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Number of units read so far.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Reports whether end-of-resource has been observed.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.state, ReadState::Exhausted)
    }

    fn read_error(&self, source: Arc<io::Error>) -> RelayError {
        RelayError::Read {
            path: self.path.clone(),
            offset: self.offset,
            source,
        }
    }
}
