//! Reader and writer doubles for relay tests.

use std::cell::Cell;
use std::io::{self, Cursor, ErrorKind, Read, Write};
use std::rc::Rc;

/// Yields `data`, then fails with `kind` instead of reporting exhaustion.
pub struct FailingReader {
    data: Cursor<Vec<u8>>,
    kind: ErrorKind,
}

impl FailingReader {
    pub fn new(data: &[u8], kind: ErrorKind) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(self.kind, "injected read failure")),
            n => Ok(n),
        }
    }
}

/// Counts calls into the wrapped reader.
pub struct CountingReader {
    inner: Cursor<Vec<u8>>,
    calls: Rc<Cell<usize>>,
}

impl CountingReader {
    pub fn new(data: &[u8]) -> (Self, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let reader = Self {
            inner: Cursor::new(data.to_vec()),
            calls: Rc::clone(&calls),
        };
        (reader, calls)
    }
}

impl Read for CountingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls.set(self.calls.get() + 1);
        self.inner.read(buf)
    }
}

/// Interrupts every other call.
pub struct InterruptingReader {
    inner: Cursor<Vec<u8>>,
    interrupt_next: bool,
}

impl InterruptingReader {
    pub fn new(data: &[u8]) -> Self {
        Self {
            inner: Cursor::new(data.to_vec()),
            interrupt_next: true,
        }
    }
}

impl Read for InterruptingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        self.inner.read(buf)
    }
}

/// How a [`LimitedWriter`] behaves once its capacity is used up.
#[derive(Debug, Clone, Copy)]
pub enum Overflow {
    /// Fail with the given error kind.
    Error(ErrorKind),
    /// Report that zero bytes were accepted.
    Zero,
}

/// Accepts `capacity` bytes, then rejects writes.
pub struct LimitedWriter {
    pub accepted: Vec<u8>,
    capacity: usize,
    overflow: Overflow,
    fail_flush: bool,
}

impl LimitedWriter {
    pub fn new(capacity: usize, overflow: Overflow) -> Self {
        Self {
            accepted: Vec::new(),
            capacity,
            overflow,
            fail_flush: false,
        }
    }

    pub fn failing_flush() -> Self {
        Self {
            accepted: Vec::new(),
            capacity: usize::MAX,
            overflow: Overflow::Zero,
            fail_flush: true,
        }
    }
}

impl Write for LimitedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accepted.len() >= self.capacity {
            return match self.overflow {
                Overflow::Error(kind) => Err(io::Error::new(kind, "injected write failure")),
                Overflow::Zero => Ok(0),
            };
        }
        self.accepted.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            return Err(io::Error::new(ErrorKind::BrokenPipe, "injected flush failure"));
        }
        Ok(())
    }
}

/// Every possible unit value in ascending order.
pub fn all_byte_values() -> Vec<u8> {
    (0..=u8::MAX).collect()
}
