// src/hal/writer_sink.rs
//! Telemetry sink over any `std::io::Write`
//!
//! Used for dry runs to stdout, benchmarks, and tests that capture the
//! exact bytes the emulator would put on the wire.

use crate::error::{EmulatorError, EmulatorResult};
use crate::hal::traits::TelemetrySink;
use std::io::Write;

#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Vec<u8>> {
    /// In-memory sink collecting every line
    pub fn memory() -> Self {
        Self::new("memory", Vec::new())
    }

    /// Captured lines without their terminators
    pub fn lines(&self) -> Vec<&str> {
        std::str::from_utf8(&self.writer)
            .map(|s| s.lines().collect())
            .unwrap_or_default()
    }
}

impl<W: Write + Send> TelemetrySink for WriterSink<W> {
    fn write_line(&mut self, line: &[u8]) -> EmulatorResult<()> {
        self.writer
            .write_all(line)
            .map_err(|e| EmulatorError::write(&self.name, e))
    }

    fn endpoint(&self) -> &str {
        &self.name
    }
}
