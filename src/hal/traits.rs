// src/hal/traits.rs
//! Core HAL trait for telemetry output

use crate::error::EmulatorResult;
use crate::telemetry::{encode_line, TelemetryRecord};

/// Destination for encoded telemetry lines
pub trait TelemetrySink: Send {
    /// Write one complete, newline-terminated line
    fn write_line(&mut self, line: &[u8]) -> EmulatorResult<()>;

    /// Human-readable name of where the lines go (port name, "memory", ...)
    fn endpoint(&self) -> &str;

    /// Encode and write a record, returning the number of bytes sent
    fn send(&mut self, record: &TelemetryRecord) -> EmulatorResult<usize> {
        let line = encode_line(record)?;
        self.write_line(&line)?;
        Ok(line.len())
    }
}
