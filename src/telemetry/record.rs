// src/telemetry/record.rs
//! Telemetry records as they appear on the serial line
//!
//! One compact JSON object per line:
//!
//! ```text
//! {"type":"sample","v":123}
//! {"type":"bpm","bpm":72}
//! ```

use crate::error::{EmulatorError, EmulatorResult};
use serde::{Deserialize, Serialize};

/// A single record written to the serial port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TelemetryRecord {
    /// Instantaneous waveform amplitude
    Sample { v: i64 },
    /// Heart rate in beats per minute
    Bpm { bpm: i64 },
}

impl TelemetryRecord {
    pub fn sample(v: i64) -> Self {
        TelemetryRecord::Sample { v }
    }

    pub fn bpm(bpm: i64) -> Self {
        TelemetryRecord::Bpm { bpm }
    }

    /// Value of the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            TelemetryRecord::Sample { .. } => "sample",
            TelemetryRecord::Bpm { .. } => "bpm",
        }
    }

    pub fn value(&self) -> i64 {
        match *self {
            TelemetryRecord::Sample { v } => v,
            TelemetryRecord::Bpm { bpm } => bpm,
        }
    }
}

/// Serialize a record as compact JSON terminated by `\n`
pub fn encode_line(record: &TelemetryRecord) -> EmulatorResult<Vec<u8>> {
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');
    Ok(line)
}

/// Parse one line (with or without its terminator) back into a record
pub fn decode_line(line: &[u8]) -> EmulatorResult<TelemetryRecord> {
    let trimmed = line.strip_suffix(b"\n").unwrap_or(line);
    let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(EmulatorError::Encode("empty telemetry line".to_string()));
    }
    Ok(serde_json::from_slice(trimmed)?)
}
