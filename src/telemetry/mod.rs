// src/telemetry/mod.rs
//! Wire records and their newline-delimited JSON encoding

pub mod record;

pub use record::{decode_line, encode_line, TelemetryRecord};
