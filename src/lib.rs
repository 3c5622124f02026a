//! Pulse-Emulator: serial heart-monitor stand-in for UI development
//!
//! This library emulates a heart-monitor board on a serial port so a
//! dashboard can be exercised without hardware attached. It provides:
//!
//! - A time-driven synthetic waveform with periodic spikes and a slow BPM oscillation
//! - Newline-delimited JSON telemetry records (`sample` and `bpm`)
//! - A serial-port sink plus a generic writer sink behind one trait
//! - A paced emission loop with statistics and structured logging
//! - Fixed emulator constants, plus a library-level TOML loader for embedding
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pulse_emulator::config::EmulatorConfig;
//! use pulse_emulator::emitter::SerialEmitter;
//! use pulse_emulator::hal::SerialSink;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EmulatorConfig::default();
//!     let sink = SerialSink::open(&config.serial)?;
//!     let mut emitter = SerialEmitter::new(sink, &config);
//!
//!     // Roughly two seconds of telemetry at the default 500 Hz
//!     emitter.run_for(1_000)?;
//!     println!("{:?}", emitter.stats());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod emitter;
pub mod error;
pub mod hal;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ConfigLoader, EmulatorConfig};
pub use emitter::{EmissionStats, SerialEmitter, StepOutput};
pub use error::{EmulatorError, EmulatorResult};
pub use hal::{
    simulation::{HeartRateModel, WaveformGenerator},
    PortDescriptor, SerialSink, TelemetrySink, WriterSink,
};
pub use telemetry::TelemetryRecord;
pub use utils::time::{MockTimeProvider, SystemTimeProvider, TimeProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        features: vec![
            "Synthetic waveform and BPM generation".to_string(),
            "Newline-delimited JSON telemetry".to_string(),
            "Serial port output and port discovery".to_string(),
            "Structured logging".to_string(),
        ],
    }
}

/// Library version information
#[derive(Debug, Clone)]
pub struct VersionInfo {
    /// Library name
    pub name: String,
    /// Version string
    pub version: String,
    /// Description
    pub description: String,
    /// List of features
    pub features: Vec<String>,
}
