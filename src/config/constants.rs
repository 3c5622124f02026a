// src/config/constants.rs
//! Emulator constants
//!
//! The two operator-facing values are the port name and the baud rate. The
//! remaining constants pin down the synthetic waveform so that a default
//! run is reproducible.

/// Serial link constants
pub mod serial {
    /// Port written to when nothing else is configured
    #[cfg(windows)]
    pub const DEFAULT_PORT_NAME: &str = "COM5";
    /// Port written to when nothing else is configured
    #[cfg(not(windows))]
    pub const DEFAULT_PORT_NAME: &str = "/dev/ttyUSB0";

    pub const DEFAULT_BAUD_RATE: u32 = 115_200;
    pub const MAX_BAUD_RATE: u32 = 4_000_000;

    /// Read timeout applied when the port is opened
    pub const DEFAULT_TIMEOUT_MS: u64 = 1_000;

    /// Manufacturer substrings that identify a likely microcontroller board
    pub const BOARD_MANUFACTURER_HINTS: &[&str] = &["arduino", "ftdi", "ch340"];
}

/// Synthetic waveform constants
pub mod waveform {
    /// (frequency Hz, amplitude) of the dominant beat-rate term
    pub const BEAT_COMPONENT: (f64, f64) = (1.2, 60.0);
    /// (frequency Hz, amplitude) of the high-frequency ripple term
    pub const RIPPLE_COMPONENT: (f64, f64) = (20.0, 20.0);
    /// (frequency Hz, amplitude) of the slow baseline-wander term
    pub const WANDER_COMPONENT: (f64, f64) = (0.25, 30.0);

    pub const SPIKE_AMPLITUDE: f64 = 120.0;
    /// Rate at which the spike edge detector counts pulses
    pub const SPIKE_RATE_HZ: f64 = 1.2;
    /// How far back the edge detector looks, in seconds
    pub const SPIKE_LOOKBACK_S: f64 = 0.01;
}

/// Heart-rate record constants
pub mod heart_rate {
    pub const BASE_BPM: f64 = 70.0;
    pub const SWING_BPM: f64 = 5.0;
    /// Angular rate (rad/s) of the BPM oscillation
    pub const OSCILLATION_RATE: f64 = 0.2;
    /// BPM records go out while `floor(t)` is a multiple of this
    pub const EMIT_PERIOD_S: u64 = 2;
}

/// Emission loop timing
pub mod emission {
    /// Pause between iterations, ~500 Hz sample rate
    pub const DEFAULT_INTERVAL_MICROS: u64 = 2_000;
    /// Iterations between periodic statistics logs (~10 s at 500 Hz)
    pub const DEFAULT_STATS_LOG_EVERY: u64 = 5_000;

    pub const NANOSECONDS_PER_SECOND: f64 = 1_000_000_000.0;
}
