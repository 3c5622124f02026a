// src/config/mod.rs
//! Emulator configuration
//!
//! Defaults reproduce the fixed constants exactly and are what the
//! `sim-serial` binary always runs with. [`ConfigLoader`] is for programs
//! embedding the emitter; the binary never reads a config file.

pub mod constants;
pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{EmulatorError, EmulatorResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete emulator configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EmulatorConfig {
    pub serial: SerialConfig,
    pub waveform: WaveformConfig,
    pub heart_rate: HeartRateConfig,
    pub emission: EmissionConfig,
}

/// Serial link settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub timeout_ms: u64,
}

/// One sinusoidal term of the synthetic waveform
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SineComponent {
    pub frequency_hz: f64,
    pub amplitude: f64,
}

/// Waveform shape: summed sine terms plus the periodic spike
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WaveformConfig {
    pub components: Vec<SineComponent>,
    pub spike_amplitude: f64,
    pub spike_rate_hz: f64,
    pub spike_lookback_s: f64,
}

/// Heart-rate oscillation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeartRateConfig {
    pub base_bpm: f64,
    pub swing_bpm: f64,
    pub oscillation_rate: f64,
    pub emit_period_s: u64,
}

/// Loop pacing and diagnostics
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmissionConfig {
    pub interval_micros: u64,
    pub stats_log_every: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: constants::serial::DEFAULT_PORT_NAME.to_string(),
            baud_rate: constants::serial::DEFAULT_BAUD_RATE,
            timeout_ms: constants::serial::DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SineComponent {
    pub fn new(frequency_hz: f64, amplitude: f64) -> Self {
        Self { frequency_hz, amplitude }
    }
}

impl From<(f64, f64)> for SineComponent {
    fn from((frequency_hz, amplitude): (f64, f64)) -> Self {
        Self::new(frequency_hz, amplitude)
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        use constants::waveform::*;
        Self {
            components: vec![
                BEAT_COMPONENT.into(),
                RIPPLE_COMPONENT.into(),
                WANDER_COMPONENT.into(),
            ],
            spike_amplitude: SPIKE_AMPLITUDE,
            spike_rate_hz: SPIKE_RATE_HZ,
            spike_lookback_s: SPIKE_LOOKBACK_S,
        }
    }
}

impl Default for HeartRateConfig {
    fn default() -> Self {
        use constants::heart_rate::*;
        Self {
            base_bpm: BASE_BPM,
            swing_bpm: SWING_BPM,
            oscillation_rate: OSCILLATION_RATE,
            emit_period_s: EMIT_PERIOD_S,
        }
    }
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            interval_micros: constants::emission::DEFAULT_INTERVAL_MICROS,
            stats_log_every: constants::emission::DEFAULT_STATS_LOG_EVERY,
        }
    }
}

impl SerialConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl EmissionConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_micros(self.interval_micros)
    }
}

impl EmulatorConfig {
    /// Check every field for values the emitter cannot work with
    pub fn validate(&self) -> EmulatorResult<()> {
        let serial = &self.serial;
        if serial.port_name.trim().is_empty() {
            return Err(EmulatorError::Configuration(
                "Port name cannot be empty".to_string(),
            ));
        }

        if serial.baud_rate == 0 || serial.baud_rate > constants::serial::MAX_BAUD_RATE {
            return Err(EmulatorError::Configuration(format!(
                "Invalid baud rate: {}",
                serial.baud_rate
            )));
        }

        if serial.timeout_ms == 0 {
            return Err(EmulatorError::Configuration(
                "Serial timeout must be positive".to_string(),
            ));
        }

        let waveform = &self.waveform;
        for (idx, component) in waveform.components.iter().enumerate() {
            if !component.frequency_hz.is_finite() || !component.amplitude.is_finite() {
                return Err(EmulatorError::Configuration(format!(
                    "Waveform component {} is not finite: {:?}",
                    idx, component
                )));
            }
        }

        if !waveform.spike_amplitude.is_finite()
            || !waveform.spike_rate_hz.is_finite()
            || !waveform.spike_lookback_s.is_finite()
        {
            return Err(EmulatorError::Configuration(
                "Spike parameters must be finite".to_string(),
            ));
        }

        if waveform.spike_lookback_s <= 0.0 {
            return Err(EmulatorError::Configuration(format!(
                "Spike look-back must be positive, got {}",
                waveform.spike_lookback_s
            )));
        }

        let heart_rate = &self.heart_rate;
        if !heart_rate.base_bpm.is_finite()
            || !heart_rate.swing_bpm.is_finite()
            || !heart_rate.oscillation_rate.is_finite()
        {
            return Err(EmulatorError::Configuration(
                "Heart-rate parameters must be finite".to_string(),
            ));
        }

        if heart_rate.emit_period_s == 0 {
            return Err(EmulatorError::Configuration(
                "BPM emit period must be at least one second".to_string(),
            ));
        }

        if self.emission.interval_micros == 0 {
            return Err(EmulatorError::Configuration(
                "Emission interval must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = EmulatorConfig::default();
        assert_eq!(config.serial.baud_rate, 115_200);
        assert_eq!(config.serial.timeout(), Duration::from_secs(1));
        assert_eq!(config.emission.interval(), Duration::from_millis(2));
        assert_eq!(config.waveform.components.len(), 3);
        assert_eq!(config.waveform.components[0], SineComponent::new(1.2, 60.0));
        assert_eq!(config.waveform.components[1], SineComponent::new(20.0, 20.0));
        assert_eq!(config.waveform.components[2], SineComponent::new(0.25, 30.0));
        assert_eq!(config.heart_rate.emit_period_s, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_configuration_validation() {
        let mut config = EmulatorConfig::default();
        config.serial.port_name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = EmulatorConfig::default();
        config.serial.baud_rate = 0;
        assert!(config.validate().is_err());

        let mut config = EmulatorConfig::default();
        config.serial.baud_rate = 5_000_000;
        assert!(config.validate().is_err());

        let mut config = EmulatorConfig::default();
        config.emission.interval_micros = 0;
        assert!(config.validate().is_err());

        let mut config = EmulatorConfig::default();
        config.heart_rate.emit_period_s = 0;
        assert!(config.validate().is_err());

        let mut config = EmulatorConfig::default();
        config.waveform.components.push(SineComponent::new(f64::NAN, 1.0));
        assert!(matches!(config.validate(), Err(EmulatorError::Configuration(_))));
    }
}
