//! Synthetic ECG-like waveform generation
//! Location: src/hal/simulation/signal_generator.rs
//!
//! The waveform is a sum of sine terms plus a fixed-height spike injected
//! whenever `floor(t * rate)` changes within the look-back window. It is
//! not physiologically accurate; it only has to look alive on a plot.

use crate::config::{SineComponent, WaveformConfig};
use std::f64::consts::PI;

/// Stateless generator: every output is a pure function of elapsed time
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformGenerator {
    config: WaveformConfig,
}

impl Default for WaveformGenerator {
    fn default() -> Self {
        Self::new(WaveformConfig::default())
    }
}

impl WaveformGenerator {
    pub fn new(config: WaveformConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WaveformConfig {
        &self.config
    }

    /// Sum of the sine components at `t` seconds, before spike injection
    pub fn base_value(&self, t: f64) -> f64 {
        self.config
            .components
            .iter()
            .map(|c| Self::component_value(c, t))
            .sum()
    }

    fn component_value(component: &SineComponent, t: f64) -> f64 {
        component.amplitude * (2.0 * PI * component.frequency_hz * t).sin()
    }

    /// Edge detector for the periodic spike.
    ///
    /// Fires when `floor(t * rate)` differs from `floor((t - lookback) * rate)`.
    /// At `t = 0` this compares 0 against -1, so the very first sample spikes.
    pub fn spike_active(&self, t: f64) -> bool {
        let rate = self.config.spike_rate_hz;
        let now = (t * rate).floor();
        let before = ((t - self.config.spike_lookback_s) * rate).floor();
        now != before
    }

    pub fn spike_value(&self, t: f64) -> f64 {
        if self.spike_active(t) {
            self.config.spike_amplitude
        } else {
            0.0
        }
    }

    /// Integer sample value at `t`, truncated toward zero
    pub fn sample_value(&self, t: f64) -> i64 {
        (self.base_value(t) + self.spike_value(t)).trunc() as i64
    }

    /// Loose bounds on any value [`sample_value`](Self::sample_value) can return
    pub fn value_bounds(&self) -> (i64, i64) {
        let swing: f64 = self.config.components.iter().map(|c| c.amplitude.abs()).sum();
        let spike = self.config.spike_amplitude;
        let low = -swing + spike.min(0.0);
        let high = swing + spike.max(0.0);
        (low.floor() as i64, high.ceil() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_sample_spikes() {
        let generator = WaveformGenerator::default();
        assert_eq!(generator.base_value(0.0), 0.0);
        assert!(generator.spike_active(0.0));
        assert_eq!(generator.sample_value(0.0), 120);
    }

    #[test]
    fn test_known_values() {
        let generator = WaveformGenerator::default();

        assert!(!generator.spike_active(0.5));
        assert_eq!(generator.sample_value(0.5), -14);

        assert!(!generator.spike_active(1.0));
        assert_eq!(generator.sample_value(1.0), 87);

        // Negative values truncate toward zero (-62.98 -> -62)
        assert!(!generator.spike_active(3.25));
        assert_eq!(generator.sample_value(3.25), -62);
    }

    #[test]
    fn test_spike_just_after_beat_boundary() {
        let generator = WaveformGenerator::default();
        let t = 1.0 / 1.2 + 0.005;
        assert!(generator.spike_active(t));
        assert_eq!(generator.sample_value(t), 131);
        assert!(!generator.spike_active(t + 0.02));
    }

    #[test]
    fn test_spike_rate_over_ten_seconds() {
        let generator = WaveformGenerator::default();
        // 2 ms steps over 10 s: 11 beat edges plus the edge at t = 0, and
        // the 0.01 s window covers 5 steps at each one. A 0.008 s window
        // gives 48, a 0.012 s window gives 72.
        let spiking = (0..5_000)
            .map(|i| i as f64 * 0.002)
            .filter(|&t| generator.spike_active(t))
            .count();
        assert!((58..=62).contains(&spiking), "spiking steps: {}", spiking);
    }

    #[test]
    fn test_custom_components() {
        let config = WaveformConfig {
            components: vec![SineComponent::new(0.25, 100.0)],
            spike_amplitude: 0.0,
            ..WaveformConfig::default()
        };
        let generator = WaveformGenerator::new(config);
        assert_eq!(generator.sample_value(1.0), 100);
        assert_eq!(generator.sample_value(3.0), -100);
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(WaveformGenerator::default().value_bounds(), (-110, 230));
    }

    proptest! {
        #[test]
        fn prop_sample_within_bounds(t in 0.0f64..86_400.0) {
            let generator = WaveformGenerator::default();
            let (low, high) = generator.value_bounds();
            let v = generator.sample_value(t);
            prop_assert!(v >= low && v <= high);
        }

        #[test]
        fn prop_sample_is_pure(t in 0.0f64..3_600.0) {
            let a = WaveformGenerator::default();
            let b = WaveformGenerator::default();
            prop_assert_eq!(a.sample_value(t), b.sample_value(t));
            prop_assert_eq!(a.sample_value(t), a.sample_value(t));
        }

        #[test]
        fn prop_sample_matches_formula(t in 0.0f64..600.0) {
            let generator = WaveformGenerator::default();
            let spike = if (t * 1.2).floor() != ((t - 0.01) * 1.2).floor() { 120.0 } else { 0.0 };
            let expected = 60.0 * (2.0 * PI * 1.2 * t).sin()
                + 20.0 * (2.0 * PI * 20.0 * t).sin()
                + 30.0 * (2.0 * PI * 0.25 * t).sin()
                + spike;
            prop_assert_eq!(generator.sample_value(t), expected.trunc() as i64);
        }
    }
}
