//! Slow heart-rate oscillation for BPM records
//! Location: src/hal/simulation/heart_rate.rs

use crate::config::HeartRateConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct HeartRateModel {
    config: HeartRateConfig,
}

impl Default for HeartRateModel {
    fn default() -> Self {
        Self::new(HeartRateConfig::default())
    }
}

impl HeartRateModel {
    pub fn new(config: HeartRateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeartRateConfig {
        &self.config
    }

    /// `base + round(swing * sin(rate * t))`
    pub fn bpm_value(&self, t: f64) -> i64 {
        let offset = (self.config.swing_bpm * (self.config.oscillation_rate * t).sin()).round();
        (self.config.base_bpm + offset) as i64
    }

    /// True while `floor(t)` is a multiple of the emit period
    pub fn should_emit(&self, t: f64) -> bool {
        let whole_seconds = t.floor() as i64;
        let period = self.config.emit_period_s.max(1) as i64;
        whole_seconds.rem_euclid(period) == 0
    }

    /// Closed range every [`bpm_value`](Self::bpm_value) falls in
    pub fn bpm_bounds(&self) -> (i64, i64) {
        let swing = self.config.swing_bpm.abs().round();
        (
            (self.config.base_bpm - swing) as i64,
            (self.config.base_bpm + swing) as i64,
        )
    }
}
