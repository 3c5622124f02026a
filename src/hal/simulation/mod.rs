//! Synthetic signal models driven purely by elapsed time
//! Location: src/hal/simulation/mod.rs

pub mod signal_generator;
pub mod heart_rate;

pub use signal_generator::WaveformGenerator;
pub use heart_rate::HeartRateModel;
