//! Common utility functions for the emulator
//!
//! Currently this is the clock abstraction the emission loop reads elapsed
//! time from.

pub mod time;

pub use time::{
    current_timestamp_nanos,
    elapsed_seconds,
    MockTimeProvider,
    SystemTimeProvider,
    TimeProvider,
};
