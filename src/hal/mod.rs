// src/hal/mod.rs
//! Hardware abstraction layer: where telemetry lines are written

pub mod traits;
pub mod types;
pub mod serial_driver;
pub mod writer_sink;
pub mod simulation;

pub use traits::*;
pub use types::*;
pub use serial_driver::{list_ports, SerialSink};
pub use writer_sink::WriterSink;
