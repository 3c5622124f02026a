// src/hal/serial_driver.rs
//! Serial port output and port discovery
//!
//! The port handle lives inside [`SerialSink`]; dropping the sink closes the
//! port, so it is released on every exit path including errors.

use crate::config::SerialConfig;
use crate::error::{EmulatorError, EmulatorResult};
use crate::hal::traits::TelemetrySink;
use crate::hal::types::{PortDescriptor, PortKind};
use serialport::{DataBits, FlowControl, Parity, SerialPort, SerialPortInfo, SerialPortType, StopBits};
use std::fmt;
use std::io::Write;
use tracing::{debug, info, trace};

/// Telemetry sink backed by an open serial port (8N1, no flow control)
pub struct SerialSink {
    port_name: String,
    baud_rate: u32,
    port: Box<dyn SerialPort>,
}

impl SerialSink {
    /// Open the configured port
    pub fn open(config: &SerialConfig) -> EmulatorResult<Self> {
        if config.port_name.trim().is_empty() {
            return Err(EmulatorError::Configuration(
                "Port name cannot be empty".to_string(),
            ));
        }

        debug!(
            port = %config.port_name,
            baud = config.baud_rate,
            timeout_ms = config.timeout_ms,
            "opening serial port"
        );

        let port = serialport::new(config.port_name.as_str(), config.baud_rate)
            .timeout(config.timeout())
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .open()
            .map_err(|e| EmulatorError::port_open(&config.port_name, e))?;

        info!(port = %config.port_name, baud = config.baud_rate, "serial port opened");

        Ok(Self {
            port_name: config.port_name.clone(),
            baud_rate: config.baud_rate,
            port,
        })
    }

    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}

impl fmt::Debug for SerialSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialSink")
            .field("port_name", &self.port_name)
            .field("baud_rate", &self.baud_rate)
            .finish_non_exhaustive()
    }
}

impl TelemetrySink for SerialSink {
    fn write_line(&mut self, line: &[u8]) -> EmulatorResult<()> {
        trace!(port = %self.port_name, bytes = line.len(), "write");
        self.port
            .write_all(line)
            .map_err(|e| EmulatorError::write(&self.port_name, e))
    }

    fn endpoint(&self) -> &str {
        &self.port_name
    }
}

impl Drop for SerialSink {
    fn drop(&mut self) {
        debug!(port = %self.port_name, "closing serial port");
    }
}

/// Enumerate serial ports available on this host
pub fn list_ports() -> EmulatorResult<Vec<PortDescriptor>> {
    let ports = serialport::available_ports()
        .map_err(|e| EmulatorError::PortDiscovery(e.to_string()))?;
    Ok(ports.into_iter().map(PortDescriptor::from).collect())
}

impl From<SerialPortInfo> for PortDescriptor {
    fn from(info: SerialPortInfo) -> Self {
        match info.port_type {
            SerialPortType::UsbPort(usb) => PortDescriptor {
                port_name: info.port_name,
                kind: PortKind::Usb,
                manufacturer: usb.manufacturer,
                serial_number: usb.serial_number,
                product: usb.product,
                vid_pid: Some((usb.vid, usb.pid)),
            },
            SerialPortType::PciPort => PortDescriptor::new(info.port_name, PortKind::Pci),
            SerialPortType::BluetoothPort => PortDescriptor::new(info.port_name, PortKind::Bluetooth),
            SerialPortType::Unknown => PortDescriptor::new(info.port_name, PortKind::Unknown),
        }
    }
}
