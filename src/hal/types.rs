// src/hal/types.rs
//! Descriptions of serial ports found on the host

use crate::config::constants::serial::BOARD_MANUFACTURER_HINTS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serial port as reported by the operating system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    pub port_name: String,
    pub kind: PortKind,
    pub manufacturer: Option<String>,
    pub serial_number: Option<String>,
    pub product: Option<String>,
    pub vid_pid: Option<(u16, u16)>,
}

/// Transport behind a serial port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortKind {
    Usb,
    Pci,
    Bluetooth,
    Unknown,
}

impl PortDescriptor {
    /// Port with no USB metadata
    pub fn new(port_name: impl Into<String>, kind: PortKind) -> Self {
        Self {
            port_name: port_name.into(),
            kind,
            manufacturer: None,
            serial_number: None,
            product: None,
            vid_pid: None,
        }
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    /// Manufacturer string mentions Arduino or a common USB-serial bridge chip
    pub fn is_likely_board(&self) -> bool {
        self.manufacturer.as_deref().is_some_and(|m| {
            let m = m.to_lowercase();
            BOARD_MANUFACTURER_HINTS.iter().any(|hint| m.contains(hint))
        })
    }
}

impl fmt::Display for PortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.port_name)?;
        if let Some(manufacturer) = &self.manufacturer {
            write!(f, "\n   Manufacturer: {}", manufacturer)?;
        }
        if let Some(product) = &self.product {
            write!(f, "\n   Product: {}", product)?;
        }
        if let Some(serial) = &self.serial_number {
            write!(f, "\n   Serial Number: {}", serial)?;
        }
        if let Some((vid, pid)) = self.vid_pid {
            write!(f, "\n   VID:PID: {:04x}:{:04x}", vid, pid)?;
        }
        Ok(())
    }
}

/// First port that looks like a microcontroller board
pub fn suggest_board_port(ports: &[PortDescriptor]) -> Option<&PortDescriptor> {
    ports.iter().find(|p| p.is_likely_board())
}
