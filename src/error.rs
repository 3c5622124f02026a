// src/error.rs
//! Unified error handling for the emulator
//!
//! Every failure, whether it happens while opening the port, encoding a
//! record or writing to the wire, is funnelled into [`EmulatorError`]. The
//! binary treats any of them as fatal: there is no transient/permanent split
//! and no retry policy.

use thiserror::Error;

/// Unified error type for the emulator
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// The serial port could not be opened (missing device, busy, permissions)
    #[error("could not open serial port {port}: {reason}")]
    PortOpen {
        port: String,
        reason: String,
    },

    /// Writing a record to the open port failed (e.g. device unplugged)
    #[error("write to {port} failed: {reason}")]
    Write {
        port: String,
        reason: String,
    },

    /// A record could not be serialized or parsed
    #[error("telemetry codec error: {0}")]
    Encode(String),

    /// Invalid configuration values or an unreadable config file
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Enumerating available serial ports failed
    #[error("port discovery failed: {0}")]
    PortDiscovery(String),

    /// Raw I/O failure outside of the serial write path
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EmulatorError {
    /// Build a port-open error from any displayable cause
    pub fn port_open(port: &str, reason: impl ToString) -> Self {
        EmulatorError::PortOpen {
            port: port.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Build a write error from any displayable cause
    pub fn write(port: &str, reason: impl ToString) -> Self {
        EmulatorError::Write {
            port: port.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for EmulatorError {
    fn from(err: serde_json::Error) -> Self {
        EmulatorError::Encode(err.to_string())
    }
}

impl From<toml::de::Error> for EmulatorError {
    fn from(err: toml::de::Error) -> Self {
        EmulatorError::Configuration(err.to_string())
    }
}

/// Result type alias for emulator operations
pub type EmulatorResult<T> = Result<T, EmulatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_open_display() {
        let err = EmulatorError::port_open("/dev/ttyFAKE0", "No such file or directory");
        let display = format!("{}", err);
        assert!(display.contains("/dev/ttyFAKE0"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn test_write_display() {
        let err = EmulatorError::write("COM5", "device disconnected");
        assert_eq!(format!("{}", err), "write to COM5 failed: device disconnected");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: EmulatorError = io.into();
        assert!(matches!(err, EmulatorError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EmulatorError = json_err.into();
        assert!(matches!(err, EmulatorError::Encode(_)));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EmulatorError>();
    }
}
