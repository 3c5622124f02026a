//! Serial heart-monitor emulator
//!
//! Writes `{"type":"sample",...}` and `{"type":"bpm",...}` lines to a serial
//! port until killed or until a write fails.

use clap::Parser;
use pulse_emulator::config::EmulatorConfig;
use pulse_emulator::emitter::SerialEmitter;
use pulse_emulator::error::EmulatorResult;
use pulse_emulator::hal::{list_ports, suggest_board_port, SerialSink};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "sim-serial",
    version,
    about = "Emulate a heart-monitor board on a serial port",
    long_about = "Emulate a heart-monitor board on a serial port.\n\n\
                  The port and baud rate are fixed constants; edit \
                  pulse_emulator::config::constants::serial to target another device."
)]
struct Cli {
    /// Print available serial ports and exit
    #[arg(long)]
    list_ports: bool,
}

const DEFAULT_LOG_FILTER: &str = "pulse_emulator=info";

/// `RUST_LOG` wins when set; otherwise the crate logs at info
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_logging() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

fn print_ports() -> EmulatorResult<()> {
    println!("Scanning for available serial ports...\n");
    let ports = list_ports()?;

    if ports.is_empty() {
        println!("No serial ports found!");
        return Ok(());
    }

    println!("Available serial ports:\n");
    for (index, port) in ports.iter().enumerate() {
        println!("{}. {}\n", index + 1, port);
    }

    if let Some(board) = suggest_board_port(&ports) {
        println!("Suggested board port: {}", board.port_name);
        if let Some(manufacturer) = &board.manufacturer {
            println!("(Detected: {})", manufacturer);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> EmulatorResult<()> {
    if cli.list_ports {
        return print_ports();
    }

    let config = EmulatorConfig::default();
    println!("Opening {}", config.serial.port_name);

    let sink = SerialSink::open(&config.serial)?;
    info!(port = %config.serial.port_name, baud = config.serial.baud_rate, "emulating device");

    let mut emitter = SerialEmitter::new(sink, &config);
    match emitter.run() {
        Ok(never) => match never {},
        Err(e) => Err(e),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "emulator stopped");
            println!("Error {}", e);
            ExitCode::FAILURE
        }
    }
}
