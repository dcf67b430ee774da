//! Host-side monitor for the Pinscope input reporter.
//!
//! Opens a serial port, decodes the CSV report lines emitted by the
//! firmware and logs the pin states. Malformed lines are counted and
//! logged, never fatal.

use std::io::Read;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, warn};

use pinscope_core::sampler::REPORTED_PINS;
use pinscope_core::traits::BAUD_RATE;
use pinscope_protocol::{parse_line, Report};

/// Log a running summary every this many decoded reports
const SUMMARY_EVERY: u64 = 100;

/// Tool to receive and decode pin reports from a Pinscope device.
#[derive(Parser)]
struct Cli {
    /// Serial port
    #[arg(short, long)]
    port: String,

    /// Serial baud rate
    #[arg(short, long, default_value_t = BAUD_RATE)]
    baud: u32,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let port = serialport::new(&cli.port, cli.baud)
        .timeout(Duration::from_millis(100))
        .open();

    let port = match port {
        Ok(port) => port,
        Err(e) => {
            error!("Failed to open port {}: {}", cli.port, e);
            std::process::exit(1);
        }
    };

    info!("Listening on {} at {} baud", cli.port, cli.baud);

    let mut stats = Stats::default();
    let mut rx_buffer: Vec<u8> = vec![];

    // Read timeouts surface as errors and are simply skipped; the device
    // sends a line every 250 ms regardless.
    for b in port.bytes().flatten() {
        if b != b'\n' {
            rx_buffer.push(b);
            continue;
        }

        let line = String::from_utf8_lossy(&rx_buffer).into_owned();
        rx_buffer.clear();
        handle_line(&line, &mut stats);
    }

    info!(
        "Port closed after {} reports ({} parse errors)",
        stats.reports, stats.parse_errors
    );
}

fn handle_line(line: &str, stats: &mut Stats) {
    let report = match parse_line(line) {
        Ok(report) => report,
        Err(e) => {
            stats.parse_errors += 1;
            warn!("Bad report line {:?}: {}", line, e);
            return;
        }
    };

    stats.reports += 1;

    if !has_expected_pins(&report) {
        warn!("Report pin set does not match the device table");
    }

    info!("{}", render(&report));

    if stats.reports % SUMMARY_EVERY == 0 {
        info!(
            "{} reports received, {} parse errors",
            stats.reports, stats.parse_errors
        );
    }
}

/// Running counters for the receive loop
#[derive(Debug, Default)]
struct Stats {
    reports: u64,
    parse_errors: u64,
}

/// True if the report covers exactly the device's pin table, in order
fn has_expected_pins(report: &Report) -> bool {
    report
        .iter()
        .map(|r| r.pin)
        .eq(REPORTED_PINS.iter().map(|spec| spec.index))
}

/// Render a decoded report as `4=1 5=0 6=0 7=0`
fn render(report: &Report) -> String {
    report
        .iter()
        .map(|r| format!("{}={}", r.pin, r.value))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let report = parse_line("4,1,5,0,6,0,7,0\n").unwrap();
        assert_eq!(render(&report), "4=1 5=0 6=0 7=0");
    }

    #[test]
    fn test_expected_pins() {
        assert!(has_expected_pins(&parse_line("4,0,5,0,6,0,7,0").unwrap()));
        assert!(!has_expected_pins(&parse_line("4,0,5,0").unwrap()));
        assert!(!has_expected_pins(&parse_line("5,0,4,0,6,0,7,0").unwrap()));
    }

    #[test]
    fn test_handle_line_counts_errors() {
        let mut stats = Stats::default();
        handle_line("4,0,5,0,6,0,7,0", &mut stats);
        handle_line("garbage", &mut stats);
        handle_line("4,1,5,1,6,1,7,1", &mut stats);

        assert_eq!(stats.reports, 2);
        assert_eq!(stats.parse_errors, 1);
    }
}
