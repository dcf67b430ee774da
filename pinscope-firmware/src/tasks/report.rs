//! Report task
//!
//! Polls the reporter on a short tick. The reporter itself decides when a
//! line is due, so the tick only bounds how far past the period boundary
//! an emission can land.

use defmt::{info, warn};
use embassy_time::{Duration, Instant, Ticker};

use pinscope_core::reporter::Reporter;
use pinscope_core::sampler::{PinBank, PIN_COUNT};

use crate::hw::{DigitalInput, SerialPort};

/// Poll interval in milliseconds, short against the 250 ms report period
const POLL_INTERVAL_MS: u64 = 10;

/// Report task - samples the pin bank and emits one line per period
#[embassy_executor::task]
pub async fn report_task(mut serial: SerialPort, bank: PinBank<DigitalInput, PIN_COUNT>) {
    info!("Report task started");

    let mut reporter = Reporter::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    let started = Instant::now();

    loop {
        ticker.next().await;

        let now_ms = started.elapsed().as_millis();

        // A failed write is not retried; the next period produces a fresh
        // line anyway.
        if let Err(e) = reporter.poll(now_ms, &bank, &mut serial) {
            warn!("Report not sent: {}", e);
        }
    }
}
