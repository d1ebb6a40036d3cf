//! Tick task for the sampling loop
//!
//! Raises the tick flag once per period. The main loop takes the flag;
//! ticks that arrive before it does are merged into one.

use defmt::*;
use embassy_time::{Duration, Ticker};
use segmeter_core::sampler::TickFlag;

/// Flag consumed by the meter loop
pub static TICK: TickFlag = TickFlag::new();

/// Tick task - sets [`TICK`] every `period_ms` milliseconds
#[embassy_executor::task]
pub async fn tick_task(period_ms: u32) {
    info!("Tick task started ({} ms)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms as u64));

    loop {
        ticker.next().await;
        TICK.signal();
    }
}
