//! Process-wide artificial latency for access-layer calls.
//!
//! A local development store answers instantly, which makes loading
//! indicators impossible to see. The delay configured here is applied
//! before every subsequent call from this layer until changed again; it
//! is deliberately not scoped per call. Defaults to zero.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static API_DELAY_MS: AtomicU64 = AtomicU64::new(0);

/// Set the artificial delay in milliseconds (0 disables it).
pub fn set_api_delay(delay_ms: u64) {
    API_DELAY_MS.store(delay_ms, Ordering::Relaxed);
}

/// Current artificial delay in milliseconds.
pub fn api_delay() -> u64 {
    API_DELAY_MS.load(Ordering::Relaxed)
}

/// Sleep for the configured delay, if any.
pub(crate) async fn pace() {
    let ms = api_delay();
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
