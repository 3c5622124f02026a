use crate::config::constants::emission::NANOSECONDS_PER_SECOND;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Time provider trait for dependency injection and testing
pub trait TimeProvider: Send + Sync {
    fn now_nanos(&self) -> u64;
    fn now_micros(&self) -> u64 {
        self.now_nanos() / 1000
    }
}

impl<T: TimeProvider + ?Sized> TimeProvider for Arc<T> {
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}

/// System time provider using the wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_nanos(&self) -> u64 {
        current_timestamp_nanos()
    }
}

/// Mock time provider for deterministic testing
#[derive(Debug)]
pub struct MockTimeProvider {
    current_time: AtomicU64,
}

impl MockTimeProvider {
    pub fn new(initial_time_nanos: u64) -> Self {
        Self {
            current_time: AtomicU64::new(initial_time_nanos),
        }
    }

    pub fn advance_by(&self, nanos: u64) {
        self.current_time.fetch_add(nanos, Ordering::Relaxed);
    }

    pub fn advance_by_secs(&self, secs: f64) {
        self.advance_by((secs * NANOSECONDS_PER_SECOND).round() as u64);
    }

    pub fn set_time(&self, nanos: u64) {
        self.current_time.store(nanos, Ordering::Relaxed);
    }
}

impl TimeProvider for MockTimeProvider {
    fn now_nanos(&self) -> u64 {
        self.current_time.load(Ordering::Relaxed)
    }
}

pub fn current_timestamp_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Seconds between two nanosecond timestamps.
///
/// Negative when the wall clock stepped backwards.
pub fn elapsed_seconds(start_nanos: u64, now_nanos: u64) -> f64 {
    (now_nanos as i128 - start_nanos as i128) as f64 / NANOSECONDS_PER_SECOND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_time_provider() {
        let clock = MockTimeProvider::new(1_000);
        assert_eq!(clock.now_nanos(), 1_000);

        clock.advance_by(500);
        assert_eq!(clock.now_nanos(), 1_500);
        assert_eq!(clock.now_micros(), 1);

        clock.set_time(7_000_000_000);
        clock.advance_by_secs(0.002);
        assert_eq!(clock.now_nanos(), 7_002_000_000);
    }

    #[test]
    fn test_shared_provider() {
        let clock = Arc::new(MockTimeProvider::new(0));
        let shared = Arc::clone(&clock);
        clock.advance_by(42);
        assert_eq!(shared.now_nanos(), 42);
    }

    #[test]
    fn test_elapsed_seconds() {
        assert_eq!(elapsed_seconds(0, 1_500_000_000), 1.5);
        assert_eq!(elapsed_seconds(2_000_000_000, 1_000_000_000), -1.0);
        assert_eq!(elapsed_seconds(5, 5), 0.0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemTimeProvider;
        let a = clock.now_nanos();
        let b = clock.now_nanos();
        assert!(b >= a);
        assert!(a > 0);
    }
}
