//! Global atomic counters.
//!
//! Counters are bumped silently at the call site. [`Metrics::flush`] emits
//! the current values as one `tracing::info!` event.

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

pub struct Metrics {
    at_bats_recorded: AtomicU64,
    at_bats_undone: AtomicU64,
    games_started: AtomicU64,
    games_finalised: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            at_bats_recorded: AtomicU64::new(0),
            at_bats_undone: AtomicU64::new(0),
            games_started: AtomicU64::new(0),
            games_finalised: AtomicU64::new(0),
        }
    }

    pub fn inc_at_bats_recorded(&self) {
        self.at_bats_recorded.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "at_bats_recorded", "counter incremented");
    }

    pub fn inc_at_bats_undone(&self) {
        self.at_bats_undone.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "at_bats_undone", "counter incremented");
    }

    pub fn inc_games_started(&self) {
        self.games_started.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "games_started", "counter incremented");
    }

    pub fn inc_games_finalised(&self) {
        self.games_finalised.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "games_finalised", "counter incremented");
    }

    /// Emit all counters as a single `info!` event. Call at natural
    /// boundaries such as the end of a CLI command.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            at_bats_recorded = self.at_bats_recorded(),
            at_bats_undone = self.at_bats_undone(),
            games_started = self.games_started(),
            games_finalised = self.games_finalised(),
        );
    }

    pub fn at_bats_recorded(&self) -> u64 {
        self.at_bats_recorded.load(Ordering::Relaxed)
    }

    pub fn at_bats_undone(&self) -> u64 {
        self.at_bats_undone.load(Ordering::Relaxed)
    }

    pub fn games_started(&self) -> u64 {
        self.games_started.load(Ordering::Relaxed)
    }

    pub fn games_finalised(&self) -> u64 {
        self.games_finalised.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.at_bats_recorded.store(0, Ordering::Relaxed);
        self.at_bats_undone.store(0, Ordering::Relaxed);
        self.games_started.store(0, Ordering::Relaxed);
        self.games_finalised.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let m = Metrics::new();
        m.inc_at_bats_recorded();
        m.inc_at_bats_recorded();
        m.inc_at_bats_undone();
        m.inc_games_started();
        assert_eq!(m.at_bats_recorded(), 2);
        assert_eq!(m.at_bats_undone(), 1);
        assert_eq!(m.games_started(), 1);
        assert_eq!(m.games_finalised(), 0);
        m.flush();
    }

    #[test]
    fn reset_zeroes_all() {
        let m = Metrics::new();
        m.inc_at_bats_recorded();
        m.inc_at_bats_undone();
        m.inc_games_started();
        m.inc_games_finalised();
        m.reset();
        assert_eq!(m.at_bats_recorded(), 0);
        assert_eq!(m.at_bats_undone(), 0);
        assert_eq!(m.games_started(), 0);
        assert_eq!(m.games_finalised(), 0);
    }
}
