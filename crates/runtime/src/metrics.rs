//! Delivery metrics and statistics.
//!
//! Tracks how many notifications each turn delivered, failed or skipped.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::dispatch::DeliveryReport;

/// Delivery counters shared between the runtime and its observers.
///
/// Uses atomics for lock-free access across threads.
#[derive(Debug, Default)]
pub struct DeliveryMetrics {
    /// Turns whose batch was fully dispatched
    turns: AtomicU64,

    /// Notifications delivered successfully
    delivered: AtomicU64,

    /// Notifications whose handler failed, including critical aborts
    failed: AtomicU64,

    /// Notifications with no handler
    skipped: AtomicU64,

    /// Largest batch observed in one turn
    peak_batch: AtomicU64,
}

impl DeliveryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed turn.
    pub fn record_report(&self, report: &DeliveryReport) {
        self.turns.fetch_add(1, Ordering::Relaxed);
        self.delivered
            .fetch_add(report.delivered_count() as u64, Ordering::Relaxed);
        self.failed
            .fetch_add(report.failures.len() as u64, Ordering::Relaxed);
        self.skipped
            .fetch_add(report.skipped.len() as u64, Ordering::Relaxed);
    }

    /// Records a turn aborted by a critical handler.
    pub fn record_abort(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Updates the peak batch size.
    pub fn observe_batch(&self, size: u64) {
        self.peak_batch.fetch_max(size, Ordering::Relaxed);
    }

    pub fn turns(&self) -> u64 {
        self.turns.load(Ordering::Relaxed)
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::Relaxed)
    }

    pub fn peak_batch(&self) -> u64 {
        self.peak_batch.load(Ordering::Relaxed)
    }

    /// Returns success rate as a percentage (0-100).
    pub fn success_rate(&self) -> f64 {
        let delivered = self.delivered();
        let total = delivered + self.failed();

        if total == 0 {
            100.0
        } else {
            (delivered as f64 / total as f64) * 100.0
        }
    }

    /// Creates a snapshot of all metrics for display/logging.
    ///
    /// Individual fields are read atomically but the snapshot as a whole may
    /// be inconsistent if a turn is being recorded concurrently.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            turns: self.turns(),
            delivered: self.delivered(),
            failed: self.failed(),
            skipped: self.skipped(),
            peak_batch: self.peak_batch(),
            success_rate: self.success_rate(),
        }
    }
}

/// Snapshot of metrics at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub turns: u64,
    pub delivered: u64,
    pub failed: u64,
    pub skipped: u64,
    pub peak_batch: u64,
    pub success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::NotificationKind;

    #[test]
    fn records_reports_and_peak() {
        let metrics = DeliveryMetrics::new();
        assert_eq!(metrics.success_rate(), 100.0);

        let mut report = DeliveryReport::new(1);
        report.delivered = vec![NotificationKind::Advice; 3];
        report.skipped.push(NotificationKind::GnnNotify);
        metrics.observe_batch(4);
        metrics.record_report(&report);
        metrics.observe_batch(2);
        metrics.record_abort();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.turns, 1);
        assert_eq!(snapshot.delivered, 3);
        assert_eq!(snapshot.failed, 1);
        assert_eq!(snapshot.skipped, 1);
        assert_eq!(snapshot.peak_batch, 4);
        assert_eq!(snapshot.success_rate, 75.0);
    }
}
