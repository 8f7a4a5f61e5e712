//! Performance Metrics Module
//!
//! Every container in laney owns an [`AtomicMetrics`] that counts its
//! mutations, the ones that were rejected (insert on a full deque, removal from
//! an empty container) and how often a writer found the lock already taken.
//! Read-only operations are not recorded.
//!
//! Collection is compiled out when the `metrics` feature is disabled; the
//! recording calls stay in place and do nothing.

#[cfg(feature = "metrics")]
use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use core::time::Duration;

/// Point-in-time view of a container's counters
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerformanceMetrics {
    /// Total number of recorded mutations
    pub total_operations: u64,
    /// Mutations that changed the container
    pub successful_operations: u64,
    /// Mutations rejected because the container was full or empty
    pub failed_operations: u64,
    /// Writers that had to wait for the lock
    pub contended_operations: u64,
    /// Average time spent inside a successful mutation, lock wait included
    pub avg_operation_time_ns: u64,
    /// Slowest successful mutation
    pub max_operation_time_ns: u64,
    /// Element count after the most recent mutation
    pub current_len: usize,
    /// Highest element count observed
    pub peak_len: usize,
}

impl PerformanceMetrics {
    /// Success rate as a percentage of all recorded mutations
    pub fn success_rate(&self) -> f64 {
        Self::percent(self.successful_operations, self.total_operations)
    }

    /// Contention rate as a percentage of all recorded mutations
    pub fn contention_rate(&self) -> f64 {
        Self::percent(self.contended_operations, self.total_operations)
    }

    /// Failure rate as a percentage of all recorded mutations
    pub fn failure_rate(&self) -> f64 {
        Self::percent(self.failed_operations, self.total_operations)
    }

    /// Average operation time as a [`Duration`]
    pub fn avg_operation_time(&self) -> Duration {
        Duration::from_nanos(self.avg_operation_time_ns)
    }

    /// Maximum operation time as a [`Duration`]
    pub fn max_operation_time(&self) -> Duration {
        Duration::from_nanos(self.max_operation_time_ns)
    }

    fn percent(part: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }
}

/// Lock-free counters shared by all operations on one container
#[cfg(feature = "metrics")]
#[derive(Debug)]
pub struct AtomicMetrics {
    enabled: AtomicBool,
    total_operations: AtomicU64,
    successful_operations: AtomicU64,
    failed_operations: AtomicU64,
    contended_operations: AtomicU64,
    total_time_ns: AtomicU64,
    max_time_ns: AtomicU64,
    current_len: AtomicUsize,
    peak_len: AtomicUsize,
}

#[cfg(feature = "metrics")]
impl Default for AtomicMetrics {
    fn default() -> Self {
        Self {
            enabled: AtomicBool::new(true),
            total_operations: AtomicU64::new(0),
            successful_operations: AtomicU64::new(0),
            failed_operations: AtomicU64::new(0),
            contended_operations: AtomicU64::new(0),
            total_time_ns: AtomicU64::new(0),
            max_time_ns: AtomicU64::new(0),
            current_len: AtomicUsize::new(0),
            peak_len: AtomicUsize::new(0),
        }
    }
}

#[cfg(feature = "metrics")]
impl AtomicMetrics {
    /// Record a mutation that changed the container, leaving it with `len` elements
    pub fn record_success(&self, duration: Duration, len: usize) {
        if !self.is_enabled() {
            return;
        }
        let duration_ns = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);

        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.successful_operations.fetch_add(1, Ordering::Relaxed);
        self.total_time_ns.fetch_add(duration_ns, Ordering::Relaxed);
        self.max_time_ns.fetch_max(duration_ns, Ordering::Relaxed);
        self.record_len(len);
    }

    /// Record a mutation rejected because the container was full or empty
    pub fn record_failure(&self) {
        if !self.is_enabled() {
            return;
        }
        self.total_operations.fetch_add(1, Ordering::Relaxed);
        self.failed_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a writer that found the lock held
    pub fn record_contention(&self) {
        if !self.is_enabled() {
            return;
        }
        self.contended_operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the element count without counting an operation
    pub fn record_len(&self, len: usize) {
        self.current_len.store(len, Ordering::Relaxed);
        self.peak_len.fetch_max(len, Ordering::Relaxed);
    }

    /// Turn recording on or off; counters keep their values
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Whether recording is on
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Current counters
    pub fn snapshot(&self) -> PerformanceMetrics {
        let total_ops = self.total_operations.load(Ordering::Relaxed);
        let successful_ops = self.successful_operations.load(Ordering::Relaxed);
        let total_time = self.total_time_ns.load(Ordering::Relaxed);

        PerformanceMetrics {
            total_operations: total_ops,
            successful_operations: successful_ops,
            failed_operations: self.failed_operations.load(Ordering::Relaxed),
            contended_operations: self.contended_operations.load(Ordering::Relaxed),
            avg_operation_time_ns: if successful_ops > 0 {
                total_time / successful_ops
            } else {
                0
            },
            max_operation_time_ns: self.max_time_ns.load(Ordering::Relaxed),
            current_len: self.current_len.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Zero the operation counters
    pub fn reset(&self) {
        self.total_operations.store(0, Ordering::Relaxed);
        self.successful_operations.store(0, Ordering::Relaxed);
        self.failed_operations.store(0, Ordering::Relaxed);
        self.contended_operations.store(0, Ordering::Relaxed);
        self.total_time_ns.store(0, Ordering::Relaxed);
        self.max_time_ns.store(0, Ordering::Relaxed);
        // The peak restarts from what the container holds right now.
        self.peak_len
            .store(self.current_len.load(Ordering::Relaxed), Ordering::Relaxed);
    }
}

/// No-op stand-in used when the `metrics` feature is off
#[cfg(not(feature = "metrics"))]
#[derive(Debug, Default)]
pub struct AtomicMetrics;

#[cfg(not(feature = "metrics"))]
impl AtomicMetrics {
    #[allow(missing_docs)]
    pub fn record_success(&self, _duration: Duration, _len: usize) {}
    #[allow(missing_docs)]
    pub fn record_failure(&self) {}
    #[allow(missing_docs)]
    pub fn record_contention(&self) {}
    #[allow(missing_docs)]
    pub fn record_len(&self, _len: usize) {}
    #[allow(missing_docs)]
    pub fn set_enabled(&self, _enabled: bool) {}
    #[allow(missing_docs)]
    pub fn is_enabled(&self) -> bool {
        false
    }
    #[allow(missing_docs)]
    pub fn snapshot(&self) -> PerformanceMetrics {
        PerformanceMetrics::default()
    }
    #[allow(missing_docs)]
    pub fn reset(&self) {}
}

/// Containers that expose their [`AtomicMetrics`]
pub trait MetricsCollector {
    /// Current performance metrics
    fn metrics(&self) -> PerformanceMetrics;

    /// Reset all counters
    fn reset_metrics(&self);

    /// Enable or disable collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Whether collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
