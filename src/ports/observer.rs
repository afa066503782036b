//! Maintenance observer port - optional hook around jump-target maintenance.
//!
//! Jump-target maintenance is the one linear pass the tree runs per
//! structural edit. Instead of logging timings inline, the core reports each
//! pass to an observer, letting callers attach progress output, metrics, or
//! nothing at all.

use std::time::Duration;

/// Measurements from one jump-target maintenance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceStats {
    /// Number of nodes visited (= tree size at the time of the pass).
    pub nodes_visited: usize,
    /// Wall-clock duration of the pass.
    pub elapsed: Duration,
}

/// Observer trait for monitoring jump-target maintenance.
///
/// The default implementation ignores the event, so implementors only
/// override what they care about.
///
/// # Examples
///
/// ```
/// use kifu_notebook::ports::{MaintenanceObserver, MaintenanceStats};
///
/// #[derive(Default)]
/// struct PassCounter {
///     passes: usize,
/// }
///
/// impl MaintenanceObserver for PassCounter {
///     fn on_maintenance(&mut self, _stats: MaintenanceStats) {
///         self.passes += 1;
///     }
/// }
/// ```
pub trait MaintenanceObserver {
    /// Called once after each maintenance pass completes.
    fn on_maintenance(&mut self, stats: MaintenanceStats) {
        let _ = stats;
    }
}

/// Observer that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl MaintenanceObserver for NullObserver {}
