//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a run progresses
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Run started
    Started { vendor_dir: String },

    /// Vendor tree scanned
    ScanComplete {
        packages_found: usize,
        scan_time: Duration,
    },

    /// One build file written
    PackageGenerated { path: String, deps: String },

    /// All build files written
    Completed { count: usize, total_time: Duration },
}

/// Trait for handling progress events during a run
pub trait ProgressHandler: Send + Sync {
    /// Called when a progress event occurs
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
