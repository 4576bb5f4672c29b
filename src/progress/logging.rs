//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { vendor_dir } => {
                debug!(vendor_dir = %vendor_dir, "Starting BUCK generation");
            }
            ProgressEvent::ScanComplete {
                packages_found,
                scan_time,
            } => {
                debug!(
                    packages = packages_found,
                    scan_time_ms = scan_time.as_millis() as u64,
                    "Scan complete"
                );
            }
            ProgressEvent::PackageGenerated { path, deps } => {
                info!(path = %path, deps = %deps, "generated BUCK");
            }
            ProgressEvent::Completed { count, total_time } => {
                info!(
                    count,
                    total_time_ms = total_time.as_millis() as u64,
                    "generated BUCK files"
                );
            }
        }
    }
}
