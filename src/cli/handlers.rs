use crate::config::BuckifyConfig;
use crate::fs::RealFileSystem;
use crate::pipeline::PipelineOrchestrator;
use tracing::{debug, error};

/// Regenerates every BUCK file under the configured vendor tree.
///
/// Returns the process exit code.
pub fn handle_generate(config: &BuckifyConfig) -> i32 {
    if let Err(e) = config.validate() {
        error!(error = %e, "buckify failed");
        return 1;
    }
    debug!("{}", config);

    let fs = RealFileSystem::new();
    let result = PipelineOrchestrator::new(&fs, config).execute();
    match result {
        Ok(report) => {
            debug!(
                count = report.count(),
                total_time_ms = report.total_time.as_millis() as u64,
                "Run complete"
            );
            0
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "buckify failed");
            1
        }
    }
}
