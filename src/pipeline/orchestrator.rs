use super::plan::plan_builds;
use crate::config::BuckifyConfig;
use crate::fs::FileSystem;
use crate::output::BuildFileEmitter;
use crate::progress::{LoggingHandler, ProgressEvent, ProgressHandler};
use crate::vendor::{format_deps, VendorScanner};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::debug;

/// One build file written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub display_path: String,
    pub deps: Vec<String>,
}

/// Outcome of a completed run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
    pub total_time: Duration,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Drives a full regeneration of the vendor tree's build files.
///
/// Packages are processed in import path order and the run stops at the
/// first error. Files written before the failure are left in place.
pub struct PipelineOrchestrator<'a> {
    fs: &'a dyn FileSystem,
    config: &'a BuckifyConfig,
    progress_handler: Box<dyn ProgressHandler + 'a>,
}

impl<'a> PipelineOrchestrator<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a BuckifyConfig) -> Self {
        Self {
            fs,
            config,
            progress_handler: Box::new(LoggingHandler),
        }
    }

    pub fn with_progress_handler(mut self, handler: impl ProgressHandler + 'a) -> Self {
        self.progress_handler = Box::new(handler);
        self
    }

    pub fn execute(&self) -> Result<GenerationReport> {
        let start = Instant::now();
        let vendor_dir = self.config.vendor_dir();

        self.progress_handler.on_progress(&ProgressEvent::Started {
            vendor_dir: vendor_dir.display().to_string(),
        });

        let packages = VendorScanner::new(self.fs, &vendor_dir)
            .and_then(|scanner| scanner.scan())
            .context("collect vendor packages")?;

        self.progress_handler.on_progress(&ProgressEvent::ScanComplete {
            packages_found: packages.len(),
            scan_time: start.elapsed(),
        });

        // Every package is known before the first dependency is resolved.
        let builds = plan_builds(packages, &self.config.cell_prefix);

        let emitter = BuildFileEmitter::new(
            self.fs,
            &vendor_dir,
            &self.config.vendor_dir_name,
            &self.config.build_file_name,
        );

        let mut report = GenerationReport::default();
        for build in builds {
            let file = emitter
                .emit(&build.unit, &build.deps)
                .with_context(|| {
                    format!(
                        "write {} for {}",
                        self.config.build_file_name, build.unit.import_path
                    )
                })?;
            debug!(path = %file.path.display(), bytes = file.contents.len(), "Wrote build file");

            self.progress_handler.on_progress(&ProgressEvent::PackageGenerated {
                path: file.display_path.clone(),
                deps: format_deps(&build.deps),
            });

            report.files.push(GeneratedFile {
                display_path: file.display_path,
                deps: build.deps,
            });
        }

        report.total_time = start.elapsed();
        self.progress_handler.on_progress(&ProgressEvent::Completed {
            count: report.count(),
            total_time: report.total_time,
        });

        Ok(report)
    }
}
