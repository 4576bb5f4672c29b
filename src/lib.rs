//! buckify - BUCK file generation for vendored Go packages
//!
//! Scans a `vendor/` tree of Go packages and writes one `go_library` rule per
//! package directory, with dependency edges between vendored packages filled
//! in from each package's imports.
//!
//! # Pipeline
//!
//! 1. [`vendor::VendorScanner`] walks the tree and uses [`parser`] to read the
//!    package clause and imports of every non-test `.go` file.
//! 2. [`vendor::TargetNameIndex`] maps each discovered import path to its
//!    Buck target name.
//! 3. [`vendor::DependencyResolver`] keeps the imports found in the index and
//!    turns them into `//vendor/<import path>:<name>` labels.
//! 4. [`output::BuildFileEmitter`] renders and writes the `BUCK` file.
//!
//! [`pipeline::PipelineOrchestrator`] runs the steps in import path order and
//! stops at the first error.
//!
//! # Example
//!
//! ```no_run
//! use buckify::{BuckifyConfig, PipelineOrchestrator, RealFileSystem};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = BuckifyConfig::new("/path/to/repo");
//! let fs = RealFileSystem::new();
//! let report = PipelineOrchestrator::new(&fs, &config).execute()?;
//! println!("generated {} BUCK files", report.count());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod progress;
pub mod util;
pub mod vendor;

pub use config::{BuckifyConfig, ConfigError};
pub use error::ParseError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use pipeline::{GenerationReport, PipelineOrchestrator};
pub use vendor::{PackageUnit, TargetNameIndex};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
