//! Configuration management for buckify
//!
//! Generation behaviour is fixed: the vendor tree is always `<root>/vendor`,
//! where `<root>` is the working directory the binary was started in, and one
//! `BUCK` file is written per package. The root is still carried as an
//! explicit value so the pipeline can be pointed at any tree in tests.
//!
//! # Environment Variables
//!
//! - `BUCKIFY_LOG_LEVEL`: Logging level - default: "info"
//! - `BUCKIFY_LOG_JSON`: Emit JSON log lines (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use buckify::BuckifyConfig;
//!
//! let config = BuckifyConfig::from_current_dir().expect("working directory");
//! config.validate().expect("Invalid configuration");
//! println!("{}", config.vendor_dir().display());
//! ```

use std::env;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_VENDOR_DIR_NAME: &str = "vendor";
const DEFAULT_BUILD_FILE_NAME: &str = "BUCK";
const DEFAULT_CELL_PREFIX: &str = "vendor";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Working directory could not be determined
    #[error("read working directory: {0}")]
    CurrentDir(#[from] io::Error),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuckifyConfig {
    /// Repository root the vendor directory lives in
    pub root_dir: PathBuf,

    /// Name of the vendor directory under the root
    pub vendor_dir_name: String,

    /// File name written into every package directory
    pub build_file_name: String,

    /// Path prefix of dependency labels, as in `//<prefix>/<import>:<name>`
    pub cell_prefix: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON log lines
    pub log_json: bool,
}

impl BuckifyConfig {
    /// Configuration with built-in defaults rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            vendor_dir_name: DEFAULT_VENDOR_DIR_NAME.to_string(),
            build_file_name: DEFAULT_BUILD_FILE_NAME.to_string(),
            cell_prefix: DEFAULT_CELL_PREFIX.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }

    /// Like [`BuckifyConfig::new`], with logging settings read from `BUCKIFY_*` variables.
    pub fn from_env(root_dir: impl Into<PathBuf>) -> Self {
        let log_level = env::var("BUCKIFY_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("BUCKIFY_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            log_level,
            log_json,
            ..Self::new(root_dir)
        }
    }

    /// Configuration rooted at the process's working directory.
    pub fn from_current_dir() -> Result<Self, ConfigError> {
        let root_dir = env::current_dir()?;
        Ok(Self::from_env(root_dir))
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.root_dir.join(&self.vendor_dir_name)
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any validation fails
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vendor_dir_name.is_empty() || self.vendor_dir_name.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(format!(
                "Vendor directory name must be a single path segment: {:?}",
                self.vendor_dir_name
            )));
        }

        if self.build_file_name.is_empty() || self.build_file_name.contains(['/', '\\']) {
            return Err(ConfigError::ValidationFailed(format!(
                "Build file name must be a single path segment: {:?}",
                self.build_file_name
            )));
        }

        if self.cell_prefix.is_empty()
            || self.cell_prefix.starts_with('/')
            || self.cell_prefix.ends_with('/')
        {
            return Err(ConfigError::ValidationFailed(format!(
                "Cell prefix must be non-empty without leading or trailing '/': {:?}",
                self.cell_prefix
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for BuckifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buckify Configuration:")?;
        writeln!(f, "  Root: {}", self.root_dir.display())?;
        writeln!(f, "  Vendor Dir: {}", self.vendor_dir().display())?;
        writeln!(f, "  Build File: {}", self.build_file_name)?;
        writeln!(f, "  Cell Prefix: //{}", self.cell_prefix)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}
