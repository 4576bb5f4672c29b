use buckify::cli::commands::CliArgs;
use buckify::cli::handlers::handle_generate;
use buckify::util::{init_logging, LoggingConfig};
use buckify::{BuckifyConfig, VERSION};

use clap::Parser;
use tracing::{debug, error};

fn main() {
    let args = CliArgs::parse();

    let mut config = match BuckifyConfig::from_current_dir() {
        Ok(config) => config,
        Err(e) => {
            init_logging(LoggingConfig::default());
            error!(error = %e, "buckify failed");
            std::process::exit(1);
        }
    };
    if let Some(level) = args.requested_log_level() {
        config.log_level = level.to_lowercase();
    }

    init_logging(LoggingConfig::from_config(&config));

    debug!("buckify v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_generate(&config));
}
