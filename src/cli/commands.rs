use clap::Parser;

/// Generates BUCK files for the Go packages vendored under ./vendor
#[derive(Parser, Debug)]
#[command(
    name = "buckify",
    about = "Generates BUCK files for the Go packages vendored under ./vendor",
    version,
    long_about = "buckify scans ./vendor relative to the current directory, parses the \
                  package clause and imports of every non-test Go file, and writes a \
                  go_library rule to a BUCK file in each package directory. Dependencies \
                  on other vendored packages are listed as //vendor/<import path>:<name>; \
                  all other imports are ignored. Existing BUCK files are overwritten."
)]
pub struct CliArgs {
    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Log level requested on the command line, if any.
    ///
    /// `--log-level` wins over `--verbose` and `--quiet`.
    pub fn requested_log_level(&self) -> Option<&str> {
        if let Some(level) = &self.log_level {
            Some(level.as_str())
        } else if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::parse_from(["buckify"]);
        assert!(args.log_level.is_none());
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert_eq!(args.requested_log_level(), None);
    }

    #[test]
    fn test_verbose_flag() {
        let args = CliArgs::parse_from(["buckify", "-v"]);
        assert!(args.verbose);
        assert_eq!(args.requested_log_level(), Some("debug"));
    }

    #[test]
    fn test_quiet_flag() {
        let args = CliArgs::parse_from(["buckify", "-q"]);
        assert!(args.quiet);
        assert_eq!(args.requested_log_level(), Some("error"));
    }

    #[test]
    fn test_log_level_flag_wins() {
        let args = CliArgs::parse_from(["buckify", "--log-level", "trace", "-v"]);
        assert_eq!(args.requested_log_level(), Some("trace"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["buckify", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(CliArgs::try_parse_from(["buckify", "/some/path"]).is_err());
    }
}
