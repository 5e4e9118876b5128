//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides the `log_level` argument.
/// - `ARTA_FORMS_TRACE=1` enables TRACE level for detailed load timing.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("ARTA_FORMS_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_verbose_wins_over_log_level() {
        let args = crate::args::Args::parse_from(["arta-forms", "--log-level", "warn", "-v"]);
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    fn test_log_level_passthrough() {
        let args = crate::args::Args::parse_from(["arta-forms", "--log-level", "error"]);
        // Env override only applies when the variable is set to exactly "1"
        if std::env::var("ARTA_FORMS_TRACE").ok().as_deref() != Some("1") {
            assert_eq!(determine_log_level(&args), "error");
        }
    }
}
