//! Command-line argument definition and processing.

use clap::Parser;

/// arta-forms - locale consistency checks for the Arta event-registration admin
#[derive(Parser, Debug)]
#[command(name = "arta-forms")]
#[command(version)]
#[command(about = "Locale consistency checks for the Arta event-registration admin", long_about = None)]
pub struct Args {
    /// Check that every locale file exposes the same key paths as the baseline
    #[arg(long)]
    pub check_locales: bool,

    /// Print the flattened key paths of one locale (e.g., en-US)
    #[arg(long, value_name = "LOCALE")]
    pub list_keys: Option<String>,

    /// Look up a translation key (e.g., app.forms.personal.first_name)
    #[arg(long, value_name = "KEY")]
    pub translate: Option<String>,

    /// Locale for --translate, resolved via the configured fallback chain
    /// (default: the configured default locale)
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Baseline locale for --check-locales (default: en-US, else first available)
    #[arg(short = 'b', long, value_name = "LOCALE")]
    pub baseline: Option<String>,

    /// Locales directory (default: config/locales next to the binary or installed location)
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Process command-line arguments and handle command flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(exit_code)` when a command was handled and the process should
///   exit; `None` when no command flag was given.
///
/// Details:
/// - `--check-locales` runs the consistency check against the baseline.
/// - `--list-keys` prints one locale's flattened key paths.
/// - `--translate` resolves `--locale` through the configured fallback chain
///   and prints the translation for one key.
/// - Commands are mutually independent; the first matching flag wins.
#[must_use]
pub fn process_args(args: &Args) -> Option<i32> {
    use crate::args::locales;

    if args.check_locales {
        return Some(locales::handle_check_locales(
            args.locales_dir.as_deref(),
            args.baseline.as_deref(),
        ));
    }

    if let Some(locale) = &args.list_keys {
        return Some(locales::handle_list_keys(
            locale,
            args.locales_dir.as_deref(),
        ));
    }

    if let Some(key) = &args.translate {
        return Some(locales::handle_translate(
            key,
            args.locale.as_deref().unwrap_or(""),
            args.locales_dir.as_deref(),
        ));
    }

    None
}
