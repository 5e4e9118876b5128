//! Handlers for the locale CLI commands.

use std::path::{Path, PathBuf};

use crate::i18n::{
    self, I18nConfig, LocaleLoader, check_locales, load_locale_file, resolve_locale,
    translate_with_fallback,
};
use crate::i18n::translations::TranslationMap;

/// Exit code for a usage or environment problem (no locales directory, bad
/// locale code), as opposed to a failed consistency check.
const EXIT_USAGE: i32 = 2;

/// What: Resolve the locales directory for a command.
///
/// Inputs:
/// - `dir_override`: `--locales-dir` value, if given.
///
/// Output:
/// - `Ok(PathBuf)` with the directory to use, `Err` with a message otherwise.
fn resolve_locales_dir(dir_override: Option<&str>) -> Result<PathBuf, String> {
    if let Some(dir) = dir_override {
        let path = PathBuf::from(dir);
        if path.is_dir() {
            return Ok(path);
        }
        return Err(format!("Locales directory not found: {dir}"));
    }
    i18n::find_locales_dir()
        .ok_or_else(|| "No locales directory found (tried config/locales and the installed location); use --locales-dir".to_string())
}

/// What: Handle `--check-locales`.
///
/// Inputs:
/// - `dir_override`: `--locales-dir` value, if given.
/// - `baseline`: `--baseline` value, if given.
///
/// Output:
/// - Process exit code: 0 when all locales match the baseline, 1 on any
///   mismatch, 2 on usage/environment errors.
///
/// Details:
/// - Mismatch output enumerates the dotted paths missing from each side so
///   the offending locale file entries can be fixed directly.
pub fn handle_check_locales(dir_override: Option<&str>, baseline: Option<&str>) -> i32 {
    let locales_dir = match resolve_locales_dir(dir_override) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_USAGE;
        }
    };

    tracing::info!(dir = %locales_dir.display(), "Checking locale consistency");
    let report = match check_locales(&locales_dir, baseline) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_USAGE;
        }
    };

    println!(
        "Checking locales in {} (baseline: {}, {} keys)",
        locales_dir.display(),
        report.baseline,
        report.baseline_key_count
    );

    for comparison in &report.comparisons {
        if comparison.diff.is_empty() {
            println!("  {}: OK", comparison.locale);
            continue;
        }
        println!("  {}: MISMATCH", comparison.locale);
        if !comparison.diff.only_in_baseline.is_empty() {
            println!("    only in {}:", report.baseline);
            for path in &comparison.diff.only_in_baseline {
                println!("      {path}");
            }
        }
        if !comparison.diff.only_in_other.is_empty() {
            println!("    only in {}:", comparison.locale);
            for path in &comparison.diff.only_in_other {
                println!("      {path}");
            }
        }
    }

    if report.is_consistent() {
        println!("All locales match the baseline.");
        0
    } else {
        let count = report.mismatches().count();
        println!("{count} locale(s) differ from the baseline.");
        1
    }
}

/// What: Load the i18n configuration, defaulting when no file is shipped.
///
/// Output:
/// - `Ok(I18nConfig)` from `config/i18n.yml`, or the built-in defaults when
///   the file does not exist; `Err` when the file exists but cannot be parsed.
fn load_i18n_config() -> Result<I18nConfig, String> {
    i18n::find_config_file("i18n.yml").map_or_else(
        || {
            tracing::debug!("i18n.yml not found, using default i18n configuration");
            Ok(I18nConfig::default())
        },
        |path| I18nConfig::load(&path),
    )
}

/// What: Load primary and fallback translation maps for a requested locale.
///
/// Inputs:
/// - `requested`: Requested locale ("" means the configured default).
/// - `locales_dir`: Directory holding `{locale}.yml` files.
/// - `config`: Parsed i18n configuration.
///
/// Output:
/// - `Ok((primary, fallback))` translation maps.
///
/// # Errors
/// - Returns `Err` when the resolved locale's file cannot be loaded.
///
/// Details:
/// - The requested locale is resolved through the fallback chain first
///   (e.g., `nl-BE` -> `nl-NL`).
/// - The fallback map is the default locale's; a missing default locale file
///   degrades to an empty fallback map rather than failing the lookup.
pub(crate) fn load_catalogs(
    requested: &str,
    locales_dir: &Path,
    config: &I18nConfig,
) -> Result<(TranslationMap, TranslationMap), String> {
    let resolved = resolve_locale(requested, config);
    let mut loader = LocaleLoader::new(locales_dir.to_path_buf());
    let primary = loader.load(&resolved)?.to_translation_map();
    let fallback = if resolved == config.default_locale {
        primary.clone()
    } else {
        loader
            .load(&config.default_locale)
            .map(|doc| doc.to_translation_map())
            .unwrap_or_default()
    };
    Ok((primary, fallback))
}

/// What: Handle `--translate KEY`.
///
/// Inputs:
/// - `key`: Dot-notation translation key to look up.
/// - `requested_locale`: `--locale` value ("" means the configured default).
/// - `dir_override`: `--locales-dir` value, if given.
///
/// Output:
/// - Process exit code: 0 on success (the translation, or the key itself
///   when missing, is printed), 2 when the locale catalog cannot be loaded.
pub fn handle_translate(key: &str, requested_locale: &str, dir_override: Option<&str>) -> i32 {
    let locales_dir = match resolve_locales_dir(dir_override) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_USAGE;
        }
    };

    let config = match load_i18n_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_USAGE;
        }
    };

    match load_catalogs(requested_locale, &locales_dir, &config) {
        Ok((primary, fallback)) => {
            println!("{}", translate_with_fallback(key, &primary, &fallback));
            0
        }
        Err(e) => {
            eprintln!("{e}");
            EXIT_USAGE
        }
    }
}

/// What: Handle `--list-keys LOCALE`.
///
/// Inputs:
/// - `locale`: Locale code to flatten.
/// - `dir_override`: `--locales-dir` value, if given.
///
/// Output:
/// - Process exit code: 0 on success, 2 when the locale cannot be loaded.
pub fn handle_list_keys(locale: &str, dir_override: Option<&str>) -> i32 {
    let locales_dir = match resolve_locales_dir(dir_override) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return EXIT_USAGE;
        }
    };

    match load_locale_file(locale, &locales_dir) {
        Ok(doc) => {
            for path in doc.key_paths() {
                println!("{path}");
            }
            0
        }
        Err(e) => {
            eprintln!("{e}");
            EXIT_USAGE
        }
    }
}
