//! Internationalization (i18n) module for arta-forms.
//!
//! This module provides locale file loading, key flattening, consistency
//! checking, locale resolution, and translation lookup.
//!
//! # Overview
//!
//! The i18n system supports:
//! - **Key Flattening**: Parses nested locale YAML into a [`LocaleValue`]
//!   tree and flattens it into dot-notation key paths
//! - **Consistency Checking**: Compares every locale file's key paths against
//!   a baseline locale and reports the symmetric difference
//! - **Locale Resolution**: Resolves a requested locale with a fallback chain
//!   (e.g., `nl-BE` -> `nl-NL` -> `en-US`)
//! - **Translation Lookup**: `translate` and `translate_with_fallback` over
//!   flat dot-notation maps
//!
//! # Locale Files
//!
//! Locale files live in `config/locales/{locale}.yml` (e.g.,
//! `config/locales/en-US.yml`, `config/locales/nl-NL.yml`). Each file contains
//! a single top-level key matching the locale code with a nested structure
//! underneath that is flattened into dot-notation keys:
//!
//! ```yaml
//! en-US:
//!   app:
//!     forms:
//!       personal:
//!         first_name: "First name"
//! ```
//!
//! This becomes accessible as `app.forms.personal.first_name`.
//!
//! Files whose stem ends in `.framework` (e.g. `defaults.framework.yml`) only
//! carry framework-level translations and are excluded from consistency
//! checks.
//!
//! # Configuration
//!
//! The i18n system is configured via `config/i18n.yml`:
//! - `default_locale`: Locale used when resolution fails (usually `en-US`)
//! - `available`: Locales with a shipped locale file
//! - `fallbacks`: Map of locale codes to their fallback locales
//!
//! # Error Handling
//!
//! - Malformed locale files (unsupported node types such as sequences) fail
//!   fast with an error naming the offending dotted path
//! - Key-path comparison itself never fails; it always yields a (possibly
//!   empty) pair of difference sets and the caller asserts emptiness
//! - Missing translation keys return the key itself and log debug messages

mod consistency;
mod diff;
mod loader;
mod resolver;
pub mod translations;
mod value;

pub use consistency::{
    ConsistencyReport, LocaleComparison, check_locales, discover_locales, select_baseline,
};
pub use diff::{KeyDiff, diff_keys};
pub use loader::{
    LocaleDocument, LocaleLoader, is_valid_locale_format, load_locale_file, parse_locale_str,
};
pub use resolver::{I18nConfig, resolve_locale};
pub use translations::{TranslationMap, translate, translate_with_fallback};
pub use value::LocaleValue;

use std::path::PathBuf;

/// What: Find a config file in development and installed locations.
///
/// Inputs:
/// - `relative_path`: Relative path from the config directory (e.g., "i18n.yml")
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing file found, or `None` if not found
///
/// Details:
/// - Tries locations in order:
///   1. Development location: `CARGO_MANIFEST_DIR/config/{relative_path}`
///   2. Installed location: `/usr/share/arta-forms/config/{relative_path}`
#[must_use]
pub fn find_config_file(relative_path: &str) -> Option<PathBuf> {
    // Try development location first (when running from source)
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join(relative_path);
    if dev_path.exists() {
        return Some(dev_path);
    }

    // Try installed location
    let installed_path = PathBuf::from("/usr/share/arta-forms/config").join(relative_path);
    if installed_path.exists() {
        return Some(installed_path);
    }

    None
}

/// What: Find the locales directory in development and installed locations.
///
/// Output:
/// - `Some(PathBuf)` pointing to the first existing locales directory found,
///   or `None` if not found
///
/// Details:
/// - Tries locations in order:
///   1. Development location: `CARGO_MANIFEST_DIR/config/locales`
///   2. Installed location: `/usr/share/arta-forms/locales`
#[must_use]
pub fn find_locales_dir() -> Option<PathBuf> {
    // Try development location first (when running from source)
    let dev_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("config")
        .join("locales");
    if dev_path.exists() && dev_path.is_dir() {
        return Some(dev_path);
    }

    // Try installed location
    let installed_path = PathBuf::from("/usr/share/arta-forms/locales");
    if installed_path.exists() && installed_path.is_dir() {
        return Some(installed_path);
    }

    None
}
