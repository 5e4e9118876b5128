//! Locale resolution with fallback chain support.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::i18n::loader::is_valid_locale_format;

/// i18n configuration loaded from `config/i18n.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    /// Locale used when the requested locale cannot be resolved.
    #[serde(default = "default_locale_code")]
    pub default_locale: String,
    /// Map of locale code to its fallback locale (e.g., `nl-BE` -> `nl-NL`).
    #[serde(default)]
    pub fallbacks: HashMap<String, String>,
    /// Locales that have a shipped locale file. Empty means "accept any".
    #[serde(default)]
    pub available: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale_code(),
            fallbacks: HashMap::new(),
            available: Vec::new(),
        }
    }
}

/// Default locale when `i18n.yml` does not name one.
fn default_locale_code() -> String {
    "en-US".to_string()
}

impl I18nConfig {
    /// What: Load the i18n configuration from a YAML file.
    ///
    /// Inputs:
    /// - `path`: Path to `i18n.yml`
    ///
    /// Output:
    /// - `Result<Self, String>` with the parsed configuration
    ///
    /// # Errors
    /// - Returns `Err` when the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read i18n config {}: {e}", path.display()))?;
        serde_norway::from_str(&contents)
            .map_err(|e| format!("Failed to parse i18n config {}: {e}", path.display()))
    }

    /// What: Check whether a locale is listed as available.
    ///
    /// Details:
    /// - An empty `available` list accepts every locale (useful in tests and
    ///   for custom locales directories)
    #[must_use]
    pub fn is_available(&self, locale: &str) -> bool {
        self.available.is_empty() || self.available.iter().any(|l| l == locale)
    }
}

/// What: Resolve the effective locale to use, following the fallback chain.
///
/// Inputs:
/// - `requested`: Requested locale (empty string means "use the default")
/// - `config`: Parsed i18n configuration
///
/// Output:
/// - Resolved locale code (e.g., "nl-NL")
///
/// Details:
/// - Invalid or empty requests resolve to the configured default
/// - The fallback chain is followed until an available locale is reached
///   (e.g., `nl-BE` -> `nl-NL`); cycles are detected and resolve to the
///   default
#[must_use]
pub fn resolve_locale(requested: &str, config: &I18nConfig) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return config.default_locale.clone();
    }
    if !is_valid_locale_format(trimmed) {
        tracing::warn!(
            "Invalid locale format: '{}'. Using default '{}'.",
            trimmed,
            config.default_locale
        );
        return config.default_locale.clone();
    }

    let mut current = trimmed.to_string();
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        if config.is_available(&current) {
            if current != trimmed {
                tracing::debug!(
                    "Locale '{}' resolved to '{}' via fallback chain",
                    trimmed,
                    current
                );
            }
            return current;
        }
        if !visited.insert(current.clone()) {
            tracing::warn!(
                "Fallback cycle detected while resolving locale '{}'. Using default '{}'.",
                trimmed,
                config.default_locale
            );
            return config.default_locale.clone();
        }
        match config.fallbacks.get(&current) {
            Some(next) => current = next.clone(),
            None => {
                tracing::debug!(
                    "Locale '{}' has no fallback; using default '{}'",
                    current,
                    config.default_locale
                );
                return config.default_locale.clone();
            }
        }
    }
}
