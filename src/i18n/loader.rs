//! Locale file loading and parsing.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::translations::TranslationMap;
use crate::i18n::value::LocaleValue;

/// A parsed locale file: the locale code plus its document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDocument {
    /// Locale code the file was loaded for (e.g., "en-US").
    pub locale: String,
    /// Parsed tree under the top-level locale key.
    pub tree: LocaleValue,
}

impl LocaleDocument {
    /// What: Flatten the document into sorted dotted key paths.
    ///
    /// Output:
    /// - One path per translation leaf (see [`LocaleValue::flatten`])
    #[must_use]
    pub fn key_paths(&self) -> Vec<String> {
        self.tree.flatten()
    }

    /// What: Build a flat dot-notation lookup map from the document tree.
    ///
    /// Output:
    /// - `TranslationMap` from dotted key to translated string
    #[must_use]
    pub fn to_translation_map(&self) -> TranslationMap {
        let mut map = HashMap::new();
        self.tree.collect_translations("", &mut map);
        map
    }
}

/// What: Load a locale YAML file and parse it into a `LocaleDocument`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "de-DE")
/// - `locales_dir`: Path to locales directory
///
/// Output:
/// - `Result<LocaleDocument, String>` containing the parsed document or error
///
/// # Errors
/// - Returns `Err` when the locale code is empty or has an invalid format
/// - Returns `Err` when the locale file does not exist in the locales directory
/// - Returns `Err` when the locale file cannot be read (I/O error)
/// - Returns `Err` when the locale file is empty
/// - Returns `Err` when the YAML content cannot be parsed or contains an
///   unsupported node (e.g. a sequence)
/// - Returns `Err` when the file's top-level key does not match `locale`
///
/// Details:
/// - Loads file from `locales_dir/{locale}.yml`
/// - The file must contain a single top-level key equal to the locale code,
///   with a mapping underneath (matching the shipped locale file layout)
/// - Validates locale format before attempting to load
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<LocaleDocument, String> {
    // Validate locale format
    if locale.is_empty() {
        return Err("Locale code cannot be empty".to_string());
    }

    if !is_valid_locale_format(locale) {
        return Err(format!(
            "Invalid locale code format: '{locale}'. Expected format: language[-region] (e.g., 'en-US', 'nl-NL')"
        ));
    }

    let file_path = locales_dir.join(format!("{locale}.yml"));

    if !file_path.exists() {
        return Err(format!(
            "Locale file not found: {}. Available locales can be checked in the locales/ directory.",
            file_path.display()
        ));
    }

    let contents = fs::read_to_string(&file_path)
        .map_err(|e| format!("Failed to read locale file {}: {e}", file_path.display()))?;

    if contents.trim().is_empty() {
        return Err(format!("Locale file is empty: {}", file_path.display()));
    }

    parse_locale_str(locale, &contents).map_err(|e| {
        format!(
            "Failed to parse locale file {}: {e}. Please check YAML syntax.",
            file_path.display()
        )
    })
}

/// What: Validate locale code format.
///
/// Inputs:
/// - `locale`: Locale code to validate
///
/// Output:
/// - `true` if format looks valid, `false` otherwise
///
/// Details:
/// - Allows simple language codes (e.g., "en") or full codes (e.g., "en-US",
///   "zh-Hans-CN")
/// - Rejects empty strings, spaces, and stray hyphens
#[must_use]
pub fn is_valid_locale_format(locale: &str) -> bool {
    if locale.is_empty() || locale.len() > 20 {
        return false;
    }

    locale.chars().all(|c| c.is_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse locale YAML content into a `LocaleDocument`.
///
/// Inputs:
/// - `locale`: Locale code the content is expected to describe
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<LocaleDocument, String>` containing the parsed document
///
/// # Errors
/// - Returns `Err` when the YAML is malformed
/// - Returns `Err` when the top level is not a mapping containing `locale`
/// - Returns `Err` when any node under the locale key is unsupported
///
/// Details:
/// - Expects a top-level key matching the locale code (e.g., "nl-NL:"), the
///   same layout the original locale files use
pub fn parse_locale_str(locale: &str, yaml_content: &str) -> Result<LocaleDocument, String> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| format!("Failed to parse YAML: {e}"))?;

    let Some(top) = doc.as_mapping() else {
        return Err("Top level of a locale file must be a mapping".to_string());
    };

    let locale_value = top
        .iter()
        .find_map(|(key, value)| (key.as_str() == Some(locale)).then_some(value))
        .ok_or_else(|| format!("Missing top-level '{locale}:' key"))?;

    if locale_value.as_mapping().is_none() {
        return Err(format!("Top-level '{locale}:' key must hold a mapping"));
    }

    let tree = LocaleValue::from_yaml(locale_value)?;

    Ok(LocaleDocument {
        locale: locale.to_string(),
        tree,
    })
}

/// Locale loader that caches loaded documents.
pub struct LocaleLoader {
    /// Directory the loader reads locale files from.
    locales_dir: PathBuf,
    /// Documents already loaded, keyed by locale code.
    cache: HashMap<String, LocaleDocument>,
}

impl LocaleLoader {
    /// What: Create a new `LocaleLoader`.
    ///
    /// Inputs:
    /// - `locales_dir`: Path to locales directory
    #[must_use]
    pub fn new(locales_dir: PathBuf) -> Self {
        Self {
            locales_dir,
            cache: HashMap::new(),
        }
    }

    /// What: Load a locale file, using the cache if available.
    ///
    /// Inputs:
    /// - `locale`: Locale code to load
    ///
    /// Output:
    /// - `Result<LocaleDocument, String>` containing the parsed document
    ///
    /// # Errors
    /// - Returns `Err` when the locale file cannot be loaded (see
    ///   `load_locale_file` for specific error conditions)
    pub fn load(&mut self, locale: &str) -> Result<LocaleDocument, String> {
        if let Some(doc) = self.cache.get(locale) {
            return Ok(doc.clone());
        }
        match load_locale_file(locale, &self.locales_dir) {
            Ok(doc) => {
                tracing::debug!(
                    "Loaded locale '{}' with {} translation keys",
                    locale,
                    doc.tree.leaf_count()
                );
                self.cache.insert(locale.to_string(), doc.clone());
                Ok(doc)
            }
            Err(e) => {
                tracing::warn!("Failed to load locale '{}': {}", locale, e);
                Err(e)
            }
        }
    }

    /// What: Get locales directory path.
    #[must_use]
    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }
}
