//! Locale consistency checking against a baseline locale.
//!
//! Every shipped locale file must expose exactly the key paths the baseline
//! exposes, so a missing or stray translation is caught at test time instead
//! of surfacing as an untranslated key in a rendered page.

use std::fs;
use std::path::Path;

use crate::i18n::diff::{KeyDiff, diff_keys};
use crate::i18n::loader::LocaleLoader;

/// Filename-stem suffix marking files that only hold framework-level
/// translations (date formats and the like); those are not compared.
const FRAMEWORK_STEM_SUFFIX: &str = ".framework";

/// Key-path comparison of one locale against the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleComparison {
    /// Locale that was compared against the baseline.
    pub locale: String,
    /// Symmetric key-path difference; empty when the locale is consistent.
    pub diff: KeyDiff,
}

/// Outcome of checking every discovered locale against the baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Locale the others were compared against.
    pub baseline: String,
    /// Number of key paths in the baseline document.
    pub baseline_key_count: usize,
    /// One comparison per non-baseline locale, in locale order.
    pub comparisons: Vec<LocaleComparison>,
}

impl ConsistencyReport {
    /// What: Report whether every locale matched the baseline.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.comparisons.iter().all(|c| c.diff.is_empty())
    }

    /// What: Iterate the comparisons that found a mismatch.
    pub fn mismatches(&self) -> impl Iterator<Item = &LocaleComparison> {
        self.comparisons.iter().filter(|c| !c.diff.is_empty())
    }
}

/// What: Discover the locale codes available in a locales directory.
///
/// Inputs:
/// - `locales_dir`: Directory holding `{locale}.yml` files
///
/// Output:
/// - Sorted `Vec<String>` of locale codes
///
/// # Errors
/// - Returns `Err` when the directory cannot be read
///
/// Details:
/// - Only `.yml` files count; stems ending in `.framework` are skipped
///   (framework-only translation files are not expected to mirror the
///   application key tree)
pub fn discover_locales(locales_dir: &Path) -> Result<Vec<String>, String> {
    let entries = fs::read_dir(locales_dir).map_err(|e| {
        format!(
            "Failed to read locales directory {}: {e}",
            locales_dir.display()
        )
    })?;

    let mut locales = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            format!(
                "Failed to read locales directory {}: {e}",
                locales_dir.display()
            )
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("yml") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.ends_with(FRAMEWORK_STEM_SUFFIX) {
            tracing::debug!("Skipping framework-only locale file: {}", path.display());
            continue;
        }
        locales.push(stem.to_string());
    }
    locales.sort();
    Ok(locales)
}

/// What: Pick the baseline locale for a consistency check.
///
/// Inputs:
/// - `locales`: Sorted list of discovered locale codes
/// - `requested`: Explicit baseline override, if any
///
/// Output:
/// - `Result<String, String>` with the baseline locale code
///
/// # Errors
/// - Returns `Err` when `requested` is not among the discovered locales
/// - Returns `Err` when no locales were discovered at all
///
/// Details:
/// - Without an override, prefers `en-US` (the locale the application is
///   authored in), falling back to the lexicographically first locale
pub fn select_baseline(locales: &[String], requested: Option<&str>) -> Result<String, String> {
    if let Some(wanted) = requested {
        if locales.iter().any(|l| l == wanted) {
            return Ok(wanted.to_string());
        }
        return Err(format!(
            "Baseline locale '{wanted}' not found. Discovered locales: {}",
            locales.join(", ")
        ));
    }

    if locales.iter().any(|l| l == "en-US") {
        return Ok("en-US".to_string());
    }

    locales
        .first()
        .cloned()
        .ok_or_else(|| "No locale files found".to_string())
}

/// What: Compare every discovered locale's key paths against the baseline.
///
/// Inputs:
/// - `locales_dir`: Directory holding `{locale}.yml` files
/// - `requested_baseline`: Explicit baseline override, if any
///
/// Output:
/// - `Result<ConsistencyReport, String>` with one comparison per non-baseline
///   locale
///
/// # Errors
/// - Returns `Err` when discovery fails, when the baseline cannot be chosen,
///   or when any locale file fails to load or parse
///
/// Details:
/// - A mismatching locale does not abort the run; the report carries the
///   diff and the caller decides pass/fail
pub fn check_locales(
    locales_dir: &Path,
    requested_baseline: Option<&str>,
) -> Result<ConsistencyReport, String> {
    let locales = discover_locales(locales_dir)?;
    let baseline = select_baseline(&locales, requested_baseline)?;

    let mut loader = LocaleLoader::new(locales_dir.to_path_buf());
    let baseline_paths = loader.load(&baseline)?.key_paths();

    let mut comparisons = Vec::new();
    for locale in &locales {
        if *locale == baseline {
            continue;
        }
        let other_paths = loader.load(locale)?.key_paths();
        let diff = diff_keys(&baseline_paths, &other_paths);
        if diff.is_empty() {
            tracing::debug!("Locale '{}' matches baseline '{}'", locale, baseline);
        } else {
            tracing::warn!(
                "Locale '{}' differs from baseline '{}': {} missing, {} extra",
                locale,
                baseline,
                diff.only_in_baseline.len(),
                diff.only_in_other.len()
            );
        }
        comparisons.push(LocaleComparison {
            locale: locale.clone(),
            diff,
        });
    }

    Ok(ConsistencyReport {
        baseline,
        baseline_key_count: baseline_paths.len(),
        comparisons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_locale(dir: &Path, locale: &str, body: &str) {
        let contents = format!("{locale}:\n{body}");
        fs::write(dir.join(format!("{locale}.yml")), contents)
            .expect("Failed to write test locale file");
    }

    #[test]
    fn test_discover_skips_framework_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        write_locale(temp_dir.path(), "en-US", "  app:\n    name: Arta\n");
        write_locale(temp_dir.path(), "nl-NL", "  app:\n    name: Arta\n");
        fs::write(
            temp_dir.path().join("defaults.framework.yml"),
            "defaults:\n  date_format: '%Y-%m-%d'\n",
        )
        .expect("Failed to write framework file");
        fs::write(temp_dir.path().join("notes.txt"), "ignored")
            .expect("Failed to write stray file");

        let locales = discover_locales(temp_dir.path()).expect("discovery should succeed");
        assert_eq!(locales, vec!["en-US", "nl-NL"]);
    }

    #[test]
    fn test_select_baseline_prefers_en_us() {
        let locales = vec!["de-DE".to_string(), "en-US".to_string(), "nl-NL".to_string()];
        assert_eq!(
            select_baseline(&locales, None).expect("baseline"),
            "en-US"
        );
    }

    #[test]
    fn test_select_baseline_falls_back_to_first() {
        let locales = vec!["de-DE".to_string(), "nl-NL".to_string()];
        assert_eq!(
            select_baseline(&locales, None).expect("baseline"),
            "de-DE"
        );
    }

    #[test]
    fn test_select_baseline_rejects_unknown_override() {
        let locales = vec!["en-US".to_string()];
        let err = select_baseline(&locales, Some("fr-FR")).expect_err("unknown baseline");
        assert!(err.contains("fr-FR"));
    }

    #[test]
    fn test_check_locales_consistent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        let body = "  app:\n    forms:\n      personal:\n        first_name: x\n";
        write_locale(temp_dir.path(), "en-US", body);
        write_locale(temp_dir.path(), "nl-NL", body);

        let report = check_locales(temp_dir.path(), None).expect("check should run");
        assert_eq!(report.baseline, "en-US");
        assert_eq!(report.baseline_key_count, 1);
        assert!(report.is_consistent());
        assert_eq!(report.mismatches().count(), 0);
    }

    #[test]
    fn test_check_locales_reports_both_directions() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        write_locale(temp_dir.path(), "en-US", "  a:\n    b: x\n");
        write_locale(temp_dir.path(), "nl-NL", "  a:\n    c: x\n");

        let report = check_locales(temp_dir.path(), None).expect("check should run");
        assert!(!report.is_consistent());
        let mismatch = report
            .mismatches()
            .next()
            .expect("mismatch should be reported");
        assert_eq!(mismatch.locale, "nl-NL");
        assert!(mismatch.diff.only_in_baseline.contains("a.b"));
        assert!(mismatch.diff.only_in_other.contains("a.c"));
    }

    #[test]
    fn test_check_locales_baseline_override() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
        write_locale(temp_dir.path(), "en-US", "  a: x\n");
        write_locale(temp_dir.path(), "nl-NL", "  a: x\n  b: y\n");

        let report =
            check_locales(temp_dir.path(), Some("nl-NL")).expect("check should run");
        assert_eq!(report.baseline, "nl-NL");
        let mismatch = report
            .mismatches()
            .next()
            .expect("mismatch should be reported");
        assert_eq!(mismatch.locale, "en-US");
        assert!(mismatch.diff.only_in_baseline.contains("b"));
    }
}
