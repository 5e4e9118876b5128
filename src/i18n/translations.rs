//! Translation map and lookup utilities.

use std::collections::HashMap;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "app.forms.personal.first_name")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up a translation with fallback to the baseline locale.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Primary translation map
/// - `fallback_translations`: Fallback translation map (usually en-US)
///
/// Output:
/// - Translated string (from primary or fallback, or the key itself if both
///   are missing)
///
/// Details:
/// - Returning the key itself keeps missing translations visible in rendered
///   output instead of blanking the label
/// - Misses are logged at debug level to avoid flooding logs
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key) {
        return translation.clone();
    }

    if let Some(translation) = fallback_translations.get(key) {
        tracing::debug!(
            "Translation key '{}' not found in primary locale, using fallback",
            key
        );
        return translation.clone();
    }

    tracing::debug!(
        "Missing translation key: '{}'. Returning key as-is. Please add this key to locale files.",
        key
    );
    key.to_string()
}
