//! Integration tests for locale resolution and translation lookup over the
//! shipped configuration and locale files.

use arta_forms::i18n::{
    I18nConfig, LocaleLoader, find_config_file, find_locales_dir, resolve_locale, translate,
    translate_with_fallback,
};

fn shipped_config() -> I18nConfig {
    let path = find_config_file("i18n.yml").expect("shipped i18n.yml should be found");
    I18nConfig::load(&path).expect("shipped i18n.yml should parse")
}

/// What: The shipped i18n configuration loads and names the shipped locales
///
/// - Input: config/i18n.yml via the config file probe
/// - Output: en-US default, en-US and nl-NL available
#[test]
fn test_shipped_config_loads() {
    let config = shipped_config();
    assert_eq!(config.default_locale, "en-US");
    assert!(config.is_available("en-US"));
    assert!(config.is_available("nl-NL"));
    assert!(!config.is_available("fr-FR"));
}

/// What: The shipped fallback chain resolves regional and bare locales
///
/// - Input: Requested locales against the shipped configuration
/// - Output: nl-BE and nl land on nl-NL; unknown locales land on the default
#[test]
fn test_shipped_fallback_chain() {
    let config = shipped_config();
    assert_eq!(resolve_locale("nl-BE", &config), "nl-NL");
    assert_eq!(resolve_locale("nl", &config), "nl-NL");
    assert_eq!(resolve_locale("en-GB", &config), "en-US");
    assert_eq!(resolve_locale("fr-FR", &config), "en-US");
    assert_eq!(resolve_locale("", &config), "en-US");
}

/// What: Translation lookup works over the shipped locale files
///
/// - Input: nl-NL primary with en-US fallback, loaded through the locale
///   loader
/// - Output: Dutch text for present keys, fallback text or the key itself
///   for missing ones
#[test]
fn test_translate_with_fallback_over_shipped_locales() {
    let dir = find_locales_dir().expect("shipped locales directory should be found");
    let mut loader = LocaleLoader::new(dir);
    let primary = loader
        .load("nl-NL")
        .expect("shipped nl-NL locale should load")
        .to_translation_map();
    let fallback = loader
        .load("en-US")
        .expect("shipped en-US locale should load")
        .to_translation_map();

    assert_eq!(
        translate_with_fallback("app.forms.personal.first_name", &primary, &fallback),
        "Voornaam"
    );
    assert_eq!(
        translate("app.forms.options.full", &primary),
        Some("VOL".to_string())
    );
    assert_eq!(
        translate_with_fallback("app.forms.missing.key", &primary, &fallback),
        "app.forms.missing.key"
    );
}

/// What: Resolution plus lookup compose end to end for a regional locale
///
/// - Input: Requested locale nl-BE, shipped config and locale files
/// - Output: The resolved locale's catalog answers the lookup
#[test]
fn test_resolution_and_lookup_compose() {
    let config = shipped_config();
    let resolved = resolve_locale("nl-BE", &config);
    let dir = find_locales_dir().expect("shipped locales directory should be found");
    let mut loader = LocaleLoader::new(dir);
    let primary = loader
        .load(&resolved)
        .expect("resolved locale should load")
        .to_translation_map();
    assert_eq!(
        translate("app.registrations.status.waitinglist", &primary),
        None,
        "status keys live under registrations, not app"
    );
    assert_eq!(
        translate("registrations.status.waitinglist", &primary),
        Some("Wachtlijst".to_string())
    );
}
