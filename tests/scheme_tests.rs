use gamecolor::scheme::{EnvSchemeSource, SCHEME_ENV_VAR};
use gamecolor::{ColorResolver, ColorScheme, ColorSchemeSource};
use std::sync::Arc;

#[test]
fn test_default_env_source_uses_scheme_var() {
    assert_eq!(EnvSchemeSource::default().var(), SCHEME_ENV_VAR);
}

#[test]
fn test_env_source_unset_is_light() {
    std::env::remove_var("GAMECOLOR_TEST_UNSET");
    let source = EnvSchemeSource::new("GAMECOLOR_TEST_UNSET");
    assert_eq!(source.color_scheme(), ColorScheme::Light);
}

#[test]
fn test_env_source_reads_fresh_value() {
    let source = EnvSchemeSource::new("GAMECOLOR_TEST_FRESH");
    let resolver = ColorResolver::new(source);

    std::env::set_var("GAMECOLOR_TEST_FRESH", "dark");
    assert_eq!(resolver.resolve(Some("原神")), "#808080");

    std::env::set_var("GAMECOLOR_TEST_FRESH", "LIGHT");
    assert_eq!(resolver.resolve(Some("原神")), "#aaaaaa");

    std::env::remove_var("GAMECOLOR_TEST_FRESH");
}

#[test]
fn test_env_source_invalid_value_is_light() {
    std::env::set_var("GAMECOLOR_TEST_INVALID", "sepia");
    let source = EnvSchemeSource::new("GAMECOLOR_TEST_INVALID");
    assert_eq!(source.color_scheme(), ColorScheme::Light);
    std::env::remove_var("GAMECOLOR_TEST_INVALID");
}

#[test]
fn test_forwarding_sources() {
    let fixed = ColorScheme::Dark;
    assert_eq!((&fixed).color_scheme(), ColorScheme::Dark);

    let shared: Arc<dyn ColorSchemeSource> = Arc::new(ColorScheme::Dark);
    let resolver = ColorResolver::new(shared);
    assert_eq!(resolver.resolve(Some("绝区零")), "#404040");
}

#[test]
fn test_scheme_parse_error_message() {
    let err = "dim".parse::<ColorScheme>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown color scheme 'dim', expected 'light' or 'dark'"
    );
}
