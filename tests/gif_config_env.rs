#![cfg(feature = "gif")]

use sigcard::gif::{GifConfig, GifSearch, GIPHY_KEY_ENV, TENOR_KEY_ENV};

// Only test in this binary so the environment is not shared.
#[test]
fn keys_come_from_the_environment() {
    std::env::set_var(GIPHY_KEY_ENV, "   ");
    std::env::set_var(TENOR_KEY_ENV, "tenor-secret");

    let config = GifConfig::from_env();
    assert_eq!(config.giphy_api_key, None);
    assert_eq!(config.tenor_api_key.as_deref(), Some("tenor-secret"));
    assert!(config.has_any_key());
    assert_eq!(GifSearch::from_config(&config).unwrap().provider_names(), vec!["Tenor"]);

    std::env::remove_var(GIPHY_KEY_ENV);
    std::env::remove_var(TENOR_KEY_ENV);
    assert!(!GifConfig::from_env().has_any_key());
}
