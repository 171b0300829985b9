//! Server configuration parsing, driven by an in-memory variable map.
//!
//! Run with: `cargo test --test config_test`
use std::collections::HashMap;

use artfolio::config::{AppConfig, ConfigError};

fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
}

const REQUIRED: [(&str, &str); 2] = [
    ("DATABASE_URL", "postgres://localhost/artfolio"),
    ("JWT_SECRET", "secret"),
];

fn with_required(extra: &[(&'static str, &'static str)]) -> Vec<(&'static str, &'static str)> {
    REQUIRED.iter().chain(extra).copied().collect()
}

#[test]
fn test_defaults_apply() {
    let config = load(&REQUIRED).unwrap();

    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    assert_eq!(config.token_ttl_hours, 24);
    assert!(config.run_migrations);
    assert!(config.static_dir.is_none());
}

#[test]
fn test_missing_secret_is_reported() {
    let result = load(&[("DATABASE_URL", "postgres://localhost/artfolio")]);
    assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
}

#[test]
fn test_token_ttl_out_of_range_is_rejected() {
    for ttl in ["0", "-1", "8761", "9000000000000"] {
        let result = load(&with_required(&[("TOKEN_TTL_HOURS", ttl)]));
        assert!(
            matches!(result, Err(ConfigError::Invalid { name: "TOKEN_TTL_HOURS", .. })),
            "TOKEN_TTL_HOURS={ttl} should be rejected"
        );
    }
}

#[test]
fn test_token_ttl_not_a_number_is_rejected() {
    let result = load(&with_required(&[("TOKEN_TTL_HOURS", "a day")]));
    assert!(matches!(result, Err(ConfigError::Invalid { name: "TOKEN_TTL_HOURS", .. })));
}

#[test]
fn test_token_ttl_bounds_are_accepted() {
    for (ttl, expected) in [("1", 1), ("8760", 8760)] {
        let config = load(&with_required(&[("TOKEN_TTL_HOURS", ttl)])).unwrap();
        assert_eq!(config.token_ttl_hours, expected);
    }
}
