use std::collections::HashMap;

use trueage_api::config::ServiceConfig;
use trueage_scoring::lifestyle::ActivityCurve;
use trueage_scoring::sleep::SleepWeighting;

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ServiceConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.bind.to_string(), "127.0.0.1:8080");
    assert_eq!(config.policy.advice_limit, 5);
    assert_eq!(config.policy.activity_curve, ActivityCurve::Tiered);
    assert_eq!(config.policy.sleep_weighting, SleepWeighting::Balanced);
}

#[test]
fn overrides_are_applied() {
    let config = config_from(&[
        ("TRUEAGE_BIND", "0.0.0.0:9000"),
        ("TRUEAGE_ADVICE_LIMIT", "6"),
        ("TRUEAGE_ACTIVITY_CURVE", "proportional"),
        ("TRUEAGE_SLEEP_WEIGHTING", "duration_led"),
    ])
    .unwrap();
    assert_eq!(config.bind.port(), 9000);
    assert_eq!(config.policy.advice_limit, 6);
    assert_eq!(config.policy.activity_curve, ActivityCurve::Proportional);
    assert_eq!(config.policy.sleep_weighting, SleepWeighting::DurationLed);
}

#[test]
fn blank_values_take_defaults() {
    let config = config_from(&[("TRUEAGE_ADVICE_LIMIT", "  ")]).unwrap();
    assert_eq!(config.policy.advice_limit, 5);
}

#[test]
fn invalid_values_are_errors() {
    assert!(config_from(&[("TRUEAGE_BIND", "localhost")]).is_err());
    assert!(config_from(&[("TRUEAGE_ADVICE_LIMIT", "five")]).is_err());
    assert!(config_from(&[("TRUEAGE_ACTIVITY_CURVE", "steep")]).is_err());
}
