use route53domains_client::config::{ENV_ENDPOINT, ENV_REGION, ENV_TIMEOUT_SECS, endpoint_for_region};
use route53domains_client::{ClientConfig, ClientError};
use serial_test::serial;
use std::collections::HashMap;
use std::time::Duration;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

// ── Defaults ────────────────────────────────────────────────────

#[test]
fn config_default() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint, "https://route53domains.us-east-1.amazonaws.com");
    assert_eq!(cfg.region, "us-east-1");
    assert_eq!(cfg.timeout_secs, 60);
    assert_eq!(cfg.timeout(), Duration::from_secs(60));
    assert!(cfg.user_agent.starts_with("route53domains-rs/"));
}

// ── JSON ────────────────────────────────────────────────────────

#[test]
fn from_json_fills_missing_keys() {
    let cfg = ClientConfig::from_json(r#"{"timeout_secs": 5}"#).unwrap();
    assert_eq!(cfg.timeout_secs, 5);
    assert_eq!(cfg.region, "us-east-1");
}

#[test]
fn from_json_roundtrip() {
    let cfg = ClientConfig {
        endpoint: "http://localhost:8080".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(ClientConfig::from_json(&json).unwrap(), cfg);
}

#[test]
fn from_json_rejects_bad_endpoint() {
    let err = ClientConfig::from_json(r#"{"endpoint": "ftp://example.com"}"#).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = ClientConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

// ── Environment ─────────────────────────────────────────────────

#[test]
fn region_selects_endpoint() {
    let cfg = ClientConfig::from_lookup(lookup(&[(ENV_REGION, "eu-west-1")])).unwrap();
    assert_eq!(cfg.region, "eu-west-1");
    assert_eq!(cfg.endpoint, endpoint_for_region("eu-west-1"));
}

#[test]
fn explicit_endpoint_wins_over_region() {
    let cfg = ClientConfig::from_lookup(lookup(&[
        (ENV_REGION, "eu-west-1"),
        (ENV_ENDPOINT, "http://127.0.0.1:9000"),
    ]))
    .unwrap();
    assert_eq!(cfg.endpoint, "http://127.0.0.1:9000");
    assert_eq!(cfg.region, "eu-west-1");
}

#[test]
fn bad_timeout_is_a_config_error() {
    let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
    assert!(matches!(err, ClientError::Config(ref msg) if msg.contains(ENV_TIMEOUT_SECS)));

    let err = ClientConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
#[serial]
fn from_env_reads_process_environment() {
    // SAFETY: serialized with every other test that touches the environment.
    unsafe {
        std::env::set_var(ENV_TIMEOUT_SECS, "15");
        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_REGION);
    }
    let cfg = ClientConfig::from_env().unwrap();
    unsafe {
        std::env::remove_var(ENV_TIMEOUT_SECS);
    }
    assert_eq!(cfg.timeout_secs, 15);
    assert_eq!(cfg.endpoint, ClientConfig::default().endpoint);
}

#[test]
#[serial]
fn from_env_without_variables_is_default() {
    unsafe {
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_ENDPOINT);
        std::env::remove_var(ENV_REGION);
    }
    assert_eq!(ClientConfig::from_env().unwrap(), ClientConfig::default());
}
