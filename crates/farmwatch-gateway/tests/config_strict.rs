#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use farmwatch_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8000"
timeseries:
  window_dayz: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
    assert_eq!(cfg.timeseries.window_days, 30);
    assert_eq!(cfg.timeseries.noise, 0.05);
    assert_eq!(cfg.timeseries.fallback_base, 0.5);
}

#[test]
fn overrides_apply() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9100"
timeseries:
  window_days: 7
  noise: 0.0
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9100);
    let s = cfg.timeseries.settings();
    assert_eq!(s.window_days, 7);
    assert_eq!(s.noise, 0.0);
    assert_eq!(s.fallback_base, 0.5);
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn out_of_range_timeseries_rejected() {
    let bad = r#"
version: 1
timeseries:
  noise: 2.0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("timeseries.noise"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely/not/here/farmwatch.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:8000");
}

#[test]
fn shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../farmwatch.yaml");
    let cfg = config::load_from_file(path).expect("must parse");
    assert_eq!(cfg.timeseries.window_days, 30);
}
