//! Contract Test: Output Files
//!
//! Constraints verified:
//! - The script is written under the configured name and its lower-cased form
//! - Both files are byte-identical
//! - Re-running against the same container reproduces the same bytes
//! - I/O failures are returned to the caller
//!
//! If this test fails, scripts on disk may be stale or inconsistent.

mod common;

use common::*;
use geoip_core::{Action, ConverterRegistry, OutputConverter};
use serde_json::json;

#[test]
fn writes_configured_and_lowercase_names() {
    let tmp = tempfile::tempdir().unwrap();
    let converter = converter_in(tmp.path(), json!({ "outputName": "GeoIP-CN.rsc" }));

    converter.output(&cn_us_container()).unwrap();

    let upper = std::fs::read(tmp.path().join("GeoIP-CN.rsc")).unwrap();
    let lower = std::fs::read(tmp.path().join("geoip-cn.rsc")).unwrap();
    assert!(!upper.is_empty());
    assert_eq!(upper, lower);
}

#[test]
fn creates_nested_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("output").join("mikrotik");
    let converter = converter_in(&out_dir, json!({}));

    converter.output(&cn_us_container()).unwrap();

    assert!(out_dir.join("mikrotik-acl.rsc").is_file());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let container = container(&[
        ("a", &["10.0.0.0/8"]),
        ("b", &["172.16.0.0/12", "fc00::/7"]),
        ("c", &["192.168.0.0/16"]),
    ]);
    let converter = converter_in(tmp.path(), json!({ "overwriteList": ["a"] }));
    let path = tmp.path().join("mikrotik-acl.rsc");

    converter.output(&container).unwrap();
    let first = std::fs::read(&path).unwrap();
    converter.output(&container).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn write_failure_is_returned() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"").unwrap();
    let converter = converter_in(&blocker, json!({}));

    let err = converter.output(&cn_us_container()).unwrap_err();

    assert!(matches!(err, geoip_core::Error::Io(_)), "got {:?}", err);
}

#[test]
fn successful_writes_are_logged() {
    let tmp = tempfile::tempdir().unwrap();
    let converter = converter_in(tmp.path(), json!({ "outputName": "CN.rsc" }));
    let container = cn_us_container();

    let (result, logs) = with_captured_logs(|| converter.output(&container));

    result.unwrap();
    assert!(logs.contains("[mikrotikGeoIPScript] cn.rsc -->"), "logs were: {}", logs);
    assert!(logs.contains("[mikrotikGeoIPScript] CN.rsc -->"), "logs were: {}", logs);
}

#[test]
fn converter_created_through_registry() {
    let tmp = tempfile::tempdir().unwrap();
    let registry = ConverterRegistry::new();
    geoip_output_mikrotik::register(&registry);

    let options = json!({
        "outputDir": tmp.path().display().to_string(),
        "wantedList": ["cn"],
    });
    let converter = registry
        .create_output_converter(
            "mikrotikGeoIPScript",
            Action::Output,
            &serde_json::to_vec(&options).unwrap(),
        )
        .unwrap();

    converter.output(&cn_us_container()).unwrap();

    let script = std::fs::read_to_string(tmp.path().join("mikrotik-acl.rsc")).unwrap();
    assert_eq!(added_addresses(&script), vec!["1.2.3.0/24"]);
}
