//! Shared fixtures for converter contract tests
//!
//! Builds containers from literal data and captures the diagnostics the
//! converter logs through `tracing`.

#![allow(dead_code)]

use geoip_core::{Action, Entry, MemoryContainer};
use geoip_output_mikrotik::{MikrotikScriptConfig, MikrotikScriptOut};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Build a container from `(name, prefixes)` pairs
pub fn container(entries: &[(&str, &[&str])]) -> MemoryContainer {
    let mut container = MemoryContainer::new();
    for (name, prefixes) in entries {
        let mut entry = Entry::new(name);
        for prefix in prefixes.iter() {
            entry.add_prefix_str(prefix).expect("valid prefix");
        }
        container.add(entry);
    }
    container
}

/// The CN/US fixture used across contract tests
pub fn cn_us_container() -> MemoryContainer {
    container(&[
        ("CN", &["1.2.3.0/24"]),
        ("US", &["5.6.7.0/24", "::1/128"]),
    ])
}

/// Build a converter from JSON options, writing into `dir`
pub fn converter_in(dir: &Path, options: serde_json::Value) -> MikrotikScriptOut {
    let mut options = options;
    options["outputDir"] = serde_json::Value::String(dir.display().to_string());
    let data = serde_json::to_vec(&options).expect("serializable options");
    MikrotikScriptOut::from_json(Action::Output, &data).expect("valid options")
}

/// Build a converter from an explicit configuration, writing into `dir`
pub fn converter_with(dir: &Path, config: MikrotikScriptConfig) -> MikrotikScriptOut {
    MikrotikScriptOut::new(Action::Output, config.with_output_dir(dir))
}

/// Extract the `address=` values from a rendered script, in order
pub fn added_addresses(script: &str) -> Vec<String> {
    script
        .lines()
        .filter_map(|line| line.strip_prefix(":do { add address="))
        .filter_map(|rest| rest.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Extract the `list=` values from a rendered script, in order
pub fn added_lists(script: &str) -> Vec<String> {
    script
        .lines()
        .filter(|line| line.starts_with(":do { add address="))
        .filter_map(|line| line.split_whitespace().find_map(|w| w.strip_prefix("list=")))
        .map(str::to_string)
        .collect()
}

/// In-memory log sink for a tracing subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Get everything logged so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records all events at DEBUG and above
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs.contents())
}
