// # MikroTik Script Output
//
// This crate converts a geoip container into a RouterOS script that resets
// one firewall address-list and fills it with the container's ranges.
//
// ## Output
//
// ```text
// /log info "Loading CN address list"/ip firewall address-list remove [/ip firewall address-list find list=CN]
// /ip firewall address-list
// :do { add address=1.2.3.0/24 list=CN } on-error={}
// ```
//
// The script is written twice into the output directory: once under the
// configured name and once under its lower-cased form.
//
// ## Entry Order
//
// - `wantedList` non-empty: exactly those entries, in that order
// - otherwise: every entry, with `overwriteList` entries moved to the end
//
// Later lines win on the router, so the overwrite list decides which
// entries take effect last.

pub mod config;
mod render;
mod select;
mod write;

use geoip_core::{Action, Container, OutputConverter, OutputConverterFactory};
use geoip_core::{Error, Result};

pub use config::MikrotikScriptConfig;

/// Converter type identifier
pub const TYPE_MIKROTIK_SCRIPT_OUT: &str = "mikrotikGeoIPScript";

/// Converter description
pub const DESC_MIKROTIK_SCRIPT_OUT: &str = "Convert data to mikrotik script format";

/// MikroTik RouterOS script converter
///
/// Holds an immutable configuration; every call to
/// [`output`](OutputConverter::output) renders and writes from scratch.
#[derive(Debug, Clone)]
pub struct MikrotikScriptOut {
    action: Action,
    config: MikrotikScriptConfig,
}

impl MikrotikScriptOut {
    /// Create a converter from an explicit configuration
    pub fn new(action: Action, config: MikrotikScriptConfig) -> Self {
        Self { action, config }
    }

    /// Create a converter from raw JSON options
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(action: Action, data: &[u8]) -> Result<Self> {
        Ok(Self::new(action, MikrotikScriptConfig::from_json(data)?))
    }

    /// Get the configuration
    pub fn config(&self) -> &MikrotikScriptConfig {
        &self.config
    }

    /// Render the full script for `container`
    ///
    /// Entries that are selected but missing from the container are logged
    /// and skipped. A marshaling failure aborts rendering.
    pub fn render(&self, container: &dyn Container) -> Result<String> {
        let list_name = &self.config.aclist_name;
        let mut script = render::script_prefix(list_name);

        let names = select::entry_names_in_order(
            &self.config.wanted_list,
            &self.config.overwrite_list,
            container,
        );

        let mut rendered = 0usize;
        for name in &names {
            let Some(entry) = container.get_entry(name) else {
                tracing::warn!("[{}] entry {} not found, skipping", TYPE_MIKROTIK_SCRIPT_OUT, name);
                continue;
            };
            script.push_str(&render::entry_lines(entry, self.config.only_ip_type, list_name)?);
            rendered += 1;
        }

        tracing::debug!(
            "[{}] rendered {} of {} selected entries into list {}",
            TYPE_MIKROTIK_SCRIPT_OUT,
            rendered,
            names.len(),
            list_name
        );
        Ok(script)
    }

    fn write_file(&self, filename: &str, data: &[u8]) -> Result<()> {
        write::write_output(&self.config.output_dir, filename, data)?;
        tracing::info!(
            "[{}] {} --> {}",
            TYPE_MIKROTIK_SCRIPT_OUT,
            filename,
            self.config.output_dir.display()
        );
        Ok(())
    }
}

impl OutputConverter for MikrotikScriptOut {
    fn type_name(&self) -> &str {
        TYPE_MIKROTIK_SCRIPT_OUT
    }

    fn action(&self) -> Action {
        self.action
    }

    fn description(&self) -> &str {
        DESC_MIKROTIK_SCRIPT_OUT
    }

    fn output(&self, container: &dyn Container) -> Result<()> {
        let script = self.render(container)?;

        // Written even when no entry was rendered: the header alone still
        // clears the list on the router.
        let lowercase_name = self.config.output_name.to_lowercase();
        self.write_file(&lowercase_name, script.as_bytes())?;
        self.write_file(&self.config.output_name, script.as_bytes())?;
        Ok(())
    }
}

/// Factory for creating MikroTik script converters
pub struct MikrotikScriptFactory;

impl OutputConverterFactory for MikrotikScriptFactory {
    fn create(&self, action: Action, data: &[u8]) -> Result<Box<dyn OutputConverter>> {
        let converter = MikrotikScriptOut::from_json(action, data).map_err(|e| match e {
            Error::Json(err) => Error::config(format!(
                "Invalid {} options: {}",
                TYPE_MIKROTIK_SCRIPT_OUT, err
            )),
            other => other,
        })?;
        Ok(Box::new(converter))
    }
}

/// Register the MikroTik script converter with a registry
///
/// # Example
///
/// ```rust
/// use geoip_core::ConverterRegistry;
///
/// let registry = ConverterRegistry::new();
/// geoip_output_mikrotik::register(&registry);
/// assert!(registry.has_output_converter("mikrotikGeoIPScript"));
/// ```
pub fn register(registry: &geoip_core::ConverterRegistry) {
    registry.register_output_converter(
        TYPE_MIKROTIK_SCRIPT_OUT,
        DESC_MIKROTIK_SCRIPT_OUT,
        Box::new(MikrotikScriptFactory),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoip_core::{Entry, IpType, MemoryContainer};

    fn container() -> MemoryContainer {
        let mut container = MemoryContainer::new();
        let mut cn = Entry::new("cn");
        cn.add_prefix_str("1.2.3.0/24").unwrap();
        container.add(cn);
        container
    }

    #[test]
    fn test_factory_creation() {
        let factory = MikrotikScriptFactory;

        let converter = factory
            .create(Action::Output, br#"{ "aclistName": "GEO" }"#)
            .unwrap();
        assert_eq!(converter.type_name(), "mikrotikGeoIPScript");
        assert_eq!(converter.action(), Action::Output);
        assert_eq!(converter.description(), "Convert data to mikrotik script format");
    }

    #[test]
    fn test_factory_malformed_options() {
        let factory = MikrotikScriptFactory;
        let result = factory.create(Action::Output, b"{ not json");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_register() {
        let registry = geoip_core::ConverterRegistry::new();
        register(&registry);

        assert!(registry.has_output_converter(TYPE_MIKROTIK_SCRIPT_OUT));
        assert_eq!(
            registry.description(TYPE_MIKROTIK_SCRIPT_OUT).as_deref(),
            Some(DESC_MIKROTIK_SCRIPT_OUT)
        );
    }

    #[test]
    fn test_render_without_writing() {
        let converter = MikrotikScriptOut::new(
            Action::Output,
            MikrotikScriptConfig::new().with_only_ip_type(IpType::V4),
        );

        let script = converter.render(&container()).unwrap();
        assert!(script.ends_with(":do { add address=1.2.3.0/24 list=CN } on-error={}\n"));
    }

    #[test]
    fn test_render_error_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let converter = MikrotikScriptOut::new(
            Action::Output,
            MikrotikScriptConfig::new()
                .with_output_dir(tmp.path().join("out"))
                .with_only_ip_type(IpType::V6),
        );

        // CN has no IPv6 ranges, so marshaling fails
        let err = converter.output(&container()).unwrap_err();
        assert!(matches!(err, Error::Marshal { .. }));
        assert!(!tmp.path().join("out").exists());
    }
}
