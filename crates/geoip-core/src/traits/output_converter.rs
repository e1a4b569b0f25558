// # Output Converter Trait
//
// Defines the interface for writing a container out in a specific format.
//
// ## Implementations
//
// - MikroTik RouterOS script: `geoip-output-mikrotik` crate
//
// ## Usage
//
// ```rust,ignore
// use geoip_core::{Action, ConverterRegistry, MemoryContainer};
//
// let registry = ConverterRegistry::new();
// geoip_output_mikrotik::register(&registry);
//
// let converter = registry.create_output_converter(
//     "mikrotikGeoIPScript",
//     Action::Output,
//     br#"{ "aclistName": "CN", "wantedList": ["cn"] }"#,
// )?;
// converter.output(&container)?;
// ```

use crate::config::Action;
use crate::traits::container::Container;

/// Trait for output converter implementations
///
/// A converter is built once from its configuration and can then be run
/// any number of times. Each call to [`output`](OutputConverter::output)
/// is independent of the previous ones.
pub trait OutputConverter: Send + Sync {
    /// Get the converter type identifier (e.g., "mikrotikGeoIPScript")
    fn type_name(&self) -> &str;

    /// Get the action this converter was configured with
    fn action(&self) -> Action;

    /// Get a short human-readable description
    fn description(&self) -> &str;

    /// Convert the container and write the result
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Output was written
    /// - `Err(Error)`: Rendering or writing failed; nothing is retried
    fn output(&self, container: &dyn Container) -> Result<(), crate::Error>;
}

/// Helper trait for constructing output converters from configuration
///
/// Implemented for any `Fn(Action, &[u8]) -> Result<Box<dyn OutputConverter>>`
/// so plain constructor functions can be registered directly.
pub trait OutputConverterFactory: Send + Sync {
    /// Create an OutputConverter instance from raw JSON options
    ///
    /// # Parameters
    ///
    /// - `action`: The configured action
    /// - `data`: Raw JSON options; empty input means "use defaults"
    fn create(
        &self,
        action: Action,
        data: &[u8],
    ) -> Result<Box<dyn OutputConverter>, crate::Error>;
}

impl<F> OutputConverterFactory for F
where
    F: Fn(Action, &[u8]) -> Result<Box<dyn OutputConverter>, crate::Error> + Send + Sync,
{
    fn create(
        &self,
        action: Action,
        data: &[u8],
    ) -> Result<Box<dyn OutputConverter>, crate::Error> {
        self(action, data)
    }
}
