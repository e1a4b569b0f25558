//! Plugin-based converter registry
//!
//! The registry allows output converters to be registered at runtime by
//! the hosting application, avoiding hardcoded if-else chains.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use geoip_core::{Action, ConverterRegistry};
//!
//! // Create a registry
//! let registry = ConverterRegistry::new();
//!
//! // Register converters
//! geoip_output_mikrotik::register(&registry);
//!
//! // Create a converter from its JSON options
//! let converter = registry.create_output_converter(
//!     "mikrotikGeoIPScript",
//!     Action::Output,
//!     br#"{ "aclistName": "CN" }"#,
//! )?;
//! ```
//!
//! ## Registration
//!
//! Converter crates expose a `register` function; any matching closure can
//! be registered as well:
//!
//! ```rust,ignore
//! registry.register_output_converter(
//!     "myFormat",
//!     "Convert data to my format",
//!     Box::new(|action, data: &[u8]| MyConverter::from_json(action, data)),
//! );
//! ```

use crate::config::Action;
use crate::error::{Error, Result};
use crate::traits::{OutputConverter, OutputConverterFactory};
use std::collections::HashMap;
use std::sync::RwLock;

/// Registered factory together with its description
struct Registration {
    description: String,
    factory: Box<dyn OutputConverterFactory>,
}

/// Converter registry for plugin-based output converter creation
///
/// The registry maintains a map of converter type names to factory objects,
/// allowing dynamic instantiation of converters based on configuration.
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct ConverterRegistry {
    /// Registered output converter factories
    output_converters: RwLock<HashMap<String, Registration>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an output converter factory
    ///
    /// Registering the same type name twice replaces the earlier factory.
    ///
    /// # Parameters
    ///
    /// - `name`: Converter type name (e.g., "mikrotikGeoIPScript")
    /// - `description`: Short human-readable description
    /// - `factory`: Factory object for creating converter instances
    pub fn register_output_converter(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        factory: Box<dyn OutputConverterFactory>,
    ) {
        let name = name.into();
        let mut converters = self.output_converters.write().unwrap();
        converters.insert(
            name,
            Registration {
                description: description.into(),
                factory,
            },
        );
    }

    /// Create an output converter from configuration
    ///
    /// # Parameters
    ///
    /// - `name`: Converter type name
    /// - `action`: Configured action
    /// - `data`: Raw JSON options for the converter
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn OutputConverter>)`: Created converter instance
    /// - `Err(Error)`: If the type is not registered or creation fails
    pub fn create_output_converter(
        &self,
        name: &str,
        action: Action,
        data: &[u8],
    ) -> Result<Box<dyn OutputConverter>> {
        let converters = self.output_converters.read().unwrap();

        let registration = converters
            .get(name)
            .ok_or_else(|| Error::config(format!("Unknown output converter type: {}", name)))?;

        registration.factory.create(action, data)
    }

    /// List all registered output converter types
    pub fn list_output_converters(&self) -> Vec<String> {
        let converters = self.output_converters.read().unwrap();
        converters.keys().cloned().collect()
    }

    /// Check if an output converter type is registered
    pub fn has_output_converter(&self, name: &str) -> bool {
        let converters = self.output_converters.read().unwrap();
        converters.contains_key(name)
    }

    /// Get the description registered for a converter type
    pub fn description(&self, name: &str) -> Option<String> {
        let converters = self.output_converters.read().unwrap();
        converters.get(name).map(|r| r.description.clone())
    }
}
