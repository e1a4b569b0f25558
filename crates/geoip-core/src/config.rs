//! Configuration types shared by all converters
//!
//! Converter-specific options live in the converter crates; this module only
//! holds the values that every converter understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a converter does with the data it is handed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Add prefixes to the container
    Add,
    /// Remove prefixes from the container
    Remove,
    /// Write the container out
    Output,
}

impl Action {
    /// Get the action name as it appears in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Output => "output",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IP address family filter
///
/// Deserializes from exactly `"ipv4"` or `"ipv6"`. Any other value,
/// including the empty string and other spellings such as `"IPv4"`, means
/// no filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IpType {
    /// Both IPv4 and IPv6
    #[default]
    Any,
    /// IPv4 only
    V4,
    /// IPv6 only
    V6,
}

impl From<String> for IpType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ipv4" => IpType::V4,
            "ipv6" => IpType::V6,
            "" => IpType::Any,
            other => {
                tracing::warn!("Unknown IP type '{}', falling back to both families", other);
                IpType::Any
            }
        }
    }
}

impl From<IpType> for String {
    fn from(value: IpType) -> Self {
        match value {
            IpType::Any => String::new(),
            IpType::V4 => "ipv4".to_string(),
            IpType::V6 => "ipv6".to_string(),
        }
    }
}
