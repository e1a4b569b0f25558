//! Options for the MikroTik script converter

use geoip_core::{IpType, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Default output file name
pub const DEFAULT_OUTPUT_NAME: &str = "mikrotik-acl.rsc";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "output/mikrotik";

/// Default RouterOS address-list name
pub const DEFAULT_ACLIST_NAME: &str = "CN";

/// MikroTik script converter configuration
///
/// Every field is optional in JSON:
///
/// ```json
/// {
///   "outputName": "mikrotik-acl.rsc",
///   "outputDir": "output/mikrotik",
///   "wantedList": ["cn", "private"],
///   "overwriteList": [],
///   "onlyIPType": "ipv4",
///   "aclistName": "CN"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MikrotikScriptConfig {
    /// File name to write; a lower-cased copy is written alongside it
    #[serde(deserialize_with = "null_as_default")]
    pub output_name: String,

    /// Directory the script files are written to
    #[serde(deserialize_with = "null_as_default")]
    pub output_dir: PathBuf,

    /// Entries to emit, in this exact order
    ///
    /// When non-empty, `overwrite_list` is ignored.
    #[serde(deserialize_with = "null_as_default")]
    pub wanted_list: Vec<String>,

    /// Entries to move to the end of the script, in this order
    #[serde(deserialize_with = "null_as_default")]
    pub overwrite_list: Vec<String>,

    /// Address family filter
    #[serde(rename = "onlyIPType", deserialize_with = "null_as_default")]
    pub only_ip_type: IpType,

    /// RouterOS address-list to reset and populate
    #[serde(deserialize_with = "null_as_default")]
    pub aclist_name: String,
}

impl MikrotikScriptConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            wanted_list: Vec::new(),
            overwrite_list: Vec::new(),
            only_ip_type: IpType::Any,
            aclist_name: DEFAULT_ACLIST_NAME.to_string(),
        }
    }

    /// Parse the configuration from raw JSON
    ///
    /// Empty input and `null` yield the defaults. Empty strings for the
    /// name, directory and list name also fall back to the defaults.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::new());
        }

        let config: Option<Self> = serde_json::from_slice(data)?;
        Ok(config.unwrap_or_default().with_defaults())
    }

    /// Set the output file name
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the wanted entry names
    pub fn with_wanted_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wanted_list = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the entry names to move to the end
    pub fn with_overwrite_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overwrite_list = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the address family filter
    pub fn with_only_ip_type(mut self, only_ip_type: IpType) -> Self {
        self.only_ip_type = only_ip_type;
        self
    }

    /// Set the RouterOS address-list name
    pub fn with_aclist_name(mut self, aclist_name: impl Into<String>) -> Self {
        self.aclist_name = aclist_name.into();
        self
    }

    fn with_defaults(mut self) -> Self {
        if self.output_name.is_empty() {
            self.output_name = DEFAULT_OUTPUT_NAME.to_string();
        }
        if self.output_dir.as_os_str().is_empty() {
            self.output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
        }
        if self.aclist_name.is_empty() {
            self.aclist_name = DEFAULT_ACLIST_NAME.to_string();
        }
        self
    }
}

/// Decode a JSON `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for MikrotikScriptConfig {
    fn default() -> Self {
        Self::new()
    }
}
