//! Named IP lists
//!
//! An [`Entry`] is a named set of CIDR ranges, e.g. every prefix allocated to
//! one country. Names are case-insensitive and are stored upper-cased.

use crate::error::{Error, Result};
use ipnet::IpNet;
use std::net::IpAddr;

/// Address family to leave out when marshaling an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreIpOption {
    /// Skip IPv4 ranges
    IgnoreIpv4,
    /// Skip IPv6 ranges
    IgnoreIpv6,
}

/// A named set of CIDR ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    ipv4: Vec<IpNet>,
    ipv6: Vec<IpNet>,
}

impl Entry {
    /// Create an empty entry
    ///
    /// The name is trimmed and upper-cased.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            ipv4: Vec::new(),
            ipv6: Vec::new(),
        }
    }

    /// Get the normalized entry name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a range, truncated to its network address
    pub fn add_prefix(&mut self, prefix: IpNet) {
        let prefix = prefix.trunc();
        match prefix {
            IpNet::V4(_) => self.ipv4.push(prefix),
            IpNet::V6(_) => self.ipv6.push(prefix),
        }
    }

    /// Parse and add a range
    ///
    /// Accepts CIDR notation or a bare address, which becomes a host prefix.
    pub fn add_prefix_str(&mut self, prefix: &str) -> Result<()> {
        let prefix = prefix.trim();
        let net = match prefix.parse::<IpNet>() {
            Ok(net) => net,
            Err(_) => prefix
                .parse::<IpAddr>()
                .map(IpNet::from)
                .map_err(|_| Error::invalid_prefix(format!("{} (entry {})", prefix, self.name)))?,
        };
        self.add_prefix(net);
        Ok(())
    }

    /// Append all ranges of another entry
    pub fn merge(&mut self, other: Entry) {
        self.ipv4.extend(other.ipv4);
        self.ipv6.extend(other.ipv6);
    }

    /// Number of ranges held, both families
    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    /// Check if the entry holds no ranges
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }

    /// Render the ranges as CIDR strings
    ///
    /// IPv4 ranges come first, then IPv6, each in insertion order. Fails
    /// when nothing is left after applying `ignore`.
    pub fn marshal_text(&self, ignore: Option<IgnoreIpOption>) -> Result<Vec<String>> {
        let (skip_v4, skip_v6) = match ignore {
            Some(IgnoreIpOption::IgnoreIpv4) => (true, false),
            Some(IgnoreIpOption::IgnoreIpv6) => (false, true),
            None => (false, false),
        };

        let mut prefixes = Vec::with_capacity(self.len());
        if !skip_v4 {
            prefixes.extend(self.ipv4.iter().map(IpNet::to_string));
        }
        if !skip_v6 {
            prefixes.extend(self.ipv6.iter().map(IpNet::to_string));
        }

        if prefixes.is_empty() {
            return Err(Error::marshal(&self.name, "entry has no prefix"));
        }
        Ok(prefixes)
    }
}

/// Normalize an entry name for storage and lookup
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}
