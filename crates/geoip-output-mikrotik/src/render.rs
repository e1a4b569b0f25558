//! RouterOS script rendering
//!
//! The script first logs and purges the target address-list, then adds one
//! line per range. Each add is wrapped in `:do { } on-error={}` so a single
//! rejected address does not abort the rest of the import on the router.

use geoip_core::{Entry, IgnoreIpOption, IpType, Result};

/// Render the script header for `list_name`
///
/// The log and remove commands share one line; routers in the field load
/// scripts with exactly this layout.
pub(crate) fn script_prefix(list_name: &str) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("/log info \"Loading {} address list\"", list_name));
    buf.push_str(&format!(
        "/ip firewall address-list remove [/ip firewall address-list find list={}]\n",
        list_name
    ));
    buf.push_str("/ip firewall address-list\n");
    buf
}

/// Render the add commands for one entry
pub(crate) fn entry_lines(entry: &Entry, only_ip_type: IpType, list_name: &str) -> Result<String> {
    let prefixes = entry.marshal_text(ignore_option(only_ip_type))?;

    let mut buf = String::new();
    for prefix in &prefixes {
        buf.push_str(&format!(
            ":do {{ add address={} list={} }} on-error={{}}\n",
            prefix, list_name
        ));
    }
    Ok(buf)
}

fn ignore_option(only_ip_type: IpType) -> Option<IgnoreIpOption> {
    match only_ip_type {
        IpType::V4 => Some(IgnoreIpOption::IgnoreIpv6),
        IpType::V6 => Some(IgnoreIpOption::IgnoreIpv4),
        IpType::Any => None,
    }
}
