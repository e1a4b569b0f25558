//! Entry selection and ordering

use geoip_core::Container;
use geoip_core::entry::normalize_name;
use std::collections::HashSet;

/// Decide which entries to emit, and in which order
///
/// A non-empty wanted list is the whole answer. Otherwise every entry in the
/// container is emitted, except those in the overwrite list, which are
/// appended at the end in their configured order. Names are upper-cased and
/// trimmed; duplicates are kept.
pub(crate) fn entry_names_in_order(
    wanted: &[String],
    overwrite: &[String],
    container: &dyn Container,
) -> Vec<String> {
    let wanted = normalize_list(wanted);
    if !wanted.is_empty() {
        return wanted;
    }

    let overwrite = normalize_list(overwrite);
    let deferred: HashSet<&str> = overwrite.iter().map(String::as_str).collect();

    let mut names: Vec<String> = container
        .entries()
        .map(|entry| entry.name())
        .filter(|name| !deferred.contains(name))
        .map(str::to_string)
        .collect();
    names.extend(overwrite.iter().cloned());
    names
}

fn normalize_list(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| normalize_name(name))
        .filter(|name| !name.is_empty())
        .collect()
}
