// # Container Trait
//
// Defines read access to a collection of named IP lists.
//
// ## Implementations
//
// - In-memory: `MemoryContainer` in this crate
//
// ## Usage
//
// ```rust,ignore
// use geoip_core::Container;
//
// fn dump(container: &dyn Container) -> geoip_core::Result<()> {
//     for entry in container.entries() {
//         println!("{}: {:?}", entry.name(), entry.marshal_text(None)?);
//     }
//     Ok(())
// }
// ```

use crate::entry::Entry;

/// Read access to named IP lists
///
/// Converters only ever read from a container. Keeping it consistent while a
/// conversion runs is up to whoever owns it.
pub trait Container: Send + Sync {
    /// Look up an entry by name
    ///
    /// Implementations must match names case-insensitively, ignoring
    /// surrounding whitespace.
    fn get_entry(&self, name: &str) -> Option<&Entry>;

    /// Iterate over all entries
    ///
    /// The iteration order is unspecified and may differ between calls.
    fn entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_>;

    /// Number of entries
    fn len(&self) -> usize;

    /// Check if the container holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
