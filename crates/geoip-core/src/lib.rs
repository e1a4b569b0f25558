// # geoip-core
//
// Core library for converting named IP lists into other formats.
//
// ## Architecture Overview
//
// - **Entry**: A named set of CIDR ranges
// - **Container**: Trait for read access to a collection of entries
// - **OutputConverter**: Trait for writing a container out in some format
// - **ConverterRegistry**: Plugin-based registry for output converters
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Converters never own or mutate entry data
// 2. **Plugin-Based**: Converters are registered by the host, no hard-coded if-else
// 3. **Library-First**: All core functionality can be used as a library
// 4. **Idempotency**: Converting the same container twice yields the same output

pub mod traits;
pub mod registry;
pub mod config;
pub mod entry;
pub mod error;
pub mod container;

// Re-export core types for convenience
pub use traits::{Container, OutputConverter, OutputConverterFactory};
pub use registry::ConverterRegistry;
pub use config::{Action, IpType};
pub use entry::{Entry, IgnoreIpOption};
pub use error::{Error, Result};
pub use container::MemoryContainer;
