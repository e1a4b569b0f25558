// # Container Implementations
//
// This module provides implementations of the Container trait.

pub mod memory;

pub use memory::MemoryContainer;
