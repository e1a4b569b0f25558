//! Core traits for the geoip converters
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`Container`]: Read access to named IP lists
//! - [`OutputConverter`]: Write a container out in some format

pub mod container;
pub mod output_converter;

pub use container::Container;
pub use output_converter::{OutputConverter, OutputConverterFactory};
