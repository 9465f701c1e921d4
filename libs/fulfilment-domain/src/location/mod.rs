//! Location domain module
//!
//! A location is a named fulfilment site with fixed ceilings on how many
//! warehouse units may operate there and on their aggregate capacity. The
//! directory of locations is externally supplied and read-only to this crate.

pub mod entity;
pub mod ports;

pub use entity::{Location, LocationId};
pub use ports::LocationResolver;
