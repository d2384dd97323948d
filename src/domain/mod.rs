//! Domain model: run configuration, series, and fitted curves.

mod types;

pub use types::*;
