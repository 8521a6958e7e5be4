//! Core types and utilities

pub mod bounds;
pub mod units;
pub mod zones;

pub use bounds::{input_ranges, InputBounds, InputQuantity, RangeWarning};
pub use units::*;
pub use zones::*;
