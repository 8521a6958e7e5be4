//! Semantic unit types for climate normals
//!
//! Newtype wrappers keep temperatures and precipitation amounts from being
//! mixed up when passed to the classifier.
//!
//! # Design Philosophy
//! - Climate normals are whole numbers, so both types wrap `i32`
//! - Construction never validates; range checks live in [`crate::core_types::bounds`]
//! - Serde support for serialization (serialized as the bare number)
//!
//! # Usage
//! ```
//! use climate_core::core_types::units::{Celsius, Millimeters};
//!
//! let temp = Celsius::new(11);
//! let rain = Millimeters::new(461);
//! assert_eq!(*temp, 11);
//! assert_eq!(rain.to_string(), "461 mm");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Celsius (whole degrees)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Celsius(i32);

impl Celsius {
    /// Create a new Celsius temperature. Any value is accepted.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Celsius(value)
    }

    /// Raw value widened to `i64` for overflow-free threshold arithmetic
    #[inline]
    #[must_use]
    pub fn widen(self) -> i64 {
        i64::from(self.0)
    }
}

impl Deref for Celsius {
    type Target = i32;
    #[inline]
    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl From<i32> for Celsius {
    fn from(value: i32) -> Self {
        Celsius(value)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

// ============================================================================
// PRECIPITATION
// ============================================================================

/// Precipitation depth in millimeters (whole millimeters)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct Millimeters(i32);

impl Millimeters {
    /// Create a new precipitation amount. Any value is accepted.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Millimeters(value)
    }

    /// Raw value widened to `i64` for overflow-free threshold arithmetic
    #[inline]
    #[must_use]
    pub fn widen(self) -> i64 {
        i64::from(self.0)
    }
}

impl Deref for Millimeters {
    type Target = i32;
    #[inline]
    fn deref(&self) -> &i32 {
        &self.0
    }
}

impl From<i32> for Millimeters {
    fn from(value: i32) -> Self {
        Millimeters(value)
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}
