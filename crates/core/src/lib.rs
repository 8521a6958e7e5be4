//! Climate Classification Core Library
//!
//! Classifies a region's climate from a handful of climate normals (annual and
//! monthly temperature and precipitation) into a hierarchical designation:
//! primary environment, sub-environment and dry-season pattern.
//!
//! ## Designations
//!
//! - Primary groups: Tropical, Dry, Temperate, Continental, Polar
//! - Sub-environments: Rainforest, Monsoon or Savanna (Tropical), Desert or
//!   Steppe (Dry), Tundra or `EternalFrost` (Polar); Temperate and Continental
//!   have none
//! - Dry-season patterns: `NoDrySeason`, `DryWinter`, `DrySummer`, `AlwaysDry`
//!
//! ```
//! use climate_core::{ClimateClassifier, ClimateInputs};
//!
//! let classifier = ClimateClassifier::from_inputs(ClimateInputs::singapore());
//! assert_eq!(classifier.describe(), "Tropical Rainforest NoDrySeason");
//! ```

// Core types and utilities
pub mod core_types;

// Classification rules and the stateful classifier
pub mod koppen;

// Re-export core types
pub use core_types::{Celsius, Millimeters};
pub use core_types::{
    DryKind, DrySeasonPattern, PolarKind, PrimaryEnvironment, SubEnvironment, TropicalKind,
};
pub use core_types::{InputBounds, InputQuantity, RangeWarning};

// Re-export classifier types
pub use koppen::{classify, Classification, ClimateClassifier, ClimateInputs, InputsFileError};
