//! Classifier inputs and reference presets
//!
//! [`ClimateInputs`] bundles the five climate normals plus the dry-season
//! pattern. Presets carry approximate station normals so each primary group
//! has a known-good example.
//!
//! # Example
//! ```
//! use climate_core::ClimateInputs;
//!
//! let paris = ClimateInputs::paris();
//! assert_eq!(*paris.annual_precip, 637);
//! assert_eq!(ClimateInputs::by_name("Paris"), Some(paris));
//! ```

use crate::core_types::bounds::{InputBounds, InputQuantity, RangeWarning};
use crate::core_types::units::{Celsius, Millimeters};
use crate::core_types::zones::DrySeasonPattern;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Numeric climate normals and dry-season pattern for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClimateInputs {
    /// Average annual temperature (°C)
    pub annual_temp: Celsius,
    /// Average temperature of the coldest month (°C)
    pub coldest_month_temp: Celsius,
    /// Average temperature of the warmest month (°C)
    pub warmest_month_temp: Celsius,
    /// Average annual precipitation (mm)
    pub annual_precip: Millimeters,
    /// Average precipitation of the driest month (mm)
    pub driest_month_precip: Millimeters,
    /// When the dry period falls; only consulted for Dry climates
    #[serde(default)]
    pub dry_season: DrySeasonPattern,
}

impl Default for ClimateInputs {
    /// Starting values for a fresh classifier (classifies as `"Dry Steppe AlwaysDry"`)
    fn default() -> Self {
        Self {
            annual_temp: Celsius::new(11),
            coldest_month_temp: Celsius::new(-1),
            warmest_month_temp: Celsius::new(26),
            annual_precip: Millimeters::new(461),
            driest_month_precip: Millimeters::new(8),
            dry_season: DrySeasonPattern::NoDrySeason,
        }
    }
}

impl ClimateInputs {
    /// Names accepted by [`ClimateInputs::by_name`]
    pub const PRESET_NAMES: [&'static str; 5] =
        ["singapore", "cairo", "paris", "moscow", "utqiagvik"];

    /// Build inputs from raw values with no dry season
    pub fn new(
        annual_temp: i32,
        coldest_month_temp: i32,
        warmest_month_temp: i32,
        annual_precip: i32,
        driest_month_precip: i32,
    ) -> Self {
        Self {
            annual_temp: Celsius::new(annual_temp),
            coldest_month_temp: Celsius::new(coldest_month_temp),
            warmest_month_temp: Celsius::new(warmest_month_temp),
            annual_precip: Millimeters::new(annual_precip),
            driest_month_precip: Millimeters::new(driest_month_precip),
            dry_season: DrySeasonPattern::NoDrySeason,
        }
    }

    /// Same inputs with a different dry-season pattern
    pub fn with_dry_season(mut self, dry_season: DrySeasonPattern) -> Self {
        self.dry_season = dry_season;
        self
    }

    /// Singapore: equatorial, wet all year (Tropical Rainforest)
    pub fn singapore() -> Self {
        Self::new(27, 26, 28, 2166, 115)
    }

    /// Cairo: hot desert (Dry Desert)
    pub fn cairo() -> Self {
        Self::new(22, 14, 28, 25, 0)
    }

    /// Paris: oceanic (Temperate)
    pub fn paris() -> Self {
        Self::new(12, 5, 20, 637, 41)
    }

    /// Moscow: humid continental (Continental)
    pub fn moscow() -> Self {
        Self::new(6, -6, 19, 707, 35)
    }

    /// Utqiagvik (Barrow), Alaska: arctic coast (Polar Tundra)
    pub fn utqiagvik() -> Self {
        Self::new(-11, -25, 5, 115, 3)
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "singapore" => Some(Self::singapore()),
            "cairo" => Some(Self::cairo()),
            "paris" => Some(Self::paris()),
            "moscow" => Some(Self::moscow()),
            "utqiagvik" | "barrow" => Some(Self::utqiagvik()),
            _ => None,
        }
    }

    /// Numeric inputs paired with the quantity they represent
    pub fn quantities(&self) -> [(InputQuantity, i32); 5] {
        [
            (InputQuantity::AnnualTemp, *self.annual_temp),
            (InputQuantity::ColdestMonthTemp, *self.coldest_month_temp),
            (InputQuantity::WarmestMonthTemp, *self.warmest_month_temp),
            (InputQuantity::AnnualPrecip, *self.annual_precip),
            (InputQuantity::DriestMonthPrecip, *self.driest_month_precip),
        ]
    }

    /// Every numeric input outside `bounds`, in field order
    pub fn out_of_range(&self, bounds: &InputBounds) -> Vec<RangeWarning> {
        self.quantities()
            .into_iter()
            .filter_map(|(quantity, value)| bounds.check(quantity, value))
            .collect()
    }

    /// Load inputs from a JSON file
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, InputsFileError> {
        let contents =
            fs::read_to_string(path).map_err(|e| InputsFileError::LoadFailed(e.to_string()))?;

        let inputs: Self = serde_json::from_str(&contents)
            .map_err(|e| InputsFileError::ParseFailed(e.to_string()))?;

        Ok(inputs)
    }

    /// Save inputs to a JSON file
    ///
    /// # Errors
    /// Returns error if file cannot be written or inputs cannot be serialized
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), InputsFileError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| InputsFileError::SerializeFailed(e.to_string()))?;

        fs::write(path, contents).map_err(|e| InputsFileError::SaveFailed(e.to_string()))?;

        Ok(())
    }
}

/// Errors that can occur reading or writing an inputs file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputsFileError {
    /// Failed to read file
    LoadFailed(String),
    /// Failed to parse file contents
    ParseFailed(String),
    /// Failed to serialize inputs
    SerializeFailed(String),
    /// Failed to write file
    SaveFailed(String),
}

impl std::fmt::Display for InputsFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputsFileError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            InputsFileError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            InputsFileError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            InputsFileError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for InputsFileError {}
