//! Declared ranges for reasonable environmental data
//!
//! Inputs outside these ranges are still classified. The classifier only
//! reports them as [`RangeWarning`]s so a caller can decide what to do.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Declared input ranges (inclusive on both ends)
pub mod input_ranges {
    use std::ops::RangeInclusive;

    /// Average annual temperature in °C `[-65, 36]`
    pub const ANNUAL_TEMP: RangeInclusive<i32> = -65..=36;

    /// Average monthly temperature in °C `[-80, 55]`
    pub const MONTHLY_TEMP: RangeInclusive<i32> = -80..=55;

    /// Average annual precipitation in mm `[0, 11000]`
    ///
    /// Wettest recorded annual normals sit a little under 12 m; 11 m covers
    /// every inhabited station.
    pub const ANNUAL_PRECIP: RangeInclusive<i32> = 0..=11000;

    /// Average monthly precipitation in mm `[0, 15000]`
    pub const MONTHLY_PRECIP: RangeInclusive<i32> = 0..=15000;
}

/// Which classifier input a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputQuantity {
    AnnualTemp,
    ColdestMonthTemp,
    WarmestMonthTemp,
    AnnualPrecip,
    DriestMonthPrecip,
}

impl InputQuantity {
    pub fn label(self) -> &'static str {
        match self {
            InputQuantity::AnnualTemp => "average annual temperature",
            InputQuantity::ColdestMonthTemp => "coldest month temperature",
            InputQuantity::WarmestMonthTemp => "warmest month temperature",
            InputQuantity::AnnualPrecip => "average annual precipitation",
            InputQuantity::DriestMonthPrecip => "driest month precipitation",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            InputQuantity::AnnualTemp
            | InputQuantity::ColdestMonthTemp
            | InputQuantity::WarmestMonthTemp => "°C",
            InputQuantity::AnnualPrecip | InputQuantity::DriestMonthPrecip => "mm",
        }
    }
}

impl fmt::Display for InputQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configurable acceptable ranges for classifier inputs
///
/// Defaults to the [`input_ranges`] constants. Monthly bounds apply to both the
/// coldest and warmest month temperature; the monthly precipitation bound
/// applies to the driest month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBounds {
    pub annual_temp: RangeInclusive<i32>,
    pub monthly_temp: RangeInclusive<i32>,
    pub annual_precip: RangeInclusive<i32>,
    pub monthly_precip: RangeInclusive<i32>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            annual_temp: input_ranges::ANNUAL_TEMP,
            monthly_temp: input_ranges::MONTHLY_TEMP,
            annual_precip: input_ranges::ANNUAL_PRECIP,
            monthly_precip: input_ranges::MONTHLY_PRECIP,
        }
    }
}

impl InputBounds {
    /// Range that applies to `quantity`
    pub fn range_for(&self, quantity: InputQuantity) -> &RangeInclusive<i32> {
        match quantity {
            InputQuantity::AnnualTemp => &self.annual_temp,
            InputQuantity::ColdestMonthTemp | InputQuantity::WarmestMonthTemp => &self.monthly_temp,
            InputQuantity::AnnualPrecip => &self.annual_precip,
            InputQuantity::DriestMonthPrecip => &self.monthly_precip,
        }
    }

    /// Check a single value, returning a warning if it falls outside its range
    pub fn check(&self, quantity: InputQuantity, value: i32) -> Option<RangeWarning> {
        let range = self.range_for(quantity);
        if range.contains(&value) {
            None
        } else {
            Some(RangeWarning {
                quantity,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

/// An input value outside its declared range
///
/// This is a recoverable condition: classification still runs on the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeWarning {
    /// Input the value was given for
    pub quantity: InputQuantity,
    /// The offending value
    pub value: i32,
    /// Lower end of the declared range
    pub min: i32,
    /// Upper end of the declared range
    pub max: i32,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.quantity.unit();
        write!(
            f,
            "{} of {}{unit} is outside the expected range {}{unit}..={}{unit}",
            self.quantity, self.value, self.min, self.max
        )
    }
}

impl std::error::Error for RangeWarning {}
