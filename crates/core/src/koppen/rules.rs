//! Classification rule set
//!
//! The primary group is decided by an ordered cascade in which every matching
//! rule overwrites the previous result, so a region satisfying several rules
//! ends up with the *last* one:
//!
//! 1. **Tropical**: coldest month ≥ 18°C and annual precipitation ≥ 1000 mm
//! 2. **Dry**: annual precipitation below the dryness threshold `T`
//! 3. **Polar**: warmest month below 10°C
//! 4. **Temperate**: coldest month in 1..=17°C, warmest month above 10°C, precipitation above `T`
//! 5. **Continental**: coldest month below 0°C, warmest month above 10°C, precipitation above `T`
//!
//! where `T = annual_temp * 20 + 280` mm. If nothing matches the region stays
//! Tropical. All arithmetic runs in `i64` with truncating division, so every
//! `i32` input is classified without overflow.

use crate::core_types::zones::{
    DryKind, DrySeasonPattern, PolarKind, PrimaryEnvironment, SubEnvironment, TropicalKind,
};
use crate::koppen::presets::ClimateInputs;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coldest-month temperature at or above which a wet region is Tropical (°C)
pub const TROPICAL_MIN_COLDEST_MONTH: i64 = 18;

/// Annual precipitation at or above which a hot region is Tropical (mm)
pub const TROPICAL_MIN_ANNUAL_PRECIP: i64 = 1000;

/// Warmest-month temperature separating Polar from the other groups (°C)
pub const POLAR_WARMEST_MONTH: i64 = 10;

/// Driest-month precipitation at or above which Tropical is Rainforest (mm)
pub const RAINFOREST_MIN_DRIEST_MONTH: i64 = 60;

/// Full designation derived from a set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    pub primary: PrimaryEnvironment,
    pub sub: SubEnvironment,
    /// Dry-season pattern after normalization
    pub dry_season: DrySeasonPattern,
}

impl Classification {
    /// Space-joined label: primary, active subtype (if any), dry-season pattern
    ///
    /// e.g. `"Tropical Rainforest NoDrySeason"` or `"Temperate NoDrySeason"`
    pub fn label(&self) -> String {
        let mut parts = vec![self.primary.name()];
        parts.extend(self.sub.name());
        parts.push(self.dry_season.name());
        parts.join(" ")
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Dryness threshold `T = annual_temp * 20 + 280` (mm)
#[inline]
pub fn dryness_threshold(inputs: &ClimateInputs) -> i64 {
    inputs.annual_temp.widen() * 20 + 280
}

/// Classify a set of inputs
///
/// Pure: the same inputs always produce the same [`Classification`].
pub fn classify(inputs: &ClimateInputs) -> Classification {
    let primary = primary_environment(inputs);

    let mut dry_season = inputs.dry_season;
    let sub = match primary {
        PrimaryEnvironment::Tropical => SubEnvironment::Tropical(tropical_kind(inputs)),
        PrimaryEnvironment::Dry => {
            let kind = dry_kind(inputs);
            // A dry climate cannot have "no dry season"
            if dry_season == DrySeasonPattern::NoDrySeason {
                dry_season = DrySeasonPattern::AlwaysDry;
            }
            SubEnvironment::Dry(kind)
        }
        PrimaryEnvironment::Polar => SubEnvironment::Polar(polar_kind(inputs)),
        PrimaryEnvironment::Temperate | PrimaryEnvironment::Continental => SubEnvironment::None,
    };

    Classification {
        primary,
        sub,
        dry_season,
    }
}

/// Evaluate the primary cascade. Order matters: later rules win.
pub fn primary_environment(inputs: &ClimateInputs) -> PrimaryEnvironment {
    let coldest = inputs.coldest_month_temp.widen();
    let warmest = inputs.warmest_month_temp.widen();
    let precip = inputs.annual_precip.widen();
    let threshold = dryness_threshold(inputs);

    let mut primary = PrimaryEnvironment::Tropical;

    if coldest >= TROPICAL_MIN_COLDEST_MONTH && precip >= TROPICAL_MIN_ANNUAL_PRECIP {
        primary = PrimaryEnvironment::Tropical;
    }
    if precip < threshold {
        primary = PrimaryEnvironment::Dry;
    }
    if warmest < POLAR_WARMEST_MONTH {
        primary = PrimaryEnvironment::Polar;
    }
    if (1..=17).contains(&coldest) && warmest > POLAR_WARMEST_MONTH && precip > threshold {
        primary = PrimaryEnvironment::Temperate;
    }
    if coldest < 0 && warmest > POLAR_WARMEST_MONTH && precip > threshold {
        primary = PrimaryEnvironment::Continental;
    }

    primary
}

fn tropical_kind(inputs: &ClimateInputs) -> TropicalKind {
    let driest = inputs.driest_month_precip.widen();
    let monsoon_floor = 100 - inputs.annual_precip.widen() / 25;

    if driest >= RAINFOREST_MIN_DRIEST_MONTH {
        TropicalKind::Rainforest
    } else if driest >= monsoon_floor {
        TropicalKind::Monsoon
    } else {
        TropicalKind::Savanna
    }
}

/// Desert/Steppe split, using the pattern as given (before normalization)
fn dry_kind(inputs: &ClimateInputs) -> DryKind {
    let temp_term = inputs.annual_temp.widen() * 20;
    let desert_ceiling = match inputs.dry_season {
        DrySeasonPattern::DryWinter => (temp_term + 280) / 2,
        DrySeasonPattern::AlwaysDry | DrySeasonPattern::NoDrySeason => (temp_term + 140) / 2,
        DrySeasonPattern::DrySummer => temp_term / 2,
    };

    if inputs.annual_precip.widen() <= desert_ceiling {
        DryKind::Desert
    } else {
        DryKind::Steppe
    }
}

fn polar_kind(inputs: &ClimateInputs) -> PolarKind {
    if inputs.warmest_month_temp.widen() > 0 {
        PolarKind::Tundra
    } else {
        PolarKind::EternalFrost
    }
}
