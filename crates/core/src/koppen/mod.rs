//! Climate designation classifier
//!
//! [`ClimateClassifier`] owns a set of [`ClimateInputs`] and keeps its
//! [`Classification`] current: every setter stores the new value and then
//! reclassifies before returning, so a caller never observes stale output.
//!
//! # Example
//! ```
//! use climate_core::core_types::{Celsius, Millimeters, PrimaryEnvironment};
//! use climate_core::ClimateClassifier;
//!
//! let mut classifier = ClimateClassifier::new();
//! assert_eq!(classifier.describe(), "Dry Steppe AlwaysDry");
//!
//! // Wetter and milder winters push the region into Temperate
//! classifier.set_annual_precip(Millimeters::new(900));
//! classifier.set_coldest_month_temp(Celsius::new(4));
//! assert_eq!(classifier.primary(), PrimaryEnvironment::Temperate);
//! ```

pub mod presets;
pub mod rules;

pub use presets::{ClimateInputs, InputsFileError};
pub use rules::{classify, dryness_threshold, primary_environment, Classification};

use crate::core_types::bounds::{InputBounds, InputQuantity, RangeWarning};
use crate::core_types::units::{Celsius, Millimeters};
use crate::core_types::zones::{
    DryKind, DrySeasonPattern, PolarKind, PrimaryEnvironment, SubEnvironment, TropicalKind,
};
use std::fmt;
use tracing::{debug, warn};

/// Stateful classifier that reclassifies on every input change
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateClassifier {
    inputs: ClimateInputs,
    classification: Classification,
    bounds: InputBounds,
}

impl Default for ClimateClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ClimateClassifier {
    /// Create a classifier with the default inputs, already classified
    pub fn new() -> Self {
        Self::from_inputs(ClimateInputs::default())
    }

    /// Create a classifier from arbitrary inputs, already classified
    ///
    /// Out-of-range values are logged and kept.
    pub fn from_inputs(inputs: ClimateInputs) -> Self {
        Self::with_bounds(inputs, InputBounds::default())
    }

    /// Create a classifier that reports against custom input bounds
    pub fn with_bounds(inputs: ClimateInputs, bounds: InputBounds) -> Self {
        for warning in inputs.out_of_range(&bounds) {
            warn!(%warning, "climate input outside expected range");
        }
        let mut inputs = inputs;
        let classification = Self::settle(&mut inputs);
        Self {
            inputs,
            classification,
            bounds,
        }
    }

    pub fn set_annual_temp(&mut self, temp: Celsius) {
        self.inputs.annual_temp = temp;
        self.check_input(InputQuantity::AnnualTemp, *temp);
        self.reclassify();
    }

    pub fn set_coldest_month_temp(&mut self, temp: Celsius) {
        self.inputs.coldest_month_temp = temp;
        self.check_input(InputQuantity::ColdestMonthTemp, *temp);
        self.reclassify();
    }

    pub fn set_warmest_month_temp(&mut self, temp: Celsius) {
        self.inputs.warmest_month_temp = temp;
        self.check_input(InputQuantity::WarmestMonthTemp, *temp);
        self.reclassify();
    }

    pub fn set_annual_precip(&mut self, precip: Millimeters) {
        self.inputs.annual_precip = precip;
        self.check_input(InputQuantity::AnnualPrecip, *precip);
        self.reclassify();
    }

    pub fn set_driest_month_precip(&mut self, precip: Millimeters) {
        self.inputs.driest_month_precip = precip;
        self.check_input(InputQuantity::DriestMonthPrecip, *precip);
        self.reclassify();
    }

    /// Set the dry-season pattern
    ///
    /// If the region is Dry, `NoDrySeason` is immediately normalized back to
    /// `AlwaysDry`.
    pub fn set_dry_season(&mut self, dry_season: DrySeasonPattern) {
        self.inputs.dry_season = dry_season;
        self.reclassify();
    }

    /// Current inputs, including any normalized dry-season pattern
    pub fn inputs(&self) -> &ClimateInputs {
        &self.inputs
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn primary(&self) -> PrimaryEnvironment {
        self.classification.primary
    }

    pub fn sub_environment(&self) -> SubEnvironment {
        self.classification.sub
    }

    pub fn dry_season(&self) -> DrySeasonPattern {
        self.inputs.dry_season
    }

    /// Tropical subtype, `None` unless the region is Tropical
    pub fn tropical_kind(&self) -> Option<TropicalKind> {
        self.classification.sub.tropical()
    }

    /// Dry subtype, `None` unless the region is Dry
    pub fn dry_kind(&self) -> Option<DryKind> {
        self.classification.sub.dry()
    }

    /// Polar subtype, `None` unless the region is Polar
    pub fn polar_kind(&self) -> Option<PolarKind> {
        self.classification.sub.polar()
    }

    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    /// Human-readable designation, e.g. `"Tropical Rainforest NoDrySeason"`
    pub fn describe(&self) -> String {
        self.classification.label()
    }

    /// Inputs outside this classifier's bounds
    pub fn validate(&self) -> Vec<RangeWarning> {
        self.validate_with(&self.bounds)
    }

    /// Inputs outside the given bounds
    pub fn validate_with(&self, bounds: &InputBounds) -> Vec<RangeWarning> {
        self.inputs.out_of_range(bounds)
    }

    fn check_input(&self, quantity: InputQuantity, value: i32) {
        if let Some(warning) = self.bounds.check(quantity, value) {
            warn!(%warning, "climate input outside expected range");
        }
    }

    fn reclassify(&mut self) {
        self.classification = Self::settle(&mut self.inputs);
    }

    /// Classify `inputs` and write the normalized dry-season pattern back
    fn settle(inputs: &mut ClimateInputs) -> Classification {
        let classification = classify(inputs);
        // Normalization sticks: the pattern stays AlwaysDry after leaving Dry
        inputs.dry_season = classification.dry_season;
        debug!(
            designation = %classification,
            annual_temp = *inputs.annual_temp,
            annual_precip = *inputs.annual_precip,
            "reclassified climate"
        );
        classification
    }
}

impl fmt::Display for ClimateClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.classification, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matches_defaults() {
        let classifier = ClimateClassifier::new();
        assert_eq!(*classifier.inputs().annual_temp, 11);
        assert_eq!(*classifier.inputs().coldest_month_temp, -1);
        assert_eq!(*classifier.inputs().warmest_month_temp, 26);
        assert_eq!(*classifier.inputs().annual_precip, 461);
        assert_eq!(*classifier.inputs().driest_month_precip, 8);
        assert_eq!(classifier.describe(), "Dry Steppe AlwaysDry");
        assert_eq!(classifier.to_string(), classifier.describe());
    }

    #[test]
    fn test_construction_normalizes_dry_season() {
        let classifier = ClimateClassifier::new();
        assert_eq!(classifier.dry_season(), DrySeasonPattern::AlwaysDry);
        assert_eq!(classifier.inputs().dry_season, DrySeasonPattern::AlwaysDry);
    }

    #[test]
    fn test_setter_reclassifies() {
        let mut classifier = ClimateClassifier::from_inputs(ClimateInputs::singapore());
        assert_eq!(classifier.tropical_kind(), Some(TropicalKind::Rainforest));

        // floor = 100 - 2166/25 = 14
        classifier.set_driest_month_precip(Millimeters::new(30));
        assert_eq!(classifier.tropical_kind(), Some(TropicalKind::Monsoon));

        classifier.set_driest_month_precip(Millimeters::new(10));
        assert_eq!(classifier.tropical_kind(), Some(TropicalKind::Savanna));
    }

    #[test]
    fn test_setting_no_dry_season_on_dry_region_is_rewritten() {
        let mut classifier = ClimateClassifier::new();
        classifier.set_dry_season(DrySeasonPattern::DryWinter);
        assert_eq!(classifier.dry_season(), DrySeasonPattern::DryWinter);

        classifier.set_dry_season(DrySeasonPattern::NoDrySeason);
        assert_eq!(classifier.dry_season(), DrySeasonPattern::AlwaysDry);
    }

    #[test]
    fn test_normalized_pattern_survives_leaving_dry() {
        let mut classifier = ClimateClassifier::new();
        classifier.set_annual_precip(Millimeters::new(900));
        assert_eq!(classifier.primary(), PrimaryEnvironment::Continental);
        assert_eq!(classifier.describe(), "Continental AlwaysDry");
    }

    #[test]
    fn test_per_kind_accessors_follow_primary() {
        let mut classifier = ClimateClassifier::new();
        assert_eq!(classifier.dry_kind(), Some(DryKind::Steppe));
        assert_eq!(classifier.tropical_kind(), None);
        assert_eq!(classifier.polar_kind(), None);

        classifier.set_warmest_month_temp(Celsius::new(5));
        assert_eq!(classifier.primary(), PrimaryEnvironment::Polar);
        assert_eq!(classifier.polar_kind(), Some(PolarKind::Tundra));
        assert_eq!(classifier.dry_kind(), None);
    }

    #[test]
    fn test_out_of_range_inputs_are_kept() {
        let mut classifier = ClimateClassifier::new();
        classifier.set_annual_temp(Celsius::new(80));
        assert_eq!(*classifier.inputs().annual_temp, 80);

        let warnings = classifier.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].quantity, InputQuantity::AnnualTemp);
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = InputBounds {
            annual_precip: 0..=400,
            ..InputBounds::default()
        };
        let classifier = ClimateClassifier::with_bounds(ClimateInputs::default(), bounds.clone());
        assert_eq!(classifier.bounds(), &bounds);
        assert_eq!(classifier.validate().len(), 1);
        assert!(classifier.validate_with(&InputBounds::default()).is_empty());
    }
}
