//! Climate designation taxonomy
//!
//! Köppen-style groups used by the classifier. The designations are loosely
//! based on the Köppen climate classification and intentionally do not map
//! onto it 1:1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level climate group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryEnvironment {
    /// Hot all year with abundant rain
    Tropical,
    /// Evaporation exceeds precipitation
    Dry,
    /// Mild winters above freezing
    Temperate,
    /// Winters below freezing with warm summers
    Continental,
    /// No month warmer than 10°C
    Polar,
}

impl PrimaryEnvironment {
    /// All groups in cascade order
    pub const ALL: [PrimaryEnvironment; 5] = [
        PrimaryEnvironment::Tropical,
        PrimaryEnvironment::Dry,
        PrimaryEnvironment::Polar,
        PrimaryEnvironment::Temperate,
        PrimaryEnvironment::Continental,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            PrimaryEnvironment::Tropical => "Tropical",
            PrimaryEnvironment::Dry => "Dry",
            PrimaryEnvironment::Temperate => "Temperate",
            PrimaryEnvironment::Continental => "Continental",
            PrimaryEnvironment::Polar => "Polar",
        }
    }

    /// Whether this group carries a sub-environment at all
    pub fn has_sub_environment(self) -> bool {
        matches!(
            self,
            PrimaryEnvironment::Tropical | PrimaryEnvironment::Dry | PrimaryEnvironment::Polar
        )
    }
}

impl fmt::Display for PrimaryEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tropical subtype, chosen by driest-month precipitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TropicalKind {
    Rainforest,
    Monsoon,
    Savanna,
}

/// Dry subtype, chosen by annual precipitation against the dryness threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DryKind {
    Desert,
    Steppe,
}

/// Polar subtype, chosen by warmest-month temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolarKind {
    Tundra,
    EternalFrost,
}

/// The single active sub-environment slot
///
/// Only one family can be populated at a time and the variant always matches
/// the primary group it was derived for:
/// - **Tropical**: [`TropicalKind`]
/// - **Dry**: [`DryKind`]
/// - **Polar**: [`PolarKind`]
/// - Temperate and Continental have no subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubEnvironment {
    #[default]
    None,
    Tropical(TropicalKind),
    Dry(DryKind),
    Polar(PolarKind),
}

impl SubEnvironment {
    /// Primary group this subtype belongs to, `None` when no slot is active
    pub fn family(self) -> Option<PrimaryEnvironment> {
        match self {
            SubEnvironment::None => None,
            SubEnvironment::Tropical(_) => Some(PrimaryEnvironment::Tropical),
            SubEnvironment::Dry(_) => Some(PrimaryEnvironment::Dry),
            SubEnvironment::Polar(_) => Some(PrimaryEnvironment::Polar),
        }
    }

    /// Display name of the active subtype
    pub fn name(self) -> Option<&'static str> {
        match self {
            SubEnvironment::None => None,
            SubEnvironment::Tropical(TropicalKind::Rainforest) => Some("Rainforest"),
            SubEnvironment::Tropical(TropicalKind::Monsoon) => Some("Monsoon"),
            SubEnvironment::Tropical(TropicalKind::Savanna) => Some("Savanna"),
            SubEnvironment::Dry(DryKind::Desert) => Some("Desert"),
            SubEnvironment::Dry(DryKind::Steppe) => Some("Steppe"),
            SubEnvironment::Polar(PolarKind::Tundra) => Some("Tundra"),
            SubEnvironment::Polar(PolarKind::EternalFrost) => Some("EternalFrost"),
        }
    }

    pub fn tropical(self) -> Option<TropicalKind> {
        match self {
            SubEnvironment::Tropical(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn dry(self) -> Option<DryKind> {
        match self {
            SubEnvironment::Dry(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn polar(self) -> Option<PolarKind> {
        match self {
            SubEnvironment::Polar(kind) => Some(kind),
            _ => None,
        }
    }
}

/// When in the year the dry period falls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrySeasonPattern {
    /// Precipitation is fairly even across seasons and not close to zero
    #[default]
    NoDrySeason,
    DryWinter,
    DrySummer,
    /// Very low precipitation all year
    AlwaysDry,
}

impl DrySeasonPattern {
    pub const ALL: [DrySeasonPattern; 4] = [
        DrySeasonPattern::NoDrySeason,
        DrySeasonPattern::DryWinter,
        DrySeasonPattern::DrySummer,
        DrySeasonPattern::AlwaysDry,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            DrySeasonPattern::NoDrySeason => "NoDrySeason",
            DrySeasonPattern::DryWinter => "DryWinter",
            DrySeasonPattern::DrySummer => "DrySummer",
            DrySeasonPattern::AlwaysDry => "AlwaysDry",
        }
    }

    /// Parse a pattern name, ignoring case, dashes and underscores
    ///
    /// Accepts both `"DryWinter"` and `"dry-winter"` forms.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.name().to_lowercase() == key)
    }
}

impl fmt::Display for DrySeasonPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
