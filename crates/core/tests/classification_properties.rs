//! Property-style checks over a grid of inputs
//!
//! Sweeps boundary values for every rule in the cascade and checks that the
//! sub-environment always matches its primary group, that classification is
//! deterministic, and that dry regions never keep `NoDrySeason`.

use climate_core::{classify, ClimateInputs, DrySeasonPattern, PrimaryEnvironment, SubEnvironment};

const ANNUAL_TEMPS: [i32; 6] = [-20, -14, 0, 11, 27, 50];
const COLDEST_TEMPS: [i32; 7] = [-30, -1, 0, 1, 17, 18, 26];
const WARMEST_TEMPS: [i32; 7] = [-5, 0, 1, 9, 10, 11, 26];
const ANNUAL_PRECIPS: [i32; 6] = [0, 100, 461, 480, 1000, 2166];
const DRIEST_PRECIPS: [i32; 6] = [0, 19, 20, 59, 60, 115];

fn sweep() -> impl Iterator<Item = ClimateInputs> {
    ANNUAL_TEMPS.into_iter().flat_map(|annual| {
        COLDEST_TEMPS.into_iter().flat_map(move |coldest| {
            WARMEST_TEMPS.into_iter().flat_map(move |warmest| {
                ANNUAL_PRECIPS.into_iter().flat_map(move |precip| {
                    DRIEST_PRECIPS.into_iter().flat_map(move |driest| {
                        DrySeasonPattern::ALL.into_iter().map(move |season| {
                            ClimateInputs::new(annual, coldest, warmest, precip, driest)
                                .with_dry_season(season)
                        })
                    })
                })
            })
        })
    })
}

#[test]
fn test_sub_environment_matches_primary_family() {
    for inputs in sweep() {
        let result = classify(&inputs);
        if result.primary.has_sub_environment() {
            assert_eq!(result.sub.family(), Some(result.primary), "{inputs:?}");
        } else {
            assert_eq!(result.sub, SubEnvironment::None, "{inputs:?}");
        }
    }
}

#[test]
fn test_sweep_reaches_every_primary_group() {
    let reached: Vec<PrimaryEnvironment> =
        sweep().map(|inputs| classify(&inputs).primary).collect();
    for primary in PrimaryEnvironment::ALL {
        assert!(reached.contains(&primary), "no input classified as {primary}");
    }
}

#[test]
fn test_classification_is_deterministic() {
    for inputs in sweep() {
        assert_eq!(classify(&inputs), classify(&inputs), "{inputs:?}");
    }
}

#[test]
fn test_dry_regions_never_report_no_dry_season() {
    for inputs in sweep() {
        let result = classify(&inputs);
        if result.primary == PrimaryEnvironment::Dry {
            assert_ne!(result.dry_season, DrySeasonPattern::NoDrySeason, "{inputs:?}");
            if inputs.dry_season == DrySeasonPattern::NoDrySeason {
                assert_eq!(result.dry_season, DrySeasonPattern::AlwaysDry);
            }
        } else {
            assert_eq!(result.dry_season, inputs.dry_season, "{inputs:?}");
        }
    }
}

#[test]
fn test_later_rules_win() {
    for inputs in sweep() {
        let result = classify(&inputs);
        let warmest = *inputs.warmest_month_temp;
        let coldest = *inputs.coldest_month_temp;
        let precip = i64::from(*inputs.annual_precip);
        let threshold = i64::from(*inputs.annual_temp) * 20 + 280;

        if coldest < 0 && warmest > 10 && precip > threshold {
            assert_eq!(result.primary, PrimaryEnvironment::Continental, "{inputs:?}");
        } else if (1..=17).contains(&coldest) && warmest > 10 && precip > threshold {
            assert_eq!(result.primary, PrimaryEnvironment::Temperate, "{inputs:?}");
        } else if warmest < 10 {
            assert_eq!(result.primary, PrimaryEnvironment::Polar, "{inputs:?}");
        } else if precip < threshold {
            assert_eq!(result.primary, PrimaryEnvironment::Dry, "{inputs:?}");
        } else {
            assert_eq!(result.primary, PrimaryEnvironment::Tropical, "{inputs:?}");
        }
    }
}

#[test]
fn test_label_has_sub_environment_token_only_when_active() {
    for inputs in sweep() {
        let result = classify(&inputs);
        let tokens: Vec<_> = result.label().split(' ').map(str::to_owned).collect();
        let expected = if result.sub == SubEnvironment::None { 2 } else { 3 };
        assert_eq!(tokens.len(), expected, "{}", result.label());
        assert_eq!(tokens[0], result.primary.to_string());
        assert_eq!(tokens[expected - 1], result.dry_season.to_string());
    }
}
