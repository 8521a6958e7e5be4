use clap::Parser;
use climate_core::core_types::{Celsius, Millimeters};
use climate_core::{ClimateClassifier, ClimateInputs, DrySeasonPattern};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Climate designation demo with configurable inputs
#[derive(Parser, Debug)]
#[command(name = "climate-demo")]
#[command(about = "Classify a region's climate from its climate normals", long_about = None)]
struct Args {
    /// Reference preset (singapore, cairo, paris, moscow, utqiagvik)
    #[arg(short = 'p', long)]
    preset: Option<String>,

    /// JSON file with inputs (overrides --preset)
    #[arg(short, long)]
    inputs: Option<PathBuf>,

    /// Average annual temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    annual_temp: Option<i32>,

    /// Average temperature of the coldest month in °C
    #[arg(long, allow_negative_numbers = true)]
    coldest_month_temp: Option<i32>,

    /// Average temperature of the warmest month in °C
    #[arg(long, allow_negative_numbers = true)]
    warmest_month_temp: Option<i32>,

    /// Average annual precipitation in mm
    #[arg(long, allow_negative_numbers = true)]
    annual_precip: Option<i32>,

    /// Average precipitation of the driest month in mm
    #[arg(long, allow_negative_numbers = true)]
    driest_month_precip: Option<i32>,

    /// Dry-season pattern (no-dry-season, dry-winter, dry-summer, always-dry)
    #[arg(short, long)]
    dry_season: Option<String>,

    /// Print the full classification as JSON instead of the label
    #[arg(long)]
    json: bool,

    /// Write the final inputs to a JSON file
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Range warnings are reported through tracing, so show them by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Starting inputs: file, then preset, then defaults
    let start = if let Some(path) = &args.inputs {
        info!(path = %path.display(), "loading climate inputs");
        ClimateInputs::load(path)?
    } else if let Some(preset_name) = &args.preset {
        match ClimateInputs::by_name(preset_name) {
            Some(inputs) => inputs,
            None => {
                eprintln!("Unknown preset '{}', using defaults", preset_name);
                ClimateInputs::default()
            }
        }
    } else {
        ClimateInputs::default()
    };

    let mut classifier = ClimateClassifier::from_inputs(start);

    // Each override reclassifies immediately
    if let Some(temp) = args.annual_temp {
        classifier.set_annual_temp(Celsius::new(temp));
    }
    if let Some(temp) = args.coldest_month_temp {
        classifier.set_coldest_month_temp(Celsius::new(temp));
    }
    if let Some(temp) = args.warmest_month_temp {
        classifier.set_warmest_month_temp(Celsius::new(temp));
    }
    if let Some(precip) = args.annual_precip {
        classifier.set_annual_precip(Millimeters::new(precip));
    }
    if let Some(precip) = args.driest_month_precip {
        classifier.set_driest_month_precip(Millimeters::new(precip));
    }
    if let Some(name) = &args.dry_season {
        match DrySeasonPattern::from_name(name) {
            Some(pattern) => classifier.set_dry_season(pattern),
            None => eprintln!(
                "Unknown dry-season pattern '{}', keeping {}",
                name,
                classifier.dry_season()
            ),
        }
    }

    if args.json {
        let warnings = classifier.validate();
        let report = serde_json::json!({
            "inputs": classifier.inputs(),
            "classification": classifier.classification(),
            "designation": classifier.describe(),
            "warnings": warnings,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", classifier.describe());
    }

    if let Some(path) = &args.save {
        classifier.inputs().save(path)?;
        info!(path = %path.display(), "saved climate inputs");
    }

    Ok(())
}
