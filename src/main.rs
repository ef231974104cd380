//! survey-calc - directional survey calculator
//!
//! Command-line front end for the minimum curvature and vertical section
//! calculations.
//!
//! # Usage
//!
//! ```bash
//! # Segment between two stations 30 ft apart
//! survey-calc segment --distance 30 --az1 10 --dip1 5 --az2 12 --dip2 6.5
//!
//! # Vertical section for an accumulated displacement
//! survey-calc section --northing 120.4 --easting -35.2 --plan-direction 345
//!
//! # Write a config template
//! survey-calc init-config --output survey_config.toml
//! ```
//!
//! # Environment Variables
//!
//! - `SAIREN_SURVEY_CONFIG`: Path to survey config TOML
//! - `RUST_LOG`: Logging level (default: info)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use sairen_survey::config::defaults::DOGLEG_SEVERITY_INTERVAL;
use sairen_survey::{compute_segment, project_section, LengthUnit, SurveyError, WellConfig};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "survey-calc")]
#[command(about = "SAIREN directional survey calculator")]
#[command(version)]
struct CliArgs {
    /// Survey config TOML (overrides $SAIREN_SURVEY_CONFIG and ./survey_config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a text table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Minimum curvature deltas between two survey stations
    Segment {
        /// Course length between stations
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,
        /// Azimuth at the upper station (degrees)
        #[arg(long, allow_negative_numbers = true)]
        az1: f64,
        /// Inclination at the upper station (degrees)
        #[arg(long, allow_negative_numbers = true)]
        dip1: f64,
        /// Azimuth at the lower station (degrees)
        #[arg(long, allow_negative_numbers = true)]
        az2: f64,
        /// Inclination at the lower station (degrees)
        #[arg(long, allow_negative_numbers = true)]
        dip2: f64,
        /// Grid convergence (degrees). Defaults to survey.grid_convergence_deg
        #[arg(long, allow_negative_numbers = true)]
        convergence: Option<f64>,
    },

    /// Closure and vertical section from accumulated northing/easting
    Section {
        /// Accumulated northing
        #[arg(long, allow_negative_numbers = true)]
        northing: f64,
        /// Accumulated easting
        #[arg(long, allow_negative_numbers = true)]
        easting: f64,
        /// Vertical section plan direction (degrees). Defaults to survey.vertical_section_azimuth_deg
        #[arg(long, allow_negative_numbers = true)]
        plan_direction: Option<f64>,
    },

    /// Write the effective configuration to a TOML file
    InitConfig {
        /// Destination path
        #[arg(long, short)]
        output: PathBuf,
    },
}

// ============================================================================
// Output
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{out}");
    Ok(())
}

fn run_segment(
    well_config: &WellConfig,
    json: bool,
    (distance, az1, dip1, az2, dip2): (f64, f64, f64, f64, f64),
    convergence: Option<f64>,
) -> Result<()> {
    let convergence = convergence.unwrap_or(well_config.survey.grid_convergence_deg);

    let deltas = match compute_segment(distance, az1, dip1, az2, dip2, convergence) {
        Ok(deltas) => deltas,
        Err(e @ SurveyError::ZeroCourseLength) => {
            warn!(az1, dip1, az2, dip2, "Stations share the same depth, no segment to calculate");
            return Err(e).context("Survey segment is undefined");
        }
        Err(e) => return Err(e).context("Survey segment rejected"),
    };

    info!(
        distance,
        convergence,
        dls = deltas.dogleg_severity,
        "Minimum curvature segment calculated"
    );

    if json {
        return print_json(&deltas);
    }

    let unit = well_config.survey.length_unit;
    println!("  TVD change:       {:>12.3} {unit}", deltas.tvd);
    println!("  Northing change:  {:>12.3} {unit}", deltas.northing);
    println!("  Easting change:   {:>12.3} {unit}", deltas.easting);
    println!(
        "  Dogleg severity:  {:>12.3} °/{}{unit}",
        deltas.dogleg_severity, DOGLEG_SEVERITY_INTERVAL
    );
    Ok(())
}

fn run_section(
    well_config: &WellConfig,
    json: bool,
    northing: f64,
    easting: f64,
    plan_direction: Option<f64>,
) -> Result<()> {
    let plan_direction =
        plan_direction.unwrap_or(well_config.survey.vertical_section_azimuth_deg);
    let section = project_section(northing, easting, plan_direction);

    info!(
        plan_direction,
        closure = section.closure_distance,
        vs = section.vertical_section,
        "Vertical section calculated"
    );

    if json {
        return print_json(&section);
    }

    let unit: LengthUnit = well_config.survey.length_unit;
    println!("  Closure distance:        {:>12.3} {unit}", section.closure_distance);
    println!("  Closure azimuth:         {:>12.3} °", section.closure_azimuth);
    println!("  Directional difference:  {:>12.3} °", section.directional_difference);
    println!("  Vertical section:        {:>12.3} {unit}", section.vertical_section);
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let well_config = match &args.config {
        Some(path) => WellConfig::load_from_file(path)
            .with_context(|| format!("Failed to load survey config {}", path.display()))?,
        None => WellConfig::load(),
    };
    info!(
        "Well: {} | Unit: {} | Convergence: {:.2}° | VS azimuth: {:.2}°",
        well_config.well.name,
        well_config.survey.length_unit,
        well_config.survey.grid_convergence_deg,
        well_config.survey.vertical_section_azimuth_deg
    );

    match args.command {
        SubCommand::Segment {
            distance,
            az1,
            dip1,
            az2,
            dip2,
            convergence,
        } => run_segment(
            &well_config,
            args.json,
            (distance, az1, dip1, az2, dip2),
            convergence,
        ),
        SubCommand::Section {
            northing,
            easting,
            plan_direction,
        } => run_section(&well_config, args.json, northing, easting, plan_direction),
        SubCommand::InitConfig { output } => {
            well_config
                .save_to_file(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Wrote {}", output.display());
            Ok(())
        }
    }
}
