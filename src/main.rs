use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use riskmap::{
    Coordinate, HealthAssessment, MapOptions, MapSession, RiskMapConfig, RiskMapError, RiskScorer,
    assessments_to_json, logging,
};

/// Largest batch `assess --count` will produce
const MAX_COUNT: u32 = 1000;

#[derive(Parser)]
#[command(name = "riskmap", version)]
#[command(about = "Environmental health risk assessments for map coordinates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a coordinate and print the synthesized metrics
    Assess {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// Number of independent assessments to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Simulate a map click and print the marker popup markup
    Popup {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<RiskMapError>() {
                Some(risk_err) => eprintln!("Error: {}", risk_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = RiskMapConfig::load_from_path(cli.config.clone())?;
    if cli.seed.is_some() {
        config.scorer.seed = cli.seed;
    }

    logging::init(&config.logging, cli.verbose)?;

    match cli.command {
        Some(Commands::Assess {
            lat,
            lng,
            count,
            json,
        }) => assess(&config, Coordinate::new(lat, lng), count, json),
        Some(Commands::Popup { lat, lng }) => popup(&config, Coordinate::new(lat, lng)),
        None => {
            print_banner(&cli, &config);
            Ok(())
        }
    }
}

fn assess(config: &RiskMapConfig, coordinate: Coordinate, count: u32, json: bool) -> Result<()> {
    if count == 0 || count > MAX_COUNT {
        return Err(RiskMapError::validation(format!(
            "Count must be between 1 and {MAX_COUNT}, got {count}"
        ))
        .into());
    }
    warn_if_off_globe(coordinate);

    let mut scorer = RiskScorer::from_config(&config.scorer);
    let assessments: Vec<HealthAssessment> = (0..count)
        .map(|_| scorer.assess(coordinate.latitude, coordinate.longitude))
        .collect();

    if json {
        println!("{}", assessments_to_json(&assessments)?);
    } else {
        for (i, assessment) in assessments.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{assessment}");
        }
    }

    Ok(())
}

fn popup(config: &RiskMapConfig, coordinate: Coordinate) -> Result<()> {
    warn_if_off_globe(coordinate);

    let mut session = MapSession::new(
        MapOptions::from(&config.map),
        RiskScorer::from_config(&config.scorer),
        |assessment: &HealthAssessment| {
            tracing::info!(
                risk_index = assessment.risk_index(),
                "Assessment delivered to map"
            );
        },
    );

    let marker = session.click(coordinate.latitude, coordinate.longitude);
    println!("{}", marker.popup);
    Ok(())
}

fn warn_if_off_globe(coordinate: Coordinate) {
    if !coordinate.is_on_globe() {
        tracing::warn!(
            coordinates = %coordinate.format_coordinates(),
            "Coordinate is outside the globe, assessing anyway"
        );
    }
}

fn print_banner(cli: &Cli, config: &RiskMapConfig) {
    println!("RiskMap {}", riskmap::VERSION);
    println!("Synthesized health risk assessments for any point on the map.");
    println!();
    println!("Try: riskmap assess --lat 48.137 --lng 11.575");
    println!("     riskmap popup --lat -33.87 --lng 151.21");

    if cli.verbose {
        let source = cli
            .config
            .clone()
            .or_else(RiskMapConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!();
        println!("Using config from: {source}");
        println!("Log level: {}", config.logging.level);
        println!(
            "Map center: {} (zoom {})",
            Coordinate::new(config.map.center_latitude, config.map.center_longitude)
                .format_coordinates(),
            config.map.zoom
        );
        match config.scorer.seed {
            Some(seed) => println!("Random seed: {seed}"),
            None => println!("Random seed: entropy"),
        }
    }
}
