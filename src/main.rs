use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use canopy_scout::measurement::SiteMeasurement;
use canopy_scout::report::{AnalysisReport, ErrorReport};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch live measurements for a location and score it
    Analyze {
        /// Latitude in decimal degrees (-90 to 90)
        lat: f64,
        /// Longitude in decimal degrees (-180 to 180)
        lon: f64,
        /// HTTP timeout per provider request (e.g. "10s", "500ms")
        #[arg(long, default_value = "10s", value_parser = humantime::parse_duration)]
        timeout: Duration,
    },
    /// Score directly supplied measurements
    Score {
        /// Read a measurement JSON record from this file ("-" for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Vegetation index in [0, 1]
        #[arg(long)]
        ndvi: Option<f64>,

        /// Soil pH
        #[arg(long)]
        soil_ph: Option<f64>,

        /// Soil moisture in percent
        #[arg(long)]
        soil_moisture: Option<f64>,

        /// Temperature in degrees Celsius
        #[arg(long)]
        temperature: Option<f64>,

        /// Rainfall in mm over a 14-day window
        #[arg(long)]
        rainfall: Option<f64>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "canopy-scout")]
#[command(about = "Reforestation site suitability scoring CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/canopy-scout/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Emit the JSON report envelope instead of the text summary
    #[arg(short, long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { lat, lon, timeout } => {
            if !(-90.0..=90.0).contains(&lat) {
                eprintln!("Error: Latitude must be between -90 and 90");
                std::process::exit(EXIT_INPUT);
            }
            if !(-180.0..=180.0).contains(&lon) {
                eprintln!("Error: Longitude must be between -180 and 180");
                std::process::exit(EXIT_INPUT);
            }

            let config_path = cli.config.as_ref().map(PathBuf::from);
            let config = match canopy_scout::config::load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {e:#}");
                    std::process::exit(EXIT_CONFIG);
                }
            };

            if cli.verbose && config.openweather_api_key.is_none() {
                eprintln!("No API key configured; weather will use mock data");
            }

            let client = match canopy_scout::providers::create_client(timeout) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to create HTTP client: {e:#}");
                    std::process::exit(EXIT_NETWORK);
                }
            };

            let site =
                canopy_scout::fetch::fetch_site(&client, &config, lat, lon, cli.verbose).await;
            let report = canopy_scout::report::build_fetched_report(&site);
            emit(&report, cli.json);
        }
        Commands::Score {
            input,
            ndvi,
            soil_ph,
            soil_moisture,
            temperature,
            rainfall,
        } => {
            let mut measurement = match input {
                Some(path) => {
                    let raw = if path.as_os_str() == "-" {
                        read_stdin()
                    } else {
                        std::fs::read_to_string(&path).map_err(|e| {
                            format!("Failed to read {}: {}", path.display(), e)
                        })
                    };
                    let raw = match raw {
                        Ok(r) => r,
                        Err(e) => {
                            eprintln!("Error: {e}");
                            std::process::exit(EXIT_INPUT);
                        }
                    };
                    match canopy_scout::report::parse_request(&raw) {
                        Ok(m) => m,
                        Err(e) => {
                            // Malformed envelope input: structured failure,
                            // scoring never runs
                            let error = ErrorReport::new(format!("{e:#}"));
                            println!(
                                "{}",
                                serde_json::to_string_pretty(&error)
                                    .expect("error report serializes")
                            );
                            std::process::exit(EXIT_INPUT);
                        }
                    }
                }
                None => SiteMeasurement::default(),
            };

            // Value flags override whatever the record (or defaults) supplied
            if let Some(v) = ndvi {
                measurement.ndvi = v;
            }
            if let Some(v) = soil_ph {
                measurement.soil_ph = v;
            }
            if let Some(v) = soil_moisture {
                measurement.soil_moisture = v;
            }
            if let Some(v) = temperature {
                measurement.temperature = v;
            }
            if let Some(v) = rainfall {
                measurement.rainfall = v;
            }

            if cli.verbose {
                eprintln!("Scoring measurement: {measurement:?}");
            }

            let report = canopy_scout::report::build_report(measurement);
            emit(&report, cli.json);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn read_stdin() -> Result<String, String> {
    use std::io::Read;
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    Ok(buffer)
}

fn emit(report: &AnalysisReport, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).expect("report serializes")
        );
    } else {
        let use_colors = canopy_scout::output::should_use_colors();
        println!("{}", canopy_scout::output::format_report(report, use_colors));
    }
}
