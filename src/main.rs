use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};

use omen::{
    Condition, FjallStore, MessageSelector, Observation, OmenConfig, OmenError, OmenService,
    OpenMeteoClient, RawObservation, Reading, TemperatureStrategy, WeatherClassifier,
    WidgetProvider, logging,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Omen - a haiku for the weather outside")]
struct Cli {
    /// Path to config file (TOML format)
    #[arg(short, long, env = "OMEN_CONFIG")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current conditions, print a haiku and publish it for the widget
    Fetch {
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,
        /// Classify on apparent rather than air temperature
        #[arg(long)]
        feels_like: bool,
        /// Also print the observation details
        #[arg(long)]
        details: bool,
    },
    /// Classify metric values given on the command line
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        temperature_c: f64,
        #[arg(long)]
        humidity: u8,
        #[arg(long)]
        wind_ms: f64,
        #[arg(long, default_value_t = 0.0)]
        precipitation: f64,
        #[arg(long, default_value_t = 0.0)]
        snowfall: f64,
        /// Thunderstorm probability in percent
        #[arg(long)]
        thunderstorm: Option<u8>,
        #[arg(long)]
        feels_like: bool,
    },
    /// Show what the widget would display
    Widget {
        /// Print the full refresh timeline
        #[arg(long)]
        timeline: bool,
    },
    /// List the weather conditions and how many haikus each has
    Conditions,
}

fn strategy(config: &OmenConfig, feels_like: bool) -> TemperatureStrategy {
    if feels_like {
        TemperatureStrategy::FeelsLike
    } else {
        config.classifier.temperature
    }
}

fn print_reading(reading: &Reading, details: bool) {
    println!("{}", reading.haiku);
    if details {
        println!();
        for (label, value) in reading.details() {
            println!("{label:<12} {value}");
        }
    }
}

async fn run(command: Command, config: &OmenConfig) -> omen::Result<()> {
    match command {
        Command::Fetch {
            latitude,
            longitude,
            feels_like,
            details,
        } => {
            let service = OmenService::new(
                OpenMeteoClient::new(&config.weather)?,
                WeatherClassifier::with_adjustment(strategy(config, feels_like)),
                MessageSelector::default(),
                FjallStore::open(&config.store.location)?,
            );
            let reading = service.refresh(latitude, longitude).await?;
            print_reading(&reading, details);
        }
        Command::Classify {
            temperature_c,
            humidity,
            wind_ms,
            precipitation,
            snowfall,
            thunderstorm,
            feels_like,
        } => {
            let observation = Observation::from_metric(&RawObservation {
                temperature_c,
                relative_humidity: humidity,
                wind_speed_ms: wind_ms,
                precipitation,
                snowfall: Some(snowfall),
                thunderstorm_probability: thunderstorm,
            })?;
            let classifier = WeatherClassifier::with_adjustment(strategy(config, feels_like));
            let condition = classifier.classify(&observation);
            let reading = Reading {
                observation,
                condition,
                haiku: MessageSelector::default().select(condition),
            };
            print_reading(&reading, true);
        }
        Command::Widget { timeline } => {
            let provider = WidgetProvider::new(FjallStore::open(&config.store.location)?);
            let now = Utc::now();
            if timeline {
                let timeline = provider.timeline(now).await?;
                for entry in &timeline.entries {
                    println!("[{}]", entry.date.format("%H:%M"));
                    println!("{}\n", entry.haiku);
                }
                println!("next refresh at {}", timeline.refresh_at.format("%H:%M"));
            } else {
                let entry = provider.snapshot(now).await?;
                println!("{}", entry.haiku);
                println!("\nlast updated {}", entry.last_updated.format("%Y-%m-%d %H:%M"));
            }
        }
        Command::Conditions => {
            let selector = MessageSelector::default();
            for condition in Condition::ALL {
                let count = selector.table().candidates(condition).len();
                println!("{:<14} {count} haikus", condition.display_name());
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match OmenConfig::load_from_path(cli.config) {
        Ok(config) => config,
        Err(err) => {
            let err = OmenError::config(format!("{err:#}"));
            println!("{}", err.haiku());
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging);

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            println!("{}", err.haiku());
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
