use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jetops_assistant::models::{
    ChatMessage, Config, FlightRecord, ImagePayload, OperatorProfile, Vehicle,
};
use jetops_assistant::ops::OpsAssistant;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "jetops-assistant")]
#[command(about = "Gemini-backed assistant for apron operations")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a shift-handover briefing from a JSON array of flights.
    Briefing {
        #[arg(value_name = "FLIGHTS_JSON")]
        flights: PathBuf,
    },
    /// Analyze a single flight (JSON object) for potential delays.
    Flight {
        #[arg(value_name = "FLIGHT_JSON")]
        flight: PathBuf,
    },
    /// Review a JSON array of fleet vehicles for availability and status.
    Inventory {
        #[arg(value_name = "VEHICLES_JSON")]
        vehicles: PathBuf,
    },
    /// Suggest operator and vehicle allocations for the current flights.
    Team {
        #[arg(value_name = "PROFILES_JSON")]
        profiles: PathBuf,
        #[arg(value_name = "FLIGHTS_JSON")]
        flights: PathBuf,
    },
    /// Run a FOD/PPE/equipment safety inspection on an image.
    Safety {
        image: PathBuf,
        #[arg(long)]
        context: Option<String>,
    },
    /// Describe an image.
    Describe {
        image: PathBuf,
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Apply a generative edit to an image and write the result.
    Edit {
        image: PathBuf,
        #[arg(long)]
        prompt: String,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Ask the operations assistant a question.
    Chat {
        message: String,
        /// JSON array of previous messages (`{"text": ..., "isManager": ...}`).
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}

fn read_image(path: &Path) -> Result<ImagePayload> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;
    Ok(ImagePayload::from_bytes(&bytes))
}

async fn run(assistant: &OpsAssistant, command: Command) -> Result<()> {
    match command {
        Command::Briefing { flights } => {
            let flights: Vec<FlightRecord> = read_json(&flights)?;
            println!("{}", assistant.generate_shift_briefing(&flights).await?);
        }
        Command::Flight { flight } => {
            let flight: FlightRecord = read_json(&flight)?;
            println!("{}", assistant.analyze_flight(&flight).await?);
        }
        Command::Inventory { vehicles } => {
            let vehicles: Vec<Vehicle> = read_json(&vehicles)?;
            println!("{}", assistant.analyze_pool_inventory(&vehicles).await?);
        }
        Command::Team { profiles, flights } => {
            let profiles: Vec<OperatorProfile> = read_json(&profiles)?;
            let flights: Vec<FlightRecord> = read_json(&flights)?;
            println!(
                "{}",
                assistant
                    .suggest_team_optimizations(&profiles, &flights)
                    .await?
            );
        }
        Command::Safety { image, context } => {
            let image = read_image(&image)?;
            println!(
                "{}",
                assistant
                    .analyze_safety_image(&image, context.as_deref())
                    .await?
            );
        }
        Command::Describe { image, prompt } => {
            let image = read_image(&image)?;
            println!(
                "{}",
                assistant.describe_image(&image, prompt.as_deref()).await?
            );
        }
        Command::Edit {
            image,
            prompt,
            output,
        } => {
            let image = read_image(&image)?;
            match assistant.edit_visual_ops_image(&image, &prompt).await? {
                Some(bytes) => {
                    fs::write(&output, &bytes)
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    info!("Saved edited image to {}", output.display());
                }
                None => {
                    warn!("Model returned no image; nothing written");
                    std::process::exit(2);
                }
            }
        }
        Command::Chat { message, history } => {
            let history: Vec<ChatMessage> = match history {
                Some(path) => read_json(&path)?,
                None => Vec::new(),
            };
            println!("{}", assistant.chat(&history, &message).await?);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jetops_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    // Fail before any request when the credential is missing.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let assistant = OpsAssistant::new(&config);

    if let Err(e) = run(&assistant, args.command).await {
        error!("Operation failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
