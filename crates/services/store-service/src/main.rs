//! Store Service - in-memory storage for the creator platform.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_service_lib::config::StoreServiceConfig;

#[derive(Parser)]
#[command(name = "store-service")]
#[command(about = "In-memory store for users, content, messages and follows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the store and its session sweeper
    Serve {
        /// Seconds between expired-session sweeps
        #[arg(long, env = "STORE_SERVICE_SESSION_SWEEP_INTERVAL_SECS")]
        sweep_interval_secs: Option<u64>,
    },
    /// Populate a fresh store with demo data and print it
    Seed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let mut config = StoreServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            sweep_interval_secs,
        } => {
            if let Some(secs) = sweep_interval_secs.filter(|secs| *secs > 0) {
                config.session.sweep_interval_seconds = secs;
            }
            store_service_lib::run_embedded(config).await?;
        }
        Commands::Seed => {
            store_service_lib::run_seed(config).await?;
        }
    }

    Ok(())
}
