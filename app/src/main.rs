use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use core_types::Symbol;
use market_data::RestConnector;
use trend::{TrendConfig, TrendService};
use tracing_subscriber::EnvFilter;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A currency trend verdict service.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the HTTP server exposing the classification API.
    Serve,

    /// Runs one classification and prints the aggregate verdict as JSON.
    Classify {
        /// The instrument to classify (e.g., "EURUSD").
        #[arg(short, long)]
        ticker: String,

        /// The forecast horizon label (e.g., "Within 1 Month").
        #[arg(long)]
        horizon: String,
    },

    /// Lists the valid tickers and horizon labels.
    Options,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = app_config::load_settings()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.app.log_level)),
        )
        .init();

    tracing::info!(environment = %settings.app.environment, "starting trend service");

    let connector = Arc::new(RestConnector::new(settings.market_data.clone()));
    let service = Arc::new(TrendService::new(connector, TrendConfig::default()));

    match cli.command {
        Commands::Serve => {
            web_server::run(settings.server, service).await?;
        }
        Commands::Classify { ticker, horizon } => {
            let result = service.classify_trend(&Symbol(ticker), &horizon).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Options => {
            let options = service.list_options().await?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}
