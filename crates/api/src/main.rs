//! User API - HTTP CRUD service for users.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_api_lib::config::ApiConfig;

#[derive(Parser)]
#[command(name = "user-api")]
#[command(about = "In-memory user CRUD service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides USER_API_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides USER_API_PORT
        #[arg(long)]
        port: Option<u16>,
        /// Start with the demo users loaded
        #[arg(long)]
        seed: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = ApiConfig::from_env();

    match cli.command {
        Commands::Serve { host, port, seed } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.seed |= seed;

            user_api_lib::run_server(config).await?;
        }
    }

    Ok(())
}
