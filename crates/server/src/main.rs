use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use studychat_server::config::ServerConfig;
use studychat_server::server::{self, AppState};
use studychat_server::upstream::UpstreamClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// StudyChat server - serves the app and relays chat requests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long = "config")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studychat_server=debug,tower_http=debug")),
        )
        .init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => {
            info!("loading configuration from: {path}");
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::from_env()?,
    };

    let upstream = UpstreamClient::new(&config.upstream)?;
    let state = AppState {
        upstream: Arc::new(upstream),
    };
    let app = server::router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.http.bind_addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("received shutdown signal");
}
