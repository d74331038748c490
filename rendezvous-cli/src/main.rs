use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use rendezvous_server::{AppState, EndpointConfig, MemoryStore, RegistryConfig, router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rendezvous")]
#[command(about = "Two-party room registration server")]
struct Cli {
    /// Address the WebSocket gateway listens on.
    #[arg(long, env = "RENDEZVOUS_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Read-decide-commit rounds per join before giving up under contention.
    #[arg(long, env = "RENDEZVOUS_MAX_ATTEMPTS", default_value_t = 5)]
    max_attempts: u32,

    /// Base backoff between conflicting join attempts, in milliseconds.
    #[arg(long, env = "RENDEZVOUS_BACKOFF_MS", default_value_t = 10)]
    backoff_ms: u64,

    /// Push attempts per result before the failure is reported.
    #[arg(long, env = "RENDEZVOUS_DELIVERY_ATTEMPTS", default_value_t = 1)]
    delivery_attempts: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let registry_config = RegistryConfig {
        max_attempts: cli.max_attempts,
        base_backoff: Duration::from_millis(cli.backoff_ms),
        ..RegistryConfig::default()
    };
    let endpoint_config = EndpointConfig {
        delivery_attempts: cli.delivery_attempts,
    };

    let state = Arc::new(AppState::new(
        Arc::new(MemoryStore::new()),
        registry_config,
        endpoint_config,
    ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    println!("{}", "🚀 Starting rendezvous server...".green().bold());
    println!("   📡 WebSocket: ws://{}/ws", cli.bind);
    info!("Signaling server listening on http://{}", cli.bind);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
