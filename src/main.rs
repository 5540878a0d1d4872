//! Demo server for route-persist.
//!
//! ```text
//! GET /              → welcome text
//! GET /hello/:name   → greets `name` from the request context
//! GET /users/:id     → echoes `id` from the query string as JSON
//! ```
//!
//! `/hello/:name` needs `--persist context`, `/users/:id` needs
//! `--persist query`; without either the router discards params and both
//! fall back to empty values.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{body::Body, http::Request, Json};
use clap::Parser;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use route_persist::config::{load_config, validate_config, ConfigError, ServerConfig};
use route_persist::http::form_value;
use route_persist::lifecycle::signals;
use route_persist::observability::init_logging;
use route_persist::{context, HttpServer, PersistMode, Router, Shutdown};

#[derive(Parser)]
#[command(name = "route-persist")]
#[command(about = "Demo server for path parameter persistence", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the persistence strategy.
    #[arg(short, long, value_enum)]
    persist: Option<PersistMode>,
}

async fn index(_req: Request<Body>) -> &'static str {
    "Welcome!\n"
}

async fn hello(req: Request<Body>) -> String {
    format!("hello, {}!\n", context::get(&req, "name").unwrap_or_default())
}

async fn user(req: Request<Body>) -> Json<Value> {
    Json(json!({ "id": form_value(&req, "id") }))
}

fn load(cli: &Cli) -> Result<ServerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(persist) = cli.persist {
        config.persist = Some(persist);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(&cli)?;

    init_logging(&config.observability.log_level);
    tracing::info!("route-persist v{} starting", env!("CARGO_PKG_VERSION"));

    let mut router = Router::new();
    router
        .get("/", index)
        .get("/hello/:name", hello)
        .get("/users/:id", user);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Arc::new(Shutdown::new());
    signals::spawn_ctrl_c(shutdown.clone());

    let server = HttpServer::new(config, router);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
