//! HTTP server command
//!
//! Creates the connection pool, ensures tables exist, and runs the server.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use todo_server::db::{create_pool, migrations};
use todo_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 0.0.0.0:8000)
    #[arg(long, short = 'b', default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Database URL (overrides the environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database_url.context(
        "DATABASE_URL not set. Set via --database-url or the DATABASE_URL environment variable",
    )?;

    tracing::info!("Starting To-Do API server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create database tables")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
