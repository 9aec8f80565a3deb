//! Casebook Server
//!
//! Publishes structured legal case summaries. Provides endpoints for:
//!
//! - Listing every article in stored order
//! - Viewing one article by its position
//! - Submitting a new article as a flat form
//!
//! Articles live in a single JSON file that is loaded on every request and
//! rewritten in full on every submission.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{routing::get, Router};
use casebook_core::{ArticleStore, StoreConfig};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;
mod state;
#[cfg(test)]
mod tests;

use api::{
    handle_add_form, handle_get_article, handle_health, handle_list_articles,
    handle_submit_article,
};
use state::AppState;

/// Command-line arguments for the casebook server
#[derive(Parser, Debug)]
#[command(name = "casebook-server")]
#[command(version, about = "Submit and browse legal case summaries")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, env = "CASEBOOK_HOST", default_value = "0.0.0.0")]
    host: String,

    /// JSON file holding the article collection
    #[arg(
        long,
        env = casebook_core::config::DATA_FILE_ENV,
        default_value = casebook_core::config::DEFAULT_DATA_FILE
    )]
    data_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // Read paths
        .route("/", get(handle_list_articles))
        .route("/article/:id", get(handle_get_article))
        // Submission form
        .route("/add", get(handle_add_form).post(handle_submit_article))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = ArticleStore::new(StoreConfig::new(args.data_file));
    info!("Article data file: {}", store.path().display());

    let app = router(AppState::new(store));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Casebook server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
