mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod profile;
mod resume;
mod routes;
mod skills;
mod state;
mod subscribers;
mod text;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::profile::session::ProfileSessions;
use crate::routes::build_router;
use crate::state::AppState;
use crate::subscribers::store::PgSubscriberStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SmartHire API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (subscriber store)
    let db = create_pool(&config.database_url).await?;
    let subscribers = Arc::new(PgSubscriberStore::new(db));

    // Initialize LLM client
    let llm = LlmClient::with_url(config.groq_api_key.clone(), config.groq_api_url.clone());
    info!(
        "LLM client initialized (extraction: {}, analysis: {})",
        llm_client::EXTRACTION_MODEL,
        llm_client::ANALYSIS_MODEL
    );

    let state = AppState {
        llm,
        config: config.clone(),
        subscribers,
        profiles: ProfileSessions::new(config.session_ttl),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the UI host once it is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
