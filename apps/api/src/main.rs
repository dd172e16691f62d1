mod careers;
mod chat;
mod config;
mod directory;
mod errors;
mod models;
mod navigation;
mod onboarding;
mod quiz;
mod routes;
mod state;
mod timeline;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::RuleBasedResponder;
use crate::config::Config;
use crate::quiz::scoring::CategoryWeightScorer;
use crate::quiz::session::QuizSessions;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first: a malformed variable aborts startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Stream Guide API v{}", env!("CARGO_PKG_VERSION"));

    // Quiz runtime: default category-weight scorer, timing from config
    let scorer = Arc::new(CategoryWeightScorer);
    let quiz = QuizSessions::new(scorer, config.quiz);
    info!(
        "Quiz timing: budget {}s, tick {:?}, advance delay {:?}",
        config.quiz.time_budget, config.quiz.tick, config.quiz.advance_delay
    );

    let chat = Arc::new(RuleBasedResponder::new(config.chat_typing_delay));

    let state = AppState {
        config: config.clone(),
        quiz,
        chat,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
