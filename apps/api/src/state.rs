use std::sync::Arc;

use crate::chat::ChatResponder;
use crate::config::Config;
use crate::quiz::session::QuizSessions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live quiz sessions. Each session owns its ledger and countdown.
    pub quiz: QuizSessions,
    /// Pluggable chat backend. Default: RuleBasedResponder.
    pub chat: Arc<dyn ChatResponder>,
}
