pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::directory::handlers as directory;
use crate::navigation::handlers as navigation;
use crate::quiz::handlers as quiz;
use crate::state::AppState;
use crate::{careers, onboarding, timeline};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz API
        .route("/api/v1/quiz/questions", get(quiz::handle_questions))
        .route("/api/v1/quiz/score", post(quiz::handle_score))
        .route("/api/v1/quiz/next-steps", get(quiz::handle_next_steps))
        .route("/api/v1/quiz/sessions", post(quiz::handle_start_session))
        .route(
            "/api/v1/quiz/sessions/:id",
            get(quiz::handle_get_session).delete(quiz::handle_abandon_session),
        )
        .route(
            "/api/v1/quiz/sessions/:id/answers",
            post(quiz::handle_submit_answer),
        )
        .route(
            "/api/v1/quiz/sessions/:id/restart",
            post(quiz::handle_restart_session),
        )
        // Navigation and profile
        .route("/api/v1/navigation", post(navigation::handle_navigate))
        .route(
            "/api/v1/onboarding/steps",
            get(onboarding::handle_onboarding_steps),
        )
        .route(
            "/api/v1/onboarding/progress",
            post(onboarding::handle_onboarding_progress),
        )
        .route("/api/v1/dashboard", post(onboarding::handle_dashboard))
        // Chat
        .route("/api/v1/chat", post(chat::handle_chat))
        .route("/api/v1/chat/greeting", get(chat::handle_greeting))
        // Directory, careers, timeline
        .route("/api/v1/colleges", get(directory::handle_list_colleges))
        .route("/api/v1/colleges/facets", get(directory::handle_facets))
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/:id", get(careers::handle_get_career))
        .route("/api/v1/timeline", get(timeline::handle_timeline))
        .route("/api/v1/timeline/upcoming", get(timeline::handle_upcoming))
        .route("/api/v1/timeline/stats", get(timeline::handle_stats))
        .with_state(state)
}
