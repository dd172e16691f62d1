//! Axum route handlers for the Quiz API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::models::profile::UserProfile;
use crate::navigation::{NextStep, Page};
use crate::quiz::flow::QuizOutcome;
use crate::quiz::ledger::AnswerLedger;
use crate::quiz::questions::{question_set, OptionIndex, Question};
use crate::quiz::recommendation::resolve;
use crate::quiz::session::SessionView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [Question],
    pub time_budget_secs: u32,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerLedger,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub outcome: QuizOutcome,
    /// Whether every question was answered.
    pub complete: bool,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// Option indices arrive as plain integers and are range-checked in the
/// handler; values that are not a `u8` at all fail extraction instead.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub option_index: u8,
}

#[derive(Debug, Serialize)]
pub struct NextStepView {
    pub step: NextStep,
    pub page: Page,
    pub title: &'static str,
    pub summary: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: question_set(),
        time_budget_secs: state.config.quiz.time_budget,
    })
}

/// POST /api/v1/quiz/score
///
/// Stateless scoring of a full or partial ledger.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(req): AppJson<ScoreRequest>,
) -> Json<ScoreResponse> {
    let scorer = state.quiz.scorer();
    let questions = question_set();
    let scores = scorer.score(questions, &req.answers);
    let recommendation = resolve(&scores.percentages);

    Json(ScoreResponse {
        outcome: QuizOutcome {
            scores,
            recommendation,
        },
        complete: req.answers.is_complete(questions.len()),
        scorer_backend: scorer.backend(),
    })
}

/// POST /api/v1/quiz/sessions
///
/// The body is optional; a request without a JSON body starts an anonymous
/// session, but a JSON body that does not parse is rejected.
pub async fn handle_start_session(
    State(state): State<AppState>,
    body: Result<Json<StartSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let req = match body {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => StartSessionRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let view = state.quiz.create(req.profile).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/quiz/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .quiz
        .view(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/quiz/sessions/:id/answers
///
/// Accepts the answer for the current question. The move to the next
/// question (or to the results) happens after the advance delay.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(req): AppJson<AnswerRequest>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let option = OptionIndex::try_from(req.option_index).map_err(|raw| {
        AppError::Validation(format!("option_index {raw} is out of range (0-3)"))
    })?;

    let view = state
        .quiz
        .submit(id, option)
        .await?
        .ok_or_else(|| session_not_found(id))?;

    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// POST /api/v1/quiz/sessions/:id/restart
pub async fn handle_restart_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    state
        .quiz
        .restart(id)
        .await
        .map(Json)
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/v1/quiz/sessions/:id
pub async fn handle_abandon_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.quiz.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}

/// GET /api/v1/quiz/next-steps
pub async fn handle_next_steps() -> Json<Vec<NextStepView>> {
    Json(
        NextStep::ALL
            .into_iter()
            .map(|step| NextStepView {
                step,
                page: step.page(),
                title: step.title(),
                summary: step.summary(),
            })
            .collect(),
    )
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Quiz session {id} not found"))
}
