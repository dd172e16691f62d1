//! Quiz sessions: in-memory runtime that owns one `QuizFlow` per session id
//! and drives its clock.
//!
//! Each session has at most two background tasks:
//! - the countdown ticker, alive while the quiz is in progress
//! - the advance task, alive between an answer and its transition
//!
//! Both are aborted on completion, restart, removal or drop, so a tick never
//! lands on a session that no longer exists.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::QuizTiming;
use crate::models::profile::UserProfile;
use crate::quiz::flow::{format_time, PendingAdvance, QuizError, QuizFlow, QuizOutcome, QuizState};
use crate::quiz::questions::{question_set, OptionIndex, Question};
use crate::quiz::scoring::StreamScorer;

pub struct QuizSession {
    pub flow: QuizFlow,
    pub profile: Option<UserProfile>,
    ticker: Option<JoinHandle<()>>,
    advancing: Option<JoinHandle<()>>,
}

impl QuizSession {
    fn cancel_tasks(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        if let Some(handle) = self.advancing.take() {
            handle.abort();
        }
    }

    pub fn view(&self, id: Uuid) -> SessionView {
        let flow = &self.flow;
        let questions = flow.questions();
        let time_left = flow.time_left();

        let (status, question, outcome) = match flow.state() {
            QuizState::InProgress { current } => (
                SessionStatus::InProgress,
                questions.get(*current).map(|q| QuestionView {
                    index: *current,
                    question: q,
                    selected: flow.ledger().get(*current),
                }),
                None,
            ),
            QuizState::Completed(outcome) => (SessionStatus::Completed, None, Some(outcome.clone())),
        };

        SessionView {
            session_id: id,
            status,
            question,
            total_questions: questions.len(),
            answered: flow.ledger().len(),
            progress_percent: flow.progress_percent(),
            time_left_secs: time_left,
            time_display: format_time(time_left),
            pending: flow.pending(),
            outcome,
            profile_name: self.profile.as_ref().map(|p| p.name.clone()),
        }
    }
}

impl Drop for QuizSession {
    fn drop(&mut self) {
        self.cancel_tasks();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub question: &'static Question,
    /// The option already chosen for this question, while its advance is pending.
    pub selected: Option<OptionIndex>,
}

/// Snapshot of a session as presented to the client.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub status: SessionStatus,
    pub question: Option<QuestionView>,
    pub total_questions: usize,
    pub answered: usize,
    pub progress_percent: u32,
    pub time_left_secs: u32,
    pub time_display: String,
    pub pending: Option<PendingAdvance>,
    pub outcome: Option<QuizOutcome>,
    pub profile_name: Option<String>,
}

/// Shared, cloneable handle to every live quiz session.
#[derive(Clone)]
pub struct QuizSessions {
    inner: Arc<Mutex<HashMap<Uuid, QuizSession>>>,
    scorer: Arc<dyn StreamScorer>,
    timing: QuizTiming,
}

impl QuizSessions {
    pub fn new(scorer: Arc<dyn StreamScorer>, timing: QuizTiming) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            scorer,
            timing,
        }
    }

    pub fn scorer(&self) -> &dyn StreamScorer {
        self.scorer.as_ref()
    }

    /// Starts a fresh quiz and its countdown.
    pub async fn create(&self, profile: Option<UserProfile>) -> SessionView {
        let id = Uuid::new_v4();
        let mut session = QuizSession {
            flow: QuizFlow::new(question_set(), self.timing.time_budget),
            profile,
            ticker: None,
            advancing: None,
        };
        session.ticker = Some(self.spawn_ticker(id));

        let view = session.view(id);
        self.inner.lock().await.insert(id, session);
        info!(session_id = %id, "quiz session started");
        view
    }

    pub async fn view(&self, id: Uuid) -> Option<SessionView> {
        self.inner.lock().await.get(&id).map(|s| s.view(id))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Records an answer; the transition follows after the advance delay.
    /// Returns `Ok(None)` when the session does not exist.
    pub async fn submit(
        &self,
        id: Uuid,
        option: OptionIndex,
    ) -> Result<Option<SessionView>, QuizError> {
        let mut sessions = self.inner.lock().await;
        let Some(session) = sessions.get_mut(&id) else {
            return Ok(None);
        };

        session.flow.submit(option)?;
        session.advancing = Some(self.spawn_advance(id));
        Ok(Some(session.view(id)))
    }

    /// Resets the session to its first question with a full timer.
    pub async fn restart(&self, id: Uuid) -> Option<SessionView> {
        let mut sessions = self.inner.lock().await;
        let session = sessions.get_mut(&id)?;

        session.cancel_tasks();
        session.flow.restart();
        session.ticker = Some(self.spawn_ticker(id));
        info!(session_id = %id, "quiz session restarted");
        Some(session.view(id))
    }

    /// Abandons the session. Its tasks are aborted when it drops.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.inner.lock().await.remove(&id);
        if removed.is_some() {
            info!(session_id = %id, "quiz session abandoned");
        }
        removed.is_some()
    }

    fn spawn_ticker(&self, id: Uuid) -> JoinHandle<()> {
        let sessions = self.inner.clone();
        let period = self.timing.tick;

        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                let mut guard = sessions.lock().await;
                let Some(session) = guard.get_mut(&id) else {
                    break;
                };
                if !session.flow.tick() {
                    debug!(session_id = %id, "countdown stopped");
                    session.ticker = None;
                    break;
                }
            }
        })
    }

    fn spawn_advance(&self, id: Uuid) -> JoinHandle<()> {
        let sessions = self.inner.clone();
        let scorer = self.scorer.clone();
        let delay = self.timing.advance_delay;

        tokio::spawn(async move {
            sleep(delay).await;
            let mut guard = sessions.lock().await;
            let Some(session) = guard.get_mut(&id) else {
                return;
            };
            session.advancing = None;
            if session.flow.advance(scorer.as_ref()).is_err() {
                return;
            }
            if session.flow.is_completed() {
                if let Some(ticker) = session.ticker.take() {
                    ticker.abort();
                }
                info!(session_id = %id, "quiz session completed");
            }
        })
    }
}
