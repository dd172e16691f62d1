//! Quiz flow: the clock-free state machine behind a quiz run.
//!
//! `InProgress { current }` → `Completed`. An accepted answer leaves a pending
//! advance behind; the runtime applies it with `advance()` after the visual
//! delay. Timing lives in `quiz::session`, this module only reacts to calls.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::quiz::ledger::AnswerLedger;
use crate::quiz::questions::{OptionIndex, Question};
use crate::quiz::recommendation::{resolve, Recommendation};
use crate::quiz::scoring::{CategoryScores, StreamScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("The quiz is already completed; restart it to answer again")]
    AlreadyCompleted,

    #[error("The previous answer is still being processed")]
    TransitionPending,

    #[error("No answer is waiting to be applied")]
    NothingPending,
}

/// Scores and recommendation computed once, when the last answer lands.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuizOutcome {
    pub scores: CategoryScores,
    pub recommendation: &'static Recommendation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    InProgress { current: usize },
    Completed(QuizOutcome),
}

/// Where an accepted answer will take the flow once advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PendingAdvance {
    NextQuestion { index: usize },
    Results,
}

pub struct QuizFlow {
    questions: &'static [Question],
    ledger: AnswerLedger,
    state: QuizState,
    pending: Option<PendingAdvance>,
    time_budget: u32,
    time_left: u32,
}

impl QuizFlow {
    pub fn new(questions: &'static [Question], time_budget: u32) -> Self {
        Self {
            questions,
            ledger: AnswerLedger::new(),
            state: QuizState::InProgress { current: 0 },
            pending: None,
            time_budget,
            time_left: time_budget,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn ledger(&self) -> &AnswerLedger {
        &self.ledger
    }

    pub fn pending(&self) -> Option<PendingAdvance> {
        self.pending
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed(_))
    }

    fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Records `option` for the current question and schedules the advance.
    pub fn submit(&mut self, option: OptionIndex) -> Result<PendingAdvance, QuizError> {
        let current = match self.state {
            QuizState::Completed(_) => return Err(QuizError::AlreadyCompleted),
            QuizState::InProgress { current } => current,
        };
        if self.pending.is_some() {
            return Err(QuizError::TransitionPending);
        }

        self.ledger.record(current, option);

        let next = if current < self.last_index() {
            PendingAdvance::NextQuestion { index: current + 1 }
        } else {
            PendingAdvance::Results
        };
        debug!(question = current, option = option.get(), ?next, "answer recorded");

        self.pending = Some(next);
        Ok(next)
    }

    /// Applies the pending advance. Scoring runs here, exactly once per run.
    pub fn advance(&mut self, scorer: &dyn StreamScorer) -> Result<&QuizState, QuizError> {
        let pending = self.pending.take().ok_or(QuizError::NothingPending)?;

        self.state = match pending {
            PendingAdvance::NextQuestion { index } => QuizState::InProgress { current: index },
            PendingAdvance::Results => {
                let scores = scorer.score(self.questions, &self.ledger);
                let recommendation = resolve(&scores.percentages);
                debug!(
                    stream = %recommendation.stream,
                    backend = scorer.backend(),
                    "quiz completed"
                );
                QuizState::Completed(QuizOutcome {
                    scores,
                    recommendation,
                })
            }
        };

        Ok(&self.state)
    }

    /// One countdown step. Returns `false` once the timer has nothing left to do.
    ///
    /// Reaching zero does not end the quiz.
    pub fn tick(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        self.time_left > 0
    }

    pub fn restart(&mut self) {
        self.ledger.clear();
        self.state = QuizState::InProgress { current: 0 };
        self.pending = None;
        self.time_left = self.time_budget;
    }

    /// Progress through the quiz as a percentage, counting the current question.
    pub fn progress_percent(&self) -> u32 {
        let total = self.questions.len().max(1);
        let shown = match self.state {
            QuizState::InProgress { current } => current + 1,
            QuizState::Completed(_) => total,
        };
        ((shown as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Formats seconds as `M:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stream::Stream;
    use crate::quiz::questions::question_set;
    use crate::quiz::scoring::CategoryWeightScorer;

    fn opt(i: u8) -> OptionIndex {
        OptionIndex::new(i).unwrap()
    }

    fn answer(flow: &mut QuizFlow, option: u8) -> PendingAdvance {
        let next = flow.submit(opt(option)).unwrap();
        flow.advance(&CategoryWeightScorer).unwrap();
        next
    }

    #[test]
    fn test_new_flow_starts_at_first_question() {
        let flow = QuizFlow::new(question_set(), 1800);
        assert_eq!(flow.state(), &QuizState::InProgress { current: 0 });
        assert!(flow.ledger().is_empty());
        assert_eq!(flow.time_left(), 1800);
        assert_eq!(flow.pending(), None);
    }

    #[test]
    fn test_submit_records_and_waits_for_advance() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        let next = flow.submit(opt(2)).unwrap();
        assert_eq!(next, PendingAdvance::NextQuestion { index: 1 });
        assert_eq!(flow.ledger().get(0), Some(opt(2)));
        // Still on the first question until advanced.
        assert_eq!(flow.state(), &QuizState::InProgress { current: 0 });

        flow.advance(&CategoryWeightScorer).unwrap();
        assert_eq!(flow.state(), &QuizState::InProgress { current: 1 });
    }

    #[test]
    fn test_submit_while_pending_is_rejected() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        flow.submit(opt(0)).unwrap();
        assert_eq!(flow.submit(opt(1)), Err(QuizError::TransitionPending));
        assert_eq!(flow.ledger().get(0), Some(opt(0)));
    }

    #[test]
    fn test_advance_without_pending_errors() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        assert_eq!(
            flow.advance(&CategoryWeightScorer).unwrap_err(),
            QuizError::NothingPending
        );
    }

    #[test]
    fn test_last_answer_completes_exactly_once() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        for _ in 0..7 {
            answer(&mut flow, 0);
        }
        assert_eq!(flow.state(), &QuizState::InProgress { current: 7 });

        assert_eq!(answer(&mut flow, 0), PendingAdvance::Results);
        let QuizState::Completed(outcome) = flow.state() else {
            panic!("expected completed state");
        };
        assert_eq!(outcome.scores.percentages.science, 100);
        assert_eq!(outcome.recommendation.stream, Stream::Science);
        assert!(flow.ledger().is_complete(8));

        assert_eq!(flow.submit(opt(1)), Err(QuizError::AlreadyCompleted));
        assert_eq!(flow.ledger().get(7), Some(opt(0)));
    }

    #[test]
    fn test_all_second_options_recommend_arts() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        for _ in 0..8 {
            answer(&mut flow, 1);
        }
        let QuizState::Completed(outcome) = flow.state() else {
            panic!("expected completed state");
        };
        assert_eq!(outcome.scores.percentages.arts, 100);
        assert_eq!(outcome.recommendation.primary_label, "Arts/Humanities Stream");
    }

    #[test]
    fn test_tick_decrements_until_completed() {
        let mut flow = QuizFlow::new(question_set(), 3);
        assert!(flow.tick());
        assert_eq!(flow.time_left(), 2);

        for _ in 0..8 {
            answer(&mut flow, 3);
        }
        assert!(!flow.tick());
        assert_eq!(flow.time_left(), 2);
    }

    #[test]
    fn test_tick_saturates_at_zero_without_completing() {
        let mut flow = QuizFlow::new(question_set(), 1);
        assert!(!flow.tick());
        assert!(!flow.tick());
        assert_eq!(flow.time_left(), 0);
        assert_eq!(flow.state(), &QuizState::InProgress { current: 0 });
        // Answers are still accepted after the clock runs out.
        assert!(flow.submit(opt(0)).is_ok());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        for _ in 0..8 {
            answer(&mut flow, 2);
        }
        flow.tick();
        flow.restart();
        assert_eq!(flow.state(), &QuizState::InProgress { current: 0 });
        assert!(flow.ledger().is_empty());
        assert_eq!(flow.time_left(), 1800);
        assert!(flow.submit(opt(1)).is_ok());
    }

    #[test]
    fn test_progress_counts_current_question() {
        let mut flow = QuizFlow::new(question_set(), 1800);
        assert_eq!(flow.progress_percent(), 13);
        answer(&mut flow, 0);
        assert_eq!(flow.progress_percent(), 25);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1800), "30:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(0), "0:00");
    }
}
