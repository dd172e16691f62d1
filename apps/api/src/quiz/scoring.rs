//! Stream scoring: turns an answer ledger into a percentage split across
//! science, commerce and arts.
//!
//! Default: `CategoryWeightScorer` (fixed weights on aptitude/interest answers).
//! `AppState` holds an `Arc<dyn StreamScorer>` so the heuristic can be swapped
//! without touching the quiz flow or handlers.

use serde::{Deserialize, Serialize};

use crate::models::stream::Stream;
use crate::quiz::ledger::AnswerLedger;
use crate::quiz::questions::Question;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Raw points accumulated per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl RawScores {
    pub fn total(&self) -> u32 {
        self.science + self.commerce + self.arts
    }

    fn add(&mut self, stream: Stream, points: u32) {
        match stream {
            Stream::Science => self.science += points,
            Stream::Commerce => self.commerce += points,
            Stream::Arts => self.arts += points,
        }
    }
}

/// Percentages per stream. Rounded independently, so they need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentages {
    pub science: u32,
    pub commerce: u32,
    pub arts: u32,
}

impl Percentages {
    /// Used when no scored answer exists.
    pub const FALLBACK: Percentages = Percentages {
        science: 33,
        commerce: 33,
        arts: 34,
    };

    pub fn get(&self, stream: Stream) -> u32 {
        match stream {
            Stream::Science => self.science,
            Stream::Commerce => self.commerce,
            Stream::Arts => self.arts,
        }
    }

    pub fn max(&self) -> u32 {
        self.science.max(self.commerce).max(self.arts)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub raw: RawScores,
    pub percentages: Percentages,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring heuristics. Must be pure: the same ledger
/// always yields the same scores.
pub trait StreamScorer: Send + Sync {
    fn score(&self, questions: &[Question], ledger: &AnswerLedger) -> CategoryScores;

    /// Short backend name, surfaced in API responses.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// CategoryWeightScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Points awarded per scored answer.
const POINTS_PER_ANSWER: u32 = 2;

/// Algorithm:
/// 1. For each answered question tagged `aptitude` or `interest`:
///    - option 0 or 2 → +2 science
///    - option 1 → +2 arts
///    - option 3 → +2 commerce
/// 2. Each stream's percentage = round(points / total × 100)
/// 3. total = 0 → 33 / 33 / 34
pub struct CategoryWeightScorer;

impl StreamScorer for CategoryWeightScorer {
    fn score(&self, questions: &[Question], ledger: &AnswerLedger) -> CategoryScores {
        compute_category_scores(questions, ledger)
    }

    fn backend(&self) -> &'static str {
        "category_weight"
    }
}

fn stream_for_option(option: u8) -> Option<Stream> {
    match option {
        0 | 2 => Some(Stream::Science),
        1 => Some(Stream::Arts),
        3 => Some(Stream::Commerce),
        _ => None,
    }
}

pub fn compute_category_scores(questions: &[Question], ledger: &AnswerLedger) -> CategoryScores {
    let mut raw = RawScores::default();
    if ledger.is_empty() {
        return CategoryScores {
            raw,
            percentages: Percentages::FALLBACK,
        };
    }

    for (question_index, option) in ledger.iter() {
        // Indices outside the question set carry no category.
        let Some(question) = questions.get(question_index) else {
            continue;
        };
        if !question.category.is_scored() {
            continue;
        }
        if let Some(stream) = stream_for_option(option.get()) {
            raw.add(stream, POINTS_PER_ANSWER);
        }
    }

    CategoryScores {
        raw,
        percentages: to_percentages(&raw),
    }
}

fn to_percentages(raw: &RawScores) -> Percentages {
    let total = raw.total();
    if total == 0 {
        return Percentages::FALLBACK;
    }

    let pct = |points: u32| ((points as f64 / total as f64) * 100.0).round() as u32;

    Percentages {
        science: pct(raw.science),
        commerce: pct(raw.commerce),
        arts: pct(raw.arts),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
