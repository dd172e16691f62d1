use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quiz::questions::OptionIndex;

/// Selected options keyed by question position.
///
/// Holds at most one answer per question index; recording an index twice
/// keeps the latest choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerLedger {
    answers: BTreeMap<usize, OptionIndex>,
}

impl AnswerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_index: usize, option: OptionIndex) {
        self.answers.insert(question_index, option);
    }

    pub fn get(&self, question_index: usize) -> Option<OptionIndex> {
        self.answers.get(&question_index).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True once every question in `0..question_count` has an answer.
    pub fn is_complete(&self, question_count: usize) -> bool {
        (0..question_count).all(|i| self.answers.contains_key(&i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, OptionIndex)> + '_ {
        self.answers.iter().map(|(q, o)| (*q, *o))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

impl FromIterator<(usize, OptionIndex)> for AnswerLedger {
    fn from_iter<I: IntoIterator<Item = (usize, OptionIndex)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}
