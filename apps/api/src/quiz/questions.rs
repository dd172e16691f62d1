//! The fixed aptitude question set.

use serde::{Deserialize, Serialize};

/// Number of options every question offers.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Interest,
    WorkStyle,
    Aptitude,
    ProblemSolving,
    Motivation,
    Values,
    LearningStyle,
}

impl QuestionCategory {
    /// Only aptitude and interest answers move the stream scores.
    pub fn is_scored(self) -> bool {
        matches!(self, QuestionCategory::Aptitude | QuestionCategory::Interest)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub options: [&'static str; OPTIONS_PER_QUESTION],
    pub category: QuestionCategory,
}

/// A selected option, guaranteed to be within `0..OPTIONS_PER_QUESTION`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct OptionIndex(u8);

impl OptionIndex {
    pub fn new(index: u8) -> Option<Self> {
        ((index as usize) < OPTIONS_PER_QUESTION).then_some(Self(index))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for OptionIndex {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        OptionIndex::new(index).ok_or(index)
    }
}

impl<'de> Deserialize<'de> for OptionIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        OptionIndex::new(raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "option index {raw} is out of range (0..{OPTIONS_PER_QUESTION})"
            ))
        })
    }
}

static QUESTIONS: [Question; 8] = [
    Question {
        id: 1,
        prompt: "Which activity do you find most engaging?",
        options: [
            "Solving mathematical problems",
            "Reading and writing stories",
            "Conducting experiments",
            "Organizing events",
        ],
        category: QuestionCategory::Interest,
    },
    Question {
        id: 2,
        prompt: "What type of work environment appeals to you?",
        options: [
            "Laboratory or research facility",
            "Office with team collaboration",
            "Outdoor fieldwork",
            "Creative studio",
        ],
        category: QuestionCategory::WorkStyle,
    },
    Question {
        id: 3,
        prompt: "Which subject do you excel at most?",
        options: ["Mathematics", "Science", "Languages", "Social Studies"],
        category: QuestionCategory::Aptitude,
    },
    Question {
        id: 4,
        prompt: "How do you prefer to solve problems?",
        options: [
            "Logical step-by-step analysis",
            "Creative brainstorming",
            "Research and experimentation",
            "Discussion with others",
        ],
        category: QuestionCategory::ProblemSolving,
    },
    Question {
        id: 5,
        prompt: "What motivates you the most?",
        options: [
            "Helping others",
            "Creating something new",
            "Solving complex challenges",
            "Leading a team",
        ],
        category: QuestionCategory::Motivation,
    },
    Question {
        id: 6,
        prompt: "Which career outcome is most important to you?",
        options: [
            "High salary potential",
            "Job security",
            "Social impact",
            "Work-life balance",
        ],
        category: QuestionCategory::Values,
    },
    Question {
        id: 7,
        prompt: "How do you handle pressure and deadlines?",
        options: [
            "I thrive under pressure",
            "I prefer steady, planned work",
            "I work best with some pressure",
            "I like flexible timelines",
        ],
        category: QuestionCategory::WorkStyle,
    },
    Question {
        id: 8,
        prompt: "What type of learning do you prefer?",
        options: [
            "Hands-on practical work",
            "Theoretical concepts",
            "Visual and creative methods",
            "Group discussions",
        ],
        category: QuestionCategory::LearningStyle,
    },
];

/// Returns the question set in presentation order.
pub fn question_set() -> &'static [Question] {
    &QUESTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_set_has_eight_questions_with_sequential_ids() {
        let ids: Vec<u32> = question_set().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_only_first_and_third_questions_are_scored() {
        let scored: Vec<usize> = question_set()
            .iter()
            .enumerate()
            .filter(|(_, q)| q.category.is_scored())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(scored, vec![0, 2]);
    }

    #[test]
    fn test_option_index_rejects_out_of_range() {
        assert!(OptionIndex::new(3).is_some());
        assert!(OptionIndex::new(4).is_none());
        assert_eq!(OptionIndex::try_from(9), Err(9));
    }

    #[test]
    fn test_option_index_deserialize_validates_range() {
        let ok: OptionIndex = serde_json::from_str("2").unwrap();
        assert_eq!(ok.get(), 2);
        assert!(serde_json::from_str::<OptionIndex>("4").is_err());
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::ProblemSolving).unwrap();
        assert_eq!(json, "\"problem_solving\"");
    }
}
