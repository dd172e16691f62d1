use serde::Serialize;

use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    Engineering,
    Colleges,
    Exams,
    Stream,
    General,
}

/// A topic and the keywords that select it.
#[derive(Debug, Clone)]
pub struct ChatRule {
    pub topic: ChatTopic,
    pub keywords: &'static [&'static str],
}

impl ChatRule {
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Rules in priority order.
pub fn default_rules() -> Vec<ChatRule> {
    vec![
        ChatRule {
            topic: ChatTopic::Engineering,
            keywords: &["engineering", "engineer"],
        },
        ChatRule {
            topic: ChatTopic::Colleges,
            keywords: &["college", "university"],
        },
        ChatRule {
            topic: ChatTopic::Exams,
            keywords: &["exam", "test", "preparation"],
        },
        ChatRule {
            topic: ChatTopic::Stream,
            keywords: &["stream", "subject", "choose"],
        },
    ]
}

/// First matching rule wins; no match falls through to `General`.
pub fn match_topic(rules: &[ChatRule], message: &str) -> ChatTopic {
    let lowered = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.topic)
        .unwrap_or(ChatTopic::General)
}

pub struct ScriptedReply {
    pub text: String,
    pub suggestions: &'static [&'static str],
}

pub fn reply_for(topic: ChatTopic, profile: Option<&UserProfile>) -> ScriptedReply {
    match topic {
        ChatTopic::Engineering => ScriptedReply {
            text: "Engineering is a fantastic choice! Based on your interests in Science & Technology, \
                   here are some popular engineering branches:\n\n\
                   • Computer Science Engineering - High demand, excellent salary prospects\n\
                   • Mechanical Engineering - Core engineering with diverse opportunities\n\
                   • Electrical Engineering - Power, automation, and electronics\n\
                   • Civil Engineering - Infrastructure and construction\n\n\
                   For admission, you'll need to appear for JEE Main and possibly state-level entrance exams. \
                   Would you like specific information about any branch?"
                .to_string(),
            suggestions: &[
                "Tell me about Computer Science",
                "JEE Main preparation tips",
                "Best engineering colleges near me",
            ],
        },
        ChatTopic::Colleges => {
            let location = profile
                .map(|p| p.location.as_str())
                .filter(|l| !l.trim().is_empty())
                .unwrap_or("your area");
            ScriptedReply {
                text: format!(
                    "Great question! Based on your location in {location}, here are some recommendations:\n\n\
                     • Government College of Engineering - Excellent for technical courses\n\
                     • State University - Multiple stream options\n\
                     • Regional Medical College - If you're interested in healthcare\n\n\
                     I can help you find colleges specific to your preferred course. \
                     What stream are you most interested in?"
                ),
                suggestions: &[
                    "Show engineering colleges",
                    "Medical colleges near me",
                    "Commerce colleges list",
                ],
            }
        }
        ChatTopic::Exams => ScriptedReply {
            text: "Here are the key exams you should know about:\n\n\
                   • JEE Main - For engineering admissions\n\
                   • NEET - For medical courses\n\
                   • CLAT - For law programs\n\
                   • State CETs - State-specific entrance tests\n\n\
                   Based on your current class and interests, I'd recommend focusing on specific exams. \
                   Would you like a detailed preparation strategy?"
                .to_string(),
            suggestions: &[
                "JEE Main syllabus",
                "NEET preparation plan",
                "State CET information",
            ],
        },
        ChatTopic::Stream => ScriptedReply {
            text: "Choosing the right stream is crucial! Based on your quiz results and interests, \
                   here's my advice:\n\n\
                   • Science - If you enjoy problem-solving and logical thinking\n\
                   • Commerce - If you're interested in business and economics\n\
                   • Arts - If you're drawn to creativity and social sciences\n\n\
                   Your interests suggest you'd excel in Science stream. \
                   Would you like detailed information about subject combinations?"
                .to_string(),
            suggestions: &[
                "Science stream subjects",
                "PCM vs PCB difference",
                "Career options after science",
            ],
        },
        ChatTopic::General => ScriptedReply {
            text: "I understand you're looking for guidance. I'm here to help with:\n\n\
                   • Career advice and stream selection\n\
                   • College recommendations\n\
                   • Exam preparation strategies\n\
                   • Timeline planning\n\n\
                   Could you be more specific about what you'd like to know? \
                   I have detailed information about your interests and can provide personalized advice."
                .to_string(),
            suggestions: &[
                "Career options for my interests",
                "Best colleges in my area",
                "Important exam dates",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(message: &str) -> ChatTopic {
        match_topic(&default_rules(), message)
    }

    #[test]
    fn test_keywords_select_topics() {
        assert_eq!(topic("Tell me about engineering careers"), ChatTopic::Engineering);
        assert_eq!(topic("Best colleges near me"), ChatTopic::Colleges);
        assert_eq!(topic("JEE Main preparation tips"), ChatTopic::Exams);
        assert_eq!(topic("How to choose the right stream?"), ChatTopic::Stream);
        assert_eq!(topic("hello there"), ChatTopic::General);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(topic("ENGINEER"), ChatTopic::Engineering);
        assert_eq!(topic("University"), ChatTopic::Colleges);
    }

    #[test]
    fn test_first_rule_wins() {
        // Mentions engineering, colleges and exams: engineering is checked first.
        assert_eq!(
            topic("Which engineering college exam should I take?"),
            ChatTopic::Engineering
        );
        assert_eq!(topic("college entrance test"), ChatTopic::Colleges);
        assert_eq!(topic("which subject is on the test"), ChatTopic::Exams);
    }

    #[test]
    fn test_substring_matching_mirrors_keyword_list() {
        // "latest" contains "test".
        assert_eq!(topic("any latest news?"), ChatTopic::Exams);
    }

    #[test]
    fn test_college_reply_without_profile() {
        let reply = reply_for(ChatTopic::Colleges, None);
        assert!(reply.text.contains("your area"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn test_every_topic_offers_suggestions() {
        for t in [
            ChatTopic::Engineering,
            ChatTopic::Colleges,
            ChatTopic::Exams,
            ChatTopic::Stream,
            ChatTopic::General,
        ] {
            assert!(!reply_for(t, None).suggestions.is_empty());
        }
    }
}
