//! Scripted career-advisor chat.
//!
//! Replies come from an ordered list of keyword rules; the first rule whose
//! keywords appear in the lower-cased message wins, otherwise the default
//! reply is used. `AppState` carries an `Arc<dyn ChatResponder>` so the rule
//! engine can be replaced without touching the handler.

pub mod handlers;
pub mod rules;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::rules::{default_rules, match_topic, reply_for, ChatRule, ChatTopic};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            suggestions: Vec::new(),
        }
    }

    pub fn bot(text: String, suggestions: &[&str]) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender: Sender::Bot,
            timestamp: Utc::now(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[async_trait]
pub trait ChatResponder: Send + Sync {
    /// Opening message for a user who just opened the chat.
    fn greeting(&self, user_name: &str) -> ChatMessage;

    async fn reply(&self, message: &str, profile: Option<&UserProfile>) -> ChatMessage;
}

/// Keyword-rule responder with a simulated typing pause.
pub struct RuleBasedResponder {
    rules: Vec<ChatRule>,
    typing_delay: Duration,
}

impl RuleBasedResponder {
    pub fn new(typing_delay: Duration) -> Self {
        Self {
            rules: default_rules(),
            typing_delay,
        }
    }

    pub fn topic_for(&self, message: &str) -> ChatTopic {
        match_topic(&self.rules, message)
    }
}

#[async_trait]
impl ChatResponder for RuleBasedResponder {
    fn greeting(&self, user_name: &str) -> ChatMessage {
        ChatMessage::bot(
            format!(
                "Hi {user_name}! I'm your AI career advisor. I can help you with career guidance, \
                 college information, exam preparation, and more. What would you like to know?"
            ),
            &[
                "Tell me about engineering careers",
                "Which colleges are best for my interests?",
                "What exams should I prepare for?",
                "How to choose the right stream?",
            ],
        )
    }

    async fn reply(&self, message: &str, profile: Option<&UserProfile>) -> ChatMessage {
        let topic = self.topic_for(message);
        tracing::debug!(?topic, "chat rule matched");

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let reply = reply_for(topic, profile);
        ChatMessage::bot(reply.text, reply.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{sample_profile, ClassLevel};

    #[test]
    fn test_greeting_uses_name() {
        let responder = RuleBasedResponder::new(Duration::ZERO);
        let msg = responder.greeting("Meera");
        assert!(msg.text.starts_with("Hi Meera!"));
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.suggestions.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_typing_delay() {
        let responder = RuleBasedResponder::new(Duration::from_millis(1500));
        let start = tokio::time::Instant::now();
        let msg = responder.reply("What exams are there?", None).await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert!(msg.text.contains("JEE Main"));
    }

    #[tokio::test]
    async fn test_college_reply_mentions_profile_location() {
        let responder = RuleBasedResponder::new(Duration::ZERO);
        let profile = sample_profile(ClassLevel::Tenth, &[]);
        let msg = responder
            .reply("Which university should I pick?", Some(&profile))
            .await;
        assert!(msg.text.contains("Chennai"), "got: {}", msg.text);
    }

    #[test]
    fn test_user_message_has_no_suggestions() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.sender, Sender::User);
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("suggestions").is_none());
    }
}
