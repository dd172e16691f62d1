use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The class the student is currently finishing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassLevel {
    #[serde(rename = "10")]
    Tenth,
    #[serde(rename = "12")]
    Twelfth,
}

/// Profile collected by onboarding. Read-only to every other screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub class: ClassLevel,
    pub location: String,
    pub state: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_streams: Option<Vec<String>>,
}

impl UserProfile {
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }
}

#[cfg(test)]
pub(crate) fn sample_profile(class: ClassLevel, interests: &[&str]) -> UserProfile {
    UserProfile {
        name: "Asha".to_string(),
        age: 16,
        gender: Gender::Female,
        class,
        location: "Chennai".to_string(),
        state: "Tamil Nadu".to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        preferred_streams: None,
    }
}
