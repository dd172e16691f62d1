//! Onboarding flow metadata and the dashboard built from a finished profile.

use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppJson;
use crate::models::profile::{ClassLevel, Gender, UserProfile};
use crate::timeline::{timeline_events, upcoming, TimelineEvent};

/// Interests offered on the last onboarding step.
pub const INTERESTS: [&str; 12] = [
    "Science & Technology",
    "Mathematics",
    "Arts & Literature",
    "Business & Economics",
    "Medicine & Healthcare",
    "Engineering",
    "Law & Justice",
    "Social Sciences",
    "Sports & Fitness",
    "Creative Arts",
    "Environment & Nature",
    "Psychology",
];

/// Suggestions shown on the dashboard.
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStep {
    pub number: u8,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Profile fields collected on this step.
    pub fields: &'static [&'static str],
}

pub static ONBOARDING_STEPS: [OnboardingStep; 4] = [
    OnboardingStep {
        number: 1,
        title: "Personal Information",
        subtitle: "Tell us about yourself",
        fields: &["name", "age", "gender"],
    },
    OnboardingStep {
        number: 2,
        title: "Academic Information",
        subtitle: "What's your current academic status?",
        fields: &["class"],
    },
    OnboardingStep {
        number: 3,
        title: "Location Details",
        subtitle: "Help us find colleges near you",
        fields: &["location", "state"],
    },
    OnboardingStep {
        number: 4,
        title: "Your Interests",
        subtitle: "Select areas that excite you (choose multiple)",
        fields: &["interests"],
    },
];

/// A profile still being filled in. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub class: Option<ClassLevel>,
    pub location: Option<String>,
    pub state: Option<String>,
    pub interests: Vec<String>,
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Whether `draft` has everything step `number` asks for. Unknown steps are
/// never complete.
pub fn step_complete(number: u8, draft: &ProfileDraft) -> bool {
    match number {
        1 => filled(&draft.name) && draft.age.is_some_and(|a| a > 0) && draft.gender.is_some(),
        2 => draft.class.is_some(),
        3 => filled(&draft.location) && filled(&draft.state),
        4 => !draft.interests.is_empty(),
        _ => false,
    }
}

/// Streams (class 10) or degree courses (class 12) matching the profile's
/// interests, capped at three.
pub fn suggested_paths(profile: &UserProfile) -> Vec<&'static str> {
    let any = |interests: &[&str]| interests.iter().any(|i| profile.has_interest(i));
    let mut suggestions: Vec<&'static str> = Vec::new();

    match profile.class {
        ClassLevel::Tenth => {
            if any(&["Science & Technology", "Mathematics", "Engineering"]) {
                suggestions.extend(["Science (PCM)", "Science (PCB)"]);
            }
            if any(&["Business & Economics", "Mathematics"]) {
                suggestions.push("Commerce");
            }
            if any(&["Arts & Literature", "Social Sciences", "Psychology"]) {
                suggestions.push("Arts/Humanities");
            }
        }
        ClassLevel::Twelfth => {
            if any(&["Science & Technology", "Engineering"]) {
                suggestions.extend(["B.Tech/B.E.", "B.Sc Computer Science"]);
            }
            if any(&["Medicine & Healthcare"]) {
                suggestions.extend(["MBBS", "B.Pharm", "B.Sc Nursing"]);
            }
            if any(&["Business & Economics"]) {
                suggestions.extend(["B.Com", "BBA", "Economics"]);
            }
            if any(&["Arts & Literature", "Social Sciences"]) {
                suggestions.extend(["BA Literature", "BA Political Science", "BA Psychology"]);
            }
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub steps: &'static [OnboardingStep],
    pub interests: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct StepProgress {
    pub number: u8,
    pub complete: bool,
}

#[derive(Debug, Serialize)]
pub struct OnboardingProgress {
    pub steps: Vec<StepProgress>,
    pub can_finish: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub name: String,
    pub location: String,
    pub suggested_paths: Vec<&'static str>,
    pub upcoming_events: Vec<TimelineEvent>,
}

/// GET /api/v1/onboarding/steps
pub async fn handle_onboarding_steps() -> Json<OnboardingResponse> {
    Json(OnboardingResponse {
        steps: &ONBOARDING_STEPS,
        interests: &INTERESTS,
    })
}

/// POST /api/v1/onboarding/progress
pub async fn handle_onboarding_progress(
    AppJson(draft): AppJson<ProfileDraft>,
) -> Json<OnboardingProgress> {
    let steps: Vec<StepProgress> = ONBOARDING_STEPS
        .iter()
        .map(|step| StepProgress {
            number: step.number,
            complete: step_complete(step.number, &draft),
        })
        .collect();
    let can_finish = steps.iter().all(|s| s.complete);

    Json(OnboardingProgress { steps, can_finish })
}

/// POST /api/v1/dashboard
pub async fn handle_dashboard(AppJson(profile): AppJson<UserProfile>) -> Json<DashboardResponse> {
    let events = timeline_events();
    Json(DashboardResponse {
        suggested_paths: suggested_paths(&profile),
        upcoming_events: upcoming(&events, Utc::now().date_naive()),
        name: profile.name,
        location: profile.location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::sample_profile;

    #[test]
    fn test_class_ten_science_interests() {
        let profile = sample_profile(ClassLevel::Tenth, &["Engineering"]);
        assert_eq!(suggested_paths(&profile), vec!["Science (PCM)", "Science (PCB)"]);
    }

    #[test]
    fn test_mathematics_feeds_science_and_commerce_capped_at_three() {
        let profile = sample_profile(ClassLevel::Tenth, &["Mathematics", "Psychology"]);
        assert_eq!(
            suggested_paths(&profile),
            vec!["Science (PCM)", "Science (PCB)", "Commerce"]
        );
    }

    #[test]
    fn test_class_twelve_suggests_courses() {
        let profile = sample_profile(ClassLevel::Twelfth, &["Business & Economics"]);
        assert_eq!(suggested_paths(&profile), vec!["B.Com", "BBA", "Economics"]);
    }

    #[test]
    fn test_no_matching_interest_gives_no_suggestions() {
        let profile = sample_profile(ClassLevel::Twelfth, &["Sports & Fitness"]);
        assert!(suggested_paths(&profile).is_empty());
    }

    #[test]
    fn test_step_titles() {
        let titles: Vec<_> = ONBOARDING_STEPS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Personal Information", "Academic Information", "Location Details", "Your Interests"]
        );
    }

    #[test]
    fn test_empty_draft_completes_no_step() {
        let draft = ProfileDraft::default();
        assert!((1..=4).all(|n| !step_complete(n, &draft)));
    }

    #[test]
    fn test_personal_step_needs_name_age_and_gender() {
        let mut draft = ProfileDraft {
            name: Some("Meera".to_string()),
            age: Some(0),
            gender: Some(Gender::Female),
            ..ProfileDraft::default()
        };
        assert!(!step_complete(1, &draft));

        draft.age = Some(15);
        assert!(step_complete(1, &draft));

        draft.name = Some("   ".to_string());
        assert!(!step_complete(1, &draft));
    }

    #[test]
    fn test_location_and_interest_steps() {
        let draft: ProfileDraft = serde_json::from_str(
            r#"{"class":"12","location":"Pune","state":"","interests":["Law & Justice"]}"#,
        )
        .unwrap();
        assert!(step_complete(2, &draft));
        assert!(!step_complete(3, &draft));
        assert!(step_complete(4, &draft));
        assert!(!step_complete(5, &draft));
    }

    #[test]
    fn test_steps_cover_profile_fields() {
        let fields: Vec<_> = ONBOARDING_STEPS.iter().flat_map(|s| s.fields.iter()).collect();
        assert_eq!(fields.len(), 7);
        assert!(INTERESTS.contains(&"Psychology"));
    }
}
