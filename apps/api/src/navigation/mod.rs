//! Page navigation as a pure state transition.
//!
//! The client holds an `AppContext` and sends it back with each action;
//! `navigate` returns the next context. Nothing here is global.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Landing,
    Onboarding,
    Dashboard,
    Quiz,
    Colleges,
    Careers,
    Timeline,
}

impl Page {
    /// Pages that render the shared top navigation bar.
    pub fn has_nav_bar(self) -> bool {
        !matches!(self, Page::Landing | Page::Onboarding)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppContext {
    pub page: Page,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub chat_open: bool,
}

impl AppContext {
    /// The chat widget is only offered once a profile exists.
    pub fn chat_available(&self) -> bool {
        self.profile.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavAction {
    Navigate { page: Page },
    CompleteProfile { profile: UserProfile },
    ToggleChat,
}

/// Follow-up destinations offered once the quiz shows its results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NextStep {
    Dashboard,
    Colleges,
    Careers,
    Timeline,
}

impl NextStep {
    pub const ALL: [NextStep; 4] = [
        NextStep::Colleges,
        NextStep::Careers,
        NextStep::Timeline,
        NextStep::Dashboard,
    ];

    pub fn page(self) -> Page {
        match self {
            NextStep::Dashboard => Page::Dashboard,
            NextStep::Colleges => Page::Colleges,
            NextStep::Careers => Page::Careers,
            NextStep::Timeline => Page::Timeline,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            NextStep::Dashboard => "Back to Dashboard",
            NextStep::Colleges => "Explore Colleges",
            NextStep::Careers => "View Career Paths",
            NextStep::Timeline => "Setup Timeline",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            NextStep::Dashboard => "Return to your personalised overview",
            NextStep::Colleges => "Find institutions offering your recommended stream",
            NextStep::Careers => "See detailed career roadmaps",
            NextStep::Timeline => "Track important dates and deadlines",
        }
    }
}

/// Computes the context that follows `action`.
///
/// The dashboard needs a profile: without one the user lands on onboarding.
pub fn navigate(ctx: AppContext, action: NavAction) -> AppContext {
    match action {
        NavAction::Navigate { page } => {
            let page = resolve_page(page, ctx.profile.is_some());
            AppContext { page, ..ctx }
        }
        NavAction::CompleteProfile { profile } => AppContext {
            page: Page::Dashboard,
            profile: Some(profile),
            ..ctx
        },
        NavAction::ToggleChat => {
            let chat_open = ctx.chat_available() && !ctx.chat_open;
            AppContext { chat_open, ..ctx }
        }
    }
}

fn resolve_page(requested: Page, has_profile: bool) -> Page {
    match requested {
        Page::Dashboard if !has_profile => Page::Onboarding,
        page => page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{sample_profile, ClassLevel};

    fn with_profile(page: Page) -> AppContext {
        AppContext {
            page,
            profile: Some(sample_profile(ClassLevel::Tenth, &["Mathematics"])),
            chat_open: false,
        }
    }

    #[test]
    fn test_default_context_is_landing() {
        let ctx = AppContext::default();
        assert_eq!(ctx.page, Page::Landing);
        assert!(!ctx.chat_available());
    }

    #[test]
    fn test_dashboard_without_profile_redirects_to_onboarding() {
        let next = navigate(
            AppContext::default(),
            NavAction::Navigate {
                page: Page::Dashboard,
            },
        );
        assert_eq!(next.page, Page::Onboarding);
    }

    #[test]
    fn test_completing_profile_lands_on_dashboard() {
        let profile = sample_profile(ClassLevel::Twelfth, &["Engineering"]);
        let next = navigate(
            AppContext {
                page: Page::Onboarding,
                ..AppContext::default()
            },
            NavAction::CompleteProfile {
                profile: profile.clone(),
            },
        );
        assert_eq!(next.page, Page::Dashboard);
        assert_eq!(next.profile, Some(profile));
    }

    #[test]
    fn test_quiz_and_directory_are_reachable_without_profile() {
        for page in [Page::Quiz, Page::Colleges, Page::Careers, Page::Timeline] {
            let next = navigate(AppContext::default(), NavAction::Navigate { page });
            assert_eq!(next.page, page);
        }
    }

    #[test]
    fn test_toggle_chat_requires_profile() {
        let next = navigate(AppContext::default(), NavAction::ToggleChat);
        assert!(!next.chat_open);

        let open = navigate(with_profile(Page::Dashboard), NavAction::ToggleChat);
        assert!(open.chat_open);
        let closed = navigate(open, NavAction::ToggleChat);
        assert!(!closed.chat_open);
    }

    #[test]
    fn test_navigation_keeps_chat_state() {
        let mut ctx = with_profile(Page::Dashboard);
        ctx.chat_open = true;
        let next = navigate(ctx, NavAction::Navigate { page: Page::Quiz });
        assert!(next.chat_open);
        assert_eq!(next.page, Page::Quiz);
    }

    #[test]
    fn test_next_steps_map_to_pages() {
        assert_eq!(NextStep::Colleges.page(), Page::Colleges);
        assert_eq!(NextStep::Dashboard.page(), Page::Dashboard);
        assert!(NextStep::ALL.iter().all(|s| s.page().has_nav_bar()));
    }

    #[test]
    fn test_action_wire_format() {
        let action: NavAction =
            serde_json::from_str(r#"{"type":"navigate","page":"colleges"}"#).unwrap();
        assert_eq!(
            action,
            NavAction::Navigate {
                page: Page::Colleges
            }
        );
    }
}
