//! Admissions timeline: fixed exam, admission and scholarship dates.

use axum::{extract::Query, Json};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Upcoming list length.
const UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Exam,
    Admission,
    Scholarship,
    Deadline,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub importance: Importance,
    pub is_completed: bool,
}

fn event(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    (y, m, d): (i32, u32, u32),
    event_type: EventType,
    importance: Importance,
) -> Option<TimelineEvent> {
    Some(TimelineEvent {
        id,
        title,
        description,
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        event_type,
        importance,
        is_completed: false,
    })
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    use EventType::*;
    use Importance::*;

    [
        event("1", "JEE Main Registration Opens", "Register for JEE Main 2025 examination", (2025, 2, 15), Exam, High),
        event("2", "NEET Application Deadline", "Last date to apply for NEET 2025", (2025, 3, 1), Deadline, High),
        event("3", "State CET Registration", "Registration for State Common Entrance Test", (2025, 2, 28), Exam, Medium),
        event("4", "Merit Scholarship Application", "Apply for government merit scholarships", (2025, 2, 20), Scholarship, Medium),
        event("5", "College Admission Counseling", "Participate in admission counseling process", (2025, 6, 15), Admission, High),
        event("6", "Document Verification", "Submit required documents for admission", (2025, 7, 1), Deadline, High),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Events falling in the given calendar month (1-12) of `year`.
pub fn events_in_month(events: &[TimelineEvent], month: u32, year: i32) -> Vec<TimelineEvent> {
    events
        .iter()
        .filter(|e| e.date.month() == month && e.date.year() == year)
        .cloned()
        .collect()
}

/// Open events strictly after `today`, soonest first.
pub fn upcoming(events: &[TimelineEvent], today: NaiveDate) -> Vec<TimelineEvent> {
    let mut open: Vec<TimelineEvent> = events
        .iter()
        .filter(|e| e.date > today && !e.is_completed)
        .cloned()
        .collect();
    open.sort_by_key(|e| e.date);
    open.truncate(UPCOMING_LIMIT);
    open
}

/// Counts shown next to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStats {
    pub completed: usize,
    /// Same set as `upcoming`, so capped at the upcoming limit.
    pub upcoming: usize,
    /// High-importance events not yet completed, past or future.
    pub high_priority: usize,
}

pub fn stats(events: &[TimelineEvent], today: NaiveDate) -> TimelineStats {
    TimelineStats {
        completed: events.iter().filter(|e| e.is_completed).count(),
        upcoming: upcoming(events, today).len(),
        high_priority: events
            .iter()
            .filter(|e| e.importance == Importance::High && !e.is_completed)
            .count(),
    }
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// GET /api/v1/timeline?month=&year=
///
/// Defaults to the current month.
pub async fn handle_timeline(
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<TimelineEvent>>, AppError> {
    let today = Utc::now().date_naive();
    let month = query.month.unwrap_or_else(|| today.month());
    let year = query.year.unwrap_or_else(|| today.year());

    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }

    Ok(Json(events_in_month(&timeline_events(), month, year)))
}

/// GET /api/v1/timeline/upcoming
pub async fn handle_upcoming() -> Json<Vec<TimelineEvent>> {
    Json(upcoming(&timeline_events(), Utc::now().date_naive()))
}

/// GET /api/v1/timeline/stats
pub async fn handle_stats() -> Json<TimelineStats> {
    Json(stats(&timeline_events(), Utc::now().date_naive()))
}
