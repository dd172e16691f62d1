//! Career paths grouped by stream, plus their route handlers.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::stream::Stream;

#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub id: &'static str,
    pub stream: Stream,
    pub title: &'static str,
    pub description: &'static str,
    pub required_education: &'static [&'static str],
    pub skills_required: &'static [&'static str],
    pub average_salary: &'static str,
    pub growth_prospects: &'static str,
    pub related_careers: &'static [&'static str],
}

static CAREER_PATHS: [CareerPath; 9] = [
    CareerPath {
        id: "software-engineer",
        stream: Stream::Science,
        title: "Software Engineer",
        description: "Design and develop software applications, websites, and systems",
        required_education: &["B.Tech Computer Science", "B.Sc Computer Science", "BCA"],
        skills_required: &["Programming", "Problem Solving", "Logical Thinking", "Mathematics"],
        average_salary: "₹8-25 LPA",
        growth_prospects: "Excellent - High demand in tech industry",
        related_careers: &["Data Scientist", "DevOps Engineer", "Product Manager"],
    },
    CareerPath {
        id: "data-scientist",
        stream: Stream::Science,
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make better decisions",
        required_education: &["B.Tech/B.E.", "B.Sc Statistics/Mathematics", "BCA with specialization"],
        skills_required: &["Statistics", "Programming", "Machine Learning", "Analytics"],
        average_salary: "₹10-30 LPA",
        growth_prospects: "Exceptional - Fastest growing field",
        related_careers: &["Machine Learning Engineer", "Business Analyst", "Research Scientist"],
    },
    CareerPath {
        id: "doctor",
        stream: Stream::Science,
        title: "Medical Doctor",
        description: "Diagnose and treat patients, improve public health",
        required_education: &["MBBS", "MD/MS (Specialization)"],
        skills_required: &["Medical Knowledge", "Empathy", "Decision Making", "Communication"],
        average_salary: "₹12-50 LPA",
        growth_prospects: "Stable - Always in demand",
        related_careers: &["Surgeon", "Specialist", "Medical Researcher"],
    },
    CareerPath {
        id: "chartered-accountant",
        stream: Stream::Commerce,
        title: "Chartered Accountant",
        description: "Manage financial records, audit, and provide financial advice",
        required_education: &["B.Com", "CA Foundation", "CA Final"],
        skills_required: &["Accounting", "Financial Analysis", "Attention to Detail", "Ethics"],
        average_salary: "₹15-40 LPA",
        growth_prospects: "Excellent - High respect and demand",
        related_careers: &["Financial Advisor", "Tax Consultant", "Investment Banker"],
    },
    CareerPath {
        id: "business-manager",
        stream: Stream::Commerce,
        title: "Business Manager",
        description: "Lead teams and manage business operations",
        required_education: &["BBA", "MBA", "B.Com"],
        skills_required: &["Leadership", "Communication", "Strategic Thinking", "Team Management"],
        average_salary: "₹8-35 LPA",
        growth_prospects: "Very Good - Leadership roles always needed",
        related_careers: &["Entrepreneur", "Consultant", "Operations Manager"],
    },
    CareerPath {
        id: "investment-banker",
        stream: Stream::Commerce,
        title: "Investment Banker",
        description: "Help companies and governments raise capital through financial markets",
        required_education: &["B.Com", "BBA", "MBA (Finance)"],
        skills_required: &["Financial Modeling", "Analysis", "Communication", "Market Knowledge"],
        average_salary: "₹20-60 LPA",
        growth_prospects: "Excellent - High earning potential",
        related_careers: &["Financial Analyst", "Portfolio Manager", "Corporate Finance"],
    },
    CareerPath {
        id: "civil-servant",
        stream: Stream::Arts,
        title: "Civil Servant (IAS/IPS)",
        description: "Serve the public through government administration and policy",
        required_education: &["Any Graduation", "UPSC Exam"],
        skills_required: &["General Knowledge", "Leadership", "Public Service", "Decision Making"],
        average_salary: "₹15-50 LPA",
        growth_prospects: "Excellent - Prestigious career with impact",
        related_careers: &["Diplomat", "Policy Analyst", "Public Administrator"],
    },
    CareerPath {
        id: "lawyer",
        stream: Stream::Arts,
        title: "Lawyer",
        description: "Represent clients in legal matters and uphold justice",
        required_education: &["BA LLB", "LLB", "LLM"],
        skills_required: &["Legal Knowledge", "Communication", "Research", "Critical Thinking"],
        average_salary: "₹8-40 LPA",
        growth_prospects: "Very Good - Always needed in society",
        related_careers: &["Judge", "Legal Advisor", "Corporate Lawyer"],
    },
    CareerPath {
        id: "psychologist",
        stream: Stream::Arts,
        title: "Psychologist",
        description: "Help people understand and improve their mental health",
        required_education: &["BA Psychology", "MA Psychology", "M.Phil/PhD"],
        skills_required: &["Empathy", "Listening", "Analysis", "Communication"],
        average_salary: "₹6-25 LPA",
        growth_prospects: "Good - Growing awareness of mental health",
        related_careers: &["Counselor", "Therapist", "Researcher"],
    },
];

pub fn career_paths() -> &'static [CareerPath] {
    &CAREER_PATHS
}

pub fn careers_for(stream: Stream) -> impl Iterator<Item = &'static CareerPath> {
    career_paths().iter().filter(move |c| c.stream == stream)
}

pub fn find_career(id: &str) -> Option<&'static CareerPath> {
    career_paths().iter().find(|c| c.id == id)
}

#[derive(Debug, Deserialize)]
pub struct CareerQuery {
    #[serde(default)]
    pub stream: Option<Stream>,
}

#[derive(Debug, Serialize)]
pub struct StreamCareers {
    pub stream: Stream,
    pub careers: Vec<&'static CareerPath>,
}

/// GET /api/v1/careers?stream=
pub async fn handle_list_careers(Query(query): Query<CareerQuery>) -> Json<Vec<StreamCareers>> {
    let streams = match query.stream {
        Some(stream) => vec![stream],
        None => Stream::ALL.to_vec(),
    };

    Json(
        streams
            .into_iter()
            .map(|stream| StreamCareers {
                stream,
                careers: careers_for(stream).collect(),
            })
            .collect(),
    )
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    Path(id): Path<String>,
) -> Result<Json<&'static CareerPath>, AppError> {
    find_career(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career path '{id}' not found")))
}
