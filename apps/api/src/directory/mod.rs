//! College directory: a fixed list of institutions with search and filters.

pub mod handlers;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct College {
    pub id: &'static str,
    pub name: &'static str,
    /// "City, State", or just the city for union territories.
    pub location: &'static str,
    pub courses: &'static [&'static str],
    pub facilities: &'static [&'static str],
    pub ranking: u32,
    /// Annual fees in rupees.
    pub fees: u32,
    pub admission_process: &'static str,
    pub contact_info: &'static str,
}

impl College {
    /// The state component of `location`, when present.
    pub fn region(&self) -> Option<&'static str> {
        self.location.split(", ").nth(1)
    }
}

static COLLEGES: [College; 6] = [
    College {
        id: "1",
        name: "Government College of Engineering",
        location: "Chennai, Tamil Nadu",
        courses: &[
            "B.Tech Computer Science",
            "B.Tech Mechanical",
            "B.Tech Electrical",
            "B.Tech Civil",
        ],
        facilities: &["Hostel", "Library", "Labs", "Sports Complex", "Wifi"],
        ranking: 15,
        fees: 75_000,
        admission_process: "JEE Main + State CET",
        contact_info: "+91-9876543210",
    },
    College {
        id: "2",
        name: "State University of Commerce",
        location: "Mumbai, Maharashtra",
        courses: &["B.Com", "BBA", "B.Com (Honors)", "Economics"],
        facilities: &["Hostel", "Library", "Computer Lab", "Auditorium"],
        ranking: 8,
        fees: 45_000,
        admission_process: "Merit Based + Entrance",
        contact_info: "+91-9876543211",
    },
    College {
        id: "3",
        name: "Government Arts & Science College",
        location: "Bangalore, Karnataka",
        courses: &[
            "BA Psychology",
            "BA Literature",
            "B.Sc Mathematics",
            "BA Political Science",
        ],
        facilities: &["Library", "Labs", "Cafeteria", "Sports Ground"],
        ranking: 12,
        fees: 35_000,
        admission_process: "Merit Based",
        contact_info: "+91-9876543212",
    },
    College {
        id: "4",
        name: "Medical College & Hospital",
        location: "Delhi",
        courses: &["MBBS", "B.Pharm", "B.Sc Nursing", "BPT"],
        facilities: &["Hostel", "Hospital", "Library", "Research Labs", "Wifi"],
        ranking: 5,
        fees: 125_000,
        admission_process: "NEET",
        contact_info: "+91-9876543213",
    },
    College {
        id: "5",
        name: "Institute of Technology",
        location: "Hyderabad, Telangana",
        courses: &["B.Tech CSE", "B.Tech ECE", "B.Tech IT", "B.Tech Data Science"],
        facilities: &[
            "Hostel",
            "Library",
            "Advanced Labs",
            "Placement Cell",
            "Wifi",
            "Sports",
        ],
        ranking: 7,
        fees: 95_000,
        admission_process: "JEE Main + TS EAMCET",
        contact_info: "+91-9876543214",
    },
    College {
        id: "6",
        name: "National Law University",
        location: "Pune, Maharashtra",
        courses: &["BA LLB", "BBA LLB", "B.Com LLB"],
        facilities: &["Hostel", "Library", "Moot Court", "Wifi"],
        ranking: 3,
        fees: 85_000,
        admission_process: "CLAT",
        contact_info: "+91-9876543215",
    },
];

pub fn colleges() -> &'static [College] {
    &COLLEGES
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollegeFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl CollegeFilter {
    /// - `search`: case-insensitive, on the name or any course
    /// - `course`: case-sensitive substring of any course
    /// - `location`: case-sensitive substring of the location
    ///
    /// Empty criteria match everything.
    pub fn matches(&self, college: &College) -> bool {
        let matches_search = match non_empty(&self.search) {
            None => true,
            Some(term) => {
                let term = term.to_lowercase();
                college.name.to_lowercase().contains(&term)
                    || college
                        .courses
                        .iter()
                        .any(|c| c.to_lowercase().contains(&term))
            }
        };
        let matches_course = non_empty(&self.course)
            .map_or(true, |course| college.courses.iter().any(|c| c.contains(course)));
        let matches_location =
            non_empty(&self.location).map_or(true, |loc| college.location.contains(loc));

        matches_search && matches_course && matches_location
    }

    pub fn apply<'a>(&self, colleges: &'a [College]) -> Vec<&'a College> {
        colleges.iter().filter(|c| self.matches(c)).collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Distinct values the filter dropdowns offer, in first-seen order.
#[derive(Debug, Clone, Serialize)]
pub struct Facets {
    pub courses: Vec<&'static str>,
    pub locations: Vec<&'static str>,
}

pub fn facets(colleges: &[College]) -> Facets {
    Facets {
        courses: dedup_in_order(colleges.iter().flat_map(|c| c.courses.iter().copied())),
        locations: dedup_in_order(colleges.iter().filter_map(College::region)),
    }
}

fn dedup_in_order(items: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut seen = BTreeSet::new();
    items.filter(|item| seen.insert(*item)).collect()
}
