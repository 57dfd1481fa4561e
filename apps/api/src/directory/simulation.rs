//! "What if I choose this stream?" career simulator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stream {
    Science,
    Commerce,
    Arts,
}

impl Stream {
    /// Unrecognised streams are simulated as Science.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "commerce" => Stream::Commerce,
            "arts" | "humanities" => Stream::Arts,
            _ => Stream::Science,
        }
    }

    fn outlook(self) -> StreamOutlook {
        match self {
            Stream::Science => StreamOutlook {
                careers: &["Engineering", "Medicine", "Research", "IT & Software"],
                salary_range: "₹6-15 LPA",
                growth_prospects: "High",
                job_security: "High",
                recommended_colleges: &["IIT", "NIT", "AIIMS", "State Universities"],
                entrance_exams: &["JEE Main", "NEET", "JKCET"],
            },
            Stream::Commerce => StreamOutlook {
                careers: &["Banking", "Finance", "Business Management", "CA/CS"],
                salary_range: "₹4-12 LPA",
                growth_prospects: "Medium-High",
                job_security: "Medium-High",
                recommended_colleges: &["SRCC", "University of Kashmir", "State Universities"],
                entrance_exams: &["CUET", "CA Foundation", "IPMAT"],
            },
            Stream::Arts => StreamOutlook {
                careers: &["Civil Services", "Teaching", "Media", "Social Work"],
                salary_range: "₹3-10 LPA",
                growth_prospects: "Medium",
                job_security: "Medium",
                recommended_colleges: &[
                    "University of Jammu",
                    "Central University of Kashmir",
                    "State Universities",
                ],
                entrance_exams: &["CUET", "CLAT", "JKSSB"],
            },
        }
    }
}

struct StreamOutlook {
    careers: &'static [&'static str],
    salary_range: &'static str,
    growth_prospects: &'static str,
    job_security: &'static str,
    recommended_colleges: &'static [&'static str],
    entrance_exams: &'static [&'static str],
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    pub stream: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Timeline {
    pub completion_12th: String,
    pub graduation: String,
    pub career_start: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub scenario_name: String,
    pub chosen_stream: String,
    pub simulated_as: Stream,
    pub possible_careers: Vec<String>,
    pub salary_range: String,
    pub growth_prospects: String,
    pub job_security: String,
    pub subjects_relevance: Vec<String>,
    pub interests: Vec<String>,
    pub recommended_colleges: Vec<String>,
    pub entrance_exams: Vec<String>,
    pub timeline: Timeline,
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Timeline assumes class 12 is finished in `current_year`.
pub fn timeline(current_year: i32) -> Timeline {
    Timeline {
        completion_12th: current_year.to_string(),
        graduation: format!("{}-{}", current_year + 3, current_year + 4),
        career_start: format!("{}-{}", current_year + 4, current_year + 5),
    }
}

pub fn simulate(request: &SimulationRequest, current_year: i32) -> SimulationResult {
    let stream = Stream::parse(&request.stream);
    let outlook = stream.outlook();

    SimulationResult {
        scenario_name: format!("What if I choose {}?", request.stream.trim()),
        chosen_stream: request.stream.trim().to_string(),
        simulated_as: stream,
        possible_careers: to_strings(outlook.careers),
        salary_range: outlook.salary_range.to_string(),
        growth_prospects: outlook.growth_prospects.to_string(),
        job_security: outlook.job_security.to_string(),
        subjects_relevance: request.subjects.clone(),
        interests: request.interests.clone(),
        recommended_colleges: to_strings(outlook.recommended_colleges),
        entrance_exams: to_strings(outlook.entrance_exams),
        timeline: timeline(current_year),
    }
}
