//! College eligibility checker — a rule of thumb, not real cutoffs.
//!
//! A college is eligible when:
//! 1. 12th marks ≥ the category minimum (General 60, OBC 55, SC 50, ST 45)
//! 2. the requested stream (if any) appears in the college type
//! 3. the preferred state (if any) equals the college state, ignoring case

use serde::{Deserialize, Serialize};

use crate::models::directory::CollegeRow;

#[derive(Debug, Clone, Deserialize)]
pub struct EligibilityRequest {
    #[serde(default)]
    pub marks_10th: f64,
    #[serde(default)]
    pub marks_12th: f64,
    #[serde(default = "default_category")]
    pub category: String,
    pub stream: Option<String>,
    pub state_preference: Option<String>,
}

fn default_category() -> String {
    "General".to_string()
}

#[derive(Debug, Serialize)]
pub struct EligibilityResult {
    pub marks_12th: f64,
    pub category: String,
    pub stream: Option<String>,
    pub minimum_percentage: f64,
    pub colleges: Vec<CollegeRow>,
}

/// Unknown categories get the General threshold.
pub fn minimum_percentage(category: &str) -> f64 {
    match category.trim().to_uppercase().as_str() {
        "SC" => 50.0,
        "ST" => 45.0,
        "OBC" => 55.0,
        _ => 60.0,
    }
}

pub fn is_eligible(request: &EligibilityRequest, college: &CollegeRow) -> bool {
    if request.marks_12th < minimum_percentage(&request.category) {
        return false;
    }

    let stream_ok = match request.stream.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(stream) => college
            .college_type
            .to_lowercase()
            .contains(&stream.to_lowercase()),
    };

    let state_ok = match request.state_preference.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(state) => college.state.to_lowercase() == state.to_lowercase(),
    };

    stream_ok && state_ok
}

pub fn check_eligibility(request: EligibilityRequest, colleges: Vec<CollegeRow>) -> EligibilityResult {
    let eligible = colleges
        .into_iter()
        .filter(|c| is_eligible(&request, c))
        .collect();

    EligibilityResult {
        marks_12th: request.marks_12th,
        minimum_percentage: minimum_percentage(&request.category),
        category: request.category,
        stream: request.stream,
        colleges: eligible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(name: &str, state: &str, college_type: &str) -> CollegeRow {
        CollegeRow {
            id: 1,
            name: name.to_string(),
            state: state.to_string(),
            city: "Srinagar".to_string(),
            college_type: college_type.to_string(),
            courses: vec![],
            fees_range: None,
            facilities: vec![],
            cutoff_info: None,
            seats: None,
            scholarships: None,
            website: None,
        }
    }

    fn request(marks: f64, category: &str) -> EligibilityRequest {
        EligibilityRequest {
            marks_10th: 70.0,
            marks_12th: marks,
            category: category.to_string(),
            stream: None,
            state_preference: None,
        }
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(minimum_percentage("General"), 60.0);
        assert_eq!(minimum_percentage("OBC"), 55.0);
        assert_eq!(minimum_percentage("sc"), 50.0);
        assert_eq!(minimum_percentage("ST"), 45.0);
        assert_eq!(minimum_percentage("EWS"), 60.0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let c = college("NIT", "Jammu & Kashmir", "Engineering");
        assert!(is_eligible(&request(50.0, "SC"), &c));
        assert!(!is_eligible(&request(49.9, "SC"), &c));
    }

    #[test]
    fn test_stream_matches_type_substring() {
        let c = college("University", "Jammu & Kashmir", "Arts and Science");
        let mut req = request(75.0, "General");
        req.stream = Some("science".to_string());
        assert!(is_eligible(&req, &c));
        req.stream = Some("Medical".to_string());
        assert!(!is_eligible(&req, &c));
    }

    #[test]
    fn test_state_must_match_exactly() {
        let c = college("GMC", "Jammu & Kashmir", "Medical");
        let mut req = request(75.0, "General");
        req.state_preference = Some("jammu & kashmir".to_string());
        assert!(is_eligible(&req, &c));
        req.state_preference = Some("Jammu".to_string());
        assert!(!is_eligible(&req, &c));
    }

    #[test]
    fn test_check_eligibility_filters_list() {
        let colleges = vec![
            college("NIT Srinagar", "Jammu & Kashmir", "Engineering"),
            college("GMC Jammu", "Jammu & Kashmir", "Medical"),
        ];
        let mut req = request(58.0, "OBC");
        req.stream = Some("engineering".to_string());
        let result = check_eligibility(req, colleges);
        assert_eq!(result.minimum_percentage, 55.0);
        assert_eq!(result.colleges.len(), 1);
        assert_eq!(result.colleges[0].name, "NIT Srinagar");
    }

    #[test]
    fn test_request_defaults() {
        let req: EligibilityRequest = serde_json::from_str(r#"{"marks_12th": 61}"#).unwrap();
        assert_eq!(req.category, "General");
        assert_eq!(req.marks_10th, 0.0);
        assert!(req.stream.is_none());
    }
}
