use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CollegeRow {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub city: String,
    /// Engineering, Medical, Arts, ...
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub college_type: String,
    pub courses: Vec<String>,
    pub fees_range: Option<String>,
    pub facilities: Vec<String>,
    pub cutoff_info: Option<String>,
    pub seats: Option<i32>,
    pub scholarships: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScholarshipRow {
    pub id: i32,
    pub name: String,
    pub provider: Option<String>,
    /// General, SC, ST, OBC
    pub category_eligible: Vec<String>,
    /// 10th, 12th, graduation, post_graduation
    pub class_eligible: Vec<String>,
    pub min_marks: Option<f64>,
    pub max_family_income: Option<i32>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub eligibility_criteria: Option<String>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub application_link: Option<String>,
    pub documents_required: Vec<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExamRow {
    pub id: i32,
    pub name: String,
    /// entrance, competitive, board
    pub exam_type: Option<String>,
    pub conducting_body: Option<String>,
    pub description: Option<String>,
    pub eligibility_class: Vec<String>,
    pub subjects_covered: Vec<String>,
    pub exam_pattern: Option<String>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
    pub exam_date: Option<DateTime<Utc>>,
    pub result_date: Option<DateTime<Utc>>,
    pub application_fee: Option<String>,
    pub official_website: Option<String>,
    pub is_active: bool,
}
