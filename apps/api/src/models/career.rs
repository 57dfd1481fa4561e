use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRow {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub required_education: Option<String>,
    pub job_roles: Vec<String>,
    pub salary_range: Option<String>,
    pub growth_opportunities: Option<String>,
    pub skills_required: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerSimulationRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub scenario_name: String,
    pub chosen_stream: String,
    pub chosen_subjects: Vec<String>,
    pub simulation_results: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
