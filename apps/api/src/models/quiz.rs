use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Immutable snapshot of one quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuizResultRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub session_id: String,
    pub answers: Value,
    pub career_recommendations: Value,
    pub created_at: DateTime<Utc>,
}
