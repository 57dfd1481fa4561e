use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// AI chat log for one user. `messages` is a JSON array of exchanges.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorshipSessionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mentor_type: String,
    pub session_type: String,
    pub messages: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
