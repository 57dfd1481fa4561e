use anyhow::Result;
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::chat::service::ChatReply;
use crate::models::mentorship::MentorshipSessionRow;

/// Appends one exchange to the user's active AI session, opening a session
/// on first use. A single upsert, so concurrent first messages share one row.
pub async fn append_chat_exchange(
    pool: &PgPool,
    user_id: Uuid,
    message: &str,
    reply: &ChatReply,
) -> Result<Uuid> {
    let exchange = json!([{
        "user": message,
        "ai": reply,
        "timestamp": Utc::now().to_rfc3339(),
    }]);

    let (session_id, opened): (Uuid, bool) = sqlx::query_as(
        r#"
        INSERT INTO mentorship_sessions (user_id, mentor_type, session_type, messages)
        VALUES ($1, 'ai', 'chat', $2)
        ON CONFLICT (user_id) WHERE mentor_type = 'ai' AND status = 'active'
        DO UPDATE SET messages = mentorship_sessions.messages || EXCLUDED.messages,
                      updated_at = now()
        RETURNING id, (xmax = 0) AS opened
        "#,
    )
    .bind(user_id)
    .bind(&exchange)
    .fetch_one(pool)
    .await?;

    if opened {
        info!("Opened AI mentorship session {session_id} for user {user_id}");
    }
    Ok(session_id)
}

/// The user's AI chat sessions, newest first.
pub async fn chat_sessions(pool: &PgPool, user_id: Uuid) -> Result<Vec<MentorshipSessionRow>> {
    Ok(sqlx::query_as::<_, MentorshipSessionRow>(
        r#"
        SELECT * FROM mentorship_sessions
        WHERE user_id = $1 AND mentor_type = 'ai'
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}
