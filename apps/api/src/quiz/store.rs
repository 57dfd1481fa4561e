use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::career::CareerRow;
use crate::models::quiz::QuizResultRow;
use crate::quiz::scoring::{Category, QuizAnswers, Recommendation};

/// Appends a quiz result. Rows are never updated afterwards.
pub async fn record_quiz_result(
    pool: &PgPool,
    user_id: Option<Uuid>,
    session_id: &str,
    answers: &QuizAnswers,
    recommendations: &[Recommendation],
) -> Result<QuizResultRow> {
    let row = sqlx::query_as::<_, QuizResultRow>(
        r#"
        INSERT INTO quiz_results (user_id, session_id, answers, career_recommendations)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(session_id)
    .bind(serde_json::to_value(answers)?)
    .bind(serde_json::to_value(recommendations)?)
    .fetch_one(pool)
    .await?;

    info!(
        "Recorded quiz result {} for session {session_id} ({} recommendations)",
        row.id,
        recommendations.len()
    );
    Ok(row)
}

/// One representative career for a category, used to enrich recommendations.
pub async fn find_career_by_category(
    pool: &PgPool,
    category: Category,
) -> Result<Option<CareerRow>> {
    Ok(sqlx::query_as::<_, CareerRow>(
        "SELECT * FROM careers WHERE category = $1 ORDER BY id ASC LIMIT 1",
    )
    .bind(category.as_str())
    .fetch_optional(pool)
    .await?)
}

/// All stored results for a user, newest first.
pub async fn quiz_history(pool: &PgPool, user_id: Uuid) -> Result<Vec<QuizResultRow>> {
    Ok(sqlx::query_as::<_, QuizResultRow>(
        "SELECT * FROM quiz_results WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}
