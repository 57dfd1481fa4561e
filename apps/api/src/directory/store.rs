use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::directory::simulation::SimulationResult;
use crate::models::career::{CareerRow, CareerSimulationRow};
use crate::models::directory::{CollegeRow, ExamRow, ScholarshipRow};

// ────────────────────────────────────────────────────────────────────────────
// Careers
// ────────────────────────────────────────────────────────────────────────────

pub async fn list_careers(pool: &PgPool) -> Result<Vec<CareerRow>> {
    Ok(
        sqlx::query_as::<_, CareerRow>("SELECT * FROM careers ORDER BY category, name")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn record_simulation(
    pool: &PgPool,
    user_id: Uuid,
    result: &SimulationResult,
    subjects: &[String],
) -> Result<CareerSimulationRow> {
    let row = sqlx::query_as::<_, CareerSimulationRow>(
        r#"
        INSERT INTO career_simulations
            (user_id, scenario_name, chosen_stream, chosen_subjects, simulation_results)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&result.scenario_name)
    .bind(&result.chosen_stream)
    .bind(subjects)
    .bind(serde_json::to_value(result)?)
    .fetch_one(pool)
    .await?;

    info!("Saved career simulation {} for user {user_id}", row.id);
    Ok(row)
}

// ────────────────────────────────────────────────────────────────────────────
// Colleges
// ────────────────────────────────────────────────────────────────────────────

/// Filters are case-insensitive substrings; `search` looks at name and city.
pub async fn search_colleges(
    pool: &PgPool,
    state: Option<&str>,
    college_type: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<CollegeRow>> {
    Ok(sqlx::query_as::<_, CollegeRow>(
        r#"
        SELECT * FROM colleges
        WHERE ($1::text IS NULL OR state ILIKE '%' || $1 || '%')
          AND ($2::text IS NULL OR type ILIKE '%' || $2 || '%')
          AND ($3::text IS NULL OR name ILIKE '%' || $3 || '%' OR city ILIKE '%' || $3 || '%')
        ORDER BY name
        "#,
    )
    .bind(state)
    .bind(college_type)
    .bind(search)
    .fetch_all(pool)
    .await?)
}

pub async fn all_colleges(pool: &PgPool) -> Result<Vec<CollegeRow>> {
    search_colleges(pool, None, None, None).await
}

pub async fn distinct_college_states(pool: &PgPool) -> Result<Vec<String>> {
    Ok(
        sqlx::query_scalar("SELECT DISTINCT state FROM colleges ORDER BY state")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn distinct_college_types(pool: &PgPool) -> Result<Vec<String>> {
    Ok(
        sqlx::query_scalar("SELECT DISTINCT type FROM colleges ORDER BY type")
            .fetch_all(pool)
            .await?,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Scholarships
// ────────────────────────────────────────────────────────────────────────────

/// Active scholarships whose eligibility lists contain the given values.
pub async fn list_scholarships(
    pool: &PgPool,
    category: Option<&str>,
    class_level: Option<&str>,
) -> Result<Vec<ScholarshipRow>> {
    Ok(sqlx::query_as::<_, ScholarshipRow>(
        r#"
        SELECT * FROM scholarships
        WHERE is_active
          AND ($1::text IS NULL OR $1 = ANY(category_eligible))
          AND ($2::text IS NULL OR $2 = ANY(class_eligible))
        ORDER BY application_deadline ASC NULLS LAST, name
        "#,
    )
    .bind(category)
    .bind(class_level)
    .fetch_all(pool)
    .await?)
}

// ────────────────────────────────────────────────────────────────────────────
// Exams
// ────────────────────────────────────────────────────────────────────────────

pub async fn list_exams(
    pool: &PgPool,
    class_level: Option<&str>,
    exam_type: Option<&str>,
) -> Result<Vec<ExamRow>> {
    Ok(sqlx::query_as::<_, ExamRow>(
        r#"
        SELECT * FROM exams
        WHERE is_active
          AND ($1::text IS NULL OR $1 = ANY(eligibility_class))
          AND ($2::text IS NULL OR exam_type = $2)
        ORDER BY exam_date ASC NULLS LAST, name
        "#,
    )
    .bind(class_level)
    .bind(exam_type)
    .fetch_all(pool)
    .await?)
}
