//! Axum route handlers for the Quiz API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::quiz::QuizResultRow;
use crate::quiz::questions::{find_question, QuizQuestion, QUIZ_QUESTIONS};
use crate::quiz::scoring::{score_answers, Category, QuizAnswers};
use crate::quiz::store::{find_career_by_category, quiz_history, record_quiz_result};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub total_questions: usize,
    pub questions: &'static [QuizQuestion],
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: QuizAnswers,
    pub session_id: Option<String>,
    pub user_id: Option<Uuid>,
}

/// Career details attached to a recommendation for display.
#[derive(Debug, Serialize)]
pub struct CareerSummary {
    pub name: String,
    pub description: Option<String>,
    pub job_roles: Vec<String>,
    pub salary_range: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationDetail {
    pub category: Category,
    pub match_percentage: u8,
    pub career: Option<CareerSummary>,
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizResponse {
    pub quiz_result_id: Uuid,
    pub session_id: String,
    pub recommendations: Vec<RecommendationDetail>,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        total_questions: QUIZ_QUESTIONS.len(),
        questions: QUIZ_QUESTIONS,
    })
}

/// GET /api/v1/quiz/questions/:id
pub async fn handle_get_question(
    Path(id): Path<u8>,
) -> Result<Json<&'static QuizQuestion>, AppError> {
    find_question(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("quiz question {id}")))
}

/// POST /api/v1/quiz/submit
///
/// Scores the answers, stores the snapshot, then enriches each category with
/// a representative career. Scoring cannot fail, so nothing is written for a
/// request that is rejected.
pub async fn handle_submit_quiz(
    State(state): State<AppState>,
    AppJson(request): AppJson<SubmitQuizRequest>,
) -> Result<Json<SubmitQuizResponse>, AppError> {
    if request.answers.is_empty() {
        return Err(AppError::InputMissing(
            "answers cannot be empty".to_string(),
        ));
    }

    let session_id = request
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let recommendations = score_answers(&request.answers);

    let row = record_quiz_result(
        &state.db,
        request.user_id,
        &session_id,
        &request.answers,
        &recommendations,
    )
    .await?;

    let mut details = Vec::with_capacity(recommendations.len());
    for rec in recommendations {
        let career = find_career_by_category(&state.db, rec.category)
            .await?
            .map(|c| CareerSummary {
                name: c.name,
                description: c.description,
                job_roles: c.job_roles,
                salary_range: c.salary_range,
            });
        details.push(RecommendationDetail {
            category: rec.category,
            match_percentage: rec.match_percentage,
            career,
        });
    }

    Ok(Json(SubmitQuizResponse {
        quiz_result_id: row.id,
        session_id,
        recommendations: details,
    }))
}

/// GET /api/v1/quiz/results?user_id=
pub async fn handle_quiz_history(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserIdQuery>,
) -> Result<Json<Vec<QuizResultRow>>, AppError> {
    let history = quiz_history(&state.db, params.user_id).await?;
    Ok(Json(history))
}
