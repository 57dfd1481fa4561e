//! Axum route handlers for the career, college, scholarship and exam directory.

use axum::{extract::State, Json};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::directory::eligibility::{check_eligibility, EligibilityRequest, EligibilityResult};
use crate::directory::exams::upcoming_exams;
use crate::directory::non_empty;
use crate::directory::scholarships::match_scholarships;
use crate::directory::simulation::{simulate, SimulationRequest, SimulationResult};
use crate::directory::store;
use crate::errors::AppError;
use crate::extract::{AppJson, AppQuery};
use crate::models::career::CareerRow;
use crate::models::directory::{CollegeRow, ExamRow, ScholarshipRow};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    /// Set when the simulation was saved for a user.
    pub simulation_id: Option<Uuid>,
    pub simulation: SimulationResult,
}

#[derive(Debug, Deserialize)]
pub struct CollegeQuery {
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub college_type: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CollegeListResponse {
    pub colleges: Vec<CollegeRow>,
    pub states: Vec<String>,
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipQuery {
    pub category: Option<String>,
    #[serde(rename = "class")]
    pub class_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipMatchQuery {
    pub category: Option<String>,
    pub class_level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExamQuery {
    #[serde(rename = "class")]
    pub class_level: Option<String>,
    #[serde(rename = "type")]
    pub exam_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub exams: Vec<ExamRow>,
    pub upcoming: Vec<ExamRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerRow>>, AppError> {
    Ok(Json(store::list_careers(&state.db).await?))
}

/// POST /api/v1/careers/simulate
pub async fn handle_simulate_career(
    State(state): State<AppState>,
    AppJson(request): AppJson<SimulationRequest>,
) -> Result<Json<SimulationResponse>, AppError> {
    if request.stream.trim().is_empty() {
        return Err(AppError::InputMissing("stream is required".to_string()));
    }

    let simulation = simulate(&request, Utc::now().year());

    let simulation_id = match request.user_id {
        Some(user_id) => Some(
            store::record_simulation(&state.db, user_id, &simulation, &request.subjects)
                .await?
                .id,
        ),
        None => None,
    };

    Ok(Json(SimulationResponse {
        simulation_id,
        simulation,
    }))
}

/// GET /api/v1/colleges?state=&type=&search=
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<CollegeQuery>,
) -> Result<Json<CollegeListResponse>, AppError> {
    let state_filter = non_empty(params.state);
    let type_filter = non_empty(params.college_type);
    let search = non_empty(params.search);

    let colleges = store::search_colleges(
        &state.db,
        state_filter.as_deref(),
        type_filter.as_deref(),
        search.as_deref(),
    )
    .await?;

    Ok(Json(CollegeListResponse {
        colleges,
        states: store::distinct_college_states(&state.db).await?,
        types: store::distinct_college_types(&state.db).await?,
    }))
}

/// POST /api/v1/colleges/eligibility
pub async fn handle_check_eligibility(
    State(state): State<AppState>,
    AppJson(request): AppJson<EligibilityRequest>,
) -> Result<Json<EligibilityResult>, AppError> {
    if !(0.0..=100.0).contains(&request.marks_12th) || !(0.0..=100.0).contains(&request.marks_10th)
    {
        return Err(AppError::Validation(
            "marks must be percentages between 0 and 100".to_string(),
        ));
    }

    let colleges = store::all_colleges(&state.db).await?;
    Ok(Json(check_eligibility(request, colleges)))
}

/// GET /api/v1/scholarships?category=&class=
pub async fn handle_list_scholarships(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ScholarshipQuery>,
) -> Result<Json<Vec<ScholarshipRow>>, AppError> {
    let category = non_empty(params.category);
    let class_level = non_empty(params.class_level);
    let scholarships =
        store::list_scholarships(&state.db, category.as_deref(), class_level.as_deref()).await?;
    Ok(Json(scholarships))
}

/// GET /api/v1/scholarships/match?category=&class_level=
pub async fn handle_match_scholarships(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ScholarshipMatchQuery>,
) -> Result<Json<Vec<ScholarshipRow>>, AppError> {
    let category = non_empty(params.category);
    let class_level = non_empty(params.class_level).ok_or_else(|| {
        AppError::InputMissing("class_level is required to match scholarships".to_string())
    })?;

    let active = store::list_scholarships(&state.db, None, None).await?;
    Ok(Json(match_scholarships(
        active,
        category.as_deref(),
        Some(class_level.as_str()),
    )))
}

/// GET /api/v1/exams?class=&type=
pub async fn handle_list_exams(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ExamQuery>,
) -> Result<Json<ExamListResponse>, AppError> {
    let class_level = non_empty(params.class_level);
    let exam_type = non_empty(params.exam_type);

    let exams = store::list_exams(&state.db, class_level.as_deref(), exam_type.as_deref()).await?;
    let upcoming = upcoming_exams(&exams, Utc::now());

    Ok(Json(ExamListResponse { exams, upcoming }))
}
