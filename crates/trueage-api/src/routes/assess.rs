use axum::Json;
use axum::extract::{RawQuery, State};
use serde::Serialize;

use trueage_core::models::form_state::{FieldIssue, FormState};
use trueage_scoring::{AssessmentReport, assess};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AssessResponse {
    pub report: AssessmentReport,
    pub issues: Vec<FieldIssue>,
}

fn run(state: &AppState, form: &FormState) -> AssessResponse {
    let parsed = form.to_input();
    AssessResponse {
        report: assess(&parsed.input, &state.policy),
        issues: parsed.issues,
    }
}

/// Score a saved or exported form state.
pub async fn assess_form(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<AssessResponse>, ApiError> {
    let form = FormState::from_value(body)?;
    Ok(Json(run(&state, &form)))
}

/// Score the form state carried in a share link's query string.
pub async fn assess_query(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<AssessResponse>, ApiError> {
    let form = FormState::from_query(query.as_deref().unwrap_or_default())?;
    Ok(Json(run(&state, &form)))
}
