use axum::Json;
use serde::Serialize;

use trueage_core::models::form_state::FormState;

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ShareResponse {
    pub query: String,
}

/// The built-in example form.
pub async fn demo_form() -> Json<FormState> {
    Json(FormState::demo())
}

/// Encode a form state as a share-link query string.
pub async fn share_form(Json(body): Json<serde_json::Value>) -> Result<Json<ShareResponse>, ApiError> {
    let form = FormState::from_value(body)?;
    Ok(Json(ShareResponse {
        query: form.to_query(),
    }))
}
