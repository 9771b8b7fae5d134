use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiJson, AppState, CreateFactRequest, MessageResponse};
use crate::models::{AuthenticatedUser, Fact};

/// GET /api/facts
pub async fn list_facts(State(state): State<Arc<AppState>>) -> Json<Vec<Fact>> {
    Json(state.fact_service().list_facts().await)
}

/// POST /api/facts/create
/// The owner is always the authenticated user.
pub async fn create_fact(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthenticatedUser>,
    ApiJson(payload): ApiJson<CreateFactRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let text = payload.new_cat_fact.unwrap_or_default();

    state
        .fact_service()
        .create_fact(&user.username, &text)
        .await?;

    Ok(Json(MessageResponse::new("New fact created successfully")))
}
