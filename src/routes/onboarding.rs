use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult, middleware::RequestId, models::MovieSummary, routes::AppState,
};

/// Handler for the onboarding movie picker
pub async fn onboarding_movies(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<Vec<MovieSummary>>> {
    tracing::info!(request_id = %request_id, "Processing onboarding request");

    let movies = state.onboarding.onboarding_movies().await?;

    Ok(Json(movies))
}
