use axum::{
    extract::{Query, State},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use crate::{
    AppState,
    error::AppError,
    models::ProjectQuery,
    routes::auth::require_session,
    services::portfolio::filter_projects,
};

pub fn routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/projects", get(get_projects))
        .route("/api/projects/search", get(search_projects))
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

fn fetch_failed(err: AppError) -> AppError {
    tracing::error!("Error fetching projects: {}", err);
    AppError::Internal("Failed to fetch projects".to_string())
}

async fn get_projects(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let data = state.projects.get_or_compute().await.map_err(fetch_failed)?;
    Ok(Json(&*data).into_response())
}

async fn search_projects(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProjectQuery>,
) -> Result<Response, AppError> {
    let data = state.projects.get_or_compute().await.map_err(fetch_failed)?;
    let filtered = filter_projects(&data.projects, &query);
    tracing::debug!("Search matched {} of {} projects", filtered.matched, filtered.total);
    Ok(Json(filtered).into_response())
}
