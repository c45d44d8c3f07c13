use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use crate::{AppState, error::AppError};

pub const SESSION_COOKIE: &str = "dashboard_session";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/session", get(session))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    password: String,
}

fn has_session(state: &AppState, jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .map_or(false, |cookie| state.sessions.is_valid(cookie.value()))
}

async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), AppError> {
    if request.password.trim().is_empty() || request.password != state.config.dashboard_password {
        tracing::warn!("Rejected dashboard login attempt");
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let token = state.sessions.create();
    tracing::info!("Dashboard session opened");

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/");

    Ok((jar.add(cookie), Json(json!({ "success": true }))))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value());
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/"));
    (jar, Json(json!({ "success": true })))
}

async fn session(State(state): State<Arc<AppState>>, jar: CookieJar) -> Json<Value> {
    Json(json!({ "authenticated": has_session(&state, &jar) }))
}

/// Rejects requests that don't carry a live session cookie.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    if !has_session(&state, &jar) {
        return AppError::Unauthorized("Unauthorized".to_string()).into_response();
    }
    next.run(request).await
}
