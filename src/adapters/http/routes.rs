//! Routes: the planner form on `/` and a health probe.

use crate::adapters::http::render;
use crate::adapters::http::server::AppState;
use crate::domain::model::{PlanResult, ProfileForm, SessionId};
use crate::utils::error::Result;
use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Planner Routes
// ============================================================================

pub fn planner_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(show_form).post(submit_form))
}

async fn show_form(State(state): State<AppStateArc>, headers: HeaderMap) -> Html<String> {
    render_page(&state, &headers).await
}

/// Post/redirect/get: a successful submission is stored for the session and
/// shown once by the following GET. Any failure falls back to the plain page.
async fn submit_form(
    State(state): State<AppStateArc>,
    headers: HeaderMap,
    form: std::result::Result<Form<ProfileForm>, FormRejection>,
) -> Response {
    let outcome = match form {
        Ok(Form(form)) => plan_submission(&state, &form),
        Err(rejection) => {
            warn!("Unreadable form submission: {}", rejection);
            return render_page(&state, &headers).await.into_response();
        }
    };

    match outcome {
        Ok(result) => {
            let (session, is_new) = match session_from_headers(&headers, &state.cookie_name) {
                Some(session) => (session, false),
                None => (SessionId::generate(), true),
            };
            state.store.put(session, result).await;
            debug!("Stored result for session {}", session);

            if is_new {
                let cookie = format!(
                    "{}={}; Path=/; HttpOnly; SameSite=Lax",
                    state.cookie_name, session
                );
                ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
            } else {
                Redirect::to("/").into_response()
            }
        }
        Err(e) => {
            warn!("Form submission ignored: {} (category: {:?})", e, e.category());
            render_page(&state, &headers).await.into_response()
        }
    }
}

fn plan_submission(state: &AppState, form: &ProfileForm) -> Result<PlanResult> {
    let input = form.parse()?;
    state.planner.plan(&input)
}

async fn render_page(state: &AppState, headers: &HeaderMap) -> Html<String> {
    let result = match session_from_headers(headers, &state.cookie_name) {
        Some(session) => state.store.take(session).await,
        None => None,
    };
    Html(render::index_page(result.as_ref()))
}

/// Finds the session cookie among all `Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value.trim()))
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
