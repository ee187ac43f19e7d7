use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::credential::Credential;
use crate::state::AppState;
use crate::translate::{
    LanguageSelection, PresetLanguage, RequestError, TranslationRequest, TranslationResult,
};
use crate::ui;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Page
        .route("/", get(ui::index).post(ui::submit))

        // REST API routes
        .route("/api/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/translate", post(translate))

        // Static file serving
        .nest_service("/static", ServeDir::new(&state.config.server_config.static_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime = Utc::now().signed_duration_since(state.started_at);
    Json(json!({
        "status": "ok",
        "model": state.translator.model(),
        "credential_configured": state.has_server_credential(),
        "started_at": state.started_at,
        "uptime_secs": uptime.num_seconds(),
    }))
}

async fn list_languages() -> Json<Value> {
    let labels: Vec<&str> = PresetLanguage::ALL.iter().map(|p| p.label()).collect();
    Json(json!(labels))
}

#[derive(Debug, Deserialize)]
struct TranslatePayload {
    text: String,
    language: LanguageSelection,
    #[serde(default)]
    api_key: Option<String>,
}

async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslatePayload>,
) -> Result<Json<TranslationResult>, (StatusCode, Json<Value>)> {
    let credential = Credential::pick(state.credential.as_ref(), payload.api_key.as_deref());
    let language = payload.language.resolve().unwrap_or_default();

    let request = TranslationRequest::new(payload.text, language, credential).map_err(|e| {
        let status = match e {
            RequestError::MissingCredential => StatusCode::UNAUTHORIZED,
            RequestError::EmptyText | RequestError::EmptyLanguage => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({"error": e.to_string()})))
    })?;

    match state.translator.translate(&request).await {
        Ok(text) => Ok(Json(TranslationResult::Success { text })),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(json!(TranslationResult::from(Err(e)))),
        )),
    }
}
