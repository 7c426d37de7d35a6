//! HTTP surface for the guidelines content.
//!
//! Read-only JSON endpoints over a `LocalizedContentStore`:
//!
//! - `GET /health`
//! - `GET /languages`
//! - `GET /guidelines/:lang?format=markdown|md|plain|text` (any case)
//! - `GET /guidelines/:lang/items`
//! - `GET /metrics` (requires `X-API-Key` when `API_KEY` is configured)

use crate::config::Config;
use crate::error::ContentError;
use crate::i18n::{Language, LocalizedContentStore, MetricsReport};
use crate::markup::{guideline_items, GuidelineItem, OutputFormat};
use crate::security::api_key_authorized;
use anyhow::{Context, Result};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Header carrying the API key for protected endpoints
pub const API_KEY_HEADER: &str = "x-api-key";

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LocalizedContentStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(LocalizedContentStore::new()),
            config: Arc::new(config),
        }
    }
}

/// Raw query string for `/guidelines/:lang`.
///
/// `format` is kept as text and parsed with `OutputFormat::from_str`, so the
/// endpoint accepts the same spellings as every other caller.
#[derive(Debug, Deserialize)]
pub struct GuidelinesQuery {
    pub format: Option<String>,
}

impl GuidelinesQuery {
    /// Parse the requested output format, defaulting to markdown.
    pub fn output_format(&self) -> Result<OutputFormat, ApiError> {
        match self.format.as_deref() {
            None => Ok(OutputFormat::default()),
            Some(raw) => raw
                .parse()
                .map_err(|e: anyhow::Error| ApiError::BadRequest(e.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub languages: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub is_default: bool,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            code: language.code(),
            name: language.name(),
            native_name: language.native_name(),
            is_default: language.is_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GuidelinesResponse {
    pub requested: String,
    pub language: &'static str,
    pub fell_back: bool,
    pub format: OutputFormat,
    pub guidelines: String,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub language: &'static str,
    pub fell_back: bool,
    pub items: Vec<GuidelineItem>,
}

/// Errors returned to HTTP clients as `{ "error": ... }`
#[derive(Debug)]
pub enum ApiError {
    Content(ContentError),
    BadRequest(String),
    Unauthorized,
}

impl From<ContentError> for ApiError {
    fn from(err: ContentError) -> Self {
        Self::Content(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Content(err @ ContentError::UnknownLanguage { .. }) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid API key".to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Build the router with all endpoints
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/languages", get(list_languages))
        .route("/guidelines/:lang", get(get_guidelines))
        .route("/guidelines/:lang/items", get(get_guideline_items))
        .route("/metrics", get(get_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until Ctrl+C
pub async fn serve(config: Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);

    axum::serve(listener, router(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("{}", state.store.metrics().report().summary());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        languages: state.store.registry().len(),
    })
}

async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    Json(
        state
            .store
            .languages()
            .into_iter()
            .map(LanguageInfo::from)
            .collect(),
    )
}

async fn get_guidelines(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    query: Result<Query<GuidelinesQuery>, QueryRejection>,
) -> Result<Json<GuidelinesResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let format = query.output_format()?;
    let lookup = state.store.lookup(&lang, state.config.fallback_policy)?;

    Ok(Json(GuidelinesResponse {
        requested: lookup.requested,
        language: lookup.language.code(),
        fell_back: lookup.fell_back,
        format,
        guidelines: format.render(lookup.guidelines),
    }))
}

async fn get_guideline_items(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let lookup = state.store.lookup(&lang, state.config.fallback_policy)?;

    Ok(Json(ItemsResponse {
        language: lookup.language.code(),
        fell_back: lookup.fell_back,
        items: guideline_items(lookup.guidelines),
    }))
}

async fn get_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, ApiError> {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if !api_key_authorized(state.config.api_key.as_deref(), provided) {
        warn!("Rejected /metrics request with missing or invalid API key");
        return Err(ApiError::Unauthorized);
    }

    Ok(Json(state.store.metrics().report()))
}
