//! API request handlers

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::analysis::{AnalysisResult, AnalysisService, AnalysisStats, Verdict};
use crate::i18n::{self, Language};
use crate::utils;

/// Shared application state
pub struct AppState {
    pub service: Arc<AnalysisService>,
}

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(msg: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.to_string()),
        }
    }
}

/// Generic failure surfaced when an analysis call does not complete.
const ANALYSIS_FAILED: &str = "The analysis could not be completed. Please try again.";

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
}

/// Optional display-language selector
#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    /// Parse the requested language, case-insensitively.
    fn language(&self) -> Result<Option<Language>, String> {
        self.lang.as_deref().map(str::parse).transpose()
    }
}

/// Analysis result response
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub verdict: Verdict,
    pub explanation: String,
    /// Localized verdict label, present when a language was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Severity color hint for the result card
    pub color: &'static str,
}

impl AnalysisResponse {
    fn from_result(result: AnalysisResult, lang: Option<Language>) -> Self {
        Self {
            color: i18n::verdict_color(result.verdict),
            label: lang.map(|l| i18n::verdict_label(l, result.verdict).to_string()),
            verdict: result.verdict,
            explanation: result.explanation,
        }
    }
}

/// POST /api/analyze — classify pasted email text
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    Json(request): Json<AnalyzeRequest>,
) -> (StatusCode, Json<ApiResponse<AnalysisResponse>>) {
    let lang = match query.language() {
        Ok(lang) => lang,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(&e))),
    };
    run_analysis(&state, &request.content, lang).await
}

/// POST /api/analyze/upload — classify an uploaded email file
pub async fn analyze_upload(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<AnalysisResponse>>) {
    let lang = match query.language() {
        Ok(lang) => lang,
        Err(e) => return (StatusCode::BAD_REQUEST, Json(ApiResponse::error(&e))),
    };

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("No file provided")),
            );
        }
        Err(e) => {
            warn!("rejecting malformed upload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Invalid multipart upload")),
            );
        }
    };

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("failed to read upload body: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Failed to read uploaded file")),
            );
        }
    };

    let content = utils::email_text_from_bytes(&bytes);
    run_analysis(&state, &content, lang).await
}

async fn run_analysis(
    state: &AppState,
    content: &str,
    lang: Option<Language>,
) -> (StatusCode, Json<ApiResponse<AnalysisResponse>>) {
    match state.service.analyze_with_timeout(content).await {
        Ok(result) => (
            StatusCode::OK,
            Json(ApiResponse::success(AnalysisResponse::from_result(result, lang))),
        ),
        Err(e) => {
            warn!("analysis failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::error(ANALYSIS_FAILED)),
            )
        }
    }
}

/// GET /api/stats — counters since startup
pub async fn stats(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<AnalysisStats>> {
    Json(ApiResponse::success(state.service.stats().await))
}

/// GET /api/health — liveness probe
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
