use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};

use super::AppState;
use super::error::AppError;
use crate::client::AuditProvider;
use crate::report::Report;

/// Body of `POST /api/audit`
#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    pub url: String,
}

pub async fn audit<P: AuditProvider + 'static>(
    State(state): State<AppState<P>>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<Report>, AppError> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::BadRequest("url must not be empty".to_string()));
    }

    let report = state.auditor.audit(url).await?;
    log::info!(
        "Audited {} (mock: {}, performance: {})",
        report.url,
        report.is_mock,
        report.scores.performance
    );
    Ok(Json(report))
}

pub async fn health<P: AuditProvider + 'static>(State(state): State<AppState<P>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "cache": state.auditor.cache().stats(),
    }))
}
