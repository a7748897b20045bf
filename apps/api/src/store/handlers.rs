//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::{ResumeRecord, SectionUpdate};
use crate::state::AppState;

/// GET /api/v1/resume
pub async fn handle_get_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeRecord>, AppError> {
    Ok(Json(state.store.snapshot().await))
}

/// PUT /api/v1/resume
///
/// Replaces the whole record. Missing fields take their defaults.
pub async fn handle_replace_resume(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<ResumeRecord>, AppError> {
    let saved = state.store.replace(record).await?;
    Ok(Json(saved))
}

/// PUT /api/v1/resume/:section
///
/// Replaces one section (`personalInfo`, `experience`, ..., `selectedTemplate`).
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<ResumeRecord>, AppError> {
    let update = SectionUpdate::from_json(&section, value)?;
    let saved = state.store.apply(update).await?;
    Ok(Json(saved))
}

/// DELETE /api/v1/resume
///
/// Resets the stored record to the empty default.
pub async fn handle_reset_resume(
    State(state): State<AppState>,
) -> Result<Json<ResumeRecord>, AppError> {
    let cleared = state.store.reset().await?;
    info!("Resume under '{}' reset", state.store.key());
    Ok(Json(cleared))
}
