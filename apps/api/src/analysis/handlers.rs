//! Axum route handlers for the Analysis and Profession APIs.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::analysis::catalog::{self, PROFESSION_GROUPS};
use crate::analysis::AnalysisResult;
use crate::errors::AppError;
use crate::models::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfessionOption {
    pub id: &'static str,
    pub label: &'static str,
    /// Whether keyword analysis is available for this profession.
    pub has_keywords: bool,
}

#[derive(Debug, Serialize)]
pub struct ProfessionGroupResponse {
    pub name: &'static str,
    pub options: Vec<ProfessionOption>,
}

#[derive(Debug, Serialize)]
pub struct ProfessionsResponse {
    pub groups: Vec<ProfessionGroupResponse>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub profession: String,
    pub label: Option<&'static str>,
    pub suggestions: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/analysis
///
/// Analyzes the stored resume record.
pub async fn handle_analyze_stored(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResult>, AppError> {
    let record = state.store.snapshot().await;
    Ok(Json(state.analyzer.analyze(&record)))
}

/// POST /api/v1/analysis
///
/// Analyzes a caller-supplied record without touching the stored one.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<AnalysisResult>, AppError> {
    Ok(Json(state.analyzer.analyze(&record)))
}

/// GET /api/v1/professions
pub async fn handle_list_professions() -> Json<ProfessionsResponse> {
    let groups = PROFESSION_GROUPS
        .iter()
        .map(|group| ProfessionGroupResponse {
            name: group.name,
            options: group
                .options
                .iter()
                .map(|&(id, label)| ProfessionOption {
                    id,
                    label,
                    has_keywords: catalog::lookup(id).is_some(),
                })
                .collect(),
        })
        .collect();

    Json(ProfessionsResponse { groups })
}

/// GET /api/v1/professions/:id/suggestions
///
/// Summary suggestions and keyword list. Unknown professions get empty lists.
pub async fn handle_profession_suggestions(Path(id): Path<String>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        label: catalog::label_for(&id),
        suggestions: catalog::suggestions_for(&id),
        keywords: catalog::keywords_for(&id),
        profession: id,
    })
}
