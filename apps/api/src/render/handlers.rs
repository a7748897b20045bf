//! Axum route handlers for the Render, Export and Template APIs.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ResumeRecord;
use crate::render::document::ResumeDocument;
use crate::render::export::{export, export_file_name, ExportFormat};
use crate::render::render;
use crate::render::templates::{catalog, TemplateInfo};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Overrides the record's `selectedTemplate`.
    pub template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub record: ResumeRecord,
    pub template: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
    pub template: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateInfo>,
}

fn render_record(
    state: &AppState,
    record: &ResumeRecord,
    template: Option<&str>,
) -> ResumeDocument {
    let template = template.unwrap_or(&record.selected_template);
    render(record, template, &state.render_options)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/render?template=
///
/// Renders the stored record with its selected template unless overridden.
pub async fn handle_render_stored(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<ResumeDocument>, AppError> {
    let record = state.store.snapshot().await;
    Ok(Json(render_record(&state, &record, query.template.as_deref())))
}

/// POST /api/v1/render
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(render_record(
        &state,
        &request.record,
        request.template.as_deref(),
    )))
}

/// GET /api/v1/export?format=&template=
///
/// Exports the stored record as an attachment. Format defaults to markdown.
pub async fn handle_export(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let format: ExportFormat = query.format.as_deref().unwrap_or("markdown").parse()?;

    // Snapshot first so later edits cannot race the export.
    let record = state.store.snapshot().await;
    let doc = render_record(&state, &record, query.template.as_deref());
    let body = export(&doc, format).map_err(anyhow::Error::from)?;

    let file_name = export_file_name(&record.personal_info.full_name, format);
    let disposition = format!("attachment; filename=\"{file_name}\"");

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplatesResponse> {
    Json(TemplatesResponse {
        templates: catalog(),
    })
}
