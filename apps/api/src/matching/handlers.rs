//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::analyzer::{
    analyze_catalog, analyze_requirement, CatalogAnalysis, SingleAnalysis,
};
use crate::matching::document::{extract_text, normalize, DocumentError, DocumentKind};
use crate::models::opportunity::OpportunityRequirement;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RequirementMatchRequest {
    pub resume_text: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub min_academic_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogMatchRequest {
    pub resume_text: String,
    /// Drop closed and past-deadline postings before scoring.
    #[serde(default)]
    pub open_only: bool,
}

/// Every analysis response carries an id and timestamp for client-side caching.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse<T> {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub analysis: T,
}

impl<T> AnalysisResponse<T> {
    fn new(analysis: T) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            analysis,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/requirement
///
/// Scores resume text against a single ad-hoc skills list.
pub async fn handle_match_requirement(
    Json(request): Json<RequirementMatchRequest>,
) -> Result<Json<AnalysisResponse<SingleAnalysis>>, AppError> {
    if let Some(min) = request.min_academic_score {
        if !min.is_finite() || min < 0.0 {
            return Err(AppError::Validation(
                "min_academic_score must be a non-negative number".to_string(),
            ));
        }
    }

    let text = normalize(&request.resume_text);
    let analysis = analyze_requirement(&text, request.required_skills, request.min_academic_score);

    Ok(Json(AnalysisResponse::new(analysis)))
}

/// POST /api/v1/match/catalog
///
/// Scores resume text against the opportunity catalog and returns the top matches.
pub async fn handle_match_catalog(
    State(state): State<AppState>,
    Json(request): Json<CatalogMatchRequest>,
) -> Result<Json<AnalysisResponse<CatalogAnalysis>>, AppError> {
    let text = normalize(&request.resume_text);
    let analysis = run_catalog_analysis(&state, text, request.open_only).await?;
    Ok(Json(AnalysisResponse::new(analysis)))
}

/// POST /api/v1/match/upload
///
/// Multipart upload: `file` (PDF or plain text) and optional `open_only`.
pub async fn handle_match_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse<CatalogAnalysis>>, AppError> {
    let mut document: Option<(DocumentKind, bytes::Bytes)> = None;
    let mut open_only = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let kind = DocumentKind::detect(field.content_type(), field.file_name())?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                document = Some((kind, bytes));
            }
            "open_only" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read field: {e}")))?;
                open_only = matches!(value.trim(), "true" | "1" | "on");
            }
            _ => {}
        }
    }

    let (kind, bytes) =
        document.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    info!("Resume upload received: {:?}, {} bytes", kind, bytes.len());

    let text = run_extraction(move || extract_text(kind, &bytes)).await?;

    let analysis = run_catalog_analysis(&state, text, open_only).await?;
    Ok(Json(AnalysisResponse::new(analysis)))
}

/// GET /api/v1/opportunities
///
/// Pass-through of the catalog as the matcher sees it.
pub async fn handle_list_opportunities(
    State(state): State<AppState>,
) -> Result<Json<Vec<OpportunityRequirement>>, AppError> {
    Ok(Json(state.catalog.list().await?))
}

/// Runs text extraction off the runtime. pdf-extract panics on some malformed
/// PDFs; a panicked task is reported like any other unreadable document.
async fn run_extraction<F>(extract: F) -> Result<String, AppError>
where
    F: FnOnce() -> Result<String, DocumentError> + Send + 'static,
{
    match tokio::task::spawn_blocking(extract).await {
        Ok(result) => Ok(result?),
        Err(e) => {
            warn!("Text extraction task failed: {e}");
            Err(AppError::UnprocessableEntity(
                "Could not read PDF".to_string(),
            ))
        }
    }
}

async fn run_catalog_analysis(
    state: &AppState,
    text: String,
    open_only: bool,
) -> Result<CatalogAnalysis, AppError> {
    let mut catalog = state.catalog.list().await?;
    if open_only {
        let today = Utc::now().date_naive();
        catalog.retain(|op| op.is_open(today));
    }

    let analysis = tokio::task::spawn_blocking(move || analyze_catalog(&text, &catalog))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Analysis task failed: {e}")))?;

    info!(
        "Catalog analysis ({}): {} skills, {} recommendations from {} postings",
        state.catalog.source(),
        analysis.profile.skills.len(),
        analysis.matches.len(),
        analysis.evaluated
    );

    Ok(analysis)
}
