use std::collections::BTreeMap;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind, RawDocument};
use crate::models::candidate::CandidateProfile;
use crate::screening::extract_profile;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub profile: CandidateProfile,
    /// Extracted technologies grouped by taxonomy category, for reporting.
    pub tech_categories: BTreeMap<String, Vec<String>>,
    /// Fields the client's review form still has to supply.
    pub missing_fields: Vec<&'static str>,
}

/// POST /api/v1/resumes/parse
///
/// Multipart upload: a single `file` field whose filename extension
/// declares the document kind. Extraction failures come back as 422 so
/// the client can ask the candidate to re-upload.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            AppError::Validation(format!(
                "unsupported file type for '{filename}': expected .pdf or .docx"
            ))
        })?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;

        info!(filename = %filename, size = bytes.len(), "résumé uploaded");

        let document = RawDocument::new(bytes, kind);
        let text = extract_text(&document)?;
        let profile = extract_profile(&text, &state.taxonomy);
        let tech_categories = state.taxonomy.categorize(&profile.tech_stack);
        let missing_fields = profile.missing_fields();

        return Ok(Json(ParseResumeResponse {
            profile,
            tech_categories,
            missing_fields,
        }));
    }

    Err(AppError::Validation(
        "multipart body is missing a 'file' field".to_string(),
    ))
}
