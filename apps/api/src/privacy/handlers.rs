use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::candidate::{AnonymizedProfile, CandidateProfile};
use crate::privacy::anonymize::anonymize;
use crate::privacy::candidate_id::generate_candidate_id;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StoreCandidateResponse {
    pub candidate_id: String,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/v1/candidates
///
/// Accepts a (possibly form-completed) profile, anonymizes it and
/// persists the result. The raw profile is dropped once the anonymized
/// record is written.
pub async fn handle_store_candidate(
    State(state): State<AppState>,
    Json(mut profile): Json<CandidateProfile>,
) -> Result<(StatusCode, Json<StoreCandidateResponse>), AppError> {
    profile.normalize_tech_stack();

    // One instant for both the ID suffix and the record timestamp,
    // truncated to the second granularity the ID carries.
    let now = Utc::now().trunc_subsecs(0);
    let candidate_id = generate_candidate_id(&profile, now);
    let record = anonymize(&profile, candidate_id.clone(), now);

    state.store.save(&record).map_err(AppError::Internal)?;

    Ok((
        StatusCode::CREATED,
        Json(StoreCandidateResponse {
            candidate_id,
            timestamp: now,
        }),
    ))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let ids = state.store.list().map_err(AppError::Internal)?;
    Ok(Json(ids))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnonymizedProfile>, AppError> {
    // IDs are CAND_<hex>_<ts>; anything else never names a record and must
    // not reach the filesystem.
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::NotFound(format!("candidate {id} not found")));
    }

    let record = state
        .store
        .load(&id)
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("candidate {id} not found")))?;
    Ok(Json(record))
}
