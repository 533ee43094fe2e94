use std::sync::Arc;

use crate::privacy::store::CandidateStore;
use crate::screening::taxonomy::TechTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only category-to-keyword table, built once at startup and
    /// never mutated afterwards, so handlers share it without locking.
    pub taxonomy: Arc<TechTaxonomy>,
    pub store: CandidateStore,
}
