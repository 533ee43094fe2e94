use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate's structured screening record, assembled from résumé
/// extraction and progressively completed by the client's review form.
/// Fields the extractors could not find stay `None`; the assembler never
/// substitutes defaults or empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: Option<u32>,
    pub desired_position: Option<String>,
    pub current_location: Option<String>,
    /// Canonical lowercase technology keywords, sorted, no duplicates.
    pub tech_stack: Vec<String>,
}

impl CandidateProfile {
    /// Names of the fields still unset. Drives the client's completion form;
    /// screening starts once this is empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.is_none() {
            missing.push("full_name");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.phone.is_none() {
            missing.push("phone");
        }
        if self.years_experience.is_none() {
            missing.push("years_experience");
        }
        if self.desired_position.is_none() {
            missing.push("desired_position");
        }
        if self.current_location.is_none() {
            missing.push("current_location");
        }
        if self.tech_stack.is_empty() {
            missing.push("tech_stack");
        }
        missing
    }

    /// Re-establishes the tech-stack invariant (lowercase, trimmed, sorted,
    /// deduplicated) on profiles that arrive from manual form entry.
    pub fn normalize_tech_stack(&mut self) {
        let mut stack: Vec<String> = self
            .tech_stack
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        stack.sort();
        stack.dedup();
        self.tech_stack = stack;
    }
}

/// The storage-ready derivative of a [`CandidateProfile`]: PII fields
/// replaced by their one-way forms, stamped with the candidate ID and a
/// second-precision UTC timestamp. Created once, persisted, never mutated
/// and never decoded back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymizedProfile {
    pub candidate_id: String,
    pub timestamp: DateTime<Utc>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: Option<u32>,
    pub desired_position: Option<String>,
    pub current_location: Option<String>,
    pub tech_stack: Vec<String>,
}
