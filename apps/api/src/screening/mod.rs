// Résumé screening: taxonomy-driven field extraction and profile assembly.
// Extractors are pure functions over the extracted text; the assembler
// combines their outputs and never fabricates defaults.

pub mod fields;
pub mod handlers;
pub mod taxonomy;

use crate::models::candidate::CandidateProfile;
use taxonomy::TechTaxonomy;

/// Combines extractor outputs into a profile. A `None` from an extractor
/// leaves the field unset; `full_name`, `desired_position` and
/// `current_location` are never inferred from the document and stay unset
/// until the client's review form supplies them.
pub fn assemble(
    email: Option<String>,
    phone: Option<String>,
    years_experience: Option<u32>,
    tech_stack: Vec<String>,
) -> CandidateProfile {
    CandidateProfile {
        full_name: None,
        email,
        phone,
        years_experience,
        desired_position: None,
        current_location: None,
        tech_stack,
    }
}

/// Runs the four field extractors over extracted résumé text and
/// assembles the result.
pub fn extract_profile(text: &str, taxonomy: &TechTaxonomy) -> CandidateProfile {
    assemble(
        fields::extract_email(text),
        fields::extract_phone(text),
        fields::extract_years_experience(text),
        fields::extract_tech_stack(text, taxonomy),
    )
}
