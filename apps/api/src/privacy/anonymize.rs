//! Anonymization Engine: deterministic, structure-preserving, one-way
//! transforms over the sensitive fields of an assembled profile.
//!
//! Only `email`, `phone` and `full_name` are transformed. Years of
//! experience, desired position, location and tech stack are copied
//! verbatim: they are quasi-identifiers deliberately left unprotected,
//! a scope boundary rather than an oversight. Unset fields pass through
//! unset and are never hashed.

use chrono::{DateTime, Utc};

use super::short_digest;
use crate::models::candidate::{AnonymizedProfile, CandidateProfile};

/// Produces the storage-ready derivative of a profile, stamped with the
/// given candidate ID and instant. Never fails for a structurally valid
/// (possibly partially unset) profile.
pub fn anonymize(
    profile: &CandidateProfile,
    candidate_id: impl Into<String>,
    at: DateTime<Utc>,
) -> AnonymizedProfile {
    AnonymizedProfile {
        candidate_id: candidate_id.into(),
        timestamp: at,
        full_name: profile.full_name.as_deref().map(anonymize_full_name),
        email: profile.email.as_deref().map(anonymize_email),
        phone: profile.phone.as_deref().map(anonymize_phone),
        years_experience: profile.years_experience,
        desired_position: profile.desired_position.clone(),
        current_location: profile.current_location.clone(),
        tech_stack: profile.tech_stack.clone(),
    }
}

/// Replaces the local part with its 8-hex digest; the domain is kept
/// verbatim so per-domain reporting still works. A value with no `@`
/// degrades to a digest of the whole string rather than failing.
pub fn anonymize_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{}", short_digest(local, 8), domain),
        None => short_digest(email, 8),
    }
}

/// Strips non-digits, keeps any country code verbatim, and replaces the
/// 10-digit local number with its 6-hex digest.
pub fn anonymize_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() > 10 {
        let (country_code, local) = digits.split_at(digits.len() - 10);
        format!("+{}-XXX-{}", country_code, short_digest(local, 6))
    } else {
        format!("XXX-{}", short_digest(&digits, 6))
    }
}

/// Keeps the first and last initials, digests the middle tokens. A single
/// token becomes an 8-hex digest with no initials to preserve.
pub fn anonymize_full_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    if let [first, .., last] = parts.as_slice() {
        let middle = parts[1..parts.len() - 1].join(" ");
        format!(
            "{}.{}.{}.",
            initial_of(first),
            short_digest(&middle, 4),
            initial_of(last)
        )
    } else {
        short_digest(name, 8)
    }
}

/// First character of a token, as a string. Initials are characters, not
/// bytes; slicing would split a multi-byte initial.
fn initial_of(token: &str) -> String {
    token.chars().take(1).collect()
}
