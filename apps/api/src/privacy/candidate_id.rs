//! Candidate ID derivation.
//!
//! `CAND_<8-hex digest of the email>_<YYYYMMDDHHMMSS>`. The suffix has
//! second granularity, so two calls for the same email within the same
//! second produce the identical ID. Downstream storage depends on this
//! exact shape; the collision window is accepted, not corrected.

use chrono::{DateTime, Utc};

use super::short_digest;
use crate::models::candidate::CandidateProfile;

const ID_PREFIX: &str = "CAND";

/// Derives the storage key for a profile at the given instant. The caller
/// supplies the instant so the ID suffix and the persisted record's
/// timestamp agree. An unset email hashes as the empty string.
pub fn generate_candidate_id(profile: &CandidateProfile, at: DateTime<Utc>) -> String {
    let email_digest = short_digest(profile.email.as_deref().unwrap_or(""), 8);
    format!("{}_{}_{}", ID_PREFIX, email_digest, at.format("%Y%m%d%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn with_email(email: Option<&str>) -> CandidateProfile {
        CandidateProfile {
            email: email.map(str::to_string),
            ..Default::default()
        }
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 15).unwrap()
    }

    #[test]
    fn test_id_shape() {
        let id = generate_candidate_id(&with_email(Some("john@example.com")), instant());
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "CAND");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(parts[2], "20260807093015");
    }

    #[test]
    fn test_same_email_same_second_collides() {
        // Documented, intentional: the ID is not unique within a second.
        let a = generate_candidate_id(&with_email(Some("john@example.com")), instant());
        let b = generate_candidate_id(&with_email(Some("john@example.com")), instant());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_emails_same_second_differ() {
        let a = generate_candidate_id(&with_email(Some("alice@example.com")), instant());
        let b = generate_candidate_id(&with_email(Some("bob@example.com")), instant());
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_email_different_second_differs() {
        let later = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 16).unwrap();
        let a = generate_candidate_id(&with_email(Some("john@example.com")), instant());
        let b = generate_candidate_id(&with_email(Some("john@example.com")), later);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unset_email_hashes_empty_string() {
        let a = generate_candidate_id(&with_email(None), instant());
        let b = generate_candidate_id(&with_email(Some("")), instant());
        assert_eq!(a, b);
    }
}
