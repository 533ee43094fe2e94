//! Field extractors: independent pure functions from extracted text to
//! optional typed fields. A miss is `None`, never an error; the phone and
//! experience extractors walk an ordered pattern list and the first
//! pattern that matches anywhere wins, even when a later pattern would
//! match an earlier or fuller substring. That precedence is a deliberate
//! part of the contract, reproduced as-is.

use std::collections::BTreeSet;

use regex::Regex;

use super::taxonomy::TechTaxonomy;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Ordered: plain 10-digit, then international, then parenthesized.
const PHONE_PATTERNS: &[&str] = &[
    r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b",                // 123-456-7890
    r"\+\d{1,3}[-.]?\d{3}[-.]?\d{3}[-.]?\d{4}\b",    // +1-123-456-7890
    r"\(\d{3}\)\s*\d{3}[-.]?\d{4}\b",                // (123) 456-7890
];

/// Ordered; matched against the lowercased text.
const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of)?\s*experience",
    r"experience:\s*(\d+)\+?\s*(?:years?|yrs?)",
    r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:in)?\s*the\s*field",
];

/// First email-shaped substring, verbatim. No deliverability validation.
pub fn extract_email(text: &str) -> Option<String> {
    let re = Regex::new(EMAIL_PATTERN).unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}

/// First phone number, by pattern precedence. Once a pattern matches,
/// later patterns are never consulted.
pub fn extract_phone(text: &str) -> Option<String> {
    for pattern in PHONE_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        if let Some(m) = re.find(text) {
            return Some(m.as_str().to_string());
        }
    }
    None
}

/// Years of experience, by pattern precedence. A match whose captured
/// number fails to parse is skipped in favor of the next pattern.
pub fn extract_years_experience(text: &str) -> Option<u32> {
    let lowered = text.to_lowercase();
    for pattern in EXPERIENCE_PATTERNS {
        let re = Regex::new(pattern).unwrap();
        if let Some(caps) = re.captures(&lowered) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return Some(years);
            }
        }
    }
    None
}

/// Every taxonomy keyword contained anywhere in the lowercased text, as a
/// sorted, deduplicated list of canonical keywords. Containment is plain
/// substring with no word-boundary check, so "go" matches inside "gopher".
pub fn extract_tech_stack(text: &str, taxonomy: &TechTaxonomy) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut found = BTreeSet::new();

    for (_, keywords) in taxonomy.categories() {
        for keyword in keywords {
            if lowered.contains(keyword.as_str()) {
                found.insert(keyword.clone());
            }
        }
    }

    found.into_iter().collect()
}
