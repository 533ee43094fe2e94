//! Tech Taxonomy: the read-only category-to-keyword table used
//! both to recognize technologies in résumé text and to group them for
//! reporting. Built once at startup, shared as `Arc<TechTaxonomy>` through
//! `AppState`, never mutated afterwards.

use std::collections::BTreeMap;

/// Category order matters: `categorize` assigns each technology to the
/// first category that contains it.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "python",
            "java",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "go",
            "rust",
        ],
    ),
    (
        "frameworks",
        &[
            "django", "flask", "spring", "react", "angular", "vue", "express", "rails",
            "laravel", "asp.net",
        ],
    ),
    (
        "databases",
        &[
            "mysql",
            "postgresql",
            "mongodb",
            "redis",
            "oracle",
            "sql server",
            "cassandra",
        ],
    ),
    ("cloud", &["aws", "azure", "gcp", "heroku", "digitalocean"]),
    (
        "tools",
        &["docker", "kubernetes", "jenkins", "git", "jira", "confluence"],
    ),
    (
        "ai_ml",
        &[
            "tensorflow",
            "pytorch",
            "scikit-learn",
            "pandas",
            "numpy",
            "keras",
        ],
    ),
];

pub struct TechTaxonomy {
    categories: Vec<(String, Vec<String>)>,
}

impl Default for TechTaxonomy {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, keywords)| {
                    (
                        name.to_string(),
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl TechTaxonomy {
    /// Categories in declaration order, with their canonical keywords.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
    }

    /// Groups a tech stack by taxonomy category for reporting.
    ///
    /// Each entry is matched case-insensitively and claimed by the first
    /// category (in taxonomy order) that contains it, so it appears in at
    /// most one group. Entries matching no category are omitted from the
    /// view; they remain in the original `tech_stack` untouched.
    pub fn categorize(&self, tech_stack: &[String]) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for tech in tech_stack {
            let needle = tech.to_lowercase();
            let claimed = self
                .categories
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|k| *k == needle));
            if let Some((category, _)) = claimed {
                grouped.entry(category.clone()).or_default().push(tech.clone());
            }
        }

        grouped
    }
}
