//! Candidate store: one pretty-printed JSON file per candidate, named by
//! candidate ID, under a directory created at startup. Writes go through a
//! scoped, buffered handle with an explicit flush; the handle is released
//! on every exit path. Each write targets a distinct ID-named file, so no
//! cross-write locking is needed. I/O failures propagate to the caller;
//! nothing is retried here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::models::candidate::AnonymizedProfile;

const FILE_SUFFIX: &str = "_anonymized.json";

#[derive(Debug, Clone)]
pub struct CandidateStore {
    dir: PathBuf,
}

impl CandidateStore {
    /// Opens the store, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create candidate directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Persists an anonymized profile and returns the file it landed in.
    pub fn save(&self, profile: &AnonymizedProfile) -> Result<PathBuf> {
        let path = self.record_path(&profile.candidate_id);

        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, profile)
            .with_context(|| format!("failed to encode candidate record {}", profile.candidate_id))?;
        writer
            .flush()
            .with_context(|| format!("failed to flush {}", path.display()))?;

        info!(candidate_id = %profile.candidate_id, path = %path.display(), "candidate record persisted");
        Ok(path)
    }

    /// Reads a persisted record back, `None` when no such candidate exists.
    pub fn load(&self, candidate_id: &str) -> Result<Option<AnonymizedProfile>> {
        let path = self.record_path(candidate_id);
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let profile = serde_json::from_reader(file)
            .with_context(|| format!("corrupt candidate record {}", path.display()))?;
        Ok(Some(profile))
    }

    /// IDs of every stored candidate, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)
            .with_context(|| format!("failed to read {}", self.dir.display()))?
        {
            let name = entry?.file_name();
            if let Some(id) = name.to_str().and_then(|n| n.strip_suffix(FILE_SUFFIX)) {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn record_path(&self, candidate_id: &str) -> PathBuf {
        self.dir.join(format!("{candidate_id}{FILE_SUFFIX}"))
    }
}
