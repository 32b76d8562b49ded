//! # Seed Data
//!
//! Loads the static candidate list the dashboard starts with.
//!
//! Seed loading is the only fallible step of the core and it fails fast:
//! a record with a missing or empty field, a score outside `[1.0, 10.0]`,
//! an unknown source or status, or a duplicate id rejects the whole document.

use crate::store::CandidateStore;
use crate::types::{AiScore, Candidate, CandidateId, CandidateSource, PipelineError, PipelineStatus};
use serde::Deserialize;

/// The built-in seed document.
pub const DEFAULT_SEED: &str = include_str!("../data/candidates.json");

/// A seed record as written in the document. Every field is optional here so
/// that a missing one is reported by name rather than as a parse error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedRecord {
    id: Option<u32>,
    name: Option<String>,
    designation: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    source: Option<CandidateSource>,
    ai_score: Option<serde_json::Number>,
    status: Option<PipelineStatus>,
}

impl SeedRecord {
    fn into_candidate(self, index: usize) -> Result<Candidate, PipelineError> {
        let text = |value: Option<String>, field: &'static str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or(PipelineError::MissingField { index, field })
        };
        let missing = |field: &'static str| PipelineError::MissingField { index, field };

        let id = self.id.ok_or_else(|| missing("id"))?;
        let ai_score: AiScore = self
            .ai_score
            .ok_or_else(|| missing("ai_score"))?
            .to_string()
            .parse()?;

        Ok(Candidate {
            id: CandidateId(id),
            name: text(self.name, "name")?,
            designation: text(self.designation, "designation")?,
            email: text(self.email, "email")?,
            phone: text(self.phone, "phone")?,
            source: self.source.ok_or_else(|| missing("source"))?,
            ai_score,
            // Seed candidates start at the beginning of the pipeline.
            status: self.status.unwrap_or(PipelineStatus::Sourced),
        })
    }
}

/// Parse and validate a seed document (a JSON array of candidate records).
pub fn load_seed(json: &str) -> Result<CandidateStore, PipelineError> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(json).map_err(|e| PipelineError::SeedFormat(e.to_string()))?;

    let candidates = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_candidate(index))
        .collect::<Result<Vec<_>, _>>()?;

    CandidateStore::new(candidates)
}

/// Load the built-in seed document.
pub fn default_store() -> Result<CandidateStore, PipelineError> {
    load_seed(DEFAULT_SEED)
}

// =============================================================================
// TESTS
// =============================================================================
