//! # Core Type Definitions
//!
//! This module contains all core types for the HireQueue candidate pipeline:
//! - Candidate identity and record (`CandidateId`, `Candidate`)
//! - Closed enumerations (`CandidateSource`, `PipelineStatus`, `QueueColumn`)
//! - Score representation (`AiScore`, `ScoreBand`)
//! - Error types (`PipelineError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (scores are stored in tenths)
//! - Implement `Ord` where they are used as sort or map keys
//! - Are write-once except for `Candidate::status`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier of a candidate, assigned in the seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// CANDIDATE SOURCE
// =============================================================================

/// Where a candidate profile was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateSource {
    #[serde(rename = "LinkedIn")]
    LinkedIn,
    #[serde(rename = "Naukri Gulf")]
    NaukriGulf,
    #[serde(rename = "Timeless DB")]
    TimelessDb,
}

impl CandidateSource {
    /// Label shown on candidate cards.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CandidateSource::LinkedIn => "LinkedIn",
            CandidateSource::NaukriGulf => "Naukri Gulf",
            CandidateSource::TimelessDb => "Timeless DB",
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// PIPELINE STATUS
// =============================================================================

/// Pipeline stage of a candidate. The only mutable field of a [`Candidate`].
///
/// | Status | Meaning |
/// |--------|---------|
/// | `Sourced` | Seeded, not yet analysed |
/// | `NewApplications` | Approved by analysis, pending AI screening |
/// | `UnderReview` | AI screened, awaiting an employer decision |
/// | `Scheduled` | Interview confirmed |
///
/// No status is terminal: a drag on the queue board can move a candidate
/// between any two queue columns, backwards included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PipelineStatus {
    #[serde(rename = "Sourced")]
    Sourced,
    #[serde(rename = "New Applications")]
    NewApplications,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Scheduled")]
    Scheduled,
}

impl PipelineStatus {
    /// All statuses in pipeline order.
    pub const ALL: [PipelineStatus; 4] = [
        PipelineStatus::Sourced,
        PipelineStatus::NewApplications,
        PipelineStatus::UnderReview,
        PipelineStatus::Scheduled,
    ];

    /// Get the status name as shown on the dashboard.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStatus::Sourced => "Sourced",
            PipelineStatus::NewApplications => "New Applications",
            PipelineStatus::UnderReview => "Under Review",
            PipelineStatus::Scheduled => "Scheduled",
        }
    }

    /// The queue column this status is displayed in, if any.
    ///
    /// Sourced candidates live on the analyzer page, not on the board.
    #[must_use]
    pub fn column(&self) -> Option<QueueColumn> {
        match self {
            PipelineStatus::Sourced => None,
            PipelineStatus::NewApplications => Some(QueueColumn::NewApplications),
            PipelineStatus::UnderReview => Some(QueueColumn::UnderReview),
            PipelineStatus::Scheduled => Some(QueueColumn::Scheduled),
        }
    }
}

impl fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A column of the queue board, i.e. a valid drop target for a drag.
///
/// Dragging into `Sourced` is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QueueColumn {
    NewApplications,
    UnderReview,
    Scheduled,
}

impl QueueColumn {
    /// Board columns, left to right.
    pub const ALL: [QueueColumn; 3] = [
        QueueColumn::NewApplications,
        QueueColumn::UnderReview,
        QueueColumn::Scheduled,
    ];

    /// Caption printed under the column title.
    #[must_use]
    pub fn caption(&self) -> &'static str {
        match self {
            QueueColumn::NewApplications => "Pending AI screening",
            QueueColumn::UnderReview => "AI screened • Awaiting decision",
            QueueColumn::Scheduled => "Interview confirmed",
        }
    }
}

impl From<QueueColumn> for PipelineStatus {
    fn from(column: QueueColumn) -> Self {
        match column {
            QueueColumn::NewApplications => PipelineStatus::NewApplications,
            QueueColumn::UnderReview => PipelineStatus::UnderReview,
            QueueColumn::Scheduled => PipelineStatus::Scheduled,
        }
    }
}

// =============================================================================
// AI SCORE
// =============================================================================

/// Lowest accepted score, in tenths (1.0).
pub const MIN_SCORE_TENTHS: u8 = 10;

/// Highest accepted score, in tenths (10.0).
pub const MAX_SCORE_TENTHS: u8 = 100;

/// Static fit score in `[1.0, 10.0]`, fixed at seed time.
///
/// Stored as integer tenths (`8.7` is `87`) so ordering and banding never
/// touch floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AiScore(u8);

impl AiScore {
    /// Create a score from tenths. Returns `None` outside `10..=100`.
    #[must_use]
    pub const fn from_tenths(tenths: u8) -> Option<Self> {
        if tenths >= MIN_SCORE_TENTHS && tenths <= MAX_SCORE_TENTHS {
            Some(Self(tenths))
        } else {
            None
        }
    }

    /// Raw value in tenths.
    #[must_use]
    pub const fn tenths(self) -> u8 {
        self.0
    }

    /// Colour band used by the dashboard badges.
    #[must_use]
    pub fn band(self) -> ScoreBand {
        match self.0 {
            90..=u8::MAX => ScoreBand::Excellent,
            80..=89 => ScoreBand::Strong,
            70..=79 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }
}

impl TryFrom<u8> for AiScore {
    type Error = PipelineError;

    fn try_from(tenths: u8) -> Result<Self, Self::Error> {
        Self::from_tenths(tenths).ok_or_else(|| PipelineError::ScoreOutOfRange(tenths.to_string()))
    }
}

impl From<AiScore> for u8 {
    fn from(score: AiScore) -> Self {
        score.0
    }
}

impl FromStr for AiScore {
    type Err = PipelineError;

    /// Parse a decimal score such as `"8.7"`, `"9"` or `"7.50"`.
    ///
    /// At most one significant fractional digit is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::ScoreOutOfRange(s.to_string());
        let trimmed = s.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (trimmed, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut digits = fraction.bytes();
        let tenth = digits.next().map_or(0, |b| b - b'0');
        if digits.any(|b| b != b'0') {
            return Err(invalid());
        }

        let whole: u16 = whole.parse().map_err(|_| invalid())?;
        let tenths = whole.saturating_mul(10).saturating_add(u16::from(tenth));
        u8::try_from(tenths)
            .ok()
            .and_then(Self::from_tenths)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for AiScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Score colour bands: `>= 9.0`, `>= 8.0`, `>= 7.0`, below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    Weak,
    Fair,
    Strong,
    Excellent,
}

// =============================================================================
// CANDIDATE
// =============================================================================

/// A single applicant tracked through the pipeline.
///
/// Every field except `status` is write-once. Construct through the seed
/// loader; the status is changed only by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub designation: String,
    pub email: String,
    pub phone: String,
    pub source: CandidateSource,
    pub ai_score: AiScore,
    pub status: PipelineStatus,
}

impl Candidate {
    /// First word of the name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the HireQueue core.
///
/// Only seed loading can fail. Pipeline transitions never fail: a stale id is
/// reported as an outcome, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The seed document is not valid JSON or not a list of records.
    #[error("Seed format error: {0}")]
    SeedFormat(String),

    /// A seed record lacks a required field (or has it empty).
    #[error("Candidate record {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// A score outside `[1.0, 10.0]` or with more than one decimal.
    #[error("AI score out of range: {0}")]
    ScoreOutOfRange(String),

    /// Two seed records share an id.
    #[error("Duplicate candidate id: {0}")]
    DuplicateId(CandidateId),
}

// =============================================================================
// TESTS
// =============================================================================
