//! # Dashboard Errors

use crate::analyzer::AnalysisPhase;
use crate::auth::AuthError;
use crate::config::ConfigError;
use hirequeue_core::{CandidateId, DialogueError, PipelineError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Sign in required")]
    NotSignedIn,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Seed data error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Job description must be longer than {min} characters (got {actual})")]
    InvalidJobDescription { min: usize, actual: usize },

    #[error("An analysis is already running")]
    AnalysisInProgress,

    #[error("Analyzer is not accepting this action in phase {0:?}")]
    AnalyzerPhase(AnalysisPhase),

    #[error("Candidate {0} is not awaiting review")]
    NotUnderReview(CandidateId),

    #[error("Unknown candidate: {0}")]
    UnknownCandidate(CandidateId),

    #[error("Candidate {0} is not on the queue board")]
    NotOnBoard(CandidateId),

    #[error("No screening panel is open")]
    NoOpenPanel,

    #[error(transparent)]
    Dialogue(#[from] DialogueError),
}
