//! # hirequeue-core
//!
//! The deterministic candidate pipeline for HireQueue - THE LOGIC.
//!
//! This crate holds everything about the recruitment dashboard that is not
//! timing or presentation:
//! - `types`: candidate record, closed status/source enums, integer scores
//! - `store`: the single ordered candidate collection and its projections
//! - `ranking`: score ranking and the approved/review shortlist
//! - `pipeline`: triggers and the transition engine
//! - `screening`: the scripted screening dialogue state machine
//! - `meeting`: the simulated interview card
//! - `seed`: the static seed document and its validation
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Has NO async, NO timers, NO logging dependency
//! - Never initiates anything; the runtime fires triggers and steps
//! - Reports stale references as outcomes instead of errors

// =============================================================================
// MODULES
// =============================================================================

pub mod meeting;
pub mod pipeline;
pub mod ranking;
pub mod screening;
pub mod seed;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AiScore, Candidate, CandidateId, CandidateSource, PipelineError, PipelineStatus, QueueColumn,
    ScoreBand,
};

// =============================================================================
// RE-EXPORTS: Pipeline
// =============================================================================

pub use pipeline::{PipelineEngine, TransitionRecord, Trigger};
pub use ranking::{RankingPolicy, Shortlist, partition_top, rank_sourced};
pub use store::{BoardColumn, CandidateStore, QueueBoard, TransitionOutcome};

// =============================================================================
// RE-EXPORTS: Screening & Meetings
// =============================================================================

pub use meeting::MeetingDetails;
pub use screening::{
    DialogueError, DialoguePhase, DialogueStep, EmployerAction, FollowUpMessage,
    ScreeningDialogue, ScreeningScript, ScreeningSummary, SkillAssessment,
};

// =============================================================================
// RE-EXPORTS: Seed
// =============================================================================

pub use seed::{default_store, load_seed};
