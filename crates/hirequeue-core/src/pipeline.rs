//! # Pipeline Transition Engine
//!
//! Maps user and timer triggers to status transitions on the store.
//!
//! | Trigger | Expected from | To |
//! |---------|---------------|----|
//! | `AnalysisApproved` | Sourced | New Applications |
//! | `PromotedFromReview` | Sourced | New Applications |
//! | `ScreeningCompleted` | New Applications | Under Review |
//! | `InterviewScheduled` | New Applications | Scheduled |
//! | `FollowUpSent` | New Applications | Under Review |
//! | `Dragged(column)` | any | the column |
//!
//! The "expected from" column describes the usual flow only. No trigger is
//! rejected because of the candidate's current status: the queue board lets
//! users drag any card to any column, backwards included.

use crate::store::{CandidateStore, TransitionOutcome};
use crate::types::{CandidateId, PipelineStatus, QueueColumn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An event that moves one candidate to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// The analyzer placed the candidate in the auto-approved slice.
    AnalysisApproved,
    /// "Move to Next Level" on a human review card.
    PromotedFromReview,
    /// The screening dialogue reached its summary.
    ScreeningCompleted,
    /// "Schedule Interview" on the screening summary.
    InterviewScheduled,
    /// "Send Follow-Up" after the candidate could not be reached.
    FollowUpSent,
    /// Drag and drop onto a queue column.
    Dragged(QueueColumn),
}

impl Trigger {
    /// Status the candidate ends up in.
    #[must_use]
    pub fn target(&self) -> PipelineStatus {
        match self {
            Trigger::AnalysisApproved | Trigger::PromotedFromReview => {
                PipelineStatus::NewApplications
            }
            Trigger::ScreeningCompleted | Trigger::FollowUpSent => PipelineStatus::UnderReview,
            Trigger::InterviewScheduled => PipelineStatus::Scheduled,
            Trigger::Dragged(column) => (*column).into(),
        }
    }

    /// Status the trigger is normally fired from. `None` for drags.
    #[must_use]
    pub fn expected_from(&self) -> Option<PipelineStatus> {
        match self {
            Trigger::AnalysisApproved | Trigger::PromotedFromReview => {
                Some(PipelineStatus::Sourced)
            }
            Trigger::ScreeningCompleted | Trigger::InterviewScheduled | Trigger::FollowUpSent => {
                Some(PipelineStatus::NewApplications)
            }
            Trigger::Dragged(_) => None,
        }
    }

    /// Short machine name, used as a log field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::AnalysisApproved => "analysis_approved",
            Trigger::PromotedFromReview => "promoted_from_review",
            Trigger::ScreeningCompleted => "screening_completed",
            Trigger::InterviewScheduled => "interview_scheduled",
            Trigger::FollowUpSent => "follow_up_sent",
            Trigger::Dragged(_) => "dragged",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name(), self.target())
    }
}

/// Record of one fired trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRecord {
    pub candidate: CandidateId,
    pub trigger: Trigger,
    pub outcome: TransitionOutcome,
}

impl TransitionRecord {
    /// The candidate moved although its status was not the usual source
    /// status of the trigger (e.g. a repeated or out-of-order action).
    #[must_use]
    pub fn is_off_path(&self) -> bool {
        match (self.outcome, self.trigger.expected_from()) {
            (TransitionOutcome::Applied { from, .. }, Some(expected)) => from != expected,
            _ => false,
        }
    }
}

/// The PipelineEngine applies exactly one status mutation per trigger.
pub struct PipelineEngine;

impl PipelineEngine {
    /// Fire a trigger for one candidate.
    pub fn fire(store: &mut CandidateStore, id: CandidateId, trigger: Trigger) -> TransitionRecord {
        let outcome = store.apply_transition(id, trigger.target());
        TransitionRecord {
            candidate: id,
            trigger,
            outcome,
        }
    }

    /// Fire the same trigger for several candidates, in order.
    pub fn fire_all(
        store: &mut CandidateStore,
        ids: &[CandidateId],
        trigger: Trigger,
    ) -> Vec<TransitionRecord> {
        ids.iter()
            .map(|&id| Self::fire(store, id, trigger))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
