//! # Meeting Details
//!
//! Interview card shown for a candidate in `Scheduled`. The meeting is
//! simulated: every scheduled candidate gets the same fixed slot.

use crate::types::{Candidate, CandidateId, PipelineStatus};
use serde::Serialize;

/// Meeting link attached to every simulated interview.
pub const MEETING_LINK: &str = "https://meet.google.com/xyz-abc-def";

/// Slot label of every simulated interview.
pub const MEETING_SLOT: &str = "Tomorrow, 11:30 AM";

/// Interview length in minutes.
pub const MEETING_DURATION_MINUTES: u16 = 45;

/// Panel of every simulated interview.
pub const INTERVIEWERS: [&str; 2] = ["Sarah Chen (Hiring Manager)", "Tom Evans (Team Lead)"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingDetails {
    pub candidate: CandidateId,
    pub title: String,
    pub designation: String,
    pub slot: &'static str,
    pub duration_minutes: u16,
    pub interviewers: [&'static str; 2],
    pub link: &'static str,
}

impl MeetingDetails {
    /// Meeting card for a scheduled candidate, `None` for any other status.
    #[must_use]
    pub fn for_candidate(candidate: &Candidate) -> Option<Self> {
        if candidate.status != PipelineStatus::Scheduled {
            return None;
        }

        Some(Self {
            candidate: candidate.id,
            title: format!("Interview with {}", candidate.name),
            designation: candidate.designation.clone(),
            slot: MEETING_SLOT,
            duration_minutes: MEETING_DURATION_MINUTES,
            interviewers: INTERVIEWERS,
            link: MEETING_LINK,
        })
    }

    /// Interviewers joined for display.
    #[must_use]
    pub fn interviewer_line(&self) -> String {
        self.interviewers.join(", ")
    }
}
