//! # Screening Panel
//!
//! Runtime side of the queue board's candidate modal.
//!
//! Opening a scheduled candidate shows the meeting card. Opening any other
//! board candidate starts a scripted screening: after the typing delay the
//! answer appears, after the advance delay the next question is asked, and
//! after the last answer the dialogue reaches its summary. The employer then
//! schedules an interview or drafts a follow-up.
//!
//! The panel owns its pending timer. Closing the panel, opening another
//! candidate or leaving the queue page drops it, and a callback that wakes
//! up for an older epoch does nothing.

use crate::dashboard::{Dashboard, DashboardHandle, DashboardLink};
use crate::error::{DashboardError, Result};
use crate::timer::ScheduledTask;
use hirequeue_core::{
    Candidate, CandidateId, DialoguePhase, DialogueStep, EmployerAction, FollowUpMessage,
    MeetingDetails, PipelineStatus, ScreeningDialogue, ScreeningScript, ScreeningSummary,
    TransitionRecord, Trigger,
};

/// What opening a queue card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueSelection {
    Screening {
        candidate: CandidateId,
        script: ScreeningScript,
    },
    Meeting(MeetingDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelStep {
    Reveal,
    Advance,
}

#[derive(Debug)]
pub struct ScreeningPanel {
    epoch: u64,
    candidate: Candidate,
    dialogue: ScreeningDialogue,
    timer: Option<ScheduledTask>,
}

impl ScreeningPanel {
    /// The candidate as it was when the panel opened.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn dialogue(&self) -> &ScreeningDialogue {
        &self.dialogue
    }

    pub fn phase(&self) -> DialoguePhase {
        self.dialogue.phase()
    }

    /// "Candidate is speaking..." indicator.
    pub fn is_typing(&self) -> bool {
        matches!(
            self.dialogue.phase(),
            DialoguePhase::Screening {
                answer_revealed: false,
                ..
            }
        )
    }

    pub fn summary(&self) -> Option<ScreeningSummary> {
        match self.dialogue.phase() {
            DialoguePhase::Summary | DialoguePhase::FollowUp => Some(self.dialogue.summary()),
            _ => None,
        }
    }

    /// Follow-up draft, shown after "No Answer".
    pub fn follow_up(&self) -> Option<FollowUpMessage> {
        (self.dialogue.phase() == DialoguePhase::FollowUp)
            .then(|| FollowUpMessage::compose(&self.candidate))
    }

    fn schedule(&mut self, link: DashboardLink, step: PanelStep, delay: std::time::Duration) {
        let task = ScheduledTask::after(delay, panel_step_fired(link, self.epoch, step));
        // Replaced from inside the firing callback: let the old task finish.
        if let Some(previous) = self.timer.replace(task) {
            previous.detach();
        }
    }
}

// =============================================================================
// DASHBOARD OPERATIONS
// =============================================================================

impl Dashboard {
    fn open_candidate(&mut self, id: CandidateId, link: DashboardLink) -> Result<QueueSelection> {
        self.ensure_signed_in()?;
        let candidate = self
            .store
            .get(id)
            .cloned()
            .ok_or(DashboardError::UnknownCandidate(id))?;

        if candidate.status == PipelineStatus::Sourced {
            return Err(DashboardError::NotOnBoard(id));
        }

        self.close_panel();

        if let Some(meeting) = MeetingDetails::for_candidate(&candidate) {
            return Ok(QueueSelection::Meeting(meeting));
        }

        let dialogue = ScreeningDialogue::new(&candidate);
        let script = dialogue.script();
        let mut panel = ScreeningPanel {
            epoch: self.next_epoch(),
            candidate,
            dialogue,
            timer: None,
        };
        panel.schedule(link, PanelStep::Reveal, self.config.timing.typing_delay());
        self.panel = Some(panel);

        tracing::info!(
            event = "screening_started",
            candidate_id = id.0,
            script = ?script,
            "Screening panel opened"
        );
        Ok(QueueSelection::Screening {
            candidate: id,
            script,
        })
    }

    fn run_panel_step(&mut self, epoch: u64, step: PanelStep, link: DashboardLink) {
        let typing = self.config.timing.typing_delay();
        let advance = self.config.timing.advance_delay();

        let Some(panel) = self.panel.as_mut().filter(|p| p.epoch == epoch) else {
            tracing::debug!(event = "screening_stale", epoch, "Ignoring dismissed panel");
            return;
        };

        let result = match step {
            PanelStep::Reveal => panel.dialogue.reveal_answer(),
            PanelStep::Advance => panel.dialogue.advance(),
        };

        let completed = match result {
            Ok(DialogueStep::AnswerRevealed { .. }) => {
                panel.schedule(link, PanelStep::Advance, advance);
                None
            }
            Ok(DialogueStep::NextQuestion { .. }) => {
                panel.schedule(link, PanelStep::Reveal, typing);
                None
            }
            Ok(DialogueStep::Completed) => {
                if let Some(timer) = panel.timer.take() {
                    timer.detach();
                }
                Some(panel.dialogue.candidate())
            }
            Err(err) => {
                tracing::warn!(event = "screening_step_rejected", error = %err, "Screening step out of order");
                None
            }
        };

        if let Some(id) = completed {
            tracing::info!(event = "screening_completed", candidate_id = id.0, "Screening summary ready");
            if self.config.screening.promote_on_completion {
                self.fire(id, Trigger::ScreeningCompleted);
            }
        }
    }

    fn employer_action(&mut self, action: EmployerAction) -> Result<Option<TransitionRecord>> {
        self.ensure_signed_in()?;
        let panel = self.panel.as_mut().ok_or(DashboardError::NoOpenPanel)?;
        let id = panel.dialogue.candidate();

        match panel.dialogue.act(action)? {
            Some(trigger) => {
                let record = self.fire(id, trigger);
                self.close_panel();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Dismiss the panel. Dropping it aborts any pending step.
    pub(crate) fn close_panel(&mut self) {
        if let Some(panel) = self.panel.take() {
            tracing::debug!(
                event = "screening_closed",
                candidate_id = panel.candidate.id.0,
                "Screening panel closed"
            );
        }
    }
}

async fn panel_step_fired(link: DashboardLink, epoch: u64, step: PanelStep) {
    let Some(inner) = link.upgrade() else {
        return;
    };
    let next = std::sync::Arc::downgrade(&inner);
    inner.write().await.run_panel_step(epoch, step, next);
}

// =============================================================================
// HANDLE OPERATIONS
// =============================================================================

impl DashboardHandle {
    /// Open a queue card: the meeting card for a scheduled candidate, the
    /// screening panel otherwise.
    pub async fn open_candidate(&self, id: CandidateId) -> Result<QueueSelection> {
        let link = self.link();
        self.write().await.open_candidate(id, link)
    }

    /// Apply an employer action on the open panel. Returns the transition
    /// when the action moved the candidate; the panel closes in that case.
    pub async fn employer_action(&self, action: EmployerAction) -> Result<Option<TransitionRecord>> {
        self.write().await.employer_action(action)
    }

    pub async fn close_panel(&self) {
        self.write().await.close_panel();
    }
}
