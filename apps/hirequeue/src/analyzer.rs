//! # Resume Analyzer
//!
//! The analyzer page: submit a job description, wait for the simulated
//! analysis, then work through the human review shortlist.
//!
//! ```text
//! Input --submit--> Analyzing --(analysis delay)--> Results
//! ```
//!
//! When the analysis fires, the sourced candidates are ranked against the
//! store as it is at that moment. The top slice moves to New Applications
//! right away; the review slice waits for "Move to Next Level" or "Skip".

use crate::dashboard::{Dashboard, DashboardHandle, DashboardLink};
use crate::error::{DashboardError, Result};
use crate::timer::ScheduledTask;
use hirequeue_core::{Candidate, CandidateId, TransitionRecord, Trigger};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    #[default]
    Input,
    Analyzing,
    Results,
}

/// What the recruiter hands to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDescription {
    /// Pasted text. Must be longer than the configured minimum.
    Text(String),
    /// An uploaded job description file. Always accepted.
    Upload { file_name: String },
}

/// Shortlist captured when the analysis fired, as ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    pub approved: Vec<Candidate>,
    pub for_review: Vec<Candidate>,
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug, Default)]
pub struct AnalyzerSession {
    epoch: u64,
    phase: AnalysisPhase,
    result: Option<AnalysisResult>,
    processed: BTreeSet<CandidateId>,
    success_notice: bool,
    timer: Option<ScheduledTask>,
}

impl AnalyzerSession {
    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Review candidates not yet promoted or skipped, in rank order.
    pub fn remaining_review(&self) -> Vec<&Candidate> {
        self.result
            .iter()
            .flat_map(|r| r.for_review.iter())
            .filter(|c| !self.processed.contains(&c.id))
            .collect()
    }

    /// True once results are in and no review card is left. This is where
    /// the queue is offered.
    pub fn all_reviewed(&self) -> bool {
        self.phase == AnalysisPhase::Results && self.remaining_review().is_empty()
    }

    pub fn is_processed(&self, id: CandidateId) -> bool {
        self.processed.contains(&id)
    }

    /// "Candidates moved to queue" banner, raised whenever an analysis
    /// finishes.
    pub fn success_notice(&self) -> bool {
        self.success_notice
    }
}

// =============================================================================
// DASHBOARD OPERATIONS
// =============================================================================

impl Dashboard {
    fn start_analysis(&mut self, job: JobDescription, link: DashboardLink) -> Result<()> {
        self.ensure_signed_in()?;

        match self.analyzer.phase {
            AnalysisPhase::Input => {}
            AnalysisPhase::Analyzing => return Err(DashboardError::AnalysisInProgress),
            phase @ AnalysisPhase::Results => return Err(DashboardError::AnalyzerPhase(phase)),
        }

        let min = self.config.screening.min_job_description_chars;
        if let JobDescription::Text(text) = &job {
            let actual = text.chars().count();
            if actual <= min {
                return Err(DashboardError::InvalidJobDescription { min, actual });
            }
        }

        let epoch = self.next_epoch();
        let delay = self.config.timing.analysis_delay();
        self.analyzer = AnalyzerSession {
            epoch,
            phase: AnalysisPhase::Analyzing,
            timer: Some(ScheduledTask::after(delay, analysis_fired(link, epoch))),
            ..AnalyzerSession::default()
        };

        match &job {
            JobDescription::Text(_) => {
                tracing::info!(event = "analysis_started", source = "text", "Analyzing resumes");
            }
            JobDescription::Upload { file_name } => {
                tracing::info!(
                    event = "analysis_started",
                    source = "upload",
                    file_name = %file_name,
                    "Analyzing resumes"
                );
            }
        }
        Ok(())
    }

    fn complete_analysis(&mut self, epoch: u64) {
        if self.analyzer.epoch != epoch || self.analyzer.phase != AnalysisPhase::Analyzing {
            tracing::debug!(event = "analysis_stale", epoch, "Ignoring dismissed analysis");
            return;
        }
        if let Some(timer) = self.analyzer.timer.take() {
            timer.detach();
        }

        let result = {
            let shortlist = self.config.ranking_policy().shortlist(self.store.candidates());
            AnalysisResult {
                approved: shortlist.approved.into_iter().cloned().collect(),
                for_review: shortlist.for_review.into_iter().cloned().collect(),
            }
        };

        for candidate in &result.approved {
            self.fire(candidate.id, Trigger::AnalysisApproved);
        }

        tracing::info!(
            event = "analysis_completed",
            approved = result.approved.len(),
            for_review = result.for_review.len(),
            "Analysis finished"
        );

        self.analyzer.phase = AnalysisPhase::Results;
        self.analyzer.success_notice = true;
        self.analyzer.result = Some(result);
    }

    fn ensure_results(&self) -> Result<()> {
        self.ensure_signed_in()?;
        match self.analyzer.phase {
            AnalysisPhase::Results => Ok(()),
            phase => Err(DashboardError::AnalyzerPhase(phase)),
        }
    }

    fn move_to_next_level(&mut self, id: CandidateId) -> Result<TransitionRecord> {
        self.ensure_results()?;
        // Only unprocessed review cards carry the button.
        if !self.analyzer.remaining_review().iter().any(|c| c.id == id) {
            return Err(DashboardError::NotUnderReview(id));
        }
        let record = self.fire(id, Trigger::PromotedFromReview);
        self.analyzer.processed.insert(id);
        Ok(record)
    }

    fn skip_remaining(&mut self) -> Result<usize> {
        self.ensure_results()?;
        let skipped: Vec<CandidateId> = self
            .analyzer
            .remaining_review()
            .iter()
            .map(|c| c.id)
            .collect();

        self.analyzer.processed.extend(skipped.iter().copied());
        tracing::info!(event = "review_skipped", count = skipped.len(), "Skipped remaining reviews");
        Ok(skipped.len())
    }

    /// Drop the session and any pending analysis.
    pub(crate) fn reset_analyzer(&mut self) {
        if let Some(mut timer) = self.analyzer.timer.take() {
            timer.cancel();
        }
        let epoch = self.next_epoch();
        self.analyzer = AnalyzerSession {
            epoch,
            ..AnalyzerSession::default()
        };
    }
}

async fn analysis_fired(link: DashboardLink, epoch: u64) {
    let Some(inner) = link.upgrade() else {
        return;
    };
    inner.write().await.complete_analysis(epoch);
}

// =============================================================================
// HANDLE OPERATIONS
// =============================================================================

impl DashboardHandle {
    /// Start an analysis. Results arrive after the configured delay.
    pub async fn submit_job_description(&self, job: JobDescription) -> Result<()> {
        let link = self.link();
        self.write().await.start_analysis(job, link)
    }

    /// "Move to Next Level" on a review card.
    pub async fn move_to_next_level(&self, id: CandidateId) -> Result<TransitionRecord> {
        self.write().await.move_to_next_level(id)
    }

    /// "Skip" the remaining review cards. Statuses stay as they are.
    pub async fn skip_remaining(&self) -> Result<usize> {
        self.write().await.skip_remaining()
    }

    pub async fn dismiss_success_notice(&self) {
        self.write().await.analyzer.success_notice = false;
    }

    /// Cancel a running analysis or clear results, back to the input phase.
    pub async fn reset_analyzer(&self) {
        self.write().await.reset_analyzer();
    }
}
