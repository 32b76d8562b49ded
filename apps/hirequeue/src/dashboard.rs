//! # Dashboard State
//!
//! The one shared, mutable piece of the runtime.
//!
//! `Dashboard` owns the candidate store together with the sign-in flag, the
//! current page and the two timer-driven views (analyzer session and
//! screening panel). It is shared as a `DashboardHandle` around
//! `Arc<RwLock<Dashboard>>`: every user event and every timer callback takes
//! the write lock, read-modify-writes and releases it. The tokio lock is
//! fair, so events apply in the order they arrive.
//!
//! Timer callbacks hold only a `Weak` link to the dashboard. A callback that
//! outlives the dashboard, or whose view epoch no longer matches, does
//! nothing.

use crate::analyzer::AnalyzerSession;
use crate::auth;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::screening::ScreeningPanel;
use hirequeue_core::{
    Candidate, CandidateId, CandidateStore, PipelineEngine, PipelineStatus, QueueBoard,
    QueueColumn, TransitionOutcome, TransitionRecord, Trigger, default_store,
};
use std::sync::{Arc, Weak};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Link held by timer callbacks.
pub(crate) type DashboardLink = Weak<RwLock<Dashboard>>;

// =============================================================================
// PAGES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    SignIn,
    Landing,
    Analyzer,
    Queue,
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Debug)]
pub struct Dashboard {
    pub(crate) config: DashboardConfig,
    pub(crate) store: CandidateStore,
    authenticated: bool,
    page: Page,
    pub(crate) analyzer: AnalyzerSession,
    pub(crate) panel: Option<ScreeningPanel>,
    epoch: u64,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, store: CandidateStore) -> Self {
        Self {
            config,
            store,
            authenticated: false,
            page: Page::SignIn,
            analyzer: AnalyzerSession::default(),
            panel: None,
            epoch: 0,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Candidates with the given status, in seed order.
    pub fn list_by_status(&self, status: PipelineStatus) -> Vec<&Candidate> {
        self.store.list_by_status(status)
    }

    pub fn board(&self) -> QueueBoard<'_> {
        self.store.board()
    }

    pub fn analyzer(&self) -> &AnalyzerSession {
        &self.analyzer
    }

    /// The open screening panel, if any.
    pub fn panel(&self) -> Option<&ScreeningPanel> {
        self.panel.as_ref()
    }

    /// Fresh epoch for a view that is being (re)started or dismissed.
    pub(crate) fn next_epoch(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    pub(crate) fn ensure_signed_in(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(DashboardError::NotSignedIn)
        }
    }

    /// Fire one trigger against the store and log the outcome.
    pub(crate) fn fire(&mut self, id: CandidateId, trigger: Trigger) -> TransitionRecord {
        let record = PipelineEngine::fire(&mut self.store, id, trigger);
        log_transition(&record);
        record
    }

    fn sign_in(&mut self, username: &str, password: &str) -> Result<()> {
        auth::verify_credentials(&self.config.auth, username, password)?;
        self.authenticated = true;
        self.page = Page::Landing;
        Ok(())
    }

    fn navigate(&mut self, page: Page) -> bool {
        if !self.authenticated {
            tracing::debug!(event = "navigation_ignored", page = ?page, "Not signed in");
            return false;
        }

        // Leaving a page tears its view down, pending timers included.
        if self.page != page {
            match self.page {
                Page::Analyzer => self.reset_analyzer(),
                Page::Queue => self.close_panel(),
                Page::SignIn | Page::Landing => {}
            }
        }

        self.page = page;
        true
    }

    fn drag(&mut self, id: CandidateId, column: QueueColumn) -> Result<TransitionRecord> {
        self.ensure_signed_in()?;
        Ok(self.fire(id, Trigger::Dragged(column)))
    }
}

fn log_transition(record: &TransitionRecord) {
    let candidate_id = record.candidate.0;
    let trigger = record.trigger.name();

    match record.outcome {
        TransitionOutcome::Applied { from, to } => {
            if record.is_off_path() {
                tracing::debug!(
                    event = "off_path_transition",
                    candidate_id,
                    trigger,
                    from = %from,
                    "Trigger fired outside its usual source status"
                );
            }
            tracing::info!(
                event = "transition",
                candidate_id,
                trigger,
                from = %from,
                status = %to,
                "Candidate moved"
            );
        }
        TransitionOutcome::Unchanged(status) => {
            tracing::debug!(
                event = "transition_unchanged",
                candidate_id,
                trigger,
                status = %status,
                "Candidate already in target status"
            );
        }
        TransitionOutcome::UnknownCandidate => {
            tracing::warn!(
                event = "stale_reference",
                candidate_id,
                trigger,
                "Ignoring transition for unknown candidate"
            );
        }
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Cloneable handle to the shared dashboard.
#[derive(Debug, Clone)]
pub struct DashboardHandle {
    inner: Arc<RwLock<Dashboard>>,
}

impl DashboardHandle {
    pub fn new(config: DashboardConfig, store: CandidateStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Dashboard::new(config, store))),
        }
    }

    /// Dashboard over the built-in seed candidates.
    pub fn with_default_seed(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config, default_store()?))
    }

    /// Shared read access for rendering.
    pub async fn read(&self) -> RwLockReadGuard<'_, Dashboard> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Dashboard> {
        self.inner.write().await
    }

    pub(crate) fn link(&self) -> DashboardLink {
        Arc::downgrade(&self.inner)
    }

    /// Check credentials; on success the dashboard opens the Landing page.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<()> {
        self.write().await.sign_in(username, password)
    }

    /// Switch pages. Returns `false` (and stays put) until signed in.
    pub async fn navigate(&self, page: Page) -> bool {
        self.write().await.navigate(page)
    }

    /// Owned copies of the candidates with the given status.
    pub async fn list_by_status(&self, status: PipelineStatus) -> Vec<Candidate> {
        self.read()
            .await
            .list_by_status(status)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Drop a card onto a queue column. Any column is accepted, backwards
    /// included; an unknown id is a logged no-op.
    pub async fn drag(&self, id: CandidateId, column: QueueColumn) -> Result<TransitionRecord> {
        self.write().await.drag(id, column)
    }
}

// =============================================================================
// TESTS
// =============================================================================
