//! # Candidate Store
//!
//! The single in-memory collection of candidates.
//!
//! - Order is the seed order and never changes
//! - Ids are unique for the lifetime of the store
//! - `status` is the only field a store operation ever writes
//! - Every view (status buckets, rankings, the queue board) is a projection
//!   computed from this collection, never a copy that could drift

use crate::types::{Candidate, CandidateId, PipelineError, PipelineStatus, QueueColumn};
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of applying a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The candidate's status changed.
    Applied {
        from: PipelineStatus,
        to: PipelineStatus,
    },
    /// The candidate already had the target status. Nothing changed.
    Unchanged(PipelineStatus),
    /// No candidate has this id (stale reference). Nothing changed.
    UnknownCandidate,
}

impl TransitionOutcome {
    /// Whether the collection was modified.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }
}

/// Ordered, owned collection of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, PipelineError> {
        let mut seen = BTreeSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.id) {
                return Err(PipelineError::DuplicateId(candidate.id));
            }
        }
        Ok(Self { candidates })
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the store holds no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All candidates in seed order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a candidate by id.
    #[must_use]
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    /// Candidates with the given status, in seed order.
    #[must_use]
    pub fn list_by_status(&self, status: PipelineStatus) -> Vec<&Candidate> {
        self.candidates.iter().filter(|c| c.status == status).collect()
    }

    /// Number of candidates with the given status.
    #[must_use]
    pub fn count_by_status(&self, status: PipelineStatus) -> usize {
        self.candidates.iter().filter(|c| c.status == status).count()
    }

    /// Set the status of one candidate in place.
    ///
    /// An unknown id leaves the store untouched and reports
    /// [`TransitionOutcome::UnknownCandidate`]. Repeating a transition is
    /// harmless and reports [`TransitionOutcome::Unchanged`].
    pub fn apply_transition(&mut self, id: CandidateId, status: PipelineStatus) -> TransitionOutcome {
        let Some(candidate) = self.candidates.iter_mut().find(|c| c.id == id) else {
            return TransitionOutcome::UnknownCandidate;
        };

        let from = candidate.status;
        if from == status {
            return TransitionOutcome::Unchanged(from);
        }

        candidate.status = status;
        TransitionOutcome::Applied { from, to: status }
    }

    /// Pure form of [`apply_transition`](Self::apply_transition): return a
    /// new collection in which only the targeted record's status differs.
    #[must_use]
    pub fn transitioned(&self, id: CandidateId, status: PipelineStatus) -> Self {
        let mut next = self.clone();
        next.apply_transition(id, status);
        next
    }

    /// Project the queue board (every non-sourced candidate by column).
    #[must_use]
    pub fn board(&self) -> QueueBoard<'_> {
        QueueBoard::from_store(self)
    }
}

// =============================================================================
// QUEUE BOARD
// =============================================================================

/// One column of the queue board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    pub column: QueueColumn,
    pub candidates: Vec<&'a Candidate>,
}

impl BoardColumn<'_> {
    /// Column title, same as the status label.
    #[must_use]
    pub fn title(&self) -> &'static str {
        PipelineStatus::from(self.column).label()
    }
}

/// Kanban projection of the store: New Applications, Under Review, Scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueBoard<'a> {
    pub columns: [BoardColumn<'a>; 3],
}

impl<'a> QueueBoard<'a> {
    fn from_store(store: &'a CandidateStore) -> Self {
        Self {
            columns: QueueColumn::ALL.map(|column| BoardColumn {
                column,
                candidates: store.list_by_status(column.into()),
            }),
        }
    }

    /// Candidates in one column.
    #[must_use]
    pub fn column(&self, column: QueueColumn) -> &[&'a Candidate] {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.candidates.as_slice())
            .unwrap_or_default()
    }

    /// Which column a candidate is shown in, if it is on the board.
    #[must_use]
    pub fn locate(&self, id: CandidateId) -> Option<QueueColumn> {
        self.columns
            .iter()
            .find(|c| c.candidates.iter().any(|candidate| candidate.id == id))
            .map(|c| c.column)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AiScore, CandidateSource};

    fn make_candidate(id: u32, tenths: u8, status: PipelineStatus) -> Candidate {
        Candidate {
            id: CandidateId(id),
            name: format!("Candidate {id}"),
            designation: "Analyst".to_string(),
            email: format!("c{id}@example.com"),
            phone: "+971 50 000 0000".to_string(),
            source: CandidateSource::LinkedIn,
            ai_score: AiScore::from_tenths(tenths).expect("score"),
            status,
        }
    }

    fn make_store() -> CandidateStore {
        CandidateStore::new(vec![
            make_candidate(1, 90, PipelineStatus::Sourced),
            make_candidate(2, 80, PipelineStatus::NewApplications),
            make_candidate(3, 70, PipelineStatus::Scheduled),
        ])
        .expect("store")
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = CandidateStore::new(vec![
            make_candidate(4, 90, PipelineStatus::Sourced),
            make_candidate(4, 80, PipelineStatus::Sourced),
        ]);
        assert_eq!(result, Err(PipelineError::DuplicateId(CandidateId(4))));
    }

    #[test]
    fn apply_transition_changes_only_status() {
        let mut store = make_store();
        let before = store.clone();

        let outcome = store.apply_transition(CandidateId(1), PipelineStatus::NewApplications);
        assert_eq!(
            outcome,
            TransitionOutcome::Applied {
                from: PipelineStatus::Sourced,
                to: PipelineStatus::NewApplications
            }
        );

        for (old, new) in before.candidates().iter().zip(store.candidates()) {
            if old.id == CandidateId(1) {
                assert_eq!(new.status, PipelineStatus::NewApplications);
                assert_eq!(
                    Candidate { status: old.status, ..new.clone() },
                    old.clone()
                );
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn repeated_transition_is_unchanged() {
        let mut store = make_store();
        store.apply_transition(CandidateId(2), PipelineStatus::UnderReview);
        let once = store.clone();

        let outcome = store.apply_transition(CandidateId(2), PipelineStatus::UnderReview);
        assert_eq!(outcome, TransitionOutcome::Unchanged(PipelineStatus::UnderReview));
        assert_eq!(store, once);
    }

    #[test]
    fn unknown_id_is_noop() {
        let mut store = make_store();
        let before = store.clone();

        let outcome = store.apply_transition(CandidateId(99), PipelineStatus::Scheduled);
        assert_eq!(outcome, TransitionOutcome::UnknownCandidate);
        assert!(!outcome.is_applied());
        assert_eq!(store, before);
    }

    #[test]
    fn transitioned_leaves_original_untouched() {
        let store = make_store();
        let next = store.transitioned(CandidateId(3), PipelineStatus::NewApplications);

        assert_eq!(store.get(CandidateId(3)).expect("get").status, PipelineStatus::Scheduled);
        assert_eq!(
            next.get(CandidateId(3)).expect("get").status,
            PipelineStatus::NewApplications
        );
    }

    #[test]
    fn board_excludes_sourced() {
        let store = make_store();
        let board = store.board();

        assert_eq!(board.locate(CandidateId(1)), None);
        assert_eq!(board.locate(CandidateId(2)), Some(QueueColumn::NewApplications));
        assert_eq!(board.locate(CandidateId(3)), Some(QueueColumn::Scheduled));
        assert!(board.column(QueueColumn::UnderReview).is_empty());
        assert_eq!(board.columns[1].title(), "Under Review");
    }

    #[test]
    fn count_by_status_matches_list() {
        let store = make_store();
        for status in PipelineStatus::ALL {
            assert_eq!(store.count_by_status(status), store.list_by_status(status).len());
        }
    }
}
