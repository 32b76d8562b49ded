//! # Property-Based Tests
//!
//! Ranking, partition and transition invariants checked with proptest.

use hirequeue_core::types::{MAX_SCORE_TENTHS, MIN_SCORE_TENTHS};
use hirequeue_core::{
    AiScore, Candidate, CandidateId, CandidateSource, CandidateStore, PipelineStatus,
    TransitionOutcome, partition_top, rank_sourced,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn status_strategy() -> impl Strategy<Value = PipelineStatus> {
    prop_oneof![
        Just(PipelineStatus::Sourced),
        Just(PipelineStatus::NewApplications),
        Just(PipelineStatus::UnderReview),
        Just(PipelineStatus::Scheduled),
    ]
}

/// Stores of up to 40 candidates with ids 1..=n and arbitrary scores/statuses.
fn store_strategy() -> impl Strategy<Value = CandidateStore> {
    vec((MIN_SCORE_TENTHS..=MAX_SCORE_TENTHS, status_strategy()), 0..40).prop_map(|rows| {
        let candidates = rows
            .into_iter()
            .zip(1u32..)
            .map(|((tenths, status), id)| Candidate {
                id: CandidateId(id),
                name: format!("Candidate {id}"),
                designation: "Engineer".to_string(),
                email: format!("c{id}@example.com"),
                phone: "000".to_string(),
                source: CandidateSource::LinkedIn,
                ai_score: AiScore::from_tenths(tenths).expect("score in range"),
                status,
            })
            .collect();
        CandidateStore::new(candidates).expect("unique ids")
    })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// After a transition to S the candidate is in bucket S and in no other.
    #[test]
    fn transition_lands_in_exactly_one_bucket(
        store in store_strategy(),
        pick in any::<prop::sample::Index>(),
        target in status_strategy(),
    ) {
        prop_assume!(!store.is_empty());
        let id = store.candidates()[pick.index(store.len())].id;
        let next = store.transitioned(id, target);

        for status in PipelineStatus::ALL {
            let holds = next.list_by_status(status).iter().any(|c| c.id == id);
            prop_assert_eq!(holds, status == target);
        }
    }

    /// Ranking is descending and stable: equal scores keep seed order.
    #[test]
    fn ranking_descending_and_stable(store in store_strategy()) {
        let ranked = rank_sourced(store.candidates());

        prop_assert!(ranked.iter().all(|c| c.status == PipelineStatus::Sourced));
        prop_assert_eq!(ranked.len(), store.count_by_status(PipelineStatus::Sourced));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].ai_score >= pair[1].ai_score);
            if pair[0].ai_score == pair[1].ai_score {
                // Ids follow seed order in this strategy.
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Partition sizes are min(top, n) and min(review, n - top), disjoint.
    #[test]
    fn partition_sizes_and_disjointness(
        store in store_strategy(),
        top_n in 0usize..10,
        review_n in 0usize..10,
    ) {
        let ranked = rank_sourced(store.candidates());
        let n = ranked.len();
        let shortlist = partition_top(&ranked, top_n, review_n);

        prop_assert_eq!(shortlist.approved.len(), top_n.min(n));
        prop_assert_eq!(shortlist.for_review.len(), review_n.min(n.saturating_sub(top_n)));

        let approved: BTreeSet<CandidateId> = shortlist.approved_ids().into_iter().collect();
        prop_assert!(shortlist.review_ids().iter().all(|id| !approved.contains(id)));
    }

    /// Applying the same transition twice equals applying it once.
    #[test]
    fn transition_idempotent(
        store in store_strategy(),
        raw_id in 0u32..50,
        target in status_strategy(),
    ) {
        let once = store.transitioned(CandidateId(raw_id), target);
        let twice = once.transitioned(CandidateId(raw_id), target);
        prop_assert_eq!(once, twice);
    }

    /// A transition for an id outside the store changes nothing.
    #[test]
    fn unknown_id_leaves_store_equal(
        store in store_strategy(),
        offset in 1u32..1000,
        target in status_strategy(),
    ) {
        let unknown = CandidateId(store.len() as u32 + offset);
        let mut next = store.clone();
        prop_assert_eq!(next.apply_transition(unknown, target), TransitionOutcome::UnknownCandidate);
        prop_assert_eq!(next, store);
    }

    /// Scores survive a trip through their decimal text form.
    #[test]
    fn score_text_form(tenths in MIN_SCORE_TENTHS..=MAX_SCORE_TENTHS) {
        let score = AiScore::from_tenths(tenths).expect("in range");
        let parsed: AiScore = score.to_string().parse().expect("parse");
        prop_assert_eq!(parsed, score);
    }
}
