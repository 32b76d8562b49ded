//! # Ranking Module
//!
//! Score ranking and shortlist partitioning for the resume analyzer.
//!
//! - Only `Sourced` candidates are ranked
//! - Ranking is a stable sort, descending by score: ties keep seed order
//! - The shortlist splits the ranking into auto-approved and human review
//!   slices; anything past both slices is silently left out

use crate::types::{Candidate, CandidateId, PipelineStatus};

/// Default number of auto-approved candidates.
pub const DEFAULT_TOP_N: usize = 5;

/// Default number of candidates sent to human review.
pub const DEFAULT_REVIEW_N: usize = 3;

/// Rank the sourced candidates, best score first.
///
/// Pure and infallible: an empty or fully processed collection yields an
/// empty ranking.
#[must_use]
pub fn rank_sourced(candidates: &[Candidate]) -> Vec<&Candidate> {
    let mut ranked: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| c.status == PipelineStatus::Sourced)
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
    ranked
}

/// Split a ranking into the first `top_n` and the following `review_n`.
#[must_use]
pub fn partition_top<'a>(ranked: &[&'a Candidate], top_n: usize, review_n: usize) -> Shortlist<'a> {
    let approved_end = top_n.min(ranked.len());
    let review_end = approved_end.saturating_add(review_n).min(ranked.len());

    Shortlist {
        approved: ranked[..approved_end].to_vec(),
        for_review: ranked[approved_end..review_end].to_vec(),
    }
}

/// Outcome of an analysis run over the sourced candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shortlist<'a> {
    /// Best candidates, moved past manual review.
    pub approved: Vec<&'a Candidate>,
    /// Next best candidates, waiting for a human decision.
    pub for_review: Vec<&'a Candidate>,
}

impl Shortlist<'_> {
    /// Ids of the approved candidates, in rank order.
    #[must_use]
    pub fn approved_ids(&self) -> Vec<CandidateId> {
        self.approved.iter().map(|c| c.id).collect()
    }

    /// Ids of the review candidates, in rank order.
    #[must_use]
    pub fn review_ids(&self) -> Vec<CandidateId> {
        self.for_review.iter().map(|c| c.id).collect()
    }

    /// Whether the shortlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.approved.is_empty() && self.for_review.is_empty()
    }
}

/// Shortlist sizes used by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    pub top_n: usize,
    pub review_n: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            review_n: DEFAULT_REVIEW_N,
        }
    }
}

impl RankingPolicy {
    /// Create a policy with custom sizes.
    #[must_use]
    pub fn new(top_n: usize, review_n: usize) -> Self {
        Self { top_n, review_n }
    }

    /// Rank the sourced candidates and partition them in one step.
    #[must_use]
    pub fn shortlist<'a>(&self, candidates: &'a [Candidate]) -> Shortlist<'a> {
        let ranked = rank_sourced(candidates);
        partition_top(&ranked, self.top_n, self.review_n)
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
            designation: "Engineer".to_string(),
            email: format!("c{id}@example.com"),
            phone: "000".to_string(),
            source: CandidateSource::TimelessDb,
            ai_score: AiScore::from_tenths(tenths).expect("score"),
            status,
        }
    }

    #[test]
    fn rank_skips_non_sourced() {
        let candidates = vec![
            make_candidate(1, 95, PipelineStatus::NewApplications),
            make_candidate(2, 60, PipelineStatus::Sourced),
            make_candidate(3, 85, PipelineStatus::Sourced),
        ];

        let ids: Vec<_> = rank_sourced(&candidates).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let candidates = vec![
            make_candidate(7, 80, PipelineStatus::Sourced),
            make_candidate(3, 90, PipelineStatus::Sourced),
            make_candidate(5, 80, PipelineStatus::Sourced),
            make_candidate(1, 80, PipelineStatus::Sourced),
        ];

        let ids: Vec<_> = rank_sourced(&candidates).iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 7, 5, 1]);
    }

    #[test]
    fn partition_on_short_ranking() {
        let candidates = vec![
            make_candidate(1, 90, PipelineStatus::Sourced),
            make_candidate(2, 80, PipelineStatus::Sourced),
        ];
        let ranked = rank_sourced(&candidates);

        let shortlist = partition_top(&ranked, 5, 3);
        assert_eq!(shortlist.approved.len(), 2);
        assert!(shortlist.for_review.is_empty());
    }

    #[test]
    fn partition_drops_remainder() {
        let candidates: Vec<_> = (1..=10)
            .map(|i| make_candidate(i, 100 - i as u8, PipelineStatus::Sourced))
            .collect();

        let shortlist = RankingPolicy::default().shortlist(&candidates);
        assert_eq!(shortlist.approved_ids().len(), 5);
        assert_eq!(
            shortlist.review_ids(),
            vec![CandidateId(6), CandidateId(7), CandidateId(8)]
        );
    }

    #[test]
    fn empty_input_gives_empty_shortlist() {
        let shortlist = RankingPolicy::default().shortlist(&[]);
        assert!(shortlist.is_empty());
    }

    #[test]
    fn zero_sizes_are_allowed() {
        let candidates = vec![make_candidate(1, 90, PipelineStatus::Sourced)];
        let ranked = rank_sourced(&candidates);
        let shortlist = partition_top(&ranked, 0, 1);
        assert!(shortlist.approved.is_empty());
        assert_eq!(shortlist.review_ids(), vec![CandidateId(1)]);
    }
}
