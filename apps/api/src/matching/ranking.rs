//! Ranking pass: filters per-opportunity results down to the recommendation set.

use crate::matching::eligibility::MatchResult;

/// Looser than the eligibility cutoff so near-misses still surface.
pub const RECOMMENDATION_THRESHOLD: u8 = 50;
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Keeps results scoring ≥ 50, sorted descending by score, at most 6.
/// Equal scores keep their catalog order.
pub fn rank_matches(results: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut ranked: Vec<MatchResult> = results
        .into_iter()
        .filter(|r| r.eligibility_score >= RECOMMENDATION_THRESHOLD)
        .collect();

    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.eligibility_score.cmp(&a.eligibility_score));
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}
