//! Analyzer: the call-in / result-out boundary used by the HTTP layer.
//!
//! Pure and synchronous: every call owns its text and catalog snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::eligibility::{score_opportunity, AcademicComparison, MatchResult};
use crate::matching::profile::{extract_profile, ExtractedProfile};
use crate::matching::ranking::rank_matches;
use crate::matching::suggestions::{generate_suggestions, ImprovementSuggestion};
use crate::models::opportunity::OpportunityRequirement;

/// Result of scoring a resume against one ad-hoc requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleAnalysis {
    pub profile: ExtractedProfile,
    pub result: MatchResult,
    pub suggestions: Vec<ImprovementSuggestion>,
}

/// Result of scoring a resume against a whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogAnalysis {
    pub profile: ExtractedProfile,
    /// At most 6, descending by score.
    pub matches: Vec<MatchResult>,
    pub suggestions: Vec<ImprovementSuggestion>,
    /// Number of opportunities scored.
    pub evaluated: usize,
}

pub fn analyze_requirement(
    text: &str,
    required_skills: Vec<String>,
    min_academic_score: Option<f64>,
) -> SingleAnalysis {
    let profile = extract_profile(text);
    let requirement = OpportunityRequirement::ad_hoc(required_skills, min_academic_score);
    let result = score_opportunity(&profile, &requirement);
    let suggestions =
        generate_suggestions(&result.missing_skills, result.eligibility_score, &result.academic);

    debug!(
        "Single analysis: {} skills extracted, score {}",
        profile.skills.len(),
        result.eligibility_score
    );

    SingleAnalysis {
        profile,
        result,
        suggestions,
    }
}

/// Scores every opportunity, ranks them, and derives suggestions from the
/// best-scoring opportunity in the full catalog.
pub fn analyze_catalog(text: &str, catalog: &[OpportunityRequirement]) -> CatalogAnalysis {
    let profile = extract_profile(text);

    let results: Vec<MatchResult> = catalog
        .iter()
        .map(|requirement| score_opportunity(&profile, requirement))
        .collect();

    let suggestions = match best_result(&results) {
        Some(best) => {
            generate_suggestions(&best.missing_skills, best.eligibility_score, &best.academic)
        }
        None => generate_suggestions(
            &[],
            0,
            &AcademicComparison {
                candidate: profile.academic_score,
                required: None,
            },
        ),
    };

    let evaluated = results.len();
    let matches = rank_matches(results);

    debug!(
        "Catalog analysis: {} skills extracted, {} of {} opportunities recommended",
        profile.skills.len(),
        matches.len(),
        evaluated
    );

    CatalogAnalysis {
        profile,
        matches,
        suggestions,
        evaluated,
    }
}

/// Highest score; the earliest catalog entry wins ties.
fn best_result(results: &[MatchResult]) -> Option<&MatchResult> {
    results.iter().fold(None, |best, r| match best {
        Some(b) if b.eligibility_score >= r.eligibility_score => Some(b),
        _ => Some(r),
    })
}
