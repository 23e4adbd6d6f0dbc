//! Profile extraction: turns raw resume text into skills and an academic score.
//!
//! Both extractors are total: empty or unrecognisable text yields an empty
//! skill list and no score, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matching::skills::SKILL_PATTERNS;

/// Highest academic score on the 10-point scale.
pub const ACADEMIC_SCALE_MAX: f64 = 10.0;

/// Skills and academic score derived from one resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// Canonical dictionary tokens, each at most once, in dictionary order.
    pub skills: Vec<String>,
    /// CGPA-style score in (0, 10].
    pub academic_score: Option<f64>,
}

/// Academic score patterns in priority order. Only the first occurrence of
/// each pattern is considered.
static ACADEMIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)cgpa\s*[:=]?\s*(\d+(?:\.\d+)?)",
        r"(?i)gpa\s*[:=]?\s*(\d+(?:\.\d+)?)",
        r"(\d+(?:\.\d+)?)\s*/\s*10\b",
        r"(?i)(?:score|average)\s*[:=]?\s*(\d+(?:\.\d+)?)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

pub fn extract_profile(text: &str) -> ExtractedProfile {
    ExtractedProfile {
        skills: extract_skills(text),
        academic_score: extract_academic_score(text),
    }
}

/// Whole-word, case-insensitive scan of the text for every dictionary entry.
pub fn extract_skills(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(canonical, _)| canonical.to_string())
        .collect()
}

/// Returns the first in-range score found, trying patterns in priority order.
///
/// An out-of-range value ("120/10") does not stop the search; the next
/// pattern is tried instead.
pub fn extract_academic_score(text: &str) -> Option<f64> {
    ACADEMIC_PATTERNS.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|score| is_valid_academic_score(*score))
    })
}

pub fn is_valid_academic_score(score: f64) -> bool {
    score > 0.0 && score <= ACADEMIC_SCALE_MAX
}
