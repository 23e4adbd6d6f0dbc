//! Eligibility scoring: one `MatchResult` per (profile, opportunity) pair.
//!
//! Score = skills component (0-60) + academic component (0-40), rounded.
//! 1. Skills: required skills matched by case-insensitive substring
//!    containment in either direction against the profile's skills.
//!    An empty requirement list earns the full 60.
//! 2. Academic: full 40 with no declared minimum, 0 when a minimum is
//!    declared but the profile has no score, otherwise proportional.

use serde::{Deserialize, Serialize};

use crate::matching::profile::ExtractedProfile;
use crate::models::opportunity::OpportunityRequirement;

pub const SKILLS_WEIGHT: f64 = 60.0;
pub const ACADEMIC_WEIGHT: f64 = 40.0;
/// Scores at or above this are reported as eligible.
pub const ELIGIBLE_THRESHOLD: u8 = 60;

/// Fixed feedback bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Excellent,
    Good,
    Partial,
    Limited,
}

impl MatchBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => MatchBand::Excellent,
            60..=79 => MatchBand::Good,
            40..=59 => MatchBand::Partial,
            _ => MatchBand::Limited,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent match",
            MatchBand::Good => "Good match",
            MatchBand::Partial => "Partial match",
            MatchBand::Limited => "Limited match",
        }
    }
}

/// Candidate academic score alongside the opportunity's minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicComparison {
    pub candidate: Option<f64>,
    pub required: Option<f64>,
}

impl AcademicComparison {
    /// Shortfall when both scores are known and the candidate is below the minimum.
    pub fn gap(&self) -> Option<f64> {
        match (self.candidate, self.required) {
            (Some(candidate), Some(required)) if candidate < required => {
                Some(required - candidate)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub opportunity_id: String,
    pub title: String,
    pub company: String,
    /// 0-100
    pub eligibility_score: u8,
    pub skills_score: f64,
    pub academic_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub is_eligible: bool,
    pub band: MatchBand,
    pub feedback: String,
    pub academic: AcademicComparison,
}

/// Scores a single opportunity. Deterministic and side-effect free.
pub fn score_opportunity(
    profile: &ExtractedProfile,
    requirement: &OpportunityRequirement,
) -> MatchResult {
    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = requirement
        .required_skills
        .iter()
        .cloned()
        .partition(|required| profile_has_skill(&profile.skills, required));

    let skills_score = compute_skills_score(matched_skills.len(), requirement.required_skills.len());
    let academic_score =
        compute_academic_score(profile.academic_score, requirement.min_academic_score);

    let eligibility_score = (skills_score + academic_score).round().clamp(0.0, 100.0) as u8;
    let band = MatchBand::from_score(eligibility_score);

    let academic = AcademicComparison {
        candidate: profile.academic_score,
        required: requirement.min_academic_score,
    };
    let feedback = build_feedback(band, requirement, &missing_skills, &academic);

    MatchResult {
        opportunity_id: requirement.id.clone(),
        title: requirement.title.clone(),
        company: requirement.company.clone(),
        eligibility_score,
        skills_score,
        academic_score,
        matched_skills,
        missing_skills,
        is_eligible: eligibility_score >= ELIGIBLE_THRESHOLD,
        band,
        feedback,
        academic,
    }
}

/// Either string containing the other counts as a match ("node" vs "node.js").
fn profile_has_skill(profile_skills: &[String], required: &str) -> bool {
    let required = required.to_lowercase();
    profile_skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        skill.contains(&required) || required.contains(&skill)
    })
}

pub fn compute_skills_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return SKILLS_WEIGHT;
    }
    (matched as f64 / required as f64) * SKILLS_WEIGHT
}

pub fn compute_academic_score(candidate: Option<f64>, required: Option<f64>) -> f64 {
    match (candidate, required) {
        (_, None) => ACADEMIC_WEIGHT,
        (None, Some(_)) => 0.0,
        (Some(candidate), Some(required)) if candidate >= required => ACADEMIC_WEIGHT,
        (Some(candidate), Some(required)) => {
            ((candidate / required) * ACADEMIC_WEIGHT).clamp(0.0, ACADEMIC_WEIGHT)
        }
    }
}

fn build_feedback(
    band: MatchBand,
    requirement: &OpportunityRequirement,
    missing_skills: &[String],
    academic: &AcademicComparison,
) -> String {
    let mut feedback = match band {
        MatchBand::Excellent => format!(
            "{}! Your profile aligns strongly with {}.",
            band.label(),
            describe(requirement)
        ),
        MatchBand::Good => format!(
            "{}. You meet most of the requirements for {}.",
            band.label(),
            describe(requirement)
        ),
        MatchBand::Partial => format!(
            "{}. Some requirements for {} are not yet covered.",
            band.label(),
            describe(requirement)
        ),
        MatchBand::Limited => format!(
            "{}. Significant gaps remain for {}.",
            band.label(),
            describe(requirement)
        ),
    };

    if !missing_skills.is_empty() {
        let named: Vec<&str> = missing_skills.iter().take(2).map(String::as_str).collect();
        feedback.push_str(&format!(" Consider learning: {}.", named.join(", ")));
    }

    if let (Some(gap), Some(candidate), Some(required)) =
        (academic.gap(), academic.candidate, academic.required)
    {
        feedback.push_str(&format!(
            " Your academic score ({candidate:.1}) is {gap:.1} below the required {required:.1}."
        ));
    }

    feedback
}

fn describe(requirement: &OpportunityRequirement) -> String {
    if requirement.company.is_empty() {
        requirement.title.clone()
    } else {
        format!("{} at {}", requirement.title, requirement.company)
    }
}
