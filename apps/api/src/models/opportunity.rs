use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a posting as reported by the listings backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpportunityStatus {
    #[default]
    Active,
    Upcoming,
    Closed,
}

/// A job / internship / hackathon / campus-drive posting.
///
/// Read-only input to the matcher. Field aliases cover the camelCase and
/// `_id` shapes the listings backend emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRequirement {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, alias = "requiredSkills", alias = "skills")]
    pub required_skills: Vec<String>,
    #[serde(
        default,
        alias = "minAcademicScore",
        alias = "minCgpa",
        alias = "minCGPA",
        alias = "min_cgpa"
    )]
    pub min_academic_score: Option<f64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: OpportunityStatus,
}

impl OpportunityRequirement {
    /// Builds an unlisted requirement from a bare skills list, used by the
    /// single-opportunity analysis mode.
    pub fn ad_hoc(required_skills: Vec<String>, min_academic_score: Option<f64>) -> Self {
        Self {
            id: "custom".to_string(),
            title: "Custom requirement".to_string(),
            company: String::new(),
            required_skills,
            min_academic_score,
            deadline: None,
            status: OpportunityStatus::Active,
        }
    }

    /// Open = not closed and the deadline (if any) has not passed.
    pub fn is_open(&self, today: NaiveDate) -> bool {
        if self.status == OpportunityStatus::Closed {
            return false;
        }
        self.deadline.map(|d| d >= today).unwrap_or(true)
    }
}
