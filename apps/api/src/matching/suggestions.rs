//! Improvement suggestions: prioritized, insertion-ordered guidance derived
//! from missing skills, the academic comparison, and the overall score.

use serde::{Deserialize, Serialize};

use crate::matching::eligibility::AcademicComparison;
use crate::matching::skills::learning_time;

/// Missing skills beyond this count do not get their own suggestion.
const MAX_SKILL_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub area: String,
    pub suggestion: String,
    pub priority: Priority,
    pub estimated_time: Option<String>,
}

impl ImprovementSuggestion {
    fn new(area: &str, suggestion: String, priority: Priority, estimated_time: Option<&str>) -> Self {
        Self {
            area: area.to_string(),
            suggestion,
            priority,
            estimated_time: estimated_time.map(String::from),
        }
    }
}

/// Builds the suggestion list. Order is fixed; priority is informational only.
pub fn generate_suggestions(
    missing_skills: &[String],
    eligibility_score: u8,
    academic: &AcademicComparison,
) -> Vec<ImprovementSuggestion> {
    let mut suggestions = Vec::new();

    for skill in missing_skills.iter().take(MAX_SKILL_SUGGESTIONS) {
        suggestions.push(ImprovementSuggestion::new(
            skill,
            format!("Learn {skill} through a structured course and apply it in a hands-on project"),
            Priority::High,
            Some(learning_time(skill)),
        ));
    }

    if let (Some(gap), Some(required)) = (academic.gap(), academic.required) {
        suggestions.push(ImprovementSuggestion::new(
            "Academic Performance",
            format!(
                "Raise your academic score by {gap:.1} points to reach the required {required:.1}"
            ),
            Priority::Medium,
            Some("1-2 semesters"),
        ));
    }

    if eligibility_score < 50 {
        suggestions.push(ImprovementSuggestion::new(
            "Project Portfolio",
            "Build 2-3 end-to-end projects that demonstrate the skills recruiters ask for"
                .to_string(),
            Priority::High,
            Some("2-3 months"),
        ));
        suggestions.push(ImprovementSuggestion::new(
            "Practical Experience",
            "Seek an internship or open-source contribution to gain real-world experience"
                .to_string(),
            Priority::High,
            Some("3-6 months"),
        ));
    }

    if eligibility_score < 80 {
        suggestions.push(ImprovementSuggestion::new(
            "Resume Optimization",
            "Tailor your resume to each posting and quantify the impact of your work".to_string(),
            Priority::Medium,
            Some("1 week"),
        ));
        suggestions.push(ImprovementSuggestion::new(
            "Interview Preparation",
            "Practice coding problems and mock interviews for technical rounds".to_string(),
            Priority::High,
            Some("4-6 weeks"),
        ));
    }

    suggestions.push(ImprovementSuggestion::new(
        "Soft Skills",
        "Strengthen communication and teamwork through clubs, hackathons, and presentations"
            .to_string(),
        Priority::Medium,
        None,
    ));

    suggestions
}
