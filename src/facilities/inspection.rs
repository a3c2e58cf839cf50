//! Simulated image analysis.

use serde::{Deserialize, Serialize};

/// Scores below this value need immediate attention.
pub const CLEANING_THRESHOLD: u8 = 5;

/// Result of a (simulated) cleanliness analysis of an uploaded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    pub cleanliness_score: u8,
    pub confidence: String,
    pub issues: Vec<String>,
    pub recommendation: String,
    pub analysis_time: String,
}

impl ImageAnalysis {
    /// Build the analysis report for a cleanliness score.
    pub fn from_score(score: u8) -> Self {
        let (issues, recommendation) = if score < CLEANING_THRESHOLD {
            (
                vec!["Needs cleaning", "Low supplies"],
                "Immediate cleaning required",
            )
        } else {
            (vec!["Good condition"], "Maintain current standards")
        };

        Self {
            cleanliness_score: score,
            confidence: "94%".to_string(),
            issues: issues.iter().map(|issue| issue.to_string()).collect(),
            recommendation: recommendation.to_string(),
            analysis_time: "2.3 seconds".to_string(),
        }
    }

    pub fn needs_cleaning(&self) -> bool {
        self.cleanliness_score < CLEANING_THRESHOLD
    }
}
