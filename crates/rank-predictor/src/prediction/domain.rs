use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for students known to the performance roster.
///
/// Matching is exact and case-sensitive; no normalization is applied to
/// caller-supplied identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Aggregated quiz performance for one student.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Mean quiz score, plausible range 0-100.
    pub score: u8,
    /// Mean answer accuracy as a fraction in [0, 1].
    pub accuracy: f64,
}

/// Merged roster entry: the performance record plus the weak-subject list
/// sourced from the companion table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: StudentId,
    pub performance: PerformanceRecord,
    pub weak_areas: Vec<String>,
}

/// Trend label derived from the quiz score, cut at 70.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImprovementTrend {
    #[serde(rename = "Improving")]
    Improving,
    #[serde(rename = "Needs improvement")]
    NeedsImprovement,
}

impl ImprovementTrend {
    /// `Improving` strictly above 70, `Needs improvement` at 70 and below.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            Self::Improving
        } else {
            Self::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::NeedsImprovement => "Needs improvement",
        }
    }
}

/// Insight block attached to every successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInsights {
    pub weak_areas: Vec<String>,
    pub improvement_trend: ImprovementTrend,
    pub overall_accuracy: f64,
}

/// Result of a successful roster lookup, created fresh per request and
/// owned by the caller that asked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankPrediction {
    pub student_id: StudentId,
    pub predicted_rank: u32,
    pub insights: PredictionInsights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_cut_is_strictly_above_seventy() {
        assert_eq!(
            ImprovementTrend::from_score(70),
            ImprovementTrend::NeedsImprovement
        );
        assert_eq!(ImprovementTrend::from_score(71), ImprovementTrend::Improving);
    }

    #[test]
    fn trend_serializes_as_display_labels() {
        let improving = serde_json::to_value(ImprovementTrend::Improving).expect("serialize");
        assert_eq!(improving, serde_json::json!("Improving"));

        let needs = serde_json::to_value(ImprovementTrend::NeedsImprovement).expect("serialize");
        assert_eq!(needs, serde_json::json!("Needs improvement"));
    }

    #[test]
    fn student_ids_compare_case_sensitively() {
        assert_ne!(StudentId::new("user1"), StudentId::new("User1"));
    }
}
