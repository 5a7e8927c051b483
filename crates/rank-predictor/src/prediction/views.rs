use chrono::NaiveDate;
use serde::Serialize;

use super::domain::RankPrediction;
use super::trend::{performance_trend, TrendPoint};

/// Wire shape for a rendered prediction, including the synthetic trend
/// series and the display-ready accuracy percentage.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReportView {
    pub student_id: String,
    pub predicted_rank: u32,
    pub weak_areas: Vec<String>,
    pub improvement_trend: &'static str,
    pub overall_accuracy: f64,
    pub overall_accuracy_pct: String,
    pub performance_trend: Vec<TrendPoint>,
    pub generated_on: NaiveDate,
}

impl RankPrediction {
    pub fn report_view(&self, generated_on: NaiveDate) -> PredictionReportView {
        PredictionReportView {
            student_id: self.student_id.as_str().to_string(),
            predicted_rank: self.predicted_rank,
            weak_areas: self.insights.weak_areas.clone(),
            improvement_trend: self.insights.improvement_trend.label(),
            overall_accuracy: self.insights.overall_accuracy,
            overall_accuracy_pct: format_accuracy_pct(self.insights.overall_accuracy),
            performance_trend: performance_trend(self.insights.overall_accuracy),
            generated_on,
        }
    }
}

/// Roster listing exposed so clients can hint valid sample ids.
#[derive(Debug, Clone, Serialize)]
pub struct RosterView {
    pub students: Vec<String>,
}

/// Accuracy as a percentage with two decimal places, e.g. `80.00%`.
pub fn format_accuracy_pct(accuracy: f64) -> String {
    format!("{:.2}%", accuracy * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::domain::{PerformanceRecord, StudentId, StudentProfile};
    use crate::prediction::predictor::predict;

    #[test]
    fn accuracy_renders_with_two_decimals() {
        assert_eq!(format_accuracy_pct(0.80), "80.00%");
        assert_eq!(format_accuracy_pct(0.7532), "75.32%");
        assert_eq!(format_accuracy_pct(1.0), "100.00%");
    }

    #[test]
    fn report_view_carries_rank_trend_and_date() {
        let profile = StudentProfile {
            student_id: StudentId::new("user1"),
            performance: PerformanceRecord {
                score: 75,
                accuracy: 0.80,
            },
            weak_areas: vec!["Physics".to_string(), "Organic Chemistry".to_string()],
        };
        let generated_on = NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date");

        let view = predict(&profile).report_view(generated_on);

        assert_eq!(view.student_id, "user1");
        assert_eq!(view.predicted_rank, 2000);
        assert_eq!(view.improvement_trend, "Improving");
        assert_eq!(view.overall_accuracy_pct, "80.00%");
        assert_eq!(view.performance_trend.len(), 5);
        assert_eq!(view.generated_on, generated_on);
    }
}
