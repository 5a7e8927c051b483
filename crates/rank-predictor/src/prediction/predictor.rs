use super::domain::{ImprovementTrend, PredictionInsights, RankPrediction, StudentProfile};

/// Size of the synthetic candidate pool the predicted rank is drawn from.
pub const RANK_POOL_SIZE: u32 = 10_000;

/// `1.0 - accuracy` can land a hair below an exact rank boundary (0.80
/// scales to 1999.999...), which would floor one rank too low; values this
/// close to an integer are snapped before truncation.
const FLOOR_SNAP: f64 = 1e-6;

/// Derive the predicted rank from overall accuracy:
/// `floor(10000 * (1 - accuracy))`, always in [0, 10000] for accuracy in
/// [0, 1].
pub fn predicted_rank(accuracy: f64) -> u32 {
    let scaled = f64::from(RANK_POOL_SIZE) * (1.0 - accuracy);
    let nearest = scaled.round();
    let floored = if (scaled - nearest).abs() < FLOOR_SNAP {
        nearest
    } else {
        scaled.floor()
    };

    floored.clamp(0.0, f64::from(RANK_POOL_SIZE)) as u32
}

/// Assemble the full prediction for a roster profile.
///
/// Pure and synchronous: no side effects, no retries, no timeouts.
pub fn predict(profile: &StudentProfile) -> RankPrediction {
    let performance = profile.performance;

    RankPrediction {
        student_id: profile.student_id.clone(),
        predicted_rank: predicted_rank(performance.accuracy),
        insights: PredictionInsights {
            weak_areas: profile.weak_areas.clone(),
            improvement_trend: ImprovementTrend::from_score(performance.score),
            overall_accuracy: performance.accuracy,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::domain::{PerformanceRecord, StudentId};

    fn profile(score: u8, accuracy: f64) -> StudentProfile {
        StudentProfile {
            student_id: StudentId::new("test-student"),
            performance: PerformanceRecord { score, accuracy },
            weak_areas: vec!["Physics".to_string()],
        }
    }

    #[test]
    fn ranks_match_the_demo_table() {
        assert_eq!(predicted_rank(0.80), 2000);
        assert_eq!(predicted_rank(0.70), 3000);
        assert_eq!(predicted_rank(0.90), 1000);
        assert_eq!(predicted_rank(0.75), 2500);
        assert_eq!(predicted_rank(0.85), 1500);
    }

    #[test]
    fn rank_stays_in_the_pool_bounds() {
        assert_eq!(predicted_rank(1.0), 0);
        assert_eq!(predicted_rank(0.0), RANK_POOL_SIZE);
    }

    #[test]
    fn fractional_boundaries_floor_down() {
        // 1 - 0.85555 scales to 1444.5, which floors to 1444.
        assert_eq!(predicted_rank(0.85555), 1444);
    }

    #[test]
    fn prediction_carries_trend_and_accuracy() {
        let prediction = predict(&profile(75, 0.80));
        assert_eq!(prediction.predicted_rank, 2000);
        assert_eq!(
            prediction.insights.improvement_trend,
            ImprovementTrend::Improving
        );
        assert!((prediction.insights.overall_accuracy - 0.80).abs() < f64::EPSILON);
        assert_eq!(prediction.insights.weak_areas, vec!["Physics"]);
    }

    #[test]
    fn score_at_seventy_needs_improvement() {
        let prediction = predict(&profile(70, 0.75));
        assert_eq!(
            prediction.insights.improvement_trend,
            ImprovementTrend::NeedsImprovement
        );

        let prediction = predict(&profile(71, 0.75));
        assert_eq!(
            prediction.insights.improvement_trend,
            ImprovementTrend::Improving
        );
    }
}
