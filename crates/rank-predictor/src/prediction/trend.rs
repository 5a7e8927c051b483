use serde::Serialize;

/// One plotted point of the fabricated performance-trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub accuracy: f64,
}

/// Offsets subtracted from overall accuracy, oldest quiz first.
const TREND_OFFSETS: [f64; 5] = [0.20, 0.15, 0.10, 0.05, 0.00];

/// Build the five-point series rendered alongside a prediction.
///
/// The points are synthesized from the single overall accuracy for
/// visualization; they are not historical measurements. Accuracies below
/// 0.20 yield negative leading points; the series is not clamped.
pub fn performance_trend(overall_accuracy: f64) -> Vec<TrendPoint> {
    TREND_OFFSETS
        .iter()
        .enumerate()
        .map(|(index, offset)| TrendPoint {
            label: format!("Quiz {}", index + 1),
            accuracy: overall_accuracy - offset,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_five_labeled_points() {
        let series = performance_trend(0.80);
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].label, "Quiz 1");
        assert_eq!(series[4].label, "Quiz 5");
    }

    #[test]
    fn series_climbs_to_the_overall_accuracy() {
        let series = performance_trend(0.80);
        assert!((series[0].accuracy - 0.60).abs() < 1e-9);
        assert!((series[4].accuracy - 0.80).abs() < 1e-9);
        assert!(series.windows(2).all(|pair| pair[0].accuracy < pair[1].accuracy));
    }

    #[test]
    fn low_accuracy_keeps_the_source_formula() {
        let series = performance_trend(0.10);
        assert!(series[0].accuracy < 0.0);
    }
}
