use std::sync::Arc;

use super::domain::{RankPrediction, StudentId};
use super::predictor;
use super::roster::PerformanceSource;

/// Lookup facade over an injected performance source.
pub struct RankPredictionService<S> {
    source: Arc<S>,
}

impl<S> RankPredictionService<S>
where
    S: PerformanceSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Predict the rank for a student, or report that the id is unknown.
    ///
    /// Detected at this boundary and surfaced synchronously; no retry, no
    /// recovery.
    pub fn predict(&self, student_id: &StudentId) -> Result<RankPrediction, PredictionError> {
        let profile = self
            .source
            .profile(student_id)
            .ok_or_else(|| PredictionError::UnknownStudent(student_id.clone()))?;

        Ok(predictor::predict(&profile))
    }

    /// Enrolled ids, for the sample-id hint shown at the input boundary.
    pub fn student_ids(&self) -> Vec<StudentId> {
        self.source.student_ids()
    }
}

/// Error raised by the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("student '{0}' was not found in the performance roster")]
    UnknownStudent(StudentId),
}
