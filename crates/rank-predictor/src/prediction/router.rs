use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::domain::StudentId;
use super::roster::PerformanceSource;
use super::service::{PredictionError, RankPredictionService};
use super::views::RosterView;

/// Router builder exposing the prediction endpoints.
pub fn prediction_router<S>(service: Arc<RankPredictionService<S>>) -> Router
where
    S: PerformanceSource + 'static,
{
    Router::new()
        .route("/api/v1/predictions", post(predict_handler::<S>))
        .route(
            "/api/v1/predictions/:student_id",
            get(student_prediction_handler::<S>),
        )
        .route("/api/v1/students", get(roster_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictionRequest {
    pub(crate) student_id: String,
}

pub(crate) async fn predict_handler<S>(
    State(service): State<Arc<RankPredictionService<S>>>,
    axum::Json(request): axum::Json<PredictionRequest>,
) -> Response
where
    S: PerformanceSource + 'static,
{
    prediction_response(&service, StudentId(request.student_id))
}

pub(crate) async fn student_prediction_handler<S>(
    State(service): State<Arc<RankPredictionService<S>>>,
    Path(student_id): Path<String>,
) -> Response
where
    S: PerformanceSource + 'static,
{
    prediction_response(&service, StudentId(student_id))
}

pub(crate) async fn roster_handler<S>(State(service): State<Arc<RankPredictionService<S>>>) -> Response
where
    S: PerformanceSource + 'static,
{
    let students = service
        .student_ids()
        .into_iter()
        .map(|id| id.0)
        .collect();

    (StatusCode::OK, axum::Json(RosterView { students })).into_response()
}

fn prediction_response<S>(service: &RankPredictionService<S>, student_id: StudentId) -> Response
where
    S: PerformanceSource + 'static,
{
    match service.predict(&student_id) {
        Ok(prediction) => {
            let view = prediction.report_view(Local::now().date_naive());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error @ PredictionError::UnknownStudent(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
