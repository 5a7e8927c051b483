//! Rank prediction over an injected read-only performance roster.
//!
//! The roster merges the score and weak-area tables at construction so the
//! two sources cannot drift apart at runtime. The predictor itself is a pure
//! function; the service and router wrap it with the lookup boundary and the
//! HTTP surface.

pub mod domain;
pub mod importer;
pub mod predictor;
pub mod roster;
pub mod router;
pub mod service;
pub mod trend;
pub mod views;

pub use domain::{
    ImprovementTrend, PerformanceRecord, PredictionInsights, RankPrediction, StudentId,
    StudentProfile,
};
pub use importer::{RosterCsvImporter, RosterImportError};
pub use predictor::{predict, predicted_rank, RANK_POOL_SIZE};
pub use roster::{PerformanceRoster, PerformanceSource, RosterError};
pub use router::prediction_router;
pub use service::{PredictionError, RankPredictionService};
pub use trend::{performance_trend, TrendPoint};
pub use views::{PredictionReportView, RosterView};
