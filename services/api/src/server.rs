use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::with_prediction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rank_predictor::config::AppConfig;
use rank_predictor::error::AppError;
use rank_predictor::prediction::RankPredictionService;
use rank_predictor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let roster_csv = args
        .roster_csv
        .take()
        .or_else(|| config.roster.csv_path.clone());
    let (roster, roster_source) = load_roster(roster_csv.as_deref())?;
    let service = Arc::new(RankPredictionService::new(Arc::new(roster)));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_prediction_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        roster = roster_source.label(),
        "student rank predictor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
