use metrics_exporter_prometheus::PrometheusHandle;
use rank_predictor::error::AppError;
use rank_predictor::prediction::{PerformanceRoster, RosterCsvImporter};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Where the active roster came from, reported in logs and demo output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RosterSource {
    Standard,
    CsvImport,
}

impl RosterSource {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            RosterSource::Standard => "bundled standard cohort",
            RosterSource::CsvImport => "CSV import",
        }
    }
}

/// Build the process roster: a CSV export when a path is given, the bundled
/// cohort otherwise. Import defects abort startup instead of serving a
/// partial roster.
pub(crate) fn load_roster(
    csv_path: Option<&Path>,
) -> Result<(PerformanceRoster, RosterSource), AppError> {
    match csv_path {
        Some(path) => {
            let roster = RosterCsvImporter::from_path(path)?;
            Ok((roster, RosterSource::CsvImport))
        }
        None => Ok((PerformanceRoster::standard(), RosterSource::Standard)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_is_the_bundled_cohort() {
        let (roster, source) = load_roster(None).expect("standard roster builds");
        assert_eq!(source, RosterSource::Standard);
        assert_eq!(roster.len(), 5);
    }

    #[test]
    fn missing_csv_aborts_roster_loading() {
        let error = load_roster(Some(Path::new("./does-not-exist.csv")))
            .expect_err("missing export rejected");
        assert!(error.to_string().contains("roster import error"));
    }
}
