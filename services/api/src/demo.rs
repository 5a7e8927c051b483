use crate::infra::load_roster;
use chrono::Local;
use clap::Args;
use rank_predictor::error::AppError;
use rank_predictor::prediction::{PredictionReportView, RankPredictionService, StudentId};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Student identifier to look up (exact, case-sensitive)
    #[arg(long)]
    pub(crate) student_id: String,
    /// Replace the bundled roster with a CSV export
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Replace the bundled roster with a CSV export
    #[arg(long)]
    pub(crate) roster_csv: Option<PathBuf>,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs {
        student_id,
        roster_csv,
    } = args;

    let (roster, source) = load_roster(roster_csv.as_deref())?;
    let service = RankPredictionService::new(Arc::new(roster));

    let prediction = service.predict(&StudentId::new(student_id))?;
    let view = prediction.report_view(Local::now().date_naive());

    println!("Student rank prediction");
    println!("Roster source: {}", source.label());
    println!();
    render_prediction_report(&view);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { roster_csv } = args;

    let (roster, source) = load_roster(roster_csv.as_deref())?;
    let service = RankPredictionService::new(Arc::new(roster));
    let today = Local::now().date_naive();

    println!("Student rank predictor demo");
    println!("Roster source: {}", source.label());

    let student_ids = service.student_ids();
    let sample_ids: Vec<&str> = student_ids.iter().map(StudentId::as_str).collect();
    println!("Sample IDs: {}", sample_ids.join(", "));

    for student_id in &student_ids {
        let prediction = service.predict(student_id)?;
        println!("\n--- {student_id} ---");
        render_prediction_report(&prediction.report_view(today));
    }

    let missing = StudentId::new("nonexistent");
    if let Err(error) = service.predict(&missing) {
        println!("\nLookup miss for '{missing}': {error}");
    }

    Ok(())
}

fn render_prediction_report(view: &PredictionReportView) {
    println!("Predicted rank: {}", view.predicted_rank);
    println!("Weak areas: {}", view.weak_areas.join(", "));
    println!("Improvement trend: {}", view.improvement_trend);
    println!("Overall accuracy: {}", view.overall_accuracy_pct);

    println!("Performance trend (synthetic)");
    for point in &view.performance_trend {
        println!("- {}: {:.2}%", point.label, point.accuracy * 100.0);
    }

    println!("Generated on {}", view.generated_on);
}
