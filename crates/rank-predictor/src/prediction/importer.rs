use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{PerformanceRecord, StudentId};
use super::roster::{PerformanceRoster, RosterError};

/// Loads a roster from a `student_id,score,accuracy,weak_areas` CSV export,
/// with weak areas separated by `;` inside their column.
pub struct RosterCsvImporter;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    DuplicateStudent(StudentId),
    Roster(RosterError),
    EmptyRoster,
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::DuplicateStudent(id) => {
                write!(f, "roster export lists student '{}' more than once", id)
            }
            RosterImportError::Roster(err) => {
                write!(f, "could not build roster from export: {}", err)
            }
            RosterImportError::EmptyRoster => write!(f, "roster export contains no students"),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Roster(err) => Some(err),
            RosterImportError::DuplicateStudent(_) | RosterImportError::EmptyRoster => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RosterError> for RosterImportError {
    fn from(err: RosterError) -> Self {
        Self::Roster(err)
    }
}

impl RosterCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<PerformanceRoster, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<PerformanceRoster, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scores = BTreeMap::new();
        let mut weak_areas = BTreeMap::new();

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            let areas = row.subject_list();
            let student_id = StudentId::new(row.student_id);

            if scores.contains_key(&student_id) {
                return Err(RosterImportError::DuplicateStudent(student_id));
            }

            weak_areas.insert(student_id.clone(), areas);
            scores.insert(
                student_id,
                PerformanceRecord {
                    score: row.score,
                    accuracy: row.accuracy,
                },
            );
        }

        if scores.is_empty() {
            return Err(RosterImportError::EmptyRoster);
        }

        Ok(PerformanceRoster::from_tables(scores, weak_areas)?)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    student_id: String,
    score: u8,
    accuracy: f64,
    #[serde(default)]
    weak_areas: Option<String>,
}

impl RosterRow {
    fn subject_list(&self) -> Vec<String> {
        self.weak_areas
            .as_deref()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
            .map(str::to_string)
            .collect()
    }
}
