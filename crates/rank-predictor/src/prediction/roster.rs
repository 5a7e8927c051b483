use std::collections::BTreeMap;

use super::domain::{PerformanceRecord, StudentId, StudentProfile};

/// Read-only source of student performance profiles.
///
/// The service and router are generic over this trait so tests can
/// substitute alternate tables for the bundled cohort.
pub trait PerformanceSource: Send + Sync {
    fn profile(&self, id: &StudentId) -> Option<StudentProfile>;
    fn student_ids(&self) -> Vec<StudentId>;
}

/// Immutable roster built once at startup from the score table and the
/// weak-area table. Both tables must cover exactly the same students.
#[derive(Debug, Clone, Default)]
pub struct PerformanceRoster {
    profiles: BTreeMap<StudentId, StudentProfile>,
}

/// Configuration defects detected while merging the source tables.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("student '{0}' has a score entry but no weak-area entry")]
    MissingWeakAreas(StudentId),
    #[error("student '{0}' has a weak-area entry but no score entry")]
    MissingPerformance(StudentId),
    #[error("student '{0}' has accuracy {1} outside [0, 1]")]
    AccuracyOutOfRange(StudentId, f64),
    #[error("student '{0}' has score {1} above 100")]
    ScoreOutOfRange(StudentId, u8),
}

impl PerformanceRoster {
    /// Merge the two source tables into one profile map.
    ///
    /// The tables are maintained as separate literals upstream; a key
    /// present in one but not the other is a build-time data error and is
    /// rejected here instead of surfacing later as a half-filled insight.
    pub fn from_tables(
        scores: BTreeMap<StudentId, PerformanceRecord>,
        mut weak_areas: BTreeMap<StudentId, Vec<String>>,
    ) -> Result<Self, RosterError> {
        let mut profiles = BTreeMap::new();

        for (student_id, performance) in scores {
            if !(0.0..=1.0).contains(&performance.accuracy) {
                return Err(RosterError::AccuracyOutOfRange(
                    student_id,
                    performance.accuracy,
                ));
            }
            if performance.score > 100 {
                return Err(RosterError::ScoreOutOfRange(student_id, performance.score));
            }

            let areas = weak_areas
                .remove(&student_id)
                .ok_or_else(|| RosterError::MissingWeakAreas(student_id.clone()))?;

            profiles.insert(
                student_id.clone(),
                StudentProfile {
                    student_id,
                    performance,
                    weak_areas: areas,
                },
            );
        }

        if let Some((student_id, _)) = weak_areas.pop_first() {
            return Err(RosterError::MissingPerformance(student_id));
        }

        Ok(Self { profiles })
    }

    /// The five-student cohort bundled with the demo.
    pub fn standard() -> Self {
        let profiles = standard_profiles()
            .into_iter()
            .map(|profile| (profile.student_id.clone(), profile))
            .collect();

        Self { profiles }
    }

    pub fn fetch(&self, id: &StudentId) -> Option<&StudentProfile> {
        self.profiles.get(id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &StudentProfile> {
        self.profiles.values()
    }
}

impl PerformanceSource for PerformanceRoster {
    fn profile(&self, id: &StudentId) -> Option<StudentProfile> {
        self.profiles.get(id).cloned()
    }

    fn student_ids(&self) -> Vec<StudentId> {
        self.profiles.keys().cloned().collect()
    }
}

fn standard_profiles() -> Vec<StudentProfile> {
    fn profile(id: &str, score: u8, accuracy: f64, weak_areas: &[&str]) -> StudentProfile {
        StudentProfile {
            student_id: StudentId::new(id),
            performance: PerformanceRecord { score, accuracy },
            weak_areas: weak_areas.iter().map(|area| area.to_string()).collect(),
        }
    }

    vec![
        profile("user1", 75, 0.80, &["Physics", "Organic Chemistry"]),
        profile("user2", 65, 0.70, &["Biology", "Inorganic Chemistry"]),
        profile("user3", 85, 0.90, &["Mathematics", "Physical Chemistry"]),
        profile("student001", 70, 0.75, &["Botany", "Zoology"]),
        profile("student002", 80, 0.85, &["Mechanics", "Thermodynamics"]),
    ]
}
