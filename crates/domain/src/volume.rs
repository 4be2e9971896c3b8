use std::collections::BTreeMap;

use crate::{Muscle, ProgramSession, Property};

/// Recommended weekly working sets per muscle.
const RECOMMENDED: [(Muscle, u32, u32); 10] = [
    (Muscle::Chest, 12, 20),
    (Muscle::Back, 14, 22),
    (Muscle::Shoulders, 10, 18),
    (Muscle::Biceps, 8, 14),
    (Muscle::Triceps, 8, 14),
    (Muscle::Quads, 12, 20),
    (Muscle::Hamstrings, 10, 16),
    (Muscle::Glutes, 10, 18),
    (Muscle::Calves, 8, 14),
    (Muscle::Core, 8, 16),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeValidator {
    ranges: BTreeMap<Muscle, (u32, u32)>,
}

impl Default for VolumeValidator {
    fn default() -> Self {
        Self {
            ranges: RECOMMENDED
                .iter()
                .map(|(muscle, min, max)| (*muscle, (*min, *max)))
                .collect(),
        }
    }
}

impl VolumeValidator {
    #[must_use]
    pub fn range(&self, muscle: Muscle) -> Option<(u32, u32)> {
        self.ranges.get(&muscle).copied()
    }

    /// Checks the sets of one representative week. Each exercise counts for
    /// every one of its primary muscles.
    #[must_use]
    pub fn validate(&self, sessions: &[ProgramSession]) -> VolumeReport {
        let mut sets_per_muscle = BTreeMap::new();
        for exercise in sessions.iter().flat_map(|s| s.exercises.iter()) {
            let sets = exercise.prescription().sets;
            for muscle in exercise.primary_muscles() {
                *sets_per_muscle.entry(*muscle).or_insert(0) += sets;
            }
        }

        let warnings = self
            .ranges
            .iter()
            .filter_map(|(muscle, (min, max))| {
                let sets = sets_per_muscle.get(muscle).copied().unwrap_or(0);
                let (kind, recommendation) = if sets < *min {
                    (
                        WarningKind::Under,
                        format!(
                            "Add {} weekly sets for {}",
                            min - sets,
                            muscle.name().to_lowercase()
                        ),
                    )
                } else if sets > *max {
                    (
                        WarningKind::Over,
                        format!(
                            "Remove {} weekly sets for {}",
                            sets - max,
                            muscle.name().to_lowercase()
                        ),
                    )
                } else {
                    return None;
                };
                Some(VolumeWarning {
                    muscle: *muscle,
                    kind,
                    sets,
                    min: *min,
                    max: *max,
                    recommendation,
                })
            })
            .collect::<Vec<_>>();

        VolumeReport {
            status: if warnings.is_empty() {
                VolumeStatus::Optimal
            } else {
                VolumeStatus::NeedsAttention
            },
            sets_per_muscle,
            warnings,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VolumeReport {
    pub sets_per_muscle: BTreeMap<Muscle, u32>,
    pub warnings: Vec<VolumeWarning>,
    pub status: VolumeStatus,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStatus {
    #[default]
    Optimal,
    NeedsAttention,
}

impl VolumeStatus {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            VolumeStatus::Optimal => "optimal",
            VolumeStatus::NeedsAttention => "needs_attention",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeWarning {
    pub muscle: Muscle,
    pub kind: WarningKind,
    pub sets: u32,
    pub min: u32,
    pub max: u32,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    Under,
    Over,
}

impl WarningKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            WarningKind::Under => "under",
            WarningKind::Over => "over",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use crate::{
        CoolDown, CustomExercise, ExerciseInstance, MovementPattern, Prescription, RepScheme,
        SlotRole, WarmUp,
    };

    use super::*;

    fn exercise(muscles: &[Muscle], sets: u32) -> ExerciseInstance {
        ExerciseInstance::Custom(CustomExercise {
            name: "Exercise".to_string(),
            pattern: MovementPattern::Core,
            role: SlotRole::Accessory,
            muscles: muscles.iter().copied().collect::<BTreeSet<_>>(),
            prescription: Prescription {
                sets,
                reps: RepScheme::Authored("10".to_string()),
                rest_seconds: 60,
                intensity_percent: 70,
                target_rpe: None,
                notes: vec![],
            },
        })
    }

    fn session(exercises: Vec<ExerciseInstance>) -> ProgramSession {
        ProgramSession {
            day: "day_1".into(),
            name: "A".to_string(),
            warm_up: WarmUp {
                cardio: String::new(),
                mobility: vec![],
                ramp_sets: vec![],
            },
            exercises,
            cool_down: CoolDown {
                walk: String::new(),
                stretches: vec![],
                myofascial_release: vec![],
            },
            notes: vec![],
        }
    }

    fn balanced() -> Vec<ProgramSession> {
        RECOMMENDED
            .iter()
            .map(|(muscle, min, _)| session(vec![exercise(&[*muscle], *min)]))
            .collect()
    }

    #[test]
    fn test_validate_optimal() {
        let report = VolumeValidator::default().validate(&balanced());
        assert_eq!(report.status, VolumeStatus::Optimal);
        assert!(report.warnings.is_empty());
        assert_eq!(report.sets_per_muscle.get(&Muscle::Back), Some(&14));
    }

    #[test]
    fn test_validate_counts_every_primary_muscle() {
        let report = VolumeValidator::default().validate(&[session(vec![
            exercise(&[Muscle::Chest, Muscle::Triceps], 4),
            exercise(&[Muscle::Chest], 3),
            exercise(&[], 5),
        ])]);
        assert_eq!(report.sets_per_muscle.get(&Muscle::Chest), Some(&7));
        assert_eq!(report.sets_per_muscle.get(&Muscle::Triceps), Some(&4));
        assert_eq!(report.sets_per_muscle.len(), 2);
    }

    #[test]
    fn test_validate_warnings() {
        let mut sessions = balanced();
        sessions.push(session(vec![exercise(&[Muscle::Biceps], 10)]));
        sessions[0] = session(vec![exercise(&[Muscle::Chest], 9)]);
        let report = VolumeValidator::default().validate(&sessions);
        assert_eq!(report.status, VolumeStatus::NeedsAttention);
        assert_eq!(
            report.warnings,
            vec![
                VolumeWarning {
                    muscle: Muscle::Chest,
                    kind: WarningKind::Under,
                    sets: 9,
                    min: 12,
                    max: 20,
                    recommendation: "Add 3 weekly sets for chest".to_string(),
                },
                VolumeWarning {
                    muscle: Muscle::Biceps,
                    kind: WarningKind::Over,
                    sets: 18,
                    min: 8,
                    max: 14,
                    recommendation: "Remove 4 weekly sets for biceps".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_validate_idempotent() {
        let validator = VolumeValidator::default();
        let sessions = vec![session(vec![exercise(&[Muscle::Quads], 30)])];
        assert_eq!(validator.validate(&sessions), validator.validate(&sessions));
    }
}
