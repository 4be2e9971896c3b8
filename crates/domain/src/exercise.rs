use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{
    Category, CreateError, Difficulty, Equipment, Goal, Mechanic, MovementPattern, Muscle, Name,
    ReadError,
};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        pattern: MovementPattern,
        primary_muscles: BTreeSet<Muscle>,
        equipment: BTreeSet<Equipment>,
    ) -> Result<Exercise, CreateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub localized_name: String,
    pub category: Category,
    pub mechanic: Mechanic,
    pub pattern: MovementPattern,
    pub primary_muscles: BTreeSet<Muscle>,
    pub secondary_muscles: BTreeSet<Muscle>,
    pub equipment: BTreeSet<Equipment>,
    pub difficulty: Difficulty,
    pub rep_ranges: BTreeMap<Goal, RepRange>,
    pub recovery_hours: u32,
    pub contraindications: Vec<String>,
}

impl Exercise {
    /// Entry created on behalf of a trainer. Only the movement data the
    /// trainer supplied is known, everything else takes the defaults.
    #[must_use]
    pub fn custom(
        id: ExerciseID,
        name: &Name,
        pattern: MovementPattern,
        primary_muscles: BTreeSet<Muscle>,
        equipment: BTreeSet<Equipment>,
    ) -> Self {
        let mechanic = if pattern.is_compound() {
            Mechanic::Compound
        } else {
            Mechanic::Isolation
        };
        let equipment = if equipment.is_empty() {
            BTreeSet::from([Equipment::Bodyweight])
        } else {
            equipment
        };
        Self {
            id,
            name: name.to_string(),
            localized_name: name.to_string(),
            category: Category::Strength,
            mechanic,
            pattern,
            primary_muscles,
            secondary_muscles: BTreeSet::new(),
            equipment,
            difficulty: Difficulty::Intermediate,
            rep_ranges: BTreeMap::new(),
            recovery_hours: default_recovery_hours(mechanic),
            contraindications: vec![],
        }
    }

    #[must_use]
    pub fn rep_range(&self, goal: Goal) -> RepRange {
        self.rep_ranges
            .get(&goal)
            .copied()
            .unwrap_or_else(|| RepRange::default_for(self.mechanic, goal))
    }

    /// Equipment requirements must be covered by what the client owns.
    /// Bodyweight is always available.
    #[must_use]
    pub fn is_available_with(&self, equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment
            .iter()
            .all(|e| *e == Equipment::Bodyweight || equipment.contains(e))
    }

    #[must_use]
    pub fn is_contraindicated_for(&self, limitations: &[String]) -> bool {
        limitations
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .any(|limitation| {
                self.contraindications
                    .iter()
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .any(|tag| tag.contains(&limitation) || limitation.contains(&tag))
            })
    }

    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.localized_name.to_lowercase() == name.to_lowercase()
    }

    #[must_use]
    pub fn is_bodyweight_only(&self) -> bool {
        self.equipment.iter().all(|e| *e == Equipment::Bodyweight)
    }
}

#[must_use]
pub fn default_recovery_hours(mechanic: Mechanic) -> u32 {
    match mechanic {
        Mechanic::Compound => 48,
        Mechanic::Isolation => 24,
    }
}

#[derive(Deref, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(format!("custom_{}", value.simple()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

impl RepRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    #[must_use]
    pub fn default_for(mechanic: Mechanic, goal: Goal) -> Self {
        match (mechanic, goal) {
            (Mechanic::Compound, Goal::Strength) => Self::new(3, 6),
            (Mechanic::Compound, Goal::Hypertrophy) => Self::new(6, 12),
            (Mechanic::Compound, Goal::FatLoss) => Self::new(10, 15),
            (Mechanic::Compound, Goal::Endurance) => Self::new(15, 20),
            (Mechanic::Compound, Goal::General) => Self::new(8, 12),
            (Mechanic::Isolation, Goal::Strength) => Self::new(6, 10),
            (Mechanic::Isolation, Goal::Hypertrophy | Goal::General) => Self::new(10, 15),
            (Mechanic::Isolation, Goal::FatLoss) => Self::new(12, 20),
            (Mechanic::Isolation, Goal::Endurance) => Self::new(15, 25),
        }
    }

    #[must_use]
    pub fn shifted(self, by: u32) -> Self {
        Self::new(self.min + by, self.max + by)
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(equipment: &[Equipment], contraindications: &[&str]) -> Exercise {
        Exercise {
            id: "a".into(),
            name: "Barbell Back Squat".to_string(),
            localized_name: "Squat con Bilanciere".to_string(),
            category: Category::Strength,
            mechanic: Mechanic::Compound,
            pattern: MovementPattern::Squat,
            primary_muscles: BTreeSet::from([Muscle::Quads, Muscle::Glutes]),
            secondary_muscles: BTreeSet::new(),
            equipment: equipment.iter().copied().collect(),
            difficulty: Difficulty::Intermediate,
            rep_ranges: BTreeMap::from([(Goal::Strength, RepRange::new(2, 5))]),
            recovery_hours: 72,
            contraindications: contraindications.iter().map(ToString::to_string).collect(),
        }
    }

    #[rstest]
    #[case(&[Equipment::Bodyweight], &[], true)]
    #[case(&[Equipment::Barbell], &[Equipment::Barbell, Equipment::Bench], true)]
    #[case(&[Equipment::Barbell, Equipment::Bench], &[Equipment::Barbell], false)]
    #[case(&[Equipment::Dumbbell], &[Equipment::Bodyweight], false)]
    fn test_exercise_is_available_with(
        #[case] required: &[Equipment],
        #[case] owned: &[Equipment],
        #[case] expected: bool,
    ) {
        assert_eq!(
            exercise(required, &[]).is_available_with(&owned.iter().copied().collect()),
            expected
        );
    }

    #[rstest]
    #[case(&["ginocchio"], &["ginocchio"], true)]
    #[case(&["dolore_ginocchio"], &["Ginocchio"], true)]
    #[case(&["ginocchio"], &["dolore ginocchio destro"], true)]
    #[case(&["spalla"], &["ginocchio"], false)]
    #[case(&["spalla"], &["", "  "], false)]
    #[case(&[], &["ginocchio"], false)]
    fn test_exercise_is_contraindicated_for(
        #[case] tags: &[&str],
        #[case] limitations: &[&str],
        #[case] expected: bool,
    ) {
        let limitations = limitations.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            exercise(&[Equipment::Barbell], tags).is_contraindicated_for(&limitations),
            expected
        );
    }

    #[test]
    fn test_exercise_rep_range() {
        let e = exercise(&[Equipment::Barbell], &[]);
        assert_eq!(e.rep_range(Goal::Strength), RepRange::new(2, 5));
        assert_eq!(e.rep_range(Goal::Hypertrophy), RepRange::new(6, 12));
    }

    #[test]
    fn test_exercise_matches_name() {
        let e = exercise(&[Equipment::Barbell], &[]);
        assert!(e.matches_name("barbell back squat"));
        assert!(e.matches_name(" SQUAT CON BILANCIERE "));
        assert!(!e.matches_name("front squat"));
    }

    #[test]
    fn test_exercise_custom() {
        let e = Exercise::custom(
            "custom_1".into(),
            &Name::new("Sled Push").unwrap(),
            MovementPattern::Carry,
            BTreeSet::from([Muscle::Quads]),
            BTreeSet::new(),
        );
        assert_eq!(e.mechanic, Mechanic::Isolation);
        assert_eq!(e.equipment, BTreeSet::from([Equipment::Bodyweight]));
        assert_eq!(e.recovery_hours, 24);
    }

    #[rstest]
    #[case(RepRange::new(8, 12), "8-12")]
    #[case(RepRange::new(5, 5), "5")]
    #[case(RepRange::new(12, 8), "8-12")]
    fn test_rep_range_display(#[case] input: RepRange, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[test]
    fn test_exercise_id_from_uuid() {
        let id = ExerciseID::from(Uuid::from_u128(1));
        assert_eq!(id.to_string(), "custom_00000000000000000000000000000001");
    }
}
