use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::{
    Category, ClientContext, Difficulty, Equipment, Exercise, ExerciseID, Goal, Mechanic,
    MovementPattern, Muscle, RepRange, exercise::default_recovery_hours,
};

/// Read-only exercise reference data. Constructed once and passed by
/// reference to every component that needs it.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseID, usize>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(exercises.len());
        for (i, exercise) in exercises.iter().enumerate() {
            if exercise.id.trim().is_empty() {
                return Err(CatalogError::EmptyID);
            }
            if exercise.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(exercise.id.clone()));
            }
            if exercise.primary_muscles.is_empty() {
                return Err(CatalogError::NoPrimaryMuscle(exercise.id.clone()));
            }
            if exercise.equipment.is_empty() {
                return Err(CatalogError::NoEquipment(exercise.id.clone()));
            }
            if index.insert(exercise.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateID(exercise.id.clone()));
            }
        }
        Ok(Self { exercises, index })
    }

    /// Built-in catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let exercises = SEED.clone();
        let index = exercises
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { exercises, index }
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.index.get(id).map(|i| &self.exercises[*i])
    }

    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.matches_name(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Exercises the client can perform: equipment is available and no
    /// contraindication matches a limitation. Catalog order is preserved.
    pub fn compatible_with<'a, 'c>(
        &'a self,
        context: &'c ClientContext,
    ) -> impl Iterator<Item = &'a Exercise> + use<'a, 'c> {
        self.exercises.iter().filter(|e| context.can_perform(e))
    }

    #[must_use]
    pub fn search(&self, text: &str) -> Vec<&Exercise> {
        ExerciseFilter {
            name: text.to_string(),
            ..ExerciseFilter::default()
        }
        .exercises(self)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Exercise ID must not be empty")]
    EmptyID,
    #[error("Exercise \"{0}\" has no name")]
    EmptyName(ExerciseID),
    #[error("Exercise \"{0}\" has no primary muscle")]
    NoPrimaryMuscle(ExerciseID),
    #[error("Exercise \"{0}\" has no equipment requirement")]
    NoEquipment(ExerciseID),
    #[error("Duplicate exercise ID \"{0}\"")]
    DuplicateID(ExerciseID),
}

#[derive(Default, Debug, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub patterns: HashSet<MovementPattern>,
    pub difficulty: HashSet<Difficulty>,
    pub muscles: HashSet<Muscle>,
    /// Available equipment. `None` disables the equipment check.
    pub equipment: Option<BTreeSet<Equipment>>,
    pub limitations: Vec<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(&self, catalog: &'a ExerciseCatalog) -> Vec<&'a Exercise> {
        let name = self.name.trim().to_lowercase();
        catalog
            .iter()
            .filter(|e| {
                (e.name.to_lowercase().contains(&name)
                    || e.localized_name.to_lowercase().contains(&name))
                    && (self.patterns.is_empty() || self.patterns.contains(&e.pattern))
                    && (self.difficulty.is_empty() || self.difficulty.contains(&e.difficulty))
                    && (self.muscles.is_empty()
                        || self.muscles.iter().all(|m| e.primary_muscles.contains(m)))
                    && self
                        .equipment
                        .as_ref()
                        .is_none_or(|equipment| e.is_available_with(equipment))
                    && !e.is_contraindicated_for(&self.limitations)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.patterns.is_empty()
            && self.difficulty.is_empty()
            && self.muscles.is_empty()
            && self.equipment.is_none()
            && self.limitations.is_empty()
    }
}

struct BaseExercise {
    pub id: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub category: Category,
    pub mechanic: Mechanic,
    pub pattern: MovementPattern,
    pub primary_muscles: &'static [Muscle],
    pub secondary_muscles: &'static [Muscle],
    pub equipment: &'static [Equipment],
    pub difficulty: Difficulty,
    pub rep_ranges: &'static [(Goal, RepRange)],
    pub recovery_hours: u32,
    pub contraindications: &'static [&'static str],
    pub variants: &'static [ExerciseVariant],
}

impl BaseExercise {
    fn exercise(&self) -> Exercise {
        Exercise {
            id: self.id.into(),
            name: self.name.to_string(),
            localized_name: self.localized_name.to_string(),
            category: self.category,
            mechanic: self.mechanic,
            pattern: self.pattern,
            primary_muscles: self.primary_muscles.iter().copied().collect(),
            secondary_muscles: self.secondary_muscles.iter().copied().collect(),
            equipment: self.equipment.iter().copied().collect(),
            difficulty: self.difficulty,
            rep_ranges: self.rep_ranges.iter().copied().collect::<BTreeMap<_, _>>(),
            recovery_hours: if self.recovery_hours == 0 {
                default_recovery_hours(self.mechanic)
            } else {
                self.recovery_hours
            },
            contraindications: self
                .contraindications
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    fn variant(&self, v: &ExerciseVariant) -> Exercise {
        let base = self.exercise();
        Exercise {
            id: v.id.into(),
            name: v.name.to_string(),
            localized_name: v.localized_name.to_string(),
            category: v.category.unwrap_or(base.category),
            equipment: v
                .equipment
                .map_or(base.equipment, |e| e.iter().copied().collect()),
            difficulty: v.difficulty.unwrap_or(base.difficulty),
            contraindications: v.contraindications.map_or(base.contraindications, |c| {
                c.iter().map(ToString::to_string).collect()
            }),
            ..base
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub category: Option<Category>,
    pub equipment: Option<&'static [Equipment]>,
    pub difficulty: Option<Difficulty>,
    pub contraindications: Option<&'static [&'static str]>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            localized_name: "",
            category: None,
            equipment: None,
            difficulty: None,
            contraindications: None,
        }
    }
}

/// Seed exercises in catalog order: every base exercise is followed by its
/// variants.
pub(crate) static SEED: std::sync::LazyLock<Vec<Exercise>> = std::sync::LazyLock::new(|| {
    EXERCISE_VARIANTS
        .iter()
        .flat_map(|e| {
            std::iter::once(e.exercise()).chain(e.variants.iter().map(|v| e.variant(v)))
        })
        .collect()
});

const EXERCISE_VARIANTS: &[BaseExercise] = &[
    BaseExercise {
        id: "back_squat",
        name: "Barbell Back Squat",
        localized_name: "Squat con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings, Muscle::LowerBack, Muscle::Core],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["ginocchio", "lombare"],
        variants: &[
            ExerciseVariant {
                id: "front_squat",
                name: "Barbell Front Squat",
                localized_name: "Front Squat con Bilanciere",
                difficulty: Some(Difficulty::Advanced),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "goblet_squat",
        name: "Goblet Squat",
        localized_name: "Goblet Squat con Manubrio",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Core],
        equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["ginocchio"],
        variants: &[
            ExerciseVariant {
                id: "kettlebell_goblet_squat",
                name: "Kettlebell Goblet Squat",
                localized_name: "Goblet Squat con Kettlebell",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        localized_name: "Squat a Corpo Libero",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "split_squat",
        name: "Bulgarian Split Squat",
        localized_name: "Affondi Bulgari",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Adductors, Muscle::Hamstrings],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["ginocchio"],
        variants: &[
            ExerciseVariant {
                id: "bodyweight_split_squat",
                name: "Bodyweight Split Squat",
                localized_name: "Split Squat a Corpo Libero",
                equipment: Some(&[Equipment::Bodyweight]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "walking_lunge",
        name: "Walking Lunge",
        localized_name: "Affondi in Camminata",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings, Muscle::Adductors],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["ginocchio"],
        variants: &[
            ExerciseVariant {
                id: "dumbbell_walking_lunge",
                name: "Dumbbell Walking Lunge",
                localized_name: "Affondi in Camminata con Manubri",
                equipment: Some(&[Equipment::Dumbbell]),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "leg_press",
        name: "Leg Press",
        localized_name: "Pressa",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "leg_extension",
        name: "Leg Extension",
        localized_name: "Leg Extension",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "jump_squat",
        name: "Jump Squat",
        localized_name: "Squat Jump",
        category: Category::Plyometrics,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads, Muscle::Glutes],
        secondary_muscles: &[Muscle::Calves],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["ginocchio", "caviglia"],
        variants: &[],
    },
    BaseExercise {
        id: "calf_raise",
        name: "Standing Calf Raise",
        localized_name: "Calf Raise in Piedi",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Calves],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[
            (Goal::Hypertrophy, RepRange::new(12, 20)),
            (Goal::Strength, RepRange::new(8, 12)),
        ],
        recovery_hours: 24,
        contraindications: &["caviglia"],
        variants: &[
            ExerciseVariant {
                id: "machine_calf_raise",
                name: "Machine Calf Raise",
                localized_name: "Calf Raise alla Macchina",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "wall_sit",
        name: "Wall Sit",
        localized_name: "Sedia al Muro",
        category: Category::Stability,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Squat,
        primary_muscles: &[Muscle::Quads],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "deadlift",
        name: "Conventional Deadlift",
        localized_name: "Stacco da Terra",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes, Muscle::LowerBack],
        secondary_muscles: &[Muscle::Back, Muscle::Forearms, Muscle::Quads],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Advanced,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["lombare", "schiena"],
        variants: &[
            ExerciseVariant {
                id: "trap_bar_deadlift",
                name: "Trap Bar Deadlift",
                localized_name: "Stacco con Trap Bar",
                equipment: Some(&[Equipment::TrapBar]),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "romanian_deadlift",
        name: "Romanian Deadlift",
        localized_name: "Stacco Rumeno",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes],
        secondary_muscles: &[Muscle::LowerBack],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["lombare"],
        variants: &[
            ExerciseVariant {
                id: "dumbbell_romanian_deadlift",
                name: "Dumbbell Romanian Deadlift",
                localized_name: "Stacco Rumeno con Manubri",
                equipment: Some(&[Equipment::Dumbbell]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "hip_thrust",
        name: "Barbell Hip Thrust",
        localized_name: "Hip Thrust con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "glute_bridge",
        name: "Glute Bridge",
        localized_name: "Ponte Glutei",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Glutes],
        secondary_muscles: &[Muscle::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[
            ExerciseVariant {
                id: "single_leg_glute_bridge",
                name: "Single-Leg Glute Bridge",
                localized_name: "Ponte Glutei Monopodalico",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "kettlebell_swing",
        name: "Kettlebell Swing",
        localized_name: "Swing con Kettlebell",
        category: Category::Plyometrics,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        secondary_muscles: &[Muscle::LowerBack, Muscle::Core],
        equipment: &[Equipment::Kettlebell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["lombare"],
        variants: &[],
    },
    BaseExercise {
        id: "good_morning",
        name: "Barbell Good Morning",
        localized_name: "Good Morning con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings, Muscle::LowerBack],
        secondary_muscles: &[Muscle::Glutes],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Advanced,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["lombare", "schiena"],
        variants: &[],
    },
    BaseExercise {
        id: "back_extension",
        name: "Machine Back Extension",
        localized_name: "Iperestensioni alla Panca",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::LowerBack],
        secondary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["lombare"],
        variants: &[
            ExerciseVariant {
                id: "prone_superman",
                name: "Prone Superman",
                localized_name: "Superman a Terra",
                equipment: Some(&[Equipment::Bodyweight]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "leg_curl",
        name: "Lying Leg Curl",
        localized_name: "Leg Curl Sdraiato",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings],
        secondary_muscles: &[],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "single_leg_hinge",
        name: "Single-Leg Hip Hinge",
        localized_name: "Stacco Monopodalico a Corpo Libero",
        category: Category::Stability,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings, Muscle::Glutes],
        secondary_muscles: &[Muscle::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "nordic_curl",
        name: "Nordic Hamstring Curl",
        localized_name: "Nordic Curl",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Hinge,
        primary_muscles: &[Muscle::Hamstrings],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Advanced,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["ginocchio"],
        variants: &[],
    },
    BaseExercise {
        id: "bench_press",
        name: "Barbell Bench Press",
        localized_name: "Panca Piana con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushHorizontal,
        primary_muscles: &[Muscle::Chest],
        secondary_muscles: &[Muscle::Triceps, Muscle::Shoulders],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla"],
        variants: &[
            ExerciseVariant {
                id: "incline_bench_press",
                name: "Barbell Incline Bench Press",
                localized_name: "Panca Inclinata con Bilanciere",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_bench_press",
                name: "Dumbbell Bench Press",
                localized_name: "Panca Piana con Manubri",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "incline_dumbbell_press",
                name: "Dumbbell Incline Bench Press",
                localized_name: "Panca Inclinata con Manubri",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_chest_press",
                name: "Machine Chest Press",
                localized_name: "Chest Press alla Macchina",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "push_up",
        name: "Push-Up",
        localized_name: "Piegamenti sulle Braccia",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushHorizontal,
        primary_muscles: &[Muscle::Chest],
        secondary_muscles: &[Muscle::Triceps, Muscle::Shoulders, Muscle::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["polso"],
        variants: &[
            ExerciseVariant {
                id: "incline_push_up",
                name: "Incline Push-Up",
                localized_name: "Piegamenti Inclinati",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "decline_push_up",
                name: "Decline Push-Up",
                localized_name: "Piegamenti Declinati",
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "dips",
        name: "Parallel Bar Dip",
        localized_name: "Dip alle Parallele",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushHorizontal,
        primary_muscles: &[Muscle::Chest, Muscle::Triceps],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::ParallelBars],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla", "gomito"],
        variants: &[],
    },
    BaseExercise {
        id: "cable_fly",
        name: "Cable Fly",
        localized_name: "Croci ai Cavi",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PushHorizontal,
        primary_muscles: &[Muscle::Chest],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["spalla"],
        variants: &[
            ExerciseVariant {
                id: "dumbbell_fly",
                name: "Dumbbell Fly",
                localized_name: "Croci con Manubri",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "overhead_press",
        name: "Barbell Overhead Press",
        localized_name: "Lento Avanti con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Shoulders],
        secondary_muscles: &[Muscle::Triceps, Muscle::Core],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla", "lombare"],
        variants: &[
            ExerciseVariant {
                id: "dumbbell_shoulder_press",
                name: "Dumbbell Shoulder Press",
                localized_name: "Lento Avanti con Manubri",
                equipment: Some(&[Equipment::Dumbbell]),
                difficulty: Some(Difficulty::Beginner),
                contraindications: Some(&["spalla"]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "kettlebell_press",
                name: "Kettlebell Overhead Press",
                localized_name: "Lento Avanti con Kettlebell",
                equipment: Some(&[Equipment::Kettlebell]),
                contraindications: Some(&["spalla"]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "pike_push_up",
        name: "Pike Push-Up",
        localized_name: "Piegamenti Pike",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Shoulders],
        secondary_muscles: &[Muscle::Triceps],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla", "polso"],
        variants: &[],
    },
    BaseExercise {
        id: "handstand_push_up",
        name: "Handstand Push-Up",
        localized_name: "Piegamenti in Verticale",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Shoulders, Muscle::Triceps],
        secondary_muscles: &[Muscle::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Advanced,
        rep_ranges: &[],
        recovery_hours: 72,
        contraindications: &["spalla", "polso", "cervicale"],
        variants: &[],
    },
    BaseExercise {
        id: "lateral_raise",
        name: "Dumbbell Lateral Raise",
        localized_name: "Alzate Laterali con Manubri",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Shoulders],
        secondary_muscles: &[],
        equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["spalla"],
        variants: &[
            ExerciseVariant {
                id: "cable_lateral_raise",
                name: "Cable Lateral Raise",
                localized_name: "Alzate Laterali ai Cavi",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "triceps_pushdown",
        name: "Cable Triceps Pushdown",
        localized_name: "Push Down ai Cavi",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Triceps],
        secondary_muscles: &[],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["gomito"],
        variants: &[
            ExerciseVariant {
                id: "overhead_triceps_extension",
                name: "Dumbbell Overhead Triceps Extension",
                localized_name: "French Press con Manubrio",
                equipment: Some(&[Equipment::Dumbbell]),
                contraindications: Some(&["gomito", "spalla"]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "bench_dip",
        name: "Bench Dip",
        localized_name: "Dip su Panca",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PushVertical,
        primary_muscles: &[Muscle::Triceps],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["spalla", "polso"],
        variants: &[],
    },
    BaseExercise {
        id: "barbell_row",
        name: "Barbell Bent-Over Row",
        localized_name: "Rematore con Bilanciere",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PullHorizontal,
        primary_muscles: &[Muscle::Back],
        secondary_muscles: &[Muscle::Biceps, Muscle::LowerBack],
        equipment: &[Equipment::Barbell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["lombare"],
        variants: &[
            ExerciseVariant {
                id: "dumbbell_row",
                name: "One-Arm Dumbbell Row",
                localized_name: "Rematore con Manubrio",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                difficulty: Some(Difficulty::Beginner),
                contraindications: Some(&[]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "seated_cable_row",
                name: "Seated Cable Row",
                localized_name: "Pulley Basso",
                equipment: Some(&[Equipment::Cable]),
                difficulty: Some(Difficulty::Beginner),
                contraindications: Some(&[]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_row",
                name: "Chest-Supported Machine Row",
                localized_name: "Rematore alla Macchina",
                equipment: Some(&[Equipment::Machine]),
                difficulty: Some(Difficulty::Beginner),
                contraindications: Some(&[]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "inverted_row",
        name: "Inverted Row",
        localized_name: "Rematore Inverso a Corpo Libero",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PullHorizontal,
        primary_muscles: &[Muscle::Back],
        secondary_muscles: &[Muscle::Biceps, Muscle::Core],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "face_pull",
        name: "Cable Face Pull",
        localized_name: "Face Pull ai Cavi",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PullHorizontal,
        primary_muscles: &[Muscle::Shoulders],
        secondary_muscles: &[Muscle::Back],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[
            ExerciseVariant {
                id: "band_pull_apart",
                name: "Band Pull-Apart",
                localized_name: "Aperture con Elastico",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "prone_y_raise",
        name: "Prone Y-Raise",
        localized_name: "Alzate a Y a Terra",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PullHorizontal,
        primary_muscles: &[Muscle::Shoulders],
        secondary_muscles: &[Muscle::Back],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "pull_up",
        name: "Pull-Up",
        localized_name: "Trazioni alla Sbarra",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PullVertical,
        primary_muscles: &[Muscle::Back],
        secondary_muscles: &[Muscle::Biceps, Muscle::Forearms],
        equipment: &[Equipment::PullUpBar],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla"],
        variants: &[
            ExerciseVariant {
                id: "chin_up",
                name: "Chin-Up",
                localized_name: "Trazioni Presa Supina",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "band_assisted_pull_up",
                name: "Band-Assisted Pull-Up",
                localized_name: "Trazioni Assistite con Elastico",
                equipment: Some(&[Equipment::PullUpBar, Equipment::ResistanceBand]),
                difficulty: Some(Difficulty::Beginner),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "lat_pulldown",
        name: "Machine Lat Pulldown",
        localized_name: "Lat Machine",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PullVertical,
        primary_muscles: &[Muscle::Back],
        secondary_muscles: &[Muscle::Biceps],
        equipment: &[Equipment::Machine],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "prone_pulldown",
        name: "Prone Floor Pulldown",
        localized_name: "Lat Pulldown a Terra",
        category: Category::Stability,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::PullVertical,
        primary_muscles: &[Muscle::Back],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "dumbbell_curl",
        name: "Dumbbell Biceps Curl",
        localized_name: "Curl con Manubri",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::PullVertical,
        primary_muscles: &[Muscle::Biceps],
        secondary_muscles: &[Muscle::Forearms],
        equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["gomito"],
        variants: &[
            ExerciseVariant {
                id: "barbell_curl",
                name: "Barbell Curl",
                localized_name: "Curl con Bilanciere",
                equipment: Some(&[Equipment::Barbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "hammer_curl",
                name: "Dumbbell Hammer Curl",
                localized_name: "Curl a Martello",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "cable_curl",
                name: "Cable Curl",
                localized_name: "Curl ai Cavi",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "band_curl",
                name: "Resistance Band Curl",
                localized_name: "Curl con Elastico",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "plank",
        name: "Front Plank",
        localized_name: "Plank",
        category: Category::Stability,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Core,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[
            (Goal::Strength, RepRange::new(30, 45)),
            (Goal::Hypertrophy, RepRange::new(30, 60)),
            (Goal::FatLoss, RepRange::new(30, 60)),
            (Goal::Endurance, RepRange::new(45, 90)),
            (Goal::General, RepRange::new(30, 60)),
        ],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[
            ExerciseVariant {
                id: "side_plank",
                name: "Side Plank",
                localized_name: "Plank Laterale",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "dead_bug",
        name: "Dead Bug",
        localized_name: "Dead Bug",
        category: Category::Stability,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Core,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "crunch",
        name: "Crunch",
        localized_name: "Crunch a Terra",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Core,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["cervicale"],
        variants: &[],
    },
    BaseExercise {
        id: "hanging_leg_raise",
        name: "Hanging Leg Raise",
        localized_name: "Sollevamento Gambe alla Sbarra",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Core,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[Muscle::Forearms],
        equipment: &[Equipment::PullUpBar],
        difficulty: Difficulty::Advanced,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["spalla"],
        variants: &[],
    },
    BaseExercise {
        id: "ball_rollout",
        name: "Stability Ball Rollout",
        localized_name: "Rollout con Fitball",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Core,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[Muscle::Shoulders, Muscle::Back],
        equipment: &[Equipment::ExerciseBall],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["lombare"],
        variants: &[],
    },
    BaseExercise {
        id: "russian_twist",
        name: "Russian Twist",
        localized_name: "Russian Twist",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Rotation,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["lombare"],
        variants: &[],
    },
    BaseExercise {
        id: "cable_woodchop",
        name: "Cable Woodchop",
        localized_name: "Woodchop ai Cavi",
        category: Category::Strength,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Rotation,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[Muscle::Shoulders],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["lombare"],
        variants: &[],
    },
    BaseExercise {
        id: "pallof_press",
        name: "Cable Pallof Press",
        localized_name: "Pallof Press ai Cavi",
        category: Category::Stability,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Rotation,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[],
        equipment: &[Equipment::Cable],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[
            ExerciseVariant {
                id: "band_pallof_press",
                name: "Band Pallof Press",
                localized_name: "Pallof Press con Elastico",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "bird_dog",
        name: "Bird Dog",
        localized_name: "Bird Dog",
        category: Category::Stability,
        mechanic: Mechanic::Isolation,
        pattern: MovementPattern::Rotation,
        primary_muscles: &[Muscle::Core],
        secondary_muscles: &[Muscle::LowerBack, Muscle::Glutes],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "farmers_carry",
        name: "Dumbbell Farmer's Carry",
        localized_name: "Farmer's Walk con Manubri",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Carry,
        primary_muscles: &[Muscle::Forearms, Muscle::Core],
        secondary_muscles: &[Muscle::Back, Muscle::Glutes],
        equipment: &[Equipment::Dumbbell],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &["lombare"],
        variants: &[
            ExerciseVariant {
                id: "kettlebell_farmers_carry",
                name: "Kettlebell Farmer's Carry",
                localized_name: "Farmer's Walk con Kettlebell",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "trap_bar_carry",
                name: "Trap Bar Carry",
                localized_name: "Farmer's Walk con Trap Bar",
                equipment: Some(&[Equipment::TrapBar]),
                difficulty: Some(Difficulty::Intermediate),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "suitcase_carry",
        name: "Kettlebell Suitcase Carry",
        localized_name: "Suitcase Carry con Kettlebell",
        category: Category::Strength,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Carry,
        primary_muscles: &[Muscle::Core, Muscle::Forearms],
        secondary_muscles: &[Muscle::Glutes],
        equipment: &[Equipment::Kettlebell],
        difficulty: Difficulty::Intermediate,
        rep_ranges: &[],
        recovery_hours: 48,
        contraindications: &[],
        variants: &[],
    },
    BaseExercise {
        id: "bear_crawl",
        name: "Bear Crawl",
        localized_name: "Camminata dell'Orso",
        category: Category::Stability,
        mechanic: Mechanic::Compound,
        pattern: MovementPattern::Carry,
        primary_muscles: &[Muscle::Core, Muscle::Shoulders],
        secondary_muscles: &[Muscle::Quads],
        equipment: &[Equipment::Bodyweight],
        difficulty: Difficulty::Beginner,
        rep_ranges: &[],
        recovery_hours: 24,
        contraindications: &["polso"],
        variants: &[],
    },
];
