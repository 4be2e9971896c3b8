#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod assembler;
mod builder;
mod client;
mod dna;
mod enhance;
mod error;
mod exercise;
mod name;
mod pattern;
mod periodization;
mod program;
mod rotation;
mod scorer;
mod service;
mod similarity;
mod template;
mod volume;

use std::slice::Iter;

pub use assembler::{ProgramAssembler, SlotResolution};
pub use builder::{SessionTemplateBuilder, TemplateMode};
pub use catalog::{CatalogError, ExerciseCatalog, ExerciseFilter};
pub use client::{AccessoryPhilosophy, ClientContext, DnaSummary, RecentExercises};
pub use dna::{
    AdaptationKind, CardRepository, DnaAdaptationPipeline, DnaDay, DnaEntry, DnaHistory,
};
pub use enhance::{EnhancementError, ProgramEnhancer, Suggestion, apply_suggestions};
pub use error::{CreateError, ReadError, StorageError, ValidationError};
pub use exercise::{Exercise, ExerciseID, ExerciseRepository, RepRange, default_recovery_hours};
pub use name::{Name, NameError};
pub use pattern::{KeywordClassifier, PatternClassifier};
pub use periodization::{Focus, PeriodizationModel, Rpe, RpeError, WeekPlan, periodize};
pub use program::{
    AdaptedExercise, CatalogExercise, CoolDown, CustomExercise, ExerciseInstance,
    GeneratedProgram, GenerationParameters, PeriodizationSummary, Prescription, ProgramSession,
    ProgramWeek, RampSet, RepScheme, UnfilledSlot, WarmUp,
};
pub use rotation::ExerciseRotationEngine;
pub use scorer::{ExerciseScorer, ScoreBreakdown, ScoredExercise};
pub use service::{GenerateError, Service};
pub use template::{
    DayKey, FixedPrescription, SessionTemplate, Slot, SlotRole, SlotTemplateCatalog,
    WeeklyTemplate,
};
pub use volume::{VolumeReport, VolumeStatus, VolumeValidator, VolumeWarning, WarningKind};

pub trait Property: Clone + Copy + Sized + 'static {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::iter().find(|p| p.key().eq_ignore_ascii_case(key)).copied()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    // Torso
    Chest = 11,
    Back = 21,
    LowerBack = 22,
    Core = 23,
    // Shoulders
    Shoulders = 31,
    // Arms
    Biceps = 41,
    Triceps = 42,
    Forearms = 43,
    // Hips
    Glutes = 51,
    // Legs
    Quads = 61,
    Hamstrings = 62,
    Adductors = 63,
    Calves = 64,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 13] = [
            Muscle::Chest,
            Muscle::Back,
            Muscle::LowerBack,
            Muscle::Core,
            Muscle::Shoulders,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Glutes,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Adductors,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Back => "Back",
            Muscle::LowerBack => "Lower Back",
            Muscle::Core => "Core",
            Muscle::Shoulders => "Shoulders",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Glutes => "Glutes",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Adductors => "Adductors",
            Muscle::Calves => "Calves",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Muscle::Chest => "chest",
            Muscle::Back => "back",
            Muscle::LowerBack => "lower_back",
            Muscle::Core => "core",
            Muscle::Shoulders => "shoulders",
            Muscle::Biceps => "biceps",
            Muscle::Triceps => "triceps",
            Muscle::Forearms => "forearms",
            Muscle::Glutes => "glutes",
            Muscle::Quads => "quads",
            Muscle::Hamstrings => "hamstrings",
            Muscle::Adductors => "adductors",
            Muscle::Calves => "calves",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Bench,
    Box,
    Cable,
    Dumbbell,
    ExerciseBall,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 13] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::ExerciseBall,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::ExerciseBall => "Exercise Ball",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "bodyweight",
            Equipment::Barbell => "barbell",
            Equipment::Bench => "bench",
            Equipment::Box => "box",
            Equipment::Cable => "cable",
            Equipment::Dumbbell => "dumbbell",
            Equipment::ExerciseBall => "exercise_ball",
            Equipment::Kettlebell => "kettlebell",
            Equipment::Machine => "machine",
            Equipment::ParallelBars => "parallel_bars",
            Equipment::PullUpBar => "pull_up_bar",
            Equipment::ResistanceBand => "resistance_band",
            Equipment::TrapBar => "trap_bar",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MovementPattern {
    Squat,
    Hinge,
    PushHorizontal,
    PushVertical,
    PullHorizontal,
    PullVertical,
    Core,
    Rotation,
    Carry,
}

impl MovementPattern {
    /// Partial credit pairs for slot filling. Horizontal and vertical pushes
    /// (and pulls) are never interchangeable.
    #[must_use]
    pub fn is_compatible_with(self, other: MovementPattern) -> bool {
        use MovementPattern::{Carry, Core, Hinge, Rotation, Squat};
        matches!(
            (self, other),
            (Squat, Hinge)
                | (Hinge, Squat)
                | (Core, Rotation)
                | (Rotation, Core)
                | (Core, Carry)
                | (Carry, Core)
        )
    }

    #[must_use]
    pub fn is_compound(self) -> bool {
        !matches!(
            self,
            MovementPattern::Core | MovementPattern::Rotation | MovementPattern::Carry
        )
    }
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 9] = [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::PushHorizontal,
            MovementPattern::PushVertical,
            MovementPattern::PullHorizontal,
            MovementPattern::PullVertical,
            MovementPattern::Core,
            MovementPattern::Rotation,
            MovementPattern::Carry,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::PushHorizontal => "Horizontal Push",
            MovementPattern::PushVertical => "Vertical Push",
            MovementPattern::PullHorizontal => "Horizontal Pull",
            MovementPattern::PullVertical => "Vertical Pull",
            MovementPattern::Core => "Core",
            MovementPattern::Rotation => "Rotation",
            MovementPattern::Carry => "Carry",
        }
    }

    fn key(self) -> &'static str {
        match self {
            MovementPattern::Squat => "squat",
            MovementPattern::Hinge => "hinge",
            MovementPattern::PushHorizontal => "push_h",
            MovementPattern::PushVertical => "push_v",
            MovementPattern::PullHorizontal => "pull_h",
            MovementPattern::PullVertical => "pull_v",
            MovementPattern::Core => "core",
            MovementPattern::Rotation => "rotation",
            MovementPattern::Carry => "carry",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
}

impl Difficulty {
    #[must_use]
    pub fn distance(self, other: Difficulty) -> u8 {
        (self as u8).abs_diff(other as u8)
    }
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Goal {
    Strength,
    Hypertrophy,
    FatLoss,
    Endurance,
    General,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 5] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::FatLoss,
            Goal::Endurance,
            Goal::General,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::FatLoss => "Fat Loss",
            Goal::Endurance => "Endurance",
            Goal::General => "General Fitness",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::FatLoss => "fat_loss",
            Goal::Endurance => "endurance",
            Goal::General => "general",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mechanic {
    Compound,
    Isolation,
}

impl Property for Mechanic {
    fn iter() -> Iter<'static, Mechanic> {
        static MECHANIC: [Mechanic; 2] = [Mechanic::Compound, Mechanic::Isolation];
        MECHANIC.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Mechanic::Compound => "Compound",
            Mechanic::Isolation => "Isolation",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Mechanic::Compound => "compound",
            Mechanic::Isolation => "isolation",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Plyometrics,
    Stability,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 3] =
            [Category::Strength, Category::Plyometrics, Category::Stability];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Plyometrics => "Plyometrics",
            Category::Stability => "Stability",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Plyometrics => "plyometrics",
            Category::Stability => "stability",
        }
    }
}
