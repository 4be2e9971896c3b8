use std::{collections::BTreeSet, fmt};

use chrono::{Days, NaiveDate};

use crate::{
    AdaptationKind, DayKey, Difficulty, Equipment, Exercise, ExerciseID, Goal, MovementPattern,
    Muscle, PeriodizationModel, Property, RepRange, Rpe, SlotRole, Suggestion, TemplateMode,
    ValidationError, VolumeReport, WeekPlan,
    periodization::MAX_WEEKS,
    template::MAX_SESSIONS_PER_WEEK,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParameters {
    pub weeks: u32,
    pub model: PeriodizationModel,
    pub sessions_per_week: u32,
    pub mode: TemplateMode,
    /// First day of week 1. Each following week starts seven days later.
    pub start_date: Option<NaiveDate>,
}

impl GenerationParameters {
    pub fn parse(
        weeks: u32,
        model: &str,
        sessions_per_week: u32,
        mode: &str,
        start_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let parameters = Self {
            weeks,
            model: PeriodizationModel::try_from(model)?,
            sessions_per_week,
            mode: TemplateMode::try_from(mode)?,
            start_date,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.weeks == 0 {
            return Err(ValidationError::NonPositiveWeeks);
        }
        if self.weeks > MAX_WEEKS {
            return Err(ValidationError::TooManyWeeks(self.weeks));
        }
        if !(1..=MAX_SESSIONS_PER_WEEK).contains(&self.sessions_per_week) {
            return Err(ValidationError::SessionsPerWeek(self.sessions_per_week));
        }
        Ok(())
    }

    #[must_use]
    pub fn week_start(&self, week: u32) -> Option<NaiveDate> {
        self.start_date?
            .checked_add_days(Days::new(u64::from(week.saturating_sub(1)) * 7))
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            weeks: 8,
            model: PeriodizationModel::Linear,
            sessions_per_week: 3,
            mode: TemplateMode::Catalog,
            start_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedProgram {
    pub goal: Goal,
    pub level: Difficulty,
    pub parameters: GenerationParameters,
    pub periodization: PeriodizationSummary,
    pub weeks: Vec<ProgramWeek>,
    pub volume: VolumeReport,
    /// Required slots no exercise could fill.
    pub unfilled: Vec<UnfilledSlot>,
    /// Style suggestions applied after assembly.
    pub suggestions: Vec<Suggestion>,
}

impl GeneratedProgram {
    #[must_use]
    pub fn week(&self, week: u32) -> Option<&ProgramWeek> {
        self.weeks.iter().find(|w| w.plan.week == week)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &ProgramSession> {
        self.weeks.iter().flat_map(|w| w.sessions.iter())
    }

    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseInstance> {
        self.sessions().flat_map(|s| s.exercises.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodizationSummary {
    pub model: PeriodizationModel,
    pub split: String,
    pub deload_weeks: Vec<u32>,
    pub rotation_period: u32,
}

impl PeriodizationSummary {
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramWeek {
    pub plan: WeekPlan,
    pub start_date: Option<NaiveDate>,
    pub sessions: Vec<ProgramSession>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSession {
    pub day: DayKey,
    pub name: String,
    pub warm_up: WarmUp,
    pub exercises: Vec<ExerciseInstance>,
    pub cool_down: CoolDown,
    pub notes: Vec<String>,
}

impl ProgramSession {
    pub fn exercise_ids(&self) -> impl Iterator<Item = &ExerciseID> {
        self.exercises.iter().filter_map(ExerciseInstance::exercise_id)
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.exercise_ids().any(|i| i == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarmUp {
    pub cardio: String,
    pub mobility: Vec<String>,
    pub ramp_sets: Vec<RampSet>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RampSet {
    pub exercise: String,
    /// Percentage of the working load.
    pub load_percent: u32,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoolDown {
    pub walk: String,
    pub stretches: Vec<String>,
    pub myofascial_release: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfilledSlot {
    pub day: DayKey,
    pub session: String,
    pub role: SlotRole,
    pub pattern: MovementPattern,
    pub target_muscles: BTreeSet<Muscle>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepScheme {
    Range(RepRange),
    /// Reps as the trainer wrote them, e.g. "8/10" or "30s".
    Authored(String),
}

impl fmt::Display for RepScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepScheme::Range(range) => write!(f, "{range}"),
            RepScheme::Authored(reps) => write!(f, "{reps}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: RepScheme,
    pub rest_seconds: u32,
    pub intensity_percent: u32,
    pub target_rpe: Option<Rpe>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExerciseInstance {
    Catalog(CatalogExercise),
    Adapted(AdaptedExercise),
    Custom(CustomExercise),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExercise {
    pub exercise_id: ExerciseID,
    pub name: String,
    pub localized_name: String,
    pub pattern: MovementPattern,
    pub role: SlotRole,
    pub primary_muscles: BTreeSet<Muscle>,
    pub equipment: BTreeSet<Equipment>,
    pub prescription: Prescription,
    /// Exercise of the first rotation block this one replaces.
    pub rotated_from: Option<ExerciseID>,
}

impl CatalogExercise {
    #[must_use]
    pub fn new(exercise: &Exercise, role: SlotRole, prescription: Prescription) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            localized_name: exercise.localized_name.clone(),
            pattern: exercise.pattern,
            role,
            primary_muscles: exercise.primary_muscles.clone(),
            equipment: exercise.equipment.clone(),
            prescription,
            rotated_from: None,
        }
    }

    /// Swaps the exercise while keeping role and prescription.
    pub fn replace(&mut self, exercise: &Exercise) {
        self.exercise_id = exercise.id.clone();
        self.name = exercise.name.clone();
        self.localized_name = exercise.localized_name.clone();
        self.primary_muscles = exercise.primary_muscles.clone();
        self.equipment = exercise.equipment.clone();
    }
}

/// Catalog exercise standing in for an entry of the trainer's card.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptedExercise {
    pub exercise_id: ExerciseID,
    pub name: String,
    pub localized_name: String,
    pub pattern: MovementPattern,
    pub role: SlotRole,
    pub primary_muscles: BTreeSet<Muscle>,
    pub equipment: BTreeSet<Equipment>,
    pub original_name: String,
    pub adaptation: AdaptationKind,
    pub prescription: Prescription,
}

/// Entry of the trainer's card without a usable catalog counterpart.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomExercise {
    pub name: String,
    pub pattern: MovementPattern,
    pub role: SlotRole,
    pub muscles: BTreeSet<Muscle>,
    pub prescription: Prescription,
}

impl ExerciseInstance {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ExerciseInstance::Catalog(_) => "catalog",
            ExerciseInstance::Adapted(_) => "adapted",
            ExerciseInstance::Custom(_) => "custom",
        }
    }

    #[must_use]
    pub fn exercise_id(&self) -> Option<&ExerciseID> {
        match self {
            ExerciseInstance::Catalog(e) => Some(&e.exercise_id),
            ExerciseInstance::Adapted(e) => Some(&e.exercise_id),
            ExerciseInstance::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ExerciseInstance::Catalog(e) => &e.name,
            ExerciseInstance::Adapted(e) => &e.name,
            ExerciseInstance::Custom(e) => &e.name,
        }
    }

    #[must_use]
    pub fn role(&self) -> SlotRole {
        match self {
            ExerciseInstance::Catalog(e) => e.role,
            ExerciseInstance::Adapted(e) => e.role,
            ExerciseInstance::Custom(e) => e.role,
        }
    }

    #[must_use]
    pub fn pattern(&self) -> MovementPattern {
        match self {
            ExerciseInstance::Catalog(e) => e.pattern,
            ExerciseInstance::Adapted(e) => e.pattern,
            ExerciseInstance::Custom(e) => e.pattern,
        }
    }

    /// Muscles counted towards weekly volume.
    #[must_use]
    pub fn primary_muscles(&self) -> &BTreeSet<Muscle> {
        match self {
            ExerciseInstance::Catalog(e) => &e.primary_muscles,
            ExerciseInstance::Adapted(e) => &e.primary_muscles,
            ExerciseInstance::Custom(e) => &e.muscles,
        }
    }

    #[must_use]
    pub fn equipment(&self) -> Option<&BTreeSet<Equipment>> {
        match self {
            ExerciseInstance::Catalog(e) => Some(&e.equipment),
            ExerciseInstance::Adapted(e) => Some(&e.equipment),
            ExerciseInstance::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn prescription(&self) -> &Prescription {
        match self {
            ExerciseInstance::Catalog(e) => &e.prescription,
            ExerciseInstance::Adapted(e) => &e.prescription,
            ExerciseInstance::Custom(e) => &e.prescription,
        }
    }

    pub fn prescription_mut(&mut self) -> &mut Prescription {
        match self {
            ExerciseInstance::Catalog(e) => &mut e.prescription,
            ExerciseInstance::Adapted(e) => &mut e.prescription,
            ExerciseInstance::Custom(e) => &mut e.prescription,
        }
    }

    #[must_use]
    pub fn is_authored(&self) -> bool {
        !matches!(self, ExerciseInstance::Catalog(_))
    }
}
