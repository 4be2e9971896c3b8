use std::collections::BTreeMap;

use allenatore_domain::{self as domain, Property};
use chrono::NaiveDate;

/// Serialized form of a generated program.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub goal: String,
    pub level: String,
    pub parameters: Parameters,
    pub periodization: Periodization,
    pub weeks: Vec<Week>,
    pub volume: Volume,
    pub unfilled: Vec<UnfilledSlot>,
    pub suggestions: Vec<Suggestion>,
}

impl From<&domain::GeneratedProgram> for Program {
    fn from(value: &domain::GeneratedProgram) -> Self {
        Self {
            goal: value.goal.key().to_string(),
            level: value.level.key().to_string(),
            parameters: Parameters {
                weeks: value.parameters.weeks,
                model: value.parameters.model.key().to_string(),
                sessions_per_week: value.parameters.sessions_per_week,
                mode: value.parameters.mode.key().to_string(),
                start_date: value.parameters.start_date,
            },
            periodization: Periodization {
                model: value.periodization.model_name().to_string(),
                split: value.periodization.split.clone(),
                deload_weeks: value.periodization.deload_weeks.clone(),
                rotation_period: value.periodization.rotation_period,
            },
            weeks: value.weeks.iter().map(Week::from).collect(),
            volume: Volume::from(&value.volume),
            unfilled: value.unfilled.iter().map(UnfilledSlot::from).collect(),
            suggestions: value.suggestions.iter().map(Suggestion::from).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub weeks: u32,
    pub model: String,
    pub sessions_per_week: u32,
    pub mode: String,
    pub start_date: Option<NaiveDate>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Periodization {
    pub model: String,
    pub split: String,
    pub deload_weeks: Vec<u32>,
    pub rotation_period: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Week {
    pub week: u32,
    pub start_date: Option<NaiveDate>,
    pub focus: String,
    pub intensity_percent: u32,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub is_deload: bool,
    pub target_rpe: Option<f32>,
    pub notes: String,
    pub sessions: Vec<Session>,
}

impl From<&domain::ProgramWeek> for Week {
    fn from(value: &domain::ProgramWeek) -> Self {
        let plan = &value.plan;
        Self {
            week: plan.week,
            start_date: value.start_date,
            focus: plan.focus.key().to_string(),
            intensity_percent: plan.intensity_percent(),
            sets: plan.sets,
            reps: plan.reps.to_string(),
            rest_seconds: plan.rest_seconds,
            is_deload: plan.is_deload,
            target_rpe: plan.target_rpe.map(f32::from),
            notes: plan.notes.clone(),
            sessions: value.sessions.iter().map(Session::from).collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    pub day: String,
    pub name: String,
    pub warm_up: WarmUp,
    pub exercises: Vec<ExerciseInstance>,
    pub cool_down: CoolDown,
    pub notes: Vec<String>,
}

impl From<&domain::ProgramSession> for Session {
    fn from(value: &domain::ProgramSession) -> Self {
        Self {
            day: value.day.to_string(),
            name: value.name.clone(),
            warm_up: WarmUp {
                cardio: value.warm_up.cardio.clone(),
                mobility: value.warm_up.mobility.clone(),
                ramp_sets: value
                    .warm_up
                    .ramp_sets
                    .iter()
                    .map(|r| RampSet {
                        exercise: r.exercise.clone(),
                        load_percent: r.load_percent,
                        reps: r.reps,
                    })
                    .collect(),
            },
            exercises: value.exercises.iter().map(ExerciseInstance::from).collect(),
            cool_down: CoolDown {
                walk: value.cool_down.walk.clone(),
                stretches: value.cool_down.stretches.clone(),
                myofascial_release: value.cool_down.myofascial_release.clone(),
            },
            notes: value.notes.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WarmUp {
    pub cardio: String,
    pub mobility: Vec<String>,
    pub ramp_sets: Vec<RampSet>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RampSet {
    pub exercise: String,
    pub load_percent: u32,
    pub reps: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CoolDown {
    pub walk: String,
    pub stretches: Vec<String>,
    pub myofascial_release: Vec<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExerciseInstance {
    Catalog {
        exercise_id: String,
        name: String,
        localized_name: String,
        pattern: String,
        role: String,
        primary_muscles: Vec<String>,
        equipment: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rotated_from: Option<String>,
        prescription: Prescription,
    },
    Adapted {
        exercise_id: String,
        name: String,
        localized_name: String,
        original_name: String,
        adaptation: String,
        pattern: String,
        role: String,
        primary_muscles: Vec<String>,
        equipment: Vec<String>,
        prescription: Prescription,
    },
    Custom {
        name: String,
        pattern: String,
        role: String,
        muscles: Vec<String>,
        prescription: Prescription,
    },
}

fn keys<'a, P: Property + 'a>(values: impl IntoIterator<Item = &'a P>) -> Vec<String> {
    values.into_iter().map(|p| p.key().to_string()).collect()
}

impl From<&domain::ExerciseInstance> for ExerciseInstance {
    fn from(value: &domain::ExerciseInstance) -> Self {
        match value {
            domain::ExerciseInstance::Catalog(e) => Self::Catalog {
                exercise_id: e.exercise_id.to_string(),
                name: e.name.clone(),
                localized_name: e.localized_name.clone(),
                pattern: e.pattern.key().to_string(),
                role: e.role.key().to_string(),
                primary_muscles: keys(&e.primary_muscles),
                equipment: keys(&e.equipment),
                rotated_from: e.rotated_from.as_ref().map(ToString::to_string),
                prescription: Prescription::from(&e.prescription),
            },
            domain::ExerciseInstance::Adapted(e) => Self::Adapted {
                exercise_id: e.exercise_id.to_string(),
                name: e.name.clone(),
                localized_name: e.localized_name.clone(),
                original_name: e.original_name.clone(),
                adaptation: e.adaptation.key().to_string(),
                pattern: e.pattern.key().to_string(),
                role: e.role.key().to_string(),
                primary_muscles: keys(&e.primary_muscles),
                equipment: keys(&e.equipment),
                prescription: Prescription::from(&e.prescription),
            },
            domain::ExerciseInstance::Custom(e) => Self::Custom {
                name: e.name.clone(),
                pattern: e.pattern.key().to_string(),
                role: e.role.key().to_string(),
                muscles: keys(&e.muscles),
                prescription: Prescription::from(&e.prescription),
            },
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub intensity_percent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_rpe: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl From<&domain::Prescription> for Prescription {
    fn from(value: &domain::Prescription) -> Self {
        Self {
            sets: value.sets,
            reps: value.reps.to_string(),
            rest_seconds: value.rest_seconds,
            intensity_percent: value.intensity_percent,
            target_rpe: value.target_rpe.map(f32::from),
            notes: value.notes.clone(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub status: String,
    pub sets_per_muscle: BTreeMap<String, u32>,
    pub warnings: Vec<VolumeWarning>,
}

impl From<&domain::VolumeReport> for Volume {
    fn from(value: &domain::VolumeReport) -> Self {
        Self {
            status: value.status.key().to_string(),
            sets_per_muscle: value
                .sets_per_muscle
                .iter()
                .map(|(muscle, sets)| (muscle.key().to_string(), *sets))
                .collect(),
            warnings: value
                .warnings
                .iter()
                .map(|w| VolumeWarning {
                    muscle: w.muscle.key().to_string(),
                    kind: w.kind.key().to_string(),
                    sets: w.sets,
                    min: w.min,
                    max: w.max,
                    recommendation: w.recommendation.clone(),
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VolumeWarning {
    pub muscle: String,
    pub kind: String,
    pub sets: u32,
    pub min: u32,
    pub max: u32,
    pub recommendation: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UnfilledSlot {
    pub day: String,
    pub session: String,
    pub role: String,
    pub pattern: String,
    pub target_muscles: Vec<String>,
}

impl From<&domain::UnfilledSlot> for UnfilledSlot {
    fn from(value: &domain::UnfilledSlot) -> Self {
        Self {
            day: value.day.to_string(),
            session: value.session.clone(),
            role: value.role.key().to_string(),
            pattern: value.pattern.key().to_string(),
            target_muscles: keys(&value.target_muscles),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    pub day: String,
    pub replace: String,
    pub with: String,
    pub reason: String,
}

impl From<&domain::Suggestion> for Suggestion {
    fn from(value: &domain::Suggestion) -> Self {
        Self {
            week: value.week,
            day: value.day.to_string(),
            replace: value.replace.to_string(),
            with: value.with.to_string(),
            reason: value.reason.clone(),
        }
    }
}
