use std::{fmt, slice::Iter};

use crate::{Goal, Property, RepRange, ValidationError};

pub const MAX_WEEKS: u32 = 52;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodizationModel {
    Linear,
    Block,
    Undulating,
    Conjugate,
    Rpe,
}

impl Property for PeriodizationModel {
    fn iter() -> Iter<'static, PeriodizationModel> {
        static MODELS: [PeriodizationModel; 5] = [
            PeriodizationModel::Linear,
            PeriodizationModel::Block,
            PeriodizationModel::Undulating,
            PeriodizationModel::Conjugate,
            PeriodizationModel::Rpe,
        ];
        MODELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            PeriodizationModel::Linear => "Linear",
            PeriodizationModel::Block => "Block",
            PeriodizationModel::Undulating => "Daily Undulating",
            PeriodizationModel::Conjugate => "Conjugate",
            PeriodizationModel::Rpe => "RPE Auto-Regulation",
        }
    }

    fn key(self) -> &'static str {
        match self {
            PeriodizationModel::Linear => "linear",
            PeriodizationModel::Block => "block",
            PeriodizationModel::Undulating => "undulating",
            PeriodizationModel::Conjugate => "conjugate",
            PeriodizationModel::Rpe => "rpe",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "linear" => Some(PeriodizationModel::Linear),
            "block" => Some(PeriodizationModel::Block),
            "undulating" | "dup" => Some(PeriodizationModel::Undulating),
            "conjugate" => Some(PeriodizationModel::Conjugate),
            "rpe" | "autoregulated" => Some(PeriodizationModel::Rpe),
            _ => None,
        }
    }
}

impl TryFrom<&str> for PeriodizationModel {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_key(value).ok_or_else(|| ValidationError::UnknownModel(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    Hypertrophy,
    Strength,
    Power,
    Deload,
    Accumulation,
    Intensification,
    Realization,
    Heavy,
    Moderate,
    Light,
    MaxEffort,
    DynamicEffort,
    RpeModerate,
    RpeHigh,
    RpePeak,
}

impl Focus {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Focus::Hypertrophy => "hypertrophy",
            Focus::Strength => "strength",
            Focus::Power => "power",
            Focus::Deload => "deload",
            Focus::Accumulation => "accumulation",
            Focus::Intensification => "intensification",
            Focus::Realization => "realization",
            Focus::Heavy => "heavy",
            Focus::Moderate => "moderate",
            Focus::Light => "light",
            Focus::MaxEffort => "max_effort",
            Focus::DynamicEffort => "dynamic_effort",
            Focus::RpeModerate => "rpe_moderate",
            Focus::RpeHigh => "rpe_high",
            Focus::RpePeak => "rpe_peak",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Target rate of perceived exertion, stored in tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rpe(u8);

impl Rpe {
    pub const SIX: Rpe = Rpe(60);
    pub const SEVEN: Rpe = Rpe(70);
    pub const EIGHT: Rpe = Rpe(80);
    pub const NINE: Rpe = Rpe(90);

    pub fn new(value: f32) -> Result<Self, RpeError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RpeError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0).round() as u8;

        if v % 5 != 0 {
            return Err(RpeError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<Rpe> for f32 {
    fn from(value: Rpe) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for Rpe {
    type Error = RpeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Rpe::new(parsed_value),
            Err(_) => Err(RpeError::ParseError),
        }
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RpeError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    pub week: u32,
    /// Fraction of one-repetition maximum.
    pub intensity: f64,
    pub sets: u32,
    pub reps: RepRange,
    pub rest_seconds: u32,
    pub is_deload: bool,
    pub focus: Focus,
    pub notes: String,
    pub target_rpe: Option<Rpe>,
}

impl WeekPlan {
    fn new(
        week: u32,
        focus: Focus,
        intensity: f64,
        sets: u32,
        reps: RepRange,
        rest_seconds: u32,
    ) -> Self {
        Self {
            week,
            intensity: round(intensity),
            sets,
            reps,
            rest_seconds,
            is_deload: false,
            focus,
            notes: String::new(),
            target_rpe: None,
        }
    }

    fn deload(week: u32, target_rpe: Option<Rpe>) -> Self {
        Self {
            is_deload: true,
            notes: "Deload week: reduce load and volume to recover".to_string(),
            target_rpe,
            ..Self::new(week, Focus::Deload, 0.55, 2, RepRange::new(8, 12), 60)
        }
    }

    fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    fn apply_goal(&mut self, goal: Goal) {
        match goal {
            Goal::Strength => self.intensity = round((self.intensity + 0.025).min(1.0)),
            Goal::Endurance | Goal::FatLoss => {
                self.reps = self.reps.shifted(4);
                self.intensity = round(self.intensity - 0.05);
                self.rest_seconds = (self.rest_seconds * 3 / 4).max(30);
            }
            Goal::Hypertrophy | Goal::General => {}
        }
    }

    /// Intensity as whole percentage points.
    #[must_use]
    pub fn intensity_percent(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (self.intensity * 100.0).round() as u32;
        percent
    }
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One plan per week, numbered from 1. Every fourth week is a deload for all
/// models except block periodization, which schedules its own.
pub fn periodize(
    weeks: u32,
    model: PeriodizationModel,
    goal: Goal,
) -> Result<Vec<WeekPlan>, ValidationError> {
    if weeks == 0 {
        return Err(ValidationError::NonPositiveWeeks);
    }
    if weeks > MAX_WEEKS {
        return Err(ValidationError::TooManyWeeks(weeks));
    }

    let plans = match model {
        PeriodizationModel::Linear => linear(weeks),
        PeriodizationModel::Block => block(weeks),
        PeriodizationModel::Undulating => (1..=weeks).map(undulating).collect(),
        PeriodizationModel::Conjugate => (1..=weeks).map(conjugate).collect(),
        PeriodizationModel::Rpe => (1..=weeks).map(|w| rpe(w, weeks)).collect(),
    };

    Ok(plans
        .into_iter()
        .map(|mut plan| {
            if model != PeriodizationModel::Block && plan.week % 4 == 0 && plan.week > 1 {
                let target_rpe = (model == PeriodizationModel::Rpe).then_some(Rpe::SIX);
                return WeekPlan::deload(plan.week, target_rpe);
            }
            if !plan.is_deload {
                plan.apply_goal(goal);
            }
            plan
        })
        .collect())
}

const LINEAR_PHASES: [(Focus, f64); 4] = [
    (Focus::Hypertrophy, 0.25),
    (Focus::Strength, 0.25),
    (Focus::Power, 1.0 / 6.0),
    (Focus::Deload, 1.0 / 8.0),
];

fn linear_phase(week: u32, weeks: u32) -> Focus {
    let total = LINEAR_PHASES.iter().map(|(_, f)| f).sum::<f64>();
    let position = f64::from(week - 1) / f64::from(weeks);
    let mut cumulative = 0.0;
    for (focus, fraction) in LINEAR_PHASES {
        cumulative += fraction / total;
        if position < cumulative {
            return focus;
        }
    }
    Focus::Deload
}

fn linear(weeks: u32) -> Vec<WeekPlan> {
    let mut plans = Vec::with_capacity(weeks as usize);
    let mut previous = None;
    let mut k = 0;
    for week in 1..=weeks {
        let focus = linear_phase(week, weeks);
        if previous == Some(focus) {
            k += 1;
        } else {
            k = 0;
            previous = Some(focus);
        }
        let step = f64::from(k);
        plans.push(match focus {
            Focus::Hypertrophy => WeekPlan::new(
                week,
                focus,
                (0.67 + 0.02 * step).min(0.77),
                4,
                RepRange::new(8, 12),
                75,
            )
            .with_notes("Hypertrophy phase: moderate load, higher volume"),
            Focus::Strength => WeekPlan::new(
                week,
                focus,
                (0.80 + 0.025 * step).min(0.90),
                5,
                RepRange::new(4, 6),
                150,
            )
            .with_notes("Strength phase: heavier load, lower reps"),
            Focus::Power => WeekPlan::new(
                week,
                focus,
                (0.88 + 0.02 * step).min(0.95),
                3,
                RepRange::new(2, 3),
                180,
            )
            .with_notes("Power phase: near-maximal load, explosive intent"),
            _ => WeekPlan {
                is_deload: true,
                ..WeekPlan::new(week, Focus::Deload, 0.55, 2, RepRange::new(8, 10), 60)
            }
            .with_notes("Deload phase: recover before the next cycle"),
        });
    }
    plans
}

fn block(weeks: u32) -> Vec<WeekPlan> {
    let blocks = [
        (Focus::Accumulation, (weeks + 2) / 3),
        (Focus::Intensification, (weeks + 1) / 3),
        (Focus::Realization, weeks / 3),
    ];
    let mut plans = Vec::with_capacity(weeks as usize);
    let mut week = 1;
    for (index, (focus, length)) in blocks.iter().copied().enumerate() {
        let is_final = blocks[index + 1..].iter().all(|(_, l)| *l == 0);
        for k in 0..length {
            let step = f64::from(k);
            let plan = match focus {
                Focus::Accumulation => WeekPlan::new(
                    week,
                    focus,
                    (0.65 + 0.02 * step).min(0.75),
                    5,
                    RepRange::new(8, 12),
                    90,
                )
                .with_notes("Accumulation block: build work capacity"),
                Focus::Intensification => WeekPlan::new(
                    week,
                    focus,
                    (0.78 + 0.025 * step).min(0.88),
                    4,
                    RepRange::new(4, 6),
                    150,
                )
                .with_notes("Intensification block: convert volume into strength"),
                _ => WeekPlan::new(
                    week,
                    focus,
                    (0.88 + 0.02 * step).min(0.95),
                    3,
                    RepRange::new(1, 3),
                    210,
                )
                .with_notes("Realization block: express peak strength"),
            };
            plans.push(if !is_final && length >= 2 && k == length - 1 {
                WeekPlan {
                    intensity: round(plan.intensity * 0.75),
                    sets: plan.sets - 2,
                    is_deload: true,
                    ..plan
                }
                .with_notes("Mini-deload closing the block")
            } else {
                plan
            });
            week += 1;
        }
    }
    plans
}

fn undulating(week: u32) -> WeekPlan {
    match (week - 1) % 3 {
        0 => WeekPlan::new(week, Focus::Heavy, 0.85, 5, RepRange::new(3, 5), 180)
            .with_notes("Heavy day emphasis"),
        1 => WeekPlan::new(week, Focus::Moderate, 0.75, 4, RepRange::new(6, 8), 120)
            .with_notes("Moderate day emphasis"),
        _ => WeekPlan::new(week, Focus::Light, 0.65, 3, RepRange::new(10, 15), 60)
            .with_notes("Light day emphasis"),
    }
}

fn conjugate(week: u32) -> WeekPlan {
    if week % 2 == 1 {
        WeekPlan::new(week, Focus::MaxEffort, 0.90, 4, RepRange::new(1, 3), 240)
            .with_notes("Max-effort week: work up to a heavy single or triple")
    } else {
        WeekPlan::new(week, Focus::DynamicEffort, 0.60, 8, RepRange::new(2, 3), 60)
            .with_notes("Dynamic-effort week: submaximal load moved fast")
    }
}

fn rpe(week: u32, weeks: u32) -> WeekPlan {
    let (focus, rpe, intensity, sets, reps, rest) = match (week - 1) * 3 / weeks {
        0 => (Focus::RpeModerate, Rpe::SEVEN, 0.70, 4, RepRange::new(8, 10), 90),
        1 => (Focus::RpeHigh, Rpe::EIGHT, 0.78, 4, RepRange::new(5, 8), 120),
        _ => (Focus::RpePeak, Rpe::NINE, 0.85, 3, RepRange::new(3, 5), 180),
    };
    WeekPlan {
        target_rpe: Some(rpe),
        ..WeekPlan::new(week, focus, intensity, sets, reps, rest)
    }
    .with_notes(&format!("Auto-regulate load to RPE {rpe}"))
}
