use std::collections::BTreeSet;

use derive_more::{Deref, Display};
use log::warn;

use crate::{ExerciseID, MovementPattern, Muscle, RepScheme, ValidationError};

pub const MAX_SLOTS: usize = 8;
pub const MAX_SESSIONS_PER_WEEK: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    MainCompound,
    SecondaryCompound,
    Accessory,
    Finisher,
}

impl SlotRole {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SlotRole::MainCompound => "main_compound",
            SlotRole::SecondaryCompound => "secondary_compound",
            SlotRole::Accessory => "accessory",
            SlotRole::Finisher => "finisher",
        }
    }

    #[must_use]
    pub fn is_compound(self) -> bool {
        matches!(self, SlotRole::MainCompound | SlotRole::SecondaryCompound)
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "main_compound" => Some(SlotRole::MainCompound),
            "secondary_compound" => Some(SlotRole::SecondaryCompound),
            "accessory" => Some(SlotRole::Accessory),
            "finisher" => Some(SlotRole::Finisher),
            _ => None,
        }
    }
}

/// What the trainer wrote on the card for one exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPrescription {
    pub name: String,
    pub exercise_id: Option<ExerciseID>,
    pub muscles: BTreeSet<Muscle>,
    pub sets: u32,
    pub reps: RepScheme,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
}

impl FixedPrescription {
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}x{}", self.name, self.sets, self.reps)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub role: SlotRole,
    pub pattern: MovementPattern,
    pub target_muscles: BTreeSet<Muscle>,
    pub required: bool,
    /// Present when the slot comes from a trainer's card.
    pub fixed: Option<FixedPrescription>,
}

impl Slot {
    #[must_use]
    pub fn is_authored(&self) -> bool {
        self.fixed.is_some()
    }
}

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(String);

impl DayKey {
    #[must_use]
    pub fn nth(index: usize) -> Self {
        Self(format!("day_{}", index + 1))
    }
}

impl From<&str> for DayKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DayKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTemplate {
    pub day: DayKey,
    pub name: String,
    pub slots: Vec<Slot>,
    /// Authored entries that did not fit into the session.
    pub overflow: Vec<FixedPrescription>,
}

impl SessionTemplate {
    #[must_use]
    pub fn new(day: DayKey, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            slots: vec![],
            overflow: vec![],
        }
    }

    /// Adds a slot unless the session is full. Authored prescriptions of
    /// rejected slots are kept as overflow.
    pub fn push(&mut self, slot: Slot) -> bool {
        if self.slots.len() < MAX_SLOTS {
            self.slots.push(slot);
            return true;
        }
        if let Some(fixed) = slot.fixed {
            warn!(
                "session \"{}\" is full, keeping \"{}\" as note",
                self.name, fixed.name
            );
            self.overflow.push(fixed);
        }
        false
    }

    #[must_use]
    pub fn notes(&self) -> Vec<String> {
        self.overflow
            .iter()
            .map(|fixed| format!("Additional exercise from trainer card: {}", fixed.summary()))
            .collect()
    }

    pub fn patterns(&self) -> impl Iterator<Item = MovementPattern> + '_ {
        self.slots.iter().map(|s| s.pattern)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WeeklyTemplate {
    pub sessions: Vec<SessionTemplate>,
}

impl WeeklyTemplate {
    #[must_use]
    pub fn get(&self, day: &DayKey) -> Option<&SessionTemplate> {
        self.sessions.iter().find(|s| s.day == *day)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Fixed weekly layouts keyed by the number of sessions per week.
pub struct SlotTemplateCatalog;

impl SlotTemplateCatalog {
    pub fn weekly(sessions_per_week: u32) -> Result<WeeklyTemplate, ValidationError> {
        let layout = Self::layout(sessions_per_week)?;
        let mut seen = Vec::with_capacity(layout.len());
        let sessions = layout
            .iter()
            .enumerate()
            .map(|(i, def)| {
                let repeat = seen.iter().filter(|n| **n == def.name).count();
                seen.push(def.name);
                let name = if repeat == 0 {
                    def.name.to_string()
                } else {
                    format!("{} {}", def.name, repeat + 1)
                };
                def.session(DayKey::nth(i), name)
            })
            .collect();
        Ok(WeeklyTemplate { sessions })
    }

    pub fn split_name(sessions_per_week: u32) -> Result<&'static str, ValidationError> {
        match sessions_per_week {
            1..=3 => Ok("full_body"),
            4 => Ok("upper_lower"),
            5 | 6 => Ok("push_pull_legs"),
            _ => Err(ValidationError::SessionsPerWeek(sessions_per_week)),
        }
    }

    fn layout(sessions_per_week: u32) -> Result<&'static [&'static SessionDef], ValidationError> {
        match sessions_per_week {
            1 => Ok(&[&FULL_BODY_A]),
            2 => Ok(&[&FULL_BODY_A, &FULL_BODY_B]),
            3 => Ok(&[&FULL_BODY_A, &FULL_BODY_B, &FULL_BODY_C]),
            4 => Ok(&[&UPPER_A, &LOWER_A, &UPPER_B, &LOWER_B]),
            5 => Ok(&[&PUSH, &PULL, &LEGS, &PUSH, &PULL]),
            6 => Ok(&[&PUSH, &PULL, &LEGS, &PUSH, &PULL, &LEGS]),
            _ => Err(ValidationError::SessionsPerWeek(sessions_per_week)),
        }
    }
}

struct SlotDef {
    role: SlotRole,
    pattern: MovementPattern,
    muscles: &'static [Muscle],
}

impl SlotDef {
    const fn new(role: SlotRole, pattern: MovementPattern, muscles: &'static [Muscle]) -> Self {
        Self {
            role,
            pattern,
            muscles,
        }
    }
}

struct SessionDef {
    name: &'static str,
    slots: &'static [SlotDef],
}

impl SessionDef {
    fn session(&self, day: DayKey, name: String) -> SessionTemplate {
        SessionTemplate {
            day,
            name,
            slots: self
                .slots
                .iter()
                .map(|def| Slot {
                    role: def.role,
                    pattern: def.pattern,
                    target_muscles: def.muscles.iter().copied().collect(),
                    required: matches!(
                        def.role,
                        SlotRole::MainCompound | SlotRole::SecondaryCompound
                    ),
                    fixed: None,
                })
                .collect(),
            overflow: vec![],
        }
    }
}

const FULL_BODY_A: SessionDef = SessionDef {
    name: "Full Body A",
    slots: &[
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Squat,
            &[Muscle::Quads, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PushHorizontal, &[Muscle::Chest]),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::PullHorizontal, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::Hinge,
            &[Muscle::Hamstrings, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Shoulders]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullVertical, &[Muscle::Biceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Core, &[Muscle::Core]),
    ],
};

const FULL_BODY_B: SessionDef = SessionDef {
    name: "Full Body B",
    slots: &[
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Hinge,
            &[Muscle::Hamstrings, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullVertical, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PushVertical,
            &[Muscle::Shoulders],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushHorizontal, &[Muscle::Chest]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Triceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Carry, &[Muscle::Core, Muscle::Forearms]),
    ],
};

const FULL_BODY_C: SessionDef = SessionDef {
    name: "Full Body C",
    slots: &[
        SlotDef::new(SlotRole::MainCompound, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullHorizontal, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PushHorizontal,
            &[Muscle::Chest],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::Hinge, &[Muscle::Glutes]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullVertical, &[Muscle::Biceps]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Squat, &[Muscle::Calves]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Rotation, &[Muscle::Core]),
    ],
};

const UPPER_A: SessionDef = SessionDef {
    name: "Upper A",
    slots: &[
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PushHorizontal, &[Muscle::Chest]),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullHorizontal, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PushVertical,
            &[Muscle::Shoulders],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::PullVertical, &[Muscle::Back]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Triceps]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullVertical, &[Muscle::Biceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Core, &[Muscle::Core]),
    ],
};

const LOWER_A: SessionDef = SessionDef {
    name: "Lower A",
    slots: &[
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Squat,
            &[Muscle::Quads, Muscle::Glutes],
        ),
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Hinge,
            &[Muscle::Hamstrings, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Hinge, &[Muscle::Hamstrings]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Squat, &[Muscle::Calves]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Core, &[Muscle::Core]),
    ],
};

const UPPER_B: SessionDef = SessionDef {
    name: "Upper B",
    slots: &[
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PushVertical, &[Muscle::Shoulders]),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullVertical, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PushHorizontal,
            &[Muscle::Chest],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::PullHorizontal, &[Muscle::Back]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullHorizontal, &[Muscle::Shoulders]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Triceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Rotation, &[Muscle::Core]),
    ],
};

const LOWER_B: SessionDef = SessionDef {
    name: "Lower B",
    slots: &[
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Hinge,
            &[Muscle::Hamstrings, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::Hinge, &[Muscle::Glutes]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Squat, &[Muscle::Calves]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Carry, &[Muscle::Core]),
    ],
};

const PUSH: SessionDef = SessionDef {
    name: "Push",
    slots: &[
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PushHorizontal, &[Muscle::Chest]),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PushVertical, &[Muscle::Shoulders]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PushHorizontal,
            &[Muscle::Chest, Muscle::Triceps],
        ),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Shoulders]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PushVertical, &[Muscle::Triceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Core, &[Muscle::Core]),
    ],
};

const PULL: SessionDef = SessionDef {
    name: "Pull",
    slots: &[
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullVertical, &[Muscle::Back]),
        SlotDef::new(SlotRole::MainCompound, MovementPattern::PullHorizontal, &[Muscle::Back]),
        SlotDef::new(
            SlotRole::SecondaryCompound,
            MovementPattern::PullHorizontal,
            &[Muscle::Back, Muscle::Biceps],
        ),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullHorizontal, &[Muscle::Shoulders]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::PullVertical, &[Muscle::Biceps]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Carry, &[Muscle::Forearms, Muscle::Core]),
    ],
};

const LEGS: SessionDef = SessionDef {
    name: "Legs",
    slots: &[
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Squat,
            &[Muscle::Quads, Muscle::Glutes],
        ),
        SlotDef::new(
            SlotRole::MainCompound,
            MovementPattern::Hinge,
            &[Muscle::Hamstrings, Muscle::Glutes],
        ),
        SlotDef::new(SlotRole::SecondaryCompound, MovementPattern::Squat, &[Muscle::Quads]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Hinge, &[Muscle::Hamstrings]),
        SlotDef::new(SlotRole::Accessory, MovementPattern::Squat, &[Muscle::Calves]),
        SlotDef::new(SlotRole::Finisher, MovementPattern::Rotation, &[Muscle::Core]),
    ],
};
