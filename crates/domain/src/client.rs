use std::collections::{BTreeSet, VecDeque};

use crate::{Difficulty, Equipment, Exercise, ExerciseID, Goal};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientContext {
    pub goal: Goal,
    pub level: Difficulty,
    pub equipment: BTreeSet<Equipment>,
    pub limitations: Vec<String>,
    pub recently_used: RecentExercises,
    pub dna: Option<DnaSummary>,
}

impl ClientContext {
    #[must_use]
    pub fn new(goal: Goal, level: Difficulty) -> Self {
        Self {
            goal,
            level,
            equipment: BTreeSet::from([Equipment::Bodyweight]),
            limitations: vec![],
            recently_used: RecentExercises::default(),
            dna: None,
        }
    }

    #[must_use]
    pub fn can_perform(&self, exercise: &Exercise) -> bool {
        exercise.is_available_with(&self.equipment)
            && !exercise.is_contraindicated_for(&self.limitations)
    }

    #[must_use]
    pub fn prefers(&self, exercise: &Exercise) -> bool {
        self.dna.as_ref().is_some_and(|dna| {
            dna.preferred_exercises
                .iter()
                .any(|name| exercise.matches_name(name))
        })
    }

    #[must_use]
    pub fn accessory_philosophy(&self) -> AccessoryPhilosophy {
        self.dna
            .as_ref()
            .map_or(AccessoryPhilosophy::Balanced, |dna| dna.accessory_philosophy)
    }

    /// Preferred working sets for compound lifts, never below three so that
    /// deload weeks still reduce volume.
    #[must_use]
    pub fn preferred_sets(&self) -> Option<u32> {
        self.dna
            .as_ref()
            .and_then(|dna| dna.preferred_sets)
            .map(|sets| sets.clamp(3, 8))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSummary {
    pub preferred_exercises: Vec<String>,
    pub preferred_sets: Option<u32>,
    pub preferred_reps: Option<String>,
    pub accessory_philosophy: AccessoryPhilosophy,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryPhilosophy {
    Minimal,
    #[default]
    Balanced,
    HighVolume,
}

impl AccessoryPhilosophy {
    #[must_use]
    pub fn adjust_sets(self, sets: u32) -> u32 {
        match self {
            AccessoryPhilosophy::Minimal => sets.saturating_sub(1).max(1),
            AccessoryPhilosophy::Balanced => sets,
            AccessoryPhilosophy::HighVolume => sets + 1,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AccessoryPhilosophy::Minimal => "minimal",
            AccessoryPhilosophy::Balanced => "balanced",
            AccessoryPhilosophy::HighVolume => "high_volume",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "minimal" => Some(AccessoryPhilosophy::Minimal),
            "balanced" => Some(AccessoryPhilosophy::Balanced),
            "high_volume" => Some(AccessoryPhilosophy::HighVolume),
            _ => None,
        }
    }
}

/// Exercises the client performed recently, most recent first. The caller
/// decides what "recent" means; only the bound is enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentExercises {
    ids: VecDeque<ExerciseID>,
    capacity: usize,
}

impl RecentExercises {
    pub const DEFAULT_CAPACITY: usize = 32;

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, id: ExerciseID) {
        self.ids.retain(|i| *i != id);
        self.ids.push_front(id);
        self.ids.truncate(self.capacity);
    }

    #[must_use]
    pub fn contains(&self, id: &ExerciseID) -> bool {
        self.ids.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseID> {
        self.ids.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for RecentExercises {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl FromIterator<ExerciseID> for RecentExercises {
    /// Expects the most recent exercise first.
    fn from_iter<T: IntoIterator<Item = ExerciseID>>(iter: T) -> Self {
        let mut recent = Self::default();
        let ids = iter.into_iter().collect::<Vec<_>>();
        for id in ids.into_iter().rev() {
            recent.push(id);
        }
        recent
    }
}
