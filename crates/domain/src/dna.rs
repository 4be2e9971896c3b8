use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::{
    AccessoryPhilosophy, ClientContext, DnaSummary, Exercise, ExerciseCatalog, ExerciseID,
    ExerciseScorer, FixedPrescription, MovementPattern, Muscle, ReadError, RepScheme,
    similarity::name_similarity,
};

pub const NAME_MATCH_THRESHOLD: f64 = 0.5;

#[allow(async_fn_in_trait)]
pub trait CardRepository {
    async fn read_dna_history(&self) -> Result<DnaHistory, ReadError>;
}

/// Workout cards a trainer authored in the past, grouped by training day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DnaHistory {
    pub days: Vec<DnaDay>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaDay {
    pub label: String,
    pub entries: Vec<DnaEntry>,
}

impl DnaDay {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaEntry {
    pub name: String,
    pub exercise_id: Option<ExerciseID>,
    pub pattern: Option<MovementPattern>,
    pub muscles: BTreeSet<Muscle>,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
}

impl DnaEntry {
    #[must_use]
    pub fn prescription(&self) -> FixedPrescription {
        FixedPrescription {
            name: self.name.clone(),
            exercise_id: self.exercise_id.clone(),
            muscles: self.muscles.clone(),
            sets: self.sets,
            reps: RepScheme::Authored(self.reps.clone()),
            rest_seconds: self.rest_seconds,
            notes: self.notes.clone(),
        }
    }
}

impl DnaHistory {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(DnaDay::is_empty)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DnaEntry> {
        self.days.iter().flat_map(|d| d.entries.iter())
    }

    /// Style preferences derived from the cards: most frequent exercises,
    /// most frequent set and rep scheme, and accessory volume.
    #[must_use]
    pub fn summary(&self) -> Option<DnaSummary> {
        if self.is_empty() {
            return None;
        }

        let names = most_frequent(self.entries().map(|e| e.name.trim().to_string()));
        let sets = most_frequent(self.entries().map(|e| e.sets));
        let reps = most_frequent(self.entries().map(|e| e.reps.trim().to_string()));

        let days = self.days.iter().filter(|d| !d.is_empty()).count();
        let entries = self.entries().count();
        let accessory_philosophy = match entries / days {
            0..=4 => AccessoryPhilosophy::Minimal,
            5..=7 => AccessoryPhilosophy::Balanced,
            _ => AccessoryPhilosophy::HighVolume,
        };

        Some(DnaSummary {
            preferred_exercises: names.into_iter().take(10).collect(),
            preferred_sets: sets.first().copied(),
            preferred_reps: reps.into_iter().next(),
            accessory_philosophy,
        })
    }
}

/// Values ordered by descending frequency, ties in order of first occurrence.
fn most_frequent<T: Clone + Eq + std::hash::Hash>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (i, value) in values.enumerate() {
        counts.entry(value).or_insert((0, i)).0 += 1;
    }
    let mut counts = counts.into_iter().collect::<Vec<_>>();
    counts.sort_by(|(_, (a, i)), (_, (b, j))| b.cmp(a).then(i.cmp(j)));
    counts.into_iter().map(|(value, _)| value).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdaptationKind {
    /// The card referenced the catalog ID.
    CanonicalId,
    /// The card's exercise name resembles a catalog name.
    NameMatch,
    /// The matched exercise was unsuitable for the client and a same-pattern
    /// exercise is used instead.
    Alternative,
}

impl AdaptationKind {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            AdaptationKind::CanonicalId => "canonical_id",
            AdaptationKind::NameMatch => "name_match",
            AdaptationKind::Alternative => "alternative",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "canonical_id" => Some(AdaptationKind::CanonicalId),
            "name_match" => Some(AdaptationKind::NameMatch),
            "alternative" => Some(AdaptationKind::Alternative),
            _ => None,
        }
    }
}

/// Maps entries of a trainer's card to catalog exercises the client can
/// perform.
#[derive(Debug, Clone, Copy)]
pub struct DnaAdaptationPipeline<'a> {
    scorer: ExerciseScorer<'a>,
}

impl<'a> DnaAdaptationPipeline<'a> {
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self {
            scorer: ExerciseScorer::new(catalog),
        }
    }

    /// Catalog exercise to perform in place of the authored one, or `None`
    /// if the entry must be kept as a custom exercise. `used` holds the IDs
    /// already present in the session.
    #[must_use]
    pub fn adapt(
        &self,
        fixed: &FixedPrescription,
        context: &ClientContext,
        used: &HashSet<ExerciseID>,
    ) -> Option<(&'a Exercise, AdaptationKind)> {
        let (exercise, kind) = self.match_entry(fixed, used)?;
        if context.can_perform(exercise) && !used.contains(&exercise.id) {
            return Some((exercise, kind));
        }
        let alternative = self
            .scorer
            .alternatives(exercise, context, used)
            .into_iter()
            .next()
            .map(|scored| (scored.exercise, AdaptationKind::Alternative));
        match alternative {
            Some((alternative, _)) => debug!(
                "\"{}\" not suitable for client, using \"{}\"",
                fixed.name, alternative.name
            ),
            None => debug!("no alternative for \"{}\", keeping as custom", fixed.name),
        }
        alternative
    }

    /// Catalog exercise the authored entry refers to, regardless of whether
    /// the client can perform it.
    #[must_use]
    pub fn match_entry(
        &self,
        fixed: &FixedPrescription,
        used: &HashSet<ExerciseID>,
    ) -> Option<(&'a Exercise, AdaptationKind)> {
        let catalog = self.scorer.catalog();
        if let Some(exercise) = fixed.exercise_id.as_ref().and_then(|id| catalog.get(id)) {
            return Some((exercise, AdaptationKind::CanonicalId));
        }

        let mut best: Option<(&'a Exercise, f64)> = None;
        for exercise in catalog.iter().filter(|e| !used.contains(&e.id)) {
            let similarity = name_similarity(&fixed.name, &exercise.name)
                .max(name_similarity(&fixed.name, &exercise.localized_name));
            if similarity >= NAME_MATCH_THRESHOLD
                && best.is_none_or(|(_, best_similarity)| similarity > best_similarity)
            {
                best = Some((exercise, similarity));
            }
        }
        if let Some((exercise, similarity)) = best {
            debug!(
                "matched \"{}\" to \"{}\" ({similarity:.2})",
                fixed.name, exercise.name
            );
        }
        best.map(|(exercise, _)| (exercise, AdaptationKind::NameMatch))
    }
}
