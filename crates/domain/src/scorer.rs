use std::{
    cmp::Reverse,
    collections::{BTreeSet, HashSet},
};

use crate::{ClientContext, Exercise, ExerciseCatalog, ExerciseID, MovementPattern, Muscle};

const PATTERN_EXACT: f64 = 0.30;
const PATTERN_COMPATIBLE: f64 = 0.15;
const DIFFICULTY_EXACT: f64 = 0.25;
const DIFFICULTY_ADJACENT: f64 = 0.12;
const PREFERENCE: f64 = 0.20;
const EQUIPMENT_FIT: f64 = 0.15;
const FRESHNESS: f64 = 0.10;
const MUSCLE_OVERLAP: f64 = 0.05;

/// Ranks catalog exercises against a slot. Selection is greedy: callers take
/// the best remaining candidate.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseScorer<'a> {
    catalog: &'a ExerciseCatalog,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub pattern: f64,
    pub difficulty: f64,
    pub preference: f64,
    pub equipment: f64,
    pub freshness: f64,
    pub muscle_overlap: f64,
}

impl ScoreBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.pattern
            + self.difficulty
            + self.preference
            + self.equipment
            + self.freshness
            + self.muscle_overlap
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredExercise<'a> {
    pub exercise: &'a Exercise,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl<'a> ExerciseScorer<'a> {
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a ExerciseCatalog {
        self.catalog
    }

    /// Client-compatible exercises of the requested or a compatible pattern,
    /// best first. Ties keep catalog order.
    #[must_use]
    pub fn select_for_slot(
        &self,
        pattern: MovementPattern,
        target_muscles: &BTreeSet<Muscle>,
        context: &ClientContext,
    ) -> Vec<ScoredExercise<'a>> {
        let mut ranked = self
            .catalog
            .compatible_with(context)
            .filter(|e| e.pattern == pattern || e.pattern.is_compatible_with(pattern))
            .map(|exercise| {
                let breakdown = Self::score(exercise, pattern, target_muscles, context);
                ScoredExercise {
                    exercise,
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Same-pattern stand-ins for `exercise` sharing at least one primary
    /// muscle, ranked by primary-muscle overlap and then difficulty match.
    #[must_use]
    pub fn alternatives(
        &self,
        exercise: &Exercise,
        context: &ClientContext,
        excluded: &HashSet<ExerciseID>,
    ) -> Vec<ScoredExercise<'a>> {
        let mut ranked = self
            .catalog
            .compatible_with(context)
            .filter(|e| {
                e.id != exercise.id
                    && e.pattern == exercise.pattern
                    && !excluded.contains(&e.id)
                    && !e.primary_muscles.is_disjoint(&exercise.primary_muscles)
            })
            .map(|candidate| {
                let breakdown = Self::score(
                    candidate,
                    exercise.pattern,
                    &exercise.primary_muscles,
                    context,
                );
                ScoredExercise {
                    exercise: candidate,
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect::<Vec<_>>();
        ranked.sort_by_key(|s| {
            (
                Reverse(
                    s.exercise
                        .primary_muscles
                        .intersection(&exercise.primary_muscles)
                        .count(),
                ),
                s.exercise.difficulty.distance(context.level),
            )
        });
        ranked
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(
        exercise: &Exercise,
        pattern: MovementPattern,
        target_muscles: &BTreeSet<Muscle>,
        context: &ClientContext,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            pattern: if exercise.pattern == pattern {
                PATTERN_EXACT
            } else if exercise.pattern.is_compatible_with(pattern) {
                PATTERN_COMPATIBLE
            } else {
                0.0
            },
            difficulty: match exercise.difficulty.distance(context.level) {
                0 => DIFFICULTY_EXACT,
                1 => DIFFICULTY_ADJACENT,
                _ => 0.0,
            },
            preference: if context.prefers(exercise) {
                PREFERENCE
            } else {
                0.0
            },
            equipment: EQUIPMENT_FIT,
            freshness: if context.recently_used.contains(&exercise.id) {
                0.0
            } else {
                FRESHNESS
            },
            muscle_overlap: if target_muscles.is_empty() {
                0.0
            } else {
                MUSCLE_OVERLAP
                    * exercise.primary_muscles.intersection(target_muscles).count() as f64
                    / target_muscles.len() as f64
            },
        }
    }
}
