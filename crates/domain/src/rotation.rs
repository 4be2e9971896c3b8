use std::collections::HashSet;

use log::debug;

use crate::{ClientContext, Exercise, ExerciseID, ExerciseScorer};

/// Swaps main lifts for pattern-equivalent exercises in fixed week blocks.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseRotationEngine<'a> {
    scorer: ExerciseScorer<'a>,
    period: u32,
}

impl<'a> ExerciseRotationEngine<'a> {
    #[must_use]
    pub fn new(scorer: ExerciseScorer<'a>, weeks: u32) -> Self {
        Self {
            scorer,
            period: if weeks < 8 { 2 } else { 4 },
        }
    }

    /// Number of consecutive weeks using the same exercise.
    #[must_use]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Rotation block of a week, starting at 0 for the first block.
    #[must_use]
    pub fn block(&self, week: u32) -> u32 {
        week.saturating_sub(1) / self.period
    }

    /// Exercise to perform in `week` in place of `exercise`. The first block
    /// keeps the original; block `r` uses the `(r - 1) mod n`-th of the `n`
    /// ranked alternatives of the same mechanic not in `session`.
    #[must_use]
    pub fn rotate(
        &self,
        exercise: &'a Exercise,
        week: u32,
        context: &ClientContext,
        session: &HashSet<ExerciseID>,
    ) -> &'a Exercise {
        let block = self.block(week) as usize;
        if block == 0 {
            return exercise;
        }
        let alternatives = self
            .scorer
            .alternatives(exercise, context, session)
            .into_iter()
            .filter(|s| s.exercise.mechanic == exercise.mechanic)
            .collect::<Vec<_>>();
        if alternatives.is_empty() {
            return exercise;
        }
        let alternative = alternatives[(block - 1) % alternatives.len()].exercise;
        debug!(
            "week {week}: rotating \"{}\" to \"{}\"",
            exercise.name, alternative.name
        );
        alternative
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Difficulty, Equipment, ExerciseCatalog, Goal, Mechanic, RecentExercises};

    use super::*;

    fn context(equipment: &[Equipment]) -> ClientContext {
        ClientContext {
            goal: Goal::Strength,
            level: Difficulty::Intermediate,
            equipment: equipment.iter().copied().collect(),
            limitations: vec![],
            recently_used: RecentExercises::default(),
            dna: None,
        }
    }

    #[rstest]
    #[case(4, 2, &[0, 0, 1, 1])]
    #[case(7, 2, &[0, 0, 1, 1, 2, 2, 3])]
    #[case(8, 4, &[0, 0, 0, 0, 1, 1, 1, 1])]
    fn test_blocks(#[case] weeks: u32, #[case] period: u32, #[case] expected: &[u32]) {
        let catalog = ExerciseCatalog::seeded();
        let engine = ExerciseRotationEngine::new(ExerciseScorer::new(&catalog), weeks);
        assert_eq!(engine.period(), period);
        assert_eq!(
            (1..=weeks).map(|w| engine.block(w)).collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_rotate() {
        let catalog = ExerciseCatalog::seeded();
        let scorer = ExerciseScorer::new(&catalog);
        let engine = ExerciseRotationEngine::new(scorer, 6);
        let context = context(&[Equipment::Barbell, Equipment::Dumbbell, Equipment::Bench]);
        let bench_press = catalog.get(&"bench_press".into()).unwrap();
        let alternatives = scorer
            .alternatives(bench_press, &context, &HashSet::new())
            .into_iter()
            .filter(|s| s.exercise.mechanic == Mechanic::Compound)
            .collect::<Vec<_>>();
        assert!(alternatives.len() >= 2);

        let session = HashSet::new();
        assert_eq!(engine.rotate(bench_press, 1, &context, &session), bench_press);
        assert_eq!(engine.rotate(bench_press, 2, &context, &session), bench_press);
        assert_eq!(
            engine.rotate(bench_press, 3, &context, &session),
            alternatives[0].exercise
        );
        assert_eq!(
            engine.rotate(bench_press, 5, &context, &session),
            alternatives[1].exercise
        );
    }

    #[test]
    fn test_rotate_skips_session_exercises() {
        let catalog = ExerciseCatalog::seeded();
        let scorer = ExerciseScorer::new(&catalog);
        let engine = ExerciseRotationEngine::new(scorer, 6);
        let context = context(&[Equipment::Barbell, Equipment::Dumbbell, Equipment::Bench]);
        let bench_press = catalog.get(&"bench_press".into()).unwrap();
        let first = scorer
            .alternatives(bench_press, &context, &HashSet::new())
            .into_iter()
            .find(|s| s.exercise.mechanic == Mechanic::Compound)
            .unwrap()
            .exercise
            .id
            .clone();
        let session = HashSet::from([first.clone()]);
        assert_ne!(engine.rotate(bench_press, 3, &context, &session).id, first);
    }

    #[test]
    fn test_rotate_keeps_mechanic() {
        let catalog = ExerciseCatalog::seeded();
        let scorer = ExerciseScorer::new(&catalog);
        let engine = ExerciseRotationEngine::new(scorer, 12);
        let context = context(&[Equipment::Barbell, Equipment::Dumbbell, Equipment::Bench]);
        let bench_press = catalog.get(&"bench_press".into()).unwrap();
        assert!(
            scorer
                .alternatives(bench_press, &context, &HashSet::new())
                .iter()
                .any(|s| s.exercise.id.as_str() == "dumbbell_fly")
        );
        for week in 1..=12 {
            let exercise = engine.rotate(bench_press, week, &context, &HashSet::new());
            assert_eq!(exercise.mechanic, Mechanic::Compound, "week {week}");
        }
    }

    #[test]
    fn test_rotate_falls_back_to_original() {
        let catalog = ExerciseCatalog::seeded();
        let engine = ExerciseRotationEngine::new(ExerciseScorer::new(&catalog), 6);
        let context = context(&[Equipment::Bodyweight]);
        let bear_crawl = catalog.get(&"bear_crawl".into()).unwrap();
        assert_eq!(
            engine.rotate(bear_crawl, 3, &context, &HashSet::new()),
            bear_crawl
        );
    }
}
