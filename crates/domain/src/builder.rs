use log::debug;

use crate::{
    DayKey, DnaDay, DnaEntry, Exercise, ExerciseCatalog, KeywordClassifier, Mechanic,
    MovementPattern, PatternClassifier, SessionTemplate, Slot, SlotRole, SlotTemplateCatalog,
    ValidationError, WeeklyTemplate, dna::DnaHistory, template::MAX_SESSIONS_PER_WEEK,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemplateMode {
    Catalog,
    Dna,
    Combined,
}

impl TemplateMode {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            TemplateMode::Catalog => "catalog",
            TemplateMode::Dna => "dna",
            TemplateMode::Combined => "combined",
        }
    }

    #[must_use]
    pub fn requires_dna(self) -> bool {
        matches!(self, TemplateMode::Dna | TemplateMode::Combined)
    }
}

impl TryFrom<&str> for TemplateMode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "catalog" => Ok(TemplateMode::Catalog),
            "dna" => Ok(TemplateMode::Dna),
            "combined" => Ok(TemplateMode::Combined),
            _ => Err(ValidationError::UnknownMode(value.to_string())),
        }
    }
}

/// Produces the weekly template a program is assembled from.
pub struct SessionTemplateBuilder<'a, C = KeywordClassifier> {
    catalog: &'a ExerciseCatalog,
    classifier: C,
}

impl<'a> SessionTemplateBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self::with_classifier(catalog, KeywordClassifier)
    }
}

impl<'a, C: PatternClassifier> SessionTemplateBuilder<'a, C> {
    pub fn with_classifier(catalog: &'a ExerciseCatalog, classifier: C) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    pub fn build(
        &self,
        mode: TemplateMode,
        sessions_per_week: u32,
        history: Option<&DnaHistory>,
    ) -> Result<WeeklyTemplate, ValidationError> {
        if !(1..=MAX_SESSIONS_PER_WEEK).contains(&sessions_per_week) {
            return Err(ValidationError::SessionsPerWeek(sessions_per_week));
        }

        if mode == TemplateMode::Catalog {
            return SlotTemplateCatalog::weekly(sessions_per_week);
        }

        let days = history
            .map(|h| h.days.iter().filter(|d| !d.is_empty()).collect::<Vec<_>>())
            .unwrap_or_default();
        if days.is_empty() {
            return Err(ValidationError::MissingDnaHistory);
        }

        let mut sessions = days
            .iter()
            .enumerate()
            .map(|(i, day)| self.dna_session(DayKey::nth(i), day))
            .collect::<Vec<_>>();

        if mode == TemplateMode::Combined {
            let dna_days = sessions.len();
            for (i, mut session) in SlotTemplateCatalog::weekly(sessions_per_week)?
                .sessions
                .into_iter()
                .enumerate()
                .skip(dna_days)
            {
                session.day = DayKey::nth(i);
                sessions.push(session);
            }
        }

        Ok(WeeklyTemplate { sessions })
    }

    /// Explicit pattern first, then the catalog entry, then the classifier.
    /// Anything still unknown is treated as core work.
    #[must_use]
    pub fn infer_pattern(&self, entry: &DnaEntry) -> MovementPattern {
        if let Some(pattern) = entry.pattern {
            return pattern;
        }
        if let Some(exercise) = self.catalog_entry(entry) {
            return exercise.pattern;
        }
        let muscles = entry.muscles.iter().copied().collect::<Vec<_>>();
        self.classifier
            .classify(&entry.name, &muscles)
            .unwrap_or_else(|| {
                debug!("no pattern found for \"{}\", assuming core", entry.name);
                MovementPattern::Core
            })
    }

    fn catalog_entry(&self, entry: &DnaEntry) -> Option<&'a Exercise> {
        entry
            .exercise_id
            .as_ref()
            .and_then(|id| self.catalog.get(id))
            .or_else(|| self.catalog.find_by_name(&entry.name))
    }

    fn dna_session(&self, day: DayKey, dna_day: &DnaDay) -> SessionTemplate {
        let mut session = SessionTemplate::new(day, dna_day.label.clone());
        for (position, entry) in dna_day.entries.iter().enumerate() {
            let pattern = self.infer_pattern(entry);
            let exercise = self.catalog_entry(entry);
            let is_compound = exercise.map_or_else(
                || pattern.is_compound(),
                |e| e.mechanic == Mechanic::Compound,
            );
            let role = match position {
                0 | 1 => SlotRole::MainCompound,
                2 | 3 if is_compound => SlotRole::SecondaryCompound,
                _ => SlotRole::Accessory,
            };
            let target_muscles = if entry.muscles.is_empty() {
                exercise
                    .map(|e| e.primary_muscles.clone())
                    .unwrap_or_default()
            } else {
                entry.muscles.clone()
            };
            session.push(Slot {
                role,
                pattern,
                target_muscles,
                required: true,
                fixed: Some(entry.prescription()),
            });
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{Muscle, RepScheme, template::MAX_SLOTS};

    use super::*;

    fn entry(name: &str) -> DnaEntry {
        DnaEntry {
            name: name.to_string(),
            exercise_id: None,
            pattern: None,
            muscles: BTreeSet::new(),
            sets: 3,
            reps: "10".to_string(),
            rest_seconds: None,
            notes: None,
        }
    }

    fn history(days: &[&[&str]]) -> DnaHistory {
        DnaHistory {
            days: days
                .iter()
                .enumerate()
                .map(|(i, names)| DnaDay {
                    label: format!("Scheda {}", i + 1),
                    entries: names.iter().map(|n| entry(n)).collect(),
                })
                .collect(),
        }
    }

    #[rstest]
    #[case("catalog", Ok(TemplateMode::Catalog))]
    #[case(" DNA ", Ok(TemplateMode::Dna))]
    #[case("combined", Ok(TemplateMode::Combined))]
    #[case("mixed", Err(ValidationError::UnknownMode("mixed".to_string())))]
    fn test_template_mode_try_from(
        #[case] value: &str,
        #[case] expected: Result<TemplateMode, ValidationError>,
    ) {
        assert_eq!(TemplateMode::try_from(value), expected);
    }

    #[test]
    fn test_build_catalog() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        assert_eq!(
            builder.build(TemplateMode::Catalog, 4, None),
            SlotTemplateCatalog::weekly(4)
        );
        assert_eq!(
            builder.build(TemplateMode::Catalog, 9, None),
            Err(ValidationError::SessionsPerWeek(9))
        );
    }

    #[rstest]
    #[case(TemplateMode::Dna, None)]
    #[case(TemplateMode::Combined, Some(DnaHistory::default()))]
    #[case(TemplateMode::Dna, Some(history(&[&[]])))]
    fn test_build_without_dna(#[case] mode: TemplateMode, #[case] history: Option<DnaHistory>) {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        assert_eq!(
            builder.build(mode, 3, history.as_ref()),
            Err(ValidationError::MissingDnaHistory)
        );
    }

    #[test]
    fn test_build_dna_roles_and_patterns() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        let history = history(&[&[
            "Panca Piana con Bilanciere",
            "Hip Thrust",
            "Rematore con manubrio",
            "Crunch a Terra",
            "Alzate laterali",
            "Sconosciuto",
        ]]);
        let template = builder.build(TemplateMode::Dna, 3, Some(&history)).unwrap();
        assert_eq!(template.len(), 1);
        let session = &template.sessions[0];
        assert_eq!(session.name, "Scheda 1");
        assert_eq!(
            session
                .slots
                .iter()
                .map(|s| (s.role, s.pattern))
                .collect::<Vec<_>>(),
            vec![
                (SlotRole::MainCompound, MovementPattern::PushHorizontal),
                (SlotRole::MainCompound, MovementPattern::Hinge),
                (SlotRole::SecondaryCompound, MovementPattern::PullHorizontal),
                (SlotRole::Accessory, MovementPattern::Core),
                (SlotRole::Accessory, MovementPattern::PushVertical),
                (SlotRole::Accessory, MovementPattern::Core),
            ]
        );
        assert!(session.slots.iter().all(|s| s.required && s.is_authored()));
        assert_eq!(
            session.slots[0].target_muscles,
            catalog.get(&"bench_press".into()).unwrap().primary_muscles
        );
        assert_eq!(
            session.slots[1].fixed.as_ref().map(|f| f.reps.clone()),
            Some(RepScheme::Authored("10".to_string()))
        );
    }

    #[test]
    fn test_build_dna_explicit_pattern_wins() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        let mut entry = entry("Barbell Hip Thrust");
        entry.pattern = Some(MovementPattern::Squat);
        entry.muscles = BTreeSet::from([Muscle::Quads]);
        assert_eq!(builder.infer_pattern(&entry), MovementPattern::Squat);
    }

    #[test]
    fn test_build_dna_overflow() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        let names = (0..11).map(|i| format!("Plank {i}")).collect::<Vec<_>>();
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();
        let template = builder
            .build(TemplateMode::Dna, 1, Some(&history(&[&names])))
            .unwrap();
        assert_eq!(template.sessions[0].slots.len(), MAX_SLOTS);
        assert_eq!(template.sessions[0].overflow.len(), 3);
    }

    #[test]
    fn test_build_combined() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        let history = history(&[&["Squat"], &[], &["Deadlift"]]);
        let template = builder
            .build(TemplateMode::Combined, 4, Some(&history))
            .unwrap();
        assert_eq!(
            template
                .sessions
                .iter()
                .map(|s| (s.day.to_string(), s.name.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("day_1".to_string(), "Scheda 1"),
                ("day_2".to_string(), "Scheda 3"),
                ("day_3".to_string(), "Upper B"),
                ("day_4".to_string(), "Lower B"),
            ]
        );
    }

    #[test]
    fn test_build_combined_keeps_all_dna_days() {
        let catalog = ExerciseCatalog::seeded();
        let builder = SessionTemplateBuilder::new(&catalog);
        let history = history(&[&["Squat"], &["Deadlift"], &["Plank"]]);
        let template = builder
            .build(TemplateMode::Combined, 2, Some(&history))
            .unwrap();
        assert_eq!(template.len(), 3);
        assert!(
            template
                .sessions
                .iter()
                .all(|s| s.slots.iter().all(Slot::is_authored))
        );
    }
}
