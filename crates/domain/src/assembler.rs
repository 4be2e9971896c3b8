use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::{
    AdaptationKind, AdaptedExercise, CatalogExercise, ClientContext, CoolDown, CustomExercise,
    DnaAdaptationPipeline, DnaHistory, Exercise, ExerciseCatalog, ExerciseID, ExerciseInstance,
    ExerciseRotationEngine, ExerciseScorer, FixedPrescription, GeneratedProgram,
    GenerationParameters, KeywordClassifier, Mechanic, MovementPattern, Muscle, PatternClassifier,
    PeriodizationSummary, Prescription, ProgramSession, ProgramWeek, Property, RampSet, RepScheme,
    SessionTemplate, SessionTemplateBuilder, Slot, SlotRole, SlotTemplateCatalog, TemplateMode,
    UnfilledSlot, ValidationError, VolumeValidator, WarmUp, WeekPlan, periodize,
};

/// How a template slot is filled for the whole program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotResolution<'a> {
    Catalog(&'a Exercise),
    Adapted(&'a Exercise, AdaptationKind),
    /// Authored entry kept as written.
    Custom,
    Unfilled,
}

struct ResolvedSession<'t, 'a> {
    template: &'t SessionTemplate,
    slots: Vec<(&'t Slot, SlotResolution<'a>)>,
}

/// Turns client context and generation parameters into a complete
/// multi-week program.
pub struct ProgramAssembler<'a, C = KeywordClassifier> {
    catalog: &'a ExerciseCatalog,
    builder: SessionTemplateBuilder<'a, C>,
}

impl<'a> ProgramAssembler<'a> {
    #[must_use]
    pub fn new(catalog: &'a ExerciseCatalog) -> Self {
        Self::with_classifier(catalog, KeywordClassifier)
    }
}

impl<'a, C: PatternClassifier> ProgramAssembler<'a, C> {
    pub fn with_classifier(catalog: &'a ExerciseCatalog, classifier: C) -> Self {
        Self {
            catalog,
            builder: SessionTemplateBuilder::with_classifier(catalog, classifier),
        }
    }

    pub fn assemble(
        &self,
        context: &ClientContext,
        parameters: &GenerationParameters,
        history: Option<&DnaHistory>,
    ) -> Result<GeneratedProgram, ValidationError> {
        parameters.validate()?;
        let plans = periodize(parameters.weeks, parameters.model, context.goal)?;
        let template = self
            .builder
            .build(parameters.mode, parameters.sessions_per_week, history)?;

        let context = match (&context.dna, history.and_then(DnaHistory::summary)) {
            (None, Some(summary)) => ClientContext {
                dna: Some(summary),
                ..context.clone()
            },
            _ => context.clone(),
        };

        let scorer = ExerciseScorer::new(self.catalog);
        let rotation = ExerciseRotationEngine::new(scorer, parameters.weeks);
        let (resolved, unfilled) = self.resolve(&template.sessions, &context);

        let mut weeks = Vec::with_capacity(plans.len());
        let mut last_normal: Option<&WeekPlan> = None;
        for plan in &plans {
            let reference = if plan.is_deload {
                last_normal.unwrap_or(plan)
            } else {
                plan
            };
            let sessions = resolved
                .iter()
                .map(|session| Self::session(session, plan, reference, &rotation, &context))
                .collect();
            weeks.push(ProgramWeek {
                plan: plan.clone(),
                start_date: parameters.week_start(plan.week),
                sessions,
            });
            if !plan.is_deload {
                last_normal = Some(plan);
            }
        }

        let volume = weeks
            .first()
            .map(|week: &ProgramWeek| VolumeValidator::default().validate(&week.sessions))
            .unwrap_or_default();

        Ok(GeneratedProgram {
            goal: context.goal,
            level: context.level,
            parameters: parameters.clone(),
            periodization: PeriodizationSummary {
                model: parameters.model,
                split: split_name(parameters.mode, parameters.sessions_per_week)?,
                deload_weeks: plans.iter().filter(|p| p.is_deload).map(|p| p.week).collect(),
                rotation_period: rotation.period(),
            },
            weeks,
            volume,
            unfilled,
            suggestions: vec![],
        })
    }

    /// Fills every slot once. Weekly variation is applied on top of this.
    fn resolve<'t>(
        &self,
        sessions: &'t [SessionTemplate],
        context: &ClientContext,
    ) -> (Vec<ResolvedSession<'t, 'a>>, Vec<UnfilledSlot>) {
        let scorer = ExerciseScorer::new(self.catalog);
        let pipeline = DnaAdaptationPipeline::new(self.catalog);
        let mut unfilled = vec![];
        let resolved = sessions
            .iter()
            .map(|template| {
                let mut used = HashSet::<ExerciseID>::new();
                let mut slots = Vec::with_capacity(template.slots.len());
                for slot in &template.slots {
                    let resolution = match &slot.fixed {
                        Some(fixed) => match pipeline.adapt(fixed, context, &used) {
                            Some((exercise, kind)) => SlotResolution::Adapted(exercise, kind),
                            None => SlotResolution::Custom,
                        },
                        None => {
                            let candidates = scorer
                                .select_for_slot(slot.pattern, &slot.target_muscles, context);
                            let mut free =
                                candidates.iter().filter(|s| !used.contains(&s.exercise.id));
                            // Compound slots take an isolation exercise only if nothing else fits.
                            let chosen = if slot.role.is_compound() {
                                free.clone()
                                    .find(|s| s.exercise.mechanic == Mechanic::Compound)
                                    .or_else(|| free.next())
                            } else {
                                free.next()
                            };
                            chosen.map_or(SlotResolution::Unfilled, |s| {
                                SlotResolution::Catalog(s.exercise)
                            })
                        }
                    };
                    match resolution {
                        SlotResolution::Catalog(exercise)
                        | SlotResolution::Adapted(exercise, _) => {
                            used.insert(exercise.id.clone());
                        }
                        SlotResolution::Unfilled => {
                            debug!(
                                "no exercise for {} slot ({}) in \"{}\"",
                                slot.role.key(),
                                slot.pattern.name(),
                                template.name
                            );
                            if slot.required {
                                unfilled.push(UnfilledSlot {
                                    day: template.day.clone(),
                                    session: template.name.clone(),
                                    role: slot.role,
                                    pattern: slot.pattern,
                                    target_muscles: slot.target_muscles.clone(),
                                });
                            }
                            continue;
                        }
                        SlotResolution::Custom => {}
                    }
                    slots.push((slot, resolution));
                }
                ResolvedSession { template, slots }
            })
            .collect();
        (resolved, unfilled)
    }

    fn session(
        resolved: &ResolvedSession<'_, 'a>,
        plan: &WeekPlan,
        reference: &WeekPlan,
        rotation: &ExerciseRotationEngine<'a>,
        context: &ClientContext,
    ) -> ProgramSession {
        let mut ids = resolved
            .slots
            .iter()
            .filter_map(|(_, resolution)| match resolution {
                SlotResolution::Catalog(e) | SlotResolution::Adapted(e, _) => Some(e.id.clone()),
                SlotResolution::Custom | SlotResolution::Unfilled => None,
            })
            .collect::<HashSet<_>>();

        let mut exercises = Vec::with_capacity(resolved.slots.len());
        for (slot, resolution) in &resolved.slots {
            let instance = match (resolution, &slot.fixed) {
                (SlotResolution::Catalog(base), _) => {
                    let exercise = if slot.role == SlotRole::MainCompound {
                        rotation.rotate(*base, plan.week, context, &ids)
                    } else {
                        *base
                    };
                    ids.insert(exercise.id.clone());
                    let mut instance = CatalogExercise::new(
                        exercise,
                        slot.role,
                        catalog_prescription(slot.role, exercise, plan, reference, context),
                    );
                    if exercise.id != base.id {
                        instance.rotated_from = Some(base.id.clone());
                        instance
                            .prescription
                            .notes
                            .push(format!("Rotation of {}", base.name));
                    }
                    ExerciseInstance::Catalog(instance)
                }
                (SlotResolution::Adapted(exercise, kind), Some(fixed)) => {
                    let mut prescription = authored_prescription(fixed, plan, reference);
                    if !exercise.matches_name(&fixed.name) {
                        prescription
                            .notes
                            .push(format!("Replaces \"{}\" from the trainer card", fixed.name));
                    }
                    ExerciseInstance::Adapted(AdaptedExercise {
                        exercise_id: exercise.id.clone(),
                        name: exercise.name.clone(),
                        localized_name: exercise.localized_name.clone(),
                        pattern: exercise.pattern,
                        role: slot.role,
                        primary_muscles: exercise.primary_muscles.clone(),
                        equipment: exercise.equipment.clone(),
                        original_name: fixed.name.clone(),
                        adaptation: *kind,
                        prescription,
                    })
                }
                (SlotResolution::Custom, Some(fixed)) => ExerciseInstance::Custom(CustomExercise {
                    name: fixed.name.clone(),
                    pattern: slot.pattern,
                    role: slot.role,
                    muscles: slot.target_muscles.clone(),
                    prescription: authored_prescription(fixed, plan, reference),
                }),
                _ => continue,
            };
            exercises.push(instance);
        }

        ProgramSession {
            day: resolved.template.day.clone(),
            name: resolved.template.name.clone(),
            warm_up: warm_up(&exercises),
            cool_down: cool_down(&exercises),
            exercises,
            notes: resolved.template.notes(),
        }
    }
}

fn split_name(mode: TemplateMode, sessions_per_week: u32) -> Result<String, ValidationError> {
    Ok(match mode {
        TemplateMode::Catalog => SlotTemplateCatalog::split_name(sessions_per_week)?.to_string(),
        TemplateMode::Dna => "trainer_cards".to_string(),
        TemplateMode::Combined => format!(
            "trainer_cards+{}",
            SlotTemplateCatalog::split_name(sessions_per_week)?
        ),
    })
}

/// Deload weeks reduce the prescription of the last normal week (`reference`)
/// to 60 % of the sets at ten points less intensity.
fn catalog_prescription(
    role: SlotRole,
    exercise: &Exercise,
    plan: &WeekPlan,
    reference: &WeekPlan,
    context: &ClientContext,
) -> Prescription {
    if plan.is_deload && !reference.is_deload {
        let normal = catalog_prescription(role, exercise, reference, reference, context);
        return Prescription {
            sets: deload_sets(normal.sets),
            intensity_percent: normal.intensity_percent.saturating_sub(10),
            target_rpe: normal.target_rpe.map(|rpe| plan.target_rpe.unwrap_or(rpe)),
            ..normal
        };
    }
    let intensity = plan.intensity_percent();
    let main_sets = if plan.is_deload {
        plan.sets
    } else {
        context.preferred_sets().unwrap_or(plan.sets)
    };
    let goal_reps = RepScheme::Range(exercise.rep_range(context.goal));
    let (sets, reps, rest_seconds, intensity_percent, target_rpe) = match role {
        SlotRole::MainCompound => (
            main_sets,
            RepScheme::Range(plan.reps),
            plan.rest_seconds,
            intensity,
            plan.target_rpe,
        ),
        SlotRole::SecondaryCompound => (
            main_sets.saturating_sub(1).max(1),
            RepScheme::Range(plan.reps),
            plan.rest_seconds,
            intensity.saturating_sub(5),
            plan.target_rpe,
        ),
        SlotRole::Accessory => (
            context
                .accessory_philosophy()
                .adjust_sets(plan.sets.saturating_sub(1).max(1)),
            goal_reps,
            60,
            intensity.saturating_sub(15),
            None,
        ),
        SlotRole::Finisher => (
            if plan.is_deload { 1 } else { 2 },
            goal_reps,
            45,
            intensity.saturating_sub(15),
            None,
        ),
    };
    Prescription {
        sets,
        reps,
        rest_seconds,
        intensity_percent,
        target_rpe,
        notes: vec![],
    }
}

/// Week 1 reproduces the card verbatim. Later weeks keep the authored sets
/// and reps at the planned intensity, deloads cut sets to 60 % and drop
/// intensity by ten points from the last normal week.
fn authored_prescription(
    fixed: &FixedPrescription,
    plan: &WeekPlan,
    reference: &WeekPlan,
) -> Prescription {
    let mut notes = vec![];
    let (sets, intensity_percent) = if plan.week == 1 {
        notes.push(format!(
            "As written by the trainer, suggested load about {}% 1RM",
            plan.intensity_percent()
        ));
        (fixed.sets, plan.intensity_percent())
    } else if plan.is_deload {
        (
            deload_sets(fixed.sets),
            reference.intensity_percent().saturating_sub(10),
        )
    } else {
        (fixed.sets, plan.intensity_percent())
    };
    notes.extend(fixed.notes.iter().cloned());
    Prescription {
        sets,
        reps: fixed.reps.clone(),
        rest_seconds: fixed.rest_seconds.unwrap_or(plan.rest_seconds),
        intensity_percent,
        target_rpe: plan.target_rpe,
        notes,
    }
}

fn deload_sets(sets: u32) -> u32 {
    ((sets * 6 + 5) / 10).max(1)
}

const RAMP: [(u32, u32); 3] = [(50, 8), (75, 5), (90, 2)];

pub(crate) fn warm_up(exercises: &[ExerciseInstance]) -> WarmUp {
    let mut mobility = vec![];
    for pattern in exercises.iter().map(ExerciseInstance::pattern) {
        let drill = mobility_drill(pattern).to_string();
        if !mobility.contains(&drill) {
            mobility.push(drill);
        }
    }
    WarmUp {
        cardio: "5-8 minutes of light cardio (bike, rower or brisk walk)".to_string(),
        mobility,
        ramp_sets: exercises
            .iter()
            .filter(|e| e.role() == SlotRole::MainCompound)
            .flat_map(|e| {
                RAMP.iter().map(move |(load_percent, reps)| RampSet {
                    exercise: e.name().to_string(),
                    load_percent: *load_percent,
                    reps: *reps,
                })
            })
            .collect(),
    }
}

fn mobility_drill(pattern: MovementPattern) -> &'static str {
    match pattern {
        MovementPattern::Squat => "Bodyweight squats with pause and ankle rocks",
        MovementPattern::Hinge => "Hip hinge drill and leg swings",
        MovementPattern::PushHorizontal => "Arm circles and scapular push-ups",
        MovementPattern::PushVertical => "Wall slides and band dislocates",
        MovementPattern::PullHorizontal => "Band pull-aparts",
        MovementPattern::PullVertical => "Scapular pulls and lat stretch",
        MovementPattern::Core => "Cat-cow and dead bug activation",
        MovementPattern::Rotation => "Thoracic rotations",
        MovementPattern::Carry => "Wrist and ankle circles",
    }
}

pub(crate) fn cool_down(exercises: &[ExerciseInstance]) -> CoolDown {
    let muscles = exercises
        .iter()
        .flat_map(|e| e.primary_muscles().iter().copied())
        .collect::<BTreeSet<_>>();
    let mut myofascial_release = muscles
        .iter()
        .filter_map(|m| foam_roll(*m))
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    myofascial_release.dedup();
    if myofascial_release.is_empty() {
        myofascial_release.push("Foam roll the upper back".to_string());
    }
    CoolDown {
        walk: "5 minutes of easy walking".to_string(),
        stretches: muscles.iter().map(|m| stretch(*m).to_string()).collect(),
        myofascial_release,
    }
}

fn stretch(muscle: Muscle) -> &'static str {
    match muscle {
        Muscle::Chest => "Doorway chest stretch, 30 s per side",
        Muscle::Back => "Child's pose with side reach, 45 s",
        Muscle::LowerBack => "Knees-to-chest stretch, 45 s",
        Muscle::Core => "Cobra stretch, 30 s",
        Muscle::Shoulders => "Cross-body shoulder stretch, 30 s per side",
        Muscle::Biceps => "Wall biceps stretch, 30 s per side",
        Muscle::Triceps => "Overhead triceps stretch, 30 s per side",
        Muscle::Forearms => "Wrist flexor and extensor stretch, 30 s",
        Muscle::Glutes => "Figure-four stretch, 30 s per side",
        Muscle::Quads => "Standing quad stretch, 30 s per side",
        Muscle::Hamstrings => "Seated hamstring stretch, 45 s",
        Muscle::Adductors => "Butterfly stretch, 45 s",
        Muscle::Calves => "Wall calf stretch, 30 s per side",
    }
}

fn foam_roll(muscle: Muscle) -> Option<&'static str> {
    match muscle {
        Muscle::Back | Muscle::Shoulders => Some("Foam roll the upper back and lats"),
        Muscle::Glutes => Some("Lacrosse ball on the glutes"),
        Muscle::Quads | Muscle::Adductors => Some("Foam roll quads and adductors"),
        Muscle::Hamstrings => Some("Foam roll the hamstrings"),
        Muscle::Calves => Some("Foam roll the calves"),
        Muscle::Chest => Some("Lacrosse ball on the pecs"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Difficulty, DnaDay, DnaEntry, Equipment, Focus, Goal, PeriodizationModel, RecentExercises,
    };

    use super::*;

    const GYM: &[Equipment] = &[
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

    fn context(equipment: &[Equipment], limitations: &[&str]) -> ClientContext {
        ClientContext {
            goal: Goal::Hypertrophy,
            level: Difficulty::Intermediate,
            equipment: equipment.iter().copied().collect(),
            limitations: limitations.iter().map(ToString::to_string).collect(),
            recently_used: RecentExercises::default(),
            dna: None,
        }
    }

    fn parameters(
        weeks: u32,
        model: PeriodizationModel,
        sessions_per_week: u32,
        mode: TemplateMode,
    ) -> GenerationParameters {
        GenerationParameters {
            weeks,
            model,
            sessions_per_week,
            mode,
            start_date: None,
        }
    }

    fn entry(name: &str, sets: u32, reps: &str) -> DnaEntry {
        DnaEntry {
            name: name.to_string(),
            exercise_id: None,
            pattern: None,
            muscles: BTreeSet::new(),
            sets,
            reps: reps.to_string(),
            rest_seconds: None,
            notes: None,
        }
    }

    fn history() -> DnaHistory {
        DnaHistory {
            days: vec![
                DnaDay {
                    label: "Giorno A".to_string(),
                    entries: vec![
                        entry("Hip Thrust", 5, "8/10"),
                        entry("Panca Piana con Bilanciere", 4, "6"),
                        entry("Lat Machine", 4, "10"),
                        entry("Zzyzx", 3, "40m"),
                    ],
                },
                DnaDay {
                    label: "Giorno B".to_string(),
                    entries: vec![entry("Stacco Rumeno", 4, "8"), entry("Plank", 3, "45s")],
                },
            ],
        }
    }

    fn assert_invariants(
        program: &GeneratedProgram,
        context: &ClientContext,
        catalog: &ExerciseCatalog,
    ) {
        for session in program.sessions() {
            assert!(session.exercises.len() <= 8);
            let ids = session.exercise_ids().collect::<Vec<_>>();
            let unique = ids.iter().collect::<HashSet<_>>();
            assert_eq!(ids.len(), unique.len(), "duplicate in {}", session.name);
            for id in ids {
                let exercise = catalog.get(id).unwrap();
                assert!(context.can_perform(exercise), "{} not allowed", exercise.name);
            }
        }
    }

    #[test]
    fn test_assemble_linear_upper_lower() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &[]);
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(8, PeriodizationModel::Linear, 4, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        assert_eq!(program.weeks.len(), 8);
        assert_eq!(program.periodization.deload_weeks, vec![4, 8]);
        assert_eq!(program.periodization.split, "upper_lower");
        assert_eq!(program.periodization.rotation_period, 4);
        assert_eq!(program.weeks[0].plan.focus, Focus::Hypertrophy);
        assert!(!program.weeks[0].plan.is_deload);
        assert!(program.weeks.iter().all(|w| w.sessions.len() == 4));
        assert!(program.unfilled.is_empty());
        assert_invariants(&program, &context, &catalog);
    }

    #[test]
    fn test_assemble_bodyweight_only() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(&[Equipment::Bodyweight], &[]);
        for sessions in 1..=6 {
            let program = ProgramAssembler::new(&catalog)
                .assemble(
                    &context,
                    &parameters(6, PeriodizationModel::Undulating, sessions, TemplateMode::Catalog),
                    None,
                )
                .unwrap();
            for exercise in program.exercises() {
                assert_eq!(
                    exercise.equipment(),
                    Some(&BTreeSet::from([Equipment::Bodyweight]))
                );
            }
            assert_invariants(&program, &context, &catalog);
        }
    }

    #[test]
    fn test_assemble_limitations() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &["ginocchio"]);
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(8, PeriodizationModel::Block, 6, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        for id in program.sessions().flat_map(ProgramSession::exercise_ids) {
            let exercise = catalog.get(id).unwrap();
            assert!(
                exercise
                    .contraindications
                    .iter()
                    .all(|tag| !tag.contains("ginocchio"))
            );
        }
    }

    #[rstest]
    #[case(GYM)]
    #[case(&[Equipment::Dumbbell, Equipment::Bench])]
    fn test_assemble_compound_slots_use_compound_exercises(#[case] equipment: &[Equipment]) {
        let catalog = ExerciseCatalog::seeded();
        let context = context(equipment, &[]);
        for sessions in 1..=6 {
            let program = ProgramAssembler::new(&catalog)
                .assemble(
                    &context,
                    &parameters(8, PeriodizationModel::Linear, sessions, TemplateMode::Catalog),
                    None,
                )
                .unwrap();
            for instance in program.sessions().flat_map(|s| &s.exercises) {
                if let ExerciseInstance::Catalog(c) = instance
                    && c.role.is_compound()
                {
                    let exercise = catalog.get(&c.exercise_id).unwrap();
                    assert_eq!(
                        exercise.mechanic,
                        Mechanic::Compound,
                        "{} as {}",
                        exercise.id.as_str(),
                        c.role.key()
                    );
                }
            }
        }
    }

    #[test]
    fn test_assemble_all_models_and_splits() {
        let catalog = ExerciseCatalog::seeded();
        let contexts = [
            context(GYM, &[]),
            context(&[Equipment::Bodyweight], &["spalla"]),
            context(&[Equipment::Dumbbell, Equipment::Bench], &["lombare"]),
        ];
        for context in &contexts {
            for model in PeriodizationModel::iter() {
                for sessions in 1..=6 {
                    let program = ProgramAssembler::new(&catalog)
                        .assemble(
                            context,
                            &parameters(10, *model, sessions, TemplateMode::Catalog),
                            None,
                        )
                        .unwrap();
                    assert_eq!(program.weeks.len(), 10);
                    assert_invariants(&program, context, &catalog);
                }
            }
        }
    }

    #[test]
    fn test_assemble_catalog_overlay() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &[]);
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(4, PeriodizationModel::Linear, 1, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        let week = &program.weeks[0];
        let plan = &week.plan;
        let session = &week.sessions[0];
        for exercise in &session.exercises {
            let p = exercise.prescription();
            match exercise.role() {
                SlotRole::MainCompound => {
                    assert_eq!(p.sets, plan.sets);
                    assert_eq!(p.reps, RepScheme::Range(plan.reps));
                    assert_eq!(p.intensity_percent, plan.intensity_percent());
                }
                SlotRole::SecondaryCompound => {
                    assert_eq!(p.sets, plan.sets - 1);
                    assert_eq!(p.intensity_percent, plan.intensity_percent() - 5);
                }
                SlotRole::Accessory => {
                    assert_eq!(p.sets, plan.sets - 1);
                    assert_eq!(p.rest_seconds, 60);
                    assert_eq!(p.intensity_percent, plan.intensity_percent() - 15);
                }
                SlotRole::Finisher => {
                    assert_eq!(p.sets, 2);
                    assert_eq!(p.rest_seconds, 45);
                }
            }
        }

        let deload = &program.weeks[3];
        assert!(deload.plan.is_deload);
        for (normal, reduced) in program.weeks[2].sessions[0]
            .exercises
            .iter()
            .zip(&deload.sessions[0].exercises)
        {
            let (normal, reduced) = (normal.prescription(), reduced.prescription());
            assert_eq!(reduced.sets, ((normal.sets * 6 + 5) / 10).max(1));
            assert_eq!(reduced.intensity_percent, normal.intensity_percent - 10);
            assert_eq!(reduced.reps, normal.reps);
        }
    }

    #[rstest]
    #[case(PeriodizationModel::Linear)]
    #[case(PeriodizationModel::Block)]
    #[case(PeriodizationModel::Undulating)]
    #[case(PeriodizationModel::Conjugate)]
    #[case(PeriodizationModel::Rpe)]
    fn test_assemble_catalog_deload_from_last_normal_week(#[case] model: PeriodizationModel) {
        let catalog = ExerciseCatalog::seeded();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &parameters(4, model, 3, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        let (normal, deload) = (&program.weeks[2], &program.weeks[3]);
        assert!(!normal.plan.is_deload);
        assert!(deload.plan.is_deload);
        for (before, after) in normal.sessions.iter().zip(&deload.sessions) {
            let main = |session: &ProgramSession| {
                session
                    .exercises
                    .iter()
                    .find(|e| e.role() == SlotRole::MainCompound)
                    .map(|e| e.prescription().clone())
                    .unwrap()
            };
            let (before, after) = (main(before), main(after));
            assert_eq!(after.intensity_percent, before.intensity_percent - 10);
            assert_eq!(after.sets, ((before.sets * 6 + 5) / 10).max(1));
        }
    }

    #[test]
    fn test_assemble_warm_up_and_cool_down() {
        let catalog = ExerciseCatalog::seeded();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &parameters(4, PeriodizationModel::Linear, 3, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        let session = &program.weeks[0].sessions[0];
        let mains = session
            .exercises
            .iter()
            .filter(|e| e.role() == SlotRole::MainCompound)
            .count();
        assert_eq!(session.warm_up.ramp_sets.len(), mains * 3);
        assert_eq!(
            session
                .warm_up
                .ramp_sets
                .iter()
                .take(3)
                .map(|r| r.load_percent)
                .collect::<Vec<_>>(),
            vec![50, 75, 90]
        );
        assert!(!session.warm_up.mobility.is_empty());
        assert!(!session.cool_down.stretches.is_empty());
        assert!(!session.cool_down.myofascial_release.is_empty());
    }

    #[test]
    fn test_assemble_rotation() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &[]);
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(6, PeriodizationModel::Undulating, 3, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        let main_ids = |week: usize| {
            program.weeks[week].sessions[0]
                .exercises
                .iter()
                .filter(|e| e.role() == SlotRole::MainCompound)
                .filter_map(|e| e.exercise_id().cloned())
                .collect::<Vec<_>>()
        };
        assert_eq!(main_ids(0), main_ids(1));
        assert_ne!(main_ids(0), main_ids(2));
        let rotated = program.weeks[2].sessions[0]
            .exercises
            .iter()
            .find_map(|e| match e {
                ExerciseInstance::Catalog(c) => c.rotated_from.clone(),
                _ => None,
            });
        assert!(rotated.is_some());
        assert_invariants(&program, &context, &catalog);
    }

    #[test]
    fn test_assemble_dna_week_one_verbatim() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &[]);
        let history = history();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(8, PeriodizationModel::Linear, 2, TemplateMode::Dna),
                Some(&history),
            )
            .unwrap();
        let first = &program.weeks[0].sessions[0].exercises[0];
        assert_eq!(first.prescription().sets, 5);
        assert!(first.prescription().reps.to_string().contains('8'));
        match first {
            ExerciseInstance::Adapted(adapted) => {
                assert_eq!(adapted.original_name, "Hip Thrust");
                assert_eq!(adapted.exercise_id.to_string(), "hip_thrust");
            }
            _ => panic!("expected adapted exercise"),
        }
        assert!(
            first
                .prescription()
                .notes
                .iter()
                .any(|n| n.contains("% 1RM"))
        );
    }

    #[test]
    fn test_assemble_dna_keeps_every_entry() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(&[Equipment::Bodyweight], &[]);
        let history = history();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(8, PeriodizationModel::Linear, 2, TemplateMode::Dna),
                Some(&history),
            )
            .unwrap();
        for week in &program.weeks {
            assert_eq!(week.sessions[0].exercises.len(), 4);
            assert_eq!(week.sessions[1].exercises.len(), 2);
        }
        let session = &program.weeks[0].sessions[0];
        assert!(matches!(
            &session.exercises[3],
            ExerciseInstance::Custom(c) if c.name == "Zzyzx"
        ));
        assert!(matches!(
            &session.exercises[1],
            ExerciseInstance::Adapted(a) if a.adaptation == AdaptationKind::Alternative
        ));
        assert_invariants(&program, &context, &catalog);
    }

    #[test]
    fn test_assemble_dna_deload() {
        let catalog = ExerciseCatalog::seeded();
        let context = context(GYM, &[]);
        let history = history();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &parameters(8, PeriodizationModel::Linear, 2, TemplateMode::Dna),
                Some(&history),
            )
            .unwrap();
        let normal = &program.weeks[2];
        let deload = &program.weeks[3];
        assert!(deload.plan.is_deload);
        let before = normal.sessions[0].exercises[0].prescription();
        let after = deload.sessions[0].exercises[0].prescription();
        assert_eq!(before.sets, 5);
        assert_eq!(after.sets, 3);
        assert_eq!(after.intensity_percent, before.intensity_percent - 10);
        assert_eq!(after.reps, before.reps);

        let exercise_ids = |week: &ProgramWeek| {
            week.sessions[0]
                .exercises
                .iter()
                .map(|e| e.exercise_id().cloned())
                .collect::<Vec<_>>()
        };
        assert!(program.weeks.iter().all(|w| exercise_ids(w) == exercise_ids(&program.weeks[0])));
    }

    #[test]
    fn test_assemble_combined() {
        let catalog = ExerciseCatalog::seeded();
        let history = history();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &parameters(4, PeriodizationModel::Rpe, 4, TemplateMode::Combined),
                Some(&history),
            )
            .unwrap();
        assert_eq!(program.periodization.split, "trainer_cards+upper_lower");
        assert_eq!(
            program.weeks[0]
                .sessions
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Giorno A", "Giorno B", "Upper B", "Lower B"]
        );
    }

    #[rstest]
    #[case(TemplateMode::Dna)]
    #[case(TemplateMode::Combined)]
    fn test_assemble_missing_dna(#[case] mode: TemplateMode) {
        let catalog = ExerciseCatalog::seeded();
        assert_eq!(
            ProgramAssembler::new(&catalog).assemble(
                &context(GYM, &[]),
                &parameters(4, PeriodizationModel::Linear, 3, mode),
                None,
            ),
            Err(ValidationError::MissingDnaHistory)
        );
    }

    #[test]
    fn test_assemble_unfilled() {
        let catalog = ExerciseCatalog::new(vec![]).unwrap();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &parameters(2, PeriodizationModel::Linear, 1, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        assert_eq!(program.unfilled.len(), 4);
        assert!(
            program
                .unfilled
                .iter()
                .all(|u| matches!(u.role, SlotRole::MainCompound | SlotRole::SecondaryCompound))
        );
        assert!(program.sessions().all(|s| s.exercises.is_empty()));
    }

    #[test]
    fn test_assemble_start_dates() {
        let catalog = ExerciseCatalog::seeded();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &GenerationParameters {
                    start_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 6),
                    ..parameters(3, PeriodizationModel::Linear, 2, TemplateMode::Catalog)
                },
                None,
            )
            .unwrap();
        assert_eq!(
            program
                .weeks
                .iter()
                .map(|w| w.start_date)
                .collect::<Vec<_>>(),
            vec![
                chrono::NaiveDate::from_ymd_opt(2025, 1, 6),
                chrono::NaiveDate::from_ymd_opt(2025, 1, 13),
                chrono::NaiveDate::from_ymd_opt(2025, 1, 20),
            ]
        );
    }

    #[test]
    fn test_assemble_volume_report_idempotent() {
        let catalog = ExerciseCatalog::seeded();
        let program = ProgramAssembler::new(&catalog)
            .assemble(
                &context(GYM, &[]),
                &parameters(4, PeriodizationModel::Linear, 3, TemplateMode::Catalog),
                None,
            )
            .unwrap();
        assert_eq!(
            program.volume,
            VolumeValidator::default().validate(&program.weeks[0].sessions)
        );
        assert_eq!(
            VolumeValidator::default().validate(&program.weeks[0].sessions),
            VolumeValidator::default().validate(&program.weeks[0].sessions)
        );
    }
}
