use std::collections::{BTreeMap, BTreeSet};

use allenatore_domain as domain;
use chrono::NaiveDate;
use serde_json::json;

pub static EXERCISE: std::sync::LazyLock<domain::Exercise> =
    std::sync::LazyLock::new(|| domain::Exercise {
        id: "landmine_press".into(),
        name: "Landmine Press".to_string(),
        localized_name: "Landmine Press in Piedi".to_string(),
        category: domain::Category::Strength,
        mechanic: domain::Mechanic::Compound,
        pattern: domain::MovementPattern::PushVertical,
        primary_muscles: BTreeSet::from([domain::Muscle::Shoulders]),
        secondary_muscles: BTreeSet::from([domain::Muscle::Triceps, domain::Muscle::Core]),
        equipment: BTreeSet::from([domain::Equipment::Barbell]),
        difficulty: domain::Difficulty::Beginner,
        rep_ranges: BTreeMap::from([
            (domain::Goal::Strength, domain::RepRange::new(5, 8)),
            (domain::Goal::Hypertrophy, domain::RepRange::new(8, 12)),
        ]),
        recovery_hours: 36,
        contraindications: vec!["spalla".to_string()],
    });

pub static CARDS: std::sync::LazyLock<serde_json::Value> = std::sync::LazyLock::new(|| {
    json!([
        {
            "label": "Giorno A",
            "exercises": [
                {
                    "name": "Hip Thrust",
                    "pattern": "hinge",
                    "muscles": ["glutes"],
                    "sets": 5,
                    "reps": "8/10",
                    "notes": "Pausa di 2 secondi in alto"
                },
                {
                    "name": "Panca Piana con Bilanciere",
                    "sets": 4,
                    "reps": 6,
                    "rest_seconds": 120
                },
                { "name": "Plank", "sets": 3, "reps": "45s" }
            ]
        },
        {
            "day": "Giorno B",
            "entries": [
                { "name": "Stacco Rumeno", "exercise_id": "romanian_deadlift", "sets": 4, "reps": "8" },
                { "name": "Lat Machine", "sets": 4, "reps": "10-12" }
            ]
        }
    ])
});

pub static CLIENT: std::sync::LazyLock<serde_json::Value> = std::sync::LazyLock::new(|| {
    json!({
        "goal": "hypertrophy",
        "level": "intermediate",
        "equipment": ["dumbbell", "bench"],
        "limitations": ["ginocchio"],
        "recently_used": ["back_squat", "bench_press"],
        "dna": {
            "preferred_exercises": ["Hip Thrust"],
            "preferred_sets": 4,
            "accessory_philosophy": "minimal"
        }
    })
});

pub static GENERATED_PROGRAM: std::sync::LazyLock<domain::GeneratedProgram> =
    std::sync::LazyLock::new(|| {
        let catalog = domain::ExerciseCatalog::seeded();
        let mut context = domain::ClientContext::new(
            domain::Goal::Hypertrophy,
            domain::Difficulty::Intermediate,
        );
        context.equipment = BTreeSet::from([
            domain::Equipment::Barbell,
            domain::Equipment::Bench,
            domain::Equipment::Dumbbell,
        ]);
        let entry = |name: &str, sets, reps: &str| domain::DnaEntry {
            name: name.to_string(),
            exercise_id: None,
            pattern: None,
            muscles: BTreeSet::new(),
            sets,
            reps: reps.to_string(),
            rest_seconds: None,
            notes: None,
        };
        let history = domain::DnaHistory {
            days: vec![domain::DnaDay {
                label: "Giorno A".to_string(),
                entries: vec![entry("Hip Thrust", 5, "8/10"), entry("Zzyzx", 3, "12")],
            }],
        };
        domain::ProgramAssembler::new(&catalog)
            .assemble(
                &context,
                &domain::GenerationParameters {
                    weeks: 4,
                    model: domain::PeriodizationModel::Linear,
                    sessions_per_week: 1,
                    mode: domain::TemplateMode::Dna,
                    start_date: NaiveDate::from_ymd_opt(2025, 3, 3),
                },
                Some(&history),
            )
            .unwrap()
    });
