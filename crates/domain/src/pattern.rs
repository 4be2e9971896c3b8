use crate::{MovementPattern, Muscle};

/// Infers the movement pattern of an exercise known only by name and,
/// optionally, the muscles it targets.
pub trait PatternClassifier {
    fn classify(&self, name: &str, muscles: &[Muscle]) -> Option<MovementPattern>;
}

/// Keyword table for English and Italian exercise names, with a
/// primary-muscle fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

// Checked in order, so more specific phrases must precede the generic ones
// they would otherwise lose against.
const KEYWORDS: [(MovementPattern, &[&str]); 9] = [
    (
        MovementPattern::Hinge,
        &[
            "deadlift",
            "stacco",
            "rdl",
            "hip thrust",
            "good morning",
            "swing",
            "bridge",
            "ponte",
            "hyperextension",
            "iperestensioni",
            "back extension",
            "leg curl",
            "nordic",
        ],
    ),
    (
        MovementPattern::Squat,
        &[
            "squat",
            "lunge",
            "affondi",
            "leg press",
            "pressa",
            "step up",
            "calf",
            "polpacci",
            "leg extension",
            "wall sit",
        ],
    ),
    (
        MovementPattern::Carry,
        &["carry", "farmer", "walk", "crawl", "camminata", "sled"],
    ),
    (
        MovementPattern::Rotation,
        &["twist", "woodchop", "rotation", "rotazion", "pallof", "bird dog"],
    ),
    (
        MovementPattern::PullVertical,
        &[
            "pull up",
            "pullup",
            "chin up",
            "chinup",
            "trazioni",
            "pulldown",
            "lat machine",
            "curl",
        ],
    ),
    (
        MovementPattern::PullHorizontal,
        &["row", "rematore", "face pull", "pull apart", "tirate", "pulley"],
    ),
    (
        MovementPattern::PushVertical,
        &[
            "overhead",
            "shoulder press",
            "military",
            "push press",
            "lento",
            "arnold",
            "pike",
            "handstand",
            "lateral raise",
            "alzate",
            "triceps",
            "tricipiti",
            "french press",
            "pushdown",
        ],
    ),
    (
        MovementPattern::PushHorizontal,
        &[
            "bench",
            "panca",
            "push up",
            "pushup",
            "piegamenti",
            "chest press",
            "dip",
            "croci",
            "fly",
            "distensioni",
        ],
    ),
    (
        MovementPattern::Core,
        &[
            "plank",
            "crunch",
            "sit up",
            "addominali",
            "hollow",
            "dead bug",
            "leg raise",
            "rollout",
            "ab wheel",
        ],
    ),
];

impl KeywordClassifier {
    #[must_use]
    pub fn classify_name(name: &str) -> Option<MovementPattern> {
        let text = format!(
            " {} ",
            name.to_lowercase()
                .chars()
                .map(|c| if c.is_alphanumeric() { c } else { ' ' })
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        );
        KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| text.contains(&format!(" {keyword}")))
            })
            .map(|(pattern, _)| *pattern)
    }

    #[must_use]
    pub fn classify_muscles(muscles: &[Muscle]) -> Option<MovementPattern> {
        muscles.iter().find_map(|muscle| match muscle {
            Muscle::Quads | Muscle::Adductors | Muscle::Calves => Some(MovementPattern::Squat),
            Muscle::Hamstrings | Muscle::Glutes | Muscle::LowerBack => {
                Some(MovementPattern::Hinge)
            }
            Muscle::Chest => Some(MovementPattern::PushHorizontal),
            Muscle::Shoulders | Muscle::Triceps => Some(MovementPattern::PushVertical),
            Muscle::Back => Some(MovementPattern::PullHorizontal),
            Muscle::Biceps | Muscle::Forearms => Some(MovementPattern::PullVertical),
            Muscle::Core => Some(MovementPattern::Core),
        })
    }
}

impl PatternClassifier for KeywordClassifier {
    fn classify(&self, name: &str, muscles: &[Muscle]) -> Option<MovementPattern> {
        Self::classify_name(name).or_else(|| Self::classify_muscles(muscles))
    }
}
