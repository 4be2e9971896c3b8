use log::{debug, warn};

use crate::{
    ClientContext, DayKey, DnaSummary, ExerciseCatalog, ExerciseID, ExerciseInstance,
    GeneratedProgram, VolumeValidator,
    assembler::{cool_down, warm_up},
};

/// Proposed replacement of one catalog exercise in a generated program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Week to change, or every week if `None`.
    pub week: Option<u32>,
    pub day: DayKey,
    pub replace: ExerciseID,
    pub with: ExerciseID,
    pub reason: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhancementError {
    #[error("enhancer did not respond in time")]
    Timeout,
    #[error("enhancer unreachable: {0}")]
    Transport(String),
    #[error("invalid enhancer response: {0}")]
    InvalidResponse(String),
}

/// Optional external advisor that refines exercise selection.
#[allow(async_fn_in_trait)]
pub trait ProgramEnhancer {
    async fn suggest(
        &self,
        program: &GeneratedProgram,
        dna: Option<&DnaSummary>,
    ) -> Result<Vec<Suggestion>, EnhancementError>;
}

/// Applies every valid suggestion and records it in the program. Suggestions
/// are rejected if they target an authored entry, name an unknown exercise,
/// change the movement pattern, are not performable by the client or would
/// duplicate an exercise of the session. Warm-up and cool-down of changed
/// sessions and the volume report follow the new exercises.
#[must_use]
pub fn apply_suggestions(
    mut program: GeneratedProgram,
    suggestions: Vec<Suggestion>,
    catalog: &ExerciseCatalog,
    context: &ClientContext,
) -> GeneratedProgram {
    for suggestion in suggestions {
        let Some(replacement) = catalog.get(&suggestion.with) else {
            warn!("ignoring suggestion: unknown exercise \"{}\"", suggestion.with);
            continue;
        };
        if !context.can_perform(replacement) {
            warn!(
                "ignoring suggestion: \"{}\" not suitable for client",
                replacement.name
            );
            continue;
        }

        let mut applied = 0;
        for week in program
            .weeks
            .iter_mut()
            .filter(|w| suggestion.week.is_none_or(|n| n == w.plan.week))
        {
            for session in week
                .sessions
                .iter_mut()
                .filter(|s| s.day == suggestion.day)
            {
                if session.contains(&replacement.id) {
                    continue;
                }
                let replaced = session.exercises.iter_mut().find_map(|exercise| match exercise {
                    ExerciseInstance::Catalog(instance)
                        if instance.exercise_id == suggestion.replace
                            && instance.pattern == replacement.pattern =>
                    {
                        Some(instance)
                    }
                    _ => None,
                });
                if let Some(instance) = replaced {
                    instance.replace(replacement);
                    session.warm_up = warm_up(&session.exercises);
                    session.cool_down = cool_down(&session.exercises);
                    applied += 1;
                }
            }
        }

        if applied == 0 {
            warn!(
                "ignoring suggestion: cannot replace \"{}\" with \"{}\" on {}",
                suggestion.replace, suggestion.with, suggestion.day
            );
        } else {
            debug!(
                "replaced \"{}\" with \"{}\" in {applied} sessions",
                suggestion.replace, suggestion.with
            );
            program.suggestions.push(suggestion);
        }
    }
    if !program.suggestions.is_empty()
        && let Some(week) = program.weeks.first()
    {
        program.volume = VolumeValidator::default().validate(&week.sessions);
    }
    program
}
