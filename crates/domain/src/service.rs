use std::collections::BTreeSet;

use log::{debug, error, warn};

use crate::{
    CardRepository, CatalogError, ClientContext, CreateError, DnaHistory, DnaSummary, Equipment,
    Exercise, ExerciseCatalog, ExerciseRepository, GeneratedProgram, GenerationParameters,
    MovementPattern, Muscle, Name, ProgramAssembler, ProgramEnhancer, ReadError, ValidationError,
    apply_suggestions,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NotFound(_)) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> Service<R> {
    pub async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    pub async fn get_catalog(&self) -> Result<ExerciseCatalog, GenerateError> {
        Ok(ExerciseCatalog::new(self.get_exercises().await?)?)
    }

    pub async fn create_custom_exercise(
        &self,
        name: Name,
        pattern: MovementPattern,
        primary_muscles: BTreeSet<Muscle>,
        equipment: BTreeSet<Equipment>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository
                .create_exercise(name, pattern, primary_muscles, equipment),
            CreateError,
            "create",
            "exercise"
        )
    }
}

impl<R: CardRepository> Service<R> {
    pub async fn get_dna_history(&self) -> Result<DnaHistory, ReadError> {
        log_on_error!(
            self.repository.read_dna_history(),
            ReadError,
            "get",
            "workout cards"
        )
    }
}

impl<R: ExerciseRepository + CardRepository> Service<R> {
    pub async fn generate_program(
        &self,
        context: &ClientContext,
        parameters: &GenerationParameters,
    ) -> Result<GeneratedProgram, GenerateError> {
        let (_, _, program) = self.generate(context, parameters).await?;
        Ok(program)
    }

    /// Runs the style pass of `enhancer` over the generated program. Any
    /// enhancer failure leaves the program as assembled.
    pub async fn generate_enhanced_program<E: ProgramEnhancer>(
        &self,
        context: &ClientContext,
        parameters: &GenerationParameters,
        enhancer: &E,
    ) -> Result<GeneratedProgram, GenerateError> {
        let (catalog, dna, program) = self.generate(context, parameters).await?;
        match enhancer.suggest(&program, dna.as_ref()).await {
            Ok(suggestions) => Ok(apply_suggestions(program, suggestions, &catalog, context)),
            Err(err) => {
                warn!("skipping program enhancement: {err}");
                Ok(program)
            }
        }
    }

    async fn generate(
        &self,
        context: &ClientContext,
        parameters: &GenerationParameters,
    ) -> Result<(ExerciseCatalog, Option<DnaSummary>, GeneratedProgram), GenerateError> {
        parameters.validate()?;
        let catalog = self.get_catalog().await?;
        let history = if parameters.mode.requires_dna() {
            Some(self.get_dna_history().await?)
        } else {
            None
        };
        let program =
            ProgramAssembler::new(&catalog).assemble(context, parameters, history.as_ref())?;
        let dna = context
            .dna
            .clone()
            .or_else(|| history.as_ref().and_then(DnaHistory::summary));
        Ok((catalog, dna, program))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{
        Difficulty, DnaDay, DnaEntry, EnhancementError, ExerciseID, Goal, PeriodizationModel,
        StorageError, Suggestion, TemplateMode,
    };

    use super::*;

    struct FakeRepository {
        exercises: RefCell<Vec<Exercise>>,
        history: Option<DnaHistory>,
    }

    impl FakeRepository {
        fn new(history: Option<DnaHistory>) -> Self {
            Self {
                exercises: RefCell::new(ExerciseCatalog::seeded().iter().cloned().collect()),
                history,
            }
        }
    }

    impl ExerciseRepository for FakeRepository {
        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            Ok(self.exercises.borrow().clone())
        }

        async fn create_exercise(
            &self,
            name: Name,
            pattern: MovementPattern,
            primary_muscles: BTreeSet<Muscle>,
            equipment: BTreeSet<Equipment>,
        ) -> Result<Exercise, CreateError> {
            let exercise = Exercise::custom(
                ExerciseID::from(name.to_string().to_lowercase().replace(' ', "_")),
                &name,
                pattern,
                primary_muscles,
                equipment,
            );
            if self.exercises.borrow().iter().any(|e| e.id == exercise.id) {
                return Err(CreateError::Conflict);
            }
            self.exercises.borrow_mut().push(exercise.clone());
            Ok(exercise)
        }
    }

    impl CardRepository for FakeRepository {
        async fn read_dna_history(&self) -> Result<DnaHistory, ReadError> {
            self.history.clone().ok_or_else(|| {
                ReadError::Storage(StorageError::NotFound("cards.json".to_string()))
            })
        }
    }

    struct StaticEnhancer(Result<Vec<Suggestion>, EnhancementError>);

    impl ProgramEnhancer for StaticEnhancer {
        async fn suggest(
            &self,
            _: &GeneratedProgram,
            _: Option<&DnaSummary>,
        ) -> Result<Vec<Suggestion>, EnhancementError> {
            self.0.clone()
        }
    }

    fn context() -> ClientContext {
        ClientContext::new(Goal::Hypertrophy, Difficulty::Beginner)
    }

    fn history() -> DnaHistory {
        DnaHistory {
            days: vec![DnaDay {
                label: "Giorno A".to_string(),
                entries: vec![DnaEntry {
                    name: "Crunch a Terra".to_string(),
                    exercise_id: None,
                    pattern: None,
                    muscles: BTreeSet::new(),
                    sets: 3,
                    reps: "20".to_string(),
                    rest_seconds: Some(45),
                    notes: None,
                }],
            }],
        }
    }

    #[tokio::test]
    async fn test_generate_program() {
        let service = Service::new(FakeRepository::new(None));
        let program = service
            .generate_program(&context(), &GenerationParameters::default())
            .await
            .unwrap();
        assert_eq!(program.weeks.len(), 8);
        assert_eq!(program.periodization.split, "full_body");
    }

    #[tokio::test]
    async fn test_generate_program_invalid_parameters() {
        let service = Service::new(FakeRepository::new(None));
        let parameters = GenerationParameters {
            weeks: 0,
            ..GenerationParameters::default()
        };
        assert!(matches!(
            service.generate_program(&context(), &parameters).await,
            Err(GenerateError::Validation(ValidationError::NonPositiveWeeks))
        ));
    }

    #[tokio::test]
    async fn test_generate_program_dna() {
        let service = Service::new(FakeRepository::new(Some(history())));
        let parameters = GenerationParameters {
            mode: TemplateMode::Dna,
            model: PeriodizationModel::Undulating,
            ..GenerationParameters::default()
        };
        let program = service
            .generate_program(&context(), &parameters)
            .await
            .unwrap();
        let exercise = &program.weeks[0].sessions[0].exercises[0];
        assert_eq!(exercise.name(), "Crunch");
        assert_eq!(exercise.prescription().rest_seconds, 45);
    }

    #[tokio::test]
    async fn test_generate_program_dna_missing_cards() {
        let service = Service::new(FakeRepository::new(None));
        let parameters = GenerationParameters {
            mode: TemplateMode::Combined,
            ..GenerationParameters::default()
        };
        assert!(matches!(
            service.generate_program(&context(), &parameters).await,
            Err(GenerateError::Read(ReadError::Storage(
                StorageError::NotFound(_)
            )))
        ));
    }

    #[tokio::test]
    async fn test_generate_enhanced_program_failure_is_contained() {
        let service = Service::new(FakeRepository::new(None));
        let parameters = GenerationParameters::default();
        let plain = service
            .generate_program(&context(), &parameters)
            .await
            .unwrap();
        let enhanced = service
            .generate_enhanced_program(
                &context(),
                &parameters,
                &StaticEnhancer(Err(EnhancementError::Timeout)),
            )
            .await
            .unwrap();
        assert_eq!(enhanced, plain);
    }

    #[tokio::test]
    async fn test_generate_enhanced_program_discards_invalid_suggestions() {
        let service = Service::new(FakeRepository::new(None));
        let parameters = GenerationParameters::default();
        let plain = service
            .generate_program(&context(), &parameters)
            .await
            .unwrap();
        let enhanced = service
            .generate_enhanced_program(
                &context(),
                &parameters,
                &StaticEnhancer(Ok(vec![Suggestion {
                    week: None,
                    day: "day_1".into(),
                    replace: "back_squat".into(),
                    with: "missing".into(),
                    reason: String::new(),
                }])),
            )
            .await
            .unwrap();
        assert_eq!(enhanced, plain);
    }

    #[tokio::test]
    async fn test_create_custom_exercise() {
        let service = Service::new(FakeRepository::new(None));
        let exercise = service
            .create_custom_exercise(
                Name::new("Zercher Squat").unwrap(),
                MovementPattern::Squat,
                BTreeSet::from([Muscle::Quads]),
                BTreeSet::from([Equipment::Barbell]),
            )
            .await
            .unwrap();
        assert_eq!(exercise.name, "Zercher Squat");
        let catalog = service.get_catalog().await.unwrap();
        assert!(catalog.find_by_name("zercher squat").is_some());
        assert!(matches!(
            service
                .create_custom_exercise(
                    Name::new("Zercher Squat").unwrap(),
                    MovementPattern::Squat,
                    BTreeSet::from([Muscle::Quads]),
                    BTreeSet::new(),
                )
                .await,
            Err(CreateError::Conflict)
        ));
    }
}
