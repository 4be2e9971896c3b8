#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duration must be at least one week")]
    NonPositiveWeeks,
    #[error("Duration must be 52 weeks or fewer ({0} > 52)")]
    TooManyWeeks(u32),
    #[error("Unknown periodization model \"{0}\"")]
    UnknownModel(String),
    #[error("Unknown generation mode \"{0}\"")]
    UnknownMode(String),
    #[error("Unknown goal \"{0}\"")]
    UnknownGoal(String),
    #[error("Unknown level \"{0}\"")]
    UnknownLevel(String),
    #[error("Sessions per week must be in the range 1 to 6 ({0})")]
    SessionsPerWeek(u32),
    #[error("No imported workout cards available for this mode")]
    MissingDnaHistory,
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("conflict")]
    Conflict,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<ReadError> for CreateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => CreateError::Storage(storage),
            ReadError::Other(other) => CreateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
