use std::{
    collections::{BTreeMap, BTreeSet},
    io::ErrorKind,
    path::{Path, PathBuf},
};

use allenatore_domain::{self as domain, Property};
use log::debug;
use strum::AsRefStr;
use uuid::Uuid;

use crate::program::Program;

/// Repository keeping custom exercises and imported workout cards as JSON
/// files in a data directory. The built-in catalog is always included.
#[derive(Debug, Clone)]
pub struct JsonFile {
    directory: PathBuf,
}

impl JsonFile {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn path(&self, file: File) -> PathBuf {
        self.directory.join(file.as_ref())
    }

    async fn read<V>(&self, file: File) -> Result<Option<V>, domain::StorageError>
    where
        V: for<'de> serde::Deserialize<'de>,
    {
        read_json(&self.path(file)).await
    }

    async fn write<V: serde::Serialize>(
        &self,
        file: File,
        value: &V,
    ) -> Result<(), domain::StorageError> {
        tokio::fs::create_dir_all(&self.directory).await?;
        write_json(&self.path(file), value).await
    }
}

#[derive(AsRefStr, Debug, Clone, Copy)]
pub enum File {
    #[strum(serialize = "exercises.json")]
    Exercises,
    #[strum(serialize = "cards.json")]
    Cards,
}

impl domain::ExerciseRepository for JsonFile {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let mut exercises = domain::ExerciseCatalog::seeded()
            .iter()
            .cloned()
            .collect::<Vec<_>>();
        for record in self
            .read::<Vec<Exercise>>(File::Exercises)
            .await?
            .unwrap_or_default()
        {
            exercises.push(
                domain::Exercise::try_from(record)
                    .map_err(|err| domain::ReadError::Other(Box::new(err)))?,
            );
        }
        Ok(exercises)
    }

    async fn create_exercise(
        &self,
        name: domain::Name,
        pattern: domain::MovementPattern,
        primary_muscles: BTreeSet<domain::Muscle>,
        equipment: BTreeSet<domain::Equipment>,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let mut records = self
            .read::<Vec<Exercise>>(File::Exercises)
            .await?
            .unwrap_or_default();
        let text = name.to_string();
        let taken = domain::ExerciseCatalog::seeded()
            .find_by_name(&text)
            .is_some()
            || records.iter().any(|r| r.name.eq_ignore_ascii_case(&text));
        if taken {
            return Err(domain::CreateError::Conflict);
        }
        let exercise = domain::Exercise::custom(
            Uuid::new_v4().into(),
            &name,
            pattern,
            primary_muscles,
            equipment,
        );
        records.push(Exercise::from(&exercise));
        self.write(File::Exercises, &records).await?;
        debug!("created exercise {}", exercise.id);
        Ok(exercise)
    }
}

impl domain::CardRepository for JsonFile {
    async fn read_dna_history(&self) -> Result<domain::DnaHistory, domain::ReadError> {
        let path = self.path(File::Cards);
        let cards = self
            .read::<Vec<Card>>(File::Cards)
            .await?
            .ok_or_else(|| domain::StorageError::NotFound(path.display().to_string()))?;
        Ok(domain::DnaHistory {
            days: cards
                .into_iter()
                .map(domain::DnaDay::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| domain::ReadError::Other(Box::new(err)))?,
        })
    }
}

/// Reads the client context of a generation request.
pub async fn read_client(path: &Path) -> Result<domain::ClientContext, domain::ReadError> {
    let client = read_json::<Client>(path)
        .await?
        .ok_or_else(|| domain::StorageError::NotFound(path.display().to_string()))?;
    domain::ClientContext::try_from(client).map_err(|err| domain::ReadError::Other(Box::new(err)))
}

pub async fn write_program(
    path: &Path,
    program: &domain::GeneratedProgram,
) -> Result<(), domain::StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    write_json(path, &Program::from(program)).await
}

async fn read_json<V>(path: &Path) -> Result<Option<V>, domain::StorageError>
where
    V: for<'de> serde::Deserialize<'de>,
{
    match tokio::fs::read(path).await {
        Ok(content) => serde_json::from_slice(&content)
            .map(Some)
            .map_err(|err| domain::StorageError::Other(err.into())),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist", path.display());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

async fn write_json<V: serde::Serialize>(
    path: &Path,
    value: &V,
) -> Result<(), domain::StorageError> {
    let content =
        serde_json::to_vec_pretty(value).map_err(|err| domain::StorageError::Other(err.into()))?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    Validation(#[from] domain::ValidationError),
    #[error("unknown {kind} \"{key}\"")]
    UnknownKey { kind: &'static str, key: String },
    #[error("invalid rep range \"{0}\"")]
    InvalidRepRange(String),
}

fn parse<P: Property>(kind: &'static str, key: &str) -> Result<P, RecordError> {
    P::from_key(key).ok_or_else(|| RecordError::UnknownKey {
        kind,
        key: key.to_string(),
    })
}

fn parse_all<P: Property + Ord>(
    kind: &'static str,
    keys: &[String],
) -> Result<BTreeSet<P>, RecordError> {
    keys.iter().map(|key| parse(kind, key)).collect()
}

fn parse_rep_range(value: &str) -> Result<domain::RepRange, RecordError> {
    let invalid = || RecordError::InvalidRepRange(value.to_string());
    let bounds = value
        .split('-')
        .map(|n| n.trim().parse::<u32>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;
    match bounds[..] {
        [reps] if reps > 0 => Ok(domain::RepRange::new(reps, reps)),
        [min, max] if min > 0 && max > 0 => Ok(domain::RepRange::new(min, max)),
        _ => Err(invalid()),
    }
}

fn keys<P: Property>(values: impl IntoIterator<Item = P>) -> Vec<String> {
    values.into_iter().map(|p| p.key().to_string()).collect()
}

/// Catalog entry. Only id, name, pattern and primary muscles are required.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanic: Option<String>,
    pub pattern: String,
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub rep_ranges: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_hours: Option<u32>,
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            localized_name: Some(value.localized_name.clone()),
            category: Some(value.category.key().to_string()),
            mechanic: Some(value.mechanic.key().to_string()),
            pattern: value.pattern.key().to_string(),
            primary_muscles: keys(value.primary_muscles.iter().copied()),
            secondary_muscles: keys(value.secondary_muscles.iter().copied()),
            equipment: keys(value.equipment.iter().copied()),
            difficulty: Some(value.difficulty.key().to_string()),
            rep_ranges: value
                .rep_ranges
                .iter()
                .map(|(goal, range)| (goal.key().to_string(), range.to_string()))
                .collect(),
            recovery_hours: Some(value.recovery_hours),
            contraindications: value.contraindications.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let name = domain::Name::new(&value.name)?;
        let mut exercise = domain::Exercise::custom(
            value.id.into(),
            &name,
            parse("pattern", &value.pattern)?,
            parse_all("muscle", &value.primary_muscles)?,
            parse_all("equipment", &value.equipment)?,
        );
        if let Some(localized_name) = value.localized_name.filter(|n| !n.trim().is_empty()) {
            exercise.localized_name = localized_name;
        }
        if let Some(category) = value.category {
            exercise.category = parse("category", &category)?;
        }
        if let Some(mechanic) = value.mechanic {
            exercise.mechanic = parse("mechanic", &mechanic)?;
        }
        if let Some(difficulty) = value.difficulty {
            exercise.difficulty = parse("difficulty", &difficulty)?;
        }
        exercise.secondary_muscles = parse_all("muscle", &value.secondary_muscles)?;
        exercise.rep_ranges = value
            .rep_ranges
            .iter()
            .map(|(goal, range)| Ok((parse("goal", goal)?, parse_rep_range(range)?)))
            .collect::<Result<_, RecordError>>()?;
        exercise.recovery_hours = value
            .recovery_hours
            .unwrap_or_else(|| domain::default_recovery_hours(exercise.mechanic));
        exercise.contraindications = value.contraindications;
        Ok(exercise)
    }
}

/// One day of an imported workout card.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Card {
    #[serde(alias = "day")]
    pub label: String,
    #[serde(alias = "entries")]
    pub exercises: Vec<CardEntry>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub muscles: Vec<String>,
    pub sets: u32,
    pub reps: Reps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Text(String),
}

impl TryFrom<Card> for domain::DnaDay {
    type Error = RecordError;

    fn try_from(value: Card) -> Result<Self, Self::Error> {
        Ok(Self {
            label: value.label,
            entries: value
                .exercises
                .into_iter()
                .map(domain::DnaEntry::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<CardEntry> for domain::DnaEntry {
    type Error = RecordError;

    fn try_from(value: CardEntry) -> Result<Self, Self::Error> {
        let name = domain::Name::new(&value.name)?;
        let pattern = value.pattern.as_deref().and_then(|key| {
            let pattern = domain::MovementPattern::from_key(key);
            if pattern.is_none() {
                debug!("ignoring unknown pattern \"{key}\" of \"{name}\"");
            }
            pattern
        });
        let muscles = value
            .muscles
            .iter()
            .filter_map(|key| {
                let muscle = domain::Muscle::from_key(key);
                if muscle.is_none() {
                    debug!("ignoring unknown muscle \"{key}\" of \"{name}\"");
                }
                muscle
            })
            .collect();
        Ok(Self {
            name: name.to_string(),
            exercise_id: value
                .exercise_id
                .filter(|id| !id.trim().is_empty())
                .map(domain::ExerciseID::from),
            pattern,
            muscles,
            sets: value.sets.max(1),
            reps: match value.reps {
                Reps::Count(reps) => reps.to_string(),
                Reps::Text(reps) => reps.trim().to_string(),
            },
            rest_seconds: value.rest_seconds,
            notes: value.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub goal: String,
    pub level: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    /// Most recent first.
    #[serde(default)]
    pub recently_used: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dna: Option<DnaSummary>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DnaSummary {
    #[serde(default)]
    pub preferred_exercises: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory_philosophy: Option<String>,
}

impl TryFrom<Client> for domain::ClientContext {
    type Error = RecordError;

    fn try_from(value: Client) -> Result<Self, Self::Error> {
        let goal = domain::Goal::from_key(&value.goal)
            .ok_or_else(|| domain::ValidationError::UnknownGoal(value.goal.clone()))?;
        let level = domain::Difficulty::from_key(&value.level)
            .ok_or_else(|| domain::ValidationError::UnknownLevel(value.level.clone()))?;
        let mut context = domain::ClientContext::new(goal, level);
        if !value.equipment.is_empty() {
            context.equipment = parse_all("equipment", &value.equipment)?;
        }
        context.limitations = value
            .limitations
            .into_iter()
            .filter(|l| !l.trim().is_empty())
            .collect();
        context.recently_used = value
            .recently_used
            .into_iter()
            .map(domain::ExerciseID::from)
            .collect();
        context.dna = value
            .dna
            .map(|dna| {
                Ok::<_, RecordError>(domain::DnaSummary {
                    preferred_exercises: dna.preferred_exercises,
                    preferred_sets: dna.preferred_sets,
                    preferred_reps: dna.preferred_reps,
                    accessory_philosophy: match dna.accessory_philosophy {
                        Some(key) => domain::AccessoryPhilosophy::from_key(&key).ok_or(
                            RecordError::UnknownKey {
                                kind: "accessory philosophy",
                                key,
                            },
                        )?,
                        None => domain::AccessoryPhilosophy::default(),
                    },
                })
            })
            .transpose()?;
        Ok(context)
    }
}
