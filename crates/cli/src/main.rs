#![warn(clippy::pedantic)]

use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use allenatore_domain::{
    self as domain, ClientContext, Equipment, ExerciseFilter, GeneratedProgram,
    GenerationParameters, MovementPattern, Muscle, Name, Property, Service,
};
use allenatore_enhancer::LlmEnhancer;
use allenatore_storage::{JsonFile, program::Program, read_client, write_program};
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use crate::settings::Settings;

mod logger;
mod settings;

#[derive(Parser)]
#[command(
    name = "allenatore",
    version,
    about = "Generate periodized strength training programs"
)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing exercises.json and cards.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a program for a client
    Generate(GenerateArgs),
    /// List the exercise catalog
    Catalog(CatalogArgs),
    /// Add a custom exercise to the catalog
    AddExercise(AddExerciseArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Client context (JSON)
    #[arg(long)]
    client: PathBuf,

    #[arg(long)]
    weeks: Option<u32>,

    /// Periodization model: linear, block, undulating, conjugate or rpe
    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    sessions: Option<u32>,

    /// Template source: catalog, dna or combined
    #[arg(long)]
    mode: Option<String>,

    /// First day of week 1 (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Output file, stdout if omitted
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Run the language model style pass
    #[arg(long)]
    enhance: bool,
}

#[derive(Args)]
struct CatalogArgs {
    #[arg(long)]
    pattern: Option<String>,

    /// Filter by (localized) name
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args)]
struct AddExerciseArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    pattern: String,

    #[arg(long, value_delimiter = ',', required = true)]
    muscles: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    equipment: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).await?;
    logger::init(settings.level(cli.verbose)?, settings.log_file.as_deref())?;

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| settings.data_dir.clone());
    let service = Service::new(JsonFile::new(data_dir));

    match cli.command {
        Command::Generate(args) => generate(&service, &settings, args).await,
        Command::Catalog(args) => catalog(&service, &args).await,
        Command::AddExercise(args) => add_exercise(&service, args).await,
    }
}

async fn generate(
    service: &Service<JsonFile>,
    settings: &Settings,
    args: GenerateArgs,
) -> Result<()> {
    let context = read_client(&args.client)
        .await
        .with_context(|| format!("failed to read client {}", args.client.display()))?;
    let parameters = GenerationParameters::parse(
        args.weeks.unwrap_or(settings.weeks),
        args.model.as_deref().unwrap_or(&settings.model),
        args.sessions.unwrap_or(settings.sessions_per_week),
        args.mode.as_deref().unwrap_or(&settings.mode),
        args.start,
    )?;

    let program = if args.enhance || settings.enhancer.enabled {
        generate_enhanced(service, settings, &context, &parameters).await?
    } else {
        service.generate_program(&context, &parameters).await?
    };
    info!(
        "generated {} weeks with {} sessions, {} unfilled slots",
        program.weeks.len(),
        program.sessions().count(),
        program.unfilled.len()
    );
    for warning in &program.volume.warnings {
        warn!(
            "{} volume for {}: {} sets ({}-{}). {}",
            warning.kind.key(),
            warning.muscle.key(),
            warning.sets,
            warning.min,
            warning.max,
            warning.recommendation
        );
    }

    match args.output {
        Some(path) => write(&path, &program).await,
        None => {
            println!("{}", serde_json::to_string_pretty(&Program::from(&program))?);
            Ok(())
        }
    }
}

async fn generate_enhanced(
    service: &Service<JsonFile>,
    settings: &Settings,
    context: &ClientContext,
    parameters: &GenerationParameters,
) -> Result<GeneratedProgram> {
    match LlmEnhancer::new(settings.enhancer_config()) {
        Ok(enhancer) => Ok(service
            .generate_enhanced_program(context, parameters, &enhancer)
            .await?),
        Err(err) => {
            warn!("enhancer unavailable: {err}");
            Ok(service.generate_program(context, parameters).await?)
        }
    }
}

async fn write(path: &Path, program: &GeneratedProgram) -> Result<()> {
    write_program(path, program)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("program written to {}", path.display());
    Ok(())
}

async fn catalog(service: &Service<JsonFile>, args: &CatalogArgs) -> Result<()> {
    let catalog = service.get_catalog().await?;
    let mut filter = ExerciseFilter {
        name: args.search.clone().unwrap_or_default(),
        ..ExerciseFilter::default()
    };
    if let Some(pattern) = &args.pattern {
        filter.patterns = HashSet::from([parse_key::<MovementPattern>("pattern", pattern)?]);
    }
    for exercise in filter.exercises(&catalog) {
        println!(
            "{:<28} {:<36} {:<16} {}",
            exercise.id.as_str(),
            exercise.name,
            exercise.pattern.key(),
            exercise
                .equipment
                .iter()
                .map(|e| e.key())
                .collect::<Vec<_>>()
                .join(",")
        );
    }
    Ok(())
}

async fn add_exercise(service: &Service<JsonFile>, args: AddExerciseArgs) -> Result<()> {
    let name = Name::new(&args.name)?;
    let pattern = parse_key::<MovementPattern>("pattern", &args.pattern)?;
    let muscles = parse_keys::<Muscle>("muscle", &args.muscles)?;
    let equipment = parse_keys::<Equipment>("equipment", &args.equipment)?;
    let exercise = match service
        .create_custom_exercise(name, pattern, muscles, equipment)
        .await
    {
        Err(domain::CreateError::Conflict) => {
            return Err(anyhow!("exercise \"{}\" already exists", args.name));
        }
        result => result?,
    };
    println!("{}", exercise.id.as_str());
    Ok(())
}

fn parse_key<P: Property>(kind: &str, key: &str) -> Result<P> {
    P::from_key(key).ok_or_else(|| {
        anyhow!(
            "unknown {kind} \"{key}\" (expected one of: {})",
            P::iter().map(|p| p.key()).collect::<Vec<_>>().join(", ")
        )
    })
}

fn parse_keys<P: Property + Ord>(kind: &str, keys: &[String]) -> Result<BTreeSet<P>> {
    keys.iter().map(|key| parse_key(kind, key)).collect()
}
