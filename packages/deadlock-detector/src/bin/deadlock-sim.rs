//! Deadlock detector CLI
//!
//! # Usage
//!
//! ```bash
//! # Run a preset scenario
//! cargo run --bin deadlock-sim -- detect --scenario safe
//!
//! # Random scenario, reproducible
//! cargo run --bin deadlock-sim -- detect --scenario random --seed 7
//!
//! # Custom input (blank or invalid cells count as 0)
//! cargo run --bin deadlock-sim -- detect -n 2 -m 2 \
//!     --allocation "1 0; 0 1" --request "0 1; 1 0" --available "0 0"
//!
//! # Snapshot document
//! cargo run --bin deadlock-sim -- --format json detect --file snapshot.yaml
//!
//! # Every preset plus five random scenarios
//! cargo run --bin deadlock-sim -- batch --random 5
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use deadlock_detector::config::{DetectorConfig, OutputFormat};
use deadlock_detector::features::report::render::{
    render_batch_summary, render_json_string, render_text,
};
use deadlock_detector::features::input::ensure_within_limits;
use deadlock_detector::features::scenarios::preset;
use deadlock_detector::{
    DeadlockDetectionUseCase, DetectorError, FormInput, RandomScenarioGenerator, ScenarioKind,
    Snapshot, WorkFinishAnalyzer,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deadlock-sim")]
#[command(about = "Deadlock Detector - work/finish safety analysis of resource snapshots", long_about = None)]
struct Cli {
    /// Configuration file (YAML, schema version 1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format: text or json (overrides the config file)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one snapshot
    Detect(DetectArgs),

    /// List available scenarios
    List,

    /// Analyze every preset (and optionally random scenarios) in parallel
    Batch {
        /// Number of random scenarios to add
        #[arg(long, default_value = "0")]
        random: usize,

        /// Seed for the random scenarios
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as YAML
    ShowConfig,
}

#[derive(Args)]
struct DetectArgs {
    /// Scenario: safe, dead1, dead2, random
    #[arg(short, long, conflicts_with_all = ["file", "processes"])]
    scenario: Option<String>,

    /// Seed for --scenario random
    #[arg(long)]
    seed: Option<u64>,

    /// Snapshot document (.json, .yaml or .yml)
    #[arg(long, conflicts_with = "processes")]
    file: Option<PathBuf>,

    /// Number of processes (custom input)
    #[arg(short = 'n', long)]
    processes: Option<String>,

    /// Number of resource types (custom input)
    #[arg(short = 'm', long)]
    resources: Option<String>,

    /// Allocation matrix, rows separated by ';'
    #[arg(long, default_value = "")]
    allocation: String,

    /// Request matrix, rows separated by ';'
    #[arg(long, default_value = "")]
    request: String,

    /// Available vector
    #[arg(long, default_value = "")]
    available: String,

    /// Hide the step trace
    #[arg(long)]
    no_trace: bool,

    /// Hide the textual allocation graph
    #[arg(long)]
    no_graph: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DetectorConfig::from_yaml(path)?,
        None => DetectorConfig::default(),
    };
    if let Some(format) = &cli.format {
        config = config.with_format(OutputFormat::from_str(format)?);
    }

    match cli.command {
        Commands::Detect(args) => run_detect(args, config)?,
        Commands::List => list_scenarios(&config),
        Commands::Batch { random, seed } => run_batch(random, seed, &config)?,
        Commands::ShowConfig => print!("{}", config.to_yaml()?),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_detect(args: DetectArgs, mut config: DetectorConfig) -> Result<(), DetectorError> {
    if args.no_trace {
        config.output.show_trace = false;
    }
    if args.no_graph {
        config.output.show_graph = false;
    }

    let snapshot = load_snapshot(&args, &config)?;
    let use_case =
        DeadlockDetectionUseCase::with_analyzer(WorkFinishAnalyzer::new(), config.labels.clone());
    let report = use_case.detect(&snapshot)?;

    match config.output.format {
        OutputFormat::Text => print!("{}", render_text(&report, &config.output)),
        OutputFormat::Json => println!("{}", render_json_string(&report)?),
    }
    Ok(())
}

fn load_snapshot(args: &DetectArgs, config: &DetectorConfig) -> Result<Snapshot, DetectorError> {
    if let Some(path) = &args.file {
        return read_snapshot_file(path);
    }

    if let Some(name) = &args.scenario {
        let kind = ScenarioKind::from_str(name)?;
        debug!("loading scenario {}", kind);
        return match preset(kind) {
            Some(snapshot) => Ok(snapshot),
            None => {
                let mut generator = match args.seed {
                    Some(seed) => RandomScenarioGenerator::with_seed(config.random.clone(), seed)?,
                    None => RandomScenarioGenerator::new(config.random.clone())?,
                };
                Ok(generator.generate())
            }
        };
    }

    // Custom input; with no dimensions given this reports DimensionsNotSet
    let form = FormInput::from_text(
        args.processes.as_deref().unwrap_or_default(),
        args.resources.as_deref().unwrap_or_default(),
        &args.allocation,
        &args.request,
        &args.available,
    );
    Ok(form.to_snapshot()?)
}

fn read_snapshot_file(path: &Path) -> Result<Snapshot, DetectorError> {
    let content = std::fs::read_to_string(path)?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let snapshot = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    ensure_within_limits(&snapshot)?;
    Ok(snapshot)
}

fn list_scenarios(config: &DetectorConfig) {
    for kind in ScenarioKind::all_presets() {
        if let Some(snapshot) = preset(kind) {
            println!(
                "{:<7} {}×{}  {}",
                kind.as_str(),
                snapshot.process_count,
                snapshot.resource_count,
                kind.description()
            );
        }
    }
    println!(
        "{:<7} {}..={}×{}..={}  {}",
        ScenarioKind::Random.as_str(),
        config.random.min_processes,
        config.random.max_processes,
        config.random.min_resources,
        config.random.max_resources,
        ScenarioKind::Random.description()
    );
}

fn run_batch(random: usize, seed: Option<u64>, config: &DetectorConfig) -> Result<(), DetectorError> {
    let mut inputs: Vec<(String, Snapshot)> = ScenarioKind::all_presets()
        .into_iter()
        .filter_map(|kind| preset(kind).map(|s| (kind.to_string(), s)))
        .collect();

    if random > 0 {
        let mut generator = match seed {
            Some(seed) => RandomScenarioGenerator::with_seed(config.random.clone(), seed)?,
            None => RandomScenarioGenerator::new(config.random.clone())?,
        };
        for k in 1..=random {
            inputs.push((format!("random-{}", k), generator.generate()));
        }
    }

    let use_case =
        DeadlockDetectionUseCase::with_analyzer(WorkFinishAnalyzer::new(), config.labels.clone());
    let mut reports = Vec::with_capacity(inputs.len());
    for (name, outcome) in use_case.detect_batch(&inputs) {
        match outcome {
            Ok(report) => reports.push((name, report)),
            Err(err) => warn!("{}: {}", name, err),
        }
    }

    match config.output.format {
        OutputFormat::Text => print!("{}", render_batch_summary(&reports)),
        OutputFormat::Json => {
            let entries: Vec<_> = reports
                .iter()
                .map(|(name, report)| serde_json::json!({ "name": name, "report": report }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}
