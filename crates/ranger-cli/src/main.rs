//! Ranger CLI - Query park visit scenarios from the command line

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, park, summary, visitor};
use config::Config;
use output::OutputFormat;
use ranger_core::{Scenario, World};

#[derive(Parser)]
#[command(name = "ranger")]
#[command(author, version, about = "Park, visitor and trip queries")]
pub struct Cli {
    /// Scenario file (TOML or JSON)
    #[arg(short, long, global = true)]
    pub scenario: Option<PathBuf>,

    /// Config file (default: <config dir>/ranger/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Every park with its visits, plus the most visited park
    Summary,
    /// Trips, visitors and best visitor of one park
    Park(park::ParkArgs),
    /// Trips and parks visited by one visitor
    Visitor(visitor::VisitorArgs),
    /// The park with the most visits
    MostVisited,
    /// Load the scenario and report what it contains
    Validate,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded scenario
pub struct AppContext {
    pub world: World,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli, config: &Config) -> anyhow::Result<Self> {
        let path = cli
            .scenario
            .as_deref()
            .or(config.scenario.as_deref())
            .context("No scenario file given; pass --scenario or set `scenario` in the config")?;

        let scenario = read_scenario(path)?;
        let world = scenario
            .load()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;

        let format = cli.format.as_deref().unwrap_or(&config.format);

        Ok(Self {
            world,
            format: OutputFormat::from(format),
        })
    }
}

/// Read a scenario file, picking the parser from the extension
fn read_scenario(path: &Path) -> anyhow::Result<Scenario> {
    tracing::debug!("Reading scenario from {:?}", path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario {}", path.display()))?;

    let scenario = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Scenario::from_json_str(&content)?,
        _ => toml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))?,
    };
    Ok(scenario)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting ranger CLI");

    if let Commands::Completions(args) = &cli.command {
        return completions::run(args);
    }

    let config = Config::load(cli.config.as_deref())?;
    let ctx = AppContext::new(&cli, &config)?;

    match &cli.command {
        Commands::Summary => summary::run(&ctx)?,
        Commands::Park(args) => park::run(args, &ctx)?,
        Commands::Visitor(args) => visitor::run(args, &ctx)?,
        Commands::MostVisited => summary::run_most_visited(&ctx)?,
        Commands::Validate => summary::run_validate(&ctx)?,
        Commands::Completions(_) => unreachable!("handled before loading the scenario"),
    }

    Ok(())
}
