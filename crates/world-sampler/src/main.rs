//! World Sampler CLI
//!
//! Renders a generated world scatter as SVG (or dumps the worlds as JSON).
//!
//! Examples:
//!   cargo run -p world-sampler -- --seed 42 --step 3 > worlds.svg
//!   cargo run -p world-sampler -- --format json --population 500

use bayes_model::{Step, WorldStats};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use world_sampler::{svg, ConfigError, SamplerConfig, SamplerWidget};

/// Command line arguments for the sampler
#[derive(Parser, Debug)]
#[command(name = "world-sampler")]
#[command(about = "Render the Bayes world-sampling scatter")]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Presentation step (0-3 or a step name)
    #[arg(long, default_value = "0")]
    step: Step,

    /// Random seed for reproducibility (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Target number of worlds (overrides the config)
    #[arg(long)]
    population: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Json,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize worlds: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    if args.print_default_config {
        print!("{}", world_sampler::default_config_toml());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(population) = args.population {
        config.generation.population = population;
    }
    config.validate()?;

    let mut widget = SamplerWidget::from_config(config);
    widget.resize(args.width, args.height);
    widget.go_to_step(args.step.index());
    // Render the settled frame, not the start of the animation
    widget.advance(widget.config().transition.duration_seconds);

    log_stats(widget.stats());

    let rendered = match args.format {
        OutputFormat::Svg => svg::render_worlds(
            args.width,
            args.height,
            widget.points(),
            &widget.current_styles(),
            None,
        ),
        OutputFormat::Json => serde_json::to_string_pretty(widget.points())?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn log_stats(stats: &WorldStats) {
    tracing::info!(
        "{} worlds: |H| = {}, |E| = {}, |H∩E| = {}",
        stats.total,
        stats.h_count,
        stats.e_count,
        stats.h_and_e_count
    );
    for (label, value) in stats.display_rows() {
        tracing::info!("  {} = {}", label, value);
    }
}
