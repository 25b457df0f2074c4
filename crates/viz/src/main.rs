//! Bayes Widgets Viewer
//!
//! Run with: cargo run -p viz
//!
//! Examples:
//!   cargo run -p viz -- --seed 42
//!   cargo run -p viz -- --widget explorer --dark
//!
//! Tab switches widget, Left/Right change step, F3 toggles debug info.

use bayes_model::Theme;
use bevy::prelude::*;
use clap::{Parser, ValueEnum};
use region_explorer::ExplorerConfig;
use std::path::PathBuf;
use viz::{ActiveWidget, BayesVizPlugin, VizSettings};
use world_sampler::SamplerConfig;

/// Bayes Widgets Viewer
#[derive(Parser, Debug)]
#[command(name = "viz")]
#[command(about = "Interactive viewer for the Bayes visualization widgets")]
struct Args {
    /// Widget shown at launch
    #[arg(long, value_enum, default_value_t = WidgetArg::Sampler)]
    widget: WidgetArg,

    /// Random seed for world placement (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a World Sampler TOML configuration
    #[arg(long)]
    sampler_config: Option<PathBuf>,

    /// Path to a Region Explorer TOML configuration
    #[arg(long)]
    explorer_config: Option<PathBuf>,

    /// Use the dark theme
    #[arg(long)]
    dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WidgetArg {
    Sampler,
    Explorer,
}

impl From<WidgetArg> for ActiveWidget {
    fn from(arg: WidgetArg) -> Self {
        match arg {
            WidgetArg::Sampler => ActiveWidget::Sampler,
            WidgetArg::Explorer => ActiveWidget::Explorer,
        }
    }
}

fn main() {
    let args = Args::parse();

    let sampler = match &args.sampler_config {
        Some(path) => SamplerConfig::from_file(path),
        None => Ok(SamplerConfig::default()),
    };
    let explorer = match &args.explorer_config {
        Some(path) => ExplorerConfig::from_file(path),
        None => Ok(ExplorerConfig::default()),
    };

    let (mut sampler, explorer) = match (sampler, explorer) {
        (Ok(sampler), Ok(explorer)) => (sampler, explorer),
        (Err(e), _) => {
            eprintln!("Error loading sampler config: {}", e);
            std::process::exit(1);
        }
        (_, Err(e)) => {
            eprintln!("Error loading explorer config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        sampler.seed = Some(seed);
    }

    let mut settings = VizSettings {
        start: args.widget.into(),
        sampler,
        explorer,
    };
    if args.dark {
        settings = settings.with_theme(Theme::Dark);
    }

    App::new()
        .add_plugins(BayesVizPlugin { settings })
        .run();
}
