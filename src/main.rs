use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use har_loader::export::export_parquet;
use har_loader::{DatasetLayout, DatasetLoader, LoaderConfig, Split, CHANNELS};

#[derive(Parser)]
#[command(name = "har-loader")]
#[command(about = "Inspect and convert the UCI HAR inertial-signal dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with `root` / `subfolder` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing the dataset folder (default: dataset)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Dataset folder name inside the root (default: "UCI HAR Dataset")
    #[arg(long)]
    subfolder: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the files a split is read from
    Paths {
        /// train or test; both when omitted
        #[arg(short, long)]
        split: Option<Split>,
    },

    /// Load split(s) and print shapes and class counts
    Summary {
        #[arg(short, long)]
        split: Option<Split>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write a split to a Parquet file
    Export {
        #[arg(short, long)]
        split: Split,

        /// Output .parquet path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct SplitSummary {
    split: Split,
    windows: usize,
    timesteps: usize,
    channels: usize,
    classes: Vec<ClassCount>,
}

#[derive(Serialize)]
struct ClassCount {
    class: i64,
    windows: usize,
}

fn layout(cli: &Cli) -> Result<DatasetLayout> {
    let mut config = match &cli.config {
        Some(path) => LoaderConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(subfolder) = &cli.subfolder {
        config.subfolder = subfolder.clone();
    }
    Ok(config.layout())
}

fn splits(split: Option<Split>) -> Vec<Split> {
    split.map_or_else(|| Split::ALL.to_vec(), |s| vec![s])
}

fn summarize(loader: &DatasetLoader, split: Split) -> Result<SplitSummary> {
    let data = loader
        .load_split(split)
        .with_context(|| format!("loading {split} split"))?;
    let (windows, timesteps, channels) = data.features.dim();
    Ok(SplitSummary {
        split,
        windows,
        timesteps,
        channels,
        classes: data
            .labels
            .class_counts()
            .into_iter()
            .map(|(class, windows)| ClassCount { class, windows })
            .collect(),
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let loader = DatasetLoader::new(layout(&cli)?);

    match cli.command {
        Commands::Paths { split } => {
            for split in splits(split) {
                for ch in CHANNELS {
                    println!("{}", loader.resolve_path(Some(ch), split).display());
                }
                println!("{}", loader.resolve_path(None, split).display());
            }
        }
        Commands::Summary { split, json } => {
            let summaries = splits(split)
                .into_iter()
                .map(|s| summarize(&loader, s))
                .collect::<Result<Vec<_>>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for s in &summaries {
                    println!(
                        "{}: {} windows x {} timesteps x {} channels",
                        s.split, s.windows, s.timesteps, s.channels
                    );
                    for c in &s.classes {
                        println!("  class {:>3}: {} windows", c.class, c.windows);
                    }
                }
            }
        }
        Commands::Export { split, output } => {
            let data = loader
                .load_split(split)
                .with_context(|| format!("loading {split} split"))?;
            export_parquet(&data, &output)
                .with_context(|| format!("exporting to {}", output.display()))?;
            println!(
                "Wrote {} windows ({} timesteps each) to {}",
                data.num_windows(),
                data.num_timesteps(),
                output.display()
            );
        }
    }

    Ok(())
}
