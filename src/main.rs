use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use matr_nn::data::{load_csv, toy};
use matr_nn::train::{accuracy, train_network, TrainConfig};
use matr_nn::Matrix;

#[derive(Parser)]
#[command(name = "matr-nn", about = "Train a sigmoid feed-forward network on tabular data")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on a CSV file whose last column is an integer label
    Train {
        #[arg(long)]
        data: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Train on the built-in two-cluster data set
    Demo {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Write the default training config as JSON
    InitConfig { path: PathBuf },
}

#[derive(clap::Args)]
struct Overrides {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hidden layer widths, e.g. 8,4
    #[arg(long, value_delimiter = ',')]
    hidden: Option<Vec<usize>>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,
}

impl Overrides {
    fn resolve(self) -> Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::load_json(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => TrainConfig::default(),
        };
        if let Some(hidden) = self.hidden {
            config.hidden_widths = hidden;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(rate) = self.learning_rate {
            config.learning_rate = rate;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Train { data, overrides } => {
            let config = overrides.resolve()?;
            let dataset = load_csv(&data)
                .with_context(|| format!("failed to read data set {}", data.display()))?;
            info!(rows = dataset.labels.len(), features = dataset.features.cols(), "loaded data set");
            run(&dataset.features, &dataset.labels, &config)
        }
        Commands::Demo { overrides } => {
            let config = overrides.resolve()?;
            let (input, labels) = toy::two_clusters()?;
            run(&input, &labels, &config)
        }
        Commands::InitConfig { path } => {
            TrainConfig::default()
                .save_json(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote default config to {}", path.display());
            Ok(())
        }
    }
}

fn run(input: &Matrix, labels: &[i64], config: &TrainConfig) -> Result<()> {
    let model = train_network(input, labels, config)?;
    let report = &model.report;
    let predicted = model.classify_training()?;

    println!("Steps run:      {}", report.state.steps());
    match report.converged_at {
        Some(step) => println!("Converged at:   step {}", step),
        None => println!("Converged at:   -"),
    }
    if let Some(loss) = report.final_loss() {
        println!("Final loss:     {:.6}", loss);
    }
    println!("Train accuracy: {:.2}%", accuracy(&predicted, labels) * 100.0);
    Ok(())
}
