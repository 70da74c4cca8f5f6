use std::path::Path;
use std::sync::mpsc;
use std::sync::{atomic::AtomicBool, Arc};

use serde::{Deserialize, Serialize};

use crate::error::{MatrError, Result};
use crate::train::step_stats::StepStats;

/// Hyperparameters for a training run.
///
/// Serialized fields can be stored as JSON; missing fields take their default.
/// `progress_tx` and `stop_flag` are runtime hooks only:
/// - `progress_tx` receives one `StepStats` per step; dropping the receiver
///   ends training early.
/// - `stop_flag` ends training before the next step once set to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Neuron count of each hidden layer, input side first.
    pub hidden_widths: Vec<usize>,
    pub learning_rate: f64,
    /// Upper bound on training steps.
    pub epochs: usize,
    /// Relative deviation under which the loss counts as flat.
    pub tolerance: f64,
    /// Size of the trailing loss window used for the convergence check.
    pub min_epoch: usize,
    /// Seed for weight initialization; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Clamp input features into `[lo, hi]` before training.
    pub min_max: Option<(f64, f64)>,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            hidden_widths: vec![4],
            learning_rate: 0.1,
            epochs: 1000,
            tolerance: 0.001,
            min_epoch: 30,
            seed: None,
            min_max: None,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl TrainConfig {
    pub fn new(hidden_widths: Vec<usize>, learning_rate: f64, epochs: usize) -> Self {
        TrainConfig {
            hidden_widths,
            learning_rate,
            epochs,
            ..TrainConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(MatrError::invalid(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(MatrError::invalid(format!("tolerance must be >= 0, got {}", self.tolerance)));
        }
        if self.hidden_widths.contains(&0) {
            return Err(MatrError::invalid("hidden layer widths must be positive"));
        }
        if let Some((lo, hi)) = self.min_max {
            if !(lo <= hi) {
                return Err(MatrError::invalid(format!("min_max bounds ({}, {}) are not ordered", lo, hi)));
            }
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
