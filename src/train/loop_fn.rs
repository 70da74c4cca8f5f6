use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::backward::backward;
use crate::network::network::Network;
use crate::train::convergence::has_converged;
use crate::train::step_stats::StepStats;
use crate::train::train_config::TrainConfig;

/// Append-only loss history, one entry per completed step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingState {
    loss_history: Vec<f64>,
}

impl TrainingState {
    pub fn new() -> Self {
        TrainingState::default()
    }

    pub fn record(&mut self, loss: f64) {
        self.loss_history.push(loss);
    }

    pub fn history(&self) -> &[f64] {
        &self.loss_history
    }

    pub fn steps(&self) -> usize {
        self.loss_history.len()
    }

    pub fn last_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }

    /// Checks `current` against the recorded history, which must not yet
    /// include it.
    pub fn has_converged(&self, current: f64, tolerance: f64, min_epoch: usize) -> bool {
        has_converged(&self.loss_history, current, tolerance, min_epoch)
    }
}

/// Outcome of `train_loop`.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Network after the last completed step.
    pub network: Network,
    pub state: TrainingState,
    /// 1-based step at which the loss plateaued, if it did.
    pub converged_at: Option<usize>,
    /// `true` if the stop flag or a dropped progress receiver ended the run.
    pub stopped_early: bool,
}

impl TrainReport {
    pub fn final_loss(&self) -> Option<f64> {
        self.state.last_loss()
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` against `labels` for at most `config.epochs` steps.
///
/// Each step is a full-batch forward/backward pass producing a new network.
/// Its loss is checked against the history collected so far and then
/// appended. The loop ends when:
/// - the loss has plateaued (`has_converged`), or
/// - `config.epochs` steps have run, or
/// - `config.stop_flag` is set, or the `progress_tx` receiver was dropped.
pub fn train_loop(network: Network, labels: &Matrix, config: &TrainConfig) -> Result<TrainReport> {
    config.validate()?;

    let mut network = network;
    let mut state = TrainingState::new();
    let mut converged_at = None;
    let mut stopped_early = false;

    info!(
        depth = network.depth(),
        samples = network.samples(),
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        "training started"
    );

    for step in 1..=config.epochs {
        if stop_requested(config) {
            stopped_early = true;
            break;
        }

        let t_start = Instant::now();

        let (next, loss) = backward(&network, labels, config.learning_rate)?;
        let converged = state.has_converged(loss, config.tolerance, config.min_epoch);
        state.record(loss);
        network = next;

        debug!(step, loss, "step complete");

        let stats = StepStats {
            step,
            total_steps: config.epochs,
            loss,
            converged,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if converged {
            info!(step, loss, "loss plateaued");
            converged_at = Some(step);
        }

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                stopped_early = converged_at.is_none();
                break;
            }
        }

        if converged {
            break;
        }
    }

    info!(
        steps = state.steps(),
        final_loss = ?state.last_loss(),
        converged = converged_at.is_some(),
        "training finished"
    );

    Ok(TrainReport { network, state, converged_at, stopped_early })
}

fn stop_requested(config: &TrainConfig) -> bool {
    config
        .stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}
