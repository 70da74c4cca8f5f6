use serde::{Deserialize, Serialize};

/// Per-step statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, one value is
/// sent after every completed step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStats {
    /// 1-based step number.
    pub step: usize,
    pub total_steps: usize,
    /// Frobenius loss of the output residual before this step's update.
    pub loss: f64,
    pub converged: bool,
    /// Wall-clock duration of this step in milliseconds.
    pub elapsed_ms: u64,
}
