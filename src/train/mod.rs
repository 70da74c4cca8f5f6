pub mod convergence;
pub mod loop_fn;
pub mod step_stats;
pub mod train_config;
pub mod trainer;

pub use convergence::has_converged;
pub use loop_fn::{train_loop, TrainReport, TrainingState};
pub use step_stats::StepStats;
pub use train_config::TrainConfig;
pub use trainer::{accuracy, classify, train_network, FittedModel};
