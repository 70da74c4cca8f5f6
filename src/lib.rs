pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::sigmoid;
pub use data::labels::LabelEncoder;
pub use error::{MatrError, Result};
pub use loss::frobenius::compute_loss;
pub use math::matrix::Matrix;
pub use network::{backward, forward, initialize, predict, Activations, Network};
pub use optim::sgd::Sgd;
pub use train::{has_converged, train_loop, train_network, TrainConfig};
