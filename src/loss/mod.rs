pub mod frobenius;

pub use frobenius::{compute_loss, FrobeniusLoss};
