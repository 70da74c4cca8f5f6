pub mod sigmoid;

pub use sigmoid::{logistic, sigmoid, sigmoid_slope, OVERFLOW_GUARD};
