use crate::error::Result;
use crate::math::linalg::{scalar_multiply, subtract};
use crate::math::matrix::Matrix;

/// Plain gradient descent: `w - learning_rate * grad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Returns the updated weights; `weights` itself is not modified.
    pub fn step(&self, weights: &Matrix, grad: &Matrix) -> Result<Matrix> {
        subtract(weights, &scalar_multiply(self.learning_rate, grad))
    }
}
