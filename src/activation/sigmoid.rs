use crate::error::Result;
use crate::math::linalg::{elementwise_multiply, scalar_subtract};
use crate::math::matrix::Matrix;

/// Inputs above this value map straight to `1.0`; `exp` would overflow.
pub const OVERFLOW_GUARD: f64 = 500.0;

/// Logistic function `e^x / (1 + e^x)`.
pub fn logistic(x: f64) -> f64 {
    if x > OVERFLOW_GUARD {
        return 1.0;
    }
    let e = x.exp();
    e / (1.0 + e)
}

/// Element-wise logistic activation. Every entry lands in `[0, 1]`.
pub fn sigmoid(x: &Matrix) -> Matrix {
    x.map(logistic)
}

/// Sigmoid derivative expressed through its output: `a ⊙ (1 - a)`.
pub fn sigmoid_slope(a: &Matrix) -> Result<Matrix> {
    elementwise_multiply(a, &scalar_subtract(1.0, a))
}
