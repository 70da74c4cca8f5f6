//! Shape-checked linear algebra over [`Matrix`].
//!
//! Every function returns a fresh matrix. Binary entry-wise operations require
//! identical shapes; `multiply` requires `x.cols() == y.rows()`.

use rand::Rng;

use crate::error::{MatrError, Result};
use crate::math::matrix::Matrix;

/// Matrix product `x · y`, shape `x.rows() × y.cols()`.
pub fn multiply(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    if x.cols() != y.rows() {
        return Err(MatrError::mismatch("multiply", x.shape(), y.shape()));
    }

    let (n, inner, m) = (x.rows(), x.cols(), y.cols());
    let a = x.as_slice();
    let b = y.as_slice();
    let mut out = vec![0.0; n * m];

    // i-k-j order: same accumulation order per entry as i-j-k, but walks `b` row-wise.
    for i in 0..n {
        let out_row = &mut out[i * m..(i + 1) * m];
        for k in 0..inner {
            let a_ik = a[i * inner + k];
            let b_row = &b[k * m..(k + 1) * m];
            for (o, &b_kj) in out_row.iter_mut().zip(b_row) {
                *o += a_ik * b_kj;
            }
        }
    }

    Matrix::new(n, m, out)
}

/// Hadamard product.
pub fn elementwise_multiply(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_with(y, "elementwise_multiply", |a, b| a * b)
}

pub fn subtract(x: &Matrix, y: &Matrix) -> Result<Matrix> {
    x.zip_with(y, "subtract", |a, b| a - b)
}

/// `x - y[i][j]` for every entry.
pub fn scalar_subtract(x: f64, y: &Matrix) -> Matrix {
    y.map(|v| x - v)
}

pub fn scalar_multiply(x: f64, y: &Matrix) -> Matrix {
    y.map(|v| x * v)
}

pub fn transpose(x: &Matrix) -> Matrix {
    x.transpose()
}

/// Standard-normal weight matrix. Only used at initialization.
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
    Matrix::random_normal(rows, cols, rng)
}

pub fn clamp(x: &Matrix, lo: f64, hi: f64) -> Result<Matrix> {
    x.clamp(lo, hi)
}

pub fn append_bias_column(x: &Matrix) -> Matrix {
    x.append_bias_column()
}
