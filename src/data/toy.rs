use crate::error::Result;
use crate::math::matrix::Matrix;

/// Two linearly separable clusters: two points near the origin (label 0) and
/// two near `(1, 1)` (label 1).
pub fn two_clusters() -> Result<(Matrix, Vec<i64>)> {
    let input = Matrix::new(4, 2, vec![0.0, 0.1, 0.1, 0.0, 0.9, 1.0, 1.0, 0.9])?;
    Ok((input, vec![0, 0, 1, 1]))
}

/// The XOR truth table.
pub fn xor() -> Result<(Matrix, Vec<i64>)> {
    let input = Matrix::new(4, 2, vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0])?;
    Ok((input, vec![0, 1, 1, 0]))
}
