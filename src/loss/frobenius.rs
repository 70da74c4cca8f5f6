use crate::error::Result;
use crate::math::linalg::subtract;
use crate::math::matrix::Matrix;

/// Root-sum-of-squares of the residual `predicted - expected`.
///
/// Not normalized by element count: the value grows with batch size and
/// output width.
pub struct FrobeniusLoss;

impl FrobeniusLoss {
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> Result<f64> {
        Ok(Self::norm(&Self::residual(predicted, expected)?))
    }

    /// Output-layer error signal: `predicted - expected`.
    pub fn residual(predicted: &Matrix, expected: &Matrix) -> Result<Matrix> {
        subtract(predicted, expected)
    }

    pub fn norm(residual: &Matrix) -> f64 {
        residual.sum_of_squares().sqrt()
    }
}

pub fn compute_loss(x: &Matrix, y: &Matrix) -> Result<f64> {
    FrobeniusLoss::loss(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrError;

    #[test]
    fn identical_matrices_have_zero_loss() {
        let x = Matrix::from_rows(vec![vec![0.3, -2.0], vec![1e9, 4.5]]).unwrap();
        assert_eq!(compute_loss(&x, &x).unwrap(), 0.0);
    }

    #[test]
    fn loss_is_root_sum_of_squares() {
        let x = Matrix::from_rows(vec![vec![3.0, 0.0], vec![0.0, 0.0]]).unwrap();
        let y = Matrix::from_rows(vec![vec![0.0, 0.0], vec![0.0, 4.0]]).unwrap();
        assert_eq!(compute_loss(&x, &y).unwrap(), 5.0);
    }

    #[test]
    fn loss_scales_with_batch_size() {
        let one = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        let zero = Matrix::from_rows(vec![vec![0.0]]).unwrap();
        let four = Matrix::filled(4, 1, 1.0).unwrap();
        let four_zero = Matrix::zeros(4, 1).unwrap();
        assert_eq!(compute_loss(&one, &zero).unwrap(), 1.0);
        assert_eq!(compute_loss(&four, &four_zero).unwrap(), 2.0);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let x = Matrix::zeros(2, 2).unwrap();
        let y = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(compute_loss(&x, &y), Err(MatrError::DimensionMismatch { .. })));
    }
}
