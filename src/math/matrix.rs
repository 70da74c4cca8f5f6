use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{MatrError, Result};

/// Dense, row-major matrix of `f64`.
///
/// A `Matrix` is a value: every operation returns a new matrix and leaves its
/// operands untouched. The backward pass relies on this, since it re-reads
/// layer inputs after later layers have been processed.
///
/// Invariant: `data.len() == rows * cols`, with `rows > 0` and `cols > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from row-major `data`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Matrix> {
        check_shape(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrError::invalid(format!(
                "expected {} values for a {}x{} matrix, got {}",
                rows * cols,
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix from a list of equally long rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        check_shape(n_rows, n_cols)?;

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrError::invalid(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    n_cols
                )));
            }
            data.extend(row);
        }
        Ok(Matrix { rows: n_rows, cols: n_cols, data })
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Matrix> {
        check_shape(rows, cols)?;
        Ok(Matrix { rows, cols, data: vec![value; rows * cols] })
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix> {
        Matrix::filled(rows, cols, 0.0)
    }

    /// Every entry drawn independently from N(0, 1).
    pub fn random_normal<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix> {
        check_shape(rows, cols)?;
        let data = (0..rows * cols).map(|_| rng.sample(StandardNormal)).collect();
        Ok(Matrix { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at (`row`, `col`); `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix { rows: self.cols, cols: self.rows, data }
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    /// Combines two same-shape matrices entry by entry.
    pub fn zip_with<F>(&self, other: &Matrix, op: &'static str, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrError::mismatch(op, self.shape(), other.shape()));
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| functor(a, b))
                .collect(),
        })
    }

    /// Copy of `self` with a trailing column of ones, so a single product
    /// against a weight matrix also adds the bias row.
    pub fn append_bias_column(&self) -> Matrix {
        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for row in self.data.chunks(self.cols) {
            data.extend_from_slice(row);
            data.push(1.0);
        }
        Matrix { rows: self.rows, cols, data }
    }

    /// Inverse of [`Matrix::append_bias_column`]: drops the trailing column.
    pub fn strip_bias_column(&self) -> Result<Matrix> {
        if self.cols < 2 {
            return Err(MatrError::invalid("cannot strip the only column of a matrix"));
        }
        let cols = self.cols - 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for row in self.data.chunks(self.cols) {
            data.extend_from_slice(&row[..cols]);
        }
        Ok(Matrix { rows: self.rows, cols, data })
    }

    /// Clamps every entry into `[lo, hi]`.
    pub fn clamp(&self, lo: f64, hi: f64) -> Result<Matrix> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(MatrError::invalid(format!("clamp bounds [{}, {}] are not ordered", lo, hi)));
        }
        Ok(self.map(|x| x.clamp(lo, hi)))
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// Column index of the largest entry in each row.
    pub fn argmax_rows(&self) -> Vec<usize> {
        self.data
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(i, _)| i)
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrError::invalid(format!(
            "matrix dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn new_rejects_wrong_length() {
        assert!(matches!(
            Matrix::new(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatrError::InvalidArgument(_))
        ));
    }

    #[test]
    fn empty_shapes_are_rejected() {
        assert!(Matrix::zeros(0, 3).is_err());
        assert!(Matrix::zeros(3, 0).is_err());
        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let res = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(res, Err(MatrError::InvalidArgument(_))));
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = sample();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), t.get(j, i));
            }
        }
    }

    #[test]
    fn transpose_round_trips() {
        let mut rng = StdRng::seed_from_u64(7);
        for (r, c) in [(1, 1), (1, 5), (4, 1), (3, 7)] {
            let m = Matrix::random_normal(r, c, &mut rng).unwrap();
            assert_eq!(m.transpose().transpose(), m);
        }
    }

    #[test]
    fn bias_column_is_trailing_ones() {
        let m = sample().append_bias_column();
        assert_eq!(m.shape(), (2, 4));
        assert_eq!(m.row(0), &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn strip_undoes_append() {
        let m = sample();
        assert_eq!(m.append_bias_column().strip_bias_column().unwrap(), m);
        let single = Matrix::zeros(3, 1).unwrap();
        assert!(single.strip_bias_column().is_err());
    }

    #[test]
    fn clamp_limits_every_entry() {
        let m = sample().clamp(2.0, 5.0).unwrap();
        assert_eq!(m.as_slice(), &[2.0, 2.0, 3.0, 4.0, 5.0, 5.0]);
        assert!(sample().clamp(1.0, 0.0).is_err());
    }

    #[test]
    fn random_normal_is_reproducible_and_centered() {
        let a = Matrix::random_normal(50, 40, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Matrix::random_normal(50, 40, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let n = a.as_slice().len() as f64;
        let mean = a.as_slice().iter().sum::<f64>() / n;
        let var = a.as_slice().iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.1, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.15, "variance {}", var);
    }

    #[test]
    fn argmax_picks_largest_column() {
        let m = Matrix::from_rows(vec![vec![0.1, 0.9], vec![0.7, 0.3]]).unwrap();
        assert_eq!(m.argmax_rows(), vec![1, 0]);
    }
}
