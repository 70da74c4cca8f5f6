use crate::error::{MatrError, Result};
use crate::math::matrix::Matrix;

/// A layered feed-forward network.
///
/// `before` is the bias-augmented input data; `weights[i]` maps the
/// (augmented) output of layer `i` to layer `i + 1`, so
/// `weights[i].rows() == width(i) + 1`. The last weight matrix produces the
/// prediction.
///
/// Training never mutates a `Network`; each step yields a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    before: Matrix,
    weights: Vec<Matrix>,
}

impl Network {
    /// Assembles a network after checking that consecutive shapes chain.
    pub fn from_parts(before: Matrix, weights: Vec<Matrix>) -> Result<Network> {
        if weights.is_empty() {
            return Err(MatrError::invalid("a network needs at least one weight matrix"));
        }

        let mut expected_rows = before.cols();
        for w in &weights {
            // left is the shape of the augmented activation feeding this layer
            if w.rows() != expected_rows {
                return Err(MatrError::mismatch(
                    "network layer",
                    (before.rows(), expected_rows),
                    w.shape(),
                ));
            }
            expected_rows = w.cols() + 1;
        }

        Ok(Network { before, weights })
    }

    pub fn before(&self) -> &Matrix {
        &self.before
    }

    pub fn weights(&self) -> &[Matrix] {
        &self.weights
    }

    /// Number of weight layers.
    pub fn depth(&self) -> usize {
        self.weights.len()
    }

    /// Number of samples carried in `before`.
    pub fn samples(&self) -> usize {
        self.before.rows()
    }

    pub fn output_width(&self) -> usize {
        self.weights.last().map_or(0, |w| w.cols())
    }

    /// Same input, new weights. Used by the backward pass.
    pub(crate) fn with_weights(&self, weights: Vec<Matrix>) -> Network {
        Network { before: self.before.clone(), weights }
    }

    /// Same weights, new bias-augmented input.
    pub fn with_input(&self, input: &Matrix) -> Result<Network> {
        let before = input.append_bias_column();
        if before.cols() != self.before.cols() {
            return Err(MatrError::mismatch("with_input", before.shape(), self.before.shape()));
        }
        Ok(Network { before, weights: self.weights.clone() })
    }
}
