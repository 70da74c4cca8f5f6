use std::collections::BTreeSet;

use crate::error::{MatrError, Result};
use crate::math::matrix::Matrix;

/// Maps integer class labels to one-hot columns and back.
///
/// Columns follow the ascending order of the distinct label values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<i64>,
}

impl LabelEncoder {
    pub fn fit(labels: &[i64]) -> Result<LabelEncoder> {
        if labels.is_empty() {
            return Err(MatrError::invalid("cannot fit a label encoder on zero labels"));
        }
        let classes: BTreeSet<i64> = labels.iter().copied().collect();
        Ok(LabelEncoder { classes: classes.into_iter().collect() })
    }

    /// Number of distinct labels, i.e. the network's output width.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    pub fn index_of(&self, label: i64) -> Option<usize> {
        self.classes.binary_search(&label).ok()
    }

    /// One-hot label matrix, `labels.len() × class_count()`.
    pub fn encode(&self, labels: &[i64]) -> Result<Matrix> {
        let width = self.class_count();
        let mut data = vec![0.0; labels.len() * width];
        for (row, &label) in labels.iter().enumerate() {
            let col = self.index_of(label).ok_or_else(|| {
                MatrError::invalid(format!("label {} was not seen when fitting the encoder", label))
            })?;
            data[row * width + col] = 1.0;
        }
        Matrix::new(labels.len(), width, data)
    }

    pub fn decode(&self, index: usize) -> Option<i64> {
        self.classes.get(index).copied()
    }
}
