use thiserror::Error;

/// Errors raised by the matrix kernel and the training pipeline.
///
/// `DimensionMismatch` and `InvalidArgument` are the only kinds the core
/// produces; the remaining variants belong to the config and data-loading
/// surfaces.
#[derive(Debug, Error)]
pub enum MatrError {
    #[error("dimension mismatch in {op}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("row {row}: {message}")]
    Csv { row: usize, message: String },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MatrError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        MatrError::DimensionMismatch { op, left, right }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MatrError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, MatrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_shapes() {
        let err = MatrError::mismatch("multiply", (2, 3), (4, 5));
        assert_eq!(
            err.to_string(),
            "dimension mismatch in multiply: left is (2, 3), right is (4, 5)"
        );
    }
}
