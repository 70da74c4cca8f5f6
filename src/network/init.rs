use rand::Rng;
use tracing::debug;

use crate::data::labels::LabelEncoder;
use crate::error::{MatrError, Result};
use crate::math::linalg::random_matrix;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Builds a freshly initialized network for `input` and `labels`.
///
/// The output width is the number of distinct labels. Each entry of
/// `hidden_widths` adds one hidden layer; an empty slice connects the input
/// straight to the output layer. Every weight is an independent N(0, 1) draw
/// from `rng`.
pub fn initialize<R: Rng + ?Sized>(
    input: &Matrix,
    labels: &[i64],
    hidden_widths: &[usize],
    rng: &mut R,
) -> Result<Network> {
    if labels.len() != input.rows() {
        return Err(MatrError::invalid(format!(
            "{} labels for {} input rows",
            labels.len(),
            input.rows()
        )));
    }
    let classes = LabelEncoder::fit(labels)?.class_count();
    initialize_with_width(input, classes, hidden_widths, rng)
}

/// Same as [`initialize`] with an explicit output width.
pub fn initialize_with_width<R: Rng + ?Sized>(
    input: &Matrix,
    output_width: usize,
    hidden_widths: &[usize],
    rng: &mut R,
) -> Result<Network> {
    if let Some(pos) = hidden_widths.iter().position(|&h| h == 0) {
        return Err(MatrError::invalid(format!("hidden layer {} has zero neurons", pos)));
    }
    if output_width == 0 {
        return Err(MatrError::invalid("output width must be positive"));
    }

    let before = input.append_bias_column();
    let mut fan_in = before.cols();
    let mut weights = Vec::with_capacity(hidden_widths.len() + 1);

    for &width in hidden_widths.iter().chain(std::iter::once(&output_width)) {
        weights.push(random_matrix(fan_in, width, rng)?);
        fan_in = width + 1;
    }

    debug!(
        samples = before.rows(),
        inputs = input.cols(),
        hidden = ?hidden_widths,
        outputs = output_width,
        "initialized network"
    );

    Network::from_parts(before, weights)
}
