use tracing::warn;

use crate::activation::sigmoid::sigmoid_slope;
use crate::error::{MatrError, Result};
use crate::loss::frobenius::FrobeniusLoss;
use crate::math::linalg::{elementwise_multiply, multiply, transpose};
use crate::math::matrix::Matrix;
use crate::network::forward::{forward, Activations};
use crate::network::network::Network;
use crate::optim::sgd::Sgd;

/// One gradient-descent step: forward pass, back-propagation, update.
///
/// Returns the updated network and the Frobenius loss of the output residual
/// measured *before* the update.
pub fn backward(network: &Network, labels: &Matrix, learning_rate: f64) -> Result<(Network, f64)> {
    let activations = forward(network)?;
    backward_from(network, &activations, labels, learning_rate)
}

/// Back-propagation over precomputed `activations` of `network`.
///
/// All gradients are taken against the incoming weights; the updates are
/// applied together afterwards. Neither `network` nor `activations` is
/// modified.
pub fn backward_from(
    network: &Network,
    activations: &Activations,
    labels: &Matrix,
    learning_rate: f64,
) -> Result<(Network, f64)> {
    let depth = network.depth();
    if activations.len() != depth {
        return Err(MatrError::invalid(format!(
            "{} activations for a network of depth {}",
            activations.len(),
            depth
        )));
    }

    let weights = network.weights();
    let acts = activations.layers();

    let output_delta = FrobeniusLoss::residual(activations.prediction(), labels)?;
    let loss = FrobeniusLoss::norm(&output_delta);

    // Built output-first, reversed below so deltas[i] belongs to weights[i].
    let mut deltas = Vec::with_capacity(depth);
    deltas.push(output_delta);
    for i in (0..depth - 1).rev() {
        let next = &deltas[deltas.len() - 1];
        let d = error_signal(&weights[i + 1], next, &acts[i])?;
        deltas.push(d);
    }
    deltas.reverse();

    let sgd = Sgd::new(learning_rate);
    let mut updated = Vec::with_capacity(depth);
    for (i, (w, d)) in weights.iter().zip(&deltas).enumerate() {
        let input = if i == 0 { network.before() } else { &acts[i - 1] };
        let grad = multiply(&transpose(input), d)?;
        updated.push(sgd.step(w, &grad)?);
    }

    if !loss.is_finite() {
        warn!(loss, "loss is not finite; weights may have diverged");
    }

    Ok((network.with_weights(updated), loss))
}

/// Error signal of a hidden layer from the layer after it:
/// `(W[i+1] · d[i+1]ᵀ)ᵀ ⊙ a[i] ⊙ (1 - a[i])`.
///
/// `activation` carries the bias column, whose slope is zero; that column is
/// dropped so the result lines up with the neurons of `W[i]`.
pub fn error_signal(next_weights: &Matrix, next_delta: &Matrix, activation: &Matrix) -> Result<Matrix> {
    let weighted = transpose(&multiply(next_weights, &transpose(next_delta))?);
    elementwise_multiply(&weighted, &sigmoid_slope(activation)?)?.strip_bias_column()
}
