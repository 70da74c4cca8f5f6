use crate::activation::sigmoid::sigmoid;
use crate::error::Result;
use crate::math::linalg::multiply;
use crate::math::matrix::Matrix;
use crate::network::network::Network;

/// Per-layer outputs of a forward pass.
///
/// Entry `i` is the activated output of weight layer `i`. Every entry but the
/// last carries a trailing bias column; the last is the prediction,
/// `samples × output_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct Activations {
    layers: Vec<Matrix>,
}

impl Activations {
    pub fn layers(&self) -> &[Matrix] {
        &self.layers
    }

    pub fn get(&self, layer: usize) -> Option<&Matrix> {
        self.layers.get(layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn prediction(&self) -> &Matrix {
        // from_parts guarantees at least one layer
        &self.layers[self.layers.len() - 1]
    }

    pub fn into_prediction(mut self) -> Matrix {
        self.layers.swap_remove(self.layers.len() - 1)
    }
}

/// Runs `network.before` through every weight layer.
pub fn forward(network: &Network) -> Result<Activations> {
    let depth = network.depth();
    let mut layers: Vec<Matrix> = Vec::with_capacity(depth);

    for (i, w) in network.weights().iter().enumerate() {
        let input = layers.last().unwrap_or(network.before());
        let a = sigmoid(&multiply(input, w)?);
        layers.push(if i + 1 < depth { a.append_bias_column() } else { a });
    }

    Ok(Activations { layers })
}

/// Prediction matrix only.
pub fn predict(network: &Network) -> Result<Matrix> {
    Ok(forward(network)?.into_prediction())
}
