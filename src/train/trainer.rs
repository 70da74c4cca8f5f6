use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::data::labels::LabelEncoder;
use crate::error::{MatrError, Result};
use crate::math::matrix::Matrix;
use crate::network::forward::predict;
use crate::network::init::initialize;
use crate::network::network::Network;
use crate::train::loop_fn::{train_loop, TrainReport};
use crate::train::train_config::TrainConfig;

/// A trained network together with the label mapping it was trained on.
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub encoder: LabelEncoder,
    pub report: TrainReport,
    min_max: Option<(f64, f64)>,
}

impl FittedModel {
    pub fn network(&self) -> &Network {
        &self.report.network
    }

    /// Predicted labels for the training data.
    pub fn classify_training(&self) -> Result<Vec<i64>> {
        classify(self.network(), &self.encoder)
    }

    /// Predicted labels for new rows with the same feature count.
    pub fn classify(&self, input: &Matrix) -> Result<Vec<i64>> {
        let input = match self.min_max {
            Some((lo, hi)) => input.clamp(lo, hi)?,
            None => input.clone(),
        };
        classify(&self.network().with_input(&input)?, &self.encoder)
    }
}

/// End-to-end training: preprocess, encode labels, initialize, run the loop.
pub fn train_network(input: &Matrix, labels: &[i64], config: &TrainConfig) -> Result<FittedModel> {
    config.validate()?;

    let input = match config.min_max {
        Some((lo, hi)) => input.clamp(lo, hi)?,
        None => input.clone(),
    };

    let encoder = LabelEncoder::fit(labels)?;
    let targets = encoder.encode(labels)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let network = initialize(&input, labels, &config.hidden_widths, &mut rng)?;

    info!(classes = encoder.class_count(), seed = ?config.seed, "network initialized");

    let report = train_loop(network, &targets, config)?;
    Ok(FittedModel { encoder, report, min_max: config.min_max })
}

/// Row-wise argmax of the prediction, mapped back to label values.
pub fn classify(network: &Network, encoder: &LabelEncoder) -> Result<Vec<i64>> {
    let prediction = predict(network)?;
    if prediction.cols() != encoder.class_count() {
        return Err(MatrError::mismatch(
            "classify",
            prediction.shape(),
            (prediction.rows(), encoder.class_count()),
        ));
    }
    prediction
        .argmax_rows()
        .into_iter()
        .map(|i| {
            encoder
                .decode(i)
                .ok_or_else(|| MatrError::invalid(format!("no label for output column {}", i)))
        })
        .collect()
}

/// Fraction of matching entries; `0.0` for empty input.
pub fn accuracy(predicted: &[i64], expected: &[i64]) -> f64 {
    if predicted.is_empty() {
        return 0.0;
    }
    let correct = predicted.iter().zip(expected).filter(|(a, b)| a == b).count();
    correct as f64 / predicted.len() as f64
}
