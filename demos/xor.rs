use matr_nn::data::toy;
use matr_nn::train::{classify, train_loop, TrainConfig};
use matr_nn::{initialize, LabelEncoder};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> matr_nn::Result<()> {
    let (input, labels) = toy::xor()?;
    let encoder = LabelEncoder::fit(&labels)?;
    let targets = encoder.encode(&labels)?;

    let mut config = TrainConfig::new(vec![4, 4], 0.5, 10000).with_seed(7);
    config.min_epoch = 200;
    config.tolerance = 1e-5;

    let mut rng = StdRng::seed_from_u64(7);
    let network = initialize(&input, &labels, &config.hidden_widths, &mut rng)?;
    let report = train_loop(network, &targets, &config)?;

    for (step, loss) in report.state.history().iter().enumerate().step_by(1000) {
        println!("Step {step}: loss = {loss:.6}");
    }

    let predicted = classify(&report.network, &encoder)?;
    for (i, label) in predicted.iter().enumerate() {
        println!("Input: {:?} -> {} (expected {})", input.row(i), label, labels[i]);
    }
    Ok(())
}
