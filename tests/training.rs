use matr_nn::data::toy;
use matr_nn::train::{accuracy, classify};
use matr_nn::{backward, has_converged, initialize, predict, train_loop, LabelEncoder, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn losses(seed: u64, hidden: &[usize], steps: usize, learning_rate: f64) -> Vec<f64> {
    let (input, labels) = toy::two_clusters().unwrap();
    let targets = LabelEncoder::fit(&labels).unwrap().encode(&labels).unwrap();
    let mut network = initialize(&input, &labels, hidden, &mut StdRng::seed_from_u64(seed)).unwrap();

    let mut history = Vec::with_capacity(steps);
    for _ in 0..steps {
        let (next, loss) = backward(&network, &targets, learning_rate).unwrap();
        history.push(loss);
        network = next;
    }
    history
}

#[test]
fn single_hidden_layer_loss_trends_down() {
    for seed in [0, 1, 2, 3] {
        let history = losses(seed, &[4], 1000, 0.1);
        assert_eq!(history.len(), 1000);
        assert!(history[999] < history[0], "seed {}: {} !< {}", seed, history[999], history[0]);
        for t in 0..history.len() - 50 {
            assert!(
                history[t + 50] < history[t],
                "seed {}: loss rose over steps {}..{}",
                seed,
                t,
                t + 50
            );
        }
    }
}

#[test]
fn deeper_network_trains_too() {
    let history = losses(5, &[4, 3], 1500, 0.5);
    assert!(history[history.len() - 1] < history[0]);
}

#[test]
fn train_loop_matches_manual_steps() {
    let (input, labels) = toy::two_clusters().unwrap();
    let encoder = LabelEncoder::fit(&labels).unwrap();
    let targets = encoder.encode(&labels).unwrap();
    let network = initialize(&input, &labels, &[4], &mut StdRng::seed_from_u64(3)).unwrap();

    let mut config = TrainConfig::new(vec![4], 0.1, 40);
    config.min_epoch = 1000;
    let report = train_loop(network, &targets, &config).unwrap();

    assert_eq!(report.state.history(), losses(3, &[4], 40, 0.1).as_slice());
}

#[test]
fn trained_network_separates_clusters() {
    let (input, labels) = toy::two_clusters().unwrap();
    let encoder = LabelEncoder::fit(&labels).unwrap();
    let targets = encoder.encode(&labels).unwrap();
    let network = initialize(&input, &labels, &[4], &mut StdRng::seed_from_u64(12)).unwrap();

    let mut config = TrainConfig::new(vec![4], 0.5, 2000);
    config.min_epoch = 10_000;
    let report = train_loop(network, &targets, &config).unwrap();

    let prediction = predict(&report.network).unwrap();
    assert_eq!(prediction.shape(), (4, 2));
    let predicted = classify(&report.network, &encoder).unwrap();
    assert_eq!(accuracy(&predicted, &labels), 1.0);
}

#[test]
fn convergence_scenarios() {
    assert!(has_converged(&[1.0; 10], 1.0, 0.001, 10));

    let rising: Vec<f64> = (1..=10).map(|x| x as f64).collect();
    assert!(!has_converged(&rising, 100.0, 0.001, 10));
    assert!(!has_converged(&rising[..9], 5.0, 1.0, 10));
}
