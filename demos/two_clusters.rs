use std::sync::mpsc;
use std::thread;

use matr_nn::data::toy;
use matr_nn::train::{accuracy, train_network, TrainConfig};

fn main() -> matr_nn::Result<()> {
    tracing_subscriber::fmt::init();

    let (input, labels) = toy::two_clusters()?;

    let (tx, rx) = mpsc::channel();
    let mut config = TrainConfig::new(vec![4], 0.1, 1000).with_seed(42);
    config.progress_tx = Some(tx);

    let printer = thread::spawn(move || {
        for stats in rx {
            if stats.step % 100 == 0 || stats.converged {
                println!("step {:>4}: loss = {:.6}", stats.step, stats.loss);
            }
        }
    });

    let model = train_network(&input, &labels, &config)?;
    drop(config);
    printer.join().expect("printer thread panicked");

    let predicted = model.classify_training()?;
    println!("predicted {:?}, accuracy {:.0}%", predicted, accuracy(&predicted, &labels) * 100.0);
    Ok(())
}
