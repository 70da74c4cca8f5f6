/// Plateau check on a loss history.
///
/// Compares `current` against the mean of the last `min_epoch` entries of
/// `history` (which must not already contain `current`) and reports whether
/// the relative deviation `|current / mean - 1|` is below `tolerance`.
///
/// Always `false` while `history` holds fewer than `min_epoch` entries, or
/// when `min_epoch` is zero. This detects a flat loss curve, not a minimum:
/// a loss oscillating around its mean triggers it just as well.
pub fn has_converged(history: &[f64], current: f64, tolerance: f64, min_epoch: usize) -> bool {
    if min_epoch == 0 || history.len() < min_epoch {
        return false;
    }

    let window = &history[history.len() - min_epoch..];
    let mean = window.iter().sum::<f64>() / min_epoch as f64;
    let diff = (current / mean - 1.0).abs();

    diff < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_history_converges() {
        assert!(has_converged(&[1.0; 10], 1.0, 0.001, 10));
    }

    #[test]
    fn outlier_does_not_converge() {
        let history: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert!(!has_converged(&history, 100.0, 0.001, 10));
    }

    #[test]
    fn short_history_never_converges() {
        for current in [0.0, 1.0, f64::MAX] {
            for tol in [0.0, 0.5, f64::INFINITY] {
                assert!(!has_converged(&[1.0; 9], current, tol, 10));
                assert!(!has_converged(&[], current, tol, 1));
            }
        }
    }

    #[test]
    fn only_trailing_window_counts() {
        // the first entries are far off but outside the window
        let mut history = vec![100.0, 50.0, 25.0];
        history.extend([2.0; 5]);
        assert!(has_converged(&history, 2.0, 1e-9, 5));
        assert!(!has_converged(&history, 2.0, 1e-9, 6));
    }

    #[test]
    fn degenerate_inputs_are_false() {
        assert!(!has_converged(&[1.0; 5], 1.0, 0.1, 0));
        assert!(!has_converged(&[0.0; 5], 0.0, 0.1, 5));
        assert!(!has_converged(&[1.0; 5], f64::NAN, 0.1, 5));
    }
}
