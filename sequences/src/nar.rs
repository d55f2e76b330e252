use nanorand::{Rng, WyRand};

/// Simulate the noisy nonlinear AR(1) process
///
/// `X[t] = 2 X[t-1] / (1 + 0.8 X[t-1]^2) + e[t]` with `e[t]` i.i.d.
/// uniform on `[-1, 1]`.
///
/// The first `burn_in` samples are discarded so the returned series does
/// not depend too strongly on the arbitrary start value `x0`.
pub fn nonlinear_ar(seed: Option<u64>, len: usize, burn_in: usize, x0: f64) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => WyRand::new_seed(seed),
        None => WyRand::new(),
    };

    let mut x = x0;
    let mut series = Vec::with_capacity(len);
    for t in 0..len + burn_in {
        let eps = rng.generate::<f64>() * 2.0 - 1.0;
        x = 2.0 * x / (1.0 + 0.8 * x * x) + eps;
        if t >= burn_in {
            series.push(x);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_runs_are_identical() {
        let a = nonlinear_ar(Some(42), 100, 50, 0.0);
        let b = nonlinear_ar(Some(42), 100, 50, 0.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn burn_in_drops_the_leading_samples() {
        let full = nonlinear_ar(Some(7), 150, 0, 0.3);
        let tail = nonlinear_ar(Some(7), 100, 50, 0.3);
        assert_eq!(&full[50..], tail.as_slice());
    }

    #[test]
    fn process_remains_bounded_in_practice() {
        // the shrinking map keeps |X| below ~2.2 plus unit noise
        let series = nonlinear_ar(Some(3), 10_000, 100, 0.0);
        assert!(series.iter().all(|v| v.abs() < 4.0));
    }
}
