#[macro_use]
extern crate log;

use std::time::Instant;

use common::Activation;
use esn_core::{collect, forecast, ReservoirInit};
use nalgebra::DMatrix;
use ridge_reg::RidgeRegression;
use sequences::Lorenz;

const TRAIN_LEN: usize = 4000;
const HORIZON: usize = 400;
const SEED: u64 = 0;

// keep the driving signal inside the tanh-friendly range
const INPUT_SCALE: f64 = 0.05;

fn main() {
    pretty_env_logger::init();

    let (xs, _, _) = Lorenz::default().generate([1.0, 1.0, 1.0], TRAIN_LEN + HORIZON);
    let values: Vec<f64> = xs.iter().map(|x| x * INPUT_SCALE).collect();
    info!("got {} datapoints", values.len());

    let init = ReservoirInit {
        state_dim: 300,
        input_dim: 1,
        a_mean: 0.0,
        a_scale: 1.0,
        c_mean: 0.0,
        c_scale: 1.0,
        bias_low: -0.2,
        bias_high: 0.2,
        spectral_radius: 0.9,
        input_scale: 0.5,
        leak_rate: 0.3,
        activation: Activation::Tanh,
    };
    let params = init.build(SEED).expect("reservoir construction failed");

    let inputs = DMatrix::from_fn(TRAIN_LEN - 1, 1, |i, _| values[i]);
    let targets = DMatrix::from_fn(TRAIN_LEN - 1, 1, |i, _| values[i + 1]);

    let t0 = Instant::now();
    let states = collect(&params, &inputs).expect("state collection failed");
    let fit = RidgeRegression {
        penalty: 1e-6,
    }
    .fit(&states, &targets)
    .expect("readout fit failed");
    info!("training done in: {}ms", t0.elapsed().as_millis());

    let mse = fit.residuals.iter().map(|r| r * r).sum::<f64>() / fit.residuals.len() as f64;
    info!("in-sample mse: {:.3e}", mse);

    let seed_state = states.row(states.nrows() - 1).transpose();
    let traj =
        forecast(&params, &fit.weights, &seed_state, HORIZON).expect("autonomous forecast failed");

    let mut rmse = 0.0;
    for t in 0..HORIZON {
        let truth = values[TRAIN_LEN - 1 + t];
        let pred = traj.outputs[(t, 0)];
        rmse += (truth - pred).powi(2);
    }
    let rmse = (rmse / HORIZON as f64).sqrt();
    info!(
        "autonomous forecast rmse over {} steps: {:.4} (input scale {})",
        HORIZON, rmse, INPUT_SCALE
    );
}
