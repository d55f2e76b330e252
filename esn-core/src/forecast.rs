use common::{Error, Result};
use nalgebra::{DMatrix, DVector};

use crate::ReservoirParams;

/// A self-driven forecast: one state row and one output row per step
#[derive(Debug, Clone)]
pub struct ForecastTrajectory {
    /// Reservoir states, (horizon, state_dim)
    pub states: DMatrix<f64>,
    /// Readout outputs, (horizon, output_dim)
    pub outputs: DMatrix<f64>,
}

/// Fold the trained readout into the recurrence: `R = A + C * W'`.
///
/// Valid only when the network feeds its own output back as the next
/// input, which requires the output dimensionality to match the input
/// dimensionality; otherwise [`Error::IncompatibleFold`] is returned.
pub fn fold(params: &ReservoirParams, weights: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if weights.nrows() != params.state_dim() {
        return Err(Error::DimensionMismatch {
            context: "readout rows",
            expected: params.state_dim(),
            actual: weights.nrows(),
        });
    }
    if weights.ncols() != params.input_dim() {
        return Err(Error::IncompatibleFold {
            input_dim: params.input_dim(),
            output_dim: weights.ncols(),
        });
    }

    Ok(params.a() + params.c() * weights.transpose())
}

/// Iterate the folded map from `seed_state` for `horizon` steps with no
/// external input, producing a multi-step-ahead forecast.
///
/// The first entry reads out the seed state as-is, so
/// `outputs[0] == W' * seed_state` exactly; from then on
/// `state[t] = leak * state[t-1] + (1 - leak) * act(R * state[t-1] + bias)`.
///
/// The trajectory is a deterministic dynamical system: small differences
/// in seed state or weights may amplify over the horizon. Arbitrarily long
/// horizons are permitted; if the iteration diverges to non-finite values
/// the call fails with [`Error::NumericalOverflow`] carrying the first
/// offending step rather than silently returning NaN or infinity.
pub fn forecast(
    params: &ReservoirParams,
    weights: &DMatrix<f64>,
    seed_state: &DVector<f64>,
    horizon: usize,
) -> Result<ForecastTrajectory> {
    // a forecast over nothing is treated as a configuration error
    if horizon == 0 {
        return Err(Error::DimensionMismatch {
            context: "horizon",
            expected: 1,
            actual: 0,
        });
    }
    if seed_state.len() != params.state_dim() {
        return Err(Error::DimensionMismatch {
            context: "seed state",
            expected: params.state_dim(),
            actual: seed_state.len(),
        });
    }

    let folded = fold(params, weights)?;
    trace!("folded recurrence dims: ({}, {})", folded.nrows(), folded.ncols());

    let mut states = DMatrix::zeros(horizon, params.state_dim());
    let mut outputs = DMatrix::zeros(horizon, weights.ncols());

    let mut state = seed_state.clone();
    for t in 0..horizon {
        if t > 0 {
            let mut state_delta = &folded * &state + params.bias();
            params.activation().activate(state_delta.as_mut_slice());
            state = params.leak_rate() * &state + (1.0 - params.leak_rate()) * state_delta;
        }
        let output = weights.transpose() * &state;

        if state.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(Error::NumericalOverflow {
                step: t,
            });
        }

        states.row_mut(t).copy_from(&state.transpose());
        outputs.row_mut(t).copy_from(&output.transpose());
    }

    Ok(ForecastTrajectory {
        states,
        outputs,
    })
}
