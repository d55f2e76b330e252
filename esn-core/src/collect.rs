use std::{cmp::max, sync::Arc};

use common::{Error, Result};
use crossbeam::channel::unbounded;
use nalgebra::{DMatrix, DVector};
use threadpool::ThreadPool;

use crate::ReservoirParams;

/// Advance the reservoir by a single step:
/// `leak * prev + (1 - leak) * act(A * prev + C * input + bias)`
pub fn step(
    params: &ReservoirParams,
    prev: &DVector<f64>,
    input: &DVector<f64>,
) -> Result<DVector<f64>> {
    if prev.len() != params.state_dim() {
        return Err(Error::DimensionMismatch {
            context: "previous state",
            expected: params.state_dim(),
            actual: prev.len(),
        });
    }
    if input.len() != params.input_dim() {
        return Err(Error::DimensionMismatch {
            context: "input",
            expected: params.input_dim(),
            actual: input.len(),
        });
    }

    let mut state_delta = params.a() * prev + params.c() * input + params.bias();
    params.activation().activate(state_delta.as_mut_slice());

    Ok(params.leak_rate() * prev + (1.0 - params.leak_rate()) * state_delta)
}

/// Unroll the state recursion over a whole input sequence, one input row
/// per time step, and return the trajectory with one state row per input
/// row.
///
/// The recursion starts from the zero state, so the state at `t = 0` is
/// `(1 - leak) * act(C * input[0] + bias)`: the first update sees the
/// input at index 0, never a lookahead.
///
/// This scan is inherently serial, each state strictly depends on its
/// predecessor. Independent sequences can go through [`collect_many`]
/// instead.
pub fn collect(params: &ReservoirParams, inputs: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if inputs.ncols() != params.input_dim() {
        return Err(Error::DimensionMismatch {
            context: "input columns",
            expected: params.input_dim(),
            actual: inputs.ncols(),
        });
    }

    let mut states = DMatrix::zeros(inputs.nrows(), params.state_dim());
    let mut state = DVector::zeros(params.state_dim());
    for t in 0..inputs.nrows() {
        state = step(params, &state, &inputs.row(t).transpose())?;
        states.row_mut(t).copy_from(&state.transpose());
    }

    Ok(states)
}

/// Collect state trajectories for independent input sequences on a worker
/// pool. Results come back in input order; the first error encountered is
/// returned.
pub fn collect_many(
    params: &Arc<ReservoirParams>,
    sequences: Vec<DMatrix<f64>>,
) -> Result<Vec<DMatrix<f64>>> {
    let pool = ThreadPool::new(max(num_cpus::get().saturating_sub(2), 1));
    let n_seqs = sequences.len();

    let (ch_s, ch_r) = unbounded();
    for (i, seq) in sequences.into_iter().enumerate() {
        let ch_s = ch_s.clone();
        let params = Arc::clone(params);
        pool.execute(move || {
            // the receiver stays alive until the channel drains, so the
            // send cannot fail
            ch_s.send((i, collect(&params, &seq))).unwrap();
        });
    }
    drop(ch_s);

    let mut results: Vec<Option<Result<DMatrix<f64>>>> = (0..n_seqs).map(|_| None).collect();
    while let Ok((i, res)) = ch_r.recv() {
        results[i] = Some(res);
    }

    results.into_iter().map(|r| r.unwrap()).collect()
}
