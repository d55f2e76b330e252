use common::{Activation, Error, Result};
use nalgebra::{DMatrix, DVector};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

use crate::ReservoirParams;

/// Constructs the weights of a classic Echo State Network.
///
/// The recurrent and input matrices are drawn entrywise from normal
/// distributions and then rescaled so that their operator 2-norms hit
/// `spectral_radius` and `input_scale` respectively; biases are drawn
/// uniformly from `[bias_low, bias_high]`.
///
/// All randomness comes from a generator seeded per call, so identical
/// seed and configuration produce bit-identical parameters and concurrent
/// constructions with different seeds are independent.
#[derive(Debug, Clone)]
pub struct ReservoirInit {
    /// The number of nodes in the reservoir
    pub state_dim: usize,
    /// Dimensionality of the driving input
    pub input_dim: usize,
    /// Mean of the normal distribution behind the recurrent weights
    pub a_mean: f64,
    /// Standard deviation of the recurrent weight draws
    pub a_scale: f64,
    /// Mean of the normal distribution behind the input weights
    pub c_mean: f64,
    /// Standard deviation of the input weight draws
    pub c_scale: f64,
    /// Lower end of the uniform bias range
    pub bias_low: f64,
    /// Upper end of the uniform bias range
    pub bias_high: f64,
    /// Target operator 2-norm of the recurrent matrix.
    /// Determines how fast the influence of an input dies out in the
    /// reservoir with time and how stable the activations are; larger
    /// values give the network a longer memory of its input.
    pub spectral_radius: f64,
    /// Target operator 2-norm of the input matrix
    pub input_scale: f64,
    /// Convex mixing weight of the previous state, in [0, 1]
    pub leak_rate: f64,
    /// Nonlinearity of the state transition
    pub activation: Activation,
}

impl ReservoirInit {
    /// Draw a fresh set of reservoir parameters from the given seed.
    ///
    /// Fails with [`Error::DegenerateDraw`] when a drawn matrix has zero
    /// operator norm and cannot be rescaled (e.g. a zero-width
    /// distribution centered on zero); the caller should re-seed or fix
    /// the distribution parameters.
    pub fn build(&self, seed: u64) -> Result<ReservoirParams> {
        if self.state_dim == 0 {
            return Err(Error::DimensionMismatch {
                context: "state_dim",
                expected: 1,
                actual: 0,
            });
        }
        if self.input_dim == 0 {
            return Err(Error::DimensionMismatch {
                context: "input_dim",
                expected: 1,
                actual: 0,
            });
        }
        if self.bias_low > self.bias_high {
            return Err(Error::DegenerateDraw {
                matrix: "bias",
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let normal_a = Normal::new(self.a_mean, self.a_scale).map_err(|_| Error::DegenerateDraw {
            matrix: "A",
        })?;
        let normal_c = Normal::new(self.c_mean, self.c_scale).map_err(|_| Error::DegenerateDraw {
            matrix: "C",
        })?;
        let uniform_bias = Uniform::new_inclusive(self.bias_low, self.bias_high);

        // draw order is fixed (A, then C, then bias) so a seed always maps
        // to the same parameters
        let a = DMatrix::from_fn(self.state_dim, self.state_dim, |_, _| {
            normal_a.sample(&mut rng)
        });
        let a = rescaled(a, self.spectral_radius, "A")?;

        let c = DMatrix::from_fn(self.state_dim, self.input_dim, |_, _| {
            normal_c.sample(&mut rng)
        });
        let c = rescaled(c, self.input_scale, "C")?;

        let bias = DVector::from_fn(self.state_dim, |_, _| uniform_bias.sample(&mut rng));

        debug!(
            "constructed reservoir: state_dim {}, input_dim {}, spectral radius target {}",
            self.state_dim, self.input_dim, self.spectral_radius
        );

        ReservoirParams::new(a, c, bias, self.leak_rate, self.activation)
    }
}

/// Divide by the operator 2-norm (largest singular value) and multiply by
/// the target norm
fn rescaled(mut m: DMatrix<f64>, target: f64, name: &'static str) -> Result<DMatrix<f64>> {
    let norm = m.singular_values().max();
    if norm <= 0.0 || !norm.is_finite() {
        return Err(Error::DegenerateDraw {
            matrix: name,
        });
    }
    m *= target / norm;
    Ok(m)
}
