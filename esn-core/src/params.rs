use common::{Activation, Error, Result};
use nalgebra::{DMatrix, DVector};

/// The fixed, untrained parameters of a leaky Echo State Network.
/// Immutable once constructed; shared read-only by state collection and
/// autonomous forecasting.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservoirParams {
    /// Recurrent state-to-state matrix, (state_dim, state_dim)
    a: DMatrix<f64>,
    /// Input-to-state matrix, (state_dim, input_dim)
    c: DMatrix<f64>,
    /// Per-node bias, (state_dim)
    bias: DVector<f64>,
    /// Convex mixing weight of the previous state in the update, in [0, 1].
    /// Tunes the decay time of internal activity of the network.
    leak_rate: f64,
    /// Nonlinearity of the state transition
    activation: Activation,
}

impl ReservoirParams {
    /// Assemble reservoir parameters from explicit weight matrices,
    /// checking that all shapes agree.
    pub fn new(
        a: DMatrix<f64>,
        c: DMatrix<f64>,
        bias: DVector<f64>,
        leak_rate: f64,
        activation: Activation,
    ) -> Result<Self> {
        if a.nrows() != a.ncols() {
            return Err(Error::DimensionMismatch {
                context: "recurrent matrix columns",
                expected: a.nrows(),
                actual: a.ncols(),
            });
        }
        if c.nrows() != a.nrows() {
            return Err(Error::DimensionMismatch {
                context: "input matrix rows",
                expected: a.nrows(),
                actual: c.nrows(),
            });
        }
        if bias.len() != a.nrows() {
            return Err(Error::DimensionMismatch {
                context: "bias length",
                expected: a.nrows(),
                actual: bias.len(),
            });
        }
        debug_assert!((0.0..=1.0).contains(&leak_rate));

        Ok(Self {
            a,
            c,
            bias,
            leak_rate,
            activation,
        })
    }

    /// Number of nodes (`neurons`) in the reservoir
    #[inline(always)]
    pub fn state_dim(&self) -> usize {
        self.a.nrows()
    }

    /// Dimensionality of the driving input
    #[inline(always)]
    pub fn input_dim(&self) -> usize {
        self.c.ncols()
    }

    /// The recurrent weight matrix
    #[inline(always)]
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// The input weight matrix
    #[inline(always)]
    pub fn c(&self) -> &DMatrix<f64> {
        &self.c
    }

    /// The per-node biases
    #[inline(always)]
    pub fn bias(&self) -> &DVector<f64> {
        &self.bias
    }

    /// The leak rate of the state update
    #[inline(always)]
    pub fn leak_rate(&self) -> f64 {
        self.leak_rate
    }

    /// The state transition nonlinearity
    #[inline(always)]
    pub fn activation(&self) -> Activation {
        self.activation
    }
}
