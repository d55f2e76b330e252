use thiserror::Error;

/// Convenience result type used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// The errors that can occur in the reservoir pipeline.
/// Each variant carries enough context to diagnose the failure without
/// re-running the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A shape of an input does not match the reservoir configuration
    #[error("dimension mismatch for {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which quantity had the wrong shape
        context: &'static str,
        /// The dimension the configuration requires
        expected: usize,
        /// The dimension that was actually supplied
        actual: usize,
    },

    /// A randomly drawn matrix has zero operator norm and cannot be
    /// rescaled. Re-seed and retry.
    #[error("degenerate draw: matrix {matrix} has zero operator norm")]
    DegenerateDraw {
        /// Which matrix came out degenerate
        matrix: &'static str,
    },

    /// An unregularized readout fit was attempted on a rank-deficient
    /// design. Recoverable by raising the penalty above zero.
    #[error("singular system: unregularized fit on rank-deficient {rows}x{cols} design")]
    SingularSystem {
        /// Rows of the design matrix
        rows: usize,
        /// Columns of the design matrix
        cols: usize,
    },

    /// Autonomous forecasting requires the output to feed back as the
    /// next input, which is only dimensionally valid when the output and
    /// input dimensions agree.
    #[error("incompatible fold: output dim {output_dim} cannot feed back as input dim {input_dim}")]
    IncompatibleFold {
        /// Column count of the input weight matrix
        input_dim: usize,
        /// Column count of the readout weights
        output_dim: usize,
    },

    /// The forecast trajectory diverged to non-finite values
    #[error("non-finite forecast value at step {step}")]
    NumericalOverflow {
        /// The first step at which a non-finite value appeared
        step: usize,
    },
}
