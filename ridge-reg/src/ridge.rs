use common::{Error, Result};
use nalgebra::DMatrix;

use super::LinReg;

/// Tikhonov regularization aka ridge regression.
/// Fits the readout weights in closed form:
/// `W = (S'S + T * penalty * I)^-1 S'Y`
/// The penalty is scaled by the number of rows `T` so that the effective
/// shrinkage per sample stays comparable across different sample sizes.
#[derive(Debug, Clone)]
pub struct RidgeRegression {
    /// Ridge parameter, must be >= 0
    pub penalty: f64,
}

/// The result of a readout fit
#[derive(Debug, Clone)]
pub struct ReadoutFit {
    /// Readout weights of shape (state_dim, output_dim)
    pub weights: DMatrix<f64>,
    /// In-sample predictions, `states * weights`
    pub fitted: DMatrix<f64>,
    /// `targets - fitted`
    pub residuals: DMatrix<f64>,
}

impl RidgeRegression {
    /// Solve the regularized least squares problem for the given states
    /// and targets, one time step per row.
    ///
    /// With `penalty == 0` the normal equations are only solvable when the
    /// states have full column rank, otherwise [`Error::SingularSystem`]
    /// is returned. For any positive penalty the system is positive
    /// definite and the solution unique.
    pub fn fit(&self, states: &DMatrix<f64>, targets: &DMatrix<f64>) -> Result<ReadoutFit> {
        if states.nrows() != targets.nrows() {
            return Err(Error::DimensionMismatch {
                context: "target rows",
                expected: states.nrows(),
                actual: targets.nrows(),
            });
        }

        let n_samples = states.nrows();
        let reg_m: DMatrix<f64> =
            DMatrix::identity(states.ncols(), states.ncols()) * (n_samples as f64 * self.penalty);

        let p0 = states.transpose() * states;
        let p1 = (p0 + reg_m).try_inverse().ok_or(Error::SingularSystem {
            rows: states.nrows(),
            cols: states.ncols(),
        })?;
        let p2 = states.transpose() * targets;

        let weights = p1 * p2;
        debug!("fitted readout dims: ({}, {})", weights.nrows(), weights.ncols());

        let fitted = states * &weights;
        let residuals = targets - &fitted;

        Ok(ReadoutFit {
            weights,
            fitted,
            residuals,
        })
    }
}

impl LinReg for RidgeRegression {
    fn fit_readout(&self, states: &DMatrix<f64>, targets: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        Ok(self.fit(states, targets)?.weights)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Const, DMatrix, Dim, Dyn, Matrix, VecStorage};
    use round::round;

    use super::*;

    #[test]
    fn ridge_exact_recovery() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // Note the first column being just ones
        let states: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(3),
            vec![1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 2.0],
        );
        let targets: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(1),
            vec![1.0, 2.0, 3.0, 4.0],
        );
        info!("states: {}, targets: {}", states, targets);

        let regressor = RidgeRegression {
            penalty: 0.0,
        };
        let fit = regressor.fit(&states, &targets).unwrap();
        let mut weights = fit.weights;
        info!("weights: {}", weights);

        let goal_matrix: Matrix<f64, Dyn, Const<1>, VecStorage<f64, Dyn, Const<1>>> =
            Matrix::from_vec_generic(Dim::from_usize(3), Dim::from_usize(1), vec![1.0, 1.0, 0.0]);

        // round readout
        weights.iter_mut().for_each(|v| *v = round(*v, 1));

        assert_eq!(weights, goal_matrix);
    }

    #[test]
    fn ridge_fitted_and_residuals() {
        if let Err(_) = pretty_env_logger::try_init() {}

        // Exactly representable system with zero noise
        let states: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(2),
            vec![1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0],
        );
        let targets: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(1),
            vec![1.0, 3.0, 5.0, 7.0],
        );

        let regressor = RidgeRegression {
            penalty: 0.0,
        };
        let fit = regressor.fit(&states, &targets).unwrap();

        for (f, t) in fit.fitted.iter().zip(targets.iter()) {
            assert!((f - t).abs() < 1e-9);
        }
        for r in fit.residuals.iter() {
            assert!(r.abs() < 1e-9);
        }
    }

    #[test]
    fn ridge_singular_without_penalty() {
        // Two identical columns make the Gram matrix exactly rank-deficient
        let states: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(3),
            Dim::from_usize(2),
            vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0],
        );
        let targets: DMatrix<f64> =
            Matrix::from_vec_generic(Dim::from_usize(3), Dim::from_usize(1), vec![1.0, 2.0, 3.0]);

        let regressor = RidgeRegression {
            penalty: 0.0,
        };
        let err = regressor.fit(&states, &targets).unwrap_err();
        assert_eq!(
            err,
            Error::SingularSystem {
                rows: 3,
                cols: 2
            }
        );

        // Any positive penalty makes the system solvable again
        let regressor = RidgeRegression {
            penalty: 1e-6,
        };
        assert!(regressor.fit(&states, &targets).is_ok());
    }

    #[test]
    fn ridge_penalty_scales_with_sample_count() {
        // Stacking the same data twice must leave the solution unchanged,
        // since the penalty scales with the number of rows.
        let states: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(2),
            vec![1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 2.0, 3.0],
        );
        let targets: DMatrix<f64> = Matrix::from_vec_generic(
            Dim::from_usize(4),
            Dim::from_usize(1),
            vec![1.0, 3.0, 5.0, 7.0],
        );

        let stacked_states: DMatrix<f64> = DMatrix::from_fn(8, 2, |i, j| states[(i % 4, j)]);
        let stacked_targets: DMatrix<f64> = DMatrix::from_fn(8, 1, |i, j| targets[(i % 4, j)]);

        let regressor = RidgeRegression {
            penalty: 0.1,
        };
        let w_once = regressor.fit(&states, &targets).unwrap().weights;
        let w_twice = regressor.fit(&stacked_states, &stacked_targets).unwrap().weights;

        for (a, b) in w_once.iter().zip(w_twice.iter()) {
            assert!((a - b).abs() < 1e-10, "{} vs {}", a, b);
        }
    }

    #[test]
    fn ridge_row_count_mismatch() {
        let states: DMatrix<f64> = DMatrix::zeros(4, 2);
        let targets: DMatrix<f64> = DMatrix::zeros(3, 1);

        let regressor = RidgeRegression {
            penalty: 0.1,
        };
        let err = regressor.fit(&states, &targets).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                context: "target rows",
                expected: 4,
                actual: 3
            }
        );
    }
}
