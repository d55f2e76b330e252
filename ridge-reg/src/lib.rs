#[macro_use]
extern crate log;

use common::Result;
use nalgebra::DMatrix;

mod ridge;

pub use ridge::{ReadoutFit, RidgeRegression};

/// Generic way of performing linear regression and fitting the readout matrix
pub trait LinReg: Clone {
    /// Fit a readout matrix, mapping reservoir states to targets
    ///
    /// # Parameters
    /// states: One collected state vector per row
    /// targets: Target data with one output row per state row
    fn fit_readout(&self, states: &DMatrix<f64>, targets: &DMatrix<f64>) -> Result<DMatrix<f64>>;
}
