//! Deterministic driving sequences used to exercise the reservoir
//! pipeline: a Lorenz attractor integrator, a Mackey-Glass delay-equation
//! integrator and a noisy nonlinear AR(1) simulator.

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod lorenz;
mod mackey_glass;
mod nar;

pub use lorenz::Lorenz;
pub use mackey_glass::MackeyGlass;
pub use nar::nonlinear_ar;
