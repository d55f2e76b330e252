//! The core of a leaky Echo State Network: random reservoir construction,
//! deterministic state collection and closed-form autonomous forecasting.
//!
//! The readout itself is fitted by the `ridge-reg` crate; this crate only
//! consumes the resulting weight matrix when folding the readout back into
//! the recurrence for self-driven multi-step prediction.

#[macro_use]
extern crate log;

mod collect;
mod forecast;
mod init;
mod params;

pub use collect::{collect, collect_many, step};
pub use forecast::{fold, forecast, ForecastTrajectory};
pub use init::ReservoirInit;
pub use params::ReservoirParams;
