//! This crate provides functionality shared across the workspace

#![deny(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

mod activation;
mod error;

pub use activation::Activation;
pub use error::{Error, Result};
