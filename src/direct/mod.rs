//! Direct solvers and factorizations
//!
//! This module provides the unpivoted direct kernels:
//! - [`gauss_solve`]: Gaussian elimination + back-substitution
//! - [`lu_factorize`]: Doolittle LU factorization

mod gauss;
mod lu;

pub use gauss::{back_substitute, forward_eliminate, gauss_solve, SolveError};
pub use lu::{lu_factorize, LuError, LuFactorization, LU_PIVOT_TOLERANCE};
