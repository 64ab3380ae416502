//! Unpivoted direct kernels for small dense real linear systems
//!
//! This crate provides a small set of dense-matrix numerical kernels over
//! real-valued square matrices:
//!
//! - **Gaussian elimination solve**: forward elimination without pivoting
//!   followed by back-substitution
//! - **LU factorization**: unpivoted Doolittle `A = L * U`, with the
//!   determinant as a by-product of `U`'s diagonal
//! - **Diagonal dominance check**: strict row diagonal dominance
//! - **Positive-definiteness check**: Sylvester's criterion over leading
//!   principal minors
//!
//! The absence of pivoting is deliberate: these kernels are defined only for
//! matrices whose natural pivot sequence is entirely non-zero, and they fail
//! fast on a zero (or, for LU, near-zero) pivot rather than falling back to a
//! row-swapping variant. That makes the triangular factors deterministic and
//! exactly reproducible, at the cost of rejecting some perfectly solvable
//! systems.
//!
//! Every kernel borrows its inputs and works on internal copies; caller-owned
//! matrices and vectors are never mutated.
//!
//! # Example
//!
//! ```
//! use dense_kernels::{gauss_solve, lu_factorize};
//! use ndarray::array;
//!
//! let a: ndarray::Array2<f64> = array![[2.0, -1.0, 1.0], [1.0, 3.0, 1.0], [-1.0, 5.0, 4.0]];
//! let b = array![6.0, 0.0, -3.0];
//!
//! let x = gauss_solve(&a, &b)?;
//! assert!((x[0] - 2.0).abs() < 1e-9);
//!
//! let factors = lu_factorize(&a)?;
//! assert!((factors.determinant() - 27.0).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod direct;
pub mod properties;
pub mod traits;

// Re-export the kernel API
pub use direct::{
    back_substitute, forward_eliminate, gauss_solve, lu_factorize, LuError, LuFactorization,
    SolveError, LU_PIVOT_TOLERANCE,
};
pub use properties::{is_diagonally_dominant, is_positive_definite, MINOR_TOLERANCE};
pub use traits::RealField;
