//! Unpivoted LU factorization
//!
//! Doolittle-style elimination producing `A = L * U` with `L` unit lower
//! triangular and `U` upper triangular. No row exchanges are performed, so the
//! factors are unique and reproducible for a given input; matrices whose
//! natural pivot sequence contains a (near-)zero entry are rejected instead of
//! being repaired with partial pivoting.

use crate::traits::RealField;
use ndarray::Array2;
use thiserror::Error;

/// Pivot magnitudes below this threshold are treated as numerically zero.
pub const LU_PIVOT_TOLERANCE: f64 = 1e-15;

/// Errors that can occur during LU factorization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LuError {
    #[error("near-zero pivot at column {col}: pivoting needed or matrix is singular")]
    ZeroPivot { col: usize },
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Unpivoted LU factorization result
///
/// Stores the factors as two owned matrices, so either can be consumed or
/// inspected independently of the other.
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Unit lower-triangular factor (diagonal exactly 1, strictly-upper part exactly 0)
    pub l: Array2<T>,
    /// Upper-triangular factor (strictly-lower part exactly 0)
    pub u: Array2<T>,
}

impl<T: RealField> LuFactorization<T> {
    /// Determinant of the factored matrix, as the product of `U`'s diagonal.
    ///
    /// With `L` unit triangular, `det(A) = det(L) * det(U) = det(U)`, so the
    /// determinant falls out of the factorization with no extra work.
    pub fn determinant(&self) -> T {
        self.u.diag().iter().fold(T::one(), |acc, &d| acc * d)
    }

    /// Recompute `L * U`, which reconstructs the original matrix up to
    /// floating-point rounding.
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }

    /// Matrix dimension
    pub fn n(&self) -> usize {
        self.u.nrows()
    }
}

/// Compute the unpivoted LU factorization of a square matrix.
///
/// `L` starts as the identity and `U` as a copy of `a`. For each pivot column
/// `k`, the multiplier `L[i,k] = U[i,k] / U[k,k]` is recorded and row `i` of
/// `U` is reduced by that multiple of the pivot row. The caller's matrix is
/// not modified.
///
/// Fails with [`LuError::ZeroPivot`] if a pivot magnitude drops below
/// [`LU_PIVOT_TOLERANCE`] before it is used as a divisor.
pub fn lu_factorize<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>, LuError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(LuError::NotSquare { rows, cols });
    }

    let n = rows;
    let tol = T::from_f64(LU_PIVOT_TOLERANCE).unwrap();
    let mut l = Array2::eye(n);
    let mut u = a.clone();

    for k in 0..n.saturating_sub(1) {
        let pivot = u[[k, k]];
        if pivot.magnitude() < tol {
            log::debug!("LU pivot below tolerance at column {}", k);
            return Err(LuError::ZeroPivot { col: k });
        }
        for i in (k + 1)..n {
            let mult = u[[i, k]] / pivot;
            l[[i, k]] = mult;
            for j in (k + 1)..n {
                let update = mult * u[[k, j]];
                u[[i, j]] -= update;
            }
            // The eliminated entry is zero by construction; store it exactly
            // rather than keeping the roundoff of u[i,k] - mult * u[k,k].
            u[[i, k]] = T::zero();
        }
    }

    Ok(LuFactorization { l, u })
}
