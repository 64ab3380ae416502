//! Gaussian elimination solver without pivoting
//!
//! Forward elimination to upper-triangular form followed by back-substitution.
//! No row exchanges are performed: a zero pivot is a hard error, not a trigger
//! for a pivoting fallback. This keeps the elimination sequence (and therefore
//! the triangular intermediate) fully deterministic and pinnable in tests.

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors that can occur while solving by unpivoted elimination
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("zero pivot at row {row}: pivoting needed or system is singular")]
    SingularOrUnpivotable { row: usize },
    #[error("shape mismatch: matrix is {rows}x{cols}, rhs has length {rhs_len}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        rhs_len: usize,
    },
}

/// Forward-eliminate copies of `a` and `b` into an upper-triangular system.
///
/// For each pivot row `i`, every row `j` below it is reduced by
/// `factor = a[j,i] / a[i,i]` times row `i` (columns `i..`), with the same
/// update applied to `b[j]`. The caller's `a` and `b` are left untouched.
///
/// Fails with [`SolveError::SingularOrUnpivotable`] the moment a pivot that is
/// exactly zero would be used as a divisor.
pub fn forward_eliminate<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<(Array2<T>, Array1<T>), SolveError> {
    let (rows, cols) = a.dim();
    if rows != cols || b.len() != rows {
        return Err(SolveError::ShapeMismatch {
            rows,
            cols,
            rhs_len: b.len(),
        });
    }

    let n = rows;
    let mut a = a.clone();
    let mut b = b.clone();

    for i in 0..n {
        for j in (i + 1)..n {
            let pivot = a[[i, i]];
            if pivot == T::zero() {
                log::debug!("elimination hit an exact zero pivot at row {}", i);
                return Err(SolveError::SingularOrUnpivotable { row: i });
            }
            let factor = a[[j, i]] / pivot;
            for k in i..n {
                let update = factor * a[[i, k]];
                a[[j, k]] -= update;
            }
            let update = factor * b[i];
            b[j] -= update;
        }
    }

    Ok((a, b))
}

/// Solve the upper-triangular system `U x = y` from the last row upward.
///
/// Only entries on and above the diagonal of `u` are read, so the output of
/// [`forward_eliminate`] can be passed in directly even though its
/// strictly-lower part may hold roundoff residue.
pub fn back_substitute<T: RealField>(
    u: &Array2<T>,
    y: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let (rows, cols) = u.dim();
    if rows != cols || y.len() != rows {
        return Err(SolveError::ShapeMismatch {
            rows,
            cols,
            rhs_len: y.len(),
        });
    }

    let n = rows;
    let mut x = Array1::from_elem(n, T::zero());

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for k in (i + 1)..n {
            sum += u[[i, k]] * x[k];
        }
        let pivot = u[[i, i]];
        if pivot == T::zero() {
            log::debug!("back-substitution hit an exact zero pivot at row {}", i);
            return Err(SolveError::SingularOrUnpivotable { row: i });
        }
        x[i] = (y[i] - sum) / pivot;
    }

    Ok(x)
}

/// Solve `A x = b` by Gaussian elimination without pivoting.
///
/// This is a convenience function that combines [`forward_eliminate`] and
/// [`back_substitute`].
pub fn gauss_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, SolveError> {
    let (u, y) = forward_eliminate(a, b)?;
    back_substitute(&u, &y)
}
