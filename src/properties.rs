//! Structural predicates on dense square matrices
//!
//! Two independent checks over the unmodified input matrix:
//! - [`is_diagonally_dominant`]: strict row diagonal dominance
//! - [`is_positive_definite`]: Sylvester's criterion over leading principal minors
//!
//! Both are pure: they never fail, never mutate their input, and return the
//! same verdict for the same matrix on every call.

use crate::traits::RealField;
use ndarray::{s, Array2, ArrayView2};

/// A leading principal minor must exceed this value for the matrix to count
/// as positive definite. Slightly above zero to absorb floating-point noise
/// in the minor determinants.
pub const MINOR_TOLERANCE: f64 = 1e-14;

/// Check whether a square matrix is strictly row diagonally dominant.
///
/// True iff for every row `i`, `|a[i,i]|` exceeds the sum of the magnitudes of
/// the other entries in that row. Returns false on the first failing row.
pub fn is_diagonally_dominant<T: RealField>(a: &Array2<T>) -> bool {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");

    let n = a.nrows();
    for i in 0..n {
        let diag = a[[i, i]].magnitude();
        let row_sum = a
            .row(i)
            .iter()
            .fold(T::zero(), |acc, &v| acc + v.magnitude());
        if diag <= row_sum - diag {
            return false;
        }
    }
    true
}

/// Check whether a symmetric square matrix is positive definite.
///
/// Applies Sylvester's criterion: every leading principal submatrix (the
/// top-left `k`×`k` block, `k = 1..=n`) must have a determinant greater than
/// [`MINOR_TOLERANCE`]. Returns false as soon as one minor fails.
///
/// The caller is responsible for passing a symmetric matrix; the verdict for
/// non-symmetric input is unspecified.
pub fn is_positive_definite<T: RealField>(a: &Array2<T>) -> bool {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");

    let n = a.nrows();
    let tol = T::from_f64(MINOR_TOLERANCE).unwrap();
    for k in 1..=n {
        let minor = determinant(a.slice(s![..k, ..k]));
        if minor <= tol {
            return false;
        }
    }
    true
}

/// Determinant by Gaussian elimination with partial pivoting.
///
/// Unlike the public kernels, this helper does pivot: it is a numerical
/// utility for the minor test, not part of the unpivoted algorithm contract,
/// and row swaps only flip the determinant's sign.
fn determinant<T: RealField>(m: ArrayView2<'_, T>) -> T {
    let n = m.nrows();
    let mut m = m.to_owned();
    let mut det = T::one();

    for k in 0..n {
        let mut pivot_row = k;
        for i in (k + 1)..n {
            if m[[i, k]].magnitude() > m[[pivot_row, k]].magnitude() {
                pivot_row = i;
            }
        }
        if m[[pivot_row, k]] == T::zero() {
            return T::zero();
        }
        if pivot_row != k {
            for j in 0..n {
                m.swap([k, j], [pivot_row, j]);
            }
            det = -det;
        }

        let pivot = m[[k, k]];
        det *= pivot;
        for i in (k + 1)..n {
            let factor = m[[i, k]] / pivot;
            for j in (k + 1)..n {
                let update = factor * m[[k, j]];
                m[[i, j]] -= update;
            }
        }
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_diagonally_dominant_true() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        assert!(is_diagonally_dominant(&a));
    }

    #[test]
    fn test_diagonally_dominant_5x5_false() {
        // Rows 0..=3 all pass; the last row fails (|8| vs 3 + 2 + 4 + 0 = 9).
        let a = array![
            [9.0_f64, 0.0, 5.0, 2.0, 1.0],
            [3.0, 9.0, 1.0, 2.0, 1.0],
            [0.0, 1.0, 7.0, 2.0, 3.0],
            [4.0, 2.0, 3.0, 12.0, 2.0],
            [3.0, 2.0, 4.0, 0.0, 8.0]
        ];
        assert!(!is_diagonally_dominant(&a));
    }

    #[test]
    fn test_dominance_is_strict() {
        // |2| == 1 + 1 in the first row: ties do not count.
        let a = array![[2.0_f64, 1.0, 1.0], [0.0, 5.0, 1.0], [1.0, 0.0, 3.0]];
        assert!(!is_diagonally_dominant(&a));
    }

    #[test]
    fn test_dominance_uses_magnitudes() {
        let a = array![[-4.0_f64, 1.0, -2.0], [1.0, -3.0, 1.0], [-1.0, 1.0, 3.0]];
        assert!(is_diagonally_dominant(&a));
    }

    #[test]
    fn test_positive_definite_true() {
        let a = array![[2.0_f64, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]];
        assert!(is_positive_definite(&a));
    }

    #[test]
    fn test_positive_definite_false_on_negative_minor() {
        // det of the full matrix is -3 even though both 1x1 minors pass.
        let a = array![[1.0_f64, 2.0], [2.0, 1.0]];
        assert!(!is_positive_definite(&a));
    }

    #[test]
    fn test_positive_definite_rejects_indefinite() {
        let a = array![[-1.0_f64, 0.0], [0.0, 2.0]];
        assert!(!is_positive_definite(&a));
    }

    #[test]
    fn test_tiny_positive_minor_rejected_by_tolerance() {
        // Genuinely positive definite, but the leading minor sits below the
        // tolerance, so the check says no. Pinned compatibility behavior.
        let a = array![[1e-15_f64, 0.0], [0.0, 1.0]];
        assert!(!is_positive_definite(&a));
    }

    #[test]
    fn test_predicates_do_not_mutate() {
        let a = array![[2.0_f64, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]];
        let a_before = a.clone();

        let pd1 = is_positive_definite(&a);
        let pd2 = is_positive_definite(&a);
        let dd1 = is_diagonally_dominant(&a);
        let dd2 = is_diagonally_dominant(&a);

        assert_eq!(pd1, pd2);
        assert_eq!(dd1, dd2);
        assert_eq!(a, a_before);
    }

    #[test]
    fn test_determinant_with_row_swaps() {
        // Leading zero forces a swap; the pivoted helper still gets det = -1.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        assert_relative_eq!(determinant(a.view()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_singular() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert_relative_eq!(determinant(a.view()), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_matches_lu_diagonal() {
        let a = array![
            [1.0_f64, 1.0, 0.0, 3.0],
            [2.0, 1.0, -1.0, 1.0],
            [3.0, -1.0, -1.0, 2.0],
            [-1.0, 2.0, 3.0, -1.0]
        ];
        let fact = crate::direct::lu_factorize(&a).expect("factorization should succeed");
        assert_relative_eq!(determinant(a.view()), fact.determinant(), epsilon = 1e-9);
    }
}
