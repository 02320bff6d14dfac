//! Determinant and inverse by cofactor (minor) expansion.
//!
//! For N ≤ 6 the expansion is branch-free and allocation-free, and it beats a
//! pivoted decomposition on speed. It is also less stable: there is no
//! pivoting, so badly conditioned inputs lose more precision than they would
//! through LU. The inverse kernel compensates partially by dividing the input
//! by its largest-magnitude entry before expanding.

use crate::linalg::LinalgError;
use crate::ops;
use crate::traits::{FloatScalar, Scalar};
use crate::FixedMatrix;

/// Copy `src` into `buf`, leaving out position `skip`. Returns the filled prefix.
#[inline]
fn without<'a>(src: &[usize], skip: usize, buf: &'a mut [usize]) -> &'a [usize] {
    let mut n = 0;
    for (k, &x) in src.iter().enumerate() {
        if k != skip {
            buf[n] = x;
            n += 1;
        }
    }
    &buf[..n]
}

/// Determinant of the submatrix of `a` picked out by `rows` × `cols`.
///
/// Expands along the first listed row. Sizes 1, 2 and 3 are written out.
fn minor<T: Scalar, const N: usize>(a: &[[T; N]; N], rows: &[usize], cols: &[usize]) -> T {
    debug_assert_eq!(rows.len(), cols.len());
    match rows.len() {
        1 => a[rows[0]][cols[0]],
        2 => {
            let (r0, r1) = (rows[0], rows[1]);
            let (c0, c1) = (cols[0], cols[1]);
            a[r0][c0] * a[r1][c1] - a[r0][c1] * a[r1][c0]
        }
        3 => {
            let [r0, r1, r2] = [rows[0], rows[1], rows[2]];
            let [c0, c1, c2] = [cols[0], cols[1], cols[2]];
            a[r0][c0] * (a[r1][c1] * a[r2][c2] - a[r1][c2] * a[r2][c1])
                - a[r0][c1] * (a[r1][c0] * a[r2][c2] - a[r1][c2] * a[r2][c0])
                + a[r0][c2] * (a[r1][c0] * a[r2][c1] - a[r1][c1] * a[r2][c0])
        }
        _ => {
            let r0 = rows[0];
            let sub_rows = &rows[1..];
            let mut buf = [0usize; N];
            let mut sum = T::zero();
            for (k, &c) in cols.iter().enumerate() {
                let term = a[r0][c] * minor(a, sub_rows, without(cols, k, &mut buf));
                sum = if k % 2 == 0 { sum + term } else { sum - term };
            }
            sum
        }
    }
}

/// `M[i][j] = (−1)^(i+j)·det(a without row i, column j)`.
fn cofactor_matrix<T: Scalar, const N: usize>(a: &[[T; N]; N]) -> [[T; N]; N] {
    let all: [usize; N] = core::array::from_fn(|i| i);
    let mut row_buf = [0usize; N];
    let mut col_buf = [0usize; N];
    let mut m = [[T::zero(); N]; N];
    for i in 0..N {
        let rows = without(&all, i, &mut row_buf);
        for j in 0..N {
            let cols = without(&all, j, &mut col_buf);
            let d = minor(a, rows, cols);
            m[i][j] = if (i + j) % 2 == 0 { d } else { T::zero() - d };
        }
    }
    m
}

/// Rounding bound for the expansion of `a`: `N²·ε·∏ᵢ Σⱼ |a[i][j]|`.
///
/// The row-sum product dominates the sum of every expansion term taken in
/// absolute value, and no term passes through more than `N²` roundings. An
/// expansion whose magnitude does not clear this bound is indistinguishable
/// from zero. NaN entries give a NaN bound.
fn expansion_tolerance<T: FloatScalar, const N: usize>(a: &[[T; N]; N]) -> T {
    let n = (0..N).fold(T::zero(), |acc, _| acc + T::one());
    let mut tol = n * n * T::epsilon();
    for row in a {
        tol = tol * row.iter().fold(T::zero(), |acc, &x| acc + x.abs());
    }
    tol
}

/// Determinant by cofactor expansion along the first row.
///
/// Computed on the raw entries, with no scaling, so integer matrices get an
/// exact result.
///
/// ```
/// use fixmat::{linalg, FixedMatrix};
/// let a = FixedMatrix::new([[2, 0, 1], [1, 3, 2], [1, 1, 2]]);
/// assert_eq!(linalg::det(&a), 6);
/// ```
pub fn det<T: Scalar, const N: usize>(a: &FixedMatrix<T, N>) -> T {
    let all: [usize; N] = core::array::from_fn(|i| i);
    minor(&a.data, &all, &all)
}

/// Cofactor matrix of `a`.
pub fn cofactors<T: Scalar, const N: usize>(a: &FixedMatrix<T, N>) -> FixedMatrix<T, N> {
    FixedMatrix::new(cofactor_matrix(&a.data))
}

/// Adjugate of `a`: the transposed cofactor matrix, so `A·adj(A) = det(A)·I`.
pub fn adjugate<T: Scalar, const N: usize>(a: &FixedMatrix<T, N>) -> FixedMatrix<T, N> {
    let mut adj = cofactors(a);
    ops::transpose_in_place(&mut adj);
    adj
}

/// Invert `a` into `inv` by scaled cofactor expansion.
///
/// The input is first multiplied by `1 / max|a[i][j]|`, the cofactors and
/// determinant are taken on the scaled copy, and the scale is folded back
/// into the determinant before the division `inv[i][j] = M[j][i] / det`.
///
/// Returns `false` when the determinant is NaN or infinite, or when the
/// determinant of the scaled copy is within rounding of zero (see
/// `expansion_tolerance`). The scaled copy has entries of magnitude at most
/// one, so the zero test gives the same answer at every input scale. A zero
/// matrix takes the NaN path. On failure `inv` still holds whatever the
/// division produced.
///
/// ```
/// use fixmat::{linalg, FixedMatrix};
/// let a = FixedMatrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
/// let mut inv = FixedMatrix::zeros();
/// assert!(linalg::invert(&a, &mut inv));
/// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
///
/// let singular = FixedMatrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert!(!linalg::invert(&singular, &mut inv));
/// ```
#[must_use]
pub fn invert<T: FloatScalar, const N: usize>(
    a: &FixedMatrix<T, N>,
    inv: &mut FixedMatrix<T, N>,
) -> bool {
    let scale = T::one() / ops::element_max_abs(a);
    let mut scaled = *a;
    ops::scale(scale, &mut scaled);

    let m = cofactor_matrix(&scaled.data);
    let mut det_scaled = T::zero();
    for k in 0..N {
        det_scaled = det_scaled + scaled.data[0][k] * m[0][k];
    }
    let det = det_scaled / scale;

    for i in 0..N {
        for j in 0..N {
            inv.data[i][j] = m[j][i] / det;
        }
    }

    det.is_countable() && det_scaled.abs() > expansion_tolerance(&scaled.data)
}

impl<T: Scalar, const N: usize> FixedMatrix<T, N> {
    /// Determinant. See [`linalg::det`](crate::linalg::det).
    ///
    /// ```
    /// use fixmat::FixedMatrix;
    /// let a = FixedMatrix::new([[2.0_f64, 0.0], [0.0, 2.0]]);
    /// assert_eq!(a.det(), 4.0);
    /// ```
    #[inline]
    pub fn det(&self) -> T {
        det(self)
    }

    /// Cofactor matrix.
    #[inline]
    pub fn cofactors(&self) -> Self {
        cofactors(self)
    }

    /// Adjugate (transposed cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        adjugate(self)
    }
}

impl<T: FloatScalar, const N: usize> FixedMatrix<T, N> {
    /// Matrix inverse by scaled cofactor expansion.
    ///
    /// Returns [`LinalgError::Singular`] when [`invert`] reports failure.
    ///
    /// ```
    /// use fixmat::FixedMatrix;
    /// use fixmat::linalg::LinalgError;
    ///
    /// let a = FixedMatrix::new([[2.0_f64, 0.0], [0.0, 2.0]]);
    /// assert_eq!(a.inverse().unwrap(), FixedMatrix::new([[0.5, 0.0], [0.0, 0.5]]));
    ///
    /// let zero: FixedMatrix<f64, 3> = FixedMatrix::zeros();
    /// assert_eq!(zero.inverse(), Err(LinalgError::Singular));
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let mut inv = Self::zeros();
        if invert(self, &mut inv) {
            Ok(inv)
        } else {
            Err(LinalgError::Singular)
        }
    }
}
