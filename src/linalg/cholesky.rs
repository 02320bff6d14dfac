use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::FixedMatrix;

/// Cholesky factorization in place: `A = L·Lᵀ`.
///
/// Reads the lower triangle of `a` (including the diagonal) and overwrites it
/// with `L`, row by row. The strict upper triangle is zeroed. No pivoting.
///
/// Returns `false` when the last diagonal entry of `L` came out NaN or
/// infinite. This catches most non-positive-definite inputs since a failed
/// square root poisons every later entry, but it is not a full check: use
/// [`FixedMatrix::cholesky`] when every pivot must be verified.
#[must_use]
pub fn chol_lower<T: FloatScalar, const N: usize>(a: &mut FixedMatrix<T, N>) -> bool {
    let d = &mut a.data;
    for i in 0..N {
        for j in 0..i {
            let mut sum = d[i][j];
            for k in 0..j {
                sum = sum - d[i][k] * d[j][k];
            }
            d[i][j] = sum / d[j][j];
        }
        let mut sum = d[i][i];
        for k in 0..i {
            sum = sum - d[i][k] * d[i][k];
        }
        d[i][i] = sum.sqrt();
        for j in (i + 1)..N {
            d[i][j] = T::zero();
        }
    }
    d[N - 1][N - 1].is_countable()
}

/// Cholesky factorization in place: `A = Uᵀ·U`.
///
/// Mirror of [`chol_lower`]: reads the upper triangle, overwrites it with `U`
/// and zeroes the strict lower triangle. Same return semantics.
#[must_use]
pub fn chol_upper<T: FloatScalar, const N: usize>(a: &mut FixedMatrix<T, N>) -> bool {
    let d = &mut a.data;
    for i in 0..N {
        let mut sum = d[i][i];
        for k in 0..i {
            sum = sum - d[k][i] * d[k][i];
        }
        d[i][i] = sum.sqrt();
        for j in (i + 1)..N {
            let mut sum = d[i][j];
            for k in 0..i {
                sum = sum - d[k][i] * d[k][j];
            }
            d[i][j] = sum / d[i][i];
            d[j][i] = T::zero();
        }
    }
    d[N - 1][N - 1].is_countable()
}

impl<T: FloatScalar, const N: usize> FixedMatrix<T, N> {
    /// Lower Cholesky factor `L` with `A = L·Lᵀ`.
    ///
    /// Returns [`LinalgError::NotPositiveDefinite`] unless every diagonal
    /// entry of `L` is finite and positive.
    ///
    /// ```
    /// use fixmat::{ops, FixedMatrix};
    /// let spd = FixedMatrix::new([[4.0_f64, 2.0], [2.0, 3.0]]);
    /// let l = spd.cholesky().unwrap();
    /// let mut llt = FixedMatrix::zeros();
    /// ops::mult_trans_b(&l, &l, &mut llt);
    /// assert!((llt[(1, 1)] - 3.0).abs() < 1e-12);
    /// ```
    pub fn cholesky(&self) -> Result<Self, LinalgError> {
        let mut l = *self;
        let ok = chol_lower(&mut l);
        for i in 0..N {
            let d = l.data[i][i];
            if !ok || !(d.is_countable() && d > T::zero()) {
                return Err(LinalgError::NotPositiveDefinite);
            }
        }
        Ok(l)
    }
}
