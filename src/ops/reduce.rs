use crate::traits::{FixedStorage, FloatScalar, Scalar};
use crate::{FixedMatrix, FixedVector};

/// Sum of the diagonal.
///
/// ```
/// use fixmat::{ops, FixedMatrix};
/// let a = FixedMatrix::new([[1, 9, 9], [9, 2, 9], [9, 9, 3]]);
/// assert_eq!(ops::trace(&a), 6);
/// ```
pub fn trace<T: Scalar, const N: usize>(a: &FixedMatrix<T, N>) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + a.data[i][i];
    }
    sum
}

/// Copy the diagonal into `out`.
pub fn diag<T: Copy, const N: usize>(a: &FixedMatrix<T, N>, out: &mut FixedVector<T, N>) {
    for i in 0..N {
        out.data[i] = a.data[i][i];
    }
}

/// Fold every slot with `pick`, seeded by the first slot.
#[inline]
fn extreme<T: FloatScalar, S: FixedStorage<Elem = T>>(
    a: &S,
    key: impl Fn(T) -> T,
    pick: impl Fn(T, T) -> bool,
) -> T {
    let flat = a.as_flat();
    let mut best = key(flat[0]);
    for &x in &flat[1..] {
        let x = key(x);
        if pick(x, best) {
            best = x;
        }
    }
    best
}

/// Largest slot value.
pub fn element_max<T: FloatScalar, S: FixedStorage<Elem = T>>(a: &S) -> T {
    extreme(a, |x| x, |x, best| x > best)
}

/// Smallest slot value.
pub fn element_min<T: FloatScalar, S: FixedStorage<Elem = T>>(a: &S) -> T {
    extreme(a, |x| x, |x, best| x < best)
}

/// Largest absolute slot value.
///
/// The inverse kernel scales by the reciprocal of this value before
/// expanding cofactors.
///
/// ```
/// use fixmat::{ops, FixedMatrix};
/// let a = FixedMatrix::new([[1.0, -7.0], [3.0, 2.0]]);
/// assert_eq!(ops::element_max_abs(&a), 7.0);
/// ```
pub fn element_max_abs<T: FloatScalar, S: FixedStorage<Elem = T>>(a: &S) -> T {
    extreme(a, |x| x.abs(), |x, best| x > best)
}

/// Smallest absolute slot value.
pub fn element_min_abs<T: FloatScalar, S: FixedStorage<Elem = T>>(a: &S) -> T {
    extreme(a, |x| x.abs(), |x, best| x < best)
}

/// Overwrite `a` with the identity.
pub fn set_identity<T: Scalar, const N: usize>(a: &mut FixedMatrix<T, N>) {
    for i in 0..N {
        for j in 0..N {
            a.data[i][j] = if i == j { T::one() } else { T::zero() };
        }
    }
}

/// Copy row `row` of `a` into `out`.
///
/// # Panics
///
/// Panics if `row >= N`.
pub fn extract_row<T: Copy, const N: usize>(
    a: &FixedMatrix<T, N>,
    row: usize,
    out: &mut FixedVector<T, N>,
) {
    assert!(row < N, "row index {} out of range for {}x{} matrix", row, N, N);
    out.data = a.data[row];
}

/// Copy column `col` of `a` into `out`.
///
/// # Panics
///
/// Panics if `col >= N`.
pub fn extract_column<T: Copy, const N: usize>(
    a: &FixedMatrix<T, N>,
    col: usize,
    out: &mut FixedVector<T, N>,
) {
    assert!(col < N, "column index {} out of range for {}x{} matrix", col, N, N);
    for i in 0..N {
        out.data[i] = a.data[i][col];
    }
}
