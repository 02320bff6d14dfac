use crate::FixedMatrix;

/// Transpose a square matrix in place.
///
/// Swaps each `(i, j)` / `(j, i)` pair with `i < j`; the diagonal is untouched
/// and no temporary matrix is needed.
///
/// ```
/// use fixmat::{ops, FixedMatrix};
/// let mut m = FixedMatrix::new([[1, 2], [3, 4]]);
/// ops::transpose_in_place(&mut m);
/// assert_eq!(m, FixedMatrix::new([[1, 3], [2, 4]]));
/// ```
pub fn transpose_in_place<T: Copy, const N: usize>(m: &mut FixedMatrix<T, N>) {
    for i in 0..N {
        for j in (i + 1)..N {
            let tmp = m.data[i][j];
            m.data[i][j] = m.data[j][i];
            m.data[j][i] = tmp;
        }
    }
}

/// Write the transpose of `input` into `output`.
///
/// `output` is `&mut` and `input` is `&`, so the two can never be the same
/// instance; use [`transpose_in_place`] for that.
pub fn transpose_into<T: Copy, const N: usize>(input: &FixedMatrix<T, N>, output: &mut FixedMatrix<T, N>) {
    for i in 0..N {
        for j in 0..N {
            output.data[j][i] = input.data[i][j];
        }
    }
}

/// Return the transpose of `input` as a fresh matrix.
pub fn transpose<T: Copy, const N: usize>(input: &FixedMatrix<T, N>) -> FixedMatrix<T, N> {
    let mut out = *input;
    transpose_in_place(&mut out);
    out
}
