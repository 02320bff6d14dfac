pub mod aliases;
mod ops;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::traits::{FixedStorage, MatrixMut, MatrixRef, Scalar};

pub use vector::FixedVector;

/// Smallest supported dimension.
pub const MIN_DIM: usize = 2;
/// Largest supported dimension.
pub const MAX_DIM: usize = 6;

/// Compile-time guard shared by the fixed types.
///
/// Evaluated when a constructor is monomorphized, so `FixedMatrix<f64, 7>`
/// fails to build instead of failing at run time.
pub(crate) struct DimCheck<const N: usize>;

impl<const N: usize> DimCheck<N> {
    pub(crate) const OK: () = assert!(
        N >= MIN_DIM && N <= MAX_DIM,
        "fixed-size types support dimensions 2 through 6"
    );
}

/// Fixed-size square matrix with `N` rows and `N` columns.
///
/// Storage is row-major: `data[row][col]`.
/// Stack-allocated, no-std compatible, `Copy`.
///
/// # Examples
///
/// ```
/// use fixmat::FixedMatrix;
///
/// let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.dim(), 2);
///
/// let b: FixedMatrix<f64, 3> = FixedMatrix::identity();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<T, const N: usize> {
    pub(crate) data: [[T; N]; N],
}

impl<T, const N: usize> FixedMatrix<T, N> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]`.
    #[inline]
    pub const fn new(rows: [[T; N]; N]) -> Self {
        let () = DimCheck::<N>::OK;
        Self { data: rows }
    }

    /// Dimension `N` (rows == columns).
    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    /// Row-major view of the underlying storage.
    #[inline]
    pub fn as_rows(&self) -> &[[T; N]; N] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage.
    #[inline]
    pub fn into_rows(self) -> [[T; N]; N] {
        self.data
    }
}

impl<T: Scalar, const N: usize> FixedMatrix<T, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::new([[T::zero(); N]; N])
    }

    /// Create a matrix with every slot set to `value`.
    pub fn filled(value: T) -> Self {
        Self::new([[value; N]; N])
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const N: usize> Default for FixedMatrix<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Copy, const N: usize> FixedStorage for FixedMatrix<T, N> {
    type Elem = T;

    #[inline]
    fn as_flat(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[inline]
    fn as_flat_mut(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}

impl<T, const N: usize> MatrixRef<T> for FixedMatrix<T, N> {
    #[inline]
    fn nrows(&self) -> usize {
        N
    }

    #[inline]
    fn ncols(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row][col]
    }
}

impl<T, const N: usize> MatrixMut<T> for FixedMatrix<T, N> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row][col]
    }
}

// Index by (row, col) tuple
impl<T, const N: usize> Index<(usize, usize)> for FixedMatrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for FixedMatrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for FixedMatrix<T, N> {
    fn from(rows: [[T; N]; N]) -> Self {
        Self::new(rows)
    }
}

pub use aliases::*;
