//! Runtime-sized matrix used at the boundary with general dense code.
//!
//! [`DynMatrix`] is deliberately small: it stores, indexes, and converts to
//! and from the fixed types. All arithmetic happens on the fixed side.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::{MatrixMut, MatrixRef, Scalar};
use crate::{FixedMatrix, FixedVector};

/// Dimension mismatch error for fallible conversions.
///
/// Returned by `TryFrom<&DynMatrix<T>>` for [`FixedMatrix`] and
/// [`FixedVector`] when the runtime shape does not fit the fixed type.
///
/// # Example
///
/// ```
/// use fixmat::{DynMatrix, FixedMatrix};
/// use fixmat::dynmatrix::DimensionMismatch;
///
/// let d = DynMatrix::zeros(2, 3, 0.0_f64);
/// let result: Result<FixedMatrix<f64, 2>, _> = (&d).try_into();
/// assert_eq!(result, Err(DimensionMismatch { expected: (2, 2), got: (2, 3) }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMismatch {
    /// Expected `(rows, cols)`.
    pub expected: (usize, usize),
    /// Got `(rows, cols)`.
    pub got: (usize, usize),
}

impl core::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "dimension mismatch: expected {}x{}, got {}x{}",
            self.expected.0, self.expected.1, self.got.0, self.got.1
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DimensionMismatch {}

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage, matching the layout of [`FixedMatrix`].
/// Implements [`MatrixRef`] and [`MatrixMut`], so [`copy_matrix`] moves data
/// in either direction.
///
/// # Examples
///
/// ```
/// use fixmat::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(a[(0, 2)], 3.0);
/// assert_eq!(a[(1, 0)], 4.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// The third argument only pins the element type.
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix from a row-major slice.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }
}

impl<T> DynMatrix<T> {
    /// Create a matrix from an owned row-major `Vec<T>`.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use fixmat::DynMatrix;
    /// let m = DynMatrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ── Element access ──────────────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

/// Copy every element of `src` into `dst`, row by row.
///
/// Panics if the shapes differ; the `TryFrom` conversions check shapes first
/// and report a [`DimensionMismatch`] instead.
pub fn copy_matrix<T: Copy>(src: &impl MatrixRef<T>, dst: &mut impl MatrixMut<T>) {
    assert_eq!(
        (src.nrows(), src.ncols()),
        (dst.nrows(), dst.ncols()),
        "copy_matrix shape mismatch"
    );
    for i in 0..src.nrows() {
        for j in 0..src.ncols() {
            *dst.get_mut(i, j) = *src.get(i, j);
        }
    }
}

// ── Conversions: fixed ↔ DynMatrix ──────────────────────────────────

impl<T: Scalar, const N: usize> From<&FixedMatrix<T, N>> for DynMatrix<T> {
    /// Copy a fixed-size matrix into an `N x N` `DynMatrix`.
    ///
    /// ```
    /// use fixmat::{DynMatrix, FixedMatrix};
    /// let m = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let d = DynMatrix::from(&m);
    /// assert_eq!(d.nrows(), 2);
    /// assert_eq!(d[(1, 0)], 3.0);
    /// ```
    fn from(m: &FixedMatrix<T, N>) -> Self {
        let mut d = DynMatrix::zeros(N, N, T::zero());
        copy_matrix(m, &mut d);
        d
    }
}

impl<T: Scalar, const N: usize> From<FixedMatrix<T, N>> for DynMatrix<T> {
    fn from(m: FixedMatrix<T, N>) -> Self {
        Self::from(&m)
    }
}

impl<T: Scalar, const N: usize> From<&FixedVector<T, N>> for DynMatrix<T> {
    /// Copy a fixed-size vector into an `N x 1` column `DynMatrix`.
    fn from(v: &FixedVector<T, N>) -> Self {
        let mut d = DynMatrix::zeros(N, 1, T::zero());
        copy_matrix(v, &mut d);
        d
    }
}

impl<T: Scalar, const N: usize> From<FixedVector<T, N>> for DynMatrix<T> {
    fn from(v: FixedVector<T, N>) -> Self {
        Self::from(&v)
    }
}

impl<T: Scalar, const N: usize> TryFrom<&DynMatrix<T>> for FixedMatrix<T, N> {
    type Error = DimensionMismatch;

    /// Copy an `N x N` `DynMatrix` into a fixed-size matrix.
    ///
    /// ```
    /// use fixmat::{DynMatrix, FixedMatrix};
    /// let d = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let m: FixedMatrix<f64, 2> = (&d).try_into().unwrap();
    /// assert_eq!(m[(0, 1)], 2.0);
    /// ```
    fn try_from(d: &DynMatrix<T>) -> Result<Self, Self::Error> {
        if d.nrows != N || d.ncols != N {
            return Err(DimensionMismatch {
                expected: (N, N),
                got: (d.nrows, d.ncols),
            });
        }
        let mut m = FixedMatrix::zeros();
        copy_matrix(d, &mut m);
        Ok(m)
    }
}

impl<T: Scalar, const N: usize> TryFrom<&DynMatrix<T>> for FixedVector<T, N> {
    type Error = DimensionMismatch;

    /// Copy a `1 x N` row or `N x 1` column `DynMatrix` into a fixed vector.
    ///
    /// Any other shape is reported against the column shape `N x 1`.
    fn try_from(d: &DynMatrix<T>) -> Result<Self, Self::Error> {
        if (d.nrows, d.ncols) != (N, 1) && (d.nrows, d.ncols) != (1, N) {
            return Err(DimensionMismatch {
                expected: (N, 1),
                got: (d.nrows, d.ncols),
            });
        }
        // Row-major, so a single row and a single column share one layout.
        let mut v = FixedVector::zeros();
        v.data.copy_from_slice(&d.data);
        Ok(v)
    }
}
