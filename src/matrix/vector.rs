use core::ops::{Index, IndexMut};

use crate::matrix::DimCheck;
use crate::traits::{FixedStorage, MatrixMut, MatrixRef, Scalar};

/// Fixed-size vector with `N` elements.
///
/// Not tagged as a row or a column: products treat it as a column on the
/// right of a matrix ([`mult_vec`](crate::ops::mult_vec)) and as a row on the
/// left ([`vec_mult`](crate::ops::vec_mult)).
///
/// # Examples
///
/// ```
/// use fixmat::FixedVector;
///
/// let v = FixedVector::new([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedVector<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Create a vector from an array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        let () = DimCheck::<N>::OK;
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`; fixed vectors hold at least two elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// View the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector, returning its array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// Create a vector filled with zeros.
    pub fn zeros() -> Self {
        Self::new([T::zero(); N])
    }

    /// Create a vector with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self::new([value; N])
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use fixmat::FixedVector;
    /// let a = FixedVector::new([1.0, 2.0, 3.0]);
    /// let b = FixedVector::new([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        crate::ops::dot(self, rhs)
    }
}

impl<T: Scalar, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T: Copy, const N: usize> FixedStorage for FixedVector<T, N> {
    type Elem = T;

    #[inline]
    fn as_flat(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn as_flat_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// A vector is viewed as an N×1 column through the matrix traits.
impl<T, const N: usize> MatrixRef<T> for FixedVector<T, N> {
    #[inline]
    fn nrows(&self) -> usize {
        N
    }

    #[inline]
    fn ncols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        debug_assert_eq!(col, 0, "vector column index must be 0");
        &self.data[row]
    }
}

impl<T, const N: usize> MatrixMut<T> for FixedVector<T, N> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert_eq!(col, 0, "vector column index must be 0");
        &mut self.data[row]
    }
}
