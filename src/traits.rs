use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types. Operations that only add and
/// multiply (addition, products, transpose, trace) accept any `Scalar`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `abs`, ordering, `sqrt`, or IEEE-754
/// special values (element extremes, determinant/inverse, Cholesky).
/// `f32` and `f64` share every kernel through this bound.
pub trait FloatScalar: Scalar + Float {
    /// `true` when the value is neither NaN nor infinite.
    #[inline]
    fn is_countable(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

/// Flat view of the slots of a fixed-size type.
///
/// Implemented by [`FixedMatrix`](crate::FixedMatrix) (N² slots, row-major)
/// and [`FixedVector`](crate::FixedVector) (N slots), so slot-wise kernels
/// such as [`add`](crate::ops::add) or [`element_max_abs`](crate::ops::element_max_abs)
/// are written once for both.
pub trait FixedStorage: Copy {
    /// Element type.
    type Elem: Copy;
    /// All slots in row-major order.
    fn as_flat(&self) -> &[Self::Elem];
    /// All slots in row-major order, mutable.
    fn as_flat_mut(&mut self) -> &mut [Self::Elem];
}

/// Read-only access to a matrix-like type.
///
/// Lets boundary code copy between fixed-size and runtime-sized matrices
/// without caring which side is which.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countable() {
        assert!(1.0_f64.is_countable());
        assert!(0.0_f32.is_countable());
        assert!(!f64::NAN.is_countable());
        assert!(!f64::INFINITY.is_countable());
        assert!(!f32::NEG_INFINITY.is_countable());
    }
}
