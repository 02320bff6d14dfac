use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::ops;
use crate::traits::Scalar;
use crate::{FixedMatrix, FixedVector};

// ── Reference variants for same-shape binary ops ────────────────────
// Both types are Copy, so reference ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Ty:ident, $Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize> $Op<$Ty<T, N>> for &$Ty<T, N> {
            type Output = $Ty<T, N>;
            fn $method(self, rhs: $Ty<T, N>) -> $Ty<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&$Ty<T, N>> for $Ty<T, N> {
            type Output = $Ty<T, N>;
            fn $method(self, rhs: &$Ty<T, N>) -> $Ty<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&$Ty<T, N>> for &$Ty<T, N> {
            type Output = $Ty<T, N>;
            fn $method(self, rhs: &$Ty<T, N>) -> $Ty<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

// ── Element-wise addition / subtraction ─────────────────────────────
// Both fixed types get the same slot-wise operators; the kernels in
// `crate::ops` already work over either.

macro_rules! impl_slotwise_ops {
    ($Ty:ident) => {
        impl<T: Scalar, const N: usize> Add for $Ty<T, N> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                let mut out = self;
                ops::add_equals(&mut out, &rhs);
                out
            }
        }

        impl<T: Scalar, const N: usize> AddAssign for $Ty<T, N> {
            fn add_assign(&mut self, rhs: Self) {
                ops::add_equals(self, &rhs);
            }
        }

        impl<T: Scalar, const N: usize> AddAssign<&$Ty<T, N>> for $Ty<T, N> {
            fn add_assign(&mut self, rhs: &$Ty<T, N>) {
                ops::add_equals(self, rhs);
            }
        }

        impl<T: Scalar, const N: usize> Sub for $Ty<T, N> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                let mut out = self;
                ops::subtract_equals(&mut out, &rhs);
                out
            }
        }

        impl<T: Scalar, const N: usize> SubAssign for $Ty<T, N> {
            fn sub_assign(&mut self, rhs: Self) {
                ops::subtract_equals(self, &rhs);
            }
        }

        impl<T: Scalar, const N: usize> SubAssign<&$Ty<T, N>> for $Ty<T, N> {
            fn sub_assign(&mut self, rhs: &$Ty<T, N>) {
                ops::subtract_equals(self, rhs);
            }
        }

        impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for $Ty<T, N> {
            type Output = Self;

            fn neg(self) -> Self {
                let mut out = self;
                ops::change_sign(&mut out);
                out
            }
        }

        impl<T: Scalar + Neg<Output = T>, const N: usize> Neg for &$Ty<T, N> {
            type Output = $Ty<T, N>;

            fn neg(self) -> $Ty<T, N> {
                (*self).neg()
            }
        }

        // ── Scalar multiplication / division ────────────────────────

        impl<T: Scalar, const N: usize> Mul<T> for $Ty<T, N> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                let mut out = self;
                ops::scale(rhs, &mut out);
                out
            }
        }

        impl<T: Scalar, const N: usize> Mul<T> for &$Ty<T, N> {
            type Output = $Ty<T, N>;

            fn mul(self, rhs: T) -> $Ty<T, N> {
                (*self).mul(rhs)
            }
        }

        impl<T: Scalar, const N: usize> MulAssign<T> for $Ty<T, N> {
            fn mul_assign(&mut self, rhs: T) {
                ops::scale(rhs, self);
            }
        }

        impl<T: Scalar, const N: usize> Div<T> for $Ty<T, N> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                let mut out = self;
                ops::divide(&mut out, rhs);
                out
            }
        }

        impl<T: Scalar, const N: usize> Div<T> for &$Ty<T, N> {
            type Output = $Ty<T, N>;

            fn div(self, rhs: T) -> $Ty<T, N> {
                (*self).div(rhs)
            }
        }

        impl<T: Scalar, const N: usize> DivAssign<T> for $Ty<T, N> {
            fn div_assign(&mut self, rhs: T) {
                ops::divide(self, rhs);
            }
        }

        forward_ref_binop!($Ty, Add, add);
        forward_ref_binop!($Ty, Sub, sub);
    };
}

impl_slotwise_ops!(FixedMatrix);
impl_slotwise_ops!(FixedVector);

// ── Matrix products ─────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Mul for FixedMatrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        ops::mult(&self, &rhs, &mut out);
        out
    }
}

impl<T: Scalar, const N: usize> Mul<&FixedMatrix<T, N>> for &FixedMatrix<T, N> {
    type Output = FixedMatrix<T, N>;

    fn mul(self, rhs: &FixedMatrix<T, N>) -> FixedMatrix<T, N> {
        let mut out = FixedMatrix::zeros();
        ops::mult(self, rhs, &mut out);
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign for FixedMatrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = *self;
        ops::mult(&lhs, &rhs, self);
    }
}

impl<T: Scalar, const N: usize> Mul<FixedVector<T, N>> for FixedMatrix<T, N> {
    type Output = FixedVector<T, N>;

    fn mul(self, rhs: FixedVector<T, N>) -> FixedVector<T, N> {
        let mut out = FixedVector::zeros();
        ops::mult_vec(&self, &rhs, &mut out);
        out
    }
}

impl<T: Scalar, const N: usize> Mul<&FixedVector<T, N>> for &FixedMatrix<T, N> {
    type Output = FixedVector<T, N>;

    fn mul(self, rhs: &FixedVector<T, N>) -> FixedVector<T, N> {
        let mut out = FixedVector::zeros();
        ops::mult_vec(self, rhs, &mut out);
        out
    }
}

// ── scalar * value (concrete impls to avoid orphan rules) ───────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<FixedMatrix<$t, N>> for $t {
                type Output = FixedMatrix<$t, N>;

                fn mul(self, rhs: FixedMatrix<$t, N>) -> FixedMatrix<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<FixedVector<$t, N>> for $t {
                type Output = FixedVector<$t, N>;

                fn mul(self, rhs: FixedVector<$t, N>) -> FixedVector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl<T: Scalar, const N: usize> FixedMatrix<T, N> {
    /// Transposed copy.
    ///
    /// ```
    /// use fixmat::FixedMatrix;
    /// let m = FixedMatrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.transpose(), FixedMatrix::new([[1, 3], [2, 4]]));
    /// ```
    #[inline]
    pub fn transpose(&self) -> Self {
        ops::transpose(self)
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> T {
        ops::trace(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = FixedMatrix::new([[5.0, 6.0], [7.0, 8.0]]);

        let c = a + b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);

        let d = b - a;
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);

        assert_eq!(&a + &b, c);
        assert_eq!(&b - a, d);
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = FixedMatrix::new([[5.0, 6.0], [7.0, 8.0]]);

        a += b;
        assert_eq!(a[(0, 0)], 6.0);

        a -= &b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn negation() {
        let a = FixedMatrix::new([[1.0, -2.0], [3.0, -4.0]]);
        let b = -a;
        assert_eq!(b[(0, 0)], -1.0);
        assert_eq!(b[(0, 1)], 2.0);
        assert_eq!(-&a, b);
    }

    #[test]
    fn scalar_ops() {
        let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!((a * 2.0)[(1, 1)], 8.0);
        assert_eq!((a / 2.0)[(0, 1)], 1.0);

        let mut b = a;
        b *= 3.0;
        b /= 3.0;
        assert_eq!(b, a);
    }

    #[test]
    fn matrix_products() {
        let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = FixedMatrix::new([[5.0, 6.0], [7.0, 8.0]]);
        let c = a * b;
        assert_eq!(c, FixedMatrix::new([[19.0, 22.0], [43.0, 50.0]]));
        assert_eq!(&a * &b, c);

        let mut d = a;
        d *= b;
        assert_eq!(d, c);

        let v = FixedVector::new([1.0, 1.0]);
        assert_eq!(a * v, FixedVector::new([3.0, 7.0]));
        assert_eq!(&a * &v, FixedVector::new([3.0, 7.0]));
    }

    #[test]
    fn vector_ops() {
        let u = FixedVector::new([1, 2, 3]);
        let v = FixedVector::new([3, 2, 1]);
        assert_eq!(u + v, FixedVector::filled(4));
        assert_eq!(u - u, FixedVector::zeros());
        assert_eq!(-u, FixedVector::new([-1, -2, -3]));
        assert_eq!(2 * u, FixedVector::new([2, 4, 6]));
    }

    #[test]
    fn transpose_and_trace() {
        let m = FixedMatrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.transpose()[(0, 2)], 7.0);
        assert_eq!(m.trace(), 15.0);
    }
}
