//! Slot-wise kernels shared by matrices and vectors.
//!
//! Every function here touches each slot independently, so the in-place forms
//! (`*_equals`, or the single-argument overloads) are the aliasing-safe way to
//! write a result back into one of the inputs.

use core::ops::Neg;

use crate::traits::{FixedStorage, Scalar};

#[inline]
fn zip_into<S: FixedStorage>(a: &S, b: &S, c: &mut S, f: impl Fn(S::Elem, S::Elem) -> S::Elem) {
    for ((c, &a), &b) in c.as_flat_mut().iter_mut().zip(a.as_flat()).zip(b.as_flat()) {
        *c = f(a, b);
    }
}

#[inline]
fn zip_in_place<S: FixedStorage>(a: &mut S, b: &S, f: impl Fn(S::Elem, S::Elem) -> S::Elem) {
    for (a, &b) in a.as_flat_mut().iter_mut().zip(b.as_flat()) {
        *a = f(*a, b);
    }
}

#[inline]
fn map_into<S: FixedStorage>(a: &S, b: &mut S, f: impl Fn(S::Elem) -> S::Elem) {
    for (b, &a) in b.as_flat_mut().iter_mut().zip(a.as_flat()) {
        *b = f(a);
    }
}

#[inline]
fn map_in_place<S: FixedStorage>(a: &mut S, f: impl Fn(S::Elem) -> S::Elem) {
    for a in a.as_flat_mut() {
        *a = f(*a);
    }
}

/// `c = a + b`
///
/// ```
/// use fixmat::{ops, FixedMatrix};
/// let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// let b = FixedMatrix::new([[5.0, 6.0], [7.0, 8.0]]);
/// let mut c = FixedMatrix::zeros();
/// ops::add(&a, &b, &mut c);
/// assert_eq!(c, FixedMatrix::new([[6.0, 8.0], [10.0, 12.0]]));
/// ```
pub fn add<T: Scalar, S: FixedStorage<Elem = T>>(a: &S, b: &S, c: &mut S) {
    zip_into(a, b, c, |x, y| x + y);
}

/// `a = a + b`
pub fn add_equals<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, b: &S) {
    zip_in_place(a, b, |x, y| x + y);
}

/// `c = a - b`
pub fn subtract<T: Scalar, S: FixedStorage<Elem = T>>(a: &S, b: &S, c: &mut S) {
    zip_into(a, b, c, |x, y| x - y);
}

/// `a = a - b`
pub fn subtract_equals<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, b: &S) {
    zip_in_place(a, b, |x, y| x - y);
}

/// `a = α·a`
pub fn scale<T: Scalar, S: FixedStorage<Elem = T>>(alpha: T, a: &mut S) {
    map_in_place(a, |x| alpha * x);
}

/// `b = α·a`
pub fn scale_into<T: Scalar, S: FixedStorage<Elem = T>>(alpha: T, a: &S, b: &mut S) {
    map_into(a, b, |x| alpha * x);
}

/// `a = a / α`
///
/// No zero check: dividing by zero yields infinities or NaN per IEEE-754.
pub fn divide<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, alpha: T) {
    map_in_place(a, |x| x / alpha);
}

/// `b = a / α`
pub fn divide_into<T: Scalar, S: FixedStorage<Elem = T>>(a: &S, alpha: T, b: &mut S) {
    map_into(a, b, |x| x / alpha);
}

/// Hadamard product in place: `a[i] = a[i]·b[i]`.
pub fn element_mult<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, b: &S) {
    zip_in_place(a, b, |x, y| x * y);
}

/// Hadamard product: `c[i] = a[i]·b[i]`.
pub fn element_mult_into<T: Scalar, S: FixedStorage<Elem = T>>(a: &S, b: &S, c: &mut S) {
    zip_into(a, b, c, |x, y| x * y);
}

/// Elementwise quotient in place: `a[i] = a[i] / b[i]`.
pub fn element_div<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, b: &S) {
    zip_in_place(a, b, |x, y| x / y);
}

/// Elementwise quotient: `c[i] = a[i] / b[i]`.
pub fn element_div_into<T: Scalar, S: FixedStorage<Elem = T>>(a: &S, b: &S, c: &mut S) {
    zip_into(a, b, c, |x, y| x / y);
}

/// Set every slot to `v`.
pub fn fill<T: Scalar, S: FixedStorage<Elem = T>>(a: &mut S, v: T) {
    a.as_flat_mut().fill(v);
}

/// Negate every slot.
pub fn change_sign<T: Scalar + Neg<Output = T>, S: FixedStorage<Elem = T>>(a: &mut S) {
    map_in_place(a, |x| -x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedMatrix, FixedVector};

    fn a3() -> FixedMatrix<f64, 3> {
        FixedMatrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn add_and_add_equals_agree() {
        let a = a3();
        let b = FixedMatrix::filled(0.5);
        let mut c = FixedMatrix::zeros();
        add(&a, &b, &mut c);

        let mut d = a;
        add_equals(&mut d, &b);
        assert_eq!(c, d);
        assert_eq!(c[(2, 1)], 8.5);
    }

    #[test]
    fn subtract_matrix() {
        let a = a3();
        let mut c = FixedMatrix::zeros();
        subtract(&a, &a, &mut c);
        assert_eq!(c, FixedMatrix::zeros());

        let mut d = a;
        subtract_equals(&mut d, &FixedMatrix::identity());
        assert_eq!(d[(0, 0)], 0.0);
        assert_eq!(d[(0, 1)], 2.0);
    }

    #[test]
    fn scale_and_divide() {
        let mut a = a3();
        scale(2.0, &mut a);
        assert_eq!(a[(1, 2)], 12.0);

        let mut b = FixedMatrix::zeros();
        divide_into(&a, 2.0, &mut b);
        assert_eq!(b, a3());

        divide(&mut a, 4.0);
        assert_eq!(a[(2, 2)], 4.5);

        let mut s = FixedMatrix::zeros();
        scale_into(-1.0, &a3(), &mut s);
        assert_eq!(s[(0, 2)], -3.0);
    }

    #[test]
    fn divide_by_zero_propagates() {
        let mut v = FixedVector::new([1.0_f64, -1.0, 0.0]);
        divide(&mut v, 0.0);
        assert_eq!(v[0], f64::INFINITY);
        assert_eq!(v[1], f64::NEG_INFINITY);
        assert!(v[2].is_nan());
    }

    #[test]
    fn hadamard() {
        let a = a3();
        let mut c = FixedMatrix::zeros();
        element_mult_into(&a, &a, &mut c);
        assert_eq!(c[(2, 2)], 81.0);

        let mut d = c;
        element_div(&mut d, &a);
        assert_eq!(d, a);

        let mut e = FixedMatrix::zeros();
        element_div_into(&c, &a, &mut e);
        assert_eq!(e, a);

        let mut f = a;
        element_mult(&mut f, &FixedMatrix::filled(2.0));
        assert_eq!(f[(1, 0)], 8.0);
    }

    #[test]
    fn fill_and_change_sign() {
        let mut a = a3();
        change_sign(&mut a);
        assert_eq!(a[(0, 0)], -1.0);
        assert_eq!(a[(2, 2)], -9.0);

        fill(&mut a, 3.0);
        assert_eq!(a, FixedMatrix::filled(3.0));
    }

    #[test]
    fn vector_ops() {
        let a = FixedVector::new([1.0_f32, 2.0, 3.0, 4.0]);
        let b = FixedVector::new([4.0_f32, 3.0, 2.0, 1.0]);
        let mut c = FixedVector::zeros();
        add(&a, &b, &mut c);
        assert_eq!(c, FixedVector::filled(5.0));

        let mut d = a;
        element_mult(&mut d, &b);
        assert_eq!(d, FixedVector::new([4.0, 6.0, 6.0, 4.0]));
    }

    #[test]
    fn integer_add() {
        let a: FixedMatrix<i64, 2> = FixedMatrix::identity();
        let mut b = a;
        add_equals(&mut b, &a);
        assert_eq!(b[(1, 1)], 2);
        assert_eq!(b[(0, 1)], 0);
    }
}
