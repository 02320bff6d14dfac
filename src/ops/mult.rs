//! Matrix and vector products computed straight from the defining sums.
//!
//! Outputs are always `&mut` next to `&` inputs, so an output can never alias
//! an input. Each output slot is an accumulated sum over input slots, and an
//! aliased input would be overwritten halfway through.

use crate::traits::Scalar;
use crate::{FixedMatrix, FixedVector};

/// Which operands enter the product transposed.
#[derive(Clone, Copy)]
enum Layout {
    Plain,
    TransA,
    TransB,
    TransAB,
}

/// `Σ_k op(A)[i,k]·op(B)[k,j]`, accumulated left to right.
#[inline(always)]
fn entry<T: Scalar, const N: usize>(
    layout: Layout,
    a: &[[T; N]; N],
    b: &[[T; N]; N],
    i: usize,
    j: usize,
) -> T {
    let mut sum = T::zero();
    for k in 0..N {
        let (x, y) = match layout {
            Layout::Plain => (a[i][k], b[k][j]),
            Layout::TransA => (a[k][i], b[k][j]),
            Layout::TransB => (a[i][k], b[j][k]),
            Layout::TransAB => (a[k][i], b[j][k]),
        };
        sum = sum + x * y;
    }
    sum
}

#[inline(always)]
fn product<T: Scalar, const N: usize>(
    layout: Layout,
    a: &FixedMatrix<T, N>,
    b: &FixedMatrix<T, N>,
    c: &mut FixedMatrix<T, N>,
    write: impl Fn(T, T) -> T,
) {
    for i in 0..N {
        for j in 0..N {
            let sum = entry(layout, &a.data, &b.data, i, j);
            c.data[i][j] = write(c.data[i][j], sum);
        }
    }
}

macro_rules! product_variants {
    ($layout:ident, $formula:literal, $set:ident, $set_scaled:ident, $add:ident, $add_scaled:ident) => {
        #[doc = concat!("`C = ", $formula, "`")]
        pub fn $set<T: Scalar, const N: usize>(
            a: &FixedMatrix<T, N>,
            b: &FixedMatrix<T, N>,
            c: &mut FixedMatrix<T, N>,
        ) {
            product(Layout::$layout, a, b, c, |_, sum| sum);
        }

        #[doc = concat!("`C = α·", $formula, "`")]
        pub fn $set_scaled<T: Scalar, const N: usize>(
            alpha: T,
            a: &FixedMatrix<T, N>,
            b: &FixedMatrix<T, N>,
            c: &mut FixedMatrix<T, N>,
        ) {
            product(Layout::$layout, a, b, c, |_, sum| alpha * sum);
        }

        #[doc = concat!("`C = C + ", $formula, "`")]
        pub fn $add<T: Scalar, const N: usize>(
            a: &FixedMatrix<T, N>,
            b: &FixedMatrix<T, N>,
            c: &mut FixedMatrix<T, N>,
        ) {
            product(Layout::$layout, a, b, c, |old, sum| old + sum);
        }

        #[doc = concat!("`C = C + α·", $formula, "`")]
        pub fn $add_scaled<T: Scalar, const N: usize>(
            alpha: T,
            a: &FixedMatrix<T, N>,
            b: &FixedMatrix<T, N>,
            c: &mut FixedMatrix<T, N>,
        ) {
            product(Layout::$layout, a, b, c, |old, sum| old + alpha * sum);
        }
    };
}

product_variants!(Plain, "A·B", mult, mult_scaled, mult_add, mult_add_scaled);
product_variants!(
    TransA,
    "Aᵀ·B",
    mult_trans_a,
    mult_trans_a_scaled,
    mult_add_trans_a,
    mult_add_trans_a_scaled
);
product_variants!(
    TransB,
    "A·Bᵀ",
    mult_trans_b,
    mult_trans_b_scaled,
    mult_add_trans_b,
    mult_add_trans_b_scaled
);
product_variants!(
    TransAB,
    "Aᵀ·Bᵀ",
    mult_trans_ab,
    mult_trans_ab_scaled,
    mult_add_trans_ab,
    mult_add_trans_ab_scaled
);

/// Matrix times column vector: `w[i] = Σ_k A[i,k]·v[k]`.
///
/// ```
/// use fixmat::{ops, FixedMatrix, FixedVector};
/// let a = FixedMatrix::new([[2.0, 1.0], [5.0, 3.0]]);
/// let v = FixedVector::new([1.0, 2.0]);
/// let mut w = FixedVector::zeros();
/// ops::mult_vec(&a, &v, &mut w);
/// assert_eq!(w, FixedVector::new([4.0, 11.0]));
/// ```
pub fn mult_vec<T: Scalar, const N: usize>(
    a: &FixedMatrix<T, N>,
    v: &FixedVector<T, N>,
    w: &mut FixedVector<T, N>,
) {
    for i in 0..N {
        let mut sum = T::zero();
        for k in 0..N {
            sum = sum + a.data[i][k] * v.data[k];
        }
        w.data[i] = sum;
    }
}

/// Row vector times matrix: `w[j] = Σ_k v[k]·A[k,j]`.
pub fn vec_mult<T: Scalar, const N: usize>(
    v: &FixedVector<T, N>,
    a: &FixedMatrix<T, N>,
    w: &mut FixedVector<T, N>,
) {
    for j in 0..N {
        let mut sum = T::zero();
        for k in 0..N {
            sum = sum + v.data[k] * a.data[k][j];
        }
        w.data[j] = sum;
    }
}

/// Dot product: `Σ_k u[k]·v[k]`.
pub fn dot<T: Scalar, const N: usize>(u: &FixedVector<T, N>, v: &FixedVector<T, N>) -> T {
    let mut sum = T::zero();
    for k in 0..N {
        sum = sum + u.data[k] * v.data[k];
    }
    sum
}

/// Rank-one update: `C = α·A + β·u·vᵀ`.
///
/// Writes each slot from the matching slot of `A` only, so
/// [`mult_add_outer_in_place`] covers the case where `C` is `A`.
pub fn mult_add_outer<T: Scalar, const N: usize>(
    alpha: T,
    a: &FixedMatrix<T, N>,
    beta: T,
    u: &FixedVector<T, N>,
    v: &FixedVector<T, N>,
    c: &mut FixedMatrix<T, N>,
) {
    for i in 0..N {
        for j in 0..N {
            c.data[i][j] = alpha * a.data[i][j] + beta * u.data[i] * v.data[j];
        }
    }
}

/// Rank-one update in place: `C = α·C + β·u·vᵀ`.
pub fn mult_add_outer_in_place<T: Scalar, const N: usize>(
    alpha: T,
    c: &mut FixedMatrix<T, N>,
    beta: T,
    u: &FixedVector<T, N>,
    v: &FixedVector<T, N>,
) {
    for i in 0..N {
        for j in 0..N {
            c.data[i][j] = alpha * c.data[i][j] + beta * u.data[i] * v.data[j];
        }
    }
}
