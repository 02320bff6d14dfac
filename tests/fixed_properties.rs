use fixmat::{linalg, ops, FixedMatrix, FixedVector, LinalgError};

// ── Per-size, per-precision properties ───────────────────────────────
// Every property runs for N = 2..=6 in both f64 and f32.

macro_rules! fixed_size_properties {
    ($name:ident, $t:ty, $n:literal, $tol:expr, $big:expr, $small:expr) => {
        mod $name {
            use super::*;

            type M = FixedMatrix<$t, $n>;

            const TOL: $t = $tol;

            fn sample() -> M {
                FixedMatrix::from_fn(|i, j| ((i * 7 + j * 3) % 5) as $t - 2.5)
            }

            fn dominant() -> M {
                FixedMatrix::from_fn(|i, j| {
                    if i == j {
                        8.0 + i as $t
                    } else {
                        1.0 / (1 + i + 2 * j) as $t
                    }
                })
            }

            // Row `dst` overwritten with row `src`.
            fn duplicated(src: usize, dst: usize) -> M {
                let mut a = dominant();
                for j in 0..$n {
                    a[(dst, j)] = a[(src, j)];
                }
                a
            }

            // Last two rows equal: every expansion bottoms out at an
            // exactly-zero minor, so even the unscaled `det` is exact.
            fn singular() -> M {
                duplicated($n - 2, $n - 1)
            }

            fn assert_near(a: &M, b: &M, tol: $t) {
                for i in 0..$n {
                    for j in 0..$n {
                        assert!(
                            (a[(i, j)] - b[(i, j)]).abs() < tol,
                            "mismatch at ({},{}): {} vs {}",
                            i,
                            j,
                            a[(i, j)],
                            b[(i, j)]
                        );
                    }
                }
            }

            #[test]
            fn identity_product_is_exact() {
                let a = sample();
                let id = M::identity();
                let mut c = M::zeros();
                ops::mult(&id, &a, &mut c);
                assert_eq!(c, a);
                ops::mult(&a, &id, &mut c);
                assert_eq!(c, a);
            }

            #[test]
            fn transpose_is_involution() {
                let a = sample();
                assert_eq!(ops::transpose(&ops::transpose(&a)), a);
                let mut b = a;
                ops::transpose_in_place(&mut b);
                ops::transpose_in_place(&mut b);
                assert_eq!(b, a);
            }

            #[test]
            fn trans_a_matches_explicit_transpose() {
                let (a, b) = (sample(), dominant());
                let mut expected = M::zeros();
                ops::mult(&ops::transpose(&a), &b, &mut expected);
                let mut found = M::zeros();
                ops::mult_trans_a(&a, &b, &mut found);
                assert_eq!(found, expected);
            }

            #[test]
            fn det_of_identity_is_one() {
                assert_eq!(linalg::det(&M::identity()), 1.0);
            }

            #[test]
            fn inverse_round_trip() {
                let a = dominant();
                let mut inv = M::zeros();
                assert!(linalg::invert(&a, &mut inv));

                let mut prod = M::zeros();
                ops::mult(&a, &inv, &mut prod);
                assert_near(&prod, &M::identity(), TOL);
                ops::mult(&inv, &a, &mut prod);
                assert_near(&prod, &M::identity(), TOL);

                assert_eq!(a.inverse(), Ok(inv));
            }

            #[test]
            fn singular_is_rejected_at_any_scale() {
                let base = singular();
                assert_eq!(linalg::det(&base), 0.0);

                let mut inv = M::zeros();
                for s in [1.0 as $t, $big, $small] {
                    let a = base * s;
                    assert!(!linalg::invert(&a, &mut inv), "scale {} reported invertible", s);
                    assert_eq!(a.inverse(), Err(LinalgError::Singular));
                }
            }

            #[test]
            fn any_identical_row_pair_is_rejected_at_any_scale() {
                let mut inv = M::zeros();
                for i in 0..$n {
                    for j in (i + 1)..$n {
                        for (src, dst) in [(i, j), (j, i)] {
                            let base = duplicated(src, dst);
                            for s in [1.0 as $t, $big, $small] {
                                let a = base * s;
                                assert!(
                                    !linalg::invert(&a, &mut inv),
                                    "rows {} and {} equal at scale {} reported invertible",
                                    i,
                                    j,
                                    s
                                );
                                assert_eq!(a.inverse(), Err(LinalgError::Singular));
                            }
                        }
                    }
                }
            }

            #[test]
            fn zero_matrix_is_rejected() {
                let mut inv = M::zeros();
                assert!(!linalg::invert(&M::zeros(), &mut inv));
            }

            #[test]
            fn cholesky_reconstructs() {
                let d = dominant();
                let mut spd = M::zeros();
                ops::mult_trans_b(&d, &d, &mut spd);
                let tol = TOL * ops::element_max_abs(&spd);

                let mut l = spd;
                assert!(linalg::chol_lower(&mut l));
                let mut llt = M::zeros();
                ops::mult_trans_b(&l, &l, &mut llt);
                assert_near(&llt, &spd, tol);

                let mut u = spd;
                assert!(linalg::chol_upper(&mut u));
                let mut utu = M::zeros();
                ops::mult_trans_a(&u, &u, &mut utu);
                assert_near(&utu, &spd, tol);

                assert_eq!(spd.cholesky(), Ok(l));
            }

            #[test]
            fn cholesky_rejects_indefinite() {
                let a = -M::identity();
                assert_eq!(a.cholesky(), Err(LinalgError::NotPositiveDefinite));
                let mut l = a;
                assert!(!linalg::chol_lower(&mut l));
            }

            #[test]
            fn vector_products_agree_with_transpose() {
                let a = sample();
                let v = FixedVector::<$t, $n>::from_fn(|i| i as $t - 1.0);
                let mut left = FixedVector::zeros();
                ops::vec_mult(&v, &a, &mut left);
                let mut right = FixedVector::zeros();
                ops::mult_vec(&ops::transpose(&a), &v, &mut right);
                assert_eq!(left, right);
            }

            #[cfg(feature = "alloc")]
            #[test]
            fn dyn_round_trip() {
                let a = sample();
                let d = fixmat::DynMatrix::from(&a);
                assert_eq!((d.nrows(), d.ncols()), ($n, $n));
                let back = M::try_from(&d).unwrap();
                assert_eq!(back, a);

                let v = a.row(0);
                let dv = fixmat::DynMatrix::from(v);
                assert_eq!(FixedVector::<$t, $n>::try_from(&dv), Ok(v));
            }
        }
    };
}

fixed_size_properties!(f64_2, f64, 2, 1e-10, 1e200, 1e-200);
fixed_size_properties!(f64_3, f64, 3, 1e-10, 1e200, 1e-200);
fixed_size_properties!(f64_4, f64, 4, 1e-10, 1e200, 1e-200);
fixed_size_properties!(f64_5, f64, 5, 1e-10, 1e200, 1e-200);
fixed_size_properties!(f64_6, f64, 6, 1e-10, 1e200, 1e-200);

fixed_size_properties!(f32_2, f32, 2, 1e-4, 1e30, 1e-30);
fixed_size_properties!(f32_3, f32, 3, 1e-4, 1e30, 1e-30);
fixed_size_properties!(f32_4, f32, 4, 1e-4, 1e30, 1e-30);
fixed_size_properties!(f32_5, f32, 5, 1e-4, 1e30, 1e-30);
fixed_size_properties!(f32_6, f32, 6, 1e-4, 1e30, 1e-30);

// ── Named scenarios ──────────────────────────────────────────────────

#[test]
fn diagonal_2x2() {
    let a = FixedMatrix::new([[2.0_f64, 0.0], [0.0, 2.0]]);
    assert_eq!(a.det(), 4.0);
    assert_eq!(a.inverse().unwrap(), FixedMatrix::new([[0.5, 0.0], [0.0, 0.5]]));

    let a = FixedMatrix::new([[2.0_f32, 0.0], [0.0, 2.0]]);
    assert_eq!(a.det(), 4.0);
    assert_eq!(a.inverse().unwrap(), FixedMatrix::new([[0.5, 0.0], [0.0, 0.5]]));
}

#[test]
fn row_swap_3x3() {
    let p = FixedMatrix::new([[0.0_f64, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(p.det(), -1.0);
    assert_eq!(p.inverse().unwrap(), p);
}

#[test]
fn identical_rows_3x3() {
    let a = FixedMatrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [4.0, 5.0, 6.0]]);
    assert!(a.det().abs() < 1e-12);
    let mut inv = FixedMatrix::zeros();
    assert!(!linalg::invert(&a, &mut inv));

    let a = FixedMatrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.1], [1.0, 2.0, 3.0]]);
    assert!(a.det().abs() < 1e-12);
    assert!(!linalg::invert(&a, &mut inv));
    assert_eq!(a.inverse(), Err(LinalgError::Singular));
}

#[test]
fn operators_match_kernels() {
    let a = FixedMatrix::new([[1.0_f64, 2.0, 0.5], [3.0, -1.0, 2.0], [0.0, 4.0, 1.0]]);
    let b = a.transpose() * 0.5;

    let mut sum = FixedMatrix::zeros();
    ops::add(&a, &b, &mut sum);
    assert_eq!(a + b, sum);

    let mut prod = FixedMatrix::zeros();
    ops::mult(&a, &b, &mut prod);
    assert_eq!(a * b, prod);

    let mut outer = a;
    let u = FixedVector::new([1.0, 0.0, -1.0]);
    ops::mult_add_outer_in_place(1.0, &mut outer, 2.0, &u, &u);
    assert_eq!(outer[(0, 2)], a[(0, 2)] - 2.0);
    assert_eq!(outer[(1, 1)], a[(1, 1)]);
}
