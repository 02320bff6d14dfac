//! # fixmat
//!
//! Allocation-free kernels for square matrices and vectors whose size (2
//! through 6) is fixed at compile time. no-std compatible, suitable for
//! embedded targets.
//!
//! ## Quick start
//!
//! ```
//! use fixmat::{FixedMatrix, FixedVector};
//!
//! let a = FixedMatrix::new([
//!     [4.0_f64, 1.0, 0.0],
//!     [1.0, 3.0, 1.0],
//!     [0.0, 1.0, 2.0],
//! ]);
//! let inv = a.inverse().unwrap();
//! let x = inv * FixedVector::new([1.0, 2.0, 3.0]);
//! let b = a * x;
//! assert!((b[2] - 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] : [`FixedMatrix<T, N>`] with row-major `[[T; N]; N]`
//!   storage and [`FixedVector<T, N>`]. Constructors, indexing, operator
//!   overloads, and aliases such as [`FixedMatrix4f64`].
//!
//! - [`ops`] : Free-function kernels writing into caller-supplied outputs:
//!   elementwise arithmetic, transpose, the multiply family (plain,
//!   transposed, scaled, accumulating, rank-one update), and reductions.
//!
//! - [`linalg`] : Closed-form determinant and inverse by cofactor expansion
//!   with scale normalization, adjugate, and Cholesky factorization.
//!   Kernels return `bool`; the `inverse` / `cholesky` methods return
//!   `Result<_, LinalgError>`.
//!
//! - [`dynmatrix`] : Runtime-sized row-major [`DynMatrix<T>`] for handing
//!   data to and from general dense code (requires `alloc`, included with
//!   `std`).
//!
//! - [`traits`] : Element trait hierarchy:
//!   - [`Scalar`] : all elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] : real floats (`Scalar + Float`), used by inverse,
//!     Cholesky, and element extremes
//!   - [`MatrixRef`] / [`MatrixMut`] : generic read/write access
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | `DynMatrix` conversion boundary |
//! | `all`     | no       | All features |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod matrix;
pub mod ops;
pub mod traits;

pub use matrix::aliases::{
    FixedMatrix2, FixedMatrix2f32, FixedMatrix2f64, FixedMatrix3, FixedMatrix3f32,
    FixedMatrix3f64, FixedMatrix4, FixedMatrix4f32, FixedMatrix4f64, FixedMatrix5,
    FixedMatrix5f32, FixedMatrix5f64, FixedMatrix6, FixedMatrix6f32, FixedMatrix6f64,
    FixedVector2, FixedVector2f32, FixedVector2f64, FixedVector3, FixedVector3f32,
    FixedVector3f64, FixedVector4, FixedVector4f32, FixedVector4f64, FixedVector5,
    FixedVector5f32, FixedVector5f64, FixedVector6, FixedVector6f32, FixedVector6f64,
};
pub use matrix::{FixedMatrix, FixedVector, MAX_DIM, MIN_DIM};
#[cfg(feature = "alloc")]
pub use dynmatrix::{DimensionMismatch, DynMatrix};
pub use linalg::LinalgError;
pub use traits::{FixedStorage, FloatScalar, MatrixMut, MatrixRef, Scalar};
