//! Pre-defined type aliases for the supported sizes and both float precisions.

use crate::matrix::{FixedMatrix, FixedVector};

// ── Generic-element aliases ─────────────────────────────────────────

/// 2×2 matrix.
pub type FixedMatrix2<T> = FixedMatrix<T, 2>;
/// 3×3 matrix.
pub type FixedMatrix3<T> = FixedMatrix<T, 3>;
/// 4×4 matrix.
pub type FixedMatrix4<T> = FixedMatrix<T, 4>;
/// 5×5 matrix.
pub type FixedMatrix5<T> = FixedMatrix<T, 5>;
/// 6×6 matrix.
pub type FixedMatrix6<T> = FixedMatrix<T, 6>;

/// 2-element vector.
pub type FixedVector2<T> = FixedVector<T, 2>;
/// 3-element vector.
pub type FixedVector3<T> = FixedVector<T, 3>;
/// 4-element vector.
pub type FixedVector4<T> = FixedVector<T, 4>;
/// 5-element vector.
pub type FixedVector5<T> = FixedVector<T, 5>;
/// 6-element vector.
pub type FixedVector6<T> = FixedVector<T, 6>;

// ── Precision-specific aliases ──────────────────────────────────────

/// 2×2 `f64` matrix.
pub type FixedMatrix2f64 = FixedMatrix<f64, 2>;
/// 3×3 `f64` matrix.
pub type FixedMatrix3f64 = FixedMatrix<f64, 3>;
/// 4×4 `f64` matrix.
pub type FixedMatrix4f64 = FixedMatrix<f64, 4>;
/// 5×5 `f64` matrix.
pub type FixedMatrix5f64 = FixedMatrix<f64, 5>;
/// 6×6 `f64` matrix.
pub type FixedMatrix6f64 = FixedMatrix<f64, 6>;

/// 2-element `f64` vector.
pub type FixedVector2f64 = FixedVector<f64, 2>;
/// 3-element `f64` vector.
pub type FixedVector3f64 = FixedVector<f64, 3>;
/// 4-element `f64` vector.
pub type FixedVector4f64 = FixedVector<f64, 4>;
/// 5-element `f64` vector.
pub type FixedVector5f64 = FixedVector<f64, 5>;
/// 6-element `f64` vector.
pub type FixedVector6f64 = FixedVector<f64, 6>;

/// 2×2 `f32` matrix.
pub type FixedMatrix2f32 = FixedMatrix<f32, 2>;
/// 3×3 `f32` matrix.
pub type FixedMatrix3f32 = FixedMatrix<f32, 3>;
/// 4×4 `f32` matrix.
pub type FixedMatrix4f32 = FixedMatrix<f32, 4>;
/// 5×5 `f32` matrix.
pub type FixedMatrix5f32 = FixedMatrix<f32, 5>;
/// 6×6 `f32` matrix.
pub type FixedMatrix6f32 = FixedMatrix<f32, 6>;

/// 2-element `f32` vector.
pub type FixedVector2f32 = FixedVector<f32, 2>;
/// 3-element `f32` vector.
pub type FixedVector3f32 = FixedVector<f32, 3>;
/// 4-element `f32` vector.
pub type FixedVector4f32 = FixedVector<f32, 4>;
/// 5-element `f32` vector.
pub type FixedVector5f32 = FixedVector<f32, 5>;
/// 6-element `f32` vector.
pub type FixedVector6f32 = FixedVector<f32, 6>;
