//! Closed-form determinant, inverse and Cholesky factorization.
//!
//! Kernels report numerical failure through a `bool` and never panic. The
//! convenience methods on [`FixedMatrix`](crate::FixedMatrix) (`inverse`,
//! `cholesky`) turn that into a [`LinalgError`].

mod cholesky;
mod cofactor;

pub use cholesky::{chol_lower, chol_upper};
pub use cofactor::{adjugate, cofactors, det, invert};

/// Errors from linear algebra operations.
///
/// Returned by the convenience methods `inverse` and `cholesky`.
///
/// ```
/// use fixmat::FixedMatrix;
/// use fixmat::linalg::LinalgError;
///
/// let singular = FixedMatrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
///
/// let not_pd = FixedMatrix::new([[1.0_f64, 5.0], [5.0, 1.0]]);
/// assert_eq!(not_pd.cholesky().unwrap_err(), LinalgError::NotPositiveDefinite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Determinant is zero, NaN, or infinite.
    Singular,
    /// Matrix is not positive definite (required for Cholesky).
    NotPositiveDefinite,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::NotPositiveDefinite => write!(f, "matrix is not positive definite"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(LinalgError::Singular.to_string(), "matrix is singular");
        assert_eq!(
            LinalgError::NotPositiveDefinite.to_string(),
            "matrix is not positive definite"
        );
    }
}
