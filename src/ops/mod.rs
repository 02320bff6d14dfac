//! Free-function kernels over [`FixedMatrix`](crate::FixedMatrix) and
//! [`FixedVector`](crate::FixedVector).
//!
//! Results go into a caller-supplied `&mut` output or back into the first
//! argument (the `*_equals` / `*_in_place` forms). None of them allocate.
//!
//! ```
//! use fixmat::{ops, FixedMatrix};
//!
//! let a = FixedMatrix::new([[1.0, 2.0], [3.0, 4.0]]);
//! let mut c = FixedMatrix::zeros();
//! ops::mult_trans_a(&a, &a, &mut c); // Aᵀ·A
//! assert_eq!(c, FixedMatrix::new([[10.0, 14.0], [14.0, 20.0]]));
//! ```

mod elementwise;
mod mult;
mod reduce;
mod transpose;

pub use elementwise::{
    add, add_equals, change_sign, divide, divide_into, element_div, element_div_into,
    element_mult, element_mult_into, fill, scale, scale_into, subtract, subtract_equals,
};
pub use mult::{
    dot, mult, mult_add, mult_add_outer, mult_add_outer_in_place, mult_add_scaled,
    mult_add_trans_a, mult_add_trans_a_scaled, mult_add_trans_ab, mult_add_trans_ab_scaled,
    mult_add_trans_b, mult_add_trans_b_scaled, mult_scaled, mult_trans_a, mult_trans_a_scaled,
    mult_trans_ab, mult_trans_ab_scaled, mult_trans_b, mult_trans_b_scaled, mult_vec, vec_mult,
};
pub use reduce::{
    diag, element_max, element_max_abs, element_min, element_min_abs, extract_column,
    extract_row, set_identity, trace,
};
pub use transpose::{transpose, transpose_in_place, transpose_into};
