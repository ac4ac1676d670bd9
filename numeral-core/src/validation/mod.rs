//! Validation utilities
//!
//! Pure checks on indices, sizes and format strings with no side effects.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_index, check_indices, check_matrix_size, check_same_len, check_same_size};
pub use parsing::{parse_cell_spec, split_format};
