//! Views: non-owning structures resolved against a base on every access
//!
//! A view holds its base by value, where the base is normally a borrow:
//! `&S` yields a read-only view that clones into another view of the
//! same base, `&mut S` yields a view that can write through when the
//! base is mutable. Views never cache, so they observe live changes.

pub mod cast;
pub mod line;
pub mod mapped;
pub mod transpose;

pub use cast::{CastMatrix, CastVector};
pub use line::{Axis, MatrixLine};
pub use mapped::{MappedMatrix, MappedVector};
pub use transpose::TransposedMatrix;
