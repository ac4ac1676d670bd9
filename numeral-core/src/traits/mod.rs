//! Abstract interfaces for numerals and numeric structures
//!
//! This module defines all trait abstractions used across the workspace.
//! Apart from the element implementations for the built-in
//! representations, traits here are pure interfaces.

pub mod boxed;
pub mod capability;
pub mod element;
pub mod matrix;
pub mod vector;

pub use boxed::{BoxedMatrix, BoxedMatrixMut, BoxedVector, BoxedVectorMut};
pub use capability::{Capability, Integer, Natural, Real};
pub use element::Numeral;
pub use matrix::{Cells, Matrix, MatrixMut};
pub use vector::{Elements, Vector, VectorMut};
