#![no_std]

//! Numeral Core - Capability and Structure Definitions
//!
//! This crate provides the representation tags, the capability contracts
//! (`Natural ⊆ Integer ⊆ Real`) and the vector/matrix contracts that the
//! `numeral` crate implements. It holds no global state.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod decimal;
pub mod error;
pub mod indices;
pub mod kind;
pub mod scalar;
pub mod traits;
pub mod validation;

pub use decimal::Decimal;
pub use error::*;
pub use indices::{MatrixIndices, MatrixSize};
pub use kind::{CapabilityLevel, NumberKind, Representation, RoundingMode};
pub use scalar::Scalar;
pub use traits::*;
pub use validation::*;
