//! Built-in capability objects
//!
//! One zero-sized capability type per representation family. Each is
//! parameterized by exactly the representation it serves, so a
//! `RegistryBuilder` can instantiate it through `Default`.

pub mod decimal;
pub mod float;
pub mod integer;

pub use decimal::DecimalCapability;
pub use float::FloatCapability;
pub use integer::{SignedCapability, UnsignedCapability};

use crate::registry::RegistryBuilder;

/// Add a capability for every built-in representation
pub(crate) fn register_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register::<UnsignedCapability<u8>>()
        .register::<UnsignedCapability<u16>>()
        .register::<UnsignedCapability<u32>>()
        .register::<UnsignedCapability<u64>>()
        .register::<UnsignedCapability<usize>>()
        .register::<SignedCapability<i8>>()
        .register::<SignedCapability<i16>>()
        .register::<SignedCapability<i32>>()
        .register::<SignedCapability<i64>>()
        .register::<FloatCapability<f32>>()
        .register::<FloatCapability<f64>>()
        .register::<DecimalCapability>()
}
