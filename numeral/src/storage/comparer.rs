//! Equality configuration for sparse storage

use std::fmt;
use std::sync::Arc;

use numeral_core::Numeral;

use crate::registry;

/// Shared equality predicate deciding when a value counts as the default
///
/// Clones share the same predicate.
pub struct Comparer<T> {
    eq: Arc<dyn Fn(T, T) -> bool + Send + Sync>,
    name: &'static str,
}

impl<T: Numeral> Comparer<T> {
    /// Capability equality when `T` is registered, `==` otherwise
    ///
    /// Floats compare NaN equal to NaN and `+0` equal to `-0`.
    pub fn natural() -> Self {
        match registry::resolve_typed::<T>() {
            Some(natural) => Self {
                eq: Arc::new(move |a: T, b: T| natural.equals(a, b)),
                name: "natural",
            },
            None => Self::exact(),
        }
    }

    /// Plain `==`
    pub fn exact() -> Self {
        Self {
            eq: Arc::new(|a: T, b: T| a == b),
            name: "exact",
        }
    }

    /// Caller-supplied predicate
    pub fn custom<F>(eq: F) -> Self
    where
        F: Fn(T, T) -> bool + Send + Sync + 'static,
    {
        Self {
            eq: Arc::new(eq),
            name: "custom",
        }
    }

    #[inline]
    pub fn equals(&self, a: T, b: T) -> bool {
        (self.eq)(a, b)
    }
}

impl<T: Numeral> Default for Comparer<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> Clone for Comparer<T> {
    fn clone(&self) -> Self {
        Self {
            eq: Arc::clone(&self.eq),
            name: self.name,
        }
    }
}

impl<T> fmt::Debug for Comparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparer({})", self.name)
    }
}
