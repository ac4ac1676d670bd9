//! Process-wide capability registry
//!
//! Maps each representation type to the one capability object serving it.
//! The table is assembled explicitly through [`RegistryBuilder`] and is
//! immutable once built. The global instance is populated exactly once,
//! on first use, and is safe for concurrent reads afterwards.
//!
//! ```rust
//! use numeral::{registry, Natural};
//!
//! let naturals = registry::resolve_typed::<u32>().unwrap();
//! assert_eq!(naturals.add(2, 3), 5);
//! assert!(naturals.as_integer().is_none());
//! ```

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::OnceLock;

use hashbrown::HashMap;
use tracing::{debug, trace, warn};

use numeral_core::{
    Capability, CapabilityLevel, Integer, Natural, Numeral, NumeralError, Real, Representation,
    Result,
};

use crate::capability;

/// One registered capability object, type-erased
pub struct CapabilityEntry {
    representation: Representation,
    level: CapabilityLevel,
    capability_name: &'static str,
    /// Holds a `&'static dyn Natural<T>` for the entry's `T`
    object: Box<dyn Any + Send + Sync>,
}

impl CapabilityEntry {
    fn new<T: Numeral>(object: &'static dyn Natural<T>, capability_name: &'static str) -> Self {
        Self {
            representation: T::REPRESENTATION,
            level: object.level(),
            capability_name,
            object: Box::new(object),
        }
    }

    /// Representation served by this entry
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Highest level the capability object implements
    pub fn level(&self) -> CapabilityLevel {
        self.level
    }

    /// Type name of the capability object
    pub fn capability_name(&self) -> &'static str {
        self.capability_name
    }

    /// The object as a Natural capability, if it serves `T`
    pub fn as_natural<T: Numeral>(&self) -> Option<&'static dyn Natural<T>> {
        self.object.downcast_ref::<&'static dyn Natural<T>>().copied()
    }

    /// The object as an Integer capability, if it serves `T` at that level
    pub fn as_integer<T: Numeral>(&self) -> Option<&'static dyn Integer<T>> {
        self.as_natural::<T>()?.as_integer()
    }

    /// The object as a Real capability, if it serves `T` at that level
    pub fn as_real<T: Numeral>(&self) -> Option<&'static dyn Real<T>> {
        self.as_natural::<T>()?.as_real()
    }
}

impl fmt::Debug for CapabilityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityEntry")
            .field("representation", &self.representation)
            .field("level", &self.level)
            .field("capability", &self.capability_name)
            .finish()
    }
}

/// Immutable table from representation type to capability object
pub struct Registry {
    entries: HashMap<TypeId, CapabilityEntry>,
}

impl Registry {
    /// Look up the entry for a representation type
    pub fn resolve(&self, representation: TypeId) -> Option<&CapabilityEntry> {
        let entry = self.entries.get(&representation);
        if entry.is_none() {
            trace!(?representation, "capability lookup missed");
        }
        entry
    }

    /// Statically typed lookup
    ///
    /// Returns `None` for an unregistered representation, never a default
    /// instance.
    pub fn resolve_typed<T: Numeral>(&self) -> Option<&'static dyn Natural<T>> {
        self.resolve(TypeId::of::<T>())?.as_natural::<T>()
    }

    /// Whether any capability is registered for `T`
    pub fn exists<T: Numeral>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Natural capability for `T`
    pub fn natural<T: Numeral>(&self) -> Result<&'static dyn Natural<T>> {
        self.resolve_typed::<T>().ok_or(NumeralError::Unregistered {
            representation: T::REPRESENTATION,
        })
    }

    /// Integer capability for `T`, or why there is none
    pub fn integer<T: Numeral>(&self) -> Result<&'static dyn Integer<T>> {
        let natural = self.natural::<T>()?;
        natural
            .as_integer()
            .ok_or_else(|| unsupported::<T>(CapabilityLevel::Integer, natural.level()))
    }

    /// Real capability for `T`, or why there is none
    pub fn real<T: Numeral>(&self) -> Result<&'static dyn Real<T>> {
        let natural = self.natural::<T>()?;
        natural
            .as_real()
            .ok_or_else(|| unsupported::<T>(CapabilityLevel::Real, natural.level()))
    }

    /// Number of registered representations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityEntry> {
        self.entries.values()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.values()).finish()
    }
}

fn unsupported<T: Numeral>(required: CapabilityLevel, available: CapabilityLevel) -> NumeralError {
    NumeralError::Unsupported {
        representation: T::REPRESENTATION,
        required,
        available,
    }
}

/// Explicit registration table for a [`Registry`]
///
/// When two capabilities claim the same representation the later
/// registration wins and a warning is logged.
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<TypeId, CapabilityEntry>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every built-in capability
    pub fn with_builtins(self) -> Self {
        capability::register_builtins(self)
    }

    /// Instantiate a capability type through `Default` and register it
    ///
    /// The instance lives for the rest of the process. Built-in
    /// capabilities are zero-sized, so this allocates nothing for them.
    pub fn register<C: Capability>(self) -> Self {
        let object: &'static C = Box::leak(Box::new(C::default()));
        self.register_static::<C::Value>(object, type_name::<C>())
    }

    /// Register an existing capability object for `T`
    pub fn register_static<T: Numeral>(
        mut self,
        object: &'static dyn Natural<T>,
        capability_name: &'static str,
    ) -> Self {
        let entry = CapabilityEntry::new(object, capability_name);
        debug!(
            representation = %entry.representation,
            level = %entry.level,
            capability = capability_name,
            "registered capability"
        );
        if let Some(previous) = self.entries.insert(TypeId::of::<T>(), entry) {
            warn!(
                representation = %previous.representation,
                replaced = previous.capability_name,
                by = capability_name,
                "capability registered twice, keeping the later one"
            );
        }
        self
    }

    /// Freeze the table
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Populate the process-wide registry with the built-in capabilities
///
/// Idempotent: the first call builds the table, later calls return it.
pub fn register() -> &'static Registry {
    GLOBAL.get_or_init(|| {
        let registry = RegistryBuilder::new().with_builtins().build();
        debug!(count = registry.len(), "capability registry populated");
        registry
    })
}

/// Install a custom table as the process-wide registry
///
/// Fails, handing the table back, once the global registry has been
/// populated.
pub fn install(registry: Registry) -> std::result::Result<&'static Registry, Registry> {
    GLOBAL.set(registry)?;
    Ok(register())
}

/// The process-wide registry, populated on first use
pub fn registry() -> &'static Registry {
    register()
}

/// Look up the global entry for a representation type
pub fn resolve(representation: TypeId) -> Option<&'static CapabilityEntry> {
    registry().resolve(representation)
}

/// Statically typed lookup in the global registry
pub fn resolve_typed<T: Numeral>() -> Option<&'static dyn Natural<T>> {
    registry().resolve_typed::<T>()
}

/// Whether the global registry serves `T`
pub fn exists<T: Numeral>() -> bool {
    registry().exists::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{FloatCapability, SignedCapability};
    use numeral_core::Decimal;

    #[test]
    fn test_builtins_cover_every_representation() {
        let registry = RegistryBuilder::new().with_builtins().build();
        assert_eq!(registry.len(), Representation::ALL.len());

        let mut seen: Vec<Representation> = registry.iter().map(|e| e.representation()).collect();
        seen.sort_by_key(|r| *r as u8);
        let mut all = Representation::ALL.to_vec();
        all.sort_by_key(|r| *r as u8);
        assert_eq!(seen, all);
    }

    #[test]
    fn test_levels_follow_representation() {
        let registry = register();
        assert_eq!(
            registry.resolve(TypeId::of::<u16>()).map(|e| e.level()),
            Some(CapabilityLevel::Natural)
        );
        assert_eq!(
            registry.resolve(TypeId::of::<i64>()).map(|e| e.level()),
            Some(CapabilityLevel::Integer)
        );
        assert_eq!(
            registry.resolve(TypeId::of::<Decimal>()).map(|e| e.level()),
            Some(CapabilityLevel::Real)
        );
    }

    #[test]
    fn test_unregistered_resolves_absent() {
        let registry = RegistryBuilder::new()
            .register::<SignedCapability<i32>>()
            .build();
        assert!(registry.exists::<i32>());
        assert!(!registry.exists::<f64>());
        assert!(registry.resolve_typed::<f64>().is_none());
        assert!(registry.resolve(TypeId::of::<String>()).is_none());
        assert_eq!(
            registry.natural::<f64>().err(),
            Some(NumeralError::Unregistered {
                representation: Representation::F64
            })
        );
    }

    #[test]
    fn test_casts_below_level_are_absent() {
        let registry = register();
        let entry = registry.resolve(TypeId::of::<i32>()).unwrap();
        assert!(entry.as_natural::<i32>().is_some());
        assert!(entry.as_integer::<i32>().is_some());
        assert!(entry.as_real::<i32>().is_none());
        // Entry exists but serves another representation
        assert!(entry.as_natural::<i64>().is_none());

        assert_eq!(
            registry.real::<i32>().err(),
            Some(NumeralError::Unsupported {
                representation: Representation::I32,
                required: CapabilityLevel::Real,
                available: CapabilityLevel::Integer,
            })
        );
        assert!(registry.integer::<u8>().is_err());
        assert!(registry.real::<f32>().is_ok());
    }

    #[test]
    fn test_last_registration_wins() {
        struct Saturating;

        impl Natural<i32> for Saturating {
            fn level(&self) -> CapabilityLevel {
                CapabilityLevel::Natural
            }
            fn add(&self, a: i32, b: i32) -> i32 {
                a.saturating_add(b)
            }
            fn multiply(&self, a: i32, b: i32) -> i32 {
                a.saturating_mul(b)
            }
            fn integer_divide_with_remainder(&self, a: i32, b: i32) -> Result<(i32, i32)> {
                Ok((a / b, a % b))
            }
            fn zero(&self) -> i32 {
                0
            }
            fn one(&self) -> i32 {
                1
            }
            fn as_natural(&self) -> &dyn Natural<i32> {
                self
            }
        }

        static SATURATING: Saturating = Saturating;

        let registry = RegistryBuilder::new()
            .register::<SignedCapability<i32>>()
            .register_static::<i32>(&SATURATING, "Saturating")
            .register::<FloatCapability<f64>>()
            .build();
        assert_eq!(registry.len(), 2);

        let entry = registry.resolve(TypeId::of::<i32>()).unwrap();
        assert_eq!(entry.capability_name(), "Saturating");
        assert_eq!(entry.level(), CapabilityLevel::Natural);
        let natural = registry.natural::<i32>().unwrap();
        assert_eq!(natural.add(i32::MAX, 1), i32::MAX);
    }

    #[test]
    fn test_global_registration_is_idempotent() {
        let first = register() as *const Registry;
        let second = registry() as *const Registry;
        assert_eq!(first, second);
        assert!(exists::<usize>());
        assert!(resolve_typed::<Decimal>().is_some());
        assert!(resolve(TypeId::of::<f32>()).is_some());
    }
}
