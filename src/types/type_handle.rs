//! Runtime type handles.
//!
//! Rust has no class hierarchy to introspect, so whitelists are built from
//! [`Type`] handles instead of first-class type objects. A handle is either
//! bound to a Rust type through its [`TypeId`] ([`Type::of`]) or declared by
//! name ([`Type::declare`]). Bases are recorded per identity in a
//! process-wide registry by [`Type::extends`], so every handle of a type sees
//! the same hierarchy. The subclass relation is reflexive and follows bases
//! transitively.
//!
//! # Examples
//!
//! ```
//! use type_rail::Type;
//!
//! let animal = Type::declare("Animal");
//! let dog = Type::declare("Dog").extends(animal.clone());
//!
//! assert!(dog.is_subclass_of(&animal));
//! assert!(dog.is_subclass_of(&dog));
//! assert!(!animal.is_subclass_of(&dog));
//! assert_eq!(Type::of::<i64>().to_string(), "<i64>");
//! ```
use crate::traits::Reflect;
use crate::types::alloc_type::{Arc, Cow, String, Vec};
use alloc::collections::BTreeMap;
use core::any::{type_name, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};
use spin::RwLock;

/// Marker for the iterable capability, reported by the all-elements validators
/// when a candidate cannot be iterated.
#[derive(Debug)]
pub enum Iterable {}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum TypeKey {
    Native(TypeId),
    Declared(Cow<'static, str>),
}

#[derive(Debug)]
struct TypeInfo {
    key: TypeKey,
    name: Cow<'static, str>,
}

/// Direct bases of every extended type, keyed by identity.
static BASES: RwLock<BTreeMap<TypeKey, Vec<Type>>> = RwLock::new(BTreeMap::new());

/// Opaque, cheaply clonable handle identifying a runtime type.
///
/// Equality and hashing only consider identity. Bases live in a registry
/// keyed by that identity, so equal handles always agree on the subclass
/// relation.
#[derive(Clone)]
pub struct Type(Arc<TypeInfo>);

impl Type {
    /// Returns the handle bound to the Rust type `T`.
    ///
    /// The display name is `T`'s type name with module paths stripped, so
    /// `alloc::vec::Vec<alloc::string::String>` renders as `Vec<String>`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self(Arc::new(TypeInfo {
            key: TypeKey::Native(TypeId::of::<T>()),
            name: short_type_name(type_name::<T>()),
        }))
    }

    /// Declares a type identified by `name` alone.
    ///
    /// Declared handles with the same name are the same type.
    #[must_use]
    pub fn declare(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self(Arc::new(TypeInfo { key: TypeKey::Declared(name.clone()), name }))
    }

    /// The type of every type handle, rendered as `<Type>`.
    #[must_use]
    #[inline]
    pub fn meta() -> Self {
        Self::of::<Type>()
    }

    /// The iterable capability, rendered as `<Iterable>`.
    #[must_use]
    #[inline]
    pub fn iterable() -> Self {
        Self::of::<Iterable>()
    }

    /// Records `base` as a direct base of this type and returns the handle.
    ///
    /// The base applies to the type's identity: handles obtained before or
    /// after the call, through [`Type::of`] or [`Reflect::type_of`], all see it.
    /// Recording the same base twice has no effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_rail::Type;
    ///
    /// struct Celsius;
    ///
    /// let number = Type::declare("Number");
    /// let celsius = Type::of::<Celsius>().extends(number.clone());
    /// assert!(celsius.is_subclass_of(&number));
    /// assert!(Type::of::<Celsius>().is_subclass_of(&number));
    /// ```
    pub fn extends(self, base: Type) -> Self {
        let mut registry = BASES.write();
        let bases = registry.entry(self.0.key.clone()).or_default();
        if !bases.contains(&base) {
            bases.push(base);
        }
        drop(registry);
        self
    }

    /// Display name, without angle brackets.
    #[inline]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Direct base types, in the order they were recorded.
    pub fn bases(&self) -> Vec<Type> {
        BASES.read().get(&self.0.key).cloned().unwrap_or_default()
    }

    /// Returns `true` if `self` is `other` or derives from it through its bases.
    pub fn is_subclass_of(&self, other: &Type) -> bool {
        if self == other {
            return true;
        }

        let registry = BASES.read();
        let mut pending = Vec::new();
        let mut seen = Vec::new();
        pending.push(&self.0.key);
        while let Some(key) = pending.pop() {
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            for base in registry.get(key).into_iter().flatten() {
                if base.0.key == other.0.key {
                    return true;
                }
                pending.push(&base.0.key);
            }
        }
        false
    }

    /// Returns `true` if the runtime type of `value` is a subclass of `self`.
    #[inline]
    pub fn is_instance(&self, value: &dyn Reflect) -> bool {
        value.type_of().is_subclass_of(self)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.key == other.0.key
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.key.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Type").field(&self.name()).finish()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Type {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Strips module paths from every path segment of a `type_name` string.
fn short_type_name(full: &'static str) -> Cow<'static, str> {
    if !full.contains("::") {
        return Cow::Borrowed(full);
    }

    let mut out = String::with_capacity(full.len());
    let mut start = None;
    for (i, c) in full.char_indices() {
        let in_path = c.is_alphanumeric() || c == '_' || c == ':';
        match (in_path, start) {
            (true, None) => start = Some(i),
            (true, Some(_)) => {}
            (false, Some(s)) => {
                out.push_str(last_segment(&full[s..i]));
                out.push(c);
                start = None;
            }
            (false, None) => out.push(c),
        }
    }
    if let Some(s) = start {
        out.push_str(last_segment(&full[s..]));
    }
    Cow::Owned(out)
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
