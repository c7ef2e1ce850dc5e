//! Immutable type whitelists.

use crate::traits::Reflect;
use crate::types::alloc_type::{Arc, Vec};
use crate::types::{Type, WhitelistError};
use core::fmt;

/// An immutable, non-empty set of [`Type`] handles.
///
/// Members keep their first-insertion order, which is the order they are
/// listed in error messages. Duplicates are dropped. Once built a whitelist
/// cannot change; a different whitelist needs a new validator.
///
/// # Examples
///
/// ```
/// use type_rail::{Type, TypeSet};
///
/// let set = TypeSet::new([Type::of::<i64>(), Type::of::<f64>(), Type::of::<i64>()]);
/// assert_eq!(set.len(), 2);
/// assert!(set.admits_instance(&1.5_f64));
/// assert!(!set.admits_instance(&"1.5"));
///
/// assert!(TypeSet::try_new([]).is_err());
/// ```
#[derive(Clone)]
pub struct TypeSet {
    members: Arc<[Type]>,
}

impl TypeSet {
    /// Builds a whitelist, rejecting an empty one.
    pub fn try_new<I>(types: I) -> Result<Self, WhitelistError>
    where
        I: IntoIterator<Item = Type>,
    {
        let mut members: Vec<Type> = Vec::new();
        for ty in types {
            if !members.contains(&ty) {
                members.push(ty);
            }
        }
        if members.is_empty() {
            return Err(WhitelistError::empty());
        }
        Ok(Self { members: members.into() })
    }

    /// Builds a whitelist.
    ///
    /// # Panics
    ///
    /// Panics if `types` is empty. A malformed whitelist is a programming
    /// error; use [`TypeSet::try_new`] to handle it instead.
    pub fn new<I>(types: I) -> Self
    where
        I: IntoIterator<Item = Type>,
    {
        match Self::try_new(types) {
            Ok(set) => set,
            Err(err) => panic!("invalid type whitelist: {err}"),
        }
    }

    /// Builds a whitelist from reflected values, each of which must be a type.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_rail::{Reflect, Type, TypeSet, WhitelistError};
    ///
    /// let int = Type::of::<i64>();
    /// assert!(TypeSet::try_from_values(&[&int]).is_ok());
    ///
    /// let err = TypeSet::try_from_values(&[&1_i32, &2_i32]).unwrap_err();
    /// assert!(matches!(err, WhitelistError::NotAType { index: 0, .. }));
    /// ```
    pub fn try_from_values(values: &[&dyn Reflect]) -> Result<Self, WhitelistError> {
        if values.is_empty() {
            return Err(WhitelistError::empty());
        }
        let mut types = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            match value.as_type() {
                Some(ty) => types.push(ty.clone()),
                None => return Err(WhitelistError::not_a_type(index, *value)),
            }
        }
        Self::try_new(types)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Type> {
        self.members.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Type] {
        &self.members
    }

    /// Number of members; never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn contains(&self, ty: &Type) -> bool {
        self.members.contains(ty)
    }

    /// Returns `true` if `value` is an instance of at least one member.
    pub fn admits_instance(&self, value: &dyn Reflect) -> bool {
        let actual = value.type_of();
        self.members.iter().any(|member| actual.is_subclass_of(member))
    }

    /// Returns `true` if `candidate` is a subclass of at least one member.
    pub fn admits_subclass(&self, candidate: &Type) -> bool {
        self.members.iter().any(|member| candidate.is_subclass_of(member))
    }
}

impl PartialEq for TypeSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|ty| other.contains(ty))
    }
}

impl Eq for TypeSet {}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a Type;
    type IntoIter = core::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
