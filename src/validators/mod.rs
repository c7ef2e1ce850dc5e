//! Whitelist validators and their factories.
//!
//! | Validator          | Accepts                                              |
//! |--------------------|------------------------------------------------------|
//! | [`InstanceOf`]     | a value whose type derives from a whitelisted type   |
//! | [`SubclassOf`]     | a type deriving from a whitelisted type              |
//! | [`AllInstanceOf`]  | an iterable whose elements all pass [`InstanceOf`]   |
//! | [`AllSubclassOf`]  | an iterable whose elements all pass [`SubclassOf`]   |
//!
//! The factories panic on a malformed whitelist; the `try_` variants return
//! the [`WhitelistError`] instead.
//!
//! # Examples
//!
//! ```
//! use type_rail::{instance_of, Attribute, Type, Validator};
//!
//! let p = instance_of([Type::of::<i64>(), Type::of::<f64>()]);
//! let x = Attribute::new("x");
//!
//! assert!(p.validate(&(), &x, &5_i64).is_ok());
//!
//! let err = p.validate(&(), &x, &"5").unwrap_err();
//! assert_eq!(err.to_string(), "'x' must be <i64> or <f64> (is '5' that is <str>)");
//! ```

mod all_instance_of;
mod all_subclass_of;
mod instance_of;
mod subclass_of;

pub use all_instance_of::AllInstanceOf;
pub use all_subclass_of::AllSubclassOf;
pub use instance_of::InstanceOf;
pub use subclass_of::SubclassOf;

use crate::traits::Reflect;
use crate::types::error_formatter::{format_message, Relation};
use crate::types::{Attribute, Type, TypeSet, ValidationError, ValidationErrorKind, WhitelistError};

/// Builds an [`InstanceOf`] validator.
///
/// # Panics
///
/// Panics if `types` is empty.
pub fn instance_of<I: IntoIterator<Item = Type>>(types: I) -> InstanceOf {
    InstanceOf::new(TypeSet::new(types))
}

/// Builds a [`SubclassOf`] validator.
///
/// # Panics
///
/// Panics if `types` is empty.
pub fn subclass_of<I: IntoIterator<Item = Type>>(types: I) -> SubclassOf {
    SubclassOf::new(TypeSet::new(types))
}

/// Builds an [`AllInstanceOf`] validator.
///
/// # Panics
///
/// Panics if `types` is empty.
pub fn all_instance_of<I: IntoIterator<Item = Type>>(types: I) -> AllInstanceOf {
    AllInstanceOf::new(TypeSet::new(types))
}

/// Builds an [`AllSubclassOf`] validator.
///
/// # Panics
///
/// Panics if `types` is empty.
pub fn all_subclass_of<I: IntoIterator<Item = Type>>(types: I) -> AllSubclassOf {
    AllSubclassOf::new(TypeSet::new(types))
}

#[inline]
pub fn try_instance_of<I: IntoIterator<Item = Type>>(types: I) -> Result<InstanceOf, WhitelistError> {
    TypeSet::try_new(types).map(InstanceOf::new)
}

#[inline]
pub fn try_subclass_of<I: IntoIterator<Item = Type>>(types: I) -> Result<SubclassOf, WhitelistError> {
    TypeSet::try_new(types).map(SubclassOf::new)
}

#[inline]
pub fn try_all_instance_of<I: IntoIterator<Item = Type>>(
    types: I,
) -> Result<AllInstanceOf, WhitelistError> {
    TypeSet::try_new(types).map(AllInstanceOf::new)
}

#[inline]
pub fn try_all_subclass_of<I: IntoIterator<Item = Type>>(
    types: I,
) -> Result<AllSubclassOf, WhitelistError> {
    TypeSet::try_new(types).map(AllSubclassOf::new)
}

/// Builds the error for a value that cannot be iterated.
pub(crate) fn not_iterable(attribute: &Attribute, value: &dyn Reflect) -> ValidationError {
    let message =
        format_message(attribute.name(), Relation::Is, value, "must be", &[Type::iterable()]);
    ValidationError::new(ValidationErrorKind::NotIterable, attribute, value, message)
}

/// Emits the rejection when tracing is enabled and returns it as an `Err`.
#[inline]
pub(crate) fn reject(error: ValidationError) -> Result<(), ValidationError> {
    trace_rejection(&error);
    Err(error)
}

#[inline]
pub(crate) fn trace_rejection(error: &ValidationError) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        attribute = error.attribute(),
        kind = ?error.kind(),
        message = error.message(),
        "value rejected"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}
