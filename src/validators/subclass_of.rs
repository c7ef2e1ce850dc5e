use crate::traits::{Reflect, Validator};
use crate::types::error_formatter::{format_message, Relation};
use crate::types::{Attribute, Type, TypeSet, ValidationError, ValidationErrorKind};
use crate::validators::reject;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Accepts a type that is, or derives from, at least one whitelisted type.
///
/// Values that are not types at all are rejected with
/// [`ValidationErrorKind::NotAType`], distinct from
/// [`ValidationErrorKind::NotSubclass`].
///
/// # Examples
///
/// ```
/// use type_rail::{subclass_of, Attribute, Type, ValidationErrorKind, Validator};
///
/// let animal = Type::declare("Animal");
/// let dog = Type::declare("Dog").extends(animal.clone());
/// let p = subclass_of([animal]);
/// let kind = Attribute::new("kind");
///
/// assert!(p.validate(&(), &kind, &dog).is_ok());
/// let err = p.validate(&(), &kind, &3_u8).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::NotAType);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubclassOf {
    whitelist: TypeSet,
}

impl SubclassOf {
    #[inline]
    pub fn new(whitelist: TypeSet) -> Self {
        Self { whitelist }
    }

    #[inline]
    pub fn whitelist(&self) -> &TypeSet {
        &self.whitelist
    }

    /// Returns `true` if `value` is a type deriving from a whitelisted type.
    #[inline]
    pub fn check(&self, value: &dyn Reflect) -> bool {
        self.is_subclass(value).unwrap_or(false)
    }

    /// `None` when `value` is not a type.
    #[inline]
    pub(crate) fn is_subclass(&self, value: &dyn Reflect) -> Option<bool> {
        value.as_type().map(|candidate| self.whitelist.admits_subclass(candidate))
    }
}

impl Validator for SubclassOf {
    fn validate(
        &self,
        _owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Result<(), ValidationError> {
        match self.is_subclass(value) {
            Some(true) => Ok(()),
            None => {
                let message =
                    format_message(attribute.name(), Relation::Is, value, "must be", &[Type::meta()]);
                reject(ValidationError::new(ValidationErrorKind::NotAType, attribute, value, message))
            }
            Some(false) => {
                let message = format_message(
                    attribute.name(),
                    Relation::Is,
                    value,
                    "must be a subclass of",
                    self.whitelist.as_slice(),
                );
                reject(
                    ValidationError::new(ValidationErrorKind::NotSubclass, attribute, value, message)
                        .with_whitelist(&self.whitelist),
                )
            }
        }
    }
}
