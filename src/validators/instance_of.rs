use crate::traits::{Reflect, Validator};
use crate::types::error_formatter::{format_message, Relation};
use crate::types::{Attribute, TypeSet, ValidationError, ValidationErrorKind};
use crate::validators::reject;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Accepts a value that is an instance of at least one whitelisted type.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf {
    whitelist: TypeSet,
}

impl InstanceOf {
    #[inline]
    pub fn new(whitelist: TypeSet) -> Self {
        Self { whitelist }
    }

    #[inline]
    pub fn whitelist(&self) -> &TypeSet {
        &self.whitelist
    }

    /// Returns `true` if `value` is an instance of a whitelisted type.
    #[inline]
    pub fn check(&self, value: &dyn Reflect) -> bool {
        self.whitelist.admits_instance(value)
    }
}

impl Validator for InstanceOf {
    fn validate(
        &self,
        _owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Result<(), ValidationError> {
        if self.check(value) {
            return Ok(());
        }
        let message = format_message(
            attribute.name(),
            Relation::Is,
            value,
            "must be",
            self.whitelist.as_slice(),
        );
        reject(
            ValidationError::new(ValidationErrorKind::NotInstance, attribute, value, message)
                .with_whitelist(&self.whitelist),
        )
    }
}
