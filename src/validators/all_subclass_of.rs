use crate::traits::{Reflect, Validator};
use crate::types::error_formatter::{format_message, Relation};
use crate::types::{Attribute, ErrorVec, Type, TypeSet, ValidationError, ValidationErrorKind};
use crate::validation::Validation;
use crate::validators::{not_iterable, reject, trace_rejection, SubclassOf};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Accepts an iterable whose every element is a type deriving from a
/// whitelisted type.
///
/// Elements that are not types fail with
/// [`ValidationErrorKind::ElementNotAType`]; types outside the whitelist fail
/// with [`ValidationErrorKind::ElementNotSubclass`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllSubclassOf {
    inner: SubclassOf,
}

impl AllSubclassOf {
    #[inline]
    pub fn new(whitelist: TypeSet) -> Self {
        Self { inner: SubclassOf::new(whitelist) }
    }

    #[inline]
    pub fn whitelist(&self) -> &TypeSet {
        self.inner.whitelist()
    }

    pub fn check(&self, value: &dyn Reflect) -> bool {
        value.elements().is_some_and(|mut elements| elements.all(|element| self.inner.check(element)))
    }

    /// Checks every element, accumulating one error per rejected element.
    pub fn validate_each(
        &self,
        _owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Validation<ValidationError, usize> {
        let Some(elements) = value.elements() else {
            let error = not_iterable(attribute, value);
            trace_rejection(&error);
            return Validation::invalid(error);
        };

        let mut checked = 0;
        let mut errors = ErrorVec::new();
        for (index, element) in elements.enumerate() {
            checked += 1;
            if let Some(error) = self.check_element(attribute, value, index, element) {
                trace_rejection(&error);
                errors.push(error);
            }
        }

        Validation::from_errors(checked, errors)
    }

    fn check_element(
        &self,
        attribute: &Attribute,
        value: &dyn Reflect,
        index: usize,
        element: &dyn Reflect,
    ) -> Option<ValidationError> {
        let error = match self.inner.is_subclass(element) {
            Some(true) => return None,
            None => {
                let message = format_message(
                    attribute.name(),
                    Relation::Has,
                    element,
                    "must contain",
                    &[Type::meta()],
                );
                ValidationError::new(ValidationErrorKind::ElementNotAType, attribute, value, message)
            }
            Some(false) => {
                let message = format_message(
                    attribute.name(),
                    Relation::Has,
                    element,
                    "must contain subclass of",
                    self.whitelist().as_slice(),
                );
                ValidationError::new(
                    ValidationErrorKind::ElementNotSubclass,
                    attribute,
                    value,
                    message,
                )
                .with_whitelist(self.whitelist())
            }
        };
        Some(error.with_element(index, element))
    }
}

impl Validator for AllSubclassOf {
    fn validate(
        &self,
        _owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Result<(), ValidationError> {
        let Some(elements) = value.elements() else {
            return reject(not_iterable(attribute, value));
        };

        for (index, element) in elements.enumerate() {
            if let Some(error) = self.check_element(attribute, value, index, element) {
                return reject(error);
            }
        }
        Ok(())
    }
}
