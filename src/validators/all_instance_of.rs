use crate::traits::{Reflect, Validator};
use crate::types::error_formatter::{format_message, Relation};
use crate::types::{Attribute, ErrorVec, TypeSet, ValidationError, ValidationErrorKind};
use crate::validation::Validation;
use crate::validators::{not_iterable, reject, trace_rejection, InstanceOf};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Accepts an iterable whose every element is an instance of a whitelisted type.
///
/// Empty iterables pass. Non-iterable values are rejected with
/// [`ValidationErrorKind::NotIterable`].
///
/// # Examples
///
/// ```
/// use type_rail::{all_instance_of, Attribute, Reflect, Type, ValidationErrorKind, Validator};
///
/// let p = all_instance_of([Type::of::<str>()]);
/// let items = Attribute::new("items");
///
/// assert!(p.validate(&(), &items, &vec!["a", "b"]).is_ok());
///
/// let mixed: Vec<Box<dyn Reflect>> = vec![Box::new("a"), Box::new("b"), Box::new(3_i32)];
/// let err = p.validate(&(), &items, &mixed).unwrap_err();
/// assert_eq!(err.to_string(), "'items' must contain <str> (has 3 that is <i32>)");
///
/// let err = p.validate(&(), &items, &42_i32).unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::NotIterable);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllInstanceOf {
    inner: InstanceOf,
}

impl AllInstanceOf {
    #[inline]
    pub fn new(whitelist: TypeSet) -> Self {
        Self { inner: InstanceOf::new(whitelist) }
    }

    #[inline]
    pub fn whitelist(&self) -> &TypeSet {
        self.inner.whitelist()
    }

    /// Returns `true` if `value` is iterable and every element passes.
    pub fn check(&self, value: &dyn Reflect) -> bool {
        value.elements().is_some_and(|mut elements| elements.all(|element| self.inner.check(element)))
    }

    /// Checks every element, accumulating one error per rejected element.
    ///
    /// The valid branch carries the number of elements checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_rail::{all_instance_of, Attribute, Reflect, Type};
    ///
    /// let p = all_instance_of([Type::of::<i64>()]);
    /// let values: Vec<Box<dyn Reflect>> =
    ///     vec![Box::new(1_i64), Box::new("two"), Box::new(3_i64), Box::new(4.0_f64)];
    ///
    /// let errors = p.validate_each(&(), &Attribute::new("values"), &values).into_errors().unwrap();
    /// let indices: Vec<usize> = errors.iter().map(|e| e.element().unwrap().index).collect();
    /// assert_eq!(indices, vec![1, 3]);
    /// ```
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
            if !self.inner.check(element) {
                let error = self.element_error(attribute, value, index, element);
                trace_rejection(&error);
                errors.push(error);
            }
        }

        Validation::from_errors(checked, errors)
    }

    fn element_error(
        &self,
        attribute: &Attribute,
        value: &dyn Reflect,
        index: usize,
        element: &dyn Reflect,
    ) -> ValidationError {
        let message = format_message(
            attribute.name(),
            Relation::Has,
            element,
            "must contain",
            self.whitelist().as_slice(),
        );
        ValidationError::new(ValidationErrorKind::ElementNotInstance, attribute, value, message)
            .with_whitelist(self.whitelist())
            .with_element(index, element)
    }
}

impl Validator for AllInstanceOf {
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
            if !self.inner.check(element) {
                return reject(self.element_error(attribute, value, index, element));
            }
        }
        Ok(())
    }
}
