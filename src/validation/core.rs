use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Outcome of a check that keeps going after the first failure.
///
/// `Valid` carries the success value, `Invalid` every error found, never
/// zero of them. [`Validator::validate`](crate::Validator::validate) stops at
/// the first rejection; `validate_each` on the all-elements validators
/// reports all of them through this type.
///
/// # Examples
///
/// ```
/// use type_rail::validation::Validation;
///
/// let valid = Validation::<&str, usize>::valid(3);
/// assert!(valid.is_valid());
/// assert!(valid.errors().is_empty());
///
/// let invalid = Validation::<&str, usize>::invalid("rejected");
/// assert_eq!(invalid.errors(), ["rejected"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// `Valid(value)` when `errors` is empty, otherwise `Invalid(errors)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use type_rail::{validation::Validation, ErrorVec};
    ///
    /// let none: ErrorVec<&str> = ErrorVec::new();
    /// assert_eq!(Validation::from_errors(2, none), Validation::Valid(2));
    ///
    /// let some: ErrorVec<&str> = ["bad"].into_iter().collect();
    /// assert!(Validation::from_errors(2, some).is_invalid());
    /// ```
    #[inline]
    pub fn from_errors(value: A, errors: ErrorVec<E>) -> Self {
        if errors.is_empty() {
            Self::Valid(value)
        } else {
            Self::Invalid(errors)
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The accumulated errors; empty when valid.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[E] {
        match self {
            Self::Valid(_) => &[],
            Self::Invalid(errors) => errors,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}
