//! Errors raised while building whitelists and while validating values.

use crate::traits::{repr, Reflect};
use crate::types::alloc_type::String;
use crate::types::error_formatter::{format_message, format_message_parts, Relation};
use crate::types::{Attribute, Type, TypeSet};
use alloc::string::ToString;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const WHITELIST: &str = "whitelist";

/// A whitelist that cannot back a validator.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistError {
    /// No types were given.
    Empty { message: String },
    /// The entry at `index` is a value rather than a type.
    NotAType { index: usize, value: String, message: String },
}

impl WhitelistError {
    pub(crate) fn empty() -> Self {
        let message = format_message_parts(
            WHITELIST,
            Relation::Is,
            &"{}",
            &Type::of::<TypeSet>(),
            "must be non-empty",
            &[Type::of::<TypeSet>()],
        );
        Self::Empty { message }
    }

    pub(crate) fn not_a_type(index: usize, value: &dyn Reflect) -> Self {
        let message = format_message(WHITELIST, Relation::Has, value, "must contain", &[Type::meta()]);
        Self::NotAType { index, value: repr(value).to_string(), message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Empty { message } | Self::NotAType { message, .. } => message,
        }
    }
}

impl Display for WhitelistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for WhitelistError {}

/// Why a value was rejected.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The value is not an instance of any whitelisted type.
    NotInstance,
    /// The value must be a type but is not.
    NotAType,
    /// The value is a type but not a subclass of any whitelisted type.
    NotSubclass,
    /// The value cannot be iterated.
    NotIterable,
    /// An element is not an instance of any whitelisted type.
    ElementNotInstance,
    /// An element must be a type but is not.
    ElementNotAType,
    /// An element is a type but not a subclass of any whitelisted type.
    ElementNotSubclass,
}

impl ValidationErrorKind {
    #[inline]
    pub fn is_element_failure(self) -> bool {
        matches!(self, Self::ElementNotInstance | Self::ElementNotAType | Self::ElementNotSubclass)
    }

    #[inline]
    pub fn is_not_a_type(self) -> bool {
        matches!(self, Self::NotAType | Self::ElementNotAType)
    }

    #[inline]
    pub fn is_not_iterable(self) -> bool {
        matches!(self, Self::NotIterable)
    }
}

/// The element of a collection that was rejected.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offender {
    pub index: usize,
    pub repr: String,
    pub actual: Type,
}

/// A rejected field value.
///
/// Besides the message it keeps enough structure for programmatic
/// inspection: the whitelist the value was checked against (absent when the
/// failure was about being a type or being iterable), the rendering and type
/// of the whole value, and for element failures the offending element.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    attribute: String,
    message: String,
    whitelist: Option<TypeSet>,
    value: String,
    actual: Type,
    element: Option<Offender>,
}

impl ValidationError {
    pub fn new(
        kind: ValidationErrorKind,
        attribute: &Attribute,
        value: &dyn Reflect,
        message: String,
    ) -> Self {
        Self {
            kind,
            attribute: attribute.name().to_string(),
            message,
            whitelist: None,
            value: repr(value).to_string(),
            actual: value.type_of(),
            element: None,
        }
    }

    #[inline]
    pub fn with_whitelist(mut self, whitelist: &TypeSet) -> Self {
        self.whitelist = Some(whitelist.clone());
        self
    }

    #[inline]
    pub fn with_element(mut self, index: usize, element: &dyn Reflect) -> Self {
        self.element =
            Some(Offender { index, repr: repr(element).to_string(), actual: element.type_of() });
        self
    }

    #[inline]
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Name of the field whose value was rejected.
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn whitelist(&self) -> Option<&TypeSet> {
        self.whitelist.as_ref()
    }

    /// Rendering of the whole rejected value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Runtime type of the whole rejected value.
    #[inline]
    pub fn actual(&self) -> &Type {
        &self.actual
    }

    #[inline]
    pub fn element(&self) -> Option<&Offender> {
        self.element.as_ref()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for ValidationError {}
