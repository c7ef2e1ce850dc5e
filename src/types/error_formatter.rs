//! Error message formatting.
//!
//! Every rejection renders the same sentence shape:
//!
//! ```text
//! '<field>' <constraint> <expected types> (<relation> <value> that is <type of value>)
//! ```
//!
//! with the expected types joined under oxford-comma rules.

use crate::traits::{repr, Reflect};
use crate::types::alloc_type::{String, Vec};
use crate::types::Type;
use alloc::format;
use alloc::string::ToString;
use core::fmt::{self, Display};

/// How the rejected value relates to the field in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The field's value itself was rejected.
    Is,
    /// An element contained in the field's value was rejected.
    Has,
}

impl Relation {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::Has => "has",
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for customizing how lists of expected types are joined.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn conjunction(&self) -> &str {
        "or"
    }

    /// Joins items as `a`, `a or b`, or `a, b, ..., or z`.
    fn format_list<'a>(&self, items: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<String> = items.map(|item| self.format_item(item)).collect();
        let count = items.len();

        let mut result = String::with_capacity(count * 16);
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                if count > 2 {
                    result.push(',');
                }
                result.push(' ');
                if i == count - 1 {
                    result.push_str(self.conjunction());
                    result.push(' ');
                }
            }
            result.push_str(item);
        }
        result
    }
}

/// The default formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OxfordComma;

impl ErrorFormatter for OxfordComma {}

/// Joins `items` with [`OxfordComma`].
///
/// # Examples
///
/// ```
/// use type_rail::types::error_formatter::oxford_comma;
///
/// assert_eq!(oxford_comma(["a"]), "a");
/// assert_eq!(oxford_comma(["a", "b"]), "a or b");
/// assert_eq!(oxford_comma(["a", "b", "c"]), "a, b, or c");
/// ```
pub fn oxford_comma<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<I::Item> = items.into_iter().collect();
    OxfordComma.format_list(items.iter().map(|item| item as &dyn Display))
}

/// Formats a rejection of `value` for the field named `attribute`.
///
/// # Examples
///
/// ```
/// use type_rail::types::error_formatter::{format_message, Relation};
/// use type_rail::Type;
///
/// let message = format_message(
///     "x",
///     Relation::Is,
///     &true,
///     "must be",
///     &[Type::of::<String>(), Type::of::<i64>(), Type::of::<f64>()],
/// );
/// assert_eq!(message, "'x' must be <String>, <i64>, or <f64> (is true that is <bool>)");
/// ```
pub fn format_message(
    attribute: &str,
    relation: Relation,
    value: &dyn Reflect,
    constraint: &str,
    expected: &[Type],
) -> String {
    format_message_parts(attribute, relation, &repr(value), &value.type_of(), constraint, expected)
}

/// Like [`format_message`], for callers that only hold a value's rendering.
pub fn format_message_parts(
    attribute: &str,
    relation: Relation,
    value: &dyn Display,
    actual: &Type,
    constraint: &str,
    expected: &[Type],
) -> String {
    let joined = oxford_comma(expected);
    format!("'{attribute}' {constraint} {joined} ({relation} {value} that is {actual})")
}
