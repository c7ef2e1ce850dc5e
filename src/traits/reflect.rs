//! Runtime type reflection for candidate values.
//!
//! Validators never see concrete Rust types; they receive `&dyn Reflect` and
//! ask it for its runtime [`Type`], whether it is itself a type handle, and
//! whether it can be iterated.

use crate::types::alloc_type::{Arc, Box, String, Vec};
use crate::types::{Type, TypeSet};
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use core::fmt::{self, Write};

/// Borrowing iterator over the elements of an iterable value.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>;

/// A value whose runtime type can be inspected by the validators.
///
/// Implementations exist for the primitive types, strings, type handles and
/// the standard collections. Custom types usually only implement
/// [`type_of`](Reflect::type_of):
///
/// ```
/// use type_rail::{Reflect, Type};
///
/// #[derive(Debug)]
/// struct Dog;
///
/// impl Reflect for Dog {
///     fn type_of(&self) -> Type {
///         Type::of::<Dog>().extends(Type::declare("Animal"))
///     }
/// }
///
/// assert!(Dog.type_of().is_subclass_of(&Type::declare("Animal")));
/// ```
pub trait Reflect: fmt::Debug {
    /// The concrete runtime type of this value.
    fn type_of(&self) -> Type;

    /// Returns the handle if this value is itself a type.
    #[inline]
    fn as_type(&self) -> Option<&Type> {
        None
    }

    /// Returns the elements if this value is iterable.
    ///
    /// Sequences and sets yield their items, maps yield their keys.
    #[inline]
    fn elements(&self) -> Option<Elements<'_>> {
        None
    }

    /// Writes the representation used in error messages.
    #[inline]
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Displays a value through [`Reflect::fmt_repr`].
#[derive(Clone, Copy)]
pub struct Repr<'a>(pub &'a dyn Reflect);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_repr(f)
    }
}

/// Shorthand for [`Repr`].
#[inline]
pub fn repr(value: &dyn Reflect) -> Repr<'_> {
    Repr(value)
}

macro_rules! reflect_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Reflect for $t {
                #[inline]
                fn type_of(&self) -> Type {
                    Type::of::<$t>()
                }
            }
        )*
    };
}

reflect_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ()
);

impl Reflect for str {
    fn type_of(&self) -> Type {
        Type::of::<str>()
    }

    /// Single-quoted, switching to double quotes when the text contains a
    /// single quote and no double quote.
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = if self.contains('\'') && !self.contains('"') { '"' } else { '\'' };
        f.write_char(quote)?;
        for c in self.chars() {
            match c {
                c if c == quote => {
                    f.write_char('\\')?;
                    f.write_char(c)?;
                }
                '\'' | '"' => f.write_char(c)?,
                c => write!(f, "{}", c.escape_debug())?,
            }
        }
        f.write_char(quote)
    }
}

impl Reflect for String {
    fn type_of(&self) -> Type {
        Type::of::<String>()
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt_repr(f)
    }
}

impl Reflect for Type {
    fn type_of(&self) -> Type {
        Type::meta()
    }

    fn as_type(&self) -> Option<&Type> {
        Some(self)
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Reflect for TypeSet {
    fn type_of(&self) -> Type {
        Type::of::<TypeSet>()
    }

    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|t| t as &dyn Reflect)))
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, "{", "}", self.iter().map(|t| t as &dyn Reflect))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn type_of(&self) -> Type {
        match self {
            Some(value) => value.type_of(),
            None => Type::of::<()>(),
        }
    }

    fn as_type(&self) -> Option<&Type> {
        self.as_ref().and_then(Reflect::as_type)
    }

    fn elements(&self) -> Option<Elements<'_>> {
        self.as_ref().and_then(Reflect::elements)
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_repr(f),
            None => f.write_str("None"),
        }
    }
}

macro_rules! reflect_forward {
    ($($wrapper:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $wrapper<T> {
                #[inline]
                fn type_of(&self) -> Type {
                    (**self).type_of()
                }

                #[inline]
                fn as_type(&self) -> Option<&Type> {
                    (**self).as_type()
                }

                #[inline]
                fn elements(&self) -> Option<Elements<'_>> {
                    (**self).elements()
                }

                #[inline]
                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).fmt_repr(f)
                }
            }
        )*
    };
}

reflect_forward!(Box, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    #[inline]
    fn type_of(&self) -> Type {
        (**self).type_of()
    }

    #[inline]
    fn as_type(&self) -> Option<&Type> {
        (**self).as_type()
    }

    #[inline]
    fn elements(&self) -> Option<Elements<'_>> {
        (**self).elements()
    }

    #[inline]
    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_repr(f)
    }
}

macro_rules! reflect_sequence {
    ($open:literal, $close:literal => $($collection:ty),* $(,)?) => {
        $(
            impl<T: Reflect + 'static> Reflect for $collection {
                fn type_of(&self) -> Type {
                    Type::of::<$collection>()
                }

                fn elements(&self) -> Option<Elements<'_>> {
                    Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
                }

                fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt_items(f, $open, $close, self.iter().map(|item| item as &dyn Reflect))
                }
            }
        )*
    };
}

reflect_sequence!("[", "]" => [T], Vec<T>, VecDeque<T>);
reflect_sequence!("{", "}" => BTreeSet<T>);

impl<T: Reflect + 'static, const N: usize> Reflect for [T; N] {
    fn type_of(&self) -> Type {
        Type::of::<[T; N]>()
    }

    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_items(f, "[", "]", self.iter().map(|item| item as &dyn Reflect))
    }
}

impl<K: Reflect + 'static, V: Reflect + 'static> Reflect for BTreeMap<K, V> {
    fn type_of(&self) -> Type {
        Type::of::<BTreeMap<K, V>>()
    }

    fn elements(&self) -> Option<Elements<'_>> {
        Some(Box::new(self.keys().map(|key| key as &dyn Reflect)))
    }

    fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(f, self.iter().map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
    }
}

#[cfg(feature = "std")]
mod hashed {
    use super::*;
    use std::collections::{HashMap, HashSet};

    impl<T: Reflect + 'static, S: 'static> Reflect for HashSet<T, S> {
        fn type_of(&self) -> Type {
            Type::of::<HashSet<T, S>>()
        }

        fn elements(&self) -> Option<Elements<'_>> {
            Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
        }

        fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_items(f, "{", "}", self.iter().map(|item| item as &dyn Reflect))
        }
    }

    impl<K: Reflect + 'static, V: Reflect + 'static, S: 'static> Reflect for HashMap<K, V, S> {
        fn type_of(&self) -> Type {
            Type::of::<HashMap<K, V, S>>()
        }

        fn elements(&self) -> Option<Elements<'_>> {
            Some(Box::new(self.keys().map(|key| key as &dyn Reflect)))
        }

        fn fmt_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_entries(f, self.iter().map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)))
        }
    }
}

fn fmt_items<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: impl Iterator<Item = &'a dyn Reflect>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_repr(f)?;
    }
    f.write_str(close)
}

fn fmt_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)>,
) -> fmt::Result {
    f.write_char('{')?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        key.fmt_repr(f)?;
        f.write_str(": ")?;
        value.fmt_repr(f)?;
    }
    f.write_char('}')
}
