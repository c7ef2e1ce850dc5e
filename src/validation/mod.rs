//! Error accumulation.
//!
//! [`Validation`] is the outcome of checking every element of a collection:
//! either the number of elements checked, or one error per rejected element.
//! The all-elements validators return it from `validate_each`.
//!
//! # Examples
//!
//! ```
//! use type_rail::{all_instance_of, Attribute};
//!
//! let p = all_instance_of!(u8);
//! let outcome = p.validate_each(&(), &Attribute::new("bytes"), &[1_u8, 2, 3]);
//! assert_eq!(outcome.into_value(), Some(3));
//! ```
pub mod core;

pub use self::core::*;
