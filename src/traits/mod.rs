//! Core traits.
//!
//! - [`Reflect`]: runtime type inspection for candidate values
//! - [`Validator`]: the three-argument field validator convention
//!
//! # Examples
//!
//! ```
//! use type_rail::traits::{Reflect, Validator};
//! use type_rail::{instance_of, Attribute, Type};
//!
//! let is_int = instance_of([Type::of::<i64>()]);
//! assert_eq!(7_i64.type_of(), Type::of::<i64>());
//! assert!(is_int.validate(&(), &Attribute::new("x"), &7_i64).is_ok());
//! ```

pub mod reflect;
pub mod validator;

pub use reflect::{repr, Elements, Reflect, Repr};
pub use validator::Validator;
