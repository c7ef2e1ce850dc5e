//! Instance-of and subclass-of field validators over an immutable whitelist
//! of runtime type handles.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `type_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Instance Checks
//!
//! ```
//! use type_rail::{instance_of, Attribute, Validator};
//!
//! let p = instance_of!(i64, f64);
//! let x = Attribute::new("x");
//!
//! assert!(p.validate(&(), &x, &5_i64).is_ok());
//!
//! let err = p.validate(&(), &x, &"5").unwrap_err();
//! assert_eq!(err.to_string(), "'x' must be <i64> or <f64> (is '5' that is <str>)");
//! ```
//!
//! ## Subclass Checks With Declared Hierarchies
//!
//! ```
//! use type_rail::{subclass_of, Attribute, Type, Validator};
//!
//! let shape = Type::declare("Shape");
//! let circle = Type::declare("Circle").extends(shape.clone());
//!
//! let p = subclass_of([shape]);
//! assert!(p.validate(&(), &Attribute::new("kind"), &circle).is_ok());
//! ```
//!
//! ## Every Element Of A Collection
//!
//! ```
//! use type_rail::{all_instance_of, Attribute, Reflect, ValidationErrorKind, Validator};
//!
//! let p = all_instance_of!(str);
//! let items = Attribute::new("items");
//! let mixed: Vec<Box<dyn Reflect>> = vec![Box::new("a"), Box::new(3_i32)];
//!
//! let err = p.validate(&(), &items, &mixed).unwrap_err();
//! assert_eq!(err.kind(), ValidationErrorKind::ElementNotInstance);
//! assert_eq!(err.element().unwrap().index, 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros building whitelists and validators from Rust types
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Runtime reflection and the validator convention
pub mod traits;
/// Type handles, whitelists, descriptors and errors
pub mod types;
/// Validation type for error accumulation
pub mod validation;
/// Instance-of and subclass-of validators
pub mod validators;

pub use traits::*;
pub use types::{
    Attribute, ErrorVec, Offender, Type, TypeSet, ValidationError, ValidationErrorKind,
    WhitelistError,
};
pub use validation::Validation;
pub use validators::*;
