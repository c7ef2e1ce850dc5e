//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use type_rail::prelude::*;
//!
//! let p = instance_of!(bool);
//! assert!(p.validate(&(), &Attribute::new("flag"), &true).is_ok());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`whitelist!`], [`instance_of!`], [`subclass_of!`],
//!   [`all_instance_of!`], [`all_subclass_of!`]
//! - **Types**: [`Type`], [`TypeSet`], [`Attribute`], [`ValidationError`]
//! - **Traits**: [`Reflect`], [`Validator`]

// Macros and factories
pub use crate::{all_instance_of, all_subclass_of, instance_of, subclass_of, whitelist};

// Core types
pub use crate::types::{Attribute, Type, TypeSet, ValidationError, ValidationErrorKind};
pub use crate::validators::{AllInstanceOf, AllSubclassOf, InstanceOf, SubclassOf};

// Traits
pub use crate::traits::{Reflect, Validator};
