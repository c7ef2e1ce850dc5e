//! Type handles, whitelists, field descriptors and error types.
//!
//! # Examples
//!
//! ```
//! use type_rail::{Type, TypeSet};
//!
//! let numbers = TypeSet::new([Type::of::<i64>(), Type::of::<f64>()]);
//! assert!(numbers.admits_instance(&3_i64));
//! assert!(!numbers.admits_instance(&"3"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod attribute;
pub mod error_formatter;
pub mod type_error;
pub mod type_handle;
pub mod type_set;

pub use attribute::*;
pub use type_error::*;
pub use type_handle::*;
pub use type_set::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case of a single
/// rejected value.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
