//! Macros that build whitelists and validators straight from Rust types.
//!
//! - [`macro@crate::whitelist`] - A [`TypeSet`](crate::TypeSet) of the listed types.
//! - [`macro@crate::instance_of`], [`macro@crate::subclass_of`],
//!   [`macro@crate::all_instance_of`], [`macro@crate::all_subclass_of`] - The
//!   matching validator over that whitelist.
//!
//! Each macro needs at least one type, so an empty whitelist is rejected at
//! compile time rather than at construction.
//!
//! # Examples
//!
//! ```
//! use type_rail::{instance_of, whitelist, Attribute, Validator};
//!
//! let numbers = whitelist!(i64, f64);
//! assert_eq!(numbers.len(), 2);
//!
//! let p = instance_of!(i64, f64);
//! assert!(p.validate(&(), &Attribute::new("x"), &2.5_f64).is_ok());
//! ```

/// Builds a [`TypeSet`](crate::TypeSet) from one or more Rust types.
///
/// # Examples
///
/// ```
/// use type_rail::{whitelist, Type};
///
/// let set = whitelist!(String, str);
/// assert!(set.contains(&Type::of::<str>()));
/// ```
#[macro_export]
macro_rules! whitelist {
    ($($ty:ty),+ $(,)?) => {
        $crate::TypeSet::new([$($crate::Type::of::<$ty>()),+])
    };
}

/// Builds an [`InstanceOf`](crate::InstanceOf) validator from one or more Rust types.
#[macro_export]
macro_rules! instance_of {
    ($($ty:ty),+ $(,)?) => {
        $crate::InstanceOf::new($crate::whitelist!($($ty),+))
    };
}

/// Builds a [`SubclassOf`](crate::SubclassOf) validator from one or more Rust types.
///
/// # Examples
///
/// ```
/// use type_rail::{subclass_of, Attribute, Type, Validator};
///
/// let p = subclass_of!(u32);
/// assert!(p.validate(&(), &Attribute::new("unit"), &Type::of::<u32>()).is_ok());
/// ```
#[macro_export]
macro_rules! subclass_of {
    ($($ty:ty),+ $(,)?) => {
        $crate::SubclassOf::new($crate::whitelist!($($ty),+))
    };
}

/// Builds an [`AllInstanceOf`](crate::AllInstanceOf) validator from one or more Rust types.
///
/// # Examples
///
/// ```
/// use type_rail::{all_instance_of, Attribute, Validator};
///
/// let p = all_instance_of!(str);
/// let items = Attribute::new("items");
/// assert!(p.validate(&(), &items, &["a", "b"]).is_ok());
/// assert!(p.validate(&(), &items, &42_i32).is_err());
/// ```
#[macro_export]
macro_rules! all_instance_of {
    ($($ty:ty),+ $(,)?) => {
        $crate::AllInstanceOf::new($crate::whitelist!($($ty),+))
    };
}

/// Builds an [`AllSubclassOf`](crate::AllSubclassOf) validator from one or more Rust types.
#[macro_export]
macro_rules! all_subclass_of {
    ($($ty:ty),+ $(,)?) => {
        $crate::AllSubclassOf::new($crate::whitelist!($($ty),+))
    };
}
