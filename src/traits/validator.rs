use crate::traits::Reflect;
use crate::types::{Attribute, ValidationError};

/// A field validator invoked after a field has been assigned.
///
/// The calling convention mirrors what record-construction frameworks
/// expect: the record under construction, the descriptor of the field being
/// assigned, and the candidate value. The owner is passed through untouched
/// by every validator in this crate.
///
/// Any closure with the same signature is a validator:
///
/// ```
/// use type_rail::{Attribute, Reflect, ValidationError, Validator};
///
/// let accept_all = |_: &dyn Reflect, _: &Attribute, _: &dyn Reflect| -> Result<(), ValidationError> {
///     Ok(())
/// };
/// assert!(accept_all.validate(&(), &Attribute::new("x"), &1_i32).is_ok());
/// ```
pub trait Validator {
    /// Returns `Ok(())` if `value` is acceptable for `attribute`.
    fn validate(
        &self,
        owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&dyn Reflect, &Attribute, &dyn Reflect) -> Result<(), ValidationError>,
{
    #[inline]
    fn validate(
        &self,
        owner: &dyn Reflect,
        attribute: &Attribute,
        value: &dyn Reflect,
    ) -> Result<(), ValidationError> {
        self(owner, attribute, value)
    }
}
