use super::{animal, field};
use type_rail::{
    all_instance_of, all_subclass_of, instance_of, subclass_of, try_all_instance_of,
    try_all_subclass_of, try_instance_of, try_subclass_of, AllSubclassOf, Type, ValidationErrorKind,
    Validator, WhitelistError,
};

#[test]
fn try_factories_reject_empty_whitelists() {
    assert!(matches!(try_instance_of([]), Err(WhitelistError::Empty { .. })));
    assert!(matches!(try_subclass_of([]), Err(WhitelistError::Empty { .. })));
    assert!(matches!(try_all_instance_of([]), Err(WhitelistError::Empty { .. })));
    assert!(matches!(try_all_subclass_of([]), Err(WhitelistError::Empty { .. })));
}

#[test]
#[should_panic(expected = "must be non-empty")]
fn instance_of_panics_on_empty_whitelist() {
    let _ = instance_of(Vec::new());
}

#[test]
#[should_panic(expected = "must be non-empty")]
fn all_subclass_of_panics_on_empty_whitelist() {
    let _ = all_subclass_of(Vec::new());
}

#[test]
fn single_type_whitelist_accepts_and_rejects() {
    let p = try_instance_of([Type::of::<i64>()]).unwrap();
    assert!(p.validate(&(), &field("n"), &1_i64).is_ok());
    assert!(p.validate(&(), &field("n"), &"1").is_err());
}

#[test]
fn factories_share_whitelist_semantics() {
    let types = [Type::of::<i64>(), Type::of::<f64>(), Type::of::<i64>()];
    assert_eq!(instance_of(types.clone()).whitelist().len(), 2);
    assert_eq!(subclass_of(types.clone()).whitelist().len(), 2);
    assert_eq!(all_instance_of(types.clone()).whitelist().len(), 2);
    assert_eq!(all_subclass_of(types).whitelist().len(), 2);
}

// The all-elements subclass factory must build the collection validator, not
// the scalar one: a collection of subclasses passes and a bare type is
// rejected as non-iterable.
#[test]
fn all_subclass_of_builds_the_collection_validator() {
    let p: AllSubclassOf = all_subclass_of([animal()]);
    assert!(p.validate(&(), &field("kinds"), &vec![animal()]).is_ok());

    let err = p.validate(&(), &field("kinds"), &animal()).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::NotIterable);
}
