use super::{animal, dog, field, Rock};
use type_rail::{all_subclass_of, Reflect, Type, ValidationErrorKind, Validator};

#[test]
fn accepts_collections_of_derived_types() {
    let p = all_subclass_of([animal()]);
    assert!(p.validate(&(), &field("kinds"), &vec![animal(), dog()]).is_ok());
    assert!(p.validate(&(), &field("kinds"), &Vec::<Type>::new()).is_ok());
}

#[test]
fn element_that_is_not_a_type_has_its_own_kind() {
    let p = all_subclass_of([animal()]);
    let kinds: Vec<Box<dyn Reflect>> = vec![Box::new(dog()), Box::new(Rock)];
    let err = p.validate(&(), &field("kinds"), &kinds).unwrap_err();

    assert_eq!(err.kind(), ValidationErrorKind::ElementNotAType);
    assert_eq!(err.message(), "'kinds' must contain <Type> (has Rock that is <Rock>)");
    assert_eq!(err.element().unwrap().index, 1);
    assert!(err.whitelist().is_none());
}

#[test]
fn element_outside_the_whitelist_is_not_a_subclass() {
    let p = all_subclass_of([animal()]);
    let err = p
        .validate(&(), &field("kinds"), &[dog(), Type::of::<Rock>()])
        .unwrap_err();

    assert_eq!(err.kind(), ValidationErrorKind::ElementNotSubclass);
    assert_eq!(
        err.message(),
        "'kinds' must contain subclass of <Animal> (has <Rock> that is <Type>)"
    );
    assert_eq!(err.whitelist(), Some(p.whitelist()));
    assert_eq!(err.value(), "[<Dog>, <Rock>]");
}

#[test]
fn non_iterables_fail_with_the_iterability_kind() {
    let p = all_subclass_of([animal()]);
    let err = p.validate(&(), &field("kinds"), &animal()).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::NotIterable);
    assert_eq!(err.message(), "'kinds' must be <Iterable> (is <Animal> that is <Type>)");
}

#[test]
fn validate_each_separates_both_element_kinds() {
    let p = all_subclass_of([animal()]);
    let kinds: Vec<Box<dyn Reflect>> =
        vec![Box::new(Rock), Box::new(dog()), Box::new(Type::of::<Rock>())];

    let errors = p.validate_each(&(), &field("kinds"), &kinds).into_errors().unwrap();
    let found: Vec<_> = errors.iter().map(|e| e.kind()).collect();
    assert_eq!(
        found,
        vec![ValidationErrorKind::ElementNotAType, ValidationErrorKind::ElementNotSubclass]
    );
}

#[test]
fn check_mirrors_validate() {
    let p = all_subclass_of([animal()]);
    assert!(p.check(&vec![dog()]));
    assert!(!p.check(&vec![Type::of::<Rock>()]));
    assert!(!p.check(&dog()));
}
