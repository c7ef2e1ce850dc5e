use std::sync::Arc;
use type_rail::{instance_of, Attribute, Reflect, ValidationError, ValidationErrorKind, Validator};

fn non_empty(_: &dyn Reflect, attribute: &Attribute, value: &dyn Reflect) -> Result<(), ValidationError> {
    if value.elements().is_some_and(|mut elements| elements.next().is_some()) {
        return Ok(());
    }
    Err(ValidationError::new(
        ValidationErrorKind::NotIterable,
        attribute,
        value,
        format!("'{}' must not be empty", attribute.name()),
    ))
}

#[test]
fn functions_with_the_validator_signature_are_validators() {
    let field = Attribute::new("tags");
    assert!(non_empty.validate(&(), &field, &vec![1_u8]).is_ok());

    let err = non_empty.validate(&(), &field, &Vec::<u8>::new()).unwrap_err();
    assert_eq!(err.message(), "'tags' must not be empty");
}

#[test]
fn validators_can_be_stored_as_trait_objects() {
    let validators: Vec<Box<dyn Validator>> =
        vec![Box::new(instance_of!(Vec<u8>)), Box::new(non_empty)];
    let field = Attribute::new("bytes");

    for validator in &validators {
        assert!(validator.validate(&(), &field, &vec![1_u8, 2]).is_ok());
    }
    assert!(validators.iter().any(|v| v.validate(&(), &field, &Vec::<u8>::new()).is_err()));
}

#[test]
fn validators_are_shareable_across_threads() {
    let shared = Arc::new(instance_of!(u64));
    let handles: Vec<_> = (0..4_u64)
        .map(|i| {
            let validator = Arc::clone(&shared);
            std::thread::spawn(move || validator.validate(&(), &Attribute::new("n"), &i).is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn owner_is_not_inspected() {
    #[derive(Debug)]
    struct Record;
    impl Reflect for Record {
        fn type_of(&self) -> type_rail::Type {
            type_rail::Type::of::<Record>()
        }
    }

    let p = instance_of!(bool);
    let field = Attribute::new("flag");
    assert_eq!(p.validate(&Record, &field, &true), p.validate(&(), &field, &true));
}
