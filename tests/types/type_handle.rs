use std::collections::HashSet;
use type_rail::Type;

struct Meters;
struct Feet;

#[test]
fn native_handles_compare_by_type_id() {
    assert_eq!(Type::of::<i64>(), Type::of::<i64>());
    assert_ne!(Type::of::<i64>(), Type::of::<i32>());
    assert_ne!(Type::of::<Meters>(), Type::of::<Feet>());
}

#[test]
fn declared_handles_compare_by_name() {
    assert_eq!(Type::declare("Node"), Type::declare("Node"));
    assert_ne!(Type::declare("Node"), Type::declare("Edge"));
}

#[test]
fn declared_name_does_not_match_native_type() {
    assert_ne!(Type::declare("i64"), Type::of::<i64>());
}

#[test]
fn names_drop_module_paths() {
    assert_eq!(Type::of::<String>().name(), "String");
    assert_eq!(Type::of::<Vec<String>>().name(), "Vec<String>");
    assert_eq!(Type::of::<Meters>().name(), "Meters");
    assert_eq!(Type::of::<str>().name(), "str");
}

#[test]
fn display_wraps_name_in_angle_brackets() {
    assert_eq!(Type::of::<f64>().to_string(), "<f64>");
    assert_eq!(Type::meta().to_string(), "<Type>");
    assert_eq!(Type::iterable().to_string(), "<Iterable>");
    assert_eq!(format!("{:?}", Type::declare("Node")), "Type(\"Node\")");
}

#[test]
fn subclass_relation_is_reflexive_and_transitive() {
    let vehicle = Type::declare("Vehicle");
    let car = Type::declare("Car").extends(vehicle.clone());
    let coupe = Type::declare("Coupe").extends(car.clone());

    assert!(vehicle.is_subclass_of(&vehicle));
    assert!(coupe.is_subclass_of(&car));
    assert!(coupe.is_subclass_of(&vehicle));
    assert!(!vehicle.is_subclass_of(&coupe));
    assert!(!car.is_subclass_of(&coupe));
}

#[test]
fn multiple_bases_are_all_followed() {
    let readable = Type::declare("Readable");
    let writable = Type::declare("Writable");
    let file = Type::declare("File").extends(readable.clone()).extends(writable.clone());

    assert!(file.is_subclass_of(&readable));
    assert!(file.is_subclass_of(&writable));
    assert_eq!(file.bases().len(), 2);
}

#[test]
fn bases_are_shared_by_every_handle_of_a_type() {
    struct Kelvin;

    let temperature = Type::declare("Temperature");
    let earlier = Type::of::<Kelvin>();
    let extended = Type::of::<Kelvin>().extends(temperature.clone());

    assert_eq!(earlier, extended);
    assert!(earlier.is_subclass_of(&temperature));
    assert_eq!(earlier.bases(), extended.bases());
}

#[test]
fn cyclic_bases_terminate() {
    let ping = Type::declare("Ping");
    let pong = Type::declare("Pong").extends(ping.clone());
    let ping = ping.extends(pong.clone());

    assert!(ping.is_subclass_of(&pong));
    assert!(pong.is_subclass_of(&ping));
    assert!(!ping.is_subclass_of(&Type::declare("Neither")));
}

#[test]
fn extending_keeps_identity_for_hashing() {
    let base = Type::declare("Base");
    let plain = Type::of::<Meters>();
    let extended = Type::of::<Meters>().extends(base);

    let mut set = HashSet::new();
    set.insert(plain);
    assert!(!set.insert(extended));
}

#[test]
fn is_instance_uses_runtime_type_of_value() {
    assert!(Type::of::<i64>().is_instance(&4_i64));
    assert!(!Type::of::<i64>().is_instance(&4_u64));
    assert!(Type::meta().is_instance(&Type::of::<u8>()));
}

#[test]
fn handles_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Type>();
    assert_send_sync::<type_rail::TypeSet>();
}
