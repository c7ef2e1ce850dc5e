use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;
use type_rail::{repr, Reflect, Type, TypeSet};

#[derive(Debug)]
#[allow(dead_code)]
struct Sensor {
    id: u32,
}

impl Reflect for Sensor {
    fn type_of(&self) -> Type {
        Type::of::<Sensor>().extends(Type::declare("Device"))
    }
}

fn element_types(value: &dyn Reflect) -> Option<Vec<Type>> {
    value.elements().map(|elements| elements.map(|e| e.type_of()).collect())
}

#[test]
fn scalars_report_their_own_type() {
    assert_eq!(1_u8.type_of(), Type::of::<u8>());
    assert_eq!(1.0_f32.type_of(), Type::of::<f32>());
    assert_eq!('c'.type_of(), Type::of::<char>());
    assert_eq!(().type_of(), Type::of::<()>());
    assert!(5_i64.as_type().is_none());
    assert!(5_i64.elements().is_none());
}

#[test]
fn strings_are_not_iterable() {
    assert!("abc".elements().is_none());
    assert!(String::from("abc").elements().is_none());
    assert_eq!("abc".type_of(), Type::of::<str>());
    assert_eq!(String::from("abc").type_of(), Type::of::<String>());
}

#[test]
fn strings_render_single_quoted() {
    assert_eq!(repr(&"5").to_string(), "'5'");
    assert_eq!(repr(&"say \"hi\"").to_string(), "'say \"hi\"'");
}

#[test]
fn strings_with_only_single_quotes_switch_to_double_quotes() {
    assert_eq!(repr(&String::from("it's")).to_string(), "\"it's\"");
    assert_eq!(repr(&"it's \"x\"").to_string(), "'it\\'s \"x\"'");
}

#[test]
fn types_are_types() {
    let ty = Type::of::<i64>();
    assert_eq!(ty.as_type(), Some(&ty));
    assert_eq!(ty.type_of(), Type::meta());
    assert_eq!(repr(&ty).to_string(), "<i64>");
}

#[test]
fn references_and_smart_pointers_are_transparent() {
    let boxed: Box<dyn Reflect> = Box::new(7_i16);
    let shared: Arc<dyn Reflect> = Arc::new(Type::of::<u8>());

    assert_eq!(boxed.type_of(), Type::of::<i16>());
    assert_eq!((&&7_i16).type_of(), Type::of::<i16>());
    assert!(shared.as_type().is_some());
}

#[test]
fn sequences_yield_their_items() {
    let vec = vec![1_i32, 2, 3];
    let deque: VecDeque<u8> = VecDeque::from([1, 2]);
    let array = [true, false];

    assert_eq!(element_types(&vec).unwrap(), vec![Type::of::<i32>(); 3]);
    assert_eq!(element_types(&deque).unwrap().len(), 2);
    assert_eq!(element_types(&array).unwrap(), vec![Type::of::<bool>(); 2]);
    assert_eq!(element_types(&&vec[..1]).unwrap().len(), 1);
}

#[test]
fn sets_yield_members_and_maps_yield_keys() {
    let btree_set: BTreeSet<u16> = [1, 2].into();
    let hash_set: HashSet<char> = ['a'].into();
    let btree_map: BTreeMap<&str, f64> = [("a", 1.0)].into();
    let hash_map: HashMap<u8, &str> = [(1, "one"), (2, "two")].into();

    assert_eq!(element_types(&btree_set).unwrap().len(), 2);
    assert_eq!(element_types(&hash_set).unwrap(), vec![Type::of::<char>()]);
    assert_eq!(element_types(&btree_map).unwrap(), vec![Type::of::<str>()]);
    assert_eq!(element_types(&hash_map).unwrap(), vec![Type::of::<u8>(); 2]);
}

#[test]
fn heterogeneous_collections_report_each_element() {
    let mixed: Vec<Box<dyn Reflect>> = vec![Box::new("a"), Box::new(1_i64), Box::new(Sensor { id: 9 })];
    let types = element_types(&mixed).unwrap();

    assert_eq!(types[0], Type::of::<str>());
    assert_eq!(types[1], Type::of::<i64>());
    assert!(types[2].is_subclass_of(&Type::declare("Device")));
}

#[test]
fn collections_render_through_element_reprs() {
    let mixed: Vec<Box<dyn Reflect>> = vec![Box::new("a"), Box::new(3_i32)];
    let map: BTreeMap<&str, i32> = [("k", 1)].into();

    assert_eq!(repr(&mixed).to_string(), "['a', 3]");
    assert_eq!(repr(&map).to_string(), "{'k': 1}");
    assert_eq!(repr(&Sensor { id: 2 }).to_string(), "Sensor { id: 2 }");
}

#[test]
fn options_delegate_to_their_content() {
    let some: Option<Vec<u8>> = Some(vec![1]);
    let none: Option<Vec<u8>> = None;

    assert_eq!(some.type_of(), Type::of::<Vec<u8>>());
    assert!(some.elements().is_some());
    assert_eq!(none.type_of(), Type::of::<()>());
    assert!(none.elements().is_none());
    assert_eq!(repr(&none).to_string(), "None");
}

#[test]
fn whitelists_are_iterable_collections_of_types() {
    let set = TypeSet::new([Type::of::<i64>(), Type::of::<f64>()]);
    assert_eq!(element_types(&set).unwrap(), vec![Type::meta(); 2]);
    assert_eq!(repr(&set).to_string(), "{<i64>, <f64>}");
}
