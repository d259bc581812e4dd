//! Unit tests for the value tree.

use std::cell::Cell;
use std::rc::Rc;

use rstest::rstest;
use serde_json::json;

use super::*;

#[rstest]
fn clones_alias_containers() {
    let original = Value::empty_object();
    let alias = original.clone();
    alias
        .set_attribute("foo", Value::from(1))
        .expect("extensible object accepts new keys");

    assert!(original.same_ref(&alias));
    assert_eq!(original.to_json(), json!({"foo": 1}));
}

#[rstest]
fn scalars_never_share_identity() {
    let text = Value::from("foo");
    assert!(!text.same_ref(&text.clone()));
}

#[rstest]
fn sealed_object_rejects_new_keys_but_accepts_existing() {
    let target = Value::object(Object::new().with("foo", Value::Null)).sealed();

    target
        .set_attribute("foo", Value::from("bar"))
        .expect("existing key stays writable");
    let err = target
        .set_attribute("baz", Value::from(1))
        .expect_err("sealed object rejects new keys");

    assert!(err.is_not_extensible());
    assert_eq!(target.to_json(), json!({"foo": "bar"}));
}

#[rstest]
fn frozen_object_rejects_existing_keys_as_read_only() {
    let target = Value::object(Object::new().with("foo", 1)).frozen();
    let err = target
        .set_attribute("foo", Value::from(2))
        .expect_err("frozen object rejects writes");

    assert_eq!(
        err,
        WriteError::ReadOnly {
            key: String::from("foo")
        }
    );
}

#[rstest]
fn extensibility_never_relaxes() {
    let target = Value::empty_object().frozen().non_extensible();
    assert_eq!(target.extensibility(), Some(Extensibility::Frozen));
}

#[rstest]
fn setter_receives_assigned_value() {
    let captured = Rc::new(Cell::new(0_i64));
    let sink = Rc::clone(&captured);
    let setter: Setter = Rc::new(move |value: Value| {
        if let Value::Number(number) = value {
            sink.set(number.as_i64().unwrap_or_default());
        }
    });
    let target = Value::object(
        Object::new().with_property("level", Property::accessor(None, Some(setter))),
    );

    target
        .set_attribute("level", Value::from(7))
        .expect("setter accepts writes");

    assert_eq!(captured.get(), 7);
}

#[rstest]
fn getter_only_attribute_is_computed_and_read_only() {
    let target = Value::object(
        Object::new().with_property("name", Property::getter(|| Value::from("fixed"))),
    );

    let property = match &target {
        Value::Object(object) => object.borrow().get("name").cloned(),
        _ => None,
    }
    .expect("property defined");
    assert!(property.is_computed());
    assert_eq!(
        target
            .attribute("name")
            .and_then(|v| v.as_str().map(str::to_owned))
            .as_deref(),
        Some("fixed")
    );

    let err = target
        .set_attribute("name", Value::from("other"))
        .expect_err("getter-only attribute rejects writes");
    assert!(matches!(err, WriteError::ReadOnly { .. }));
}

#[rstest]
fn getter_may_read_its_owner() {
    let target = Value::object(Object::new().with("foo", "bar"));
    let owner = target.clone();
    if let Value::Object(object) = &target {
        object.borrow_mut().define(
            "baz",
            Property::getter(move || owner.attribute("foo").unwrap_or_default()),
        );
    }

    assert_eq!(target.to_json(), json!({"foo": "bar", "baz": "bar"}));
}

#[rstest]
fn hidden_attributes_are_skipped_by_enumeration_and_json() {
    let target = Value::object(
        Object::new()
            .with("shown", 1)
            .with_property("hidden", Property::data(2).hidden()),
    );

    assert_eq!(target.own_keys(), vec!["shown", "hidden"]);
    assert_eq!(target.enumerable_keys(), vec!["shown"]);
    assert_eq!(target.to_json(), json!({"shown": 1}));
}

#[rstest]
#[case("0", true)]
#[case("1", true)]
#[case("2", false)]
#[case("01", false)]
#[case("-1", false)]
#[case("length", false)]
fn array_own_keys_are_canonical_indices(#[case] key: &str, #[case] expected: bool) {
    let array = Value::from(json!(["a", "b"]));
    assert_eq!(array.has_own(key), expected);
}

#[rstest]
fn array_grows_with_nulls_when_written_past_the_end() {
    let array = Value::from(json!(["a"]));
    array
        .set_attribute("3", Value::from("d"))
        .expect("extensible array grows");

    assert_eq!(array.to_json(), json!(["a", null, null, "d"]));
}

#[rstest]
#[case::u64_max("18446744073709551615")]
#[case::u32_max("4294967295")]
#[case::past_u32("4294967296")]
#[case::far_gap("1026")]
fn array_rejects_unreachable_indices(#[case] key: &str) {
    let array = Value::from(json!(["a"]));
    let err = array
        .set_attribute(key, Value::from(1))
        .expect_err("index is out of reach");

    assert_eq!(
        err,
        WriteError::InvalidIndex {
            key: key.to_owned()
        }
    );
    assert_eq!(array.to_json(), json!(["a"]));
}

#[rstest]
fn array_accepts_the_largest_gap() {
    let array = Value::from(json!(["a"]));
    array
        .set_attribute("1025", Value::from("z"))
        .expect("gap of 1024 is allowed");

    assert_eq!(array.len(), Some(1026));
}

#[rstest]
fn array_rejects_named_keys() {
    let array = Value::empty_array();
    let err = array
        .set_attribute("foo", Value::Null)
        .expect_err("arrays only accept indices");

    assert!(matches!(err, WriteError::InvalidIndex { .. }));
}

#[rstest]
fn sealed_array_refuses_push() {
    let array = Value::from(json!([1, 2])).sealed();
    let Value::Array(inner) = &array else {
        panic!("expected an array");
    };
    let err = inner
        .borrow_mut()
        .push_all([Value::from(3)])
        .expect_err("sealed arrays cannot grow");

    assert_eq!(
        err,
        WriteError::NotExtensible {
            key: String::from("2")
        }
    );
}

#[rstest]
#[case(json!(null), false)]
#[case(json!(false), false)]
#[case(json!(0), false)]
#[case(json!(""), false)]
#[case(json!(true), true)]
#[case(json!(1), true)]
#[case(json!("no"), true)]
#[case(json!({}), true)]
#[case(json!([]), true)]
fn truthiness_follows_dynamic_conventions(
    #[case] input: serde_json::Value,
    #[case] expected: bool,
) {
    assert_eq!(Value::from(input).is_truthy(), expected);
}

#[rstest]
fn pointer_walks_nested_attributes() {
    let tree = Value::from(json!({"a": {"b": [10, 20]}}));
    let found = tree.pointer(["a", "b", "1"]).map(|v| v.to_json());

    assert_eq!(found, Some(json!(20)));
    assert!(tree.pointer(["a", "missing"]).is_none());
}

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Server {
    host: String,
    ports: Vec<u16>,
}

#[rstest]
fn typed_values_round_trip_through_the_tree() {
    let server = Server {
        host: String::from("localhost"),
        ports: vec![80, 443],
    };
    let tree = Value::from_serialize(&server).expect("server serialises");
    let back: Server = tree.deserialize_into().expect("tree deserialises");

    assert_eq!(back, server);
}
