#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::cell::ObjectCell;
use jsscope_ir::SharedInterner;
use pretty_assertions::assert_eq;

fn evaluator() -> Evaluator {
    Evaluator::new(SharedInterner::new())
}

#[test]
fn test_inspect_primitives() {
    let ev = evaluator();
    assert_eq!(ev.inspect(&Value::number(5)), "5");
    assert_eq!(ev.inspect(&Value::number(2.5)), "2.5");
    assert_eq!(ev.inspect(&Value::Undefined), "undefined");
    assert_eq!(ev.inspect(&Value::Null), "null");
    assert_eq!(ev.inspect(&Value::string("it's")), "'it\\'s'");
}

#[test]
fn test_inspect_nested_collections() {
    let mut ev = evaluator();
    let name = ev.interner().intern("name");
    let tags = ev.interner().intern("tags");
    let list = ev.alloc_array(vec![Value::string("a"), Value::number(1)]);
    let object: ObjectCell = [(name, Value::string("Ann")), (tags, list)]
        .into_iter()
        .collect();
    let object = ev.alloc_object(object);

    assert_eq!(ev.inspect(&object), "{ name: 'Ann', tags: [ 'a', 1 ] }");
}

#[test]
fn test_inspect_empty_collections() {
    let mut ev = evaluator();
    let array = ev.alloc_array(vec![]);
    let object = ev.alloc_object(ObjectCell::new());
    assert_eq!(ev.inspect(&array), "[]");
    assert_eq!(ev.inspect(&object), "{}");
}

#[test]
fn test_inspect_circular() {
    let mut ev = evaluator();
    let array = ev.alloc_array(vec![Value::number(1)]);
    let Value::Ref(id) = array else {
        panic!("expected reference");
    };
    if let Ok(Cell::Array(items)) = ev.heap_mut().get_mut(id) {
        items.push(array.clone());
    }
    assert_eq!(ev.inspect(&array), "[ 1, [Circular] ]");
    assert_eq!(ev.to_display_string(&array), "1,");
}

#[test]
fn test_inspect_quotes_non_identifier_keys() {
    let mut ev = evaluator();
    let key = ev.interner().intern("first name");
    let object = ev.alloc_object([(key, Value::Bool(true))].into_iter().collect());
    assert_eq!(ev.inspect(&object), "{ 'first name': true }");
}

#[test]
fn test_inspect_builtin_function() {
    let ev = evaluator();
    let object = ev.lookup(ev.global_env(), jsscope_ir::Name::OBJECT).unwrap();
    let keys = ev.interner().intern("keys");
    let keys = ev
        .get_property(&object, crate::PropertyKey::Named(keys))
        .unwrap();
    assert_eq!(ev.inspect(&keys), "[Function: keys]");
}

#[test]
fn test_display_string() {
    let mut ev = evaluator();
    let array = ev.alloc_array(vec![Value::number(1), Value::Null, Value::string("x")]);
    let object = ev.alloc_object(ObjectCell::new());
    assert_eq!(ev.to_display_string(&array), "1,,x");
    assert_eq!(ev.to_display_string(&object), "[object Object]");
    assert_eq!(ev.format_log_arg(&Value::string("raw")), "raw");
}

#[test]
fn test_format_key() {
    assert_eq!(format_key("name"), "name");
    assert_eq!(format_key("_private$"), "_private$");
    assert_eq!(format_key("1"), "'1'");
    assert_eq!(format_key("a-b"), "'a-b'");
}
