use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_copy_value_primitive_is_independent() {
    let mut holder_a = Value::number(5);
    let holder_b = holder_a.copy_value();
    holder_a = Value::number(8);
    assert_eq!(holder_a, Value::number(8));
    assert_eq!(holder_b, Value::number(5));
}

#[test]
fn test_alias_value_only_for_references() {
    assert_eq!(Value::Bool(true).alias_value(), None);
    assert_eq!(Value::string("x").alias_value(), None);
}

#[test]
fn test_truthiness() {
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(!Value::number(0).is_truthy());
    assert!(!Value::Number(f64::NAN).is_truthy());
    assert!(!Value::string("").is_truthy());
    assert!(Value::string("0").is_truthy());
    assert!(Value::number(-1).is_truthy());
}

#[test]
fn test_strict_equals() {
    assert!(Value::string("a").strict_equals(&Value::string("a")));
    assert!(!Value::number(1).strict_equals(&Value::string("1")));
    assert!(!Value::Null.strict_equals(&Value::Undefined));
    assert!(!Value::Number(f64::NAN).strict_equals(&Value::Number(f64::NAN)));
    assert!(Value::Number(f64::NAN).same_value_zero(&Value::Number(f64::NAN)));
}

#[test]
fn test_to_number() {
    assert!(Value::Undefined.to_number().is_nan());
    assert_eq!(Value::Null.to_number(), 0.0);
    assert_eq!(Value::Bool(true).to_number(), 1.0);
    assert_eq!(Value::string(" 42 ").to_number(), 42.0);
    assert_eq!(Value::string("").to_number(), 0.0);
    assert!(Value::string("abc").to_number().is_nan());
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(5.0), "5");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_display_primitives() {
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(Value::number(15).to_string(), "15");
}

#[test]
fn test_cloned_string_shares_its_payload() {
    let Value::Str(original) = Value::string("scope") else {
        panic!("expected a string");
    };
    let cloned = original.clone();
    assert!(std::ptr::eq(&*original, &*cloned));
    assert_eq!(&*cloned, "scope");
}
