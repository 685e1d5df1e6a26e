//! Property-based tests for scope resolution and value aliasing.
//!
//! Strategies generate primitive values, chains of nested environments with
//! arbitrary declaration patterns, and sequences of mutations made through
//! aliased references.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use jsscope_eval::{Evaluator, PropertyKey, Value};
use jsscope_ir::{DeclKind, SharedInterner};
use proptest::prelude::*;

// -- Strategies --

fn primitive_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

fn decl_kind_strategy() -> impl Strategy<Value = DeclKind> {
    prop_oneof![Just(DeclKind::Let), Just(DeclKind::Const)]
}

// -- Properties --

proptest! {
    #[test]
    fn copy_of_primitive_survives_reassignment(
        original in primitive_strategy(),
        replacement in primitive_strategy(),
    ) {
        let interner = SharedInterner::new();
        let mut ev = Evaluator::new(interner.clone());
        let [a, b] = ["a", "b"].map(|s| interner.intern(s));
        let global = ev.global_env();

        ev.declare(global, a, original.clone(), DeclKind::Let).unwrap();
        let copied = ev.lookup(global, a).unwrap().copy_value();
        ev.declare(global, b, copied, DeclKind::Let).unwrap();
        ev.assign(global, b, replacement).unwrap();

        let after = ev.lookup(global, a).unwrap();
        // NaN never equals itself, so compare by same-value-zero
        prop_assert!(after.same_value_zero(&original));
        prop_assert!(original.alias_value().is_none());
    }

    #[test]
    fn aliases_observe_every_push(pushes in prop::collection::vec(-100i32..100, 0..20)) {
        let interner = SharedInterner::new();
        let mut ev = Evaluator::new(interner.clone());
        let array = ev.alloc_array(Vec::new());
        let alias = array.alias_value().expect("arrays are references");

        for (index, n) in pushes.iter().enumerate() {
            let holder = if index % 2 == 0 { &array } else { &alias };
            ev.set_property(holder, PropertyKey::Index(index), Value::number(*n)).unwrap();
        }

        let length = ev.get_property(&array, PropertyKey::Named(jsscope_ir::Name::LENGTH)).unwrap();
        prop_assert_eq!(length, Value::from_usize(pushes.len()));
        prop_assert_eq!(ev.iterate(&array).unwrap(), ev.iterate(&alias).unwrap());
    }

    #[test]
    fn lookup_returns_innermost_declaration(
        declared in prop::collection::vec(any::<bool>(), 1..12),
        kinds in prop::collection::vec(decl_kind_strategy(), 12),
    ) {
        let interner = SharedInterner::new();
        let mut ev = Evaluator::new(interner.clone());
        let name = interner.intern("name");

        let mut env = ev.global_env();
        let mut chain = Vec::new();
        for (depth, (&declares, &kind)) in declared.iter().zip(&kinds).enumerate() {
            if depth > 0 {
                env = ev.enter_block(env).unwrap();
            }
            if declares {
                ev.declare(env, name, Value::from_usize(depth), kind).unwrap();
            }
            chain.push(env);
        }

        let expected = declared.iter().rposition(|&declares| declares);
        match (ev.lookup(env, name), expected) {
            (Ok(value), Some(depth)) => prop_assert_eq!(value, Value::from_usize(depth)),
            (Err(_), None) => {}
            (result, expected) => prop_assert!(false, "lookup {:?}, expected depth {:?}", result, expected),
        }

        // unwinding restores outer visibility one level at a time
        while chain.len() > 1 {
            let inner = chain.pop().expect("non-empty");
            ev.exit_block(inner).unwrap();
        }
        prop_assert_eq!(ev.frame_depth(), 0);
    }
}
