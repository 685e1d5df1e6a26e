//! End-to-end behaviour of scripts: hoisting, loops, `this`, destructuring,
//! spread and builtins.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use jsscope_eval::{
    buffer_handler, EvalError, EvalErrorKind, Evaluator, EvaluatorBuilder, SharedPrintHandler,
};
use jsscope_ir::{
    BinaryOp, DeclKind, FunctionBody, FunctionKind, LogicalOp, Pattern, PatternProp, Script,
    ScriptBuilder, SharedInterner, Stmt, UnaryOp,
};
use pretty_assertions::assert_eq;

/// Run the statements built by `build` and return what they logged.
fn run_with(strict: bool, build: impl FnOnce(&ScriptBuilder<'_>) -> Vec<Stmt>) -> Result<String, EvalError> {
    let interner = SharedInterner::new();
    let b = ScriptBuilder::new(&interner);
    let script = Script::new(build(&b));
    let output = buffer_handler();
    let mut ev = EvaluatorBuilder::new(interner.clone())
        .strict_mode(strict)
        .print_handler(output.clone())
        .build();
    ev.run_script(&script)?;
    Ok(output.get_output())
}

fn run(build: impl FnOnce(&ScriptBuilder<'_>) -> Vec<Stmt>) -> Result<String, EvalError> {
    run_with(true, build)
}

#[test]
fn var_is_hoisted_as_undefined() {
    let out = run(|b| {
        vec![
            b.log(vec![b.ident("later")]),
            b.var_("later", b.num(1.0)),
            b.log(vec![b.ident("later")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "undefined\n1\n");
}

#[test]
fn var_inside_if_is_function_scoped() {
    let out = run(|b| {
        vec![
            b.func_decl(
                "scoped",
                &[],
                vec![
                    b.if_(b.boolean(true), vec![b.var_("inner", b.str("visible"))], None),
                    b.ret(b.ident("inner")),
                ],
            ),
            b.log(vec![b.call(b.ident("scoped"), vec![])]),
        ]
    })
    .unwrap();
    assert_eq!(out, "visible\n");
}

#[test]
fn let_inside_block_is_not_visible_outside() {
    let err = run(|b| {
        vec![
            b.block(vec![b.let_("inner", b.num(1.0))]),
            b.log(vec![b.ident("inner")]),
        ]
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UnresolvedName {
            name: "inner".to_owned(),
            depth: 0
        }
    );
}

#[test]
fn function_declarations_are_callable_before_their_statement() {
    let out = run(|b| {
        vec![
            b.log(vec![b.call(b.ident("greet"), vec![b.str("Ann")])]),
            b.func_decl("greet", &["name"], vec![b.ret(b.concat(vec![b.str("hi "), b.ident("name")]))]),
        ]
    })
    .unwrap();
    assert_eq!(out, "hi Ann\n");
}

#[test]
fn redeclaring_let_in_one_script_fails() {
    let err = run(|b| vec![b.let_("x", b.num(1.0)), b.let_("x", b.num(2.0))]).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redeclaration { .. }));
}

#[test]
fn let_colliding_with_hoisted_var_fails() {
    let err = run(|b| {
        vec![
            b.let_("x", b.num(1.0)),
            b.block(vec![b.var_("x", b.num(2.0))]),
        ]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redeclaration { .. }));
}

#[test]
fn const_reassignment_fails_without_mutating() {
    let err = run(|b| {
        vec![
            b.const_("fixed", b.num(1.0)),
            b.assign("fixed", b.num(2.0)),
        ]
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ImmutableBinding {
            name: "fixed".to_owned()
        }
    );
}

/// Evaluator logging into a buffer, for tests that run several scripts
/// against the same bindings.
fn evaluator(interner: &SharedInterner) -> (Evaluator, SharedPrintHandler) {
    let output = buffer_handler();
    let ev = EvaluatorBuilder::new(interner.clone())
        .print_handler(output.clone())
        .build();
    (ev, output)
}

#[test]
fn failed_destructuring_declaration_binds_nothing() {
    let interner = SharedInterner::new();
    let b = ScriptBuilder::new(&interner);
    let (mut ev, output) = evaluator(&interner);

    let duplicate = Script::new(vec![b.declare(
        DeclKind::Let,
        b.array_pat(&["a", "a"]),
        Some(b.array(vec![b.num(1.0), b.num(2.0)])),
    )]);
    let err = ev.run_script(&duplicate).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redeclaration { .. }));
    let lookup = ev.lookup(ev.global_env(), b.name("a")).unwrap_err();
    assert!(matches!(lookup.kind, EvalErrorKind::UnresolvedName { .. }));

    // The name is still free for a later declaration.
    let retry = Script::new(vec![
        b.declare(DeclKind::Let, b.array_pat(&["a"]), Some(b.array(vec![b.num(3.0)]))),
        b.log(vec![b.ident("a")]),
    ]);
    ev.run_script(&retry).unwrap();
    assert_eq!(output.get_output(), "3\n");
}

#[test]
fn nested_pattern_failure_leaves_earlier_names_unbound() {
    let interner = SharedInterner::new();
    let b = ScriptBuilder::new(&interner);
    let (mut ev, _output) = evaluator(&interner);

    // let { x, y: { z } } = { x: 1 };
    let pattern = Pattern::Object {
        props: vec![b.shorthand("x"), b.rename("y", b.object_pat(&["z"]))],
        rest: None,
    };
    let script = Script::new(vec![b.declare(
        DeclKind::Let,
        pattern,
        Some(b.object(vec![("x", b.num(1.0))])),
    )]);
    let err = ev.run_script(&script).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidDestructure {
            type_name: "undefined".to_owned()
        }
    );
    assert!(ev.lookup(ev.global_env(), b.name("x")).is_err());
}

#[test]
fn pattern_assignment_to_a_const_changes_nothing() {
    let interner = SharedInterner::new();
    let b = ScriptBuilder::new(&interner);
    let (mut ev, output) = evaluator(&interner);

    let setup = Script::new(vec![
        b.let_("a", b.num(1.0)),
        b.const_("c", b.num(2.0)),
    ]);
    ev.run_script(&setup).unwrap();

    let swap = Script::new(vec![b.assign_pattern(
        b.array_pat(&["a", "c"]),
        b.array(vec![b.num(10.0), b.num(20.0)]),
    )]);
    let err = ev.run_script(&swap).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ImmutableBinding {
            name: "c".to_owned()
        }
    );

    ev.run_script(&Script::new(vec![b.log(vec![b.ident("a"), b.ident("c")])]))
        .unwrap();
    assert_eq!(output.get_output(), "1 2\n");
}

#[test]
fn far_index_write_raises_invalid_array_length() {
    let err = run(|b| {
        vec![
            b.let_("arr", b.array(vec![])),
            b.set_index(b.ident("arr"), b.num(4.0e9), b.num(1.0)),
        ]
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidArrayLength {
            length: 4_000_000_001
        }
    );

    let err = run(|b| {
        vec![
            b.let_("arr", b.array(vec![b.num(1.0)])),
            b.set(b.ident("arr"), "length", b.num(4.0e9)),
        ]
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvalidArrayLength {
            length: 4_000_000_000
        }
    );
}

#[test]
fn nearby_index_write_fills_holes() {
    let out = run(|b| {
        vec![
            b.let_("arr", b.array(vec![b.num(1.0)])),
            b.set_index(b.ident("arr"), b.num(3.0), b.num(4.0)),
            b.log(vec![b.ident("arr"), b.member(b.ident("arr"), "length")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "[ 1, undefined, undefined, 4 ] 4\n");
}

#[test]
fn var_may_replace_a_function_declaration_but_let_may_not() {
    let out = run(|b| {
        vec![
            b.func_decl("pick", &[], vec![b.ret(b.num(1.0))]),
            b.var_("pick", b.num(2.0)),
            b.log(vec![b.ident("pick")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "2\n");

    let err = run(|b| {
        vec![
            b.func_decl("pick", &[], vec![b.ret(b.num(1.0))]),
            b.let_("pick", b.num(2.0)),
        ]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redeclaration { .. }));
}

#[test]
fn reading_an_unknown_computed_key_does_not_intern_it() {
    let interner = SharedInterner::new();
    let b = ScriptBuilder::new(&interner);
    let (mut ev, output) = evaluator(&interner);

    // The key is built at run time, so the script itself never interns it.
    let script = Script::new(vec![
        b.const_("box", b.object(vec![("kept", b.num(1.0))])),
        b.log(vec![b.index(
            b.ident("box"),
            b.add(b.str("never-"), b.str("stored")),
        )]),
        b.log(vec![b.index(b.ident("box"), b.add(b.str("ke"), b.str("pt")))]),
    ]);
    ev.run_script(&script).unwrap();
    assert_eq!(output.get_output(), "undefined\n1\n");
    assert_eq!(interner.get("never-stored"), None);
}

#[test]
fn const_object_contents_stay_mutable() {
    let out = run(|b| {
        vec![
            b.const_("user", b.object(vec![("name", b.str("A"))])),
            b.set(b.ident("user"), "name", b.str("B")),
            b.log(vec![b.ident("user")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "{ name: 'B' }\n");
}

#[test]
fn implicit_global_only_in_sloppy_mode() {
    let build = |b: &ScriptBuilder<'_>| {
        vec![
            b.func_decl("leak", &[], vec![b.assign("leaked", b.num(1.0))]),
            b.expr(b.call(b.ident("leak"), vec![])),
            b.log(vec![b.ident("leaked")]),
        ]
    };
    assert_eq!(run_with(false, build).unwrap(), "1\n");
    let err = run_with(true, build).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnresolvedName { .. }));
}

#[test]
fn for_of_with_let_creates_a_binding_per_iteration() {
    let out = run(|b| {
        vec![
            b.const_("readers", b.array(vec![])),
            b.for_of(
                DeclKind::Let,
                b.pat("n"),
                b.array(vec![b.num(1.0), b.num(2.0), b.num(3.0)]),
                vec![b.expr(b.method(
                    b.ident("readers"),
                    "push",
                    vec![b.arrow_expr(&[], b.ident("n"))],
                ))],
            ),
            b.log(vec![b.method(
                b.ident("readers"),
                "map",
                vec![b.arrow_expr(&["read"], b.call(b.ident("read"), vec![]))],
            )]),
        ]
    })
    .unwrap();
    assert_eq!(out, "[ 1, 2, 3 ]\n");
}

#[test]
fn for_of_with_var_shares_one_binding() {
    let out = run(|b| {
        vec![
            b.const_("readers", b.array(vec![])),
            b.for_of(
                DeclKind::Var,
                b.pat("n"),
                b.array(vec![b.num(1.0), b.num(2.0), b.num(3.0)]),
                vec![b.expr(b.method(
                    b.ident("readers"),
                    "push",
                    vec![b.arrow_expr(&[], b.ident("n"))],
                ))],
            ),
            b.log(vec![b.method(
                b.ident("readers"),
                "map",
                vec![b.arrow_expr(&["read"], b.call(b.ident("read"), vec![]))],
            )]),
            b.log(vec![b.ident("n")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "[ 3, 3, 3 ]\n3\n");
}

#[test]
fn for_in_visits_own_keys_in_insertion_order() {
    let out = run(|b| {
        vec![
            b.const_("scores", b.object(vec![("b", b.num(2.0)), ("a", b.num(1.0))])),
            b.for_in(
                DeclKind::Const,
                "key",
                b.ident("scores"),
                vec![b.log(vec![b.ident("key"), b.index(b.ident("scores"), b.ident("key"))])],
            ),
            b.for_in(
                DeclKind::Let,
                "i",
                b.array(vec![b.str("x")]),
                vec![b.log(vec![b.unary(UnaryOp::TypeOf, b.ident("i")), b.ident("i")])],
            ),
        ]
    })
    .unwrap();
    assert_eq!(out, "b 2\na 1\nstring 0\n");
}

#[test]
fn method_call_binds_this_and_plain_call_does_not() {
    let out = run(|b| {
        vec![
            b.const_(
                "counter",
                b.object(vec![
                    ("count", b.num(0.0)),
                    (
                        "increment",
                        b.function(
                            &[],
                            vec![
                                b.set(
                                    b.this(),
                                    "count",
                                    b.add(b.member(b.this(), "count"), b.num(1.0)),
                                ),
                                b.ret(b.member(b.this(), "count")),
                            ],
                        ),
                    ),
                    ("whoami", b.function(&[], vec![b.ret(b.unary(UnaryOp::TypeOf, b.this()))])),
                ]),
            ),
            b.expr(b.method(b.ident("counter"), "increment", vec![])),
            b.log(vec![b.method(b.ident("counter"), "increment", vec![])]),
            b.const_("detached", b.member(b.ident("counter"), "whoami")),
            b.log(vec![b.call(b.ident("detached"), vec![])]),
        ]
    })
    .unwrap();
    assert_eq!(out, "2\nundefined\n");
}

#[test]
fn arrow_functions_resolve_this_lexically() {
    let out = run(|b| {
        vec![
            b.const_(
                "team",
                b.object(vec![
                    ("name", b.str("core")),
                    ("members", b.array(vec![b.str("a"), b.str("b")])),
                    (
                        "describe",
                        b.function(
                            &[],
                            vec![b.ret(b.method(
                                b.member(b.this(), "members"),
                                "map",
                                vec![b.arrow_expr(
                                    &["m"],
                                    b.concat(vec![b.ident("m"), b.str("@"), b.member(b.this(), "name")]),
                                )],
                            ))],
                        ),
                    ),
                    ("arrow", b.arrow_expr(&[], b.unary(UnaryOp::TypeOf, b.this()))),
                ]),
            ),
            b.log(vec![b.method(b.ident("team"), "describe", vec![])]),
            b.log(vec![b.method(b.ident("team"), "arrow", vec![])]),
        ]
    })
    .unwrap();
    assert_eq!(out, "[ 'a@core', 'b@core' ]\nundefined\n");
}

#[test]
fn reading_a_property_of_undefined_fails() {
    let err = run(|b| {
        vec![
            b.let_("nothing", b.undefined()),
            b.expr(b.member(b.ident("nothing"), "name")),
        ]
    })
    .unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::PropertyOfNullish {
            key: "name".to_owned(),
            type_name: "undefined".to_owned()
        }
    );
}

#[test]
fn calling_a_missing_method_fails() {
    let err = run(|b| {
        vec![
            b.const_("plain", b.object(vec![])),
            b.expr(b.method(b.ident("plain"), "go", vec![])),
        ]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NoSuchMethod { .. }));
}

#[test]
fn array_destructuring_with_holes_defaults_and_rest() {
    let out = run(|b| {
        vec![
            b.declare(
                DeclKind::Const,
                Pattern::Array {
                    elements: vec![Some(b.pat("first")), None, Some(b.pat("third")), Some(b.pat("fourth"))],
                    rest: Some(Box::new(b.pat("others"))),
                },
                Some(b.array(vec![b.num(1.0), b.num(2.0), b.num(3.0)])),
            ),
            b.log(vec![b.ident("first"), b.ident("third"), b.ident("fourth"), b.ident("others")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "1 3 undefined []\n");
}

#[test]
fn object_destructuring_with_rename_nesting_and_rest() {
    let out = run(|b| {
        vec![
            b.const_(
                "person",
                b.object(vec![
                    ("name", b.str("Ann")),
                    ("age", b.num(30.0)),
                    ("address", b.object(vec![("city", b.str("Oslo"))])),
                    ("role", b.str("dev")),
                ]),
            ),
            b.declare(
                DeclKind::Let,
                Pattern::Object {
                    props: vec![
                        b.rename("name", b.pat("who")),
                        b.rename("address", b.object_pat(&["city"])),
                        b.shorthand("missing"),
                    ],
                    rest: Some(b.name("rest")),
                },
                Some(b.ident("person")),
            ),
            b.log(vec![b.ident("who"), b.ident("city"), b.ident("missing"), b.ident("rest")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "Ann Oslo undefined { age: 30, role: 'dev' }\n");
}

#[test]
fn destructuring_assignment_swaps() {
    let out = run(|b| {
        vec![
            b.let_("a", b.num(1.0)),
            b.let_("b", b.num(2.0)),
            b.assign_pattern(b.array_pat(&["a", "b"]), b.array(vec![b.ident("b"), b.ident("a")])),
            b.log(vec![b.ident("a"), b.ident("b")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "2 1\n");
}

#[test]
fn destructuring_null_fails() {
    let err = run(|b| {
        vec![b.declare(DeclKind::Const, b.object_pat(&["x"]), Some(b.null()))]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::InvalidDestructure { .. }));
}

#[test]
fn destructured_parameters() {
    let out = run(|b| {
        vec![
            b.const_(
                "describe",
                b.function_patterns(
                    FunctionKind::Arrow,
                    vec![b.object_pat(&["name", "age"]), b.array_pat(&["x"])],
                    FunctionBody::Expr(b.concat(vec![
                        b.ident("name"),
                        b.str(" "),
                        b.ident("age"),
                        b.str(" "),
                        b.ident("x"),
                    ])),
                ),
            ),
            b.log(vec![b.call(
                b.ident("describe"),
                vec![b.object(vec![("name", b.str("Bo")), ("age", b.num(7.0))]), b.array(vec![b.num(9.0)])],
            )]),
        ]
    })
    .unwrap();
    assert_eq!(out, "Bo 7 9\n");
}

#[test]
fn spread_in_arrays_objects_and_calls() {
    let out = run(|b| {
        vec![
            b.const_("base", b.array(vec![b.num(1.0), b.num(2.0)])),
            b.const_(
                "more",
                b.array_with(vec![b.item(b.num(0.0)), b.spread(b.ident("base")), b.item(b.num(3.0))]),
            ),
            b.const_("defaults", b.object(vec![("a", b.num(1.0)), ("b", b.num(2.0))])),
            b.const_(
                "merged",
                b.object_with(vec![b.spread_prop(b.ident("defaults")), b.prop("b", b.num(9.0))]),
            ),
            b.func_decl_rest("count", &[], "all", vec![b.ret(b.member(b.ident("all"), "length"))]),
            b.log(vec![
                b.ident("more"),
                b.ident("merged"),
                b.call_with(b.ident("count"), vec![b.spread(b.ident("more"))]),
            ]),
            b.log(vec![b.binary(
                BinaryOp::StrictEq,
                b.array_with(vec![b.spread(b.ident("base"))]),
                b.ident("base"),
            )]),
        ]
    })
    .unwrap();
    assert_eq!(out, "[ 0, 1, 2, 3 ] { a: 1, b: 9 } 4\nfalse\n");
}

#[test]
fn compound_and_member_assignment() {
    let out = run(|b| {
        vec![
            b.let_("total", b.num(10.0)),
            b.assign_op("total", BinaryOp::Sub, b.num(3.0)),
            b.const_("list", b.array(vec![])),
            b.set_index(b.ident("list"), b.num(2.0), b.str("c")),
            b.const_("tally", b.object(vec![])),
            b.set_index(b.ident("tally"), b.str("hits"), b.num(1.0)),
            b.log(vec![b.ident("total"), b.ident("list"), b.ident("tally")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "7 [ undefined, undefined, 'c' ] { hits: 1 }\n");
}

#[test]
fn operators_follow_javascript_rules() {
    let out = run(|b| {
        vec![b.log(vec![
            b.add(b.str("1"), b.num(2.0)),
            b.binary(BinaryOp::Sub, b.str("5"), b.num(2.0)),
            b.binary(BinaryOp::Div, b.num(1.0), b.num(0.0)),
            b.binary(BinaryOp::StrictEq, b.str("1"), b.num(1.0)),
            b.binary(BinaryOp::Lt, b.str("apple"), b.str("banana")),
            b.logical(LogicalOp::Or, b.null(), b.str("fallback")),
            b.logical(LogicalOp::And, b.num(0.0), b.str("skipped")),
            b.unary(UnaryOp::Not, b.str("")),
            b.unary(UnaryOp::TypeOf, b.ident("neverDeclared")),
        ])]
    })
    .unwrap();
    assert_eq!(out, "12 3 Infinity false true fallback 0 true undefined\n");
}

#[test]
fn object_builtins() {
    let out = run(|b| {
        vec![
            b.const_("user", b.object(vec![("name", b.str("Ann")), ("age", b.num(3.0))])),
            b.log(vec![b.method(b.ident("Object"), "keys", vec![b.ident("user")])]),
            b.log(vec![b.method(b.ident("Object"), "values", vec![b.ident("user")])]),
            b.log(vec![b.method(b.ident("Object"), "entries", vec![b.ident("user")])]),
            b.const_(
                "copy",
                b.method(b.ident("Object"), "assign", vec![b.object(vec![]), b.ident("user")]),
            ),
            b.set(b.ident("copy"), "name", b.str("Bo")),
            b.log(vec![b.member(b.ident("user"), "name"), b.member(b.ident("copy"), "name")]),
        ]
    })
    .unwrap();
    assert_eq!(
        out,
        "[ 'name', 'age' ]\n[ 'Ann', 3 ]\n[ [ 'name', 'Ann' ], [ 'age', 3 ] ]\nAnn Bo\n"
    );
}

#[test]
fn object_keys_of_null_fails() {
    let err = run(|b| vec![b.expr(b.method(b.ident("Object"), "keys", vec![b.null()]))]).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotAnObject { .. }));
}

#[test]
fn closures_count_independently() {
    let out = run(|b| {
        vec![
            b.func_decl(
                "makeCounter",
                &[],
                vec![
                    b.let_("count", b.num(0.0)),
                    b.ret(b.arrow(
                        &[],
                        vec![
                            b.assign_op("count", BinaryOp::Add, b.num(1.0)),
                            b.ret(b.ident("count")),
                        ],
                    )),
                ],
            ),
            b.const_("first", b.call(b.ident("makeCounter"), vec![])),
            b.const_("second", b.call(b.ident("makeCounter"), vec![])),
            b.expr(b.call(b.ident("first"), vec![])),
            b.expr(b.call(b.ident("first"), vec![])),
            b.log(vec![b.call(b.ident("first"), vec![]), b.call(b.ident("second"), vec![])]),
        ]
    })
    .unwrap();
    assert_eq!(out, "3 1\n");
}

#[test]
fn top_level_return_stops_the_script() {
    let out = run(|b| {
        vec![
            b.log(vec![b.str("before")]),
            b.ret_void(),
            b.log(vec![b.str("after")]),
        ]
    })
    .unwrap();
    assert_eq!(out, "before\n");
}

#[test]
fn block_functions_are_scoped_to_their_block() {
    let err = run(|b| {
        vec![
            b.block(vec![b.func_decl("local", &[], vec![b.ret_void()])]),
            b.expr(b.call(b.ident("local"), vec![])),
        ]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UnresolvedName { .. }));
}

#[test]
fn rest_after_object_pattern_prop_list() {
    // `{ a, ...others } = { a: 1, b: 2 }` as a parameter
    let out = run(|b| {
        vec![
            b.const_(
                "split",
                b.function_patterns(
                    FunctionKind::Normal,
                    vec![Pattern::Object {
                        props: vec![PatternProp {
                            key: b.name("a"),
                            value: b.pat("a"),
                        }],
                        rest: Some(b.name("others")),
                    }],
                    FunctionBody::Expr(b.ident("others")),
                ),
            ),
            b.log(vec![b.call(
                b.ident("split"),
                vec![b.object(vec![("a", b.num(1.0)), ("b", b.num(2.0))])],
            )]),
        ]
    })
    .unwrap();
    assert_eq!(out, "{ b: 2 }\n");
}

#[test]
fn math_functions_work_as_callbacks() {
    let out = run(|b| {
        vec![
            b.let_(
                "apply",
                b.function(
                    &["n", "cb"],
                    vec![b.ret(b.call(b.ident("cb"), vec![b.ident("n")]))],
                ),
            ),
            b.log(vec![
                b.call(b.ident("apply"), vec![b.num(64.0), b.member(b.ident("Math"), "sqrt")]),
                b.method(b.ident("Math"), "floor", vec![b.num(7.9)]),
            ]),
        ]
    })
    .unwrap();
    assert_eq!(out, "8 7\n");
}

#[test]
fn var_may_redeclare_a_parameter_but_let_may_not() {
    let out = run(|b| {
        vec![
            b.func_decl(
                "keep",
                &["a"],
                vec![
                    b.declare(DeclKind::Var, b.pat("a"), None),
                    b.ret(b.ident("a")),
                ],
            ),
            b.func_decl(
                "replace",
                &["a"],
                vec![b.var_("a", b.num(2.0)), b.ret(b.ident("a"))],
            ),
            b.log(vec![
                b.call(b.ident("keep"), vec![b.num(1.0)]),
                b.call(b.ident("replace"), vec![b.num(1.0)]),
            ]),
        ]
    })
    .unwrap();
    assert_eq!(out, "1 2\n");

    let err = run(|b| {
        vec![
            b.func_decl("clash", &["a"], vec![b.let_("a", b.num(2.0))]),
            b.expr(b.call(b.ident("clash"), vec![b.num(1.0)])),
        ]
    })
    .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::Redeclaration { .. }));
}
