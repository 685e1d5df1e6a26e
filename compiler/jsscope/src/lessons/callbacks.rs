//! Functions passed as values and invoked later.

use jsscope_ir::{BinaryOp, ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let call = |name: &str, args| b.call(b.ident(name), args);
    vec![
        b.let_(
            "foobar",
            b.function(
                &["callback"],
                vec![
                    b.log(vec![b.str("foo")]),
                    b.expr(call("callback", vec![])),
                    b.log(vec![b.str("bar")]),
                ],
            ),
        ),
        b.let_("sayHello", b.function(&[], vec![b.log(vec![b.str("hello")])])),
        b.expr(call("foobar", vec![b.ident("sayHello")])),
        b.expr(call(
            "foobar",
            vec![b.function(&[], vec![b.log(vec![b.str("hello")])])],
        )),
        b.let_(
            "add",
            b.function(
                &["num1", "num2", "cb"],
                vec![
                    b.let_("sum", b.add(b.ident("num1"), b.ident("num2"))),
                    b.let_("result", call("cb", vec![b.ident("sum")])),
                    b.ret(b.ident("result")),
                ],
            ),
        ),
        b.let_(
            "double",
            b.function(
                &["num"],
                vec![b.ret(b.binary(BinaryOp::Mul, b.ident("num"), b.num(2.0)))],
            ),
        ),
        b.let_(
            "negate",
            b.function(
                &["num"],
                vec![b.ret(b.binary(BinaryOp::Mul, b.ident("num"), b.num(-1.0)))],
            ),
        ),
        b.log(vec![call("add", vec![b.num(2.0), b.num(3.0), b.ident("double")])]),
        b.log(vec![call("add", vec![b.num(4.0), b.num(5.0), b.ident("negate")])]),
        b.log(vec![call(
            "add",
            vec![b.num(60.0), b.num(4.0), b.member(b.ident("Math"), "sqrt")],
        )]),
        // missing arguments are undefined
        b.let_(
            "greet",
            b.function(
                &["firstName", "lastName"],
                vec![b.log(vec![b.concat(vec![
                    b.str("Hey "),
                    b.ident("firstName"),
                    b.str("! Your last name is "),
                    b.ident("lastName"),
                    b.str("."),
                ])])],
            ),
        ),
        b.expr(call("greet", vec![b.str("Ada"), b.str("Lovelace")])),
        b.expr(call("greet", vec![b.str("Grace")])),
        // an optional callback
        b.assign(
            "add",
            b.function(
                &["num1", "num2", "cb"],
                vec![b.if_(
                    b.binary(BinaryOp::StrictEq, b.ident("cb"), b.ident("undefined")),
                    vec![b.ret(b.add(b.ident("num1"), b.ident("num2")))],
                    Some(vec![b.ret(call(
                        "cb",
                        vec![b.add(b.ident("num1"), b.ident("num2"))],
                    ))]),
                )],
            ),
        ),
        b.log(vec![call("add", vec![b.num(9.0), b.num(40.0)])]),
        b.log(vec![call(
            "add",
            vec![b.num(9.0), b.num(40.0), b.member(b.ident("Math"), "sqrt")],
        )]),
    ]
}
