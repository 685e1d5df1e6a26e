//! Arrow syntax, implicit returns and lexical `this`.

use jsscope_ir::{BinaryOp, ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let call = |name: &str, args| b.call(b.ident(name), args);
    let greeting = || {
        b.concat(vec![
            b.str("Hello "),
            b.ident("fname"),
            b.str(" "),
            b.ident("lname"),
        ])
    };
    let half = || b.binary(BinaryOp::Div, b.ident("age"), b.num(2.0));
    vec![
        b.func_decl(
            "fullNameFunc",
            &["fname", "lname"],
            vec![b.let_("str", greeting()), b.ret(b.ident("str"))],
        ),
        b.let_(
            "fullNameArrow",
            b.arrow(
                &["fname", "lname"],
                vec![b.let_("str", greeting()), b.ret(b.ident("str"))],
            ),
        ),
        b.log(vec![call("fullNameFunc", vec![b.str("Keiji"), b.str("Akaashi")])]),
        b.log(vec![call("fullNameArrow", vec![b.str("Keiji"), b.str("Akaashi")])]),
        // a braced body needs an explicit return
        b.const_(
            "sayName",
            b.arrow(
                &["name"],
                vec![b.expr(b.add(b.str("Hello "), b.ident("name")))],
            ),
        ),
        b.log(vec![call("sayName", vec![b.str("Bokuto")])]),
        b.const_("sayYou", b.arrow(&[], vec![b.ret(b.str("Hello, you!"))])),
        b.log(vec![call("sayYou", vec![])]),
        b.const_(
            "multiplyArrow",
            b.arrow_expr(
                &["num1", "num2"],
                b.binary(BinaryOp::Mul, b.ident("num1"), b.ident("num2")),
            ),
        ),
        b.log(vec![call("multiplyArrow", vec![b.num(3.0), b.num(4.0)])]),
        b.const_(
            "halfMyAge",
            b.arrow(
                &["myAge"],
                vec![b.const_("age", b.ident("myAge")), b.expr(half())],
            ),
        ),
        b.log(vec![call("halfMyAge", vec![b.num(30.0)])]),
        b.const_(
            "halfMyAgeExplicit",
            b.arrow(
                &["myAge"],
                vec![b.const_("age", b.ident("myAge")), b.ret(half())],
            ),
        ),
        b.log(vec![call("halfMyAgeExplicit", vec![b.num(30.0)])]),
        b.const_("ambiguousFunction", b.arrow(&[], vec![])),
        b.log(vec![call("ambiguousFunction", vec![])]),
        b.const_("clearFunction", b.arrow_expr(&[], b.object(vec![]))),
        b.log(vec![call("clearFunction", vec![])]),
        // `this` inside returned functions
        b.const_(
            "testObj",
            b.object(vec![
                ("name", b.str("The original object!")),
                (
                    "changeName",
                    b.function(
                        &["newName"],
                        vec![b.set(b.this(), "name", b.ident("newName"))],
                    ),
                ),
                (
                    "createFunc",
                    b.function(&[], vec![b.ret(b.function(&[], vec![b.ret(b.this())]))]),
                ),
                (
                    "createArrowFunc",
                    b.function(
                        &[],
                        vec![b.ret(b.arrow(&[], vec![b.ret(b.member(b.this(), "name"))]))],
                    ),
                ),
            ]),
        ),
        b.const_("noNameFunc", b.method(b.ident("testObj"), "createFunc", vec![])),
        b.const_(
            "arrowNameFunc",
            b.method(b.ident("testObj"), "createArrowFunc", vec![]),
        ),
        b.log(vec![call("noNameFunc", vec![])]),
        b.log(vec![call("arrowNameFunc", vec![])]),
        b.expr(b.method(b.ident("testObj"), "changeName", vec![b.str("Hinata")])),
        b.log(vec![b.member(b.ident("testObj"), "name")]),
        b.log(vec![call("arrowNameFunc", vec![])]),
        // top-level `this` is undefined
        b.const_("returnThis", b.arrow_expr(&[], b.this())),
        b.log(vec![call("returnThis", vec![])]),
    ]
}
