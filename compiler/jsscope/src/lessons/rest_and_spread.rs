//! Extra and missing arguments, rest parameters, spread in arrays, objects and calls.

use jsscope_ir::{BinaryOp, ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let call = |name: &str, args| b.call(b.ident(name), args);
    vec![
        b.func_decl("tester", &["arg"], vec![b.ret(b.ident("arg"))]),
        b.log(vec![call("tester", vec![b.num(5.0)])]),
        b.log(vec![call("tester", vec![])]),
        b.func_decl(
            "adder",
            &["num1", "num2"],
            vec![
                b.let_("sum", b.add(b.ident("num1"), b.ident("num2"))),
                b.ret(b.ident("sum")),
            ],
        ),
        b.log(vec![call("adder", vec![b.num(2.0), b.num(3.0), b.num(4.0)])]),
        // rest parameters
        b.func_decl_rest(
            "logArguments",
            &[],
            "allArguments",
            vec![b.log(vec![b.ident("allArguments")])],
        ),
        b.expr(call(
            "logArguments",
            vec![b.str("apple"), b.num(15.0), b.num(3.0)],
        )),
        b.func_decl_rest(
            "restAdder",
            &["num1"],
            "otherNums",
            vec![
                b.log(vec![b.add(b.str("The first number is: "), b.ident("num1"))]),
                b.let_("sum", b.ident("num1")),
                b.expr(b.method(
                    b.ident("otherNums"),
                    "forEach",
                    vec![b.function(
                        &["num"],
                        vec![b.assign_op("sum", BinaryOp::Add, b.ident("num"))],
                    )],
                )),
                b.log(vec![b.add(b.str("The sum is: "), b.ident("sum"))]),
            ],
        ),
        b.expr(call("restAdder", vec![b.num(2.0), b.num(3.0), b.num(4.0)])),
        // spread into arrays
        b.let_("numArray", b.array(vec![b.num(1.0), b.num(2.0), b.num(3.0)])),
        b.log(vec![b.method(
            b.ident("numArray"),
            "concat",
            vec![b.array(vec![b.str("concat-ing"), b.str("works"), b.str("too")])],
        )]),
        b.let_(
            "moreNums",
            b.array_with(vec![
                b.spread(b.ident("numArray")),
                b.item(b.num(4.0)),
                b.item(b.num(5.0)),
                b.item(b.num(6.0)),
            ]),
        ),
        b.log(vec![b.ident("moreNums")]),
        // spread into objects, later keys win
        b.let_(
            "colors",
            b.object(vec![("red", b.str("scarlet")), ("blue", b.str("aquamarine"))]),
        ),
        b.let_("colors2", b.object(vec![("green", b.str("forest"))])),
        b.log(vec![b.object_with(vec![b.spread_prop(b.ident("colors"))])]),
        b.log(vec![b.object_with(vec![
            b.spread_prop(b.ident("colors")),
            b.spread_prop(b.ident("colors2")),
            b.prop("red", b.str("crimson")),
        ])]),
        // spread into calls
        b.func_decl(
            "speak",
            &["verb", "noun"],
            vec![b.ret(b.concat(vec![
                b.str("I like to go "),
                b.ident("verb"),
                b.str(" with "),
                b.ident("noun"),
                b.str("."),
            ]))],
        ),
        b.const_(
            "words",
            b.array(vec![b.str("running"), b.str("Jet"), b.str("tabby cats")]),
        ),
        b.log(vec![b.call_with(
            b.ident("speak"),
            vec![b.spread(b.ident("words"))],
        )]),
        b.func_decl(
            "perfumes",
            &["favorite", "secondFavorite", "leastFavorite"],
            vec![b.ret(b.concat(vec![
                b.str("My favorite aroma is "),
                b.ident("favorite"),
                b.str(", but I also like "),
                b.ident("secondFavorite"),
                b.str(". But I can't stand "),
                b.method(b.ident("leastFavorite"), "toUpperCase", vec![]),
                b.str("!"),
            ]))],
        ),
        b.let_(
            "smells",
            b.array(vec![
                b.str("rose"),
                b.str("cinnamon apple"),
                b.str("chocolate"),
            ]),
        ),
        b.log(vec![b.call_with(
            b.ident("perfumes"),
            vec![b.spread(b.ident("smells"))],
        )]),
        b.log(vec![b.call_with(
            b.ident("perfumes"),
            vec![b.item(b.str("buttercup")), b.spread(b.ident("smells"))],
        )]),
    ]
}
