//! Global, function and block scope; scope chaining; lexical scope.

use jsscope_ir::{ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    vec![
        // global
        b.let_("myGlobalName", b.str("Apples")),
        b.log(vec![b.ident("myGlobalName")]),
        // each function body shadows the global
        b.let_("myName", b.str("global")),
        b.func_decl(
            "functionOne",
            &[],
            vec![
                b.let_("myName", b.str("func1")),
                b.log(vec![b.add(b.str("functionOne myName: "), b.ident("myName"))]),
            ],
        ),
        b.func_decl(
            "functionTwo",
            &[],
            vec![
                b.let_("myName", b.str("func2")),
                b.log(vec![b.add(b.str("functionTwo myName: "), b.ident("myName"))]),
            ],
        ),
        b.expr(b.call(b.ident("functionOne"), vec![])),
        b.expr(b.call(b.ident("functionTwo"), vec![])),
        // global, local and block each get their own `dog`
        b.let_("dog", b.str("woof")),
        b.func_decl(
            "localScoped",
            &[],
            vec![
                b.let_("dog", b.str("ruff")),
                b.if_(
                    b.boolean(true),
                    vec![
                        b.let_("dog", b.str("bowwow")),
                        b.log(vec![b.add(b.str("Block: "), b.ident("dog"))]),
                    ],
                    None,
                ),
                b.log(vec![b.add(b.str("Local: "), b.ident("dog"))]),
            ],
        ),
        b.log(vec![b.add(b.str("Global: "), b.ident("dog"))]),
        b.expr(b.call(b.ident("localScoped"), vec![])),
        // assignment without a declaration reaches the global binding
        b.func_decl(
            "functionThree",
            &[],
            vec![b.log(vec![b.add(
                b.str("functionThree using the global myName: "),
                b.ident("myName"),
            )])],
        ),
        b.func_decl(
            "functionFour",
            &[],
            vec![
                b.log(vec![b.add(b.str("It's global first: "), b.ident("myName"))]),
                b.assign("myName", b.str("it's local")),
                b.log(vec![b.add(b.str("Now: "), b.ident("myName"))]),
            ],
        ),
        b.expr(b.call(b.ident("functionThree"), vec![])),
        b.log(vec![b.add(b.str("BEFORE calling Four: "), b.ident("myName"))]),
        b.expr(b.call(b.ident("functionFour"), vec![])),
        b.log(vec![b.add(b.str("AFTER calling Four: "), b.ident("myName"))]),
        b.expr(b.call(b.ident("functionThree"), vec![])),
        // scope chaining stops at the nearest `person`
        b.let_("person", b.str("Rae")),
        b.func_decl(
            "sayHello",
            &[],
            vec![
                b.let_("person", b.str("Jeff")),
                b.func_decl(
                    "greet",
                    &[],
                    vec![b.log(vec![b.concat(vec![
                        b.str("Hi, "),
                        b.ident("person"),
                        b.str("!"),
                    ])])],
                ),
                b.expr(b.call(b.ident("greet"), vec![])),
            ],
        ),
        b.expr(b.call(b.ident("sayHello"), vec![])),
        // lexical scope
        b.func_decl(
            "outer",
            &[],
            vec![
                b.let_("x", b.num(5.0)),
                b.func_decl("inner", &[], vec![b.log(vec![b.ident("x")])]),
                b.expr(b.call(b.ident("inner"), vec![])),
            ],
        ),
        b.expr(b.call(b.ident("outer"), vec![])),
    ]
}
