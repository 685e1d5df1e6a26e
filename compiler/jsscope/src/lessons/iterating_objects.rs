//! `for...in`, `for...of`, methods stored on objects and the `Object` helpers.

use jsscope_ir::{DeclKind, ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let object_call = |helper: &str, target: &str| {
        b.log(vec![b.method(b.ident("Object"), helper, vec![b.ident(target)])])
    };
    vec![
        b.let_(
            "obj",
            b.object(vec![("name", b.str("Rose")), ("cats", b.num(2.0))]),
        ),
        b.for_in(
            DeclKind::Let,
            "currentKey",
            b.ident("obj"),
            vec![
                b.let_("value", b.index(b.ident("obj"), b.ident("currentKey"))),
                b.log(vec![b.ident("currentKey")]),
                b.log(vec![b.ident("value")]),
            ],
        ),
        b.let_(
            "books",
            b.array(vec![b.str("fantasy"), b.str("pirates"), b.str("romance")]),
        ),
        // array keys are index strings
        b.for_in(
            DeclKind::Let,
            "i",
            b.ident("books"),
            vec![b.log(vec![b.index(b.ident("books"), b.ident("i"))])],
        ),
        b.for_of(
            DeclKind::Let,
            b.pat("book"),
            b.ident("books"),
            vec![b.log(vec![b.ident("book")])],
        ),
        // methods
        b.let_("dog", b.object(vec![("name", b.str("Bingsoo"))])),
        b.set(
            b.ident("dog"),
            "bark",
            b.function(&[], vec![b.log(vec![b.str("bark bark!")])]),
        ),
        b.set_index(
            b.ident("dog"),
            b.str("speak"),
            b.function(
                &["string"],
                vec![b.log(vec![b.concat(vec![
                    b.str("WOOF "),
                    b.ident("string"),
                    b.str(" WOOF!!!"),
                ])])],
            ),
        ),
        b.expr(b.method(b.ident("dog"), "bark", vec![])),
        b.expr(b.method(
            b.ident("dog"),
            "speak",
            vec![b.str("I only drink filtered water!")],
        )),
        b.let_(
            "dog2",
            b.object(vec![
                ("name", b.str("Simba")),
                (
                    "bark",
                    b.function(&[], vec![b.log(vec![b.str("raurgh, raurgh...")])]),
                ),
                (
                    "speak",
                    b.function(
                        &["string"],
                        vec![b.log(vec![b.concat(vec![
                            b.str("ruff... "),
                            b.ident("string"),
                            b.str(" ...ruff..."),
                        ])])],
                    ),
                ),
            ]),
        ),
        b.expr(b.method(b.ident("dog2"), "bark", vec![])),
        b.expr(b.method(
            b.ident("dog2"),
            "speak",
            vec![b.str("I've always been a good boy...")],
        )),
        // Object helpers
        object_call("keys", "dog"),
        object_call("keys", "dog2"),
        b.let_(
            "cup",
            b.object(vec![
                ("color", b.str("Red")),
                ("contents", b.str("coffee")),
                ("weight", b.num(5.0)),
            ]),
        ),
        object_call("keys", "cup"),
        object_call("values", "dog"),
        object_call("values", "cup"),
        object_call("entries", "cup"),
    ]
}
