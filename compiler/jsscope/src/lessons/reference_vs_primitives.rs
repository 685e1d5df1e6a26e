//! Primitives are copied on assignment; arrays and objects are shared.

use jsscope_ir::{DeclKind, Pattern, ScriptBuilder, Stmt};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let list1 = || b.ident("list1");
    let list2 = || b.ident("list2");
    vec![
        b.let_("num1", b.num(5.0)),
        b.let_("num2", b.ident("num1")),
        b.assign("num1", b.add(b.ident("num1"), b.num(3.0))),
        b.log(vec![b.ident("num1")]),
        b.log(vec![b.ident("num2")]),
        b.let_("first", b.boolean(true)),
        b.let_("second", b.ident("first")),
        b.assign("first", b.boolean(false)),
        b.log(vec![b.ident("first")]),
        b.log(vec![b.ident("second")]),
        // two names, one object
        b.let_(
            "cat1",
            b.object(vec![("name", b.str("Luna")), ("breed", b.str("siamese"))]),
        ),
        b.let_("cat2", b.ident("cat1")),
        b.set(b.ident("cat1"), "name", b.str("Starlight")),
        b.log(vec![b.ident("cat1")]),
        b.log(vec![b.ident("cat2")]),
        b.let_(
            "list1",
            b.array(vec![b.str("fruit"), b.str("apple"), b.str("orange")]),
        ),
        b.let_("list2", list1()),
        b.expr(b.method(list1(), "pop", vec![])),
        b.log(vec![list2()]),
        b.expr(b.method(list2(), "push", vec![b.str("mango")])),
        b.log(vec![list1()]),
        // slice breaks the link
        b.assign("list2", b.method(list1(), "slice", vec![])),
        b.expr(b.method(list1(), "pop", vec![])),
        b.log(vec![list1()]),
        b.log(vec![list2()]),
        // destructuring copies primitives but shares arrays
        b.let_(
            "obj",
            b.object(vec![
                ("name", b.str("Sandy")),
                ("instruments", b.array(vec![b.str("guitar"), b.str("uke")])),
            ]),
        ),
        b.declare(
            DeclKind::Let,
            Pattern::Object {
                props: vec![
                    b.shorthand("name"),
                    b.rename("instruments", b.pat("proficiency")),
                ],
                rest: None,
            },
            Some(b.ident("obj")),
        ),
        b.set_index(b.ident("obj"), b.str("name"), b.str("Danny")),
        b.log(vec![b.member(b.ident("obj"), "name")]),
        b.log(vec![b.ident("name")]),
        b.expr(b.method(
            b.index(b.ident("obj"), b.str("instruments")),
            "push",
            vec![b.str("piano")],
        )),
        b.log(vec![b.ident("proficiency")]),
    ]
}
