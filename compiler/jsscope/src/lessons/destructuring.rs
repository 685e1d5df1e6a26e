//! Array and object destructuring, swaps, rest patterns and destructured parameters.

use jsscope_ir::{
    DeclKind, FunctionBody, FunctionDef, FunctionKind, Pattern, ScriptBuilder, Stmt,
};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let let_pattern = |pattern, init| b.declare(DeclKind::Let, pattern, Some(init));
    let object_pattern = |props, rest: Option<&str>| Pattern::Object {
        props,
        rest: rest.map(|name| b.name(name)),
    };
    vec![
        b.let_("numArray", b.array(vec![b.num(10.0), b.num(20.0)])),
        let_pattern(b.array_pat(&["firstEl", "secondEl"]), b.ident("numArray")),
        b.log(vec![b.ident("firstEl")]),
        b.log(vec![b.ident("secondEl")]),
        // declare first, destructure later
        b.declare(DeclKind::Let, b.pat("animal1"), None),
        b.declare(DeclKind::Let, b.pat("animal2"), None),
        b.assign_pattern(
            b.array_pat(&["animal1", "animal2"]),
            b.array(vec![b.str("tiger"), b.str("hippo")]),
        ),
        b.log(vec![b.ident("animal1"), b.ident("animal2")]),
        // swap
        b.let_("num1", b.num(17.0)),
        b.let_("num2", b.num(3.0)),
        b.assign_pattern(
            b.array_pat(&["num1", "num2"]),
            b.array(vec![b.ident("num2"), b.ident("num1")]),
        ),
        b.log(vec![b.concat(vec![b.ident("num1"), b.str(" "), b.ident("num2")])]),
        // objects
        let_pattern(
            b.object_pat(&["a", "c"]),
            b.object(vec![("a", b.num(1.0)), ("b", b.num(2.0)), ("c", b.num(3.0))]),
        ),
        b.log(vec![b.ident("a"), b.ident("c")]),
        b.let_(
            "fruit",
            b.object(vec![("apple", b.str("red")), ("banana", b.str("yellow"))]),
        ),
        let_pattern(
            object_pattern(
                vec![
                    b.rename("apple", b.pat("newApple")),
                    b.rename("banana", b.pat("newBanana")),
                ],
                None,
            ),
            b.ident("fruit"),
        ),
        b.log(vec![b.ident("newApple"), b.ident("newBanana")]),
        b.let_(
            "user",
            b.object(vec![
                ("userId", b.num(1.0)),
                (
                    "fullName",
                    b.object(vec![
                        ("fname", b.str("Rose")),
                        ("mname", b.str("DeWitt")),
                        ("lname", b.str("Bukater")),
                    ]),
                ),
            ]),
        ),
        let_pattern(
            object_pattern(
                vec![
                    b.shorthand("userId"),
                    b.rename("fullName", b.object_pat(&["fname", "mname", "lname"])),
                ],
                None,
            ),
            b.ident("user"),
        ),
        b.log(vec![
            b.ident("userId"),
            b.ident("fname"),
            b.ident("mname"),
            b.ident("lname"),
        ]),
        // rest patterns
        b.let_(
            "foods",
            b.array(vec![
                b.str("pizza"),
                b.str("ramen"),
                b.str("sushi"),
                b.str("kale"),
                b.str("tacos"),
            ]),
        ),
        let_pattern(
            Pattern::Array {
                elements: vec![Some(b.pat("firstFood")), Some(b.pat("secondFood"))],
                rest: Some(Box::new(b.pat("otherFoods"))),
            },
            b.ident("foods"),
        ),
        b.log(vec![b.ident("firstFood")]),
        b.log(vec![b.ident("secondFood")]),
        b.log(vec![b.ident("otherFoods")]),
        let_pattern(
            object_pattern(vec![b.shorthand("d"), b.shorthand("f")], Some("restObj")),
            b.object(vec![
                ("d", b.num(4.0)),
                ("e", b.num(5.0)),
                ("f", b.num(6.0)),
                ("g", b.num(7.0)),
            ]),
        ),
        b.log(vec![b.ident("d"), b.ident("f")]),
        b.log(vec![b.ident("restObj")]),
        // destructured parameters
        Stmt::Function(FunctionDef::new(
            Some(b.name("ownerName")),
            vec![b.object_pat(&["owner"])],
            None,
            FunctionKind::Normal,
            FunctionBody::Block(vec![b.log(vec![b.concat(vec![
                b.str("This cat is owned by "),
                b.ident("owner"),
                b.str("."),
            ])])]),
        )),
        b.expr(b.call(
            b.ident("ownerName"),
            vec![b.object(vec![
                ("name", b.str("Jiji")),
                ("owner", b.str("Kiki")),
                ("weight", b.num(10.0)),
            ])],
        )),
        Stmt::Function(FunctionDef::new(
            Some(b.name("toyFinder")),
            vec![object_pattern(
                vec![
                    b.shorthand("toys"),
                    b.rename(
                        "siblings",
                        object_pattern(vec![b.rename("toys", b.pat("siblingToys"))], None),
                    ),
                ],
                None,
            )],
            None,
            FunctionKind::Normal,
            FunctionBody::Block(vec![b.ret(b.method(
                b.ident("toys"),
                "concat",
                vec![b.ident("siblingToys")],
            ))]),
        )),
        b.let_(
            "bigCat",
            b.object(vec![
                ("name", b.str("Byakuen")),
                ("toys", b.array(vec![b.str("helmet")])),
                (
                    "siblings",
                    b.object(vec![
                        ("name", b.str("Seiji")),
                        ("toys", b.array(vec![b.str("nodachi"), b.str("broadsword")])),
                    ]),
                ),
            ]),
        ),
        b.log(vec![b.call(b.ident("toyFinder"), vec![b.ident("bigCat")])]),
    ]
}
