//! Objects as key/value stores; bracket and dot access; shared nested arrays.

use jsscope_ir::{BinaryOp, ScriptBuilder, Stmt, UnaryOp};

pub(super) fn build(b: &ScriptBuilder<'_>) -> Vec<Stmt> {
    let car = || b.ident("car");
    let dog = || b.ident("dog");
    vec![
        b.let_("car", b.object(vec![])),
        b.log(vec![b.unary(UnaryOp::TypeOf, car())]),
        b.log(vec![car()]),
        b.set_index(car(), b.str("color"), b.str("Blue")),
        b.set_index(car(), b.str("seats"), b.num(2.0)),
        b.log(vec![b.index(car(), b.str("color"))]),
        b.log(vec![b.index(car(), b.str("seats"))]),
        b.log(vec![car()]),
        // missing keys read as undefined
        b.log(vec![b.index(car(), b.str("weight"))]),
        b.log(vec![
            b.binary(
                BinaryOp::StrictEq,
                b.index(car(), b.str("color")),
                b.ident("undefined"),
            ),
            b.binary(
                BinaryOp::StrictEq,
                b.index(car(), b.str("weight")),
                b.ident("undefined"),
            ),
        ]),
        // a variable as the key
        b.let_("newVariable", b.str("color")),
        b.log(vec![b.index(car(), b.ident("newVariable"))]),
        b.assign("newVariable", b.str("weight")),
        b.set_index(car(), b.ident("newVariable"), b.num(1000.0)),
        b.log(vec![car()]),
        // dot notation names the key literally
        b.let_("dog", b.object(vec![])),
        b.set(dog(), "name", b.str("Bingsoo")),
        b.set(dog(), "bark", b.str("Bowow")),
        b.log(vec![b.member(dog(), "bark")]),
        b.let_("myKey", b.str("name")),
        b.log(vec![b.index(dog(), b.ident("myKey"))]),
        b.log(vec![b.member(dog(), "myKey")]),
        b.set(dog(), "myKey", b.str("Bentley")),
        b.log(vec![dog()]),
        b.let_(
            "myRat",
            b.object(vec![
                ("name", b.str("Carolina")),
                ("type", b.str("rodent")),
                ("age", b.num(2.0)),
                (
                    "favoriteToys",
                    b.array(vec![b.str("spinner wheel"), b.str("hammock")]),
                ),
            ]),
        ),
        b.log(vec![b.member(b.ident("myRat"), "age")]),
        b.log(vec![b.index(b.ident("myRat"), b.str("favoriteToys"))]),
        // nested arrays are shared, not copied
        b.let_(
            "nestedArrays",
            b.array(vec![
                b.array(vec![
                    b.array(vec![b.str("third level"), b.str("A"), b.str("B"), b.str("C")]),
                    b.str("fruit"),
                    b.str("vegetables"),
                ]),
                b.array(vec![b.num(1.0), b.num(2.0), b.num(3.0)]),
            ]),
        ),
        b.let_("fruits", b.index(b.ident("nestedArrays"), b.num(0.0))),
        b.expr(b.method(b.ident("fruits"), "pop", vec![])),
        b.log(vec![b.index(b.ident("nestedArrays"), b.num(0.0))]),
        b.let_(
            "levelThree",
            b.index(b.index(b.ident("nestedArrays"), b.num(0.0)), b.num(0.0)),
        ),
        b.expr(b.method(b.ident("levelThree"), "pop", vec![])),
        b.log(vec![b.index(
            b.index(b.ident("nestedArrays"), b.num(0.0)),
            b.num(0.0),
        )]),
    ]
}
