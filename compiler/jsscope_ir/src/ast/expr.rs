//! Expression nodes.

use std::sync::Arc;

use super::{BinaryOp, FunctionDef, LogicalOp, UnaryOp};
use crate::Name;

/// Literal values. String literals are interned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Name),
}

/// How a property is named in a member access.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberKey {
    /// `obj.name`
    Static(Name),
    /// `obj[expr]`
    Computed(Box<Expr>),
}

/// An element of an array literal or an argument list.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Item(Expr),
    /// `...expr`, expands an iterable in place.
    Spread(Expr),
}

/// A property in an object literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    KeyValue(Name, Expr),
    /// `...expr`, copies the own enumerable entries of `expr`.
    Spread(Expr),
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Ident(Name),
    This,
    Array(Vec<Element>),
    Object(Vec<Property>),
    Member {
        object: Box<Expr>,
        key: MemberKey,
    },
    /// Plain call: `this` is `undefined` inside a normal callee.
    Call {
        callee: Box<Expr>,
        args: Vec<Element>,
    },
    /// `receiver.key(args)`: `this` is the receiver inside a normal callee.
    MethodCall {
        receiver: Box<Expr>,
        key: MemberKey,
        args: Vec<Element>,
    },
    /// Function literal. Evaluating it creates a closure over the current environment.
    Function(Arc<FunctionDef>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
}
