//! Operation tree evaluated by the environment evaluator.
//!
//! Scripts are built directly as trees (see [`ScriptBuilder`](crate::ScriptBuilder));
//! there is no surface syntax. Function bodies are shared behind `Arc` so
//! creating a closure never copies its body.

mod expr;
mod operators;
mod stmt;

use std::sync::Arc;

pub use expr::{Element, Expr, Literal, MemberKey, Property};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{AssignTarget, DeclKind, Pattern, PatternProp, Stmt};

use crate::Name;

/// Normal functions bind `this` per call; arrow functions resolve it lexically.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionKind {
    Normal,
    Arrow,
}

/// Function body.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionBody {
    /// Statements; the result is the value of the first `return` reached, or `undefined`.
    Block(Vec<Stmt>),
    /// Concise arrow body; its value is returned implicitly.
    Expr(Expr),
}

/// Parameter list and body of a function literal or declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: Option<Name>,
    pub params: Vec<Pattern>,
    /// Trailing `...rest` collector.
    pub rest: Option<Name>,
    pub kind: FunctionKind,
    pub body: FunctionBody,
}

impl FunctionDef {
    /// Build a shared definition.
    pub fn new(
        name: Option<Name>,
        params: Vec<Pattern>,
        rest: Option<Name>,
        kind: FunctionKind,
        body: FunctionBody,
    ) -> Arc<Self> {
        Arc::new(FunctionDef {
            name,
            params,
            rest,
            kind,
            body,
        })
    }

    /// Declared parameter count, not counting the rest collector.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A top-level instruction list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    pub stmts: Vec<Stmt>,
}

impl Script {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Script { stmts }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}
