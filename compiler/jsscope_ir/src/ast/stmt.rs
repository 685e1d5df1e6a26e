//! Statements, declarations and binding patterns.

use std::sync::Arc;

use super::{BinaryOp, Expr, FunctionDef, MemberKey};
use crate::Name;

/// Declaration keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// Block-scoped, reassignable.
    Let,
    /// Block-scoped, not reassignable.
    Const,
    /// Function-scoped, reassignable.
    Var,
}

impl DeclKind {
    /// `let` and `const` attach to the nearest block.
    #[inline]
    pub fn is_block_scoped(self) -> bool {
        !matches!(self, DeclKind::Var)
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            DeclKind::Let => "let",
            DeclKind::Const => "const",
            DeclKind::Var => "var",
        }
    }
}

/// A `{ key: pattern }` entry of an object pattern. `{ key }` is `key: key`.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternProp {
    pub key: Name,
    pub value: Pattern,
}

/// Binding pattern used by declarations, parameters and assignments.
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Ident(Name),
    /// `[a, , b, ...rest]`; `None` elements are holes.
    Array {
        elements: Vec<Option<Pattern>>,
        rest: Option<Box<Pattern>>,
    },
    /// `{ a, b: renamed, ...rest }`
    Object {
        props: Vec<PatternProp>,
        rest: Option<Name>,
    },
}

impl Pattern {
    /// Every name this pattern binds, in source order.
    pub fn bound_names(&self) -> Vec<Name> {
        fn collect(pattern: &Pattern, out: &mut Vec<Name>) {
            match pattern {
                Pattern::Ident(name) => out.push(*name),
                Pattern::Array { elements, rest } => {
                    for element in elements.iter().flatten() {
                        collect(element, out);
                    }
                    if let Some(rest) = rest {
                        collect(rest, out);
                    }
                }
                Pattern::Object { props, rest } => {
                    for prop in props {
                        collect(&prop.value, out);
                    }
                    out.extend(rest.iter().copied());
                }
            }
        }
        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }
}

/// Left-hand side of an assignment.
#[derive(Clone, Debug, PartialEq)]
pub enum AssignTarget {
    /// A name or a destructuring pattern.
    Pattern(Pattern),
    /// `obj.key = ...` or `obj[expr] = ...`; mutates the cell behind `obj`.
    Member { object: Expr, key: MemberKey },
}

/// Statement node.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Declare {
        kind: DeclKind,
        pattern: Pattern,
        init: Option<Expr>,
    },
    /// `function name(...) {}`; hoisted to the top of its function scope.
    Function(Arc<FunctionDef>),
    /// `target = value`, or `target op= value` when `op` is set.
    Assign {
        target: AssignTarget,
        op: Option<BinaryOp>,
        value: Expr,
    },
    Expr(Expr),
    Return(Option<Expr>),
    Block(Vec<Stmt>),
    If {
        test: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
    },
    /// `for (kind pattern of iterable) body`; each iteration gets a fresh environment.
    ForOf {
        kind: DeclKind,
        pattern: Pattern,
        iterable: Expr,
        body: Vec<Stmt>,
    },
    /// `for (kind name in object) body`; iterates own keys (array indices as strings).
    ForIn {
        kind: DeclKind,
        name: Name,
        object: Expr,
        body: Vec<Stmt>,
    },
}
