//! jsscope IR - names, interner and the operation tree.
//!
//! The evaluator in `jsscope_eval` consumes these types. Scripts are
//! constructed with [`ScriptBuilder`] rather than parsed from text.

pub mod ast;
mod builder;
mod interner;
mod name;

pub use ast::{
    AssignTarget, BinaryOp, DeclKind, Element, Expr, FunctionBody, FunctionDef, FunctionKind,
    Literal, LogicalOp, MemberKey, Pattern, PatternProp, Property, Script, Stmt, UnaryOp,
};
pub use builder::ScriptBuilder;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
