//! jsscope eval: a lexical-environment evaluator with JavaScript scoping rules.
//!
//! # Architecture
//!
//! - `Environments`: arena of scopes linked by parent `EnvId`s; lookup and
//!   assignment walk outward from the current scope.
//! - `CellHeap`: arena of arrays, objects and functions behind `Value::Ref`
//!   handles. Copying a `Ref` aliases the cell.
//! - `Evaluator`: declaration, lookup, assignment, closures, calls and
//!   blocks, plus a tree-walking executor for `jsscope_ir` scripts.
//! - Explicit mark/sweep collection reclaims environments no closure or
//!   frame can reach.

mod arena;
pub mod cell;
pub mod environment;
pub mod errors;
mod evaluator;
mod format;
mod globals;
mod methods;
mod print_handler;
mod stack;
mod value;

pub use cell::{Cell, CellHeap, CellId, Closure, FunctionCell, NativeFn, NativeFunction, ObjectCell};
pub use environment::{Binding, EnvId, Environments, Mutability, Scope, ScopeKind};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{BlockGuard, EvalConfig, Evaluator, EvaluatorBuilder, GcStats, PropertyKey};
pub use print_handler::{
    buffer_handler, stdout_handler, BufferPrintHandler, PrintHandler, SharedPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::{format_number, Heap, Value};
