//! jsscope - replays the scope, closure and reference lessons.
//!
//! Each lesson is an operation tree built with
//! [`ScriptBuilder`](jsscope_ir::ScriptBuilder) and evaluated by
//! [`jsscope_eval::Evaluator`]. The binary in `main.rs` is a thin argument
//! parser over [`commands`].

pub mod commands;
pub mod lessons;
mod tracing_setup;

pub use tracing_setup::init_tracing;
