//! `EvaluatorBuilder` and evaluator configuration.

use jsscope_ir::{Name, SharedInterner};
use rustc_hash::FxHashMap;

use super::Evaluator;
use crate::cell::CellHeap;
use crate::environment::{Environments, ScopeKind};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{globals, Value};

/// Tunables for an [`Evaluator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Reject assignment to undeclared names. When off, such an assignment
    /// creates a binding in the global environment.
    pub strict_mode: bool,
    /// Calls nested deeper than this fail with a stack overflow error.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            strict_mode: true,
            max_call_depth: 1000,
        }
    }
}

/// Builder for [`Evaluator`] instances.
pub struct EvaluatorBuilder {
    interner: SharedInterner,
    config: EvalConfig,
    print_handler: Option<SharedPrintHandler>,
}

impl EvaluatorBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        EvaluatorBuilder {
            interner,
            config: EvalConfig::default(),
            print_handler: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn strict_mode(mut self, strict: bool) -> Self {
        self.config.strict_mode = strict;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.config.max_call_depth = depth;
        self
    }

    /// Where `console.log` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Build the evaluator with its global environment and builtins installed.
    pub fn build(self) -> Evaluator {
        let mut envs = Environments::new();
        let global = envs.create_root(ScopeKind::Global);

        let mut evaluator = Evaluator {
            interner: self.interner,
            envs,
            heap: CellHeap::new(),
            global,
            builtins: FxHashMap::default(),
            frames: Vec::new(),
            call_depth: 0,
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        };

        // Top-level `this` is undefined, as in a module.
        if let Ok(scope) = evaluator.envs.scope_mut(global) {
            scope.define(Name::THIS, Value::Undefined, jsscope_ir::DeclKind::Const);
        }
        globals::install(&mut evaluator);
        evaluator
    }
}
