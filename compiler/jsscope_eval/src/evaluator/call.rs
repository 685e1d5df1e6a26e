//! Function calls.

use std::sync::Arc;

use jsscope_ir::{DeclKind, FunctionBody, FunctionDef, FunctionKind, Name};

use super::pattern::BindMode;
use super::Evaluator;
use crate::cell::{Cell, FunctionCell};
use crate::environment::{EnvId, ScopeKind};
use crate::errors::{not_callable, stack_overflow, ControlAction};
use crate::stack::ensure_sufficient_stack;
use crate::{EvalError, EvalResult, Value};

impl Evaluator {
    /// Call a function value with `this` bound to `undefined`.
    pub fn call(&mut self, callee: &Value, args: &[Value]) -> EvalResult {
        self.call_with_this(callee, Value::Undefined, args)
    }

    /// Call a function value.
    ///
    /// A closure runs in a fresh environment whose parent is the environment
    /// it captured. Missing arguments bind `undefined` and extra ones are
    /// dropped. Normal functions see `this`; arrows ignore it.
    #[tracing::instrument(level = "debug", skip_all, fields(depth = self.call_depth))]
    pub fn call_with_this(&mut self, callee: &Value, this: Value, args: &[Value]) -> EvalResult {
        let Value::Ref(id) = callee else {
            return Err(not_callable(callee.type_name()));
        };
        let closure = match self.heap.get(*id)? {
            Cell::Function(FunctionCell::Closure(closure)) => closure.clone(),
            Cell::Function(FunctionCell::Native(native)) => {
                let func = native.func;
                return func(self, &this, args);
            }
            cell => return Err(not_callable(cell.kind_name())),
        };

        self.check_recursion_limit()?;
        let call_env = self.envs.create(Some(closure.env()), ScopeKind::Function)?;

        let frame_len = self.frames.len();
        self.frames.push(call_env);
        self.call_depth += 1;
        let result =
            ensure_sufficient_stack(|| self.run_function(closure.def(), call_env, this, args));
        self.call_depth -= 1;
        self.frames.truncate(frame_len);
        result
    }

    fn check_recursion_limit(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(stack_overflow(self.config.max_call_depth));
        }
        Ok(())
    }

    fn run_function(
        &mut self,
        def: &Arc<FunctionDef>,
        env: EnvId,
        this: Value,
        args: &[Value],
    ) -> EvalResult {
        if def.kind == FunctionKind::Normal {
            self.envs
                .scope_mut(env)?
                .define(Name::THIS, this, DeclKind::Const);
        }

        for (index, param) in def.params.iter().enumerate() {
            let arg = args.get(index).cloned().unwrap_or(Value::Undefined);
            self.bind_pattern(env, param, arg, BindMode::Param)?;
        }
        if let Some(rest) = def.rest {
            let remaining = args
                .get(def.params.len()..)
                .map(<[Value]>::to_vec)
                .unwrap_or_default();
            let array = self.alloc_array(remaining);
            self.envs.scope_mut(env)?.define_reusable(rest, array);
        }

        match &def.body {
            FunctionBody::Expr(expr) => self.eval_expr(env, expr),
            FunctionBody::Block(stmts) => {
                self.hoist_declarations(env, stmts, DeclKind::Var)?;
                match self.exec_stmts(env, stmts) {
                    Ok(()) => Ok(Value::Undefined),
                    Err(ControlAction::Return(value)) => Ok(value),
                    Err(ControlAction::Error(err)) => Err(err),
                }
            }
        }
    }
}
