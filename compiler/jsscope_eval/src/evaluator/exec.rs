//! Statement execution and hoisting.

use std::sync::Arc;

use jsscope_ir::{AssignTarget, BinaryOp, DeclKind, Expr, Name, Pattern, Stmt};

use super::pattern::BindMode;
use super::Evaluator;
use crate::environment::EnvId;
use crate::errors::{invalid_assignment_target, ControlAction};
use crate::{EvalError, Value};

/// Statement outcome; `return` travels on the error side.
pub(crate) type ExecResult = Result<(), ControlAction>;

impl Evaluator {
    pub(crate) fn exec_stmts(&mut self, env: EnvId, stmts: &[Stmt]) -> ExecResult {
        for stmt in stmts {
            self.exec_stmt(env, stmt)?;
        }
        Ok(())
    }

    /// Run `stmts` in a new block environment under `parent`.
    pub(crate) fn exec_block(&mut self, parent: EnvId, stmts: &[Stmt]) -> ExecResult {
        let mut block = self.block(parent)?;
        let env = block.env();
        block.hoist_functions(env, stmts, DeclKind::Let)?;
        block.exec_stmts(env, stmts)
    }

    pub(crate) fn exec_stmt(&mut self, env: EnvId, stmt: &Stmt) -> ExecResult {
        match stmt {
            Stmt::Declare {
                kind,
                pattern,
                init,
            } => match init {
                Some(init) => {
                    let value = self.eval_expr(env, init)?;
                    self.bind_pattern(env, pattern, value, BindMode::Declare(*kind))?;
                }
                None => {
                    for name in pattern.bound_names() {
                        self.declare_binding(env, name, None, *kind)?;
                    }
                }
            },
            // Bound when the enclosing statement list was entered.
            Stmt::Function(_) => {}
            Stmt::Assign { target, op, value } => self.exec_assign(env, target, *op, value)?,
            Stmt::Expr(expr) => {
                self.eval_expr(env, expr)?;
            }
            Stmt::Return(expr) => {
                let value = match expr {
                    Some(expr) => self.eval_expr(env, expr)?,
                    None => Value::Undefined,
                };
                return Err(ControlAction::Return(value));
            }
            Stmt::Block(stmts) => self.exec_block(env, stmts)?,
            Stmt::If {
                test,
                then_branch,
                else_branch,
            } => {
                if self.eval_expr(env, test)?.is_truthy() {
                    self.exec_block(env, then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(env, else_branch)?;
                }
            }
            Stmt::ForOf {
                kind,
                pattern,
                iterable,
                body,
            } => {
                let iterable = self.eval_expr(env, iterable)?;
                for item in self.iterate(&iterable)? {
                    self.exec_iteration(env, *kind, pattern, item, body)?;
                }
            }
            Stmt::ForIn {
                kind,
                name,
                object,
                body,
            } => {
                let object = self.eval_expr(env, object)?;
                let pattern = Pattern::Ident(*name);
                for (key, _) in self.own_entries(&object)? {
                    let key = Value::string(self.key_string(key));
                    self.exec_iteration(env, *kind, &pattern, key, body)?;
                }
            }
        }
        Ok(())
    }

    /// One loop iteration: a fresh environment holding the loop binding, so
    /// closures created in different iterations see different bindings.
    fn exec_iteration(
        &mut self,
        env: EnvId,
        kind: DeclKind,
        pattern: &Pattern,
        item: Value,
        body: &[Stmt],
    ) -> ExecResult {
        let mut iteration = self.block(env)?;
        let iteration_env = iteration.env();
        let mode = if kind.is_block_scoped() {
            BindMode::Declare(kind)
        } else {
            BindMode::Assign
        };
        iteration.bind_pattern(iteration_env, pattern, item, mode)?;
        iteration.exec_block(iteration_env, body)
    }

    fn exec_assign(
        &mut self,
        env: EnvId,
        target: &AssignTarget,
        op: Option<BinaryOp>,
        value: &Expr,
    ) -> ExecResult {
        match target {
            AssignTarget::Pattern(Pattern::Ident(name)) => {
                let current = match op {
                    Some(_) => Some(self.lookup(env, *name)?),
                    None => None,
                };
                let value = self.eval_expr(env, value)?;
                let value = match (op, current) {
                    (Some(op), Some(current)) => self.binary_op(op, &current, &value),
                    _ => value,
                };
                self.assign(env, *name, value)?;
            }
            AssignTarget::Pattern(pattern) => {
                if op.is_some() {
                    return Err(invalid_assignment_target().into());
                }
                let value = self.eval_expr(env, value)?;
                self.bind_pattern(env, pattern, value, BindMode::Assign)?;
            }
            AssignTarget::Member { object, key } => {
                let object = self.eval_expr(env, object)?;
                let key = self.eval_key(env, key)?;
                let current = match op {
                    Some(_) => Some(self.get_property(&object, key)?),
                    None => None,
                };
                let value = self.eval_expr(env, value)?;
                let value = match (op, current) {
                    (Some(op), Some(current)) => self.binary_op(op, &current, &value),
                    _ => value,
                };
                self.set_property(&object, key, value)?;
            }
        }
        Ok(())
    }

    /// Hoist `var` names into the function scope of `env` and bind function
    /// declarations in `env` itself.
    pub(crate) fn hoist_declarations(
        &mut self,
        env: EnvId,
        stmts: &[Stmt],
        function_kind: DeclKind,
    ) -> Result<(), EvalError> {
        let function_env = self.envs.function_scope(env)?;
        self.hoist_var_names(function_env, stmts)?;
        self.hoist_functions(env, stmts, function_kind)
    }

    /// Placeholders initialised to `undefined` for every `var` in `stmts`,
    /// including those nested in blocks but not in nested functions.
    pub(crate) fn hoist_var_names(
        &mut self,
        function_env: EnvId,
        stmts: &[Stmt],
    ) -> Result<(), EvalError> {
        let mut names = Vec::new();
        collect_var_names(stmts, &mut names);
        let scope = self.envs.scope_mut(function_env)?;
        for name in names {
            if !scope.contains(name) {
                scope.define_hoisted(name);
            }
        }
        Ok(())
    }

    fn hoist_functions(
        &mut self,
        env: EnvId,
        stmts: &[Stmt],
        kind: DeclKind,
    ) -> Result<(), EvalError> {
        for stmt in stmts {
            if let Stmt::Function(def) = stmt {
                if let Some(name) = def.name {
                    let function = self.make_closure(env, Arc::clone(def))?;
                    let scope = self.envs.scope_mut(env)?;
                    if kind == DeclKind::Var {
                        scope.define_reusable(name, function);
                    } else {
                        scope.define(name, function, kind);
                    }
                }
            }
        }
        Ok(())
    }
}

fn collect_var_names(stmts: &[Stmt], names: &mut Vec<Name>) {
    for stmt in stmts {
        match stmt {
            Stmt::Declare {
                kind: DeclKind::Var,
                pattern,
                ..
            } => names.extend(pattern.bound_names()),
            Stmt::Block(body) => collect_var_names(body, names),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                collect_var_names(then_branch, names);
                if let Some(else_branch) = else_branch {
                    collect_var_names(else_branch, names);
                }
            }
            Stmt::ForOf {
                kind, pattern, body, ..
            } => {
                if *kind == DeclKind::Var {
                    names.extend(pattern.bound_names());
                }
                collect_var_names(body, names);
            }
            Stmt::ForIn {
                kind, name, body, ..
            } => {
                if *kind == DeclKind::Var {
                    names.push(*name);
                }
                collect_var_names(body, names);
            }
            Stmt::Declare { .. }
            | Stmt::Function(_)
            | Stmt::Assign { .. }
            | Stmt::Expr(_)
            | Stmt::Return(_) => {}
        }
    }
}
