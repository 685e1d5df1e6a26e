//! The environment evaluator.
//!
//! Owns the environment arena, the cell heap and the active-frame stack, and
//! exposes the scope operations (`declare`, `lookup`, `assign`,
//! `make_closure`, `call`, block entry and exit) both as a direct API and as
//! the machinery behind [`Evaluator::run_script`].

mod builder;
mod call;
mod exec;
mod expr;
mod gc;
mod pattern;
mod property;
mod scope_guard;

pub use builder::{EvalConfig, EvaluatorBuilder};
pub use gc::GcStats;
pub use property::PropertyKey;
pub use scope_guard::BlockGuard;

use std::sync::Arc;

use jsscope_ir::{DeclKind, FunctionDef, Name, Script, SharedInterner, Stmt, StringInterner};
use rustc_hash::FxHashMap;

use crate::cell::{Cell, CellHeap, Closure, FunctionCell, ObjectCell};
use crate::environment::{EnvId, Environments, ScopeKind};
use crate::errors::{
    block_mismatch, immutable_binding, not_copyable, redeclaration, unresolved_name,
    ControlAction,
};
use crate::print_handler::SharedPrintHandler;
use crate::{EvalError, EvalResult, Value};

/// Evaluates operation trees against lexical environments.
pub struct Evaluator {
    interner: SharedInterner,
    envs: Environments,
    heap: CellHeap,
    global: EnvId,
    /// Process-wide globals (`console`, `Object`, ...). Consulted after the
    /// scope chain, so user declarations shadow them.
    builtins: FxHashMap<Name, Value>,
    /// Call and block environments currently executing, innermost last.
    frames: Vec<EnvId>,
    call_depth: usize,
    config: EvalConfig,
    print_handler: SharedPrintHandler,
}

impl Evaluator {
    /// Evaluator with default configuration, printing to stdout.
    pub fn new(interner: SharedInterner) -> Self {
        EvaluatorBuilder::new(interner).build()
    }

    pub fn global_env(&self) -> EnvId {
        self.global
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn shared_interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn environments(&self) -> &Environments {
        &self.envs
    }

    pub fn heap(&self) -> &CellHeap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut CellHeap {
        &mut self.heap
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of active call and block frames.
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }

    /// Current call nesting.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// Install a process-wide global, visible wherever the name is not shadowed.
    pub fn define_builtin(&mut self, name: Name, value: Value) {
        self.builtins.insert(name, value);
    }

    fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    // Scope operations

    /// Create a binding for `name`.
    ///
    /// `let`/`const` bind in `env`; `var` binds in the nearest function or
    /// global environment. The redeclaration check runs before anything is
    /// mutated.
    pub fn declare(
        &mut self,
        env: EnvId,
        name: Name,
        value: Value,
        kind: DeclKind,
    ) -> Result<(), EvalError> {
        self.declare_binding(env, name, Some(value), kind)
    }

    /// `declare` for a statement with no initialiser. A hoisted `var` keeps
    /// whatever was assigned to it before the statement ran.
    pub(crate) fn declare_binding(
        &mut self,
        env: EnvId,
        name: Name,
        value: Option<Value>,
        kind: DeclKind,
    ) -> Result<(), EvalError> {
        let target = if kind.is_block_scoped() {
            env
        } else {
            self.envs.function_scope(env)?
        };
        self.check_redeclaration(env, target, name, kind)?;

        tracing::debug!(
            name = self.name_str(name),
            kind = kind.keyword(),
            depth = self.envs.scope(target)?.depth(),
            "declare"
        );

        let scope = self.envs.scope_mut(target)?;
        if value.is_none() {
            // Only a hoisted placeholder survives the redeclaration check.
            if let Some(existing) = scope.get_mut(name) {
                existing.hoisted = false;
                return Ok(());
            }
        }
        scope.define(name, value.unwrap_or(Value::Undefined), kind);
        Ok(())
    }

    /// Declare every name of a destructuring pattern as one operation.
    ///
    /// All names are checked, including against each other, before any is
    /// bound, so a failing declaration leaves no partial bindings behind.
    pub(crate) fn declare_all(
        &mut self,
        env: EnvId,
        bindings: Vec<(Name, Value)>,
        kind: DeclKind,
    ) -> Result<(), EvalError> {
        let target = if kind.is_block_scoped() {
            env
        } else {
            self.envs.function_scope(env)?
        };
        for (index, (name, _)) in bindings.iter().enumerate() {
            self.check_redeclaration(env, target, *name, kind)?;
            if bindings[..index].iter().any(|(earlier, _)| earlier == name) {
                return Err(redeclaration(
                    self.name_str(*name),
                    self.envs.scope(target)?.depth(),
                ));
            }
        }
        for (name, value) in bindings {
            self.declare_binding(env, name, Some(value), kind)?;
        }
        Ok(())
    }

    fn check_redeclaration(
        &self,
        env: EnvId,
        target: EnvId,
        name: Name,
        kind: DeclKind,
    ) -> Result<(), EvalError> {
        let mut current = env;
        loop {
            let scope = self.envs.scope(current)?;
            if let Some(existing) = scope.get(name) {
                let conflict = if current == target {
                    !(existing.hoisted && kind == DeclKind::Var)
                } else {
                    // A `var` on its way to the function scope crosses this block.
                    existing.kind.is_block_scoped()
                };
                if conflict {
                    return Err(redeclaration(self.name_str(name), scope.depth()));
                }
            }
            match scope.parent() {
                Some(parent) if current != target => current = parent,
                _ => return Ok(()),
            }
        }
    }

    /// Value of the nearest binding of `name`, walking outward from `env`.
    pub fn lookup(&self, env: EnvId, name: Name) -> EvalResult {
        if let Some(found) = self.envs.resolve(env, name)? {
            if let Some(binding) = self.envs.scope(found)?.get(name) {
                return Ok(binding.value.clone());
            }
        }
        if let Some(builtin) = self.builtins.get(&name) {
            return Ok(builtin.clone());
        }
        Err(unresolved_name(
            self.name_str(name),
            self.envs.scope(env)?.depth(),
        ))
    }

    /// Rebind the nearest binding of `name`, in whichever environment holds it.
    pub fn assign(&mut self, env: EnvId, name: Name, value: Value) -> Result<(), EvalError> {
        self.check_assignable(env, name)?;
        if let Some(found) = self.envs.resolve(env, name)? {
            if let Some(binding) = self.envs.scope_mut(found)?.get_mut(name) {
                binding.value = value;
                return Ok(());
            }
        }

        tracing::warn!(
            name = self.name_str(name),
            "assignment to an undeclared name created an implicit global"
        );
        let global = self.global;
        self.envs
            .scope_mut(global)?
            .define(name, value, DeclKind::Var);
        Ok(())
    }

    /// Assign every name of a destructuring pattern, after checking that all
    /// of them can be assigned.
    pub(crate) fn assign_all(
        &mut self,
        env: EnvId,
        bindings: Vec<(Name, Value)>,
    ) -> Result<(), EvalError> {
        for (name, _) in &bindings {
            self.check_assignable(env, *name)?;
        }
        for (name, value) in bindings {
            self.assign(env, name, value)?;
        }
        Ok(())
    }

    /// Fails the way `assign` would, without assigning.
    fn check_assignable(&self, env: EnvId, name: Name) -> Result<(), EvalError> {
        if let Some(found) = self.envs.resolve(env, name)? {
            if let Some(binding) = self.envs.scope(found)?.get(name) {
                if !binding.mutability.is_mutable() {
                    return Err(immutable_binding(self.name_str(name)));
                }
                return Ok(());
            }
        }
        if self.builtins.contains_key(&name) {
            return Err(immutable_binding(self.name_str(name)));
        }
        if self.config.strict_mode {
            return Err(unresolved_name(
                self.name_str(name),
                self.envs.scope(env)?.depth(),
            ));
        }
        Ok(())
    }

    /// Create a function value capturing `env`.
    pub fn make_closure(&mut self, env: EnvId, def: Arc<FunctionDef>) -> EvalResult {
        // The capture must be live; it is never changed afterwards.
        self.envs.scope(env)?;
        let id = self
            .heap
            .alloc(Cell::Function(FunctionCell::Closure(Closure::new(def, env))));
        Ok(Value::Ref(id))
    }

    /// Push a block environment whose parent is `env`.
    pub fn enter_block(&mut self, env: EnvId) -> Result<EnvId, EvalError> {
        let block = self.envs.create(Some(env), ScopeKind::Block)?;
        self.frames.push(block);
        tracing::trace!(depth = self.envs.scope(block)?.depth(), "enter block");
        Ok(block)
    }

    /// Pop the innermost block; `env` must be what `enter_block` returned.
    pub fn exit_block(&mut self, env: EnvId) -> Result<(), EvalError> {
        if self.frames.last() != Some(&env) {
            return Err(block_mismatch());
        }
        self.frames.pop();
        tracing::trace!("exit block");
        Ok(())
    }

    /// New array or object with the same top-level entries. Nested references
    /// are shared, not copied. Primitives are returned as-is.
    pub fn shallow_copy(&mut self, value: &Value) -> EvalResult {
        let Value::Ref(id) = value else {
            return Ok(value.copy_value());
        };
        let copy = match self.heap.get(*id)? {
            Cell::Array(items) => Cell::Array(items.clone()),
            Cell::Object(object) => Cell::Object(object.clone()),
            Cell::Function(_) => return Err(not_copyable("function")),
        };
        Ok(Value::Ref(self.heap.alloc(copy)))
    }

    pub fn alloc_array(&mut self, items: Vec<Value>) -> Value {
        Value::Ref(self.heap.alloc(Cell::Array(items)))
    }

    pub fn alloc_object(&mut self, object: ObjectCell) -> Value {
        Value::Ref(self.heap.alloc(Cell::Object(object)))
    }

    // Classification

    /// JavaScript `typeof`.
    pub fn type_of(&self, value: &Value) -> &'static str {
        match value {
            Value::Null => "object",
            Value::Ref(id) => match self.heap.get(*id) {
                Ok(Cell::Function(_)) => "function",
                _ => "object",
            },
            other => other.type_name(),
        }
    }

    /// Type name for error messages: `array` and `function` are told apart
    /// from plain objects.
    pub fn describe(&self, value: &Value) -> &'static str {
        match value {
            Value::Ref(id) => self.heap.get(*id).map_or("object", Cell::kind_name),
            other => other.type_name(),
        }
    }

    pub fn is_callable(&self, value: &Value) -> bool {
        self.type_of(value) == "function"
    }

    // Scripts

    /// Run a script in the global environment.
    ///
    /// Returns the value of the last top-level expression statement, or the
    /// value of a top-level `return`, which stops the script.
    pub fn run_script(&mut self, script: &Script) -> EvalResult {
        let global = self.global;
        self.hoist_declarations(global, &script.stmts, DeclKind::Var)?;

        let mut last = Value::Undefined;
        for stmt in &script.stmts {
            let outcome = match stmt {
                Stmt::Expr(expr) => self.eval_expr(global, expr).map(|value| last = value),
                stmt => match self.exec_stmt(global, stmt) {
                    Ok(()) => Ok(()),
                    Err(ControlAction::Return(value)) => return Ok(value),
                    Err(ControlAction::Error(err)) => Err(err),
                },
            };
            outcome?;
        }
        Ok(last)
    }

    /// Run statements in a fresh block under `env`. Returns the value of a
    /// `return`, or `undefined`.
    pub fn exec(&mut self, env: EnvId, stmts: &[Stmt]) -> EvalResult {
        let function_env = self.envs.function_scope(env)?;
        self.hoist_var_names(function_env, stmts)?;
        match self.exec_block(env, stmts) {
            Ok(()) => Ok(Value::Undefined),
            Err(ControlAction::Return(value)) => Ok(value),
            Err(ControlAction::Error(err)) => Err(err),
        }
    }
}
