//! Environments for lexical scoping.
//!
//! Environments live in an arena and point at their parent by [`EnvId`].
//! A parent link is fixed when the environment is created. Closures hold an
//! `EnvId` to the environment they captured, which keeps it alive across
//! collections for as long as the closure itself is reachable.

use jsscope_ir::{DeclKind, Name};
use rustc_hash::FxHashMap;

use crate::arena::{Arena, SlotId};
use crate::errors::stale_environment;
use crate::{EvalError, Value};

/// Opaque handle to an environment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EnvId(pub(crate) SlotId);

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let`, `var`, parameters.
    Mutable,
    /// `const`.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

impl From<DeclKind> for Mutability {
    fn from(kind: DeclKind) -> Self {
        match kind {
            DeclKind::Const => Mutability::Immutable,
            DeclKind::Let | DeclKind::Var => Mutability::Mutable,
        }
    }
}

/// What created an environment. `var` declarations stop at `Function` or `Global`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    Block,
}

impl ScopeKind {
    /// Function-scoped declarations attach here.
    #[inline]
    pub fn is_function_boundary(self) -> bool {
        matches!(self, ScopeKind::Global | ScopeKind::Function)
    }
}

/// A variable binding.
#[derive(Clone, Debug)]
pub struct Binding {
    pub value: Value,
    pub mutability: Mutability,
    pub kind: DeclKind,
    /// A hoisted `var` placeholder, a parameter, or a function declaration in
    /// a function scope. A `var` statement for the same name reuses the
    /// binding instead of conflicting with it.
    pub(crate) hoisted: bool,
}

/// A single environment: bindings plus a parent link.
#[derive(Clone, Debug)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
    parent: Option<EnvId>,
    kind: ScopeKind,
    depth: usize,
}

impl Scope {
    fn new(parent: Option<EnvId>, kind: ScopeKind, depth: usize) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent,
            kind,
            depth,
        }
    }

    pub fn parent(&self) -> Option<EnvId> {
        self.parent
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// Distance from the global environment, which has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn get(&self, name: Name) -> Option<&Binding> {
        self.bindings.get(&name)
    }

    pub(crate) fn get_mut(&mut self, name: Name) -> Option<&mut Binding> {
        self.bindings.get_mut(&name)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Define or overwrite a binding. Callers enforce redeclaration rules.
    #[inline]
    pub(crate) fn define(&mut self, name: Name, value: Value, kind: DeclKind) {
        self.bindings.insert(
            name,
            Binding {
                value,
                mutability: kind.into(),
                kind,
                hoisted: false,
            },
        );
    }

    /// Define a `var` placeholder initialised to `undefined`.
    pub(crate) fn define_hoisted(&mut self, name: Name) {
        self.bindings.insert(
            name,
            Binding {
                value: Value::Undefined,
                mutability: Mutability::Mutable,
                kind: DeclKind::Var,
                hoisted: true,
            },
        );
    }

    /// Bind a parameter or a function-scope function declaration. A later
    /// `var` with the same name reuses it.
    pub(crate) fn define_reusable(&mut self, name: Name, value: Value) {
        self.bindings.insert(
            name,
            Binding {
                value,
                mutability: Mutability::Mutable,
                kind: DeclKind::Var,
                hoisted: true,
            },
        );
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.bindings.values().map(|binding| &binding.value)
    }

    /// Bound names, sorted for stable output.
    pub fn names(&self) -> Vec<Name> {
        let mut names: Vec<Name> = self.bindings.keys().copied().collect();
        names.sort();
        names
    }
}

/// Arena of environments.
pub struct Environments {
    scopes: Arena<Scope>,
}

impl Environments {
    pub fn new() -> Self {
        Environments {
            scopes: Arena::new(),
        }
    }

    /// Create a parentless environment at depth 0.
    pub(crate) fn create_root(&mut self, kind: ScopeKind) -> EnvId {
        EnvId(self.scopes.insert(Scope::new(None, kind, 0)))
    }

    /// Create an environment. Its depth is one more than its parent's.
    pub fn create(&mut self, parent: Option<EnvId>, kind: ScopeKind) -> Result<EnvId, EvalError> {
        let depth = match parent {
            Some(parent) => self.scope(parent)?.depth + 1,
            None => 0,
        };
        Ok(EnvId(self.scopes.insert(Scope::new(parent, kind, depth))))
    }

    pub fn scope(&self, id: EnvId) -> Result<&Scope, EvalError> {
        self.scopes.get(id.0).ok_or_else(stale_environment)
    }

    pub(crate) fn scope_mut(&mut self, id: EnvId) -> Result<&mut Scope, EvalError> {
        self.scopes.get_mut(id.0).ok_or_else(stale_environment)
    }

    /// Find the nearest environment, starting at `id` and walking parents, that binds `name`.
    pub fn resolve(&self, id: EnvId, name: Name) -> Result<Option<EnvId>, EvalError> {
        let mut current = Some(id);
        while let Some(env) = current {
            let scope = self.scope(env)?;
            if scope.contains(name) {
                return Ok(Some(env));
            }
            current = scope.parent;
        }
        Ok(None)
    }

    /// Nearest `Function` or `Global` environment at or above `id`.
    pub fn function_scope(&self, id: EnvId) -> Result<EnvId, EvalError> {
        let mut env = id;
        loop {
            let scope = self.scope(env)?;
            match scope.parent {
                Some(parent) if !scope.kind.is_function_boundary() => env = parent,
                _ => return Ok(env),
            }
        }
    }

    /// Environments from `id` outward to the root, inclusive.
    pub fn chain(&self, id: EnvId) -> Result<Vec<EnvId>, EvalError> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(env) = current {
            chain.push(env);
            current = self.scope(env)?.parent;
        }
        Ok(chain)
    }

    /// Number of live environments.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.len() == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.scopes.capacity()
    }

    pub(crate) fn sweep(&mut self, marks: &[bool]) -> usize {
        self.scopes.sweep(marks)
    }
}

impl Default for Environments {
    fn default() -> Self {
        Self::new()
    }
}
