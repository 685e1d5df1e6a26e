//! Cells: the shared mutable storage behind reference values.
//!
//! Cells live in a [`CellHeap`] and are addressed by [`CellId`]. Every
//! `Value::Ref` holding the same id observes every mutation made through any
//! other holder; nothing is copied unless [`Evaluator::shallow_copy`] is asked to.
//!
//! [`Evaluator::shallow_copy`]: crate::Evaluator::shallow_copy

use std::sync::Arc;

use jsscope_ir::{FunctionDef, Name};
use rustc_hash::FxHashMap;

use crate::arena::{Arena, SlotId};
use crate::environment::EnvId;
use crate::errors::stale_reference;
use crate::{EvalError, EvalResult, Evaluator, Value};

/// Opaque handle to a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellId(pub(crate) SlotId);

/// Native function signature: evaluator, `this`, arguments.
pub type NativeFn = fn(&mut Evaluator, &Value, &[Value]) -> EvalResult;

/// A closure: function definition plus the environment it was created in.
///
/// Both fields are fixed at construction; there are no setters.
#[derive(Clone, Debug)]
pub struct Closure {
    def: Arc<FunctionDef>,
    env: EnvId,
}

impl Closure {
    pub(crate) fn new(def: Arc<FunctionDef>, env: EnvId) -> Self {
        Closure { def, env }
    }

    pub fn def(&self) -> &Arc<FunctionDef> {
        &self.def
    }

    /// The environment captured when the closure was created.
    pub fn env(&self) -> EnvId {
        self.env
    }
}

/// A builtin implemented in Rust.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    pub name: &'static str,
    pub func: NativeFn,
}

impl std::fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

#[derive(Clone, Debug)]
pub enum FunctionCell {
    Closure(Closure),
    Native(NativeFunction),
}

/// Insertion-ordered string-keyed mapping.
#[derive(Clone, Debug, Default)]
pub struct ObjectCell {
    order: Vec<Name>,
    entries: FxHashMap<Name, Value>,
}

impl ObjectCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: Name) -> Option<&Value> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: Name) -> bool {
        self.entries.contains_key(&key)
    }

    /// Insert or overwrite. Overwriting keeps the key's original position.
    pub fn set(&mut self, key: Name, value: Value) {
        if self.entries.insert(key, value).is_none() {
            self.order.push(key);
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[Name] {
        &self.order
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|value| (*key, value)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<(Name, Value)> for ObjectCell {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        let mut object = ObjectCell::new();
        for (key, value) in iter {
            object.set(key, value);
        }
        object
    }
}

/// Storage behind a reference value.
#[derive(Clone, Debug)]
pub enum Cell {
    Array(Vec<Value>),
    Object(ObjectCell),
    Function(FunctionCell),
}

impl Cell {
    /// `array`, `object` or `function`.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Cell::Array(_) => "array",
            Cell::Object(_) => "object",
            Cell::Function(_) => "function",
        }
    }

    /// Values directly held by this cell.
    pub(crate) fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        match self {
            Cell::Array(items) => Box::new(items.iter()),
            Cell::Object(object) => Box::new(object.iter().map(|(_, value)| value)),
            Cell::Function(_) => Box::new(std::iter::empty()),
        }
    }
}

/// Arena of cells.
pub struct CellHeap {
    cells: Arena<Cell>,
}

impl CellHeap {
    pub fn new() -> Self {
        CellHeap {
            cells: Arena::new(),
        }
    }

    pub fn alloc(&mut self, cell: Cell) -> CellId {
        CellId(self.cells.insert(cell))
    }

    pub fn get(&self, id: CellId) -> Result<&Cell, EvalError> {
        self.cells.get(id.0).ok_or_else(stale_reference)
    }

    pub fn get_mut(&mut self, id: CellId) -> Result<&mut Cell, EvalError> {
        self.cells.get_mut(id.0).ok_or_else(stale_reference)
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.len() == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    pub(crate) fn sweep(&mut self, marks: &[bool]) -> usize {
        self.cells.sweep(marks)
    }
}

impl Default for CellHeap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
