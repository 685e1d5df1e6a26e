//! Mark/sweep collection of environments and cells.
//!
//! Roots are the global environment, the active frames, the builtins and
//! whatever the caller passes in. An environment stays alive while anything
//! reachable (a frame, a child environment, a closure) points at it.
//!
//! Collection only runs when asked: values held in Rust locals are not
//! roots, so the embedder chooses a point where everything it still needs is
//! either in scope or passed as an extra root.

use super::Evaluator;
use crate::cell::{Cell, CellId, FunctionCell};
use crate::environment::EnvId;
use crate::Value;

/// Outcome of one collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GcStats {
    pub environments_freed: usize,
    pub cells_freed: usize,
    pub environments_live: usize,
    pub cells_live: usize,
}

enum Trace {
    Env(EnvId),
    Cell(CellId),
}

impl Evaluator {
    /// Free every environment and cell unreachable from the roots.
    pub fn collect_garbage(&mut self, extra_envs: &[EnvId], extra_values: &[Value]) -> GcStats {
        let mut env_marks = vec![false; self.envs.capacity()];
        let mut cell_marks = vec![false; self.heap.capacity()];

        let mut worklist: Vec<Trace> = Vec::new();
        worklist.push(Trace::Env(self.global));
        worklist.extend(self.frames.iter().chain(extra_envs).copied().map(Trace::Env));
        worklist.extend(
            self.builtins
                .values()
                .chain(extra_values)
                .filter_map(Value::as_cell)
                .map(Trace::Cell),
        );

        while let Some(item) = worklist.pop() {
            match item {
                Trace::Env(id) => {
                    // Stale roots have nothing to keep alive.
                    let Ok(scope) = self.envs.scope(id) else {
                        continue;
                    };
                    let mark = &mut env_marks[id.0.index()];
                    if *mark {
                        continue;
                    }
                    *mark = true;
                    worklist.extend(scope.parent().map(Trace::Env));
                    worklist.extend(scope.values().filter_map(Value::as_cell).map(Trace::Cell));
                }
                Trace::Cell(id) => {
                    let Ok(cell) = self.heap.get(id) else {
                        continue;
                    };
                    let mark = &mut cell_marks[id.0.index()];
                    if *mark {
                        continue;
                    }
                    *mark = true;
                    if let Cell::Function(FunctionCell::Closure(closure)) = cell {
                        worklist.push(Trace::Env(closure.env()));
                    }
                    worklist.extend(cell.children().filter_map(Value::as_cell).map(Trace::Cell));
                }
            }
        }

        let stats = GcStats {
            environments_freed: self.envs.sweep(&env_marks),
            cells_freed: self.heap.sweep(&cell_marks),
            environments_live: self.envs.len(),
            cells_live: self.heap.len(),
        };
        tracing::debug!(
            environments_freed = stats.environments_freed,
            cells_freed = stats.cells_freed,
            environments_live = stats.environments_live,
            cells_live = stats.cells_live,
            "collected garbage"
        );
        stats
    }

    /// Number of environments currently allocated.
    pub fn live_environments(&self) -> usize {
        self.envs.len()
    }

    /// Number of cells currently allocated.
    pub fn live_cells(&self) -> usize {
        self.heap.len()
    }
}
