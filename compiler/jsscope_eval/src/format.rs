//! Rendering values as text.
//!
//! Two forms exist. [`Evaluator::to_display_string`] is string conversion as
//! used by `+` and `join`. [`Evaluator::inspect`] is what `console.log` prints
//! for non-string arguments: nested strings quoted, arrays as `[ 1, 2 ]`,
//! objects as `{ a: 1 }`, cycles as `[Circular]`.

use crate::cell::{Cell, CellId, FunctionCell};
use crate::{Evaluator, Value};

impl Evaluator {
    /// String conversion: arrays join their items with `,`, objects are
    /// `[object Object]`.
    pub fn to_display_string(&self, value: &Value) -> String {
        let mut seen = Vec::new();
        self.display_into(value, &mut seen)
    }

    fn display_into(&self, value: &Value, seen: &mut Vec<CellId>) -> String {
        let Value::Ref(id) = value else {
            return value.to_string();
        };
        if seen.contains(id) {
            return String::new();
        }
        match self.heap().get(*id) {
            Ok(Cell::Array(items)) => {
                seen.push(*id);
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| {
                        if item.is_nullish() {
                            String::new()
                        } else {
                            self.display_into(item, seen)
                        }
                    })
                    .collect();
                seen.pop();
                parts.join(",")
            }
            Ok(Cell::Object(_)) => "[object Object]".to_owned(),
            Ok(Cell::Function(function)) => self.function_label(function),
            Err(_) => "[collected]".to_owned(),
        }
    }

    /// One `console.log` argument: strings print raw, everything else inspected.
    pub fn format_log_arg(&self, value: &Value) -> String {
        match value {
            Value::Str(s) => s.to_string(),
            other => self.inspect(other),
        }
    }

    /// Node-style inspection.
    pub fn inspect(&self, value: &Value) -> String {
        let mut out = String::new();
        let mut seen = Vec::new();
        self.inspect_into(value, &mut seen, &mut out);
        out
    }

    fn inspect_into(&self, value: &Value, seen: &mut Vec<CellId>, out: &mut String) {
        let id = match value {
            Value::Str(s) => {
                out.push('\'');
                out.push_str(&s.replace('\'', "\\'"));
                out.push('\'');
                return;
            }
            Value::Ref(id) => *id,
            other => {
                out.push_str(&other.to_string());
                return;
            }
        };
        if seen.contains(&id) {
            out.push_str("[Circular]");
            return;
        }
        let Ok(cell) = self.heap().get(id) else {
            out.push_str("[collected]");
            return;
        };

        seen.push(id);
        match cell {
            Cell::Array(items) if items.is_empty() => out.push_str("[]"),
            Cell::Array(items) => {
                out.push_str("[ ");
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.inspect_into(item, seen, out);
                }
                out.push_str(" ]");
            }
            Cell::Object(object) if object.is_empty() => out.push_str("{}"),
            Cell::Object(object) => {
                out.push_str("{ ");
                for (index, (key, item)) in object.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&format_key(self.interner().lookup(key)));
                    out.push_str(": ");
                    self.inspect_into(item, seen, out);
                }
                out.push_str(" }");
            }
            Cell::Function(function) => out.push_str(&self.function_label(function)),
        }
        seen.pop();
    }

    fn function_label(&self, function: &FunctionCell) -> String {
        let name = match function {
            FunctionCell::Closure(closure) => closure.def().name.map(|name| self.interner().lookup(name)),
            FunctionCell::Native(native) => Some(native.name),
        };
        match name {
            Some(name) => format!("[Function: {name}]"),
            None => "[Function (anonymous)]".to_owned(),
        }
    }
}

/// Object keys print bare when they are identifiers, quoted otherwise.
fn format_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_owned()
    } else {
        format!("'{key}'")
    }
}

#[cfg(test)]
mod tests;
