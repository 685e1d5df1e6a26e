//! Destructuring.

use jsscope_ir::{DeclKind, Name, Pattern};

use super::{Evaluator, PropertyKey};
use crate::environment::EnvId;
use crate::errors::invalid_destructure;
use crate::{EvalError, Value};

/// What binding a name in a pattern does.
#[derive(Clone, Copy, Debug)]
pub(crate) enum BindMode {
    /// A declaration statement or loop head.
    Declare(DeclKind),
    /// Assignment to existing bindings.
    Assign,
    /// A parameter in a fresh call environment.
    Param,
}

impl Evaluator {
    /// Bind every name in `pattern` from `value`.
    ///
    /// Missing array elements and object keys bind `undefined`. An array rest
    /// collects the remaining items into a new array; an object rest collects
    /// the remaining own entries into a new object. Every element is read
    /// before any name is bound, so a failure binds nothing.
    pub(crate) fn bind_pattern(
        &mut self,
        env: EnvId,
        pattern: &Pattern,
        value: Value,
        mode: BindMode,
    ) -> Result<(), EvalError> {
        let mut bindings = Vec::new();
        self.destructure(pattern, value, &mut bindings)?;
        match mode {
            BindMode::Declare(kind) => self.declare_all(env, bindings, kind),
            BindMode::Assign => self.assign_all(env, bindings),
            BindMode::Param => {
                let scope = self.envs.scope_mut(env)?;
                for (name, value) in bindings {
                    scope.define_reusable(name, value);
                }
                Ok(())
            }
        }
    }

    /// Pair each name in `pattern` with the part of `value` it receives.
    fn destructure(
        &mut self,
        pattern: &Pattern,
        value: Value,
        bindings: &mut Vec<(Name, Value)>,
    ) -> Result<(), EvalError> {
        match pattern {
            Pattern::Ident(name) => bindings.push((*name, value)),
            Pattern::Array { elements, rest } => {
                let items = self.iterate(&value)?;
                for (index, element) in elements.iter().enumerate() {
                    if let Some(element) = element {
                        let item = items.get(index).cloned().unwrap_or(Value::Undefined);
                        self.destructure(element, item, bindings)?;
                    }
                }
                if let Some(rest) = rest {
                    let remaining = items
                        .get(elements.len()..)
                        .map(<[Value]>::to_vec)
                        .unwrap_or_default();
                    let array = self.alloc_array(remaining);
                    self.destructure(rest, array, bindings)?;
                }
            }
            Pattern::Object { props, rest } => {
                if value.is_nullish() {
                    return Err(invalid_destructure(value.type_name()));
                }
                for prop in props {
                    let key = self.key_from_name(prop.key);
                    let item = self.get_property(&value, key)?;
                    self.destructure(&prop.value, item, bindings)?;
                }
                if let Some(rest) = rest {
                    let taken: Vec<PropertyKey> =
                        props.iter().map(|prop| self.key_from_name(prop.key)).collect();
                    let remaining = self
                        .own_entries(&value)?
                        .into_iter()
                        .filter(|(key, _)| !taken.contains(key))
                        .map(|(key, item)| (self.key_name(key), item))
                        .collect();
                    let object = self.alloc_object(remaining);
                    bindings.push((*rest, object));
                }
            }
        }
        Ok(())
    }
}
