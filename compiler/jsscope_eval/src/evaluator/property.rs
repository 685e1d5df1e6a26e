//! Property access, iteration and own-key enumeration.

use jsscope_ir::{MemberKey, Name};

use super::Evaluator;
use crate::cell::{Cell, FunctionCell};
use crate::environment::EnvId;
use crate::errors::{
    invalid_array_length, not_iterable, property_of_nullish, unsupported_property,
};
use crate::{EvalError, EvalResult, Value};

/// A normalised property key. Canonical integer strings (`"0"`, `"12"`)
/// become indices, so `arr[1]` and `arr["1"]` agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKey {
    Index(usize),
    Named(Name),
}

/// Index for a canonical array-index string: digits, no leading zero.
fn parse_index(s: &str) -> Option<usize> {
    let canonical = s == "0" || (!s.starts_with('0') && s.bytes().all(|b| b.is_ascii_digit()));
    if canonical && !s.is_empty() {
        s.parse().ok()
    } else {
        None
    }
}

/// Index for a number that is a non-negative integer in array range.
fn index_from_number(n: f64) -> Option<usize> {
    if n >= 0.0 && n.fract() == 0.0 && n < f64::from(u32::MAX) {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "checked non-negative integer below u32::MAX"
        )]
        let index = n as usize;
        Some(index)
    } else {
        None
    }
}

/// How far one write may grow an array past its current length. Holes are
/// stored densely.
const MAX_ARRAY_GROWTH: usize = 1 << 20;

fn check_array_growth(current: usize, requested: usize) -> Result<(), EvalError> {
    if requested > current.saturating_add(MAX_ARRAY_GROWTH) {
        return Err(invalid_array_length(requested));
    }
    Ok(())
}

impl Evaluator {
    pub fn key_from_name(&self, name: Name) -> PropertyKey {
        match parse_index(self.interner.lookup(name)) {
            Some(index) => PropertyKey::Index(index),
            None => PropertyKey::Named(name),
        }
    }

    /// Key for a computed member access.
    pub fn key_from_value(&self, value: &Value) -> PropertyKey {
        if let Some(index) = value.as_number().and_then(index_from_number) {
            return PropertyKey::Index(index);
        }
        let name = self.interner.intern(&self.to_display_string(value));
        self.key_from_name(name)
    }

    /// Interned name for a key; indices intern their decimal form.
    pub fn key_name(&self, key: PropertyKey) -> Name {
        match key {
            PropertyKey::Index(index) => self.interner.intern(&index.to_string()),
            PropertyKey::Named(name) => name,
        }
    }

    /// Object key for `key` if one can exist. Object keys are always
    /// interned, so a never-interned index names no property.
    fn stored_key_name(&self, key: PropertyKey) -> Option<Name> {
        match key {
            PropertyKey::Index(index) => self.interner.get(&index.to_string()),
            PropertyKey::Named(name) => Some(name),
        }
    }

    pub fn key_string(&self, key: PropertyKey) -> String {
        match key {
            PropertyKey::Index(index) => index.to_string(),
            PropertyKey::Named(name) => self.interner.lookup(name).to_owned(),
        }
    }

    pub(crate) fn eval_key(&mut self, env: EnvId, key: &MemberKey) -> Result<PropertyKey, EvalError> {
        match key {
            MemberKey::Static(name) => Ok(self.key_from_name(*name)),
            MemberKey::Computed(expr) => {
                let value = self.eval_expr(env, expr)?;
                Ok(self.key_from_value(&value))
            }
        }
    }

    /// `object[key]` for a computed key. Reads do not intern the key: a
    /// string that was never interned names no stored property.
    pub fn get_computed(&self, object: &Value, key: &Value) -> EvalResult {
        if let Some(index) = key.as_number().and_then(index_from_number) {
            return self.get_property(object, PropertyKey::Index(index));
        }
        let text = self.to_display_string(key);
        if let Some(index) = parse_index(&text) {
            return self.get_property(object, PropertyKey::Index(index));
        }
        match self.interner.get(&text) {
            Some(name) => self.get_property(object, PropertyKey::Named(name)),
            None if object.is_nullish() => {
                Err(property_of_nullish(&text, object.type_name()))
            }
            None => Ok(Value::Undefined),
        }
    }

    /// `object[key]`. Missing properties read as `undefined`; reading from
    /// `undefined` or `null` fails.
    pub fn get_property(&self, object: &Value, key: PropertyKey) -> EvalResult {
        match object {
            Value::Undefined | Value::Null => Err(property_of_nullish(
                &self.key_string(key),
                object.type_name(),
            )),
            Value::Str(s) => Ok(match key {
                PropertyKey::Named(Name::LENGTH) => Value::from_usize(s.chars().count()),
                PropertyKey::Index(index) => s
                    .chars()
                    .nth(index)
                    .map_or(Value::Undefined, |c| Value::string(c.to_string())),
                PropertyKey::Named(_) => Value::Undefined,
            }),
            Value::Bool(_) | Value::Number(_) => Ok(Value::Undefined),
            Value::Ref(id) => Ok(match (self.heap.get(*id)?, key) {
                (Cell::Array(items), PropertyKey::Index(index)) => {
                    items.get(index).cloned().unwrap_or(Value::Undefined)
                }
                (Cell::Array(items), PropertyKey::Named(Name::LENGTH)) => {
                    Value::from_usize(items.len())
                }
                (Cell::Object(object), key) => self
                    .stored_key_name(key)
                    .and_then(|name| object.get(name))
                    .cloned()
                    .unwrap_or(Value::Undefined),
                (Cell::Function(FunctionCell::Closure(closure)), PropertyKey::Named(Name::LENGTH)) => {
                    Value::from_usize(closure.def().arity())
                }
                _ => Value::Undefined,
            }),
        }
    }

    /// `object[key] = value`. Mutates the shared cell, so every alias sees it.
    pub fn set_property(
        &mut self,
        object: &Value,
        key: PropertyKey,
        value: Value,
    ) -> Result<(), EvalError> {
        let Value::Ref(id) = object else {
            return Err(match object {
                Value::Undefined | Value::Null => {
                    property_of_nullish(&self.key_string(key), object.type_name())
                }
                _ => unsupported_property(&self.key_string(key), object.type_name()),
            });
        };
        // Only objects store interned keys.
        let name = match self.heap.get(*id)? {
            Cell::Object(_) => Some(self.key_name(key)),
            _ => None,
        };
        match (self.heap.get_mut(*id)?, key, name) {
            (Cell::Array(items), PropertyKey::Index(index), _) => {
                if index >= items.len() {
                    check_array_growth(items.len(), index + 1)?;
                    items.resize(index + 1, Value::Undefined);
                }
                items[index] = value;
                return Ok(());
            }
            (Cell::Array(items), PropertyKey::Named(Name::LENGTH), _) => {
                if let Some(len) = value.as_number().and_then(index_from_number) {
                    check_array_growth(items.len(), len)?;
                    items.resize(len, Value::Undefined);
                    return Ok(());
                }
            }
            (Cell::Object(object), _, Some(name)) => {
                object.set(name, value);
                return Ok(());
            }
            _ => {}
        }
        let type_name = self.heap.get(*id)?.kind_name();
        Err(unsupported_property(&self.key_string(key), type_name))
    }

    /// Items visited by `for…of`, spread and array destructuring: array
    /// elements (a snapshot) or the characters of a string.
    pub fn iterate(&self, value: &Value) -> Result<Vec<Value>, EvalError> {
        match value {
            Value::Str(s) => Ok(s.chars().map(|c| Value::string(c.to_string())).collect()),
            Value::Ref(id) => match self.heap.get(*id)? {
                Cell::Array(items) => Ok(items.clone()),
                cell => Err(not_iterable(cell.kind_name())),
            },
            other => Err(not_iterable(other.type_name())),
        }
    }

    /// Own enumerable entries in order: array indices, object keys in
    /// insertion order, string indices. Other values have none.
    pub fn own_entries(&self, value: &Value) -> Result<Vec<(PropertyKey, Value)>, EvalError> {
        let index_entries = |items: Vec<Value>| -> Vec<(PropertyKey, Value)> {
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (PropertyKey::Index(index), item))
                .collect()
        };
        match value {
            Value::Str(_) => Ok(index_entries(self.iterate(value)?)),
            Value::Ref(id) => match self.heap.get(*id)? {
                Cell::Array(items) => Ok(index_entries(items.clone())),
                Cell::Object(object) => Ok(object
                    .iter()
                    .map(|(key, value)| (self.key_from_name(key), value.clone()))
                    .collect()),
                Cell::Function(_) => Ok(Vec::new()),
            },
            _ => Ok(Vec::new()),
        }
    }
}
