//! Builtin methods on arrays and strings.
//!
//! Methods that take a callback (`forEach`, `map`, `filter`, `reduce`) walk a
//! snapshot of the array taken before the first call, and invoke the callback
//! through [`Evaluator::call`] like any user closure.

use jsscope_ir::Name;

use crate::cell::{Cell, CellId};
use crate::errors::{no_such_method, not_callable, not_iterable, reduce_of_empty_array};
use crate::{EvalError, EvalResult, Evaluator, Value};

/// Call a builtin array method on the array in `array`.
pub(crate) fn dispatch_array_method(
    ev: &mut Evaluator,
    array: CellId,
    method: Name,
    args: &[Value],
) -> EvalResult {
    let receiver = Value::Ref(array);
    match ev.interner().lookup(method) {
        "push" => {
            let items = array_mut(ev, array)?;
            items.extend_from_slice(args);
            Ok(Value::from_usize(items.len()))
        }
        "pop" => Ok(array_mut(ev, array)?.pop().unwrap_or(Value::Undefined)),
        "shift" => {
            let items = array_mut(ev, array)?;
            Ok(if items.is_empty() {
                Value::Undefined
            } else {
                items.remove(0)
            })
        }
        "unshift" => {
            let items = array_mut(ev, array)?;
            items.splice(0..0, args.iter().cloned());
            Ok(Value::from_usize(items.len()))
        }
        "slice" => {
            let items = ev.iterate(&receiver)?;
            let start = relative_index(args.first(), items.len(), 0);
            let end = relative_index(args.get(1), items.len(), items.len()).max(start);
            let slice = items.get(start..end).map(<[Value]>::to_vec).unwrap_or_default();
            Ok(ev.alloc_array(slice))
        }
        "concat" => {
            let mut items = ev.iterate(&receiver)?;
            for arg in args {
                match arg {
                    Value::Ref(id) if matches!(ev.heap().get(*id)?, Cell::Array(_)) => {
                        items.extend(ev.iterate(arg)?);
                    }
                    other => items.push(other.clone()),
                }
            }
            Ok(ev.alloc_array(items))
        }
        "includes" => {
            let target = args.first().unwrap_or(&Value::Undefined);
            let items = ev.iterate(&receiver)?;
            Ok(Value::Bool(items.iter().any(|item| item.same_value_zero(target))))
        }
        "indexOf" => {
            let target = args.first().unwrap_or(&Value::Undefined);
            let items = ev.iterate(&receiver)?;
            Ok(items
                .iter()
                .position(|item| item.strict_equals(target))
                .map_or(Value::Number(-1.0), Value::from_usize))
        }
        "join" => {
            let separator = match args.first() {
                None | Some(Value::Undefined) => ",".to_owned(),
                Some(separator) => ev.to_display_string(separator),
            };
            let items = ev.iterate(&receiver)?;
            let parts: Vec<String> = items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        ev.to_display_string(item)
                    }
                })
                .collect();
            Ok(Value::string(parts.join(&separator)))
        }
        "forEach" => {
            let callback = callback(ev, args)?;
            for (index, item) in ev.iterate(&receiver)?.into_iter().enumerate() {
                ev.call(&callback, &[item, Value::from_usize(index), receiver.clone()])?;
            }
            Ok(Value::Undefined)
        }
        "map" => {
            let callback = callback(ev, args)?;
            let mut mapped = Vec::new();
            for (index, item) in ev.iterate(&receiver)?.into_iter().enumerate() {
                mapped.push(ev.call(&callback, &[item, Value::from_usize(index), receiver.clone()])?);
            }
            Ok(ev.alloc_array(mapped))
        }
        "filter" => {
            let callback = callback(ev, args)?;
            let mut kept = Vec::new();
            for (index, item) in ev.iterate(&receiver)?.into_iter().enumerate() {
                let keep = ev.call(
                    &callback,
                    &[item.clone(), Value::from_usize(index), receiver.clone()],
                )?;
                if keep.is_truthy() {
                    kept.push(item);
                }
            }
            Ok(ev.alloc_array(kept))
        }
        "reduce" => {
            let callback = callback(ev, args)?;
            let mut items = ev.iterate(&receiver)?.into_iter().enumerate();
            let mut acc = match args.get(1) {
                Some(initial) => initial.clone(),
                None => match items.next() {
                    Some((_, first)) => first,
                    None => return Err(reduce_of_empty_array()),
                },
            };
            for (index, item) in items {
                acc = ev.call(
                    &callback,
                    &[acc, item, Value::from_usize(index), receiver.clone()],
                )?;
            }
            Ok(acc)
        }
        other => Err(no_such_method(other, "array")),
    }
}

/// Call a builtin string method. Strings are immutable; every method returns
/// a new value.
pub(crate) fn dispatch_string_method(
    ev: &mut Evaluator,
    s: &str,
    method: Name,
    args: &[Value],
) -> EvalResult {
    match ev.interner().lookup(method) {
        "toUpperCase" => Ok(Value::string(s.to_uppercase())),
        "toLowerCase" => Ok(Value::string(s.to_lowercase())),
        "trim" => Ok(Value::string(s.trim())),
        "includes" => {
            let needle = args
                .first()
                .map_or_else(|| "undefined".to_owned(), |arg| ev.to_display_string(arg));
            Ok(Value::Bool(s.contains(&needle)))
        }
        other => Err(no_such_method(other, "string")),
    }
}

fn array_mut(ev: &mut Evaluator, array: CellId) -> Result<&mut Vec<Value>, EvalError> {
    match ev.heap_mut().get_mut(array)? {
        Cell::Array(items) => Ok(items),
        cell => Err(not_iterable(cell.kind_name())),
    }
}

fn callback(ev: &Evaluator, args: &[Value]) -> EvalResult {
    let callback = args.first().cloned().unwrap_or(Value::Undefined);
    if ev.is_callable(&callback) {
        Ok(callback)
    } else {
        Err(not_callable(ev.describe(&callback)))
    }
}

/// `slice`-style index: negative counts from the end, clamped to `0..=len`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped to 0..=len"
)]
fn relative_index(arg: Option<&Value>, len: usize, default: usize) -> usize {
    let n = match arg {
        None | Some(Value::Undefined) => return default,
        Some(value) => value.to_number(),
    };
    if n.is_nan() {
        return 0;
    }
    let len_f = Value::from_usize(len).to_number();
    let clamped = if n < 0.0 {
        (len_f + n.trunc()).max(0.0)
    } else {
        n.trunc().min(len_f)
    };
    clamped as usize
}
