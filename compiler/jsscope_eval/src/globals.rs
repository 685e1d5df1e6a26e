//! Process-wide globals: `console`, `Object`, `Math`, `undefined`, `NaN`, `Infinity`.

use jsscope_ir::Name;

use crate::cell::{Cell, FunctionCell, NativeFunction, ObjectCell};
use crate::errors::not_an_object;
use crate::{EvalResult, Evaluator, PropertyKey, Value};

/// Install the globals into `ev`.
pub(crate) fn install(ev: &mut Evaluator) {
    let console = object_of(ev, &[("log", "log", console_log)]);
    ev.define_builtin(Name::CONSOLE, console);

    let object = object_of(
        ev,
        &[
            ("keys", "keys", object_keys),
            ("values", "values", object_values),
            ("entries", "entries", object_entries),
            ("assign", "assign", object_assign),
        ],
    );
    ev.define_builtin(Name::OBJECT, object);

    let math = object_of(ev, &[("sqrt", "sqrt", math_sqrt), ("floor", "floor", math_floor)]);
    let math_name = ev.interner().intern("Math");
    ev.define_builtin(math_name, math);

    for (name, value) in [
        ("undefined", Value::Undefined),
        ("NaN", Value::Number(f64::NAN)),
        ("Infinity", Value::Number(f64::INFINITY)),
    ] {
        let name = ev.interner().intern(name);
        ev.define_builtin(name, value);
    }
}

fn object_of(ev: &mut Evaluator, methods: &[(&str, &'static str, crate::NativeFn)]) -> Value {
    let mut object = ObjectCell::new();
    for &(key, name, func) in methods {
        let function = ev
            .heap_mut()
            .alloc(Cell::Function(FunctionCell::Native(NativeFunction { name, func })));
        object.set(ev.interner().intern(key), Value::Ref(function));
    }
    ev.alloc_object(object)
}

/// `console.log(...args)`: arguments separated by spaces, one line.
fn console_log(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    let line = args
        .iter()
        .map(|arg| ev.format_log_arg(arg))
        .collect::<Vec<_>>()
        .join(" ");
    ev.print_handler().println(&line);
    Ok(Value::Undefined)
}

/// Own entries of the first argument; `undefined` and `null` are rejected.
fn entries_of(
    ev: &Evaluator,
    args: &[Value],
) -> Result<Vec<(PropertyKey, Value)>, crate::EvalError> {
    let target = args.first().unwrap_or(&Value::Undefined);
    if target.is_nullish() {
        return Err(not_an_object(target.type_name()));
    }
    ev.own_entries(target)
}

fn object_keys(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    let keys = entries_of(ev, args)?
        .into_iter()
        .map(|(key, _)| Value::string(ev.key_string(key)))
        .collect();
    Ok(ev.alloc_array(keys))
}

fn object_values(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    let values = entries_of(ev, args)?
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    Ok(ev.alloc_array(values))
}

fn object_entries(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    let mut pairs = Vec::new();
    for (key, value) in entries_of(ev, args)? {
        let key = Value::string(ev.key_string(key));
        pairs.push(ev.alloc_array(vec![key, value]));
    }
    Ok(ev.alloc_array(pairs))
}

/// `Object.assign(target, ...sources)`: copies own entries into `target`
/// and returns `target` itself.
fn object_assign(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    let target = args.first().cloned().unwrap_or(Value::Undefined);
    if !target.is_reference() {
        return Err(not_an_object(target.type_name()));
    }
    for source in args.iter().skip(1) {
        for (key, value) in ev.own_entries(source)? {
            ev.set_property(&target, key, value)?;
        }
    }
    Ok(target)
}

fn first_number(ev: &Evaluator, args: &[Value]) -> f64 {
    args.first().map_or(f64::NAN, |arg| ev.to_numeric(arg))
}

fn math_sqrt(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    Ok(Value::Number(first_number(ev, args).sqrt()))
}

fn math_floor(ev: &mut Evaluator, _this: &Value, args: &[Value]) -> EvalResult {
    Ok(Value::Number(first_number(ev, args).floor()))
}
