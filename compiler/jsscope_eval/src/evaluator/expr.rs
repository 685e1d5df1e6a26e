//! Expression evaluation and operators.

use std::cmp::Ordering;
use std::sync::Arc;

use jsscope_ir::{
    BinaryOp, Element, Expr, Literal, LogicalOp, MemberKey, Name, Property, UnaryOp,
};

use super::property::PropertyKey;
use super::Evaluator;
use crate::cell::{Cell, ObjectCell};
use crate::environment::EnvId;
use crate::errors::{no_such_method, EvalErrorKind};
use crate::methods::{dispatch_array_method, dispatch_string_method};
use crate::{EvalError, EvalResult, Value};

impl Evaluator {
    /// Evaluate an expression in `env`.
    pub fn eval_expr(&mut self, env: EnvId, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(self.literal(*literal)),
            Expr::Ident(name) => self.lookup(env, *name),
            Expr::This => self.lookup(env, Name::THIS),
            Expr::Array(elements) => {
                let items = self.eval_elements(env, elements)?;
                Ok(self.alloc_array(items))
            }
            Expr::Object(props) => {
                let mut object = ObjectCell::new();
                for prop in props {
                    match prop {
                        Property::KeyValue(key, value) => {
                            let value = self.eval_expr(env, value)?;
                            object.set(*key, value);
                        }
                        Property::Spread(source) => {
                            let source = self.eval_expr(env, source)?;
                            for (key, value) in self.own_entries(&source)? {
                                object.set(self.key_name(key), value);
                            }
                        }
                    }
                }
                Ok(self.alloc_object(object))
            }
            Expr::Member { object, key } => {
                let object = self.eval_expr(env, object)?;
                match key {
                    MemberKey::Static(name) => {
                        self.get_property(&object, self.key_from_name(*name))
                    }
                    MemberKey::Computed(key) => {
                        let key = self.eval_expr(env, key)?;
                        self.get_computed(&object, &key)
                    }
                }
            }
            Expr::Call { callee, args } => {
                let callee = self.eval_expr(env, callee)?;
                let args = self.eval_elements(env, args)?;
                self.call(&callee, &args)
            }
            Expr::MethodCall {
                receiver,
                key,
                args,
            } => {
                let receiver = self.eval_expr(env, receiver)?;
                let key = self.eval_key(env, key)?;
                let args = self.eval_elements(env, args)?;
                self.call_method(&receiver, key, &args)
            }
            Expr::Function(def) => self.make_closure(env, Arc::clone(def)),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(env, left)?;
                let right = self.eval_expr(env, right)?;
                Ok(self.binary_op(*op, &left, &right))
            }
            Expr::Logical { op, left, right } => {
                let left = self.eval_expr(env, left)?;
                match (op, left.is_truthy()) {
                    (LogicalOp::And, true) | (LogicalOp::Or, false) => self.eval_expr(env, right),
                    _ => Ok(left),
                }
            }
            Expr::Unary { op, operand } => self.eval_unary(env, *op, operand),
            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => {
                if self.eval_expr(env, test)?.is_truthy() {
                    self.eval_expr(env, consequent)
                } else {
                    self.eval_expr(env, alternate)
                }
            }
        }
    }

    fn literal(&self, literal: Literal) -> Value {
        match literal {
            Literal::Undefined => Value::Undefined,
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(n) => Value::Number(n),
            Literal::Str(name) => Value::string(self.interner.lookup(name)),
        }
    }

    /// Argument lists and array literals, with spread elements expanded.
    fn eval_elements(&mut self, env: EnvId, elements: &[Element]) -> Result<Vec<Value>, EvalError> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Element::Item(expr) => values.push(self.eval_expr(env, expr)?),
                Element::Spread(expr) => {
                    let iterable = self.eval_expr(env, expr)?;
                    values.extend(self.iterate(&iterable)?);
                }
            }
        }
        Ok(values)
    }

    fn eval_unary(&mut self, env: EnvId, op: UnaryOp, operand: &Expr) -> EvalResult {
        let value = match (op, operand) {
            // `typeof undeclared` is "undefined", not an error.
            (UnaryOp::TypeOf, Expr::Ident(name)) => match self.lookup(env, *name) {
                Err(err) if matches!(err.kind, EvalErrorKind::UnresolvedName { .. }) => {
                    return Ok(Value::string("undefined"));
                }
                result => result?,
            },
            _ => self.eval_expr(env, operand)?,
        };
        Ok(match op {
            UnaryOp::Not => Value::Bool(!value.is_truthy()),
            UnaryOp::Neg => Value::Number(-self.to_numeric(&value)),
            UnaryOp::TypeOf => Value::string(self.type_of(&value)),
        })
    }

    /// `receiver.key(args)`: builtin methods on arrays and strings, otherwise
    /// the property's function called with `this` bound to the receiver.
    pub fn call_method(&mut self, receiver: &Value, key: PropertyKey, args: &[Value]) -> EvalResult {
        if let PropertyKey::Named(method) = key {
            match receiver {
                Value::Ref(id) if matches!(self.heap.get(*id)?, Cell::Array(_)) => {
                    return dispatch_array_method(self, *id, method, args);
                }
                Value::Str(s) => return dispatch_string_method(self, s, method, args),
                _ => {}
            }
        }

        let function = self.get_property(receiver, key)?;
        if matches!(function, Value::Undefined) {
            return Err(no_such_method(
                &self.key_string(key),
                self.describe(receiver),
            ));
        }
        self.call_with_this(&function, receiver.clone(), args)
    }

    /// Arrays and objects become their string form before arithmetic.
    fn to_primitive(&self, value: &Value) -> Value {
        match value {
            Value::Ref(_) => Value::string(self.to_display_string(value)),
            other => other.clone(),
        }
    }

    pub(crate) fn to_numeric(&self, value: &Value) -> f64 {
        self.to_primitive(value).to_number()
    }

    pub(crate) fn binary_op(&self, op: BinaryOp, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOp::StrictEq => Value::Bool(left.strict_equals(right)),
            BinaryOp::StrictNotEq => Value::Bool(!left.strict_equals(right)),
            BinaryOp::Add => {
                let left = self.to_primitive(left);
                let right = self.to_primitive(right);
                match (&left, &right) {
                    (Value::Str(_), _) | (_, Value::Str(_)) => Value::string(format!(
                        "{}{}",
                        self.to_display_string(&left),
                        self.to_display_string(&right)
                    )),
                    _ => Value::Number(left.to_number() + right.to_number()),
                }
            }
            BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
                let a = self.to_numeric(left);
                let b = self.to_numeric(right);
                Value::Number(match op {
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => a / b,
                    _ => a % b,
                })
            }
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
                // NaN on either side compares false.
                Value::Bool(self.compare(left, right).is_some_and(|ord| match op {
                    BinaryOp::Lt => ord == Ordering::Less,
                    BinaryOp::LtEq => ord != Ordering::Greater,
                    BinaryOp::Gt => ord == Ordering::Greater,
                    _ => ord != Ordering::Less,
                }))
            }
        }
    }

    /// Strings compare lexically, everything else numerically.
    fn compare(&self, left: &Value, right: &Value) -> Option<Ordering> {
        let left = self.to_primitive(left);
        let right = self.to_primitive(right);
        match (&left, &right) {
            (Value::Str(a), Value::Str(b)) => Some((**a).cmp(&**b)),
            _ => left.to_number().partial_cmp(&right.to_number()),
        }
    }
}
