//! Runtime values.
//!
//! [`Value`] is a closed variant: primitives are stored inline and copied on
//! assignment, while objects, arrays and functions are [`Value::Ref`] handles
//! into the cell heap. Copying a `Ref` copies the handle, never the cell.

mod heap;

use std::fmt;

pub use heap::Heap;

use crate::cell::CellId;

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    /// Immutable string; shares its buffer on copy, which is unobservable.
    Str(Heap<str>),

    // References
    /// Handle to a shared mutable cell (object, array or function).
    Ref(CellId),
}

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::Str(Heap::from_str(s.as_ref()))
    }

    /// Create a number value.
    #[inline]
    pub fn number(n: impl Into<f64>) -> Self {
        Value::Number(n.into())
    }

    /// Number value for a length or index.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "lengths and indices stay far below 2^53"
    )]
    pub fn from_usize(n: usize) -> Self {
        Value::Number(n as f64)
    }

    /// Assignment copy.
    ///
    /// For primitives the result is independent of `self`. For references the
    /// handle is copied, so the result aliases the same cell.
    #[inline]
    #[must_use]
    pub fn copy_value(&self) -> Value {
        self.clone()
    }

    /// A second handle to the same cell, or `None` for primitives.
    #[inline]
    pub fn alias_value(&self) -> Option<Value> {
        match self {
            Value::Ref(id) => Some(Value::Ref(*id)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Ref(_))
    }

    #[inline]
    pub fn as_cell(&self) -> Option<CellId> {
        match self {
            Value::Ref(id) => Some(*id),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// `undefined` or `null`.
    #[inline]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Truthiness used by `if`, `!`, `&&`, `||` and `?:`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Ref(_) => true,
        }
    }

    /// Strict (`===`) equality. References compare by identity.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            #[allow(clippy::float_cmp, reason = "=== compares numbers exactly")]
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => **a == **b,
            (Value::Ref(a), Value::Ref(b)) => a == b,
            _ => false,
        }
    }

    /// Like `strict_equals`, except `NaN` equals `NaN`. Used by `includes`.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }

    /// Type name for primitives; references report `object`.
    ///
    /// The evaluator refines `object` into `array`/`function` where it can see the cell.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Ref(_) => "object",
        }
    }

    /// Numeric conversion for arithmetic on primitives.
    ///
    /// References convert to `NaN`; the evaluator handles arrays and objects
    /// through their string form first.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined | Value::Ref(_) => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

/// Equality is `===`; see [`Value::strict_equals`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

/// Format a number the way JavaScript prints it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_owned()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_owned()
    } else {
        format!("{n}")
    }
}

impl fmt::Display for Value {
    /// Primitive display. References print as `[object]`; use the evaluator's
    /// formatter to render their contents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "{}", &**s),
            Value::Ref(_) => write!(f, "[object]"),
        }
    }
}

#[cfg(test)]
mod tests;
