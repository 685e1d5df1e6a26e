//! Evaluation errors.
//!
//! Every error is a programmer error in the operation sequence being
//! evaluated, reported to the caller of the failing operation. There is no
//! arity error: missing arguments bind `undefined` and extra arguments are
//! dropped.
//!
//! Factory functions are the public way to build errors; they keep message
//! wording in one place.

use thiserror::Error;

use crate::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Scope
    #[error("identifier `{name}` has already been declared (scope depth {depth})")]
    Redeclaration { name: String, depth: usize },
    #[error("`{name}` is not defined (resolution started at scope depth {depth})")]
    UnresolvedName { name: String, depth: usize },
    #[error("assignment to constant variable `{name}`")]
    ImmutableBinding { name: String },

    // Calls
    #[error("{callee} is not a function")]
    NotCallable { callee: String },
    #[error("{type_name} has no method `{method}`")]
    NoSuchMethod { method: String, type_name: String },
    #[error("maximum call depth {depth} exceeded")]
    StackOverflow { depth: usize },

    // Properties
    #[error("cannot read properties of {type_name} (reading `{key}`)")]
    PropertyOfNullish { key: String, type_name: String },
    #[error("cannot set property `{key}` on {type_name}")]
    UnsupportedProperty { key: String, type_name: String },
    #[error("invalid array length {length}")]
    InvalidArrayLength { length: usize },

    // Iteration and destructuring
    #[error("{type_name} is not iterable")]
    NotIterable { type_name: String },
    #[error("cannot destructure {type_name}")]
    InvalidDestructure { type_name: String },
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
    #[error("reduce of empty array with no initial value")]
    ReduceOfEmptyArray,
    #[error("cannot shallow-copy a {type_name}")]
    NotCopyable { type_name: String },
    #[error("cannot convert {type_name} to object")]
    NotAnObject { type_name: String },

    // Lifetime
    #[error("environment has been collected")]
    StaleEnvironment,
    #[error("reference points at a collected cell")]
    StaleReference,
    #[error("block exit does not match the innermost open block")]
    BlockMismatch,
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

/// Non-local exits while running statements.
///
/// `return` unwinds to the enclosing call the same way an error unwinds to
/// the caller, so both ride the `Err` side of statement results.
#[derive(Clone, Debug)]
pub(crate) enum ControlAction {
    Error(EvalError),
    Return(Value),
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

// Scope errors

pub fn redeclaration(name: &str, depth: usize) -> EvalError {
    EvalErrorKind::Redeclaration {
        name: name.to_owned(),
        depth,
    }
    .into()
}

pub fn unresolved_name(name: &str, depth: usize) -> EvalError {
    EvalErrorKind::UnresolvedName {
        name: name.to_owned(),
        depth,
    }
    .into()
}

pub fn immutable_binding(name: &str) -> EvalError {
    EvalErrorKind::ImmutableBinding {
        name: name.to_owned(),
    }
    .into()
}

// Call errors

pub fn not_callable(callee: &str) -> EvalError {
    EvalErrorKind::NotCallable {
        callee: callee.to_owned(),
    }
    .into()
}

pub fn no_such_method(method: &str, type_name: &str) -> EvalError {
    EvalErrorKind::NoSuchMethod {
        method: method.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn stack_overflow(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}

// Property errors

pub fn property_of_nullish(key: &str, type_name: &str) -> EvalError {
    EvalErrorKind::PropertyOfNullish {
        key: key.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn unsupported_property(key: &str, type_name: &str) -> EvalError {
    EvalErrorKind::UnsupportedProperty {
        key: key.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn invalid_array_length(length: usize) -> EvalError {
    EvalErrorKind::InvalidArrayLength { length }.into()
}

// Iteration and destructuring errors

pub fn not_iterable(type_name: &str) -> EvalError {
    EvalErrorKind::NotIterable {
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn invalid_destructure(type_name: &str) -> EvalError {
    EvalErrorKind::InvalidDestructure {
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn invalid_assignment_target() -> EvalError {
    EvalErrorKind::InvalidAssignmentTarget.into()
}

pub fn reduce_of_empty_array() -> EvalError {
    EvalErrorKind::ReduceOfEmptyArray.into()
}

pub fn not_copyable(type_name: &str) -> EvalError {
    EvalErrorKind::NotCopyable {
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn not_an_object(type_name: &str) -> EvalError {
    EvalErrorKind::NotAnObject {
        type_name: type_name.to_owned(),
    }
    .into()
}

// Lifetime errors

pub fn stale_environment() -> EvalError {
    EvalErrorKind::StaleEnvironment.into()
}

pub fn stale_reference() -> EvalError {
    EvalErrorKind::StaleReference.into()
}

pub fn block_mismatch() -> EvalError {
    EvalErrorKind::BlockMismatch.into()
}
