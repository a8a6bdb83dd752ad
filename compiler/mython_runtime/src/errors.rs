//! Evaluation errors and the `return` control signal.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the typed taxonomy of fatal failures. Factory functions
//! (e.g. `unbound_identifier()`) are the public way to build an `EvalError`.
//!
//! Soft failures (arithmetic on the wrong types, division by zero, calling a
//! method that does not exist) never become errors: the evaluator turns them
//! into the "no value" sentinel at the operation boundary.
//!
//! `return` is not an error either. It travels as `ControlSignal::Returning`
//! through `ExecResult` until an invocation boundary unwraps it.

use std::fmt;

use crate::value::Value;

/// Result of an expression-level evaluation.
pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Result of executing a statement node.
pub type ExecResult = Result<ControlSignal, EvalError>;

/// Outcome of executing a statement that did not fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlSignal {
    /// Execution finished normally with this value.
    Normal(Value),
    /// A `return` is unwinding towards the nearest invocation boundary.
    Returning(Value),
}

impl ControlSignal {
    /// The carried value, whichever way execution ended.
    pub fn into_value(self) -> Value {
        match self {
            ControlSignal::Normal(v) | ControlSignal::Returning(v) => v,
        }
    }

    #[inline]
    pub fn is_returning(&self) -> bool {
        matches!(self, ControlSignal::Returning(_))
    }
}

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// Variable or field lookup failed.
    #[error("unbound identifier: {name}")]
    UnboundIdentifier { name: String },

    /// A single operand had an unsupported variant.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// A binary operation received an unsupported pair of variants.
    #[error("unsupported operand types for {operation}: '{left}' and '{right}'")]
    UnsupportedOperands {
        operation: String,
        left: String,
        right: String,
    },

    /// The "no value" sentinel was dereferenced.
    #[error("cannot {operation} None")]
    NoneDereference { operation: String },

    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    #[error("maximum call depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },

    /// `return` escaped every function and method.
    #[error("'return' outside of a function or method")]
    UnhandledReturn,
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// `Class.method` or function name.
    pub name: String,
}

/// Snapshot of the invocation stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "stack backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Fatal evaluation error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Call stack at the error site; attached by the evaluator as the error
    /// leaves the innermost invocation.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            kind,
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    #[inline]
    pub fn has_backtrace(&self) -> bool {
        self.backtrace.is_some()
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Lookup Errors

#[cold]
pub fn unbound_identifier(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundIdentifier {
        name: name.to_string(),
    })
}

// Type Errors

#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

#[cold]
pub fn unsupported_operands(operation: &str, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperands {
        operation: operation.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn none_dereference(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NoneDereference {
        operation: operation.to_string(),
    })
}

// Invocation Errors

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn call_depth_exceeded(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

#[cold]
pub fn unhandled_return() -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhandledReturn)
}

// Arithmetic Errors

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}
