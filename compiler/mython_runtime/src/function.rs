//! Function values.

use std::fmt;
use std::rc::Rc;

use crate::ast::Statement;
use crate::errors::EvalResult;
use crate::value::Value;

/// Host-provided builtin. Receives the evaluated arguments and checks its own arity.
pub type NativeFn = fn(&[Value]) -> EvalResult;

/// A callable value.
#[derive(Clone)]
pub enum Function {
    /// Builtin implemented in Rust.
    Native { name: &'static str, func: NativeFn },
    /// Function defined in the program. Runs in a fresh frame holding only
    /// its parameters.
    User {
        name: String,
        formal_params: Vec<String>,
        body: Rc<Statement>,
    },
}

impl Function {
    /// Wrap a builtin.
    pub fn native(name: &'static str, func: NativeFn) -> Self {
        Function::Native { name, func }
    }

    /// A program-defined function; `body` runs in a fresh frame.
    pub fn user(name: impl Into<String>, formal_params: Vec<String>, body: Statement) -> Self {
        Function::User {
            name: name.into(),
            formal_params,
            body: Rc::new(body),
        }
    }

    /// The name used in messages and backtraces.
    pub fn name(&self) -> &str {
        match self {
            Function::Native { name, .. } => *name,
            Function::User { name, .. } => name.as_str(),
        }
    }

    /// Declared parameter count; `None` for natives, which validate themselves.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Function::Native { .. } => None,
            Function::User { formal_params, .. } => Some(formal_params.len()),
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Native { name, .. } => write!(f, "<native {name}>"),
            Function::User {
                name,
                formal_params,
                ..
            } => write!(f, "<function {name}({})>", formal_params.join(", ")),
        }
    }
}
