//! Runtime values for the Mython interpreter.
//!
//! # Handle Architecture
//!
//! `Object` is the closed set of runtime variants. It is never passed around
//! by itself: every object lives behind a `Value`, a reference-counted handle
//! that may also be empty (the "no value" sentinel produced by statements
//! such as `print`).
//!
//! ```text
//! let n = Value::number(42);       // fresh object, one owner
//! let alias = n.share();           // second owner of the same object
//! let nothing = Value::none();     // the sentinel
//! ```
//!
//! Downcasts (`as_number`, `as_instance`, ...) never fail: they return `None`
//! for the wrong variant or for the sentinel. Only `Value::object` treats the
//! sentinel as an error, for callers that need to dispatch on the variant.

use std::fmt;
use std::rc::Rc;

use crate::class::{Class, ClassInstance};
use crate::errors::{none_dereference, EvalResult};
use crate::function::Function;

/// A runtime object. Always reached through a [`Value`] handle.
#[derive(Debug)]
pub enum Object {
    /// Signed integer.
    Number(i64),
    /// Immutable text.
    Str(String),
    /// `True` / `False`.
    Bool(bool),
    /// A class used as a value (e.g. the result of a class definition).
    Class(Rc<Class>),
    /// A callable.
    Function(Function),
    /// A live object with its own field storage.
    Instance(ClassInstance),
}

impl Object {
    /// Name of the variant for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Number(_) => "Number",
            Object::Str(_) => "String",
            Object::Bool(_) => "Bool",
            Object::Class(_) => "Class",
            Object::Function(_) => "Function",
            Object::Instance(_) => "ClassInstance",
        }
    }
}

/// Shared-ownership handle to an [`Object`], or the "no value" sentinel.
#[derive(Clone, Default)]
pub struct Value(Option<Rc<Object>>);

// Factory Methods

impl Value {
    /// Take ownership of a fresh object. The returned handle is its only owner.
    #[inline]
    pub fn own(object: Object) -> Self {
        Value(Some(Rc::new(object)))
    }

    /// The "no value" sentinel.
    #[inline]
    pub fn none() -> Self {
        Value(None)
    }

    /// Another owner of the same underlying object.
    ///
    /// Equivalent to `clone`; spelled out where aliasing is the point
    /// (binding `self`, storing a field).
    #[inline]
    #[must_use]
    pub fn share(&self) -> Self {
        Value(self.0.clone())
    }

    /// A new Number.
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::own(Object::Number(n))
    }

    /// A new String.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::own(Object::Str(s.into()))
    }

    /// A new Bool.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::own(Object::Bool(b))
    }

    /// A handle to a class definition.
    #[inline]
    pub fn class(class: Rc<Class>) -> Self {
        Value::own(Object::Class(class))
    }

    /// A handle to a callable.
    #[inline]
    pub fn function(function: Function) -> Self {
        Value::own(Object::Function(function))
    }

    /// Wrap a new instance of `class` with empty field storage.
    #[inline]
    pub fn instance(class: Rc<Class>) -> Self {
        Value::own(Object::Instance(ClassInstance::new(class)))
    }
}

// Downcasts

impl Value {
    /// `true` for the "no value" sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Dereference the handle.
    ///
    /// Fails with `NoneDereference` on the sentinel; `operation` names what the
    /// caller was trying to do with it (e.g. "print", "call a method on").
    pub fn object(&self, operation: &str) -> EvalResult<&Object> {
        self.0.as_deref().ok_or_else(|| none_dereference(operation))
    }

    /// The object, or `None` for the sentinel.
    #[inline]
    pub fn get(&self) -> Option<&Object> {
        self.0.as_deref()
    }

    pub fn as_number(&self) -> Option<i64> {
        match self.get()? {
            Object::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.get()? {
            Object::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.get()? {
            Object::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&Rc<Class>> {
        match self.get()? {
            Object::Class(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self.get()? {
            Object::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&ClassInstance> {
        match self.get()? {
            Object::Instance(i) => Some(i),
            _ => None,
        }
    }

    /// Variant name for diagnostics; `None` for the sentinel.
    pub fn type_name(&self) -> &'static str {
        self.get().map_or("None", Object::type_name)
    }

    /// Truthiness used by conditions and logical operators.
    ///
    /// Bool is its flag, Number is nonzero, String is non-empty and every
    /// instance is true. Classes, functions and the sentinel are false.
    pub fn is_truthy(&self) -> bool {
        match self.get() {
            Some(Object::Bool(b)) => *b,
            Some(Object::Number(n)) => *n != 0,
            Some(Object::Str(s)) => !s.is_empty(),
            Some(Object::Instance(_)) => true,
            Some(Object::Class(_) | Object::Function(_)) | None => false,
        }
    }

    /// `true` when both handles own the same object (or both are the sentinel).
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Address of the underlying object, used as an instance's identity.
    pub fn address(&self) -> Option<*const Object> {
        self.0.as_ref().map(Rc::as_ptr)
    }

    /// Number of handles currently owning the object (0 for the sentinel).
    pub fn owner_count(&self) -> usize {
        self.0.as_ref().map_or(0, Rc::strong_count)
    }
}

impl PartialEq for Value {
    /// Primitives compare by payload; classes, functions and instances by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (Some(Object::Number(a)), Some(Object::Number(b))) => a == b,
            (Some(Object::Str(a)), Some(Object::Str(b))) => a == b,
            (Some(Object::Bool(a)), Some(Object::Bool(b))) => a == b,
            _ => self.ptr_eq(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => write!(f, "None"),
            Some(Object::Number(n)) => write!(f, "Number({n})"),
            Some(Object::Str(s)) => write!(f, "String({s:?})"),
            Some(Object::Bool(b)) => write!(f, "Bool({b})"),
            Some(Object::Class(c)) => write!(f, "Class({})", c.name()),
            Some(Object::Function(func)) => write!(f, "Function({})", func.name()),
            Some(Object::Instance(inst)) => write!(f, "{inst:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
