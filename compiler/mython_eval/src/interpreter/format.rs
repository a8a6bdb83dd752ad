//! Textual form of runtime values, as written by `print` and `str`.

use mython_runtime::{type_mismatch, EvalResult, Object, Value};

use super::Interpreter;

const STR: &str = "__str__";

impl Interpreter {
    /// Text of a value. The no-value handle is a `NoneDereference` error.
    ///
    /// Instances use their zero-argument `__str__` when they have one,
    /// otherwise an identity string that stays the same for the instance's
    /// lifetime.
    pub fn stringify(&mut self, value: &Value) -> EvalResult<String> {
        match value.object("print")? {
            Object::Number(n) => Ok(n.to_string()),
            Object::Str(s) => Ok(s.clone()),
            Object::Bool(true) => Ok("True".to_owned()),
            Object::Bool(false) => Ok("False".to_owned()),
            Object::Class(class) => Ok(format!("Class {}", class.name())),
            Object::Function(function) => Ok(format!("<function {}>", function.name())),
            Object::Instance(instance) if instance.has_method(STR, 0) => {
                let text = self.call_method(value, STR, &[])?;
                match text.get() {
                    Some(Object::Str(s)) => Ok(s.clone()),
                    Some(Object::Number(n)) => Ok(n.to_string()),
                    _ => Err(type_mismatch("String", text.type_name())),
                }
            }
            Object::Instance(instance) => Ok(identity(instance.class().name(), value)),
        }
    }

    /// Like `stringify`, with the no-value handle written as `None`.
    pub(super) fn stringify_or_none(&mut self, value: &Value) -> EvalResult<String> {
        if value.is_none() {
            return Ok("None".to_owned());
        }
        self.stringify(value)
    }
}

fn identity(class_name: &str, value: &Value) -> String {
    let address = value.address().unwrap_or(std::ptr::null());
    format!("<{class_name} object at {address:p}>")
}
