//! Method dispatch methods for the Interpreter.
//!
//! Covers explicit method calls, construction (`__init__`) and the `+`
//! overload (`__add__`). `__str__` lives with the rest of value formatting.

use std::rc::Rc;

use mython_runtime::{
    arity_mismatch, ArithmeticOp, Class, ControlSignal, Environment, EvalResult, Statement, Value,
};

use super::{expect_instance, Interpreter};
use crate::diagnostics::CallFrame;

/// Name bound to the receiver inside every method frame.
pub(super) const SELF: &str = "self";
pub(super) const INIT: &str = "__init__";
pub(super) const ADD: &str = "__add__";

impl Interpreter {
    /// Call `name` on `receiver` with already-evaluated arguments.
    ///
    /// The receiver must be an instance. A method that lookup does not find
    /// yields the no-value sentinel; one that is found with a different
    /// parameter count is an `ArityMismatch`.
    pub fn call_method(&mut self, receiver: &Value, name: &str, args: &[Value]) -> EvalResult {
        let instance = expect_instance(receiver, "call a method on")?;
        let class = Rc::clone(instance.class());
        let Some(method) = class.method(name) else {
            tracing::debug!(class = class.name(), method = name, "method not found");
            return Ok(Value::none());
        };

        let qualified = format!("{}.{name}", class.name());
        if method.arity() != args.len() {
            return Err(self
                .call_stack
                .attach_backtrace(arity_mismatch(&qualified, method.arity(), args.len())));
        }

        let mut frame = Environment::new();
        frame.define(SELF, receiver.share());
        for (param, arg) in method.formal_params.iter().zip(args) {
            frame.define(param.as_str(), arg.share());
        }
        self.invoke(qualified, &method.body, frame)
    }

    /// Allocate an instance of `class` and run its `__init__`, if any.
    ///
    /// The instance is returned whatever `__init__` evaluates to.
    pub fn new_instance(&mut self, class: &Rc<Class>, args: &[Value]) -> EvalResult {
        let instance = Value::instance(Rc::clone(class));
        if class.method(INIT).is_some() {
            self.call_method(&instance, INIT, args)?;
        }
        Ok(instance)
    }

    /// `__add__` overload for `+`: the left operand's first, then the right's.
    ///
    /// `Ok(None)` means neither operand overloads `+` and builtin addition
    /// applies.
    pub(super) fn try_add_overload(
        &mut self,
        op: ArithmeticOp,
        left: &Value,
        right: &Value,
    ) -> EvalResult<Option<Value>> {
        if op != ArithmeticOp::Add {
            return Ok(None);
        }
        if overloads_add(left) {
            return self.call_method(left, ADD, &[right.share()]).map(Some);
        }
        if overloads_add(right) {
            return self.call_method(right, ADD, &[left.share()]).map(Some);
        }
        Ok(None)
    }

    /// Run `body` as a new invocation named `name` in `frame`.
    ///
    /// This is the only place `Returning` turns back into a value. Errors
    /// leaving the invocation pick up a backtrace of the live frames.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %name))]
    pub(super) fn invoke(
        &mut self,
        name: String,
        body: &Statement,
        mut frame: Environment,
    ) -> EvalResult {
        self.call_stack.push(CallFrame::new(name))?;
        let result = self
            .execute(body, &mut frame)
            .map(ControlSignal::into_value)
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }
}

fn overloads_add(value: &Value) -> bool {
    value
        .as_instance()
        .is_some_and(|instance| instance.has_method(ADD, 1))
}
