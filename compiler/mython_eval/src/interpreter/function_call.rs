//! Function call evaluation methods for the Interpreter.

use mython_runtime::{
    arity_mismatch, none_dereference, type_mismatch, Environment, EvalResult, Function, Value,
};

use super::Interpreter;
use crate::diagnostics::CallFrame;

impl Interpreter {
    /// Call a function value with already-evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn call_function(&mut self, callee: &Value, args: &[Value]) -> EvalResult {
        if callee.is_none() {
            return Err(none_dereference("call"));
        }
        let Some(function) = callee.as_function() else {
            return Err(type_mismatch("Function", callee.type_name()));
        };

        match function {
            Function::Native { name, func } => {
                self.call_stack.push(CallFrame::new(*name))?;
                let result = func(args).map_err(|err| self.call_stack.attach_backtrace(err));
                self.call_stack.pop();
                result
            }
            Function::User {
                name,
                formal_params,
                body,
            } => {
                if formal_params.len() != args.len() {
                    return Err(self.call_stack.attach_backtrace(arity_mismatch(
                        name,
                        formal_params.len(),
                        args.len(),
                    )));
                }
                let mut frame = Environment::new();
                // The function sees itself by name, so it can recurse.
                frame.define(name.as_str(), callee.share());
                for (param, arg) in formal_params.iter().zip(args) {
                    frame.define(param.as_str(), arg.share());
                }
                self.invoke(name.clone(), body, frame)
            }
        }
    }
}
