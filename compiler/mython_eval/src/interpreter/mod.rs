//! Tree-walking interpreter for Mython.
//!
//! # Architecture
//!
//! `Interpreter::execute` is the single evaluation entry point: it walks a
//! `Statement` against an `Environment` and produces a `ControlSignal`.
//!
//! - `exec` (this file) - node dispatch
//! - `method_dispatch` - method calls, `__init__`, `__add__`
//! - `function_call` - function values
//! - `format` - textual form of values for `print` and `str`
//!
//! # Frames
//!
//! Every invocation runs in a fresh `Environment` holding `self` (for
//! methods) and the parameters. Instance fields are only reachable through
//! `self.field`, so nested calls on one instance cannot clobber each
//! other's parameters.
//!
//! # Return
//!
//! `return` produces `ControlSignal::Returning`. Every node that evaluates a
//! child passes that signal straight up (see `operand!`), and only the
//! invocation boundary in `invoke` turns it back into a plain value.

mod builder;
mod format;
mod function_call;
mod method_dispatch;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use mython_runtime::{
    none_dereference, type_mismatch, unbound_identifier, unhandled_return, ClassInstance,
    CompareOp, ControlSignal, Environment, EvalResult, ExecResult, Statement, Value,
};
use smallvec::SmallVec;

use crate::comparators::comparator;
use crate::diagnostics::CallStack;
use crate::operators::{evaluate_arithmetic, evaluate_logical};
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;

/// Evaluated call arguments; most calls take few.
pub(crate) type Args = SmallVec<[Value; 4]>;

/// Evaluate a child node to a value, propagating `Returning` to the caller.
macro_rules! operand {
    ($interp:expr, $node:expr, $env:expr) => {
        match $interp.execute($node, $env)? {
            ControlSignal::Normal(value) => value,
            returning @ ControlSignal::Returning(_) => return Ok(returning),
        }
    };
}

/// Evaluate argument nodes left to right into `Args`.
macro_rules! arguments {
    ($interp:expr, $nodes:expr, $env:expr) => {{
        let mut values = Args::with_capacity($nodes.len());
        for node in $nodes {
            values.push(operand!($interp, node, $env));
        }
        values
    }};
}

/// The Mython evaluator.
pub struct Interpreter {
    /// Sink for `print` and runtime diagnostics.
    pub(crate) print_handler: SharedPrintHandler,
    /// Live invocations, for the depth limit and backtraces.
    pub(crate) call_stack: CallStack,
}

impl Interpreter {
    /// Interpreter writing to stdout with the default call depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Redirect `print` output (and diagnostics) from now on.
    pub fn set_print_handler(&mut self, handler: SharedPrintHandler) {
        self.print_handler = handler;
    }

    /// Captured output, if the handler captures.
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Captured diagnostics, if the handler captures.
    pub fn get_diagnostic_output(&self) -> String {
        self.print_handler.get_diagnostics()
    }

    pub fn clear_print_output(&self) {
        self.print_handler.clear();
    }

    /// Current invocation depth.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Run a whole program in `globals`.
    ///
    /// A `return` that escapes the program root is an `UnhandledReturn` error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Statement, globals: &mut Environment) -> EvalResult {
        match self.execute(program, globals)? {
            ControlSignal::Normal(value) => Ok(value),
            ControlSignal::Returning(value) => {
                tracing::debug!(?value, "return escaped the program root");
                Err(unhandled_return())
            }
        }
    }

    /// Execute one node.
    pub fn execute(&mut self, stmt: &Statement, env: &mut Environment) -> ExecResult {
        ensure_sufficient_stack(|| self.exec(stmt, env))
    }

    /// Execute a node that must produce a value; `Returning` is unwrapped.
    pub fn evaluate(&mut self, stmt: &Statement, env: &mut Environment) -> EvalResult {
        self.execute(stmt, env).map(ControlSignal::into_value)
    }

    /// Apply the comparator bound to `op`.
    pub fn compare(&self, op: CompareOp, lhs: &Value, rhs: &Value) -> bool {
        comparator(op)(lhs, rhs, &self.print_handler)
    }

    fn exec(&mut self, stmt: &Statement, env: &mut Environment) -> ExecResult {
        tracing::trace!(node = stmt.kind_name(), "execute");
        match stmt {
            Statement::Constant(value)
            | Statement::FunctionDefinition(value)
            | Statement::ClassDefinition(value) => Ok(ControlSignal::Normal(value.share())),

            Statement::Assignment { name, value } => {
                let value = operand!(self, value, env);
                env.define(name.as_str(), value.share());
                Ok(ControlSignal::Normal(value))
            }

            Statement::VariableValue { dotted_ids } => {
                resolve_dotted(dotted_ids, env).map(ControlSignal::Normal)
            }

            Statement::FieldAssignment {
                object,
                field,
                value,
            } => {
                let target = operand!(self, object, env);
                let instance = expect_instance(&target, "assign a field of")?;
                let value = operand!(self, value, env);
                instance.set_field(field.as_str(), value.share());
                Ok(ControlSignal::Normal(value))
            }

            Statement::Print { args } => self.exec_print(args, env),

            Statement::MethodCall {
                object,
                method,
                args,
            } => {
                let receiver = operand!(self, object, env);
                let instance = expect_instance(&receiver, "call a method on")?;
                if !instance.has_method(method, args.len()) {
                    tracing::debug!(
                        class = instance.class().name(),
                        method = method.as_str(),
                        argc = args.len(),
                        "no matching method, yielding None"
                    );
                    return Ok(ControlSignal::Normal(Value::none()));
                }
                let values = arguments!(self, args, env);
                self.call_method(&receiver, method, &values)
                    .map(ControlSignal::Normal)
            }

            Statement::NewInstance { class, args } => {
                let values = arguments!(self, args, env);
                self.new_instance(class, &values).map(ControlSignal::Normal)
            }

            Statement::FunctionCall { function, args } => {
                let callee = operand!(self, function, env);
                let values = arguments!(self, args, env);
                self.call_function(&callee, &values)
                    .map(ControlSignal::Normal)
            }

            Statement::Stringify(argument) => {
                let value = operand!(self, argument, env);
                let text = self.stringify_or_none(&value)?;
                Ok(ControlSignal::Normal(Value::string(text)))
            }

            Statement::Arithmetic { op, lhs, rhs } => {
                let left = operand!(self, lhs, env);
                let right = operand!(self, rhs, env);
                if let Some(result) = self.try_add_overload(*op, &left, &right)? {
                    return Ok(ControlSignal::Normal(result));
                }
                evaluate_arithmetic(*op, &left, &right, &self.print_handler)
                    .map(ControlSignal::Normal)
            }

            Statement::Logical { op, lhs, rhs } => {
                let left = operand!(self, lhs, env);
                let right = operand!(self, rhs, env);
                Ok(ControlSignal::Normal(Value::bool(evaluate_logical(
                    *op, &left, &right,
                ))))
            }

            Statement::Not(argument) => {
                let value = operand!(self, argument, env);
                Ok(ControlSignal::Normal(Value::bool(!value.is_truthy())))
            }

            Statement::Comparison { op, lhs, rhs } => {
                let left = operand!(self, lhs, env);
                let right = operand!(self, rhs, env);
                Ok(ControlSignal::Normal(Value::bool(
                    self.compare(*op, &left, &right),
                )))
            }

            Statement::Compound(statements) => {
                for statement in statements {
                    if let returning @ ControlSignal::Returning(_) =
                        self.execute(statement, env)?
                    {
                        return Ok(returning);
                    }
                }
                Ok(ControlSignal::Normal(Value::none()))
            }

            Statement::Return(value) => {
                let value = operand!(self, value, env);
                Ok(ControlSignal::Returning(value))
            }

            Statement::IfElse {
                condition,
                if_body,
                else_body,
            } => {
                let condition = operand!(self, condition, env);
                if condition.is_truthy() {
                    self.execute(if_body, env)
                } else if let Some(else_body) = else_body {
                    self.execute(else_body, env)
                } else {
                    Ok(ControlSignal::Normal(Value::none()))
                }
            }
        }
    }

    /// `print a, b`: space separated, newline terminated.
    ///
    /// An argument that ends in `return` prints the value being returned.
    fn exec_print(&mut self, args: &[Statement], env: &mut Environment) -> ExecResult {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.print_handler.print(" ");
            }
            let value = self.execute(arg, env)?.into_value();
            let text = self.stringify_or_none(&value)?;
            self.print_handler.print(&text);
        }
        self.print_handler.println("");
        Ok(ControlSignal::Normal(Value::none()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `a.b.c`: a variable, then one field read per further segment.
fn resolve_dotted(dotted_ids: &[String], env: &Environment) -> EvalResult {
    let Some((first, fields)) = dotted_ids.split_first() else {
        return Err(type_mismatch("identifier", "empty path"));
    };
    let mut current = env.lookup(first)?;
    for field in fields {
        let next = {
            let instance = expect_instance(&current, "read a field of")?;
            instance.field(field).ok_or_else(|| {
                unbound_identifier(&format!("{}.{field}", instance.class().name()))
            })?
        };
        current = next;
    }
    Ok(current)
}

/// The instance behind `value`; the sentinel and other variants are fatal.
fn expect_instance<'a>(value: &'a Value, operation: &str) -> EvalResult<&'a ClassInstance> {
    if value.is_none() {
        return Err(none_dereference(operation));
    }
    value
        .as_instance()
        .ok_or_else(|| type_mismatch("ClassInstance", value.type_name()))
}
