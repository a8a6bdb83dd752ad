#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError carries its backtrace inline; boxing would ripple through every Execute"
)]
//! Mython Eval - tree-walking evaluator for Mython programs.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Interpreter`: statement dispatch, invocation frames and `ControlSignal` threading
//! - `comparators`: `equal`/`less` primitives and the four derived operators
//! - `evaluate_arithmetic` / `evaluate_logical`: builtin operator semantics
//! - `PrintHandlerImpl`: swappable sink for `print` output and runtime diagnostics
//! - `CallStack`: depth limit and backtraces
//!
//! # Re-exports
//!
//! This crate re-exports the runtime types from `mython_runtime` for convenience:
//! - `Value`, `Object`, `Class`, `ClassInstance`, `Function`, `Statement`
//! - `EvalError`, `EvalResult`, `ControlSignal`

pub mod comparators;
mod diagnostics;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod trace;

pub use mython_runtime::{
    ArithmeticOp, Class, ClassInstance, ClassRegistry, CompareOp, ControlSignal, Environment,
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult, ExecResult, Function, LogicalOp, Method,
    NativeFn, Object, Statement, Value,
};

pub use comparators::{
    comparator, equal, greater, greater_or_equal, less, less_or_equal, not_equal, Comparator,
};
pub use diagnostics::{CallFrame, CallStack};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_arithmetic, evaluate_logical};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use trace::init_tracing;

#[cfg(test)]
mod tests;
