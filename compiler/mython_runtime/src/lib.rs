#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError carries its backtrace inline; boxing would ripple through every Execute"
)]
//! Mython Runtime - value model and program representation for the Mython interpreter.
//!
//! This crate provides:
//! - Runtime values (`Value` handle over the closed `Object` variant set)
//! - `Environment`: identifier to value mapping used for call frames and instance fields
//! - Classes, instances and single-inheritance method lookup
//! - Function values (native and user-defined)
//! - The statement tree (`Statement`) consumed by the evaluator
//! - Evaluation errors and the `ControlSignal` used for `return`
//!
//! # Ownership
//!
//! Every runtime value lives behind an `Rc`. Cloning a `Value` shares the
//! underlying object, so field writes through one handle are visible
//! through all of them. There is no cycle collection: an instance that
//! stores itself in one of its own fields is leaked.

mod ast;
mod class;
mod environment;
mod errors;
mod function;
mod value;

pub use ast::{ArithmeticOp, CompareOp, LogicalOp, Statement};
pub use class::{Class, ClassInstance, ClassRegistry, Method};
pub use environment::Environment;
pub use errors::{
    arity_mismatch, call_depth_exceeded, integer_overflow, none_dereference, type_mismatch,
    unbound_identifier, unhandled_return, unsupported_operands, BacktraceFrame, ControlSignal,
    EvalBacktrace, EvalError, EvalErrorKind, EvalResult, ExecResult,
};
pub use function::{Function, NativeFn};
pub use value::{Object, Value};
