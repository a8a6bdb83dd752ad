//! Arithmetic and logical operators on already-evaluated operands.
//!
//! User overloads (`__add__`) need the interpreter and are tried before
//! these functions are reached. What is left here is the builtin behaviour:
//!
//! - `+` adds numbers and concatenates strings; anything else is fatal
//! - `-`, `*`, `/` need two numbers and yield the "no value" sentinel otherwise
//! - `/` by zero writes a diagnostic and yields the sentinel
//!
//! Integer arithmetic is checked; overflow is an error.

use mython_runtime::{
    integer_overflow, unsupported_operands, ArithmeticOp, EvalResult, LogicalOp, Object, Value,
};

use crate::print_handler::PrintHandlerImpl;

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.map(Value::number).ok_or_else(|| integer_overflow(op_name))
}

fn numbers(left: &Value, right: &Value) -> Option<(i64, i64)> {
    Some((left.as_number()?, right.as_number()?))
}

/// Builtin arithmetic. `__add__` overloads must already have been ruled out.
pub fn evaluate_arithmetic(
    op: ArithmeticOp,
    left: &Value,
    right: &Value,
    out: &PrintHandlerImpl,
) -> EvalResult {
    match op {
        ArithmeticOp::Add => evaluate_add(left, right),
        ArithmeticOp::Sub => match numbers(left, right) {
            Some((a, b)) => checked_arith(a.checked_sub(b), "subtraction"),
            None => Ok(soft_failure(op, left, right)),
        },
        ArithmeticOp::Mult => match numbers(left, right) {
            Some((a, b)) => checked_arith(a.checked_mul(b), "multiplication"),
            None => Ok(soft_failure(op, left, right)),
        },
        ArithmeticOp::Div => match numbers(left, right) {
            Some((a, 0)) => {
                out.diagnostic(&format!("division by zero: {a} / 0 (Number / Number)"));
                Ok(Value::none())
            }
            Some((a, b)) => checked_arith(a.checked_div(b), "division"),
            None => Ok(soft_failure(op, left, right)),
        },
    }
}

fn evaluate_add(left: &Value, right: &Value) -> EvalResult {
    match (left.get(), right.get()) {
        (Some(Object::Number(a)), Some(Object::Number(b))) => {
            checked_arith(a.checked_add(*b), "addition")
        }
        // Right operand first. Long-standing behaviour of the language; see DESIGN.md.
        (Some(Object::Str(a)), Some(Object::Str(b))) => {
            let mut joined = String::with_capacity(a.len().saturating_add(b.len()));
            joined.push_str(b);
            joined.push_str(a);
            Ok(Value::string(joined))
        }
        _ => Err(unsupported_operands(
            "addition",
            left.type_name(),
            right.type_name(),
        )),
    }
}

#[cold]
fn soft_failure(op: ArithmeticOp, left: &Value, right: &Value) -> Value {
    tracing::debug!(
        op = op.as_symbol(),
        left = left.type_name(),
        right = right.type_name(),
        "non-numeric operands, yielding None"
    );
    Value::none()
}

/// `and` / `or` over the truthiness of two evaluated operands.
pub fn evaluate_logical(op: LogicalOp, left: &Value, right: &Value) -> bool {
    let (l, r) = (left.is_truthy(), right.is_truthy());
    match op {
        LogicalOp::And => l && r,
        LogicalOp::Or => l || r,
    }
}
