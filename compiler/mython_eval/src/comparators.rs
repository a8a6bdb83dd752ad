//! Equality and ordering over runtime values.
//!
//! Two primitives, `equal` and `less`, are defined for Number/Number and
//! String/String pairs. Any other pair writes a diagnostic and compares as
//! `false`. The four remaining operators are derived from the primitives
//! only, so for an incomparable pair `greater` is `true`.

use mython_runtime::{CompareOp, Object, Value};

use crate::print_handler::PrintHandlerImpl;

/// A bound comparison function.
pub type Comparator = fn(&Value, &Value, &PrintHandlerImpl) -> bool;

#[cold]
fn report_incomparable(operation: &str, lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) {
    out.diagnostic(&format!(
        "cannot compare for {operation}: lhs is {}, rhs is {}",
        lhs.type_name(),
        rhs.type_name()
    ));
}

pub fn equal(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    match (lhs.get(), rhs.get()) {
        (Some(Object::Number(a)), Some(Object::Number(b))) => a == b,
        (Some(Object::Str(a)), Some(Object::Str(b))) => a == b,
        _ => {
            report_incomparable("equality", lhs, rhs, out);
            false
        }
    }
}

pub fn less(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    match (lhs.get(), rhs.get()) {
        (Some(Object::Number(a)), Some(Object::Number(b))) => a < b,
        (Some(Object::Str(a)), Some(Object::Str(b))) => a < b,
        _ => {
            report_incomparable("ordering", lhs, rhs, out);
            false
        }
    }
}

pub fn not_equal(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    !equal(lhs, rhs, out)
}

pub fn greater(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    !less(lhs, rhs, out) && !equal(lhs, rhs, out)
}

pub fn less_or_equal(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    !greater(lhs, rhs, out)
}

pub fn greater_or_equal(lhs: &Value, rhs: &Value, out: &PrintHandlerImpl) -> bool {
    !less(lhs, rhs, out)
}

/// The function bound to a `Comparison` node's operator.
pub fn comparator(op: CompareOp) -> Comparator {
    match op {
        CompareOp::Equal => equal,
        CompareOp::NotEqual => not_equal,
        CompareOp::Less => less,
        CompareOp::Greater => greater,
        CompareOp::LessOrEqual => less_or_equal,
        CompareOp::GreaterOrEqual => greater_or_equal,
    }
}
