#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::rc::Rc;

use mython_runtime::{Class, CompareOp, EvalErrorKind, Method, Statement};

use super::run;

mod addition {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_sum() {
        let value = run(&Statement::add(Statement::number(2), Statement::number(40)))
            .result
            .unwrap();
        assert_eq!(value.as_number(), Some(42));
    }

    /// Documents a suspect convention: concatenation puts the right operand first.
    #[test]
    fn string_concatenation_puts_right_operand_first() {
        let value = run(&Statement::add(Statement::string("a"), Statement::string("b")))
            .result
            .unwrap();
        assert_eq!(value.as_str(), Some("ba"));
    }

    #[test]
    fn mixed_operands_are_fatal() {
        let err = run(&Statement::add(Statement::number(1), Statement::string("x")))
            .result
            .unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::UnsupportedOperands {
                operation: "addition".to_owned(),
                left: "Number".to_owned(),
                right: "String".to_owned(),
            }
        );
    }

    #[test]
    fn none_operand_is_fatal() {
        let err = run(&Statement::add(Statement::none(), Statement::number(1)))
            .result
            .unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::UnsupportedOperands { .. }));
    }

    #[test]
    fn overflow_is_fatal() {
        let err = run(&Statement::add(Statement::number(i64::MAX), Statement::number(1)))
            .result
            .unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::IntegerOverflow {
                operation: "addition".to_owned(),
            }
        );
    }

    /// `Money.__add__(other)` returns `self.amount + other`.
    fn money() -> Rc<Class> {
        Rc::new(Class::new(
            "Money",
            vec![
                Method::new(
                    "__init__",
                    vec!["amount".to_owned()],
                    Statement::assign_field(
                        Statement::variable("self"),
                        "amount",
                        Statement::variable("amount"),
                    ),
                ),
                Method::new(
                    "__add__",
                    vec!["other".to_owned()],
                    Statement::ret(Statement::add(
                        Statement::dotted(["self", "amount"]),
                        Statement::variable("other"),
                    )),
                ),
            ],
            None,
        ))
    }

    #[test]
    fn left_add_overload_receives_right_operand() {
        let program = Statement::add(
            Statement::new_instance(money(), vec![Statement::number(10)]),
            Statement::number(5),
        );
        assert_eq!(run(&program).result.unwrap().as_number(), Some(15));
    }

    #[test]
    fn right_add_overload_receives_left_operand() {
        let program = Statement::add(
            Statement::number(5),
            Statement::new_instance(money(), vec![Statement::number(10)]),
        );
        assert_eq!(run(&program).result.unwrap().as_number(), Some(15));
    }

    #[test]
    fn overload_only_applies_to_addition() {
        let program = Statement::sub(
            Statement::new_instance(money(), vec![Statement::number(10)]),
            Statement::number(5),
        );
        assert!(run(&program).result.unwrap().is_none());
    }
}

mod soft_failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sub_and_mult_on_non_numbers_yield_none() {
        for program in [
            Statement::sub(Statement::string("a"), Statement::number(1)),
            Statement::mult(Statement::number(2), Statement::string("b")),
            Statement::div(Statement::none(), Statement::number(1)),
        ] {
            let run = run(&program);
            assert!(run.result.unwrap().is_none());
            assert_eq!(run.diagnostics, "");
        }
    }

    #[test]
    fn division_by_zero_yields_none_and_one_diagnostic_line() {
        let run = run(&Statement::div(Statement::number(6), Statement::number(0)));
        assert!(run.result.unwrap().is_none());
        assert_eq!(run.diagnostics.lines().count(), 1);
        assert!(run.diagnostics.contains("division by zero"));
        assert_eq!(run.output, "");
    }

    #[test]
    fn division_truncates_toward_zero() {
        let value = run(&Statement::div(Statement::number(-7), Statement::number(2)))
            .result
            .unwrap();
        assert_eq!(value.as_number(), Some(-3));
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let err = run(&Statement::mult(Statement::number(i64::MAX), Statement::number(2)))
            .result
            .unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
        let err = run(&Statement::div(Statement::number(i64::MIN), Statement::number(-1)))
            .result
            .unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
    }
}

mod comparisons {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compare(op: CompareOp, lhs: Statement, rhs: Statement) -> (bool, String) {
        let run = run(&Statement::compare(op, lhs, rhs));
        (run.result.unwrap().as_bool().unwrap(), run.diagnostics)
    }

    #[test]
    fn numbers_and_strings_compare_quietly() {
        let (less, diagnostics) =
            compare(CompareOp::Less, Statement::number(1), Statement::number(2));
        assert!(less);
        assert_eq!(diagnostics, "");

        let (ge, _) = compare(
            CompareOp::GreaterOrEqual,
            Statement::string("b"),
            Statement::string("a"),
        );
        assert!(ge);
    }

    #[test]
    fn mismatched_operands_are_greater_with_diagnostics() {
        let (greater, diagnostics) =
            compare(CompareOp::Greater, Statement::number(1), Statement::string("1"));
        assert!(greater);
        assert!(diagnostics.contains("Number"));
        assert!(diagnostics.contains("String"));
    }

    #[test]
    fn mismatched_operands_are_not_equal() {
        let (equal, diagnostics) =
            compare(CompareOp::Equal, Statement::bool(true), Statement::bool(true));
        assert!(!equal);
        assert_eq!(diagnostics.lines().count(), 1);
    }
}
