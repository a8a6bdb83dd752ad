//! Whole-program tests: statement trees run through `Interpreter::run`.

mod operators_tests;

use mython_runtime::{Environment, EvalResult, Statement};

use crate::interpreter::Interpreter;
use crate::print_handler::buffer_handler;

/// Outcome of running one program with captured output.
pub(crate) struct Run {
    pub result: EvalResult,
    pub env: Environment,
    pub output: String,
    pub diagnostics: String,
}

/// Run `program` in fresh globals with both channels captured.
pub(crate) fn run(program: &Statement) -> Run {
    run_in(program, Environment::new())
}

pub(crate) fn run_in(program: &Statement, mut env: Environment) -> Run {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let result = interpreter.run(program, &mut env);
    Run {
        result,
        env,
        output: handler.get_output(),
        diagnostics: handler.get_diagnostics(),
    }
}
