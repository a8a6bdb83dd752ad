//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::diagnostics::CallStack;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Default limit on nested method and function invocations.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for creating Interpreter instances.
///
/// Defaults: output to stdout, diagnostics to stderr, call depth limited to
/// [`DEFAULT_MAX_CALL_DEPTH`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Set the sink for `print` output and diagnostics.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit nested invocations; `None` removes the limit.
    ///
    /// Native stack growth is handled separately, so an unlimited interpreter
    /// is bounded only by memory.
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            call_stack: CallStack::new(self.max_call_depth),
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
