//! Call stack tracking for the evaluator.
//!
//! Every method or function invocation pushes a `CallFrame`; the depth
//! limit is enforced in `push()`. When an error leaves an invocation the
//! live frames are snapshotted into an `EvalBacktrace` on the error.

use mython_runtime::{call_depth_exceeded, BacktraceFrame, EvalBacktrace, EvalError};

/// One live invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// `Class.method` or function name.
    pub name: String,
}

impl CallFrame {
    pub fn new(name: impl Into<String>) -> Self {
        CallFrame { name: name.into() }
    }
}

#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `None` means unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter an invocation. At the depth limit the stack is left unchanged
    /// and `CallDepthExceeded` is returned.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        match self.max_depth {
            Some(max) if self.frames.len() >= max => Err(call_depth_exceeded(max)),
            _ => {
                self.frames.push(frame);
                Ok(())
            }
        }
    }

    /// Leave the innermost invocation.
    pub fn pop(&mut self) {
        let left = self.frames.pop();
        debug_assert!(left.is_some(), "unbalanced call frame exit");
    }

    /// Live invocations.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Snapshot, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.clone(),
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace unless the error already carries one from a deeper frame.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.has_backtrace() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
