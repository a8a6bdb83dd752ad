//! Print handler for configurable output.
//!
//! A handler owns two channels:
//! - the output sink written by `print` statements
//! - the diagnostic stream for runtime warnings (incomparable operands,
//!   division by zero), which never abort execution
//!
//! Destinations:
//! - Native: stdout / stderr (default)
//! - Tests and embedding hosts: in-memory buffers
//! - Silent: both channels discarded
//!
//! Uses enum dispatch instead of trait objects; the set of sinks is closed.

use parking_lot::Mutex;
use std::sync::Arc;

/// Default handler: output to stdout, diagnostics to stderr.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        print!("{msg}");
    }

    pub fn diagnostic(&self, msg: &str) {
        eprintln!("{msg}");
    }
}

/// Handler that captures both channels into separate buffers.
pub struct BufferPrintHandler {
    output: Mutex<String>,
    diagnostics: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            output: Mutex::new(String::new()),
            diagnostics: Mutex::new(String::new()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.output.lock().push_str(msg);
    }

    /// Record one diagnostic line.
    pub fn diagnostic(&self, msg: &str) {
        let mut buf = self.diagnostics.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn get_output(&self) -> String {
        self.output.lock().clone()
    }

    pub fn get_diagnostics(&self) -> String {
        self.diagnostics.lock().clone()
    }

    /// Clear both channels.
    pub fn clear(&self) {
        self.output.lock().clear();
        self.diagnostics.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// stdout + stderr (default).
    Stdout(StdoutPrintHandler),
    /// In-memory capture.
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Write one line to the diagnostic stream.
    pub fn diagnostic(&self, msg: &str) {
        tracing::debug!(diagnostic = msg, "runtime warning");
        match self {
            Self::Stdout(h) => h.diagnostic(msg),
            Self::Buffer(h) => h.diagnostic(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured diagnostics; empty for handlers that don't capture.
    pub fn get_diagnostics(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_diagnostics(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler; the host keeps one clone to read captured output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
