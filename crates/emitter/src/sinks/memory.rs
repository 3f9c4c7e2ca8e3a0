//! MemorySink - captures diagnostic lines in a shared buffer

use std::cell::RefCell;
use std::rc::Rc;

use contracts::DiagnosticSink;

/// Sink that records lines in memory.
///
/// Clones share the same buffer, so keep one clone to inspect what an
/// emitter wrote through the other.
#[derive(Debug, Clone)]
pub struct MemorySink {
    name: String,
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Create a new, empty MemorySink
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Rc::default(),
        }
    }

    /// Lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written so far, each line newline-terminated
    pub fn contents(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .map(|line| format!("{line}\n"))
            .collect()
    }

    /// Discard captured lines
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
