use std::sync::{Arc, Mutex};

/// In-process log accumulator.
///
/// Lines are emitted through `tracing` for live diagnostics and kept in
/// memory so the complete log of a run can be embedded into the result
/// payload. Clones share the same buffer.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one diagnostic line.
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);

        if let Ok(mut lines) = self.lines.lock() {
            lines.push(message);
        }
    }

    /// The accumulated lines, in the order they were logged.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
