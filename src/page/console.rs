//! The page's diagnostic channel.
//!
//! Lines are kept in a bounded in-memory buffer for the console panel and
//! mirrored to `tracing`, so they also reach the log file when file logging
//! is enabled.

use chrono::Local;
use tracing::info;

#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug)]
pub struct Console {
    lines: Vec<ConsoleLine>,
    max_lines: usize,
    timestamp_format: String,
}

impl Console {
    pub fn new(max_lines: usize, timestamp_format: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            max_lines,
            timestamp_format: timestamp_format.into(),
        }
    }

    /// Append one diagnostic line. Oldest lines are dropped once the
    /// scrollback cap is reached.
    pub fn log(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!(target: "console", "{}", text);
        self.lines.push(ConsoleLine {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
        });
        if self.lines.len() > self.max_lines {
            self.lines.remove(0);
        }
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    /// Number of emissions still held in the buffer.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
