//! Line-fed batching of expressions.
//!
//! In batch mode a document holds several independent expressions
//! separated by blank lines. [`ExpressionBuffer`] accumulates lines and
//! hands back each expression once its block ends.

/// Accumulates input lines into blank-line separated expressions.
#[derive(Debug, Default)]
pub struct ExpressionBuffer {
    /// Lines of the expression being collected
    lines: Vec<String>,
}

impl ExpressionBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of input.
    ///
    /// Returns the finished expression when `line` is blank and ends a
    /// non-empty block, `None` otherwise.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return self.take();
        }

        self.lines.push(line.to_string());
        None
    }

    /// Return whatever is still buffered at end of input.
    pub fn flush(&mut self) -> Option<String> {
        self.take()
    }

    fn take(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            return None;
        }
        let expression = self.lines.join("\n");
        self.lines.clear();
        Some(expression)
    }
}

/// Split a whole document into its blank-line separated expressions.
pub fn split_expressions(input: &str) -> Vec<String> {
    let mut buffer = ExpressionBuffer::new();
    let mut expressions: Vec<String> = input
        .lines()
        .filter_map(|line| buffer.push_line(line))
        .collect();
    expressions.extend(buffer.flush());
    expressions
}
