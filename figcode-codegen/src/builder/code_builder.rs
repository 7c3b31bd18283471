//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Generators walk node trees recursively, so the primary API takes
/// `&mut self` and returns `&mut Self` for chaining.
///
/// # Example
///
/// ```
/// use figcode_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::swift();
/// builder
///     .push_line("VStack {")
///     .push_indent()
///     .push_line("Text(\"Hello\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "VStack {\n    Text(\"Hello\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// 2-space indentation for HTML and JSX.
    pub fn markup() -> Self {
        Self::new(Indent::MARKUP)
    }

    /// 2-space indentation for Dart.
    pub fn dart() -> Self {
        Self::new(Indent::DART)
    }

    /// 4-space indentation for Swift.
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of `text` at the current indentation.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add `header`, the indented body written by `f`, then `close`.
    ///
    /// # Example
    ///
    /// ```
    /// use figcode_codegen::builder::CodeBuilder;
    ///
    /// let mut builder = CodeBuilder::dart();
    /// builder.push_block("Column(", "),", |b| {
    ///     b.push_line("children: [],");
    /// });
    /// assert_eq!(builder.build(), "Column(\n  children: [],\n),\n");
    /// ```
    pub fn push_block<F>(&mut self, header: &str, close: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.push_line(header).push_indent();
        f(self);
        self.push_dedent().push_line(close)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::markup()
    }
}
