//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Renderable};

/// One indentation level of the generated C++.
const INDENT: &[u8] = b"    ";

/// Builds indented code into a byte buffer.
///
/// The buffer can be drained with [`CodeBuilder::take`] between blocks while
/// keeping the current indentation, which lets a caller stream large output
/// one piece at a time.
///
/// # Example
///
/// ```
/// use assetgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new();
/// builder
///     .push_line("void f() {")
///     .push_indent()
///     .push_line("return;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), b"void f() {\n    return;\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: Vec<u8>,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    ///
    /// Newlines inside `s` are written as-is and the following text is not
    /// re-indented.
    pub fn push_line(&mut self, s: impl AsRef<[u8]>) -> &mut Self {
        for _ in 0..self.indent_level {
            self.buffer.extend_from_slice(INDENT);
        }
        self.buffer.extend_from_slice(s.as_ref());
        self.buffer.push(b'\n');
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

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
        }
    }

    /// Drain the bytes built so far, keeping the indentation level.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buffer)
    }

    /// Build the final output.
    pub fn build(self) -> Vec<u8> {
        self.buffer
    }
}
