//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Fragments carry bytes rather than strings: escaped asset content may hold
//! bytes >= 0x80 that are not valid UTF-8 and must reach the output unchanged.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(Vec<u8>),
    /// Indent the contained fragments one level.
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<Vec<u8>>) -> Self {
        Self::Line(s.into())
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
