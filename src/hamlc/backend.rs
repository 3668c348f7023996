//! Code emission backends
//!
//!     The renderer decides *what* to emit and *when*; a [Backend] decides what it looks like in
//!     the target language. Output is built bottom-up: each node renders into its own
//!     [Fragment], the fragments of a node's children are joined and spliced into the parent,
//!     and the root's blocks are finally handed to [Backend::initialize].
//!
//!     Content handed to [Backend::emit_content] is [Markup]: a run of literal text (which the
//!     backend must encode as a string literal of its language) and code pieces (target source
//!     the backend itself produced earlier, from [Backend::build_attributes] or
//!     [Backend::evaluate]).
//!
//!     Every capability has a default implementation that fails with
//!     [CompileError::UnsupportedConstruct], so a backend that forgets one is caught on first use
//!     instead of silently dropping output.

pub mod javascript;

pub use javascript::{JavaScriptBackend, JavaScriptOptions};

use crate::hamlc::error::{CompileError, CompileResult};
use serde::Serialize;

/// A piece of content to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Static text, to be encoded as a string literal.
    Literal(String),
    /// Target-language source, emitted as is.
    Code(String),
}

/// Literal and code pieces, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pieces: Vec<Piece>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal(text: impl Into<String>) -> Self {
        let mut markup = Self::new();
        markup.push_literal(text);
        markup
    }

    pub fn code(code: impl Into<String>) -> Self {
        let mut markup = Self::new();
        markup.push_code(code);
        markup
    }

    /// Append literal text, merging with a preceding literal piece.
    pub fn push_literal(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.pieces.last_mut() {
            Some(Piece::Literal(previous)) => previous.push_str(&text),
            _ => self.pieces.push(Piece::Literal(text)),
        }
    }

    pub fn push_code(&mut self, code: impl Into<String>) {
        self.pieces.push(Piece::Code(code.into()));
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Human-readable rendition: literals verbatim, code wrapped in `{{ }}`.
    pub fn to_plain_text(&self) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.clone(),
                Piece::Code(code) => format!("{{{{{}}}}}", code),
            })
            .collect()
    }
}

/// Output buffer for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    depth: usize,
    lines: Vec<String>,
}

impl Fragment {
    /// A buffer for a node at the given nominal depth (top-level lines are depth 0).
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

/// Literal `id`/`class` values merged under a dynamic attribute block.
///
/// These are defaults: values the attribute expression sets itself take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// The target-language specific half of the compiler.
pub trait Backend {
    /// Program preamble and output setup around the rendered top-level blocks.
    fn initialize(&self, _blocks: &[String]) -> CompileResult<String> {
        Err(CompileError::unsupported("initialize"))
    }

    /// Append literal or dynamic content to the output.
    fn emit_content(&self, _out: &mut Fragment, _content: &Markup) -> CompileResult<()> {
        Err(CompileError::unsupported("emit_content"))
    }

    /// Evaluate the expression of a `=`/`!` line and append the result. `expression` is the
    /// line without its first marker character.
    fn emit_expression(&self, _out: &mut Fragment, _expression: &str) -> CompileResult<()> {
        Err(CompileError::unsupported("emit_expression"))
    }

    /// Splice a `-` statement line around its already-rendered body.
    fn emit_statement(&self, _out: &mut Fragment, _line: &str, _body: &str) -> CompileResult<()> {
        Err(CompileError::unsupported("emit_statement"))
    }

    /// Record the template line being executed, for runtime error reporting.
    fn emit_line_marker(&self, _out: &mut Fragment, _line_number: usize) -> CompileResult<()> {
        Err(CompileError::unsupported("emit_line_marker"))
    }

    /// Target source merging an attribute block (braces included) with literal id/class.
    fn build_attributes(
        &self,
        _expression: &str,
        _defaults: &AttributeDefaults,
    ) -> CompileResult<String> {
        Err(CompileError::unsupported("build_attributes"))
    }

    /// Target source for an element's trailing `=`/`!=` content, marker included.
    fn evaluate(&self, _expression: &str) -> CompileResult<String> {
        Err(CompileError::unsupported("evaluate"))
    }
}
