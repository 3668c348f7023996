//! Line tree
//!
//!     The parser output. Every non-blank template line becomes one [LineNode]; the lines
//!     indented one unit beneath it become its children. The tree has a synthetic root that
//!     carries no text and whose children are the top-level lines.
//!
//!     Nodes are built once per compilation and are not mutated afterwards.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineNode {
    /// Line content with the block indentation and line terminator removed.
    pub text: String,
    /// Sequential 1-based number in document order. 0 for the root.
    pub line_number: usize,
    /// Physical 1-based line in the source, blank lines included. 0 for the root.
    #[serde(skip_serializing)]
    pub source_line: usize,
    pub children: Vec<LineNode>,
}

impl LineNode {
    pub fn new(text: impl Into<String>, line_number: usize, source_line: usize) -> Self {
        Self {
            text: text.into(),
            line_number,
            source_line,
            children: Vec::new(),
        }
    }

    /// The synthetic root holding the given top-level nodes.
    pub fn root(children: Vec<LineNode>) -> Self {
        Self {
            text: String::new(),
            line_number: 0,
            source_line: 0,
            children,
        }
    }

    pub fn is_root(&self) -> bool {
        self.line_number == 0
    }

    /// All descendants in document order (pre-order), excluding self.
    pub fn descendants(&self) -> Vec<&LineNode> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }

    /// Number of descendants, excluding self.
    pub fn node_count(&self) -> usize {
        self.children.iter().map(|c| 1 + c.node_count()).sum()
    }
}
