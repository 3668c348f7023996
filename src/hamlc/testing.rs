//! Testing utilities
//!
//! Helpers shared by the unit and integration tests:
//!
//! - [assert_tree]: fluent assertions over a parsed [LineNode] tree
//! - [RecordingBackend]: a backend that renders a readable trace of every emission and counts
//!   which capabilities were used
//! - [AbstractBackend]: a backend implementing nothing, every capability fails
//!
//! ```rust,ignore
//! let tree = parse(".box#main\n  %span Hi\n")?;
//! assert_tree(&tree).child_count(1).child(0, |box_| {
//!     box_.text(".box#main").line_number(1).child_count(1).child(0, |span| {
//!         span.text("%span Hi").leaf();
//!     });
//! });
//! ```

use crate::hamlc::backend::{AttributeDefaults, Backend, Fragment, Markup};
use crate::hamlc::error::CompileResult;
use crate::hamlc::tree::LineNode;
use std::collections::BTreeMap;
use std::sync::Mutex;

// ============================================================================
// Tree Assertions
// ============================================================================

/// Create an assertion builder for a tree node
pub fn assert_tree(node: &LineNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: "root".to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a LineNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text, expected,
            "{}: expected text {:?}, found {:?}",
            self.context, expected, self.node.text
        );
        self
    }

    pub fn line_number(self, expected: usize) -> Self {
        assert_eq!(
            self.node.line_number, expected,
            "{}: expected line number {}, found {}",
            self.context, expected, self.node.line_number
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.node.children.len(),
            expected,
            "{}: expected {} children, found {}",
            self.context,
            expected,
            self.node.children.len()
        );
        self
    }

    /// Assert the node has no children
    pub fn leaf(self) -> Self {
        self.child_count(0)
    }

    /// Run assertions against the child at `index`
    pub fn child<F>(self, index: usize, assertions: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let child = self.node.children.get(index).unwrap_or_else(|| {
            panic!(
                "{}: child index {} out of bounds ({} children)",
                self.context,
                index,
                self.node.children.len()
            )
        });
        assertions(NodeAssertion {
            node: child,
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Assert the texts of the direct children, in order
    pub fn child_texts(self, expected: &[&str]) -> Self {
        let texts: Vec<&str> = self.node.children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, expected, "{}: child texts differ", self.context);
        self
    }
}

/// All node texts in document order, root excluded.
pub fn flatten_texts(root: &LineNode) -> Vec<String> {
    root.descendants().iter().map(|n| n.text.clone()).collect()
}

// ============================================================================
// Backends
// ============================================================================

/// A backend that writes a readable trace instead of real code.
///
/// - content: the markup as plain text, code pieces as `{{code}}`
/// - expressions: `[expr <code>]`
/// - statements: `[stmt <line>]`, the body, `[end]`
/// - line markers: `[line <n>]`
/// - attributes: `attrs(<expression>, <defaults as JSON>)`
/// - evaluation: `eval(<expression>)`
///
/// `initialize` joins the blocks with newlines and adds nothing else.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<BTreeMap<&'static str, usize>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, capability: &'static str) {
        let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        *calls.entry(capability).or_insert(0) += 1;
    }

    /// How many times a capability was invoked.
    pub fn call_count(&self, capability: &str) -> usize {
        let calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        calls.get(capability).copied().unwrap_or(0)
    }
}

impl Backend for RecordingBackend {
    fn initialize(&self, blocks: &[String]) -> CompileResult<String> {
        self.record("initialize");
        Ok(blocks.join("\n"))
    }

    fn emit_content(&self, out: &mut Fragment, content: &Markup) -> CompileResult<()> {
        self.record("emit_content");
        out.push(content.to_plain_text());
        Ok(())
    }

    fn emit_expression(&self, out: &mut Fragment, expression: &str) -> CompileResult<()> {
        self.record("emit_expression");
        out.push(format!("[expr {}]", expression.trim()));
        Ok(())
    }

    fn emit_statement(&self, out: &mut Fragment, line: &str, body: &str) -> CompileResult<()> {
        self.record("emit_statement");
        out.push(format!("[stmt {}]", line));
        if !body.is_empty() {
            out.push(body);
        }
        out.push("[end]");
        Ok(())
    }

    fn emit_line_marker(&self, out: &mut Fragment, line_number: usize) -> CompileResult<()> {
        self.record("emit_line_marker");
        out.push(format!("[line {}]", line_number));
        Ok(())
    }

    fn build_attributes(
        &self,
        expression: &str,
        defaults: &AttributeDefaults,
    ) -> CompileResult<String> {
        self.record("build_attributes");
        let defaults = serde_json::to_string(defaults).unwrap_or_default();
        Ok(format!("attrs({}, {})", expression, defaults))
    }

    fn evaluate(&self, expression: &str) -> CompileResult<String> {
        self.record("evaluate");
        Ok(format!("eval({})", expression))
    }
}

/// A backend that implements no capability at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct AbstractBackend;

impl Backend for AbstractBackend {}
