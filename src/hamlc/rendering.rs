//! Tree renderer
//!
//!     Walks a [LineNode] tree depth-first and produces generated source through a [Backend].
//!
//!     Children render before their parent, each into its own [Fragment]; the parent then
//!     classifies its own line and splices the joined child output where its kind requires:
//!
//!         Element     opening tag, then the children (or the inline content), then the
//!                     closing tag. Self-closing elements emit the opening tag only.
//!         Expression  handed to the backend; children are not used.
//!         Statement   handed to the backend together with the children, which it wraps.
//!         Text        emitted as a literal; children are not used.
//!
//!     Every line except a statement is preceded by a line marker. The root is not a line: its
//!     rendered children go to [Backend::initialize] once, and that is the program.

use crate::hamlc::backend::{Backend, Fragment, Markup};
use crate::hamlc::compiler::CompilerOptions;
use crate::hamlc::error::{CompileError, CompileResult};
use crate::hamlc::parsing::doctype::{doctype_declaration, doctype_key};
use crate::hamlc::parsing::{classify_line, ElementSpec, LineKind};
use crate::hamlc::tree::LineNode;
use tracing::{trace, warn};

/// Render a tree with the default options.
pub fn render(tree: &LineNode, backend: &dyn Backend) -> CompileResult<String> {
    Renderer::new(backend, &CompilerOptions::default()).render(tree)
}

pub struct Renderer<'a> {
    backend: &'a dyn Backend,
    options: &'a CompilerOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(backend: &'a dyn Backend, options: &'a CompilerOptions) -> Self {
        Self { backend, options }
    }

    /// Render the tree rooted at `root` into a complete program.
    pub fn render(&self, root: &LineNode) -> CompileResult<String> {
        let blocks = self.render_children(root, 0)?;
        self.backend.initialize(&blocks)
    }

    fn render_children(&self, node: &LineNode, depth: usize) -> CompileResult<Vec<String>> {
        node.children
            .iter()
            .map(|child| self.render_node(child, depth))
            .collect()
    }

    fn render_node(&self, node: &LineNode, depth: usize) -> CompileResult<String> {
        let inside = self.render_children(node, depth + 1)?;
        let kind = classify_line(&node.text, self.options.doctypes);
        let mut out = Fragment::new(depth);

        if kind.takes_line_marker() {
            self.backend.emit_line_marker(&mut out, node.line_number)?;
        }

        match kind {
            LineKind::Element => self.render_element(node, &inside, &mut out)?,
            LineKind::Expression => {
                // the marker is a single ASCII character
                self.backend.emit_expression(&mut out, &node.text[1..])?
            }
            LineKind::Statement => {
                self.backend
                    .emit_statement(&mut out, &node.text, &inside.join("\n"))?
            }
            LineKind::Doctype => {
                let declaration = doctype_declaration(&node.text).ok_or_else(|| {
                    CompileError::unsupported(format!("doctype `{}`", doctype_key(&node.text)))
                })?;
                self.backend
                    .emit_content(&mut out, &Markup::literal(declaration))?
            }
            LineKind::Text => self
                .backend
                .emit_content(&mut out, &Markup::literal(node.text.as_str()))?,
        }

        trace!(line = node.line_number, ?kind, "rendered line");
        Ok(out.finish())
    }

    fn render_element(
        &self,
        node: &LineNode,
        inside: &[String],
        out: &mut Fragment,
    ) -> CompileResult<()> {
        let self_closing = self.options.self_closing.as_slice();
        let spec = ElementSpec::parse_with_tags(&node.text, self_closing).map_err(|source| {
            CompileError::UnbalancedAttributeBlock {
                line: node.source_line,
                text: node.text.clone(),
                source,
            }
        })?;
        let markup = spec.construct_markup(self.backend)?;

        self.backend.emit_content(out, &markup.open)?;

        let Some(close) = markup.close else {
            if !inside.is_empty() {
                warn!(
                    line = node.source_line,
                    tag = %spec.tag,
                    "ignoring content nested under a self-closing element"
                );
            }
            return Ok(());
        };

        if !inside.is_empty() {
            out.push(inside.join("\n"));
        } else if let Some(body) = &markup.body {
            self.backend.emit_content(out, body)?;
        }
        self.backend.emit_content(out, &close)
    }
}
