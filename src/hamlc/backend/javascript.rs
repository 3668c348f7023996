//! JavaScript backend
//!
//!     Generates the body of a JavaScript function that builds the page in a string variable
//!     and returns it. A line variable is updated before each template line runs, so a caller
//!     catching an exception can report the template line that failed.
//!
//!     var _$output = "";
//!     var _$line = 0;
//!     _$line = 1;
//!     _$output += "<p >";
//!     _$output += "Hello";
//!     _$output += "</p>";
//!     return _$output;
//!
//!     Attribute blocks are JavaScript object literals and are merged at runtime by a helper
//!     (`attrs` by default) that the embedding page provides:
//!     `attrs({href: url}, {"class":"nav"})` must return the rendered attribute string.

use crate::hamlc::backend::{AttributeDefaults, Backend, Fragment, Markup, Piece};
use crate::hamlc::error::CompileResult;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Names and layout of the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JavaScriptOptions {
    /// Variable accumulating the generated markup.
    pub output_variable: String,
    /// Variable holding the template line being executed.
    pub line_variable: String,
    /// Runtime helper merging attribute objects into an attribute string.
    pub attrs_helper: String,
    /// Indentation of statement bodies.
    pub indent: String,
}

impl Default for JavaScriptOptions {
    fn default() -> Self {
        Self {
            output_variable: "_$output".to_string(),
            line_variable: "_$line".to_string(),
            attrs_helper: "attrs".to_string(),
            indent: "  ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JavaScriptBackend {
    options: JavaScriptOptions,
}

impl JavaScriptBackend {
    pub fn new(options: JavaScriptOptions) -> Self {
        Self { options }
    }

    /// A JavaScript expression concatenating the markup pieces.
    fn concatenation(&self, markup: &Markup) -> String {
        if markup.is_empty() {
            return string_literal("");
        }
        markup
            .pieces()
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => string_literal(text),
                Piece::Code(code) => code.clone(),
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// JSON string syntax is JavaScript string literal syntax, except that JSON allows raw line
/// and paragraph separators, which pre-ES2019 engines reject.
fn string_literal(text: &str) -> String {
    Value::String(text.to_string())
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

impl Backend for JavaScriptBackend {
    fn initialize(&self, blocks: &[String]) -> CompileResult<String> {
        let mut lines = vec![
            format!("var {} = \"\";", self.options.output_variable),
            format!("var {} = 0;", self.options.line_variable),
        ];
        lines.extend(blocks.iter().filter(|block| !block.is_empty()).cloned());
        lines.push(format!("return {};", self.options.output_variable));
        Ok(lines.join("\n"))
    }

    fn emit_content(&self, out: &mut Fragment, content: &Markup) -> CompileResult<()> {
        out.push(format!(
            "{} += {};",
            self.options.output_variable,
            self.concatenation(content)
        ));
        Ok(())
    }

    fn emit_expression(&self, out: &mut Fragment, expression: &str) -> CompileResult<()> {
        // `!= x` arrives as `= x`
        let code = expression.strip_prefix('=').unwrap_or(expression).trim();
        if code.is_empty() {
            return Ok(());
        }
        out.push(format!("{} += ({});", self.options.output_variable, code));
        Ok(())
    }

    fn emit_statement(&self, out: &mut Fragment, line: &str, body: &str) -> CompileResult<()> {
        let statement = line.strip_prefix('-').unwrap_or(line).trim();
        if body.is_empty() {
            out.push(statement);
            return Ok(());
        }
        out.push(format!("{} {{", statement));
        for body_line in body.lines() {
            if body_line.is_empty() {
                out.push("");
            } else {
                out.push(format!("{}{}", self.options.indent, body_line));
            }
        }
        out.push("}");
        Ok(())
    }

    fn emit_line_marker(&self, out: &mut Fragment, line_number: usize) -> CompileResult<()> {
        out.push(format!("{} = {};", self.options.line_variable, line_number));
        Ok(())
    }

    fn build_attributes(
        &self,
        expression: &str,
        defaults: &AttributeDefaults,
    ) -> CompileResult<String> {
        let mut merged = Map::new();
        if let Some(class) = &defaults.class {
            merged.insert("class".to_string(), Value::String(class.clone()));
        }
        if let Some(id) = &defaults.id {
            merged.insert("id".to_string(), Value::String(id.clone()));
        }
        Ok(format!(
            "{}({}, {})",
            self.options.attrs_helper,
            expression,
            Value::Object(merged)
        ))
    }

    fn evaluate(&self, expression: &str) -> CompileResult<String> {
        let code = expression.trim_start_matches(&['!', '='][..]).trim();
        if code.is_empty() {
            return Ok(string_literal(""));
        }
        Ok(format!("({})", code))
    }
}
