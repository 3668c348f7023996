//! Element sub-parser
//!
//!     Takes an element line (`%tag.class#id{attrs} content`) apart and builds its opening and
//!     closing markup.
//!
//! Head Scan
//!
//!     The longest leading run of `%tag`, `.class` and `#id` tokens. Tokens apply in order:
//!     the last `%` and `#` win, classes accumulate. The tag defaults to `div`.
//!
//! Tail Scan
//!
//!     One pass over the rest of the line with a brace counter. A balanced `{...}` block is kept
//!     verbatim as the attribute expression; its inner syntax belongs to the backend. Outside
//!     braces, a space starts inline text and `=`/`!` starts an inline expression; either one
//!     consumes the rest of the line. Any other character outside braces is skipped.

use crate::hamlc::backend::{AttributeDefaults, Backend, Markup};
use crate::hamlc::error::{BraceError, CompileResult};
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Tags that never take a closing tag.
pub const SELF_CLOSING_TAGS: &[&str] = &["meta", "img", "link", "br", "hr", "input", "area", "base"];

static ELEMENT_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[%.#][A-Za-z0-9_-]+)*").unwrap());

static HEAD_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[%.#][A-Za-z0-9_-]+").unwrap());

/// Characters the tail scan cares about; everything else is one `Other` run.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum TailToken {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(" ")]
    Space,
    #[token("=")]
    Equals,
    #[token("!")]
    Bang,
    #[regex(r"[^{} =!]+")]
    Other,
}

/// Everything the sub-parser learned from one element line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub id: Option<String>,
    pub class_list: Vec<String>,
    /// The raw `{...}` block, braces included.
    pub attribute_expression: Option<String>,
    pub inline_text: Option<String>,
    /// The raw trailing expression, starting with its `=`/`!` marker.
    pub inline_expression: Option<String>,
    pub is_self_closing: bool,
}

/// Opening, body and closing markup of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMarkup {
    pub open: Markup,
    /// Inline content, if the line had any.
    pub body: Option<Markup>,
    /// `None` for self-closing elements.
    pub close: Option<Markup>,
}

impl Default for ElementSpec {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            class_list: Vec::new(),
            attribute_expression: None,
            inline_text: None,
            inline_expression: None,
            is_self_closing: false,
        }
    }
}

impl ElementSpec {
    /// Parse an element line against the standard self-closing tags.
    pub fn parse(line: &str) -> Result<Self, BraceError> {
        Self::parse_with_tags(line, SELF_CLOSING_TAGS)
    }

    /// Parse an element line against a custom set of self-closing tags.
    pub fn parse_with_tags<S: AsRef<str>>(
        line: &str,
        self_closing: &[S],
    ) -> Result<Self, BraceError> {
        let mut spec = ElementSpec::default();

        let head = ELEMENT_HEAD.find(line).map_or("", |m| m.as_str());
        for token in HEAD_TOKEN.find_iter(head) {
            let (marker, name) = token.as_str().split_at(1);
            match marker {
                "%" => spec.tag = name.to_string(),
                "#" => spec.id = Some(name.to_string()),
                _ => spec.class_list.push(name.to_string()),
            }
        }

        spec.scan_tail(&line[head.len()..], head.len())?;
        spec.is_self_closing = self_closing.iter().any(|tag| tag.as_ref() == spec.tag);
        Ok(spec)
    }

    fn scan_tail(&mut self, rest: &str, offset: usize) -> Result<(), BraceError> {
        let mut depth = 0usize;
        let mut block_start = 0usize;

        for (token, span) in TailToken::lexer(rest).spanned() {
            match token.unwrap_or(TailToken::Other) {
                TailToken::OpenBrace => {
                    if depth == 0 {
                        block_start = span.start;
                    }
                    depth += 1;
                }
                TailToken::CloseBrace => {
                    if depth == 0 {
                        return Err(BraceError::UnexpectedClose {
                            offset: offset + span.start,
                        });
                    }
                    depth -= 1;
                    if depth == 0 {
                        self.attribute_expression = Some(rest[block_start..span.end].to_string());
                    }
                }
                TailToken::Space if depth == 0 => {
                    let remaining = rest[span.start..].trim();
                    if !remaining.is_empty() {
                        self.inline_text = Some(remaining.to_string());
                        break;
                    }
                }
                TailToken::Equals | TailToken::Bang if depth == 0 => {
                    self.inline_expression = Some(rest[span.start..].trim().to_string());
                    break;
                }
                _ => {}
            }
        }

        if depth > 0 {
            return Err(BraceError::Unclosed { depth });
        }
        Ok(())
    }

    /// Classes joined with single spaces, `None` when there are none.
    pub fn class_attribute(&self) -> Option<String> {
        if self.class_list.is_empty() {
            None
        } else {
            Some(self.class_list.join(" "))
        }
    }

    /// Build the element's markup. The backend renders the attribute block and evaluates
    /// inline expressions; inline text is HTML-escaped here (`& < > " '`).
    pub fn construct_markup(&self, backend: &dyn Backend) -> CompileResult<ElementMarkup> {
        let mut open = Markup::literal(format!("<{} ", self.tag));
        match &self.attribute_expression {
            Some(expression) => {
                let defaults = AttributeDefaults {
                    id: self.id.clone(),
                    class: self.class_attribute(),
                };
                open.push_code(backend.build_attributes(expression, &defaults)?);
            }
            None => {
                if let Some(id) = &self.id {
                    open.push_literal(format!("id=\"{}\" ", id));
                }
                if let Some(class) = self.class_attribute() {
                    open.push_literal(format!("class=\"{}\" ", class));
                }
            }
        }
        open.push_literal(if self.is_self_closing { "/>" } else { ">" });

        let body = match (&self.inline_text, &self.inline_expression) {
            (Some(text), _) => {
                let escaped = html_escape::encode_quoted_attribute(text);
                Some(Markup::literal(escaped))
            }
            (None, Some(expression)) => Some(Markup::code(backend.evaluate(expression)?)),
            (None, None) => None,
        };

        let close = if self.is_self_closing {
            None
        } else {
            Some(Markup::literal(format!("</{}>", self.tag)))
        };

        Ok(ElementMarkup { open, body, close })
    }
}
