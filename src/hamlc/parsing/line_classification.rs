//! Line Classification
//!
//! Decides what a line is from its first character. The checks run in a fixed precedence
//! order and are mutually exclusive, so every line gets exactly one kind.
use serde::Serialize;

/// The kind of a template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// `%tag`, `.class` or `#id`
    Element,
    /// `= expr`, `!= expr`
    Expression,
    /// `- statement`, wraps its children
    Statement,
    /// `!!! 5`, only when doctype shortcuts are enabled
    Doctype,
    /// Anything else, emitted as literal text
    Text,
}

/// Classify a line (already stripped of indentation).
pub fn classify_line(line: &str, doctypes: bool) -> LineKind {
    match line.chars().next() {
        Some('%' | '.' | '#') => LineKind::Element,
        Some('!') if doctypes && line.starts_with("!!!") => LineKind::Doctype,
        Some('=' | '!') => LineKind::Expression,
        Some('-') => LineKind::Statement,
        _ => LineKind::Text,
    }
}

impl LineKind {
    /// Whether a line-number marker is emitted before lines of this kind.
    pub fn takes_line_marker(self) -> bool {
        !matches!(self, LineKind::Statement)
    }
}
