//! Treeviz formatter for line trees
//!
//! A one line per node view of the tree, handy for checking how indentation was understood.
//! Nesting is encoded as indentation, 2 spaces per level:
//!
//! <indentation>(per level) <icon> <line number> <text> (truncated to 40 characters)
//!
//! Example:
//!
//!   ◇   1 %html
//!     ◇   2 %body
//!       λ   3 - if (user)
//!         ◇   4 %p= user.name
//!
//! Icons
//!     Element: ◇
//!     Expression: =
//!     Statement: λ
//!     Doctype: ⧉
//!     Text: ¶

use crate::hamlc::parsing::{classify_line, LineKind};
use crate::hamlc::tree::LineNode;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Element => "◇",
        LineKind::Expression => "=",
        LineKind::Statement => "λ",
        LineKind::Doctype => "⧉",
        LineKind::Text => "¶",
    }
}

/// Render the tree below `root` (the root itself has no line and is not shown).
pub fn to_treeviz_str(root: &LineNode) -> String {
    let mut out = String::new();
    for child in &root.children {
        write_node(child, 0, &mut out);
    }
    out
}

fn write_node(node: &LineNode, depth: usize, out: &mut String) {
    let icon = get_icon(classify_line(&node.text, false));
    out.push_str(&format!(
        "{}{} {:>3} {}\n",
        "  ".repeat(depth),
        icon,
        node.line_number,
        truncate(&node.text, 40)
    ));
    for child in &node.children {
        write_node(child, depth + 1, out);
    }
}
