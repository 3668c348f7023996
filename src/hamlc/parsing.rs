//! Parsing
//!
//!     Everything that reads template text: recovering the line tree from indentation, deciding
//!     which kind each line is, and taking element lines apart.
//!
//! The Parsing Stages
//!
//!     1. Indentation. See [indentation]. The source is split into lines, blank lines are
//!        dropped, the indentation unit is detected from the first indented line, and lines are
//!        grouped recursively into a [LineNode](crate::hamlc::tree::LineNode) tree. Line numbers
//!        are handed out from a single counter that lives for one parse only.
//!
//!     2. Line classification. See [line_classification]. The renderer looks at the first
//!        character of a node's text to pick one of the line kinds. This is a pure function of
//!        the line and happens lazily, while rendering.
//!
//!     3. Elements. See [element]. Lines starting with `%`, `.` or `#` go through the element
//!        sub-parser: a head scan for tag/class/id tokens and a brace-balanced tail scan for the
//!        attribute block and inline content.
//!
//!     Doctype shortcuts (`!!! 5`) live in [doctype]; they are only recognized when enabled in
//!     the compiler options.

pub mod doctype;
pub mod element;
pub mod indentation;
pub mod line_classification;

pub use element::{ElementMarkup, ElementSpec, SELF_CLOSING_TAGS};
pub use indentation::{detect_indentation_unit, parse};
pub use line_classification::{classify_line, LineKind};
