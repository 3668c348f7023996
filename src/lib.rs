//! # hamlc
//!
//! A compiler for HAML-like templates.
//!
//! Templates are indentation sensitive: every line is a node and the lines indented one unit
//! beneath it are its children. Compilation runs in two stages:
//!
//! src/hamlc
//!   ├── parsing      Source text to a tree of line nodes (indentation, line kinds, elements)
//!   ├── rendering    Tree to generated source, through a pluggable backend
//!   └── backend      The emission contract plus the bundled JavaScript backend
//!
//! The entry point for most callers is [`Compiler`](hamlc::compiler::Compiler).
//!
//! For testing helpers (tree assertions, a recording backend), see the
//! [testing module](hamlc::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod hamlc;

pub use hamlc::backend::{Backend, JavaScriptBackend};
pub use hamlc::compiler::{Compiler, CompilerOptions};
pub use hamlc::error::{CompileError, CompileResult};
pub use hamlc::tree::LineNode;
