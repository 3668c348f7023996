//! Standard transform definitions
//!
//! Backend-independent pipelines, defined as static references using `once_cell::sync::Lazy`.
//! Pipelines that end in rendering own a backend and are built by
//! [Compiler](crate::hamlc::compiler::Compiler) instead.

use crate::hamlc::transforms::stages::Parsing;
use crate::hamlc::transforms::Transform;
use crate::hamlc::tree::LineNode;
use once_cell::sync::Lazy;

/// Template text → line tree.
pub static TEMPLATE_TO_TREE: Lazy<Transform<String, LineNode>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Parsing::new()));
