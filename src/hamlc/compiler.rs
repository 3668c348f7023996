//! Compiler entry point
//!
//! A [Compiler] owns a backend and a parse-then-render pipeline. Converting holds no state
//! between calls: the line counter lives inside each parse, so one compiler can be shared
//! across threads and used concurrently.
//!
//! ```rust,ignore
//! use hamlc::{Compiler, JavaScriptBackend};
//!
//! let compiler = Compiler::new(JavaScriptBackend::default());
//! let program = compiler.convert("%p Hello\n")?;
//! ```

use crate::hamlc::backend::Backend;
use crate::hamlc::error::CompileResult;
use crate::hamlc::parsing::SELF_CLOSING_TAGS;
use crate::hamlc::transforms::stages::{Parsing, Rendering};
use crate::hamlc::transforms::Transform;
use serde::Deserialize;
use tracing::debug;

/// Language-level knobs, independent of the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompilerOptions {
    /// Tags rendered without a closing tag.
    pub self_closing: Vec<String>,
    /// Recognize `!!!` doctype shortcut lines.
    pub doctypes: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            self_closing: SELF_CLOSING_TAGS.iter().map(|tag| tag.to_string()).collect(),
            doctypes: false,
        }
    }
}

pub struct Compiler {
    pipeline: Transform<String, String>,
}

impl Compiler {
    pub fn new<B>(backend: B) -> Self
    where
        B: Backend + Send + Sync + 'static,
    {
        Self::with_options(backend, CompilerOptions::default())
    }

    pub fn with_options<B>(backend: B, options: CompilerOptions) -> Self
    where
        B: Backend + Send + Sync + 'static,
    {
        let pipeline = Transform::from_fn(Ok)
            .then(Parsing::new())
            .then(Rendering::new(backend, options));
        Self { pipeline }
    }

    /// Compile template source to generated source.
    ///
    /// Fails without output on malformed indentation, unbalanced attribute blocks or a backend
    /// capability that is not implemented.
    pub fn convert(&self, source: &str) -> CompileResult<String> {
        debug!(bytes = source.len(), "converting template");
        self.pipeline.run(source.to_string())
    }
}
