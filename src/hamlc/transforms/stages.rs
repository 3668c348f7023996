//! Pipeline stages

use crate::hamlc::backend::Backend;
use crate::hamlc::compiler::CompilerOptions;
use crate::hamlc::error::CompileResult;
use crate::hamlc::parsing;
use crate::hamlc::rendering::Renderer;
use crate::hamlc::transforms::Runnable;
use crate::hamlc::tree::LineNode;

/// Template text → line tree.
#[derive(Debug, Default)]
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Runnable<String, LineNode> for Parsing {
    fn run(&self, input: String) -> CompileResult<LineNode> {
        parsing::parse(&input)
    }
}

/// Line tree → generated source, through the owned backend.
pub struct Rendering<B> {
    backend: B,
    options: CompilerOptions,
}

impl<B: Backend> Rendering<B> {
    pub fn new(backend: B, options: CompilerOptions) -> Self {
        Self { backend, options }
    }
}

impl<B: Backend> Runnable<LineNode, String> for Rendering<B> {
    fn run(&self, input: LineNode) -> CompileResult<String> {
        Renderer::new(&self.backend, &self.options).render(&input)
    }
}
