//! Transform pipeline
//!
//! Compilation is a chain of typed stages: template text to a line tree, then the line tree to
//! generated source. [Transform] composes [Runnable] stages so the compiler, the CLI and the
//! tests share the same pipelines.
//!
//! ```rust,ignore
//! use hamlc::hamlc::transforms::standard::TEMPLATE_TO_TREE;
//!
//! let tree = TEMPLATE_TO_TREE.run("%p Hello\n".to_string())?;
//! ```
//!
//! - [`stages`]: the individual stages (parsing, rendering)
//! - [`standard`]: pre-built, backend-independent pipelines

pub mod stages;
pub mod standard;

use crate::hamlc::error::CompileResult;

/// Anything that can transform an input to an output.
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> CompileResult<O>;
}

/// A composable transformation pipeline from `I` to `O`.
///
/// Stages are only accepted by [Transform::then] when their input type matches the output type
/// built so far.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> CompileResult<O> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> CompileResult<O> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Chain a stage after this transform.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> CompileResult<O> {
        (self.run_fn)(input)
    }
}
