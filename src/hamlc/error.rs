//! Error types for template compilation

use thiserror::Error;

/// Errors that can occur while compiling a template.
///
/// Every variant aborts the whole compilation; no partial output is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Indentation is not a multiple of the detected unit, or a nested block has no parent
    /// line to attach to.
    #[error("malformed indentation on line {line}: {message}")]
    MalformedIndentation { line: usize, message: String },

    /// The `{...}` attribute block of an element line never balances.
    #[error("unbalanced attribute block on line {line}: {text}")]
    UnbalancedAttributeBlock {
        line: usize,
        text: String,
        #[source]
        source: BraceError,
    },

    /// A backend capability was invoked that the backend does not implement.
    #[error("unsupported construct: backend does not implement `{capability}`")]
    UnsupportedConstruct { capability: String },
}

impl CompileError {
    pub fn unsupported(capability: impl Into<String>) -> Self {
        CompileError::UnsupportedConstruct {
            capability: capability.into(),
        }
    }
}

/// Brace-nesting failures found by the element sub-parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BraceError {
    #[error("{depth} attribute block(s) left open at end of line")]
    Unclosed { depth: usize },
    #[error("closing brace without a matching opening brace at offset {offset}")]
    UnexpectedClose { offset: usize },
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = CompileError::MalformedIndentation {
            line: 3,
            message: "3 leading whitespace characters is not a multiple of 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed indentation on line 3: 3 leading whitespace characters is not a multiple of 2"
        );

        let err = CompileError::unsupported("evaluate");
        assert_eq!(
            err.to_string(),
            "unsupported construct: backend does not implement `evaluate`"
        );
    }

    #[test]
    fn test_unbalanced_block_exposes_source() {
        let err = CompileError::UnbalancedAttributeBlock {
            line: 1,
            text: "%a{href".to_string(),
            source: BraceError::Unclosed { depth: 1 },
        };
        let source = err.source().expect("brace error as source");
        assert_eq!(
            source.to_string(),
            "1 attribute block(s) left open at end of line"
        );
    }
}
