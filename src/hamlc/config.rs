//! Configuration loading
//!
//! The defaults live in `defaults/hamlc.default.toml`, compiled into the crate. A [Loader]
//! starts from them and stacks TOML files and single-key overrides on top; later layers win.
//! The merged table deserializes into [HamlConfig].
//!
//! ```toml
//! [compiler]
//! doctypes = true
//!
//! [javascript]
//! output_variable = "html"
//! ```

use crate::hamlc::backend::JavaScriptOptions;
use crate::hamlc::compiler::CompilerOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/hamlc.default.toml");

/// Everything a compilation can be configured with.
#[derive(Debug, Clone, Deserialize)]
pub struct HamlConfig {
    pub compiler: CompilerOptions,
    pub javascript: JavaScriptOptions,
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Stack a TOML file; building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Stack a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `compiler.doctypes`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<HamlConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<HamlConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let loaded = load_defaults().unwrap();
        assert_eq!(loaded.compiler, CompilerOptions::default());
        assert_eq!(loaded.javascript, JavaScriptOptions::default());
    }

    #[test]
    fn test_overrides_replace_single_keys() {
        let loaded = Loader::new()
            .set_override("compiler.doctypes", true)
            .unwrap()
            .set_override("javascript.output_variable", "html")
            .unwrap()
            .build()
            .unwrap();
        assert!(loaded.compiler.doctypes);
        assert_eq!(loaded.javascript.output_variable, "html");
        assert_eq!(loaded.javascript.line_variable, "_$line");
    }

    #[test]
    fn test_file_layers_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[compiler]\nself_closing = [\"source\"]").unwrap();

        let loaded = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(loaded.compiler.self_closing, vec!["source"]);
        assert!(!loaded.compiler.doctypes);
        assert_eq!(loaded.javascript, JavaScriptOptions::default());
    }

    #[test]
    fn test_absent_optional_file_is_skipped() {
        let loaded = Loader::new()
            .with_optional_file("no-such-hamlc.toml")
            .build()
            .unwrap();
        assert_eq!(loaded.compiler, CompilerOptions::default());
        assert!(Loader::new().with_file("no-such-hamlc.toml").build().is_err());
    }
}
