//! Output formats for inspecting parsed templates
//!
//! - [treeviz]: one line per node, nesting shown as indentation
//!
//! The tree also serializes with serde (JSON, YAML) for machine consumption.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
