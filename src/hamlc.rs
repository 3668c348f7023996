//! Main module for hamlc library functionality

pub mod backend;
pub mod compiler;
pub mod config;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod rendering;
pub mod testing;
pub mod transforms;
pub mod tree;
