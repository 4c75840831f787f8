//! Core types and the scanning pass that fills them.

pub mod scanner;
mod types;

pub use scanner::{collect_files, portable_path};
pub use types::*;
