pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod fs;
pub mod runner;

// Re-export key items for convenience
pub use config::GenConfig;
pub use self::core::{FileCategory, FileLists};
pub use error::ScanError;
pub use runner::{generate, generate_with, run};
