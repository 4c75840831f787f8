//! Output format modules for srclist

pub mod cmake;

pub use cmake::CmakeFormatter;
