//! CMake `set(...)` list declarations

use anyhow::Result;
use std::io::Write;

use crate::config::GenConfig;
use crate::core::FileLists;

/// First line of every generated fragment.
pub const GENERATED_NOTICE: &str = "# NOTE: generated";

const INDENT: &str = "    ";

pub struct CmakeFormatter<'a> {
    header_list_name: &'a str,
    source_list_name: &'a str,
}

impl<'a> CmakeFormatter<'a> {
    pub fn new(header_list_name: &'a str, source_list_name: &'a str) -> Self {
        Self {
            header_list_name,
            source_list_name,
        }
    }

    pub fn from_config(config: &'a GenConfig) -> Self {
        Self::new(&config.header_list_name, &config.source_list_name)
    }

    pub fn write_notice(&self, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "{}", GENERATED_NOTICE)?;
        Ok(())
    }

    pub fn write_list(&self, output: &mut dyn Write, name: &str, paths: &[String]) -> Result<()> {
        writeln!(output, "set({}", name)?;
        for path in paths {
            writeln!(output, "{}{}", INDENT, path)?;
        }
        writeln!(output, ")")?;
        Ok(())
    }

    /// Notice, headers, then sources, each block separated by a blank line.
    pub fn write_all(&self, output: &mut dyn Write, lists: &FileLists) -> Result<()> {
        self.write_notice(output)?;
        writeln!(output)?;
        self.write_list(output, self.header_list_name, &lists.headers)?;
        writeln!(output)?;
        self.write_list(output, self.source_list_name, &lists.sources)?;
        Ok(())
    }
}
