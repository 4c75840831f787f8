use crate::config::GenConfig;
use crate::core::collect_files;
use crate::format::CmakeFormatter;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Scan `root` with default settings and return the CMake fragment.
pub fn generate(root: &Path) -> Result<String> {
    let config = GenConfig {
        root: root.to_path_buf(),
        ..Default::default()
    };
    generate_with(&config)
}

/// Scan and render fully in memory, so a failed scan produces no output at all.
pub fn generate_with(config: &GenConfig) -> Result<String> {
    config.validate()?;

    let lists = collect_files(config)
        .with_context(|| format!("Failed to scan directory: {:?}", config.root))?;

    let mut buffer = Vec::new();
    CmakeFormatter::from_config(config).write_all(&mut buffer, &lists)?;
    Ok(String::from_utf8(buffer)?)
}

/// Main entry point in CLI mode: generate, then write to the output file or stdout.
pub fn run(config: GenConfig) -> Result<()> {
    let text = generate_with(&config)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            tracing::info!(output = %path.display(), "wrote file list");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
