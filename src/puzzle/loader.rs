use anyhow::{Context, Result};
use std::path::Path;

use super::types::TerminalConfig;

pub fn load_terminal(path: &Path) -> Result<TerminalConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading terminal config {}", path.display()))?;
    let config: TerminalConfig = toml::from_str(&content)
        .with_context(|| format!("parsing terminal config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_terminals(dir: &Path) -> Result<Vec<TerminalConfig>> {
    let pattern = dir.join("terminal_*.toml");
    let mut paths: Vec<_> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .collect();

    // Sort by filename so terminal_01, terminal_02 are in order
    paths.sort();

    let mut terminals = Vec::new();
    for path in paths {
        terminals.push(load_terminal(&path)?);
    }

    Ok(terminals)
}
