use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::config::AppPaths;

/// Print where the configuration lives followed by its contents.
pub fn cmd_config(paths: &AppPaths) -> Result<()> {
    let stdout = std::io::stdout();
    write_config(&mut stdout.lock(), paths)
}

fn write_config(out: &mut impl Write, paths: &AppPaths) -> Result<()> {
    let path = paths.config_file();
    let content = fs::read_to_string(&path)
        .with_context(|| format!("cannot read configuration file {}", path.display()))?;

    writeln!(out, "Config file: {}", path.display())?;
    writeln!(out)?;
    write!(out, "{content}")?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
