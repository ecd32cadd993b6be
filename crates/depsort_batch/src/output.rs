use anyhow::{Context, Result, anyhow};
use log::trace;
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::Config;

/// Destination of the sorted lines for `file`.
///
/// The matched suffix is removed from the end of the file name and
/// `cfg.output_suffix` appended. Subdirectories of the root are mirrored
/// under the output directory.
pub fn output_path_for(cfg: &Config, file: &Path) -> Result<PathBuf> {
    let name = file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid file name: {}", file.display()))?;
    let suffix = cfg
        .matched_suffix(name)
        .ok_or_else(|| anyhow!("{} does not end with any of {:?}", name, cfg.suffixes))?;
    let stem = &name[..name.len() - suffix.len()];

    let rel_dir =
        file.parent().and_then(|p| p.strip_prefix(&cfg.root).ok()).unwrap_or(Path::new(""));

    let out = cfg.output_dir.join(rel_dir).join(format!("{}{}", stem, cfg.output_suffix));
    trace!("Output path for {}: {}", file.display(), out.display());
    Ok(out)
}

/// Write each line followed by a newline, creating parent directories as needed
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
