use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use log::{debug, info};
use path_clean::PathClean;
use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_SUFFIX, DEFAULT_SUFFIX};

#[derive(Debug, Clone, Parser)]
#[command(name = "sort")]
#[command(about = "Sort the import and require lines of JavaScript files")]
pub struct Config {
    /// Directory containing the files to sort
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// File name suffix to match (repeatable)
    #[arg(long = "suffix", default_value = DEFAULT_SUFFIX)]
    pub suffixes: Vec<String>,

    /// Directory the sorted files are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Appended to each file name after its matched suffix is removed
    #[arg(long, default_value = DEFAULT_OUTPUT_SUFFIX)]
    pub output_suffix: String,

    /// Descend into subdirectories of the root
    #[arg(long)]
    pub recursive: bool,

    /// Number of worker threads (defaults to the number of CPUs)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Report files whose dependency lines are out of order without writing anything
    #[arg(long)]
    pub check: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffixes: vec![DEFAULT_SUFFIX.to_string()],
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            recursive: false,
            threads: None,
            check: false,
            json: false,
        }
    }
}

impl Config {
    /// Validate the options and turn `root` and `output_dir` into clean absolute paths
    pub fn initialize(&mut self) -> Result<()> {
        if self.suffixes.is_empty() {
            bail!("At least one --suffix is required");
        }
        if self.suffixes.iter().any(|s| s.is_empty()) {
            bail!("--suffix must not be empty");
        }
        if self.threads == Some(0) {
            bail!("--threads must be at least 1");
        }

        let cwd = env::current_dir().context("Failed to read current directory")?;

        let root = cwd.join(&self.root).clean();
        if !root.is_dir() {
            return Err(anyhow!("Root {} is not a directory", root.display()));
        }
        self.root = root.canonicalize().unwrap_or(root);
        info!("Using root directory: {}", self.root.display());

        self.output_dir = canonicalize_existing(&cwd.join(&self.output_dir).clean());
        debug!("Using output directory: {}", self.output_dir.display());
        debug!("Matching suffixes: {:?}", self.suffixes);

        Ok(())
    }

    /// The configured suffix `file_name` ends with, longest first
    pub fn matched_suffix(&self, file_name: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .filter(|s| file_name.ends_with(s.as_str()))
            .max_by_key(|s| s.len())
            .map(String::as_str)
    }
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
///
/// The output directory may not exist yet but must still compare equal to
/// the canonical paths the walker yields below a symlinked root.
fn canonicalize_existing(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut rest: Vec<&OsStr> = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return rest.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                rest.push(name);
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_defaults() {
        let cfg = Config::parse_from(["sort"]);
        assert_eq!(cfg.root, PathBuf::from("."));
        assert_eq!(cfg.suffixes, vec![".js".to_string()]);
        assert_eq!(cfg.output_dir, PathBuf::from("processed"));
        assert_eq!(cfg.output_suffix, "_sorted.txt");
        assert!(!cfg.recursive);
        assert!(!cfg.check);
        assert_eq!(cfg.threads, None);
    }

    #[test]
    fn test_cli_repeated_suffix() {
        let cfg = Config::parse_from(["sort", "--suffix", ".js", "--suffix", ".mjs"]);
        assert_eq!(cfg.suffixes, vec![".js".to_string(), ".mjs".to_string()]);
    }

    #[test]
    fn test_initialize_absolutizes_paths() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config {
            root: temp_dir.path().join("sub").join(".."),
            output_dir: temp_dir.path().join("out/./sorted"),
            ..Config::default()
        };
        cfg.initialize().unwrap();
        assert_eq!(cfg.root, temp_dir.path().canonicalize().unwrap());
        let canonical = temp_dir.path().canonicalize().unwrap();
        assert_eq!(cfg.output_dir, canonical.join("out").join("sorted"));
    }

    #[cfg(unix)]
    #[test]
    fn test_initialize_resolves_output_dir_through_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real");
        fs::create_dir_all(&real).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut cfg =
            Config { root: link.clone(), output_dir: link.join("processed"), ..Config::default() };
        cfg.initialize().unwrap();

        let real = real.canonicalize().unwrap();
        assert_eq!(cfg.root, real);
        assert_eq!(cfg.output_dir, real.join("processed"));
        assert!(cfg.output_dir.starts_with(&cfg.root));
    }

    #[test]
    fn test_initialize_rejects_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config { root: temp_dir.path().join("missing"), ..Config::default() };
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_initialize_rejects_empty_suffix() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config {
            root: temp_dir.path().to_path_buf(),
            suffixes: vec![String::new()],
            ..Config::default()
        };
        assert!(cfg.initialize().is_err());

        cfg.suffixes.clear();
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_initialize_rejects_zero_threads() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg =
            Config { root: temp_dir.path().to_path_buf(), threads: Some(0), ..Config::default() };
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_matched_suffix_prefers_longest() {
        let cfg = Config {
            suffixes: vec![".js".to_string(), ".min.js".to_string()],
            ..Config::default()
        };
        assert_eq!(cfg.matched_suffix("app.min.js"), Some(".min.js"));
        assert_eq!(cfg.matched_suffix("app.js"), Some(".js"));
        assert_eq!(cfg.matched_suffix("app.ts"), None);
    }
}
