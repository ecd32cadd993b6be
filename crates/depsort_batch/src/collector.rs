use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::{collections::HashSet, path::PathBuf};

use crate::{config::Config, output::output_path_for};

/// Collect the files under `cfg.root` whose names end with a configured suffix.
///
/// Only the top level of the root is scanned unless `cfg.recursive` is set.
/// Earlier results are never picked up as input: an output directory below
/// the root is skipped as a whole, and when the output directory is the root
/// or one of its ancestors only the files another input writes to are dropped.
pub fn collect_files(cfg: &Config) -> Result<Vec<PathBuf>> {
    debug!("Collecting files from root: {}", cfg.root.display());

    let output_contains_root = cfg.root.starts_with(&cfg.output_dir);
    let output_dir = (!output_contains_root).then(|| cfg.output_dir.clone());
    let max_depth = if cfg.recursive { None } else { Some(1) };
    let walker = WalkBuilder::new(&cfg.root)
        .hidden(false)
        .ignore(true)
        .git_ignore(true)
        .max_depth(max_depth)
        .filter_entry(move |dent| {
            output_dir.as_ref().is_none_or(|out| !dent.path().starts_with(out))
        })
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            trace!("Skipping file with non UTF-8 name: {}", p.display());
            continue;
        };

        if cfg.matched_suffix(name).is_some() {
            trace!("Matched file: {}", p.display());
            files.push(p.to_path_buf());
        } else {
            trace!("Skipping file without matching suffix: {}", p.display());
        }
    }

    files.sort();
    if output_contains_root {
        files = drop_previous_outputs(cfg, files);
    }
    debug!("Collected {} files", files.len());
    Ok(files)
}

/// Drop files that another collected file would be written to
fn drop_previous_outputs(cfg: &Config, files: Vec<PathBuf>) -> Vec<PathBuf> {
    let outputs: HashSet<PathBuf> = files
        .iter()
        .filter_map(|f| output_path_for(cfg, f).ok().filter(|out| out != f))
        .collect();

    files
        .into_iter()
        .filter(|f| {
            let previous = outputs.contains(f);
            if previous {
                debug!("Skipping earlier output: {}", f.display());
            }
            !previous
        })
        .collect()
}
