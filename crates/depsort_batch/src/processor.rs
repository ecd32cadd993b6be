use anyhow::{Context, Result, anyhow};
use dashmap::DashMap;
use depsort_core::{count_dependency_lines, init_patterns, reorder};
use log::{debug, info, trace, warn};
use rayon::{ThreadPoolBuilder, prelude::*};
use std::{
    fs,
    path::{Path, PathBuf},
    thread,
};

use crate::{
    collector::collect_files,
    config::Config,
    output::{output_path_for, write_lines},
    types::{FileOutcome, FileReport, RunResult},
};

pub fn run_sort(mut cfg: Config) -> Result<RunResult> {
    info!("Starting dependency sort");

    cfg.initialize()?;
    init_patterns()?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(cfg.threads.unwrap_or(0))
        .build()
        .context("Failed to build worker pool")?;
    let threads = pool.current_num_threads();

    let files = collect_files(&cfg)?;
    if files.is_empty() {
        warn!("No files matching {:?} found under {}", cfg.suffixes, cfg.root.display());
        return Ok(RunResult { files: Vec::new(), threads, check: cfg.check });
    }
    info!("Processing {} files on {} threads", files.len(), threads);

    let reports = pool.install(|| {
        let outputs = if cfg.check { None } else { Some(claim_outputs(&cfg, &files)) };

        files
            .par_iter()
            .enumerate()
            .map(|(idx, file)| {
                debug!("Thread {:?} processing: {}", thread::current().id(), file.display());

                let result = match &outputs {
                    None => sort_file(file, None),
                    Some(outputs) => match &outputs[idx] {
                        Ok(out) => sort_file(file, Some(out)),
                        Err(e) => Err(anyhow!("{:#}", e)),
                    },
                };

                let outcome = match result {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("Could not process {}: {:#}", file.display(), e);
                        FileOutcome::Failed { error: format!("{:#}", e) }
                    }
                };

                let rel = file.strip_prefix(&cfg.root).unwrap_or(file).to_path_buf();
                FileReport { file: rel, outcome }
            })
            .collect::<Vec<_>>()
    });

    let result = RunResult { files: reports, threads, check: cfg.check };
    info!(
        "Dependency sort complete. {} files, {} changed, {} failed",
        result.files.len(),
        result.changed(),
        result.failed()
    );
    Ok(result)
}

/// Work out every file's output path, failing files whose path is taken.
///
/// When several inputs map to the same output the one with the smallest path
/// keeps it, so the result does not depend on scheduling.
fn claim_outputs(cfg: &Config, files: &[PathBuf]) -> Vec<Result<PathBuf>> {
    let claims: DashMap<PathBuf, &Path> = DashMap::new();

    let planned: Vec<Result<PathBuf>> = files
        .par_iter()
        .map(|file| -> Result<PathBuf> {
            let out = output_path_for(cfg, file)?;
            claims
                .entry(out.clone())
                .and_modify(|owner| {
                    if file.as_path() < *owner {
                        *owner = file.as_path();
                    }
                })
                .or_insert(file.as_path());
            Ok(out)
        })
        .collect();

    planned
        .into_iter()
        .zip(files)
        .map(|(planned, file)| -> Result<PathBuf> {
            let out = planned?;
            match claims.get(&out) {
                Some(owner) if *owner != file.as_path() => Err(anyhow!(
                    "Output {} is already written for {}",
                    out.display(),
                    owner.display()
                )),
                _ => Ok(out),
            }
        })
        .collect()
}

/// Reorder one file, writing the result to `output` unless it is None
fn sort_file(file: &Path, output: Option<&Path>) -> Result<FileOutcome> {
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let lines: Vec<&str> = src.lines().collect();

    let dependency_lines = count_dependency_lines(&lines);
    let sorted = reorder(lines.iter().copied());
    let changed = sorted != lines;
    trace!(
        "{}: {} lines, {} dependency lines, changed={}",
        file.display(),
        lines.len(),
        dependency_lines,
        changed
    );

    if let Some(out) = output {
        write_lines(out, &sorted)?;
        debug!("Wrote {}", out.display());
    }

    Ok(FileOutcome::Sorted { output: output.map(Path::to_path_buf), changed, dependency_lines })
}
