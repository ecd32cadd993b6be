use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::debug;

use crate::types::{FileOutcome, RunResult};

/// Show `path` relative to the working directory when it lies below it
fn display_path(path: &Path) -> PathBuf {
    match env::current_dir() {
        Ok(cwd) => {
            path.strip_prefix(&cwd).map(Path::to_path_buf).unwrap_or_else(|_| path.into())
        }
        Err(_) => path.to_path_buf(),
    }
}

pub fn print_report<W: Write>(writer: &mut W, result: &RunResult) -> io::Result<()> {
    debug!("Printing report for {} files", result.files.len());

    if result.files.is_empty() {
        writeln!(writer, "{} No matching files found.", "●".bright_blue())?;
        writer.flush()?;
        return Ok(());
    }

    for report in &result.files {
        let file = report.file.display().to_string();
        match &report.outcome {
            FileOutcome::Failed { error } => {
                writeln!(
                    writer,
                    "{} {}: {}",
                    "✗".red().bold(),
                    file.bright_white().bold(),
                    error.red()
                )?;
            }
            FileOutcome::Sorted { changed: true, .. } if result.check => {
                writeln!(
                    writer,
                    "{} {} dependency lines out of order",
                    "⚠".yellow().bold(),
                    file.bright_white().bold()
                )?;
            }
            FileOutcome::Sorted { dependency_lines, .. } if result.check => {
                writeln!(
                    writer,
                    "{} {} ({} dependency lines)",
                    "✓".green().bold(),
                    file,
                    dependency_lines
                )?;
            }
            FileOutcome::Sorted { output, changed, dependency_lines } => {
                let target = output
                    .as_deref()
                    .map(|o| display_path(o).display().to_string())
                    .unwrap_or_default();
                let status = if *changed { "reordered".yellow() } else { "unchanged".dimmed() };
                writeln!(
                    writer,
                    "{} {} {} {} ({} dependency lines, {})",
                    "✓".green().bold(),
                    file,
                    "→".dimmed(),
                    target.blue(),
                    dependency_lines,
                    status
                )?;
            }
        }
    }

    print_summary(writer, result)?;

    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &RunResult) -> io::Result<()> {
    let failed = result.failed();
    let changed = result.changed();

    writeln!(writer, "\n{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files: {}", result.files.len().to_string().cyan())?;
    if result.check {
        writeln!(writer, "  Out of order: {}", changed.to_string().yellow().bold())?;
    } else {
        writeln!(writer, "  Reordered: {}", changed.to_string().yellow().bold())?;
    }
    if failed > 0 {
        writeln!(writer, "  Failed: {}", failed.to_string().red().bold())?;
    }

    Ok(())
}

pub fn print_json_report<W: Write>(writer: &mut W, result: &RunResult) -> io::Result<()> {
    debug!("Printing JSON report for {} files", result.files.len());
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
