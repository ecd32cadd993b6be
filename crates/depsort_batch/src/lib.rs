//! Batch dependency sorting for directories of JavaScript files.
//!
//! Each matching file is read, its import and require lines reordered with
//! [`depsort_core::reorder`], and the result written to an output directory.
//! Files are processed in parallel on a rayon thread pool.
//!
//! # Examples
//!
//! ```no_run
//! use depsort_batch::{Config, run_sort};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { root: std::path::PathBuf::from("/path/to/project"), ..Config::default() };
//!
//! let result = run_sort(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! depsort_batch::print_report(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod constants;
mod output;
mod processor;
mod reporter;
mod types;

// Re-export public API
pub use collector::collect_files;
pub use config::Config;
pub use output::{output_path_for, write_lines};
pub use processor::run_sort;
pub use reporter::{print_json_report, print_report};
pub use types::{FileOutcome, FileReport, RunResult};
