//! Defaults for the `sort` command.
//!
//! Sorted output goes to `./processed/<name>_sorted.txt`, where `<name>` is
//! the input file name with its matched suffix removed.

/// File name suffix matched when none is given
pub const DEFAULT_SUFFIX: &str = ".js";

/// Directory the sorted files are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "processed";

/// Appended to the input file name after its suffix is removed
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_sorted.txt";
