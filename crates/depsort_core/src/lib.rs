//! Core line classification and reordering for depsort.
//!
//! Dependency lines of a JavaScript file are recognized by a per-line
//! textual match, not by parsing:
//! - `import ... from '...'` lines are imports
//! - `... = require('...')` lines are requires
//! - everything else is code
//!
//! [`reorder`] places imports before requires, absolute paths before relative
//! ones and then sorts by path, hoisting dependency lines above code.
//!
//! ```
//! let lines = vec!["const y = require('./y');", "import z from 'z';"];
//! let sorted = depsort_core::reorder(lines);
//! assert_eq!(sorted, vec!["import z from 'z';", "const y = require('./y');"]);
//! ```

mod classifier;
mod reorder;
mod types;

// Re-export public API
pub use classifier::{classify, init_patterns, path_key, sort_key};
pub use reorder::{count_dependency_lines, reorder};
pub use types::{Category, Group, PathKey, SortKey};
