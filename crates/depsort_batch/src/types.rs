use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Sorted {
        /// Where the sorted lines were written, None in check mode
        output: Option<PathBuf>,
        /// Whether reordering moved any line
        changed: bool,
        dependency_lines: usize,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed { .. })
    }

    pub fn is_changed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Sorted { changed: true, .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// One entry per matched file, ordered by path
    pub files: Vec<FileReport>,
    pub threads: usize,
    pub check: bool,
}

impl RunResult {
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.is_failed()).count()
    }

    pub fn changed(&self) -> usize {
        self.files.iter().filter(|f| f.is_changed()).count()
    }

    /// Whether the process should exit with a failure status
    pub fn should_fail(&self) -> bool {
        self.failed() > 0 || (self.check && self.changed() > 0)
    }
}
