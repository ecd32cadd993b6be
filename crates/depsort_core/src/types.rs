use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Import,
    Require,
    Code,
}

impl Category {
    pub fn is_dependency(self) -> bool {
        !matches!(self, Category::Code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathKey {
    /// Quoted module path with its leading run of `/` and `.` removed
    pub path: String,
    /// Whether the quoted path started with `/` or `.`
    pub relative: bool,
}

/// Group of a dependency line. Declaration order is sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Import,
    Require,
}

/// Ordering key of a dependency line: group, then relativity, then path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub group: Group,
    pub path: PathKey,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group
            .cmp(&other.group)
            .then(self.path.relative.cmp(&other.path.relative))
            .then_with(|| self.path.path.cmp(&other.path.path))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(group: Group, path: &str, relative: bool) -> SortKey {
        SortKey { group, path: PathKey { path: path.to_string(), relative } }
    }

    #[test]
    fn test_group_dominates_path() {
        assert!(key(Group::Import, "zzz", true) < key(Group::Require, "aaa", false));
    }

    #[test]
    fn test_absolute_before_relative() {
        assert!(key(Group::Import, "zzz", false) < key(Group::Import, "aaa", true));
    }

    #[test]
    fn test_path_breaks_ties() {
        assert!(key(Group::Require, "a", false) < key(Group::Require, "b", false));
        assert_eq!(
            key(Group::Require, "a", true).cmp(&key(Group::Require, "a", true)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_empty_path_sorts_first() {
        assert!(key(Group::Import, "", false) < key(Group::Import, "a", false));
    }

    #[test]
    fn test_code_is_not_a_dependency() {
        assert!(Category::Import.is_dependency());
        assert!(Category::Require.is_dependency());
        assert!(!Category::Code.is_dependency());
    }
}
