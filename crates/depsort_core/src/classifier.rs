use anyhow::{Result, anyhow};
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Category, Group, PathKey, SortKey};

/// `import <anything> from`
const IMPORT_PATTERN: &str = r"\bimport\s.*\sfrom\b";
/// `= require`, with or without whitespace around the `=`
const REQUIRE_PATTERN: &str = r"=\s*require\b";
const SINGLE_QUOTED_PATTERN: &str = r"'(.*?)'";
const DOUBLE_QUOTED_PATTERN: &str = r#""(.*?)""#;

/// Characters that mark a module path as relative when they lead it
const RELATIVE_PREFIX: [char; 2] = ['/', '.'];

struct Patterns {
    import: Regex,
    require: Regex,
    single_quoted: Regex,
    double_quoted: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            import: Regex::new(IMPORT_PATTERN)?,
            require: Regex::new(REQUIRE_PATTERN)?,
            single_quoted: Regex::new(SINGLE_QUOTED_PATTERN)?,
            double_quoted: Regex::new(DOUBLE_QUOTED_PATTERN)?,
        })
    }
}

static PATTERNS: LazyLock<Result<Patterns, regex::Error>> = LazyLock::new(Patterns::compile);

fn patterns() -> Option<&'static Patterns> {
    PATTERNS.as_ref().ok()
}

/// Compile the classification patterns, failing loudly if any is malformed.
///
/// Call once at startup before classifying anything. After a failure every
/// line classifies as [`Category::Code`], so callers must not ignore the error.
pub fn init_patterns() -> Result<()> {
    match &*PATTERNS {
        Ok(_) => Ok(()),
        Err(e) => Err(anyhow!("Failed to compile line classification patterns: {}", e)),
    }
}

pub fn classify(line: &str) -> Category {
    let Some(p) = patterns() else {
        return Category::Code;
    };

    if p.import.is_match(line) {
        Category::Import
    } else if p.require.is_match(line) {
        Category::Require
    } else {
        Category::Code
    }
}

/// Extract the module path of a dependency line.
///
/// Looks at the first single-quoted substring, falling back to the first
/// double-quoted one. A line with neither yields an empty absolute path.
pub fn path_key(line: &str) -> PathKey {
    let Some(p) = patterns() else {
        return PathKey::default();
    };

    let quoted = p
        .single_quoted
        .captures(line)
        .or_else(|| p.double_quoted.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match quoted {
        Some(raw) => {
            let stripped = raw.trim_start_matches(RELATIVE_PREFIX);
            PathKey { path: stripped.to_string(), relative: stripped.len() != raw.len() }
        }
        None => {
            trace!("No quoted path on dependency line: {:?}", line);
            PathKey::default()
        }
    }
}

/// Ordering key for a line, or `None` if it is a code line.
pub fn sort_key(line: &str) -> Option<SortKey> {
    let group = match classify(line) {
        Category::Import => Group::Import,
        Category::Require => Group::Require,
        Category::Code => return None,
    };
    Some(SortKey { group, path: path_key(line) })
}
