use log::trace;

use crate::{classifier::sort_key, types::SortKey};

struct Placed<S> {
    line: S,
    /// `None` for code lines
    key: Option<SortKey>,
}

/// Reorder the dependency lines of one file.
///
/// Lines are placed one at a time. A code line always goes to the end of what
/// has been placed so far. A dependency line goes in front of the first placed
/// line that is either code or sorts after it, so it is hoisted above any code
/// seen earlier and lands after dependency lines with an equal key.
///
/// The result is a permutation of the input: every line comes back exactly once.
pub fn reorder<I, S>(lines: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut placed: Vec<Placed<S>> = Vec::new();

    for line in lines {
        let key = sort_key(line.as_ref());

        let index = match &key {
            None => placed.len(),
            Some(curr) => placed
                .iter()
                .position(|existing| match &existing.key {
                    None => true,
                    Some(existing) => existing > curr,
                })
                .unwrap_or(placed.len()),
        };

        trace!("Placing line at {}/{}: {:?}", index, placed.len(), line.as_ref());
        placed.insert(index, Placed { line, key });
    }

    placed.into_iter().map(|p| p.line).collect()
}

/// Number of lines that classify as imports or requires.
pub fn count_dependency_lines<S: AsRef<str>>(lines: &[S]) -> usize {
    lines.iter().filter(|l| sort_key(l.as_ref()).is_some()).count()
}
