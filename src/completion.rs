//! Tab completion by common-prefix expansion

/// Expand `prefix` against candidate command names.
///
/// Returns the suffix shared by every candidate starting with `prefix`
/// (byte-exact, case-sensitive), or `None` when nothing is typed beyond the
/// common prefix. Candidates are expected to be ASCII; no disambiguation
/// list is produced on ties.
pub fn expand<'a, I>(prefix: &str, candidates: I) -> Option<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    let mut matches = candidates.filter(|c| c.starts_with(prefix));

    let first = matches.next()?;
    let mut common = first.len();
    for other in matches {
        common = common.min(mismatch(first, other));
    }

    if common > prefix.len() {
        Some(&first[prefix.len()..common])
    } else {
        None
    }
}

/// Index of the first differing byte.
fn mismatch(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .position(|(x, y)| x != y)
        .unwrap_or(a.len().min(b.len()))
}
