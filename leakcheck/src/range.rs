/// Outcome of a breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupResult {
    /// Whether the password's hash appeared in the range response.
    pub found: bool,
    /// How many times the password was seen in breaches. Zero when not found.
    pub occurrences: u64,
}

impl LookupResult {
    /// The password did not appear under its prefix.
    pub const NOT_FOUND: Self = Self { found: false, occurrences: 0 };
}

/// Scans a range response body for the local hash suffix.
///
/// The body is line-oriented, one `SUFFIX:COUNT` entry per line. Suffixes are
/// compared ASCII-case-insensitively. Malformed lines (no colon, or a count
/// that does not parse as a non-negative integer) are skipped rather than
/// treated as fatal, since the corpus is remote and not under our control.
pub fn scan_range(body: &str, suffix: &str) -> LookupResult {
    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if !candidate.trim().eq_ignore_ascii_case(suffix) {
            continue;
        }
        match count.trim().parse::<u64>() {
            Ok(occurrences) => return LookupResult { found: true, occurrences },
            Err(_) => continue,
        }
    }

    LookupResult::NOT_FOUND
}
