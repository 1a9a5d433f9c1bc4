//! Source numbers embedded in file names.
//!
//! Files produced per source are named like `run3_source12.h5`. The number following `source` is
//! used to order such files, files without one are placed last.
use regex::Regex;

lazy_static! {
    static ref SOURCE: Regex = Regex::new(r"source([0-9]+)").unwrap();
}

/// Extract the number following the first `source` in `filename`.
///
/// Leading zeros are accepted. Numbers too large for `u64` saturate to `u64::MAX`.
///
/// ```
/// use h5util::source::source_number;
///
/// assert_eq!(source_number("obs_source42foo.h5"), Some(42));
/// assert_eq!(source_number("obs.h5"), None);
/// ```
#[must_use]
pub fn source_number(filename: &str) -> Option<u64> {
    SOURCE
        .captures(filename)
        .map(|c| c[1].parse::<u64>().unwrap_or(u64::MAX))
}

/// Sort key for `filename`: its source number, or `u64::MAX` if it has none.
#[must_use]
pub fn source_key(filename: &str) -> u64 {
    source_number(filename).unwrap_or(u64::MAX)
}

/// Sort names ascending by source number. The sort is stable, names without a source number keep
/// their relative order at the end.
pub fn sort_by_source<S>(names: &mut [S])
where
    S: AsRef<str>,
{
    names.sort_by_cached_key(|n| source_key(n.as_ref()));
}
