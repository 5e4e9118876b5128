//! Symmetric key-path comparison between two locale documents.

use std::collections::BTreeSet;

/// Result of comparing two sets of flattened key paths.
///
/// Both sides empty means the documents expose identical key trees.
/// `BTreeSet` keeps the failure output sorted and stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// Paths present in the baseline document but missing from the other.
    pub only_in_baseline: BTreeSet<String>,
    /// Paths present in the other document but missing from the baseline.
    pub only_in_other: BTreeSet<String>,
}

impl KeyDiff {
    /// What: Report whether the two documents matched.
    ///
    /// Output:
    /// - `true` when neither side has paths the other lacks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_in_baseline.is_empty() && self.only_in_other.is_empty()
    }
}

/// What: Compute the symmetric difference between two key-path lists.
///
/// Inputs:
/// - `baseline`: Flattened paths of the baseline document
/// - `other`: Flattened paths of the document under comparison
///
/// Output:
/// - `KeyDiff` with both one-sided differences; never fails
///
/// Details:
/// - The caller decides pass/fail by checking [`KeyDiff::is_empty`]; a
///   non-empty result names exactly which dotted paths are missing from
///   which side
#[must_use]
pub fn diff_keys(baseline: &[String], other: &[String]) -> KeyDiff {
    let baseline_set: BTreeSet<&str> = baseline.iter().map(String::as_str).collect();
    let other_set: BTreeSet<&str> = other.iter().map(String::as_str).collect();

    KeyDiff {
        only_in_baseline: baseline_set
            .difference(&other_set)
            .map(|p| (*p).to_string())
            .collect(),
        only_in_other: other_set
            .difference(&baseline_set)
            .map(|p| (*p).to_string())
            .collect(),
    }
}
