//! Pairwise identical/similar classification.
//!
//! # Overview
//!
//! Every file of set A is compared with every file of set B, A outer and B
//! inner, both in listing order. That iteration order is the output order.
//!
//! 1. **Identity pass**: a pair is identical when digest and size match.
//!    Each combination is tested on its own, so one file can be identical
//!    to several files on the other side.
//! 2. **Similarity pass**: every pair not recorded by the identity pass gets
//!    a histogram overlap ratio and is kept when `ratio >= threshold`.
//!
//! The ratio is `100 * overlap / max(size_a, size_b)` where `overlap` is the
//! size of the byte-value multiset intersection. It ignores byte order: two
//! permutations of the same bytes score 100.

use std::collections::HashSet;

use super::{FileRecord, PairResult};

/// Accepted pairs, in A-outer / B-inner order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    /// Pairs with equal digest and size
    pub identical: Vec<PairResult>,
    /// Non-identical pairs whose ratio meets the threshold
    pub similar: Vec<PairResult>,
}

impl Classification {
    /// Iterate over all accepted pairs, identical first.
    pub fn pairs(&self) -> impl Iterator<Item = &PairResult> {
        self.identical.iter().chain(self.similar.iter())
    }

    /// Total number of accepted pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identical.len() + self.similar.len()
    }

    /// Whether no pair was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identical.is_empty() && self.similar.is_empty()
    }
}

/// Size of the byte-value multiset intersection of two files.
#[must_use]
pub fn overlap(a: &FileRecord, b: &FileRecord) -> u64 {
    a.histogram
        .iter()
        .zip(b.histogram.iter())
        .map(|(&x, &y)| x.min(y))
        .sum()
}

/// Overlap ratio in percent, `0.0` when both files are empty.
#[must_use]
pub fn ratio(a: &FileRecord, b: &FileRecord) -> f64 {
    let denom = a.size.max(b.size);
    if denom == 0 {
        return 0.0;
    }
    overlap(a, b) as f64 / denom as f64 * 100.0
}

/// Classify every cross pair of `set_a` x `set_b`.
///
/// `threshold` is not validated. A negative value accepts every pair, a
/// value above 100 or NaN accepts none.
#[must_use]
pub fn classify(set_a: &[FileRecord], set_b: &[FileRecord], threshold: f64) -> Classification {
    let mut identical = Vec::new();
    let mut excluded: HashSet<(usize, usize)> = HashSet::new();

    for (i, a) in set_a.iter().enumerate() {
        for (j, b) in set_b.iter().enumerate() {
            if a.is_identical_to(b) {
                identical.push(PairResult::Identical {
                    name_a: a.name.clone(),
                    name_b: b.name.clone(),
                });
                excluded.insert((i, j));
            }
        }
    }

    let mut similar = Vec::new();
    for (i, a) in set_a.iter().enumerate() {
        for (j, b) in set_b.iter().enumerate() {
            if excluded.contains(&(i, j)) {
                continue;
            }
            let r = ratio(a, b);
            if r >= threshold {
                log::trace!("Similar: {} ~ {} ({:.4})", a.name, b.name, r);
                similar.push(PairResult::Similar {
                    name_a: a.name.clone(),
                    name_b: b.name.clone(),
                    ratio: r,
                });
            }
        }
    }

    log::debug!(
        "Classified {} pairs: {} identical, {} similar (threshold {})",
        set_a.len() * set_b.len(),
        identical.len(),
        similar.len(),
        threshold
    );

    Classification { identical, similar }
}

/// Render a ratio for the text report.
///
/// Whole numbers print bare (`100`, `0`). Anything else is rounded to two
/// decimals and printed in shortest form (`66.67`, `12.5`); a value that
/// only becomes whole after rounding keeps one decimal (`100.0`).
///
/// Rounding works on the exact binary value, so a true tie goes to the even
/// digit (`3.125` prints `3.12`).
#[must_use]
pub fn format_ratio(ratio: f64) -> String {
    if ratio.fract() == 0.0 {
        return format!("{ratio:.0}");
    }

    let rounded: f64 = format!("{ratio:.2}").parse().unwrap_or(ratio);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}
