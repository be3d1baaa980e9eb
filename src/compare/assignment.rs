//! Used-set assignment and unmatched file collection.
//!
//! A file is "used" when it appears on its side of any accepted pair,
//! identical or similar. Everything else is unmatched and reported once,
//! in listing order.

use std::collections::HashSet;

use super::Classification;

/// Files that matched nothing on the other side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Unmatched names from directory A, in listing order
    pub only_a: Vec<String>,
    /// Unmatched names from directory B, in listing order
    pub only_b: Vec<String>,
}

impl Assignment {
    /// Total number of unmatched files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.only_a.len() + self.only_b.len()
    }

    /// Whether every file matched something.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty()
    }
}

/// Compute the unmatched files of both sides.
#[must_use]
pub fn assign(classification: &Classification, names_a: &[String], names_b: &[String]) -> Assignment {
    let mut used_a: HashSet<&str> = HashSet::new();
    let mut used_b: HashSet<&str> = HashSet::new();

    for pair in classification.pairs() {
        used_a.insert(pair.name_a());
        used_b.insert(pair.name_b());
    }

    let only_a: Vec<String> = names_a
        .iter()
        .filter(|name| !used_a.contains(name.as_str()))
        .cloned()
        .collect();
    let only_b: Vec<String> = names_b
        .iter()
        .filter(|name| !used_b.contains(name.as_str()))
        .cloned()
        .collect();

    log::debug!(
        "Assignment: {}/{} used in A, {}/{} used in B",
        used_a.len(),
        names_a.len(),
        used_b.len(),
        names_b.len()
    );

    Assignment { only_a, only_b }
}
