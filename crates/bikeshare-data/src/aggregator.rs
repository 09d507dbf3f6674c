//! Column aggregations over trip rows.
//!
//! Tie-breaking is explicit: [`mode`] picks the smallest of the equally
//! frequent values, and [`value_counts`] orders by count descending, then by
//! value ascending.

use std::collections::BTreeMap;

// ── ValueCount ────────────────────────────────────────────────────────────────

/// How often one distinct value occurs in a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Occurrence count for each distinct value, ordered by value.
fn tally<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value, or `None` for an empty column.
///
/// When several values share the highest count the smallest one wins.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    // BTreeMap iterates in ascending order, so a strict `>` keeps the
    // smallest value among ties.
    for (value, count) in tally(values) {
        let better = best.as_ref().map_or(true, |(_, best_count)| count > *best_count);
        if better {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Count of every distinct value, most frequent first.
pub fn value_counts<T, I>(values: I) -> Vec<ValueCount<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: Vec<ValueCount<T>> = tally(values)
        .into_iter()
        .map(|(value, count)| ValueCount { value, count })
        .collect();
    // Stable sort keeps ascending value order within equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

// ── NumericSummary ────────────────────────────────────────────────────────────

/// Count, sum, extremes and mean of a numeric column.
///
/// Non-finite inputs are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericSummary {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut summary = Self::default();
        for v in values {
            summary.add(v);
        }
        summary
    }

    pub fn add(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Arithmetic mean, `None` when no values were added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
