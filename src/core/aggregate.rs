// src/core/aggregate.rs
use once_cell::sync::OnceCell;

use crate::core::counts::StringCounts;
use crate::models::RawStats;

/// Derived statistics over an ordered collection of raw records.
///
/// Each base count is the sum of the corresponding raw field across all
/// records, computed on first read and cached for the lifetime of the view.
/// The cache tracks presence explicitly, so a genuinely zero sum is cached
/// like any other value. It is never invalidated: records added after the
/// first read do not change an already-cached sum.
#[derive(Debug, Default)]
pub struct AggregateStatsView {
    records: Vec<RawStats>,
    translated: OnceCell<i64>,
    suggested: OnceCell<i64>,
    fuzzy: OnceCell<i64>,
    total: OnceCell<i64>,
}

impl AggregateStatsView {
    #[must_use]
    pub const fn new(records: Vec<RawStats>) -> Self {
        Self {
            records,
            translated: OnceCell::new(),
            suggested: OnceCell::new(),
            fuzzy: OnceCell::new(),
            total: OnceCell::new(),
        }
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of one raw field across the collection.
    ///
    /// An empty collection sums to 0, and a record missing the field
    /// contributes 0, matching the single-record reading of absent fields.
    fn aggregate(&self, field: impl Fn(&RawStats) -> Option<i64>) -> i64 {
        self.records
            .iter()
            .fold(0_i64, |sum, record| {
                sum.saturating_add(field(record).unwrap_or(0))
            })
    }
}

impl StringCounts for AggregateStatsView {
    fn translated_strings(&self) -> i64 {
        *self
            .translated
            .get_or_init(|| self.aggregate(|r| r.approved_strings))
    }

    fn suggested_strings(&self) -> i64 {
        *self
            .suggested
            .get_or_init(|| self.aggregate(|r| r.translated_strings))
    }

    fn fuzzy_strings(&self) -> i64 {
        *self
            .fuzzy
            .get_or_init(|| self.aggregate(|r| r.fuzzy_strings))
    }

    fn total_strings(&self) -> i64 {
        *self
            .total
            .get_or_init(|| self.aggregate(|r| r.total_strings))
    }
}
