// src/core/view.rs
use crate::core::counts::StringCounts;
use crate::models::RawStats;

/// Derived statistics over a single raw record.
///
/// Constructed from whatever the data source returned, or `None` when it
/// returned nothing. No accessor errors; an absent record or field degrades
/// to a 0 count.
#[derive(Debug, Default)]
pub struct StatsView {
    data: Option<RawStats>,
}

impl StatsView {
    #[must_use]
    pub const fn new(data: Option<RawStats>) -> Self {
        Self { data }
    }

    fn field(&self, get: impl Fn(&RawStats) -> Option<i64>) -> i64 {
        self.data.as_ref().and_then(get).unwrap_or(0)
    }
}

impl From<RawStats> for StatsView {
    fn from(data: RawStats) -> Self {
        Self::new(Some(data))
    }
}

impl StringCounts for StatsView {
    fn translated_strings(&self) -> i64 {
        self.field(|d| d.approved_strings)
    }

    // The raw field is named "translated_strings" but counts unreviewed
    // suggestions. Observed upstream contract, kept as-is.
    fn suggested_strings(&self) -> i64 {
        self.field(|d| d.translated_strings)
    }

    fn fuzzy_strings(&self) -> i64 {
        self.field(|d| d.fuzzy_strings)
    }

    fn total_strings(&self) -> i64 {
        self.field(|d| d.total_strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RawStats {
        RawStats::new(Some(40), Some(10), Some(5), Some(100))
    }

    #[test]
    fn test_counts_from_record() {
        let stats = StatsView::from(sample_record());
        assert_eq!(stats.translated_strings(), 40);
        assert_eq!(stats.fuzzy_strings(), 10);
        assert_eq!(stats.suggested_strings(), 5);
        assert_eq!(stats.total_strings(), 100);
        assert_eq!(stats.missing_strings(), 45);
    }

    #[test]
    fn test_percentages_from_record() {
        let stats = StatsView::from(sample_record());
        assert_eq!(stats.approved_percent(), 40);
        assert_eq!(stats.translated_share(), 40);
        assert_eq!(stats.fuzzy_share(), 10);
        assert_eq!(stats.suggested_share(), 5);
        assert_eq!(stats.missing_share(), 45);
    }

    #[test]
    fn test_no_record_yields_zeros() {
        let stats = StatsView::new(None);
        assert_eq!(stats.translated_strings(), 0);
        assert_eq!(stats.suggested_strings(), 0);
        assert_eq!(stats.fuzzy_strings(), 0);
        assert_eq!(stats.total_strings(), 0);
        assert_eq!(stats.missing_strings(), 0);
        assert_eq!(stats.approved_percent(), 0);
        assert_eq!(stats.missing_share(), 0);
    }

    #[test]
    fn test_empty_record_yields_zeros() {
        let stats = StatsView::from(RawStats::default());
        assert_eq!(stats.translated_strings(), 0);
        assert_eq!(stats.suggested_strings(), 0);
        assert_eq!(stats.fuzzy_strings(), 0);
        assert_eq!(stats.total_strings(), 0);
        assert_eq!(stats.approved_percent(), 0);
        assert_eq!(stats.translated_share(), 0);
        assert_eq!(stats.fuzzy_share(), 0);
        assert_eq!(stats.suggested_share(), 0);
        assert_eq!(stats.missing_share(), 0);
    }

    #[test]
    fn test_approved_percent_floors() {
        let stats = StatsView::from(RawStats::new(Some(1), None, None, Some(3)));
        assert_eq!(stats.approved_percent(), 33);
    }

    #[test]
    fn test_suggested_maps_from_translated_field() {
        let record = RawStats::new(None, None, Some(12), Some(24));
        let stats = StatsView::from(record);
        assert_eq!(stats.suggested_strings(), 12);
        assert_eq!(stats.suggested_share(), 50);
        assert_eq!(stats.translated_strings(), 0);
    }
}
