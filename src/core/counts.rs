// src/core/counts.rs
use crate::core::percent::{percent, share};

/// A source of raw string counts, either for a single entity or for an
/// aggregate of entities.
///
/// Implementors supply the four base counts; every derived metric is a
/// provided method so both count sources share the exact same formulas.
pub trait StringCounts {
    /// Strings with an approved translation.
    fn translated_strings(&self) -> i64;

    /// Strings with a suggested, not yet reviewed translation.
    fn suggested_strings(&self) -> i64;

    /// Strings with a fuzzy translation.
    fn fuzzy_strings(&self) -> i64;

    /// All strings for the entity, regardless of status.
    fn total_strings(&self) -> i64;

    /// Strings with no translation at all.
    ///
    /// Goes negative when the raw counts are inconsistent
    /// (translated + fuzzy + suggested > total); not clamped.
    fn missing_strings(&self) -> i64 {
        self.total_strings()
            - self.translated_strings()
            - self.fuzzy_strings()
            - self.suggested_strings()
    }

    /// Floored percentage of approved strings, 0 when either count is 0.
    ///
    /// The shares round; this floors. The asymmetry is deliberate.
    fn approved_percent(&self) -> i64 {
        percent(self.translated_strings(), self.total_strings())
    }

    /// Rounded share of translated strings against the total.
    fn translated_share(&self) -> i64 {
        share(self.translated_strings(), self.total_strings())
    }

    /// Rounded share of fuzzy strings against the total.
    fn fuzzy_share(&self) -> i64 {
        share(self.fuzzy_strings(), self.total_strings())
    }

    /// Rounded share of suggested strings against the total.
    fn suggested_share(&self) -> i64 {
        share(self.suggested_strings(), self.total_strings())
    }

    /// Rounded share of missing strings, 0 when there is nothing to measure.
    fn missing_share(&self) -> i64 {
        if self.total_strings() == 0 {
            return 0;
        }
        share(self.missing_strings(), self.total_strings())
    }
}
