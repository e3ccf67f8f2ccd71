// src/models/raw_stats.rs
use serde::{Deserialize, Serialize};

/// Raw string counts as delivered by the upstream data source.
///
/// Field names are fixed by the external data contract and must not be
/// renamed, including `translated_strings`, which downstream surfaces as the
/// suggested count. Any field may be absent or null; both read as 0. Counts
/// are signed because the contract does not validate negative values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawStats {
    #[serde(default)]
    pub approved_strings: Option<i64>,
    #[serde(default)]
    pub fuzzy_strings: Option<i64>,
    #[serde(default)]
    pub translated_strings: Option<i64>,
    #[serde(default)]
    pub total_strings: Option<i64>,
}

impl RawStats {
    #[must_use]
    pub const fn new(
        approved_strings: Option<i64>,
        fuzzy_strings: Option<i64>,
        translated_strings: Option<i64>,
        total_strings: Option<i64>,
    ) -> Self {
        Self {
            approved_strings,
            fuzzy_strings,
            translated_strings,
            total_strings,
        }
    }
}
