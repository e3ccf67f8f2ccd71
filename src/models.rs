// src/models.rs
pub mod raw_stats;

pub use raw_stats::RawStats;
