// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

pub use cli::{Args, StatsDocument, load_stats_file, run};
pub use core::aggregate::AggregateStatsView;
pub use core::counts::StringCounts;
pub use core::percent::{percent, share};
pub use core::view::StatsView;
pub use models::RawStats;
