// src/core.rs
pub mod aggregate;
pub mod counts;
pub mod percent;
pub mod view;
