//! Descriptive statistics over `name gender count` records.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod stats;

pub use data::model::{NameDataset, Record};
pub use error::StatsError;
pub use stats::NameStatistics;
