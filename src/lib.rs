pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_source::{load_dataset, CsvRecordSource};
pub use adapters::storage::LocalStorage;
pub use config::AppConfig;
pub use core::{chart::ChartSettings, dashboard::Dashboard, dataset::Dataset};
pub use utils::error::{DashboardError, Result};
