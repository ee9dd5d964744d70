pub mod chart;
pub mod controls;
pub mod dashboard;
pub mod dataset;
pub mod stats;

pub use crate::domain::model::{Choice, ControlEvent, Rating, Record, SelectionState};
pub use crate::domain::ports::{RecordSource, Storage};
pub use crate::utils::error::Result;
