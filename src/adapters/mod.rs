// Adapters layer: concrete implementations for external systems (storage, csv, http).

pub mod csv_source;
pub mod http;
pub mod storage;
