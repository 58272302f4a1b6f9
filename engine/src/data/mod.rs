pub mod csv_parser;
pub mod loader;
pub mod source;

pub use loader::{DatasetLoader, Datasets, LoadState};
pub use source::{CsvRecordSource, InMemoryRecordSource, RecordSource};
