//! # anniv-io
//!
//! Read and write daily observation series as Parquet. Bridges columnar
//! files into the fixed-schema [`anniv_series::Observation`] record.
//!
//! Input files need a date column (Date32, Date64, Timestamp or
//! `YYYY-MM-DD` text) and a numeric value column; names are configurable
//! and an optional article column selects one series from a multi-article
//! file. Output files always carry `date` (Date32) and `views` (Float64).

mod error;
mod parquet_read;
mod parquet_write;
mod reader;
mod writer;

pub use error::IoError;
pub use parquet_write::{DATE_COLUMN, VALUE_COLUMN};
pub use reader::{ReaderConfig, read_observations};
pub use writer::{Compression, WriterConfig, write_observations};
