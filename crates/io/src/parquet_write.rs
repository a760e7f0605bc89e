//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use anniv_series::Observation;
use arrow::array::{ArrayRef, Date32Array, Float64Array, RecordBatch};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// Column name for dates in written files.
pub const DATE_COLUMN: &str = "date";

/// Column name for values in written files.
pub const VALUE_COLUMN: &str = "views";

/// Builds the Arrow schema for observation output: `date` (Date32) and
/// `views` (Float64), both non-null.
pub(crate) fn build_schema() -> Schema {
    Schema::new(vec![
        Field::new(DATE_COLUMN, DataType::Date32, false),
        Field::new(VALUE_COLUMN, DataType::Float64, false),
    ])
}

/// Converts observations into an Arrow [`RecordBatch`] matching
/// [`build_schema`].
pub(crate) fn observations_to_record_batch(
    observations: &[Observation],
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let dates: ArrayRef = Arc::new(Date32Array::from(
        observations
            .iter()
            .map(|o| Date32Type::from_naive_date(o.date()))
            .collect::<Vec<i32>>(),
    ));
    let values: ArrayRef = Arc::new(Float64Array::from(
        observations.iter().map(Observation::value).collect::<Vec<f64>>(),
    ));

    RecordBatch::try_new(Arc::new(schema.clone()), vec![dates, values]).map_err(|e| {
        IoError::Parquet {
            reason: e.to_string(),
        }
    })
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}
