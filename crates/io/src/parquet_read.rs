//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray, RecordBatch};
use arrow::compute::{CastOptions, cast_with_options};
use arrow::datatypes::{DataType, Date32Type, Float64Type};
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok(batches)
}

/// Looks up a column by name.
pub(crate) fn column<'a>(
    batch: &'a RecordBatch,
    name: &str,
    path: &Path,
) -> Result<&'a ArrayRef, IoError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Casts `array` to `to`, failing on values that do not convert.
fn cast_strict(array: &ArrayRef, to: &DataType, name: &str) -> Result<ArrayRef, IoError> {
    let options = CastOptions {
        safe: false,
        ..Default::default()
    };
    cast_with_options(array, to, &options).map_err(|e| IoError::InvalidColumn {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Extracts dates from a Date32, Date64, Timestamp or `YYYY-MM-DD` string
/// column.
///
/// `row_offset` is the file row of the batch's first row, used in
/// [`IoError::MissingField`].
pub(crate) fn date_values(
    array: &ArrayRef,
    name: &str,
    row_offset: usize,
) -> Result<Vec<NaiveDate>, IoError> {
    let cast = cast_strict(array, &DataType::Date32, name)?;
    let dates = cast.as_primitive::<Date32Type>();
    (0..dates.len())
        .map(|i| {
            if dates.is_null(i) {
                return Err(IoError::MissingField {
                    field: name.to_string(),
                    row: row_offset + i,
                });
            }
            dates.value_as_date(i).ok_or_else(|| IoError::InvalidColumn {
                name: name.to_string(),
                reason: format!("date out of range at row {}", row_offset + i),
            })
        })
        .collect()
}

/// Extracts values from any numeric column as `f64`.
pub(crate) fn float_values(
    array: &ArrayRef,
    name: &str,
    row_offset: usize,
) -> Result<Vec<f64>, IoError> {
    let cast = cast_strict(array, &DataType::Float64, name)?;
    let values = cast.as_primitive::<Float64Type>();
    (0..values.len())
        .map(|i| {
            if values.is_null(i) {
                Err(IoError::MissingField {
                    field: name.to_string(),
                    row: row_offset + i,
                })
            } else {
                Ok(values.value(i))
            }
        })
        .collect()
}

/// Extracts a string column; nulls become `None`.
pub(crate) fn string_values(array: &ArrayRef, name: &str) -> Result<Vec<Option<String>>, IoError> {
    let cast = cast_strict(array, &DataType::Utf8, name)?;
    Ok(cast
        .as_string::<i32>()
        .iter()
        .map(|s| s.map(str::to_string))
        .collect())
}
