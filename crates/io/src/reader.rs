//! High-level Parquet observation reader.

use std::path::Path;

use anniv_series::Observation;
use arrow::array::BooleanArray;
use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_read;

/// Configuration for reading observations from Parquet.
///
/// The [`Default`] implementation expects `date` and `views` columns and
/// keeps every row.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Column holding the observation date.
    date_column: String,
    /// Column holding the measured value.
    value_column: String,
    /// Column holding the article title, used only with `article`.
    article_column: String,
    /// Keep only rows for this article.
    article: Option<String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            value_column: "views".into(),
            article_column: "article".into(),
            article: None,
        }
    }
}

impl ReaderConfig {
    /// Set the date column name.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the value column name.
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    /// Set the article column name.
    pub fn with_article_column(mut self, name: impl Into<String>) -> Self {
        self.article_column = name.into();
        self
    }

    /// Keep only rows whose article matches `title`.
    ///
    /// Spaces in `title` are replaced by underscores before matching.
    pub fn with_article(mut self, title: Option<impl Into<String>>) -> Self {
        self.article = title.map(|t| t.into().replace(' ', "_"));
        self
    }

    /// Returns the date column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the value column name.
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Returns the article column name.
    pub fn article_column(&self) -> &str {
        &self.article_column
    }

    /// Returns the normalised article filter, if any.
    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }
}

/// Read daily observations from a Parquet file.
///
/// Rows are returned sorted by date (ties keep file order).
///
/// # Errors
///
/// - [`IoError::FileNotFound`] / [`IoError::Parquet`] for unreadable files.
/// - [`IoError::MissingColumn`] if a configured column is absent.
/// - [`IoError::InvalidColumn`] if a column cannot be read as dates or
///   numbers.
/// - [`IoError::MissingField`] for a null date or value in a kept row.
/// - [`IoError::Validation`] if no rows remain.
pub fn read_observations(path: &Path, config: &ReaderConfig) -> Result<Vec<Observation>, IoError> {
    info!(path = %path.display(), "reading observations");
    let batches = parquet_read::read_batches(path)?;

    let mut observations = Vec::new();
    let mut row_offset = 0;
    for batch in &batches {
        let keep: Option<Vec<bool>> = match config.article() {
            Some(wanted) => {
                let col = parquet_read::column(batch, config.article_column(), path)?;
                let titles = parquet_read::string_values(col, config.article_column())?;
                Some(
                    titles
                        .iter()
                        .map(|t| t.as_deref() == Some(wanted))
                        .collect(),
                )
            }
            None => None,
        };

        let date_col = parquet_read::column(batch, config.date_column(), path)?;
        let value_col = parquet_read::column(batch, config.value_column(), path)?;

        match keep {
            // Only kept rows must be complete; other articles may have gaps.
            Some(mask) => {
                let predicate = BooleanArray::from(mask.clone());
                let filtered_dates = arrow::compute::filter(date_col, &predicate)?;
                let filtered_values = arrow::compute::filter(value_col, &predicate)?;
                let rows: Vec<usize> = mask
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &k)| k.then_some(row_offset + i))
                    .collect();
                let dates = parquet_read::date_values(&filtered_dates, config.date_column(), 0)
                    .map_err(|e| remap_row(e, &rows))?;
                let values = parquet_read::float_values(&filtered_values, config.value_column(), 0)
                    .map_err(|e| remap_row(e, &rows))?;
                observations.extend(
                    dates
                        .into_iter()
                        .zip(values)
                        .map(|(d, v)| Observation::new(d, v)),
                );
            }
            None => {
                let dates = parquet_read::date_values(date_col, config.date_column(), row_offset)?;
                let values =
                    parquet_read::float_values(value_col, config.value_column(), row_offset)?;
                observations.extend(
                    dates
                        .into_iter()
                        .zip(values)
                        .map(|(d, v)| Observation::new(d, v)),
                );
            }
        }
        row_offset += batch.num_rows();
    }

    if observations.is_empty() {
        let details = match config.article() {
            Some(a) => format!("no rows for article '{a}' in {}", path.display()),
            None => format!("no rows in {}", path.display()),
        };
        return Err(IoError::Validation { count: 1, details });
    }

    observations.sort_by_key(Observation::date);
    debug!(
        rows = row_offset,
        kept = observations.len(),
        first = %observations[0].date(),
        last = %observations[observations.len() - 1].date(),
        "observations loaded"
    );
    Ok(observations)
}

/// Maps a row number in a filtered batch back to its file row.
fn remap_row(err: IoError, rows: &[usize]) -> IoError {
    match err {
        IoError::MissingField { field, row } => IoError::MissingField {
            field,
            row: rows.get(row).copied().unwrap_or(row),
        },
        other => other,
    }
}
