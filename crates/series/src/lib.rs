//! # anniv-series
//!
//! Observation records, calendar-distance annotation, and the split of a
//! series into an anniversary window and a baseline.
//!
//! ## Pipeline
//!
//! ```text
//!  [Observation] ──annotate()──▶ AnnotatedSeries ──partition()──▶ Partition
//!                  (anniversary)                   (WindowConfig)   ├ in_window
//!                                                                   └ baseline
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use anniv_calendar::Anniversary;
//! use anniv_series::{Observation, WindowConfig, annotate, partition};
//! use chrono::NaiveDate;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2020, 12, d).unwrap();
//! let obs: Vec<Observation> = (28..=31).map(|d| Observation::new(day(d), 1.0)).collect();
//! let series = annotate(&obs, Anniversary::new(12, 31).unwrap()).unwrap();
//! let split = partition(&series, &WindowConfig::new().with_radius(1)).unwrap();
//! assert_eq!(split.in_window().len(), 2);
//! assert_eq!(split.baseline().len(), 2);
//! ```

mod error;
mod observation;
mod window;

pub use error::{PartitionSide, SeriesError};
pub use observation::{AnnotatedObservation, AnnotatedSeries, Observation, annotate};
pub use window::{Partition, WindowConfig, partition};
