//! # anniv-calendar
//!
//! Circular date arithmetic around a year-agnostic anniversary.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"MM-DD\""] -->|"parse()"| B["Anniversary"]
//!     B -->|".occurrence(year)"| C["NaiveDate"]
//!     B -->|".signed_distance(date)"| D["i32 in -183..=183"]
//!     B -->|".distance(date, mode)"| E["u32"]
//!     B -->|".doy()"| F["Doy (1..=366)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use anniv_calendar::{Anniversary, DistanceMode};
//! use chrono::NaiveDate;
//!
//! let anniv: Anniversary = "01-01".parse().unwrap();
//! let dec31 = NaiveDate::from_ymd_opt(2019, 12, 31).unwrap();
//! assert_eq!(anniv.signed_distance(dec31).unwrap(), -1);
//! assert_eq!(anniv.distance(dec31, DistanceMode::Calendar).unwrap(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `anniversary` | Anniversary reference, distance modes |
//! | `doy` | Day-of-year newtype over the 366-day reference year |
//! | `error` | Error types |

mod anniversary;
mod doy;
mod error;

pub use anniversary::{Anniversary, DistanceMode, HALF_YEAR};
pub use doy::{Doy, REFERENCE_YEAR_DAYS};
pub use error::CalendarError;
