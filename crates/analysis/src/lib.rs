//! Anniversary-effect analysis: does a metric shift around a recurring
//! calendar date?
//!
//! ```mermaid
//! graph LR
//!     A["[Observation]"] -->|"annotate()"| B["AnnotatedSeries"]
//!     B -->|"partition()"| C["Partition"]
//!     C --> D["bootstrap()"]
//!     C --> E["permutation_test()"]
//!     B --> F["distance_regression()"]
//!     D & E & F --> G["AnalysisReport"]
//! ```
//!
//! [`analyze`] runs the whole pipeline, with the bootstrap, the permutation
//! test, and the regression executing concurrently. Results report
//! association between calendar proximity and the metric only.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `pipeline` | [`analyze`] and the [`Analysis`] it returns |
//! | `regression` | Value vs distance correlations and OLS fit |
//! | `report` | Serializable report and JSON rendering |
//! | `seasonal` | Year × month-day pivot table |
//! | `config` | [`AnalysisConfig`] builder |

mod config;
mod error;
mod pipeline;
mod regression;
mod report;
mod seasonal;

pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use pipeline::{Analysis, analyze};
pub use regression::{RegressionResult, TERMS, distance_regression};
pub use report::{
    AnalysisReport, BootstrapSummary, ConfigSummary, PartitionSummary, PermutationSummary, to_json,
};
pub use seasonal::{SeasonalTable, seasonal_table};
