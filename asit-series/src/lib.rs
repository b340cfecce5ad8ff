//! Typed data model for the Arctic sea-ice thickness time series.
//!
//! This crate handles parsing the processed thickness CSV into typed
//! records and provides the freeze-season calendar (October through April)
//! that the chart's x-axis is built on.

pub mod record;
pub mod season;

pub use record::{
    consistency_warnings, parse_series, summarize, SeriesError, SeriesSummary, ThicknessRecord,
};
pub use season::SEASON_MONTHS;
