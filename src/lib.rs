//! Air quality monitoring service.
//!
//! Turns a current AQI, a multi-day forecast and an hourly pollutant series
//! into a severity category and an ordered list of threshold alerts.

pub mod alert;
pub mod analysis;
pub mod breakpoints;
pub mod config;
pub mod dashboard;
pub mod ingest;
pub mod logging;
pub mod model;

pub use alert::evaluate;
pub use analysis::category::categorize;
