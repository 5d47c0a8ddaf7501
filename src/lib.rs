//! wbi_dash
//!
//! A small dashboard over three World Bank style indicator CSVs: GDP per person
//! growth, female literacy, and adolescent fertility. Pairs with the `wbi-dash` CLI,
//! which serves the dashboard or renders the same charts to files.
//!
//! ### Features
//! - Load wide "one row per country, one column per year" CSVs
//! - Assemble the per-year series behind each chart, aligned to a country allow-list
//! - Bar, dual-axis, and tile-grid choropleth charts as SVG or PNG
//! - Per-year summary statistics and tidy CSV/JSON export
//! - An axum web front end with a year selector
//!
//! ### Example
//! ```no_run
//! use wbi_dash::{AppContext, DataSources, charts};
//!
//! let ctx = AppContext::load(&DataSources::in_dir("data"))?;
//! let sel = ctx.select("2015")?;
//! for (i, chart) in charts::build_charts(&sel)?.iter().enumerate() {
//!     charts::save_chart(chart, format!("chart{i}.svg"), 900, 500)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assemble;
pub mod charts;
pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod page;
pub mod stats;
pub mod storage;
pub mod web;

pub use config::{DataSources, ServerConfig};
pub use context::AppContext;
pub use error::{ChartError, DataError, YearNotFound};
pub use models::{CountrySeries, CountryValue, TableLayout, YearSelection};
