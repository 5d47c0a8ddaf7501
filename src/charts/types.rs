//! Chart descriptions produced by the builders and consumed by the renderers.

use crate::models::CountryValue;

/// Plain RGB triple; converted to a Plotters color at draw time.
pub type Rgb = (u8, u8, u8);

pub const BAR_PURPLE: Rgb = (0x67, 0x5b, 0xba);
pub const BAR_BLUE: Rgb = (0x57, 0x93, 0xf3);
pub const AXIS_RED: Rgb = (0xd1, 0x4a, 0x61);

/// Single-series bar chart over named categories.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub series_name: String,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: Rgb,
}

/// Bars on the left axis, a line on an independent right axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisChart {
    pub title: String,
    pub categories: Vec<String>,
    pub bar_name: String,
    /// `None` where the bar series has no entry for the category.
    pub bar_values: Vec<Option<f64>>,
    pub bar_color: Rgb,
    pub line_name: String,
    pub line_values: Vec<Option<f64>>,
    pub line_color: Rgb,
    /// Upper bound of the right axis.
    pub line_axis_max: f64,
}

/// Regions colored on a continuous scale between `min` and `max`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethChart {
    pub title: String,
    pub series_name: String,
    pub regions: Vec<CountryValue>,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(BarChart),
    DualAxis(DualAxisChart),
    Choropleth(ChoroplethChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Bar(c) => &c.title,
            Chart::DualAxis(c) => &c.title,
            Chart::Choropleth(c) => &c.title,
        }
    }

    /// Short machine name, used for file names.
    pub fn kind(&self) -> &'static str {
        match self {
            Chart::Bar(_) => "bar",
            Chart::DualAxis(_) => "dual_axis",
            Chart::Choropleth(_) => "map",
        }
    }
}
