//! Chart builders and renderers.
//!
//! Builders are pure: they turn assembled series into [`Chart`] descriptions.
//! Renderers draw a description with Plotters, either into an in-memory SVG string
//! (for embedding in a page) or into an `.svg`/`.png` file.
//!
//! - [`bar_gdp`]: GDP growth per allow-listed country
//! - [`dual_axis`]: GDP growth bars against a literacy line on its own axis
//! - [`choropleth`]: tile-grid choropleth of a per-country value

pub mod bar;
pub mod choropleth;
pub mod dual_axis;
pub mod text;
pub mod types;
pub mod util;

pub use types::{BarChart, Chart, ChoroplethChart, DualAxisChart};

use crate::error::ChartError;
use crate::models::{CountrySeries, YearSelection};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use serde::Serialize;
use std::path::Path;
use std::sync::Once;

use dual_axis::Layers;
use types::{BAR_BLUE, BAR_PURPLE};
use util::render_err;

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 500;

/// The `ab_glyph` text path only knows fonts registered by hand; the bundled
/// DejaVu Sans answers for "sans-serif".
static FONTS: Once = Once::new();

fn register_fonts() {
    FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Bar chart of GDP per person growth.
pub fn bar_gdp(series: &CountrySeries, year: &str) -> Result<Chart, ChartError> {
    bar::build(
        series,
        &format!("GDP per person, annual growth ({year})"),
        "Growth (%)",
        BAR_PURPLE,
    )
    .map(Chart::Bar)
}

/// Bars for `bars` on the left axis, a line for `line` on the right axis.
/// `labels` names the two axes (bar, line).
pub fn dual_axis(
    bars: &CountrySeries,
    line: &CountrySeries,
    labels: (&str, &str),
    title: &str,
) -> Result<Chart, ChartError> {
    dual_axis::build(
        bars,
        line,
        title,
        Layers {
            bar_name: labels.0,
            bar_color: BAR_BLUE,
            line_name: labels.1,
            line_color: BAR_PURPLE,
        },
    )
    .map(Chart::DualAxis)
}

/// Choropleth of `series`. An empty series renders a "no data" placeholder.
pub fn choropleth(series: &CountrySeries, series_name: &str, title: &str) -> Chart {
    Chart::Choropleth(choropleth::build(series, series_name, title))
}

/// The four charts of a results page, in display order.
pub fn build_charts(sel: &YearSelection) -> Result<Vec<Chart>, ChartError> {
    let year = sel.year.as_str();
    Ok(vec![
        bar_gdp(&sel.gdp_growth, year)?,
        dual_axis(
            &sel.gdp_growth,
            &sel.literacy_allow,
            ("GDP growth (%)", "Literacy rate (%)"),
            &format!("Literacy rate vs GDP growth ({year})"),
        )?,
        choropleth(
            &sel.literacy_map,
            "Literacy rate (%)",
            &format!("Female literacy rate, {year}"),
        ),
        choropleth(
            &sel.fertility_map,
            "Births per 1,000 women 15-19",
            &format!("Adolescent fertility rate, {year}"),
        ),
    ])
}

fn draw<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<(), ChartError> {
    match chart {
        Chart::Bar(c) => bar::draw(root, c),
        Chart::DualAxis(c) => dual_axis::draw(root, c),
        Chart::Choropleth(c) => choropleth::draw(root, c),
    }
}

/// Render to an SVG document held in memory.
pub fn render_svg(chart: &Chart, width: u32, height: u32) -> Result<String, ChartError> {
    register_fonts();
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width, height)).into_drawing_area();
        draw(&root, chart)?;
        root.present().map_err(render_err)?;
    }
    Ok(buf)
}

/// Render to a file: SVG for a `.svg` extension, PNG otherwise.
pub fn save_chart<P: AsRef<Path>>(
    chart: &Chart,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<(), ChartError> {
    register_fonts();
    let out_path = out_path.as_ref();
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw(&root, chart)?;
        root.present().map_err(render_err)?;
    } else {
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw(&root, chart)?;
        root.present().map_err(render_err)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedChart {
    pub kind: &'static str,
    pub title: String,
    pub svg: String,
}

/// All charts of one request, rendered in memory.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBundle {
    pub year: String,
    pub charts: Vec<RenderedChart>,
}

impl ChartBundle {
    pub fn render(sel: &YearSelection, width: u32, height: u32) -> Result<Self, ChartError> {
        let charts = build_charts(sel)?
            .iter()
            .map(|c| {
                Ok(RenderedChart {
                    kind: c.kind(),
                    title: c.title().to_string(),
                    svg: render_svg(c, width, height)?,
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;
        log::debug!("rendered {} charts for {}", charts.len(), sel.year);
        Ok(Self {
            year: sel.year.clone(),
            charts,
        })
    }

    /// Markup for embedding: one `<figure>` per chart.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"chart-bundle\">\n");
        for c in &self.charts {
            out.push_str(&format!(
                "<figure class=\"chart chart-{}\">\n{}\n</figure>\n",
                c.kind, c.svg
            ));
        }
        out.push_str("</div>\n");
        out
    }
}
