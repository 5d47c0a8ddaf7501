//! Choropleth rendered as a tile grid: one tile per country, colored by value.
//!
//! No world geometry ships with the crate, so regions are laid out in input
//! order on a near-square grid, with a continuous color bar on the right.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::truncate_to_width;
use super::types::ChoroplethChart;
use super::util::{contrast_text, format_value, render_err, scale_color};
use crate::error::ChartError;
use crate::models::CountrySeries;

const LEGEND_W: i32 = 110;
const PAD: i32 = 8;
const GAP: i32 = 2;
const COLOR_STEPS: i32 = 48;

/// Build a choropleth over every point of `series`; the color scale spans its min..max.
pub fn build(series: &CountrySeries, series_name: &str, title: &str) -> ChoroplethChart {
    let (min, max) = series
        .points
        .iter()
        .map(|p| p.value)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let (min, max) = if min.is_finite() { (min, max) } else { (0.0, 0.0) };
    ChoroplethChart {
        title: title.to_string(),
        series_name: series_name.to_string(),
        regions: series.points.clone(),
        min,
        max,
    }
}

/// Columns and rows for `n` tiles in a `w` x `h` area, keeping tiles roughly square.
pub fn grid_shape(n: usize, w: u32, h: u32) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let aspect = w.max(1) as f64 / h.max(1) as f64;
    let cols = ((n as f64 * aspect).sqrt().ceil() as usize).clamp(1, n);
    let rows = n.div_ceil(cols);
    (cols, rows)
}

pub(crate) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChoroplethChart,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(render_err)?;
    let area = root
        .titled(&chart.title, (FontFamily::SansSerif, 22))
        .map_err(render_err)?;
    let (w, h) = area.dim_in_pixel();
    let (map_area, legend_area) = area.split_horizontally((w as i32 - LEGEND_W).max(40));

    let centered = TextStyle::from((FontFamily::SansSerif, 16)).pos(Pos::new(HPos::Center, VPos::Center));
    if chart.regions.is_empty() {
        let (mw, _) = map_area.dim_in_pixel();
        map_area
            .draw(&Text::new("No data for this year", (mw as i32 / 2, h as i32 / 2), centered))
            .map_err(render_err)?;
        return Ok(());
    }

    let (mw, mh) = map_area.dim_in_pixel();
    let (cols, rows) = grid_shape(chart.regions.len(), mw, mh);
    let tile_w = ((mw as i32 - 2 * PAD) / cols as i32).max(1);
    let tile_h = ((mh as i32 - 2 * PAD) / rows as i32).max(1);
    let span = chart.max - chart.min;

    for (i, region) in chart.regions.iter().enumerate() {
        let x0 = PAD + (i % cols) as i32 * tile_w;
        let y0 = PAD + (i / cols) as i32 * tile_h;
        let t = if span > 0.0 {
            (region.value - chart.min) / span
        } else {
            1.0
        };
        let fill = scale_color(t);
        map_area
            .draw(&Rectangle::new(
                [(x0, y0), (x0 + tile_w - GAP, y0 + tile_h - GAP)],
                fill.filled(),
            ))
            .map_err(render_err)?;

        // label only when the tile is big enough to read
        if tile_w >= 28 && tile_h >= 14 {
            let font_px = 10;
            let label = truncate_to_width(&region.country, font_px, (tile_w - GAP - 4) as u32);
            let text_color = contrast_text(fill);
            let style = TextStyle::from((FontFamily::SansSerif, font_px))
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            map_area
                .draw(&Text::new(
                    label,
                    (x0 + (tile_w - GAP) / 2, y0 + (tile_h - GAP) / 2),
                    style,
                ))
                .map_err(render_err)?;
        }
    }

    draw_color_bar(&legend_area, chart)
}

/// Vertical color bar, max on top, with the series name above it.
fn draw_color_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    chart: &ChoroplethChart,
) -> Result<(), ChartError> {
    let (_, h) = area.dim_in_pixel();
    let font_px = 11;
    let top_left = TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Top));
    let mid_left = TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Left, VPos::Center));

    area.draw(&Text::new(
        truncate_to_width(&chart.series_name, font_px, (LEGEND_W - 2 * PAD) as u32),
        (PAD, PAD),
        top_left,
    ))
    .map_err(render_err)?;

    let bar_x0 = PAD;
    let bar_x1 = PAD + 16;
    let bar_top = PAD + 24;
    let bar_bottom = (h as i32 - 2 * PAD).max(bar_top + COLOR_STEPS);
    let step_h = (bar_bottom - bar_top) as f64 / COLOR_STEPS as f64;

    for s in 0..COLOR_STEPS {
        // s = 0 is the top (maximum) of the bar
        let t = 1.0 - (s as f64 + 0.5) / COLOR_STEPS as f64;
        let y0 = bar_top + (s as f64 * step_h).floor() as i32;
        let y1 = bar_top + ((s + 1) as f64 * step_h).ceil() as i32;
        area.draw(&Rectangle::new([(bar_x0, y0), (bar_x1, y1)], scale_color(t).filled()))
            .map_err(render_err)?;
    }
    area.draw(&Rectangle::new([(bar_x0, bar_top), (bar_x1, bar_bottom)], BLACK.stroke_width(1)))
        .map_err(render_err)?;

    for (value, y) in [(chart.max, bar_top), (chart.min, bar_bottom)] {
        area.draw(&Text::new(format_value(value), (bar_x1 + 6, y), mid_left.clone()))
            .map_err(render_err)?;
    }
    Ok(())
}
