//! Single-series bar chart over country categories.

use plotters::coord::Shift;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::truncate_to_width;
use super::types::{BarChart, Rgb};
use super::util::{label_area_px, render_err, rgb, round1, tick_label, value_range};
use crate::error::ChartError;
use crate::models::CountrySeries;

/// Build a bar chart with one bar per country; values are rounded to one decimal.
pub fn build(
    series: &CountrySeries,
    title: &str,
    series_name: &str,
    color: Rgb,
) -> Result<BarChart, ChartError> {
    if series.is_empty() {
        return Err(ChartError::Empty { chart: "bar chart" });
    }
    Ok(BarChart {
        title: title.to_string(),
        series_name: series_name.to_string(),
        categories: series.names().into_iter().map(String::from).collect(),
        values: series.values().into_iter().map(round1).collect(),
        color,
    })
}

pub(crate) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(render_err)?;

    let n = chart.categories.len() as i32;
    let (y_min, y_max) = value_range(chart.values.iter().copied(), true);
    let left_px = label_area_px(y_min, y_max, 10, 12);

    let (w, _) = root.dim_in_pixel();
    let slot_px = (w.saturating_sub(left_px + 40) / n.max(1) as u32).max(24);
    let labels: Vec<String> = chart
        .categories
        .iter()
        .map(|c| truncate_to_width(c, 11, slot_px - 4))
        .collect();

    let mut cc = ChartBuilder::on(root)
        .margin(16)
        .caption(&chart.title, (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)
        .map_err(render_err)?;

    let x_fmt = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    let y_fmt = |v: &f64| tick_label(*v);

    cc.configure_mesh()
        .disable_x_mesh()
        .x_labels(n as usize + 1)
        .y_labels(10)
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .y_desc(chart.series_name.as_str())
        .label_style((FontFamily::SansSerif, 11))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(render_err)?;

    let color = rgb(chart.color);
    cc.draw_series(chart.values.iter().enumerate().map(|(i, v)| {
        let i = i as i32;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
            color.filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))
    .map_err(render_err)?
    .label(chart.series_name.as_str())
    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], color.filled()));

    // value on top of (or below, for negatives) each bar
    cc.draw_series(chart.values.iter().enumerate().map(|(i, v)| {
        let vpos = if *v >= 0.0 { VPos::Bottom } else { VPos::Top };
        Text::new(
            format!("{v:.1}"),
            (SegmentValue::CenterOf(i as i32), *v),
            TextStyle::from((FontFamily::SansSerif, 11)).pos(Pos::new(HPos::Center, vpos)),
        )
    }))
    .map_err(render_err)?;

    cc.configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 12))
        .draw()
        .map_err(render_err)?;
    Ok(())
}
