//! Bars on a left axis with a line on an independent right axis.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;

use super::text::truncate_to_width;
use super::types::{DualAxisChart, Rgb};
use super::util::{label_area_px, render_err, rgb, round1, tick_label, value_range};
use crate::error::ChartError;
use crate::models::CountrySeries;

/// Series names and colors of the two layers.
#[derive(Debug, Clone, Copy)]
pub struct Layers<'a> {
    pub bar_name: &'a str,
    pub bar_color: Rgb,
    pub line_name: &'a str,
    pub line_color: Rgb,
}

fn lookup(series: &CountrySeries, country: &str) -> Option<f64> {
    series
        .points
        .iter()
        .find(|p| p.country == country)
        .map(|p| p.value)
}

/// Match both series by country name on one category axis.
///
/// Categories follow the bar series, then any countries only the line carries.
/// The right axis spans `0 ..= 1.2 * max(line)`.
pub fn build(
    bars: &CountrySeries,
    line: &CountrySeries,
    title: &str,
    layers: Layers<'_>,
) -> Result<DualAxisChart, ChartError> {
    let mut categories: Vec<String> = bars.points.iter().map(|p| p.country.clone()).collect();
    for p in &line.points {
        if !categories.contains(&p.country) {
            categories.push(p.country.clone());
        }
    }
    if categories.is_empty() {
        return Err(ChartError::Empty {
            chart: "dual-axis chart",
        });
    }

    let bar_values: Vec<Option<f64>> = categories
        .iter()
        .map(|c| lookup(bars, c).map(round1))
        .collect();
    let line_values: Vec<Option<f64>> = categories.iter().map(|c| lookup(line, c)).collect();
    let line_max = line_values
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max);

    Ok(DualAxisChart {
        title: title.to_string(),
        categories,
        bar_name: layers.bar_name.to_string(),
        bar_values,
        bar_color: layers.bar_color,
        line_name: layers.line_name.to_string(),
        line_values,
        line_color: layers.line_color,
        line_axis_max: if line_max > 0.0 { line_max * 1.2 } else { 1.0 },
    })
}

pub(crate) fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &DualAxisChart,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(render_err)?;

    let n = chart.categories.len() as i32;
    let (y_min, y_max) = value_range(chart.bar_values.iter().flatten().copied(), true);
    let left_px = label_area_px(y_min, y_max, 10, 12);
    let right_px = label_area_px(0.0, chart.line_axis_max, 10, 12);

    let (w, _) = root.dim_in_pixel();
    let slot_px = (w.saturating_sub(left_px + right_px + 40) / n.max(1) as u32).max(24);
    let labels: Vec<String> = chart
        .categories
        .iter()
        .map(|c| truncate_to_width(c, 11, slot_px - 4))
        .collect();

    let mut cc = ChartBuilder::on(root)
        .margin(16)
        .caption(&chart.title, (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Right, right_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d((0..n).into_segmented(), y_min..y_max)
        .map_err(render_err)?
        .set_secondary_coord((0..n).into_segmented(), 0.0..chart.line_axis_max);

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
        .y_desc(chart.bar_name.as_str())
        .axis_style(rgb(chart.bar_color))
        .label_style((FontFamily::SansSerif, 11))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(render_err)?;

    cc.configure_secondary_axes()
        .y_labels(10)
        .y_label_formatter(&y_fmt)
        .y_desc(chart.line_name.as_str())
        .axis_style(rgb(super::types::AXIS_RED))
        .label_style((FontFamily::SansSerif, 11))
        .axis_desc_style((FontFamily::SansSerif, 14))
        .draw()
        .map_err(render_err)?;

    let bar_color = rgb(chart.bar_color);
    cc.draw_series(
        chart
            .bar_values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as i32, v)))
            .map(|(i, v)| {
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), v)],
                    bar_color.filled(),
                );
                bar.set_margin(0, 0, 8, 8);
                bar
            }),
    )
    .map_err(render_err)?
    .label(chart.bar_name.as_str())
    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 14, y + 5)], bar_color.filled()));

    let line_color = rgb(chart.line_color);
    let points: Vec<(i32, f64)> = chart
        .line_values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i as i32, v)))
        .collect();
    cc.draw_secondary_series(LineSeries::new(
        points.iter().map(|(i, v)| (SegmentValue::CenterOf(*i), *v)),
        line_color.stroke_width(4),
    ))
    .map_err(render_err)?
    .label(chart.line_name.as_str())
    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 14, y)], line_color.stroke_width(3)));
    cc.draw_secondary_series(
        points
            .iter()
            .map(|(i, v)| Circle::new((SegmentValue::CenterOf(*i), *v), 4, line_color.filled())),
    )
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
