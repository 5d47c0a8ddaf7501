//! Shared helpers for the chart renderers: colors, ranges, label formatting.

use crate::error::ChartError;
use num_format::{Locale, ToFormattedString};
use palette::{Hsl, IntoColor, Srgb};
use plotters::prelude::*;

use super::text::text_width_px;
use super::types::Rgb;

pub(crate) fn render_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{e:?}"))
}

#[inline]
pub fn rgb((r, g, b): Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

/// Continuous choropleth scale: `t = 0` is a pale yellow, `t = 1` a deep red.
pub fn scale_color(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let t = t as f32;
    let hsl = Hsl::new(55.0 - 55.0 * t, 0.85, 0.85 - 0.40 * t);
    let c: Srgb = hsl.into_color();
    RGBColor(
        (c.red * 255.0).round() as u8,
        (c.green * 255.0).round() as u8,
        (c.blue * 255.0).round() as u8,
    )
}

/// Black or white, whichever reads better on `bg`.
pub fn contrast_text(bg: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = bg;
    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luma > 140.0 { BLACK } else { WHITE }
}

/// Axis range covering `values` (and 0 when `include_zero`), with a little headroom.
pub fn value_range(values: impl IntoIterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let (mut lo, mut hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = (hi - lo) * 0.1;
    (if lo < 0.0 { lo - pad } else { lo }, hi + pad)
}

/// Round to one decimal place, as bar values are displayed.
#[inline]
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Tick label: fewer decimals as magnitude grows.
pub fn tick_label(v: f64) -> String {
    let a = v.abs();
    let prec = if a >= 100.0 {
        0
    } else if a >= 10.0 {
        1
    } else {
        2
    };
    format!("{:.*}", prec, v)
}

/// Value label with thousands separators for large magnitudes.
pub fn format_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        let n = v.round() as i64;
        if n < 0 {
            format!("-{}", n.unsigned_abs().to_formatted_string(&Locale::en))
        } else {
            n.to_formatted_string(&Locale::en)
        }
    } else {
        tick_label(v)
    }
}

/// Y label area wide enough for the widest of `ticks + 1` evenly spaced labels.
pub fn label_area_px(ymin: f64, ymax: f64, ticks: usize, font_px: u32) -> u32 {
    let steps = ticks.max(1) as f64;
    let widest = (0..=ticks)
        .map(|i| tick_label(ymin + (ymax - ymin) * i as f64 / steps))
        .map(|s| text_width_px(&s, font_px))
        .max()
        .unwrap_or(0);
    (widest + 18).clamp(48, 140)
}
