//! Label sizing. Plotters cannot measure text, so widths are estimated from the
//! average advance of DejaVu Sans (about 0.6 em per glyph).

const ADVANCE_EM: f32 = 0.60;

/// Approximate rendered width of `text` at `font_px`.
pub fn text_width_px(text: &str, font_px: u32) -> u32 {
    (text.chars().count() as f32 * font_px as f32 * ADVANCE_EM).ceil() as u32
}

/// Shorten `text` to at most `max_px`, marking the cut with a trailing `…`.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    let fits = (max_px as f32 / (font_px.max(1) as f32 * ADVANCE_EM)).floor() as usize;
    if text.chars().count() <= fits {
        return text.to_string();
    }
    match fits {
        0 => String::new(),
        1 => "…".to_string(),
        n => text.chars().take(n - 1).chain(std::iter::once('…')).collect(),
    }
}
