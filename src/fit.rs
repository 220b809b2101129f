//! Font size fitting
//!
//! Finds the largest integer font size at which every line of a label fits
//! the canvas width and the stacked lines fit the canvas height, both minus
//! [`FIT_MARGIN`] on each side.

use crate::error::{LabelError, LabelResult};
use crate::font_metrics::FontMetricsProvider;
use crate::types::{FitResult, FontName, LineSet, FIT_MARGIN};

/// Largest size `s >= 1` for which `fits(s)` holds, scanning upward from 1.
///
/// `fits` must be monotone: once a size overflows, every larger size does too.
/// The scan stops at the first overflowing size and answers the size before
/// it, never less than 1.
pub fn largest_fitting_size<F>(mut fits: F) -> LabelResult<u32>
where
    F: FnMut(u32) -> LabelResult<bool>,
{
    let mut size: u32 = 1;
    while fits(size)? {
        size += 1;
    }
    Ok(size.saturating_sub(1).max(1))
}

/// Whether `lines` fit inside `max_width` x `max_height` at `font_size`
pub fn lines_fit<M>(
    lines: &LineSet,
    max_width: f64,
    max_height: f64,
    font: FontName,
    font_size: f64,
    metrics: &M,
) -> LabelResult<bool>
where
    M: FontMetricsProvider + ?Sized,
{
    let mut widest: f64 = 0.0;
    for line in lines.iter() {
        widest = widest.max(metrics.string_width(line, font, font_size)?);
    }
    let block_height = lines.block_height(font_size);

    Ok(widest <= max_width - 2.0 * FIT_MARGIN && block_height <= max_height - 2.0 * FIT_MARGIN)
}

/// Largest font size at which `lines` fit the canvas. Never less than 1.
pub fn solve_font_size<M>(
    lines: &LineSet,
    max_width: f64,
    max_height: f64,
    font: FontName,
    metrics: &M,
) -> LabelResult<u32>
where
    M: FontMetricsProvider + ?Sized,
{
    if !(max_width.is_finite() && max_height.is_finite()) {
        return Err(LabelError::InvalidConfig(format!(
            "Canvas must be finite, got {} x {}",
            max_width, max_height
        )));
    }
    // The height budget bounds the scan even for zero-width text
    largest_fitting_size(|size| {
        lines_fit(lines, max_width, max_height, font, size as f64, metrics)
    })
}

/// Solve the font size and wrap it with the line height it implies
pub fn fit_label<M>(
    lines: &LineSet,
    max_width: f64,
    max_height: f64,
    font: FontName,
    metrics: &M,
) -> LabelResult<FitResult>
where
    M: FontMetricsProvider + ?Sized,
{
    let font_size = solve_font_size(lines, max_width, max_height, font, metrics)?;
    Ok(FitResult { font_size })
}
