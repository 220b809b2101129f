//! Label composition
//!
//! Turns one [`LabelRequest`] into positioned lines and draws them:
//!
//! 1. every whitespace-separated word becomes its own line
//! 2. the fitter picks the largest size that fits the canvas
//! 3. the printer safety margin is taken off and the override added
//! 4. the block is centred vertically, each line horizontally
//!
//! Lines stack bottom-up from `start_y`: the last line sits lowest, the first
//! line highest. A block made taller than the canvas by a positive override
//! is not clamped, so `start_y` can go negative.

use log::{debug, warn};

use crate::error::LabelResult;
use crate::fit::fit_label;
use crate::font_metrics::FontMetricsProvider;
use crate::renderer::LabelRenderer;
use crate::types::{
    FitResult, LabelLayout, LabelRequest, LineSet, PlacedLine, PRINTER_SAFETY_MARGIN,
};

/// Size actually drawn: fitted size minus safety margin plus override, at least 1
pub fn final_font_size(raw_size: u32, size_override: i32) -> u32 {
    let size = raw_size as i64 - PRINTER_SAFETY_MARGIN + size_override as i64;
    size.max(1) as u32
}

/// Compute where every line of `request` goes without drawing anything.
/// Returns `None` when the text has no words.
pub fn layout_label<M>(request: &LabelRequest, metrics: &M) -> LabelResult<Option<LabelLayout>>
where
    M: FontMetricsProvider + ?Sized,
{
    let Some(lines) = LineSet::from_text(&request.text) else {
        return Ok(None);
    };

    let fitted = fit_label(
        &lines,
        request.canvas_width,
        request.canvas_height,
        request.font,
        metrics,
    )?;
    let drawn = FitResult {
        font_size: final_font_size(fitted.font_size, request.size_override),
    };
    let size = drawn.font_size as f64;

    let block_height = lines.block_height(size);
    let start_y = (request.canvas_height - block_height) / 2.0;
    let n = lines.len();

    let mut placed = Vec::with_capacity(n);
    for (i, line) in lines.iter().enumerate() {
        let line_width = metrics.string_width(line, request.font, size)?;
        placed.push(PlacedLine {
            text: line.to_string(),
            x: (request.canvas_width - line_width) / 2.0,
            y: start_y + (n - i - 1) as f64 * drawn.line_height(),
        });
    }

    Ok(Some(LabelLayout {
        font: request.font,
        font_size: drawn.font_size,
        block_height,
        start_y,
        lines: placed,
    }))
}

/// Lay out `request`, draw it and advance the renderer to a new page.
///
/// Blank text is skipped without emitting a page; the returned layout is
/// `None` in that case.
pub fn compose_label<M, R>(
    request: &LabelRequest,
    metrics: &M,
    renderer: &mut R,
) -> LabelResult<Option<LabelLayout>>
where
    M: FontMetricsProvider + ?Sized,
    R: LabelRenderer + ?Sized,
{
    let Some(layout) = layout_label(request, metrics)? else {
        warn!("Skipping label with no text: {:?}", request.text);
        return Ok(None);
    };

    debug!(
        "Label {:?}: {} line(s) at {}pt {}",
        request.text,
        layout.lines.len(),
        layout.font_size,
        layout.font
    );

    for line in &layout.lines {
        renderer.draw_string(&line.text, line.x, line.y, layout.font, layout.font_size as f64)?;
    }
    renderer.show_page()?;

    Ok(Some(layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LabelError;
    use crate::fit::tests::MonoMetrics;
    use crate::font_metrics::StandardFontMetrics;
    use crate::renderer::RecordingRenderer;
    use crate::types::FontName;

    fn request(text: &str, w: f64, h: f64, size_override: i32) -> LabelRequest {
        LabelRequest::new(text, FontName::Courier, w, h, size_override)
    }

    #[test]
    fn test_final_font_size() {
        assert_eq!(final_font_size(39, 0), 37);
        assert_eq!(final_font_size(39, 5), 42);
        assert_eq!(final_font_size(1, -5), 1);
        assert_eq!(final_font_size(3, 0), 1);
    }

    #[test]
    fn test_two_words_become_two_centred_lines() {
        // raw: 3s <= 196 and 2s + 2 <= 96 -> 47; final 45
        let layout = layout_label(&request("FOO BAR", 200.0, 100.0, 0), &MonoMetrics)
            .unwrap()
            .unwrap();
        assert_eq!(layout.font_size, 45);
        assert_eq!(layout.block_height, 92.0);
        assert_eq!(layout.start_y, 4.0);

        let [foo, bar] = layout.lines.as_slice() else {
            panic!("expected two lines, got {:?}", layout.lines);
        };
        assert_eq!(foo.text, "FOO");
        assert_eq!(bar.text, "BAR");
        assert!(foo.y > bar.y);
        assert_eq!(bar.y, 4.0);
        assert_eq!(foo.y, 51.0);
        assert_eq!(foo.x, 32.5);
        assert_eq!(bar.x, 32.5);
    }

    #[test]
    fn test_lines_centred_independently() {
        let metrics = StandardFontMetrics::new();
        let req = LabelRequest::new("Wide i", FontName::Helvetica, 150.0, 90.0, 0);
        let layout = layout_label(&req, &metrics).unwrap().unwrap();
        let size = layout.font_size as f64;
        for line in &layout.lines {
            let w = metrics.string_width(&line.text, FontName::Helvetica, size).unwrap();
            assert!((line.x * 2.0 + w - 150.0).abs() < 1e-9);
        }
        assert!(layout.lines[0].x < layout.lines[1].x);
    }

    #[test]
    fn test_negative_override_clamps_to_one() {
        let layout = layout_label(&request("ABCDEFGHIJ", 10.0, 10.0, -5), &MonoMetrics)
            .unwrap()
            .unwrap();
        assert_eq!(layout.font_size, 1);
    }

    #[test]
    fn test_positive_override_can_overflow_canvas() {
        let layout = layout_label(&request("A B C", 100.0, 20.0, 5), &MonoMetrics)
            .unwrap()
            .unwrap();
        // raw: 3s + 4 <= 16 -> 4; final 7; block 3 * 7 + 4 = 25 > 20
        assert_eq!(layout.font_size, 7);
        assert_eq!(layout.block_height, 25.0);
        assert_eq!(layout.start_y, -2.5);
    }

    #[test]
    fn test_unbounded_canvas_draws_nothing() {
        let mut renderer = RecordingRenderer::new();
        let err = compose_label(
            &request("HELLO", f64::INFINITY, 100.0, 0),
            &MonoMetrics,
            &mut renderer,
        )
        .unwrap_err();
        assert!(matches!(err, LabelError::InvalidConfig(_)));
        assert!(renderer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_blank_text_emits_nothing() {
        let mut renderer = RecordingRenderer::new();
        let result = compose_label(&request(" \t ", 100.0, 100.0, 0), &MonoMetrics, &mut renderer)
            .unwrap();
        assert!(result.is_none());
        assert!(renderer.finish().unwrap().is_empty());
    }

    #[test]
    fn test_compose_draws_in_line_order_then_advances() {
        let mut renderer = RecordingRenderer::new();
        let layout = compose_label(&request("FOO BAR", 200.0, 100.0, 0), &MonoMetrics, &mut renderer)
            .unwrap()
            .unwrap();
        let pages = renderer.finish().unwrap();
        assert_eq!(pages.len(), 1);

        let texts: Vec<&str> = pages[0].iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["FOO", "BAR"]);
        for (call, line) in pages[0].iter().zip(&layout.lines) {
            assert_eq!((call.x, call.y), (line.x, line.y));
            assert_eq!(call.font_size, 45.0);
            assert_eq!(call.font, FontName::Courier);
        }
    }

    #[test]
    fn test_unmeasurable_text_draws_nothing() {
        let mut renderer = RecordingRenderer::new();
        let req = LabelRequest::new("Łódź", FontName::Helvetica, 100.0, 50.0, 0);
        assert!(compose_label(&req, &StandardFontMetrics::new(), &mut renderer).is_err());
        assert!(renderer.pages().is_empty());
    }
}
