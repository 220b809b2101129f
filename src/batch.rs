//! Batch driver: one label page per value
//!
//! The renderer is owned by the driver for the whole batch and finished
//! exactly once, also when a label fails half-way. In that case the label's
//! error is returned and the partial document dropped.

use log::info;

use crate::composer::compose_label;
use crate::config::LabelConfig;
use crate::error::LabelResult;
use crate::font_metrics::{FontMetricsProvider, StandardFontMetrics};
use crate::renderer::{LabelDocument, LabelRenderer, PdfLabelRenderer};
use crate::types::LabelRequest;
use crate::values::sanitize_values;

/// Compose every non-blank value of `values` into `renderer`, in input order
pub fn generate_labels<I, M, R>(
    values: I,
    config: &LabelConfig,
    metrics: &M,
    mut renderer: R,
) -> LabelResult<R::Output>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    M: FontMetricsProvider + ?Sized,
    R: LabelRenderer,
{
    config.validate()?;
    let values = sanitize_values(values, config.remove_duplicates);
    let (width, height) = config.page_size();

    let composed = compose_all(&values, config, width, height, metrics, &mut renderer);
    let output = renderer.finish();
    let pages = composed?;

    info!(
        "Generated {} label(s) from {} value(s) in {}",
        pages,
        values.len(),
        config.font
    );
    output
}

fn compose_all<M, R>(
    values: &[String],
    config: &LabelConfig,
    width: f64,
    height: f64,
    metrics: &M,
    renderer: &mut R,
) -> LabelResult<usize>
where
    M: FontMetricsProvider + ?Sized,
    R: LabelRenderer,
{
    let mut pages = 0;
    for value in values {
        let request =
            LabelRequest::new(value.as_str(), config.font, width, height, config.font_override);
        if compose_label(&request, metrics, renderer)?.is_some() {
            pages += 1;
        }
    }
    Ok(pages)
}

/// Build the label PDF for `values` with the standard font metrics
pub fn create_pdf<I>(values: I, config: &LabelConfig) -> LabelResult<LabelDocument>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let (width, height) = config.page_size();
    generate_labels(
        values,
        config,
        &StandardFontMetrics::new(),
        PdfLabelRenderer::new(width, height),
    )
}
