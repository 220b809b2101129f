//! Label PDF generator
//!
//! Turns a list of cell values into a PDF with one fixed-size label per page,
//! each value set as large as the label allows.
//! Provides Python bindings via PyO3 (feature `python`).

mod canvas;
pub mod batch;
pub mod composer;
pub mod config;
mod error;
pub mod fit;
pub mod font_metrics;
pub mod renderer;
mod types;
pub mod unicode_utils;
pub mod values;

#[cfg(feature = "python")]
mod python;

pub use batch::{create_pdf, generate_labels};
pub use composer::{compose_label, final_font_size, layout_label};
pub use config::LabelConfig;
pub use error::{LabelError, LabelResult};
pub use fit::{fit_label, solve_font_size};
pub use font_metrics::{FontMetricsProvider, StandardFontMetrics};
pub use renderer::{DrawCall, LabelDocument, LabelRenderer, PdfLabelRenderer, RecordingRenderer};
pub use types::{
    FitResult, FontName, LabelLayout, LabelRequest, LineSet, PlacedLine, FIT_MARGIN,
    INTER_LINE_GAP, MM, PRINTER_SAFETY_MARGIN,
};
pub use values::{sanitize_values, MISSING_VALUE_TOKEN};
