//! Python bindings
//!
//! Exposes label generation to the Python front end that collects values and
//! settings. Built only with the `python` feature.

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::batch::create_pdf;
use crate::config::LabelConfig;
use crate::fit::solve_font_size;
use crate::font_metrics::StandardFontMetrics;
use crate::renderer::LabelDocument;
use crate::types::{FontName, LineSet};

/// Generate the label PDF and return its bytes
#[pyfunction]
#[pyo3(signature = (
    values,
    font = "Helvetica-Bold",
    width_mm = 50.0,
    height_mm = 30.0,
    font_override = 0,
    remove_duplicates = true
))]
fn generate_labels(
    py: Python<'_>,
    values: Vec<String>,
    font: &str,
    width_mm: f64,
    height_mm: f64,
    font_override: i32,
    remove_duplicates: bool,
) -> PyResult<PyObject> {
    let config = LabelConfig {
        font: font.parse()?,
        width_mm,
        height_mm,
        font_override,
        remove_duplicates,
    };
    let document = py.allow_threads(|| create_pdf(&values, &config))?;
    Ok(PyBytes::new(py, &document.bytes).into())
}

/// Largest font size at which `lines` fit a `max_width` x `max_height` canvas
#[pyfunction]
fn find_max_font_size(
    lines: Vec<String>,
    max_width: f64,
    max_height: f64,
    font: &str,
) -> PyResult<u32> {
    let font: FontName = font.parse()?;
    let Some(lines) = LineSet::from_lines(lines) else {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "At least one non-empty line is required",
        ));
    };
    Ok(solve_font_size(
        &lines,
        max_width,
        max_height,
        font,
        &StandardFontMetrics::new(),
    )?)
}

/// Python module for label PDF generation
#[pymodule]
pub fn label_pdf_rust(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_labels, m)?)?;
    m.add_function(wrap_pyfunction!(find_max_font_size, m)?)?;
    m.add("AVAILABLE_FONTS", FontName::names())?;
    m.add("DEFAULT_FILE_NAME", LabelDocument::FILE_NAME)?;
    m.add("MIME_TYPE", LabelDocument::MIME_TYPE)?;
    Ok(())
}
