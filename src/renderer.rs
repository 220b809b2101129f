//! Label renderers
//!
//! The composer only talks to [`LabelRenderer`]: draw a string, advance to the
//! next page, finish the document. Two implementations live here:
//!
//! - [`PdfLabelRenderer`] writes a real PDF with pdf-writer, one fixed-size
//!   page per label, text set in the built-in Type1 fonts.
//! - [`RecordingRenderer`] keeps the draw calls per page, for previews and
//!   assertions.
//!
//! Page semantics follow ReportLab's canvas: `show_page` always closes the
//! current page, even an empty one, while `finish` only emits the pending
//! page if something was drawn on it.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use log::{debug, info};
use pdf_writer::{Finish, Name, Pdf, Rect, Ref};
use serde::Serialize;

use crate::canvas::PdfCanvas;
use crate::error::{LabelError, LabelResult};
use crate::types::FontName;

/// Rendering backend the composer draws into
pub trait LabelRenderer {
    type Output;

    /// Draw `text` with its baseline origin at (x, y)
    fn draw_string(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: FontName,
        font_size: f64,
    ) -> LabelResult<()>;

    /// Close the current page and start a new one
    fn show_page(&mut self) -> LabelResult<()>;

    /// Seal the document
    fn finish(self) -> LabelResult<Self::Output>
    where
        Self: Sized;
}

/// A finished label PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl LabelDocument {
    pub const FILE_NAME: &'static str = "labels.pdf";
    pub const MIME_TYPE: &'static str = "application/pdf";

    /// Write the PDF to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> LabelResult<()> {
        let path = path.as_ref();
        std::fs::write(path, &self.bytes)?;
        info!("PDF saved to: {}", path.display());
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// pdf-writer backed renderer producing uniform label pages
pub struct PdfLabelRenderer {
    pdf: Pdf,
    page_width: f64,
    page_height: f64,
    canvas: PdfCanvas,
    pages: Vec<Ref>, // All page references
    page_tree_id: Ref,
    next_ref_id: i32,
    // Type1 font objects, written once per document
    fonts: HashMap<FontName, Ref>,
    // Ordered so page resources serialise identically on every run
    fonts_used_on_current_page: BTreeMap<FontName, Ref>,
}

impl PdfLabelRenderer {
    /// Start an empty document whose pages are `page_width` x `page_height` points
    pub fn new(page_width: f64, page_height: f64) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        pdf.catalog(catalog_id).pages(page_tree_id);

        Self {
            pdf,
            page_width,
            page_height,
            canvas: PdfCanvas::new(),
            pages: vec![],
            page_tree_id,
            next_ref_id: 3, // 1=catalog, 2=page tree
            fonts: HashMap::new(),
            fonts_used_on_current_page: BTreeMap::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn next_ref(&mut self) -> Ref {
        let r = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        r
    }

    /// Get or register a built-in Type1 font with WinAnsi encoding
    fn font_ref(&mut self, font: FontName) -> Ref {
        if let Some(&id) = self.fonts.get(&font) {
            return id;
        }
        let id = self.next_ref();
        self.pdf
            .type1_font(id)
            .base_font(font.base_font())
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        self.fonts.insert(font, id);
        id
    }

    /// Write the current canvas out as a page and start a fresh one
    fn flush_page(&mut self) {
        let canvas = std::mem::take(&mut self.canvas);
        let page_id = self.next_ref();
        let content_id = self.next_ref();

        let content_bytes = canvas.finish();
        self.pdf.stream(content_id, &content_bytes);

        let mut page = self.pdf.page(page_id);
        page.media_box(Rect::new(
            0.0,
            0.0,
            self.page_width as f32,
            self.page_height as f32,
        ));
        page.parent(self.page_tree_id);
        page.contents(content_id);
        if !self.fonts_used_on_current_page.is_empty() {
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (font, font_id) in &self.fonts_used_on_current_page {
                fonts.pair(font.resource_name(), *font_id);
            }
        }
        page.finish();

        self.fonts_used_on_current_page.clear();
        self.pages.push(page_id);
        debug!("Page {} written", self.pages.len());
    }
}

impl LabelRenderer for PdfLabelRenderer {
    type Output = LabelDocument;

    fn draw_string(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: FontName,
        font_size: f64,
    ) -> LabelResult<()> {
        if !(x.is_finite() && y.is_finite() && font_size.is_finite()) {
            return Err(LabelError::PdfError(format!(
                "Non-finite position or size for {:?}: ({}, {}) @ {}",
                text, x, y, font_size
            )));
        }
        let font_id = self.font_ref(font);
        self.fonts_used_on_current_page.insert(font, font_id);
        self.canvas.set_font(font.resource_name(), font_size);
        self.canvas.draw_string(x, y, text);
        Ok(())
    }

    fn show_page(&mut self) -> LabelResult<()> {
        self.flush_page();
        Ok(())
    }

    fn finish(mut self) -> LabelResult<LabelDocument> {
        if !self.canvas.is_empty() {
            self.flush_page();
        }

        let page_count = self.pages.len();
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(page_count as i32);

        let bytes = self.pdf.finish();
        info!(
            "PDF generated: {} pages, {} bytes ({:.2} MB)",
            page_count,
            bytes.len(),
            bytes.len() as f64 / 1_048_576.0
        );
        Ok(LabelDocument { bytes, page_count })
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCall {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontName,
    pub font_size: f64,
}

/// Renderer that records draw calls page by page instead of producing bytes
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pages: Vec<Vec<DrawCall>>,
    current: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages closed so far
    pub fn pages(&self) -> &[Vec<DrawCall>] {
        &self.pages
    }
}

impl LabelRenderer for RecordingRenderer {
    type Output = Vec<Vec<DrawCall>>;

    fn draw_string(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: FontName,
        font_size: f64,
    ) -> LabelResult<()> {
        self.current.push(DrawCall {
            text: text.to_string(),
            x,
            y,
            font,
            font_size,
        });
        Ok(())
    }

    fn show_page(&mut self) -> LabelResult<()> {
        self.pages.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn finish(mut self) -> LabelResult<Self::Output> {
        if !self.current.is_empty() {
            self.pages.push(std::mem::take(&mut self.current));
        }
        Ok(self.pages)
    }
}
