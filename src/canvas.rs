//! Content stream writer for one label page
//!
//! Thin ReportLab-like wrapper over a pdf-writer [`Content`] stream: set a
//! font, draw strings at baseline positions, finish into bytes.

use pdf_writer::{Content, Name, Str};

use crate::unicode_utils::unicode_to_winansi;

/// Text state carried between draw calls
#[derive(Clone, Copy)]
pub struct CanvasState {
    pub font_name: Name<'static>,
    pub font_size: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            font_name: Name(b"F1"), // must be registered in page resources
            font_size: 12.0,
        }
    }
}

/// Drawing surface of the page currently being built
pub struct PdfCanvas {
    content: Content,
    state: CanvasState,
    ops: usize,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            state: CanvasState::default(),
            ops: 0,
        }
    }

    /// True until something has been drawn
    pub fn is_empty(&self) -> bool {
        self.ops == 0
    }

    pub fn set_font(&mut self, font_name: Name<'static>, size: f64) {
        self.state.font_name = font_name;
        self.state.font_size = size;
    }

    /// Draw `text` with its baseline origin at (x, y) in the current font
    pub fn draw_string(&mut self, x: f64, y: f64, text: &str) {
        let encoded = unicode_to_winansi(text);
        self.content.begin_text();
        self.content.set_font(self.state.font_name, self.state.font_size as f32);
        self.content.next_line(x as f32, y as f32);
        self.content.show(Str(&encoded));
        self.content.end_text();
        self.ops += 1;
    }

    /// Finish rendering and return content bytes
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}
