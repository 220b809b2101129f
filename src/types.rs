//! Type definitions for label layout

use std::fmt;
use std::str::FromStr;

use pdf_writer::Name;
use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Gap between stacked lines, in device units
pub const INTER_LINE_GAP: f64 = 2.0;

/// Margin kept free on each side of the canvas while fitting
pub const FIT_MARGIN: f64 = 2.0;

/// Points deducted from the fitted size to leave print tolerance around glyphs
pub const PRINTER_SAFETY_MARGIN: i64 = 2;

/// One millimetre in PDF points
pub const MM: f64 = 72.0 / 25.4;

/// The built-in PDF fonts a label can be set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontName {
    Helvetica,
    #[default]
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl FontName {
    pub const ALL: [FontName; 6] = [
        FontName::Helvetica,
        FontName::HelveticaBold,
        FontName::TimesRoman,
        FontName::TimesBold,
        FontName::Courier,
        FontName::CourierBold,
    ];

    /// PostScript name, also the identifier accepted from configuration
    pub fn as_str(self) -> &'static str {
        match self {
            FontName::Helvetica => "Helvetica",
            FontName::HelveticaBold => "Helvetica-Bold",
            FontName::TimesRoman => "Times-Roman",
            FontName::TimesBold => "Times-Bold",
            FontName::Courier => "Courier",
            FontName::CourierBold => "Courier-Bold",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.as_str()).collect()
    }

    /// BaseFont entry of the Type1 font dictionary
    pub fn base_font(self) -> Name<'static> {
        match self {
            FontName::Helvetica => Name(b"Helvetica"),
            FontName::HelveticaBold => Name(b"Helvetica-Bold"),
            FontName::TimesRoman => Name(b"Times-Roman"),
            FontName::TimesBold => Name(b"Times-Bold"),
            FontName::Courier => Name(b"Courier"),
            FontName::CourierBold => Name(b"Courier-Bold"),
        }
    }

    /// Name of the font in page resources (e.g. /F2)
    pub fn resource_name(self) -> Name<'static> {
        match self {
            FontName::Helvetica => Name(b"F1"),
            FontName::HelveticaBold => Name(b"F2"),
            FontName::TimesRoman => Name(b"F3"),
            FontName::TimesBold => Name(b"F4"),
            FontName::Courier => Name(b"F5"),
            FontName::CourierBold => Name(b"F6"),
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontName {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| LabelError::InvalidFont(s.to_string()))
    }
}

impl TryFrom<String> for FontName {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontName> for String {
    fn from(font: FontName) -> Self {
        font.as_str().to_string()
    }
}

/// Everything needed to lay out one label page
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub text: String,
    pub font: FontName,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub size_override: i32,
}

impl LabelRequest {
    pub fn new(
        text: impl Into<String>,
        font: FontName,
        canvas_width: f64,
        canvas_height: f64,
        size_override: i32,
    ) -> Self {
        Self {
            text: text.into(),
            font,
            canvas_width,
            canvas_height,
            size_override,
        }
    }
}

/// Lines of one label, top to bottom. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    lines: Vec<String>,
}

impl LineSet {
    /// Split text into lines, one whitespace-separated word per line.
    /// Returns `None` for blank text.
    pub fn from_text(text: &str) -> Option<Self> {
        Self::from_lines(text.split_whitespace())
    }

    /// Build from pre-split lines, dropping empty ones
    pub fn from_lines<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(Into::into)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Height of the stacked block at `font_size`
    pub fn block_height(&self, font_size: f64) -> f64 {
        let n = self.lines.len() as f64;
        n * font_size + (n - 1.0) * INTER_LINE_GAP
    }
}

/// Solved font size for one label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitResult {
    pub font_size: u32,
}

impl FitResult {
    pub fn line_height(&self) -> f64 {
        self.font_size as f64 + INTER_LINE_GAP
    }
}

/// A line with its baseline origin on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Final placement of one label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub font: FontName,
    pub font_size: u32,
    pub block_height: f64,
    pub start_y: f64,
    pub lines: Vec<PlacedLine>,
}
