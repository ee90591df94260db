//! Layout config – the intermediate representation between resume layout
//! and PDF rendering. This is the "frozen" structure that encodes exactly
//! what goes on each page.

use serde::{Deserialize, Serialize};

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimetres to points.
pub fn mm(v: f32) -> f32 {
    v * PT_PER_MM
}

/// A complete resume layout ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeLayout {
    /// Document title embedded in the PDF metadata.
    pub title: String,
    /// Width of each page in PDF points (1 pt = 1/72 inch).
    pub page_width_pt: f32,
    /// Height of each page in PDF points.
    pub page_height_pt: f32,
    /// Ordered list of pages. Never empty once laid out.
    pub pages: Vec<PageLayout>,
}

/// One page of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_index: usize,
    /// Elements in drawing order (top to bottom).
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Text(TextLine),
    Photo(PhotoPlacement),
}

/// A single line of text inside a cell of `height` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    /// Left edge of the text, in points from the page's left edge.
    pub x: f32,
    /// Top of the cell, in points from the page's top edge.
    pub y: f32,
    pub height: f32,
    pub font_size: f32,
    pub bold: bool,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
}

/// Where the photo goes. Position is relative to the page top-left, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ResumeLayout {
    /// Create an empty A4 portrait layout.
    pub fn a4(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            // A4: 210mm × 297mm = 595.28 × 841.89 points
            page_width_pt: 595.28,
            page_height_pt: 841.89,
            pages: Vec::new(),
        }
    }

    /// All text lines in reading order, across pages.
    pub fn text_lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|p| {
            p.elements.iter().filter_map(|e| match e {
                Element::Text(t) => Some(t),
                Element::Photo(_) => None,
            })
        })
    }

    /// The photo placement, if the layout has one.
    pub fn photo(&self) -> Option<&PhotoPlacement> {
        self.pages.iter().flat_map(|p| &p.elements).find_map(|e| match e {
            Element::Photo(p) => Some(p),
            Element::Text(_) => None,
        })
    }

    /// Serialise to JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialise from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
