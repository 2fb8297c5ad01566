use unicode_width::UnicodeWidthChar;

use crate::error::MorphResult;
use crate::style::TextStyle;

/// Pen position at the start of one character, relative to the line origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caret {
    pub x: f32,
    pub y: f32,
}

/// Everything a layout pass needs to know about one measured line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineMetrics {
    /// One caret per character of the measured text, in text order.
    pub carets: Vec<Caret>,
    /// Total advance of the line.
    pub width: f32,
    pub line_height: f32,
}

/// Host-side text measurement.
///
/// The library never guesses glyph geometry itself. Implementations answer
/// with one caret per character; errors propagate to the caller unmodified.
pub trait Measure {
    fn measure(&self, text: &str, style: &TextStyle) -> MorphResult<LineMetrics>;
}

/// Measurement for terminal cell grids: every character advances by its
/// column width, wide characters take two cells, combining marks take none.
/// Lines are one cell tall.
#[derive(Debug, Default, Clone, Copy)]
pub struct CellMeasurer;

impl Measure for CellMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> MorphResult<LineMetrics> {
        let mut carets = Vec::with_capacity(text.len());
        let mut x = 0.0;

        for ch in text.chars() {
            carets.push(Caret { x, y: 0.0 });
            x += ch.width().unwrap_or(0) as f32;
        }

        Ok(LineMetrics {
            carets,
            width: x,
            line_height: 1.0,
        })
    }
}
