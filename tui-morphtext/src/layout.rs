use crate::error::MorphResult;
use crate::measure::Measure;
use crate::style::TextStyle;

/// One positioned character of a laid-out line.
///
/// `moving` and `target_x` are annotations written by the glyph matcher; a
/// fresh layout always starts with `moving` false and `target_x` equal to
/// `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub moving: bool,
    pub target_x: f32,
}

/// Glyph positions for one string, centered on x = 0.
pub struct LineLayout {
    pub glyphs: Vec<Glyph>,
    pub line_height: f32,
}

/// Measure `text` once and place every character so the full line is
/// centered around the origin.
pub fn layout(measurer: &impl Measure, text: &str, style: &TextStyle) -> MorphResult<LineLayout> {
    let metrics = measurer.measure(text, style)?;

    assert_eq!(
        metrics.carets.len(),
        text.chars().count(),
        "measurer must return one caret per character"
    );

    let half = metrics.width / 2.0;

    let glyphs = text
        .chars()
        .zip(&metrics.carets)
        .map(|(ch, caret)| Glyph {
            ch,
            x: caret.x - half,
            y: caret.y,
            height: metrics.line_height,
            moving: false,
            target_x: caret.x - half,
        })
        .collect();

    Ok(LineLayout {
        glyphs,
        line_height: metrics.line_height,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::measure::CellMeasurer;

    fn lay_out(text: &str) -> LineLayout {
        layout(&CellMeasurer, text, &TextStyle::default()).expect("cell layout is infallible")
    }

    #[test]
    fn line_is_centered_on_origin() {
        let line = lay_out("ab");

        assert_eq!(line.glyphs[0].x, -1.0);
        assert_eq!(line.glyphs[1].x, 0.0);
    }

    #[test]
    fn wide_characters_shift_their_successors() {
        let line = lay_out("a世b");

        // Widths 1, 2, 1 give carets at 0, 1, 3 on a line of width 4.
        assert_eq!(line.glyphs[0].x, -2.0);
        assert_eq!(line.glyphs[1].x, -1.0);
        assert_eq!(line.glyphs[2].x, 1.0);
    }

    #[test]
    fn fresh_glyphs_carry_no_motion() {
        let line = lay_out("hi");

        for glyph in &line.glyphs {
            assert!(!glyph.moving);
            assert_eq!(glyph.target_x, glyph.x);
        }
    }

    #[test]
    fn glyphs_inherit_line_height() {
        let line = lay_out("hi");

        assert_eq!(line.line_height, 1.0);
        assert!(line.glyphs.iter().all(|g| g.height == 1.0));
    }

    #[test]
    fn empty_text_lays_out_empty() {
        let line = lay_out("");

        assert!(line.glyphs.is_empty());
    }

    #[test]
    fn measures_exactly_once() {
        struct CountingMeasurer(Cell<usize>);

        impl Measure for CountingMeasurer {
            fn measure(&self, text: &str, style: &TextStyle) -> MorphResult<crate::measure::LineMetrics> {
                self.0.set(self.0.get() + 1);
                CellMeasurer.measure(text, style)
            }
        }

        let counting = CountingMeasurer(Cell::new(0));
        layout(&counting, "abc", &TextStyle::default()).expect("cell layout is infallible");

        assert_eq!(counting.0.get(), 1);
    }
}
