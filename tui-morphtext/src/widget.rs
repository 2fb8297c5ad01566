use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

use crate::driver::{Clock, MorphText};
use crate::measure::Measure;
use crate::style::{blend_toward, scaled_alpha};

/// Glyphs scaled below this draw nothing. A terminal cell cannot shrink, so
/// shrinking is approximated by vanishing early.
pub const MIN_VISIBLE_SCALE: f32 = 0.05;

impl<M: Measure, C: Clock> Widget for &mut MorphText<M, C> {
    /// Composite the current frame and paint it centered in `area`.
    ///
    /// Fractional glyph positions round to the nearest cell. Translucency is
    /// emulated by blending the foreground toward whatever background is
    /// already in the buffer.
    ///
    /// A failed measurement paints nothing; `render` has nowhere to report
    /// the error. Hosts with fallible measurers should drive
    /// [`MorphText::frame`] directly so failures stay observable.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(*buf.area());

        if area.is_empty() {
            return;
        }

        let style = self.style();

        let Ok(frame) = self.frame() else {
            return;
        };

        let origin_x = f32::from(area.x) + f32::from(area.width) / 2.0;
        let origin_y = f32::from(area.y) + f32::from(area.height) / 2.0;

        let mut utf8 = [0u8; 4];

        for entry in frame.entries {
            if entry.scale < MIN_VISIBLE_SCALE {
                continue;
            }

            let alpha = scaled_alpha(style.alpha, entry.opacity);

            if alpha == 0 {
                continue;
            }

            // Zero-width characters cannot occupy a cell of their own.
            let width = entry.ch.width().unwrap_or(0) as u16;

            if width == 0 {
                continue;
            }

            let col = (origin_x + entry.x).round();
            let row = (origin_y + entry.y - frame.line_height / 2.0).floor();

            if col < f32::from(area.left()) || row < f32::from(area.top()) {
                continue;
            }

            let (col, row) = (col as u16, row as u16);

            if row >= area.bottom() || u32::from(col) + u32::from(width) > u32::from(area.right()) {
                continue;
            }

            let bg = buf[(col, row)].bg;

            let Some(fg) = blend_toward(style.fg, bg, alpha) else {
                continue;
            };

            let cell_style = Style::new().fg(fg).add_modifier(style.modifier);
            buf.set_string(col, row, entry.ch.encode_utf8(&mut utf8), cell_style);
        }
    }
}
