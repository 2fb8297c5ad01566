use crate::plan::TransitionState;

/// One glyph of a composited frame, in line-local coordinates.
///
/// `opacity` and `scale` are in `[0.0, 1.0]` for the built-in easing curves.
/// Entries are emitted back to front: outgoing glyphs first, incoming glyphs
/// last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawEntry {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
}

/// Turns a transition state and the current animation scalars into a draw
/// list, memoizing the previous frame.
///
/// The memo keys on the incoming text and the progress value alone; calling
/// again with only the fade factors changed returns the cached list verbatim.
/// That is what lets a paused or settled line cost nothing per frame.
#[derive(Default)]
pub struct Compositor {
    memo: Option<(String, f32)>,
    entries: Vec<DrawEntry>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite one frame.
    ///
    /// With an empty outgoing string there is nothing to morph from, so the
    /// frame is forced to the finished pose: progress 1, fade-in 1. That
    /// covers both the first string of a sequence and an empty string in the
    /// middle of one.
    pub fn composite(
        &mut self,
        state: &TransitionState,
        fade_in: f32,
        fade_out: f32,
        progress: f32,
    ) -> &[DrawEntry] {
        let (fade_in, progress) = if state.out_text().is_empty() {
            (1.0, 1.0)
        } else {
            (fade_in, progress)
        };

        if self
            .memo
            .as_ref()
            .is_some_and(|(text, p)| text == state.in_text() && *p == progress)
        {
            return &self.entries;
        }

        self.entries.clear();

        for glyph in state.out_glyphs() {
            if glyph.moving {
                self.entries.push(DrawEntry {
                    ch: glyph.ch,
                    x: lerp(glyph.x, glyph.target_x, progress),
                    y: glyph.y,
                    opacity: 1.0,
                    scale: 1.0,
                });
            } else {
                self.entries.push(DrawEntry {
                    ch: glyph.ch,
                    x: glyph.x,
                    y: glyph.y,
                    opacity: (1.0 - progress) * fade_out,
                    scale: 1.0 - progress,
                });
            }
        }

        // Moving incoming glyphs are already on screen as their outgoing
        // counterparts; only the genuinely new ones fade in.
        for glyph in state.in_glyphs() {
            if !glyph.moving {
                self.entries.push(DrawEntry {
                    ch: glyph.ch,
                    x: glyph.x,
                    y: glyph.y,
                    opacity: fade_in,
                    scale: progress,
                });
            }
        }

        self.memo = Some((state.in_text().to_owned(), progress));

        &self.entries
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
