use crate::error::MorphResult;
use crate::layout::{Glyph, layout};
use crate::matcher::pair_glyphs;
use crate::measure::Measure;
use crate::style::TextStyle;

/// The glyph pair one transition animates between. Produced by
/// [`retarget`](TransitionState::retarget), consumed by the compositor.
///
/// The matcher runs exactly once per rebuild, so the motion annotations on
/// both sides stay frozen for the lifetime of the transition.
#[derive(Default)]
pub struct TransitionState {
    out_glyphs: Vec<Glyph>,
    in_glyphs: Vec<Glyph>,
    out_text: String,
    in_text: String,
    line_height: f32,
    settled: bool,
}

impl TransitionState {
    /// Begin a transition toward `text`.
    ///
    /// The previous incoming side becomes the outgoing side with its motion
    /// annotations cleared, `text` is measured and laid out fresh, and the
    /// matcher pairs the two. Retargeting to the string already shown skips
    /// all of that and marks the state settled.
    ///
    /// On a measurement error the state is left untouched.
    pub fn retarget(
        &mut self,
        text: &str,
        measurer: &impl Measure,
        style: &TextStyle,
    ) -> MorphResult<()> {
        if text == self.in_text {
            self.settled = true;
            return Ok(());
        }

        let next = layout(measurer, text, style)?;

        self.out_text = std::mem::replace(&mut self.in_text, text.to_owned());
        self.out_glyphs = std::mem::take(&mut self.in_glyphs);

        for glyph in &mut self.out_glyphs {
            glyph.moving = false;
            glyph.target_x = glyph.x;
        }

        self.in_glyphs = next.glyphs;
        self.line_height = next.line_height;
        self.settled = false;

        pair_glyphs(&mut self.out_glyphs, &mut self.in_glyphs);

        Ok(())
    }

    pub fn out_glyphs(&self) -> &[Glyph] {
        &self.out_glyphs
    }

    pub fn in_glyphs(&self) -> &[Glyph] {
        &self.in_glyphs
    }

    pub fn out_text(&self) -> &str {
        &self.out_text
    }

    pub fn in_text(&self) -> &str {
        &self.in_text
    }

    /// True when the last retarget repeated the string already shown.
    pub fn settled(&self) -> bool {
        self.settled
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}
