use ratatui::style::{Color, Modifier};

/// Visual attributes shared by every glyph of a morphing line.
///
/// `alpha` is the base opacity of the whole line. Per-glyph fades multiply
/// into it, so a line configured at half alpha never renders brighter than
/// half alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub fg: Color,
    pub alpha: u8,
    pub modifier: Modifier,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Color::White,
            alpha: 255,
            modifier: Modifier::empty(),
        }
    }
}

/// Scale a base alpha by a fade factor, flooring the result.
///
/// The output never exceeds `base` and never goes below zero, whatever the
/// factor. `scaled_alpha(255, 0.5)` is 127.
pub fn scaled_alpha(base: u8, opacity: f32) -> u8 {
    let scaled = (f32::from(base) * opacity).floor();

    scaled.clamp(0.0, f32::from(base)) as u8
}

/// Blend `fg` toward `bg` by `alpha`, emulating translucency on terminals
/// that only know opaque cells.
///
/// Returns `None` when nothing should be drawn: a zero alpha, or a color
/// without a concrete RGB value that is below half visibility.
pub fn blend_toward(fg: Color, bg: Color, alpha: u8) -> Option<Color> {
    if alpha == 0 {
        return None;
    }

    match (to_rgb(fg), to_rgb(bg)) {
        (Some(f), Some(b)) => {
            let t = f32::from(alpha) / 255.0;

            Some(Color::Rgb(
                lerp_channel(b.0, f.0, t),
                lerp_channel(b.1, f.1, t),
                lerp_channel(b.2, f.2, t),
            ))
        }
        // No RGB to mix with. Draw the color as-is past half visibility,
        // hide it below.
        _ if alpha >= 128 => Some(fg),
        _ => None,
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Concrete sRGB value of a ratatui color, following the standard ANSI
/// palette for named variants.
fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::Red => Some((128, 0, 0)),
        Color::Green => Some((0, 128, 0)),
        Color::Yellow => Some((128, 128, 0)),
        Color::Blue => Some((0, 0, 128)),
        Color::Magenta => Some((128, 0, 128)),
        Color::Cyan => Some((0, 128, 128)),
        Color::Gray => Some((192, 192, 192)),
        Color::DarkGray => Some((128, 128, 128)),
        Color::LightRed => Some((255, 0, 0)),
        Color::LightGreen => Some((0, 255, 0)),
        Color::LightYellow => Some((255, 255, 0)),
        Color::LightBlue => Some((0, 0, 255)),
        Color::LightMagenta => Some((255, 0, 255)),
        Color::LightCyan => Some((0, 255, 255)),
        Color::White => Some((255, 255, 255)),
        Color::Reset | Color::Indexed(_) => None,
    }
}
