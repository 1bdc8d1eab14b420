//! Text rasterization onto RGBA canvases using ab_glyph.
//!
//! Glyphs are laid out along a caret and drawn with anti-aliased coverage
//! blending. The (x, y) anchor is the top-left of the line (baseline is
//! derived from the font's ascent), and glyphs falling outside the canvas
//! are clipped at the edges.

use ab_glyph::{Font, FontArc, ScaleFont};
use image::{Rgba, RgbaImage};

/// Draw a single line of text, left-anchored at `(x, y)`.
///
/// No wrapping or truncation: overly long text simply runs off the canvas.
pub fn draw_text(
    canvas: &mut RgbaImage,
    font: &FontArc,
    pixel_height: f32,
    x: u32,
    y: u32,
    color: Rgba<u8>,
    text: &str,
) {
    let scaled = font.as_scaled(pixel_height);
    let baseline_y = y as f32 + scaled.ascent();
    let mut caret_x = x as f32;

    for ch in text.chars() {
        let glyph_id = font.glyph_id(ch);
        let glyph =
            glyph_id.with_scale_and_position(pixel_height, ab_glyph::point(caret_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounds.min.x as i32;
                let py = gy as i32 + bounds.min.y as i32;
                if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                    return;
                }
                blend_pixel(canvas, px as u32, py as u32, color, coverage);
            });
        }

        caret_x += scaled.h_advance(glyph_id);
    }
}

/// Coverage-weighted blend of `color` over the existing pixel.
fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let inv = 1.0 - coverage;
    let dst = canvas.get_pixel_mut(x, y);
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * coverage + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}
