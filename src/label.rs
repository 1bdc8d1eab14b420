//! Label composition: one uploaded QR image becomes one fixed-size,
//! print-ready table-tent label.
//!
//! A label is a 720x864 opaque RGB canvas carrying a rounded accent border,
//! the QR code at a fixed position, the desk number and shop name, an
//! optional logo, and a footer line. All placements come from the
//! [`LabelTemplate`] for the invocation; inputs are force-resized without
//! preserving aspect ratio.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, Rgba, RgbaImage};
use std::path::Path;

use crate::assets::{LabelAssets, Logo};
use crate::error::MesitaError;
use crate::template::{
    ACCENT, BORDER_INSET, BORDER_RADIUS, BORDER_STROKE, DESK_FONT_PX, LABEL_HEIGHT, LABEL_WIDTH,
    LabelTemplate, QR_OFFSET, QR_SIZE, SHOP_FONT_PX,
};
use crate::text::draw_text;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// One uploaded QR image plus its derived desk name.
///
/// Created at upload time and consumed exactly once when composing its
/// label. The desk name is the uploaded file's base name with the extension
/// stripped; duplicates are not deduplicated.
#[derive(Debug, Clone)]
pub struct QrItem {
    pub image: RgbaImage,
    pub desk_name: String,
}

impl QrItem {
    /// Decode an uploaded image. A decode failure aborts the whole batch.
    pub fn from_upload(filename: &str, bytes: &[u8]) -> Result<Self, MesitaError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| MesitaError::Image(format!("failed to decode {}: {}", filename, e)))?
            .to_rgba8();
        Ok(Self {
            image,
            desk_name: desk_name_from(filename),
        })
    }
}

/// Derive the desk name from an uploaded file name: base name, extension
/// stripped. "A1.png" becomes "A1".
pub fn desk_name_from(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}

/// Render one label for `qr` with the given desk name.
///
/// Always returns a canvas of exactly [`LABEL_WIDTH`] x [`LABEL_HEIGHT`];
/// deterministic for identical inputs and template. Text that does not fit
/// is clipped at the canvas edge.
pub fn compose(
    qr: &RgbaImage,
    desk_name: &str,
    template: &LabelTemplate,
    assets: &LabelAssets,
) -> RgbImage {
    let mut canvas = RgbaImage::from_pixel(LABEL_WIDTH, LABEL_HEIGHT, WHITE);

    draw_border(&mut canvas);

    let qr_resized = imageops::resize(qr, QR_SIZE, QR_SIZE, FilterType::Lanczos3);
    imageops::overlay(
        &mut canvas,
        &qr_resized,
        QR_OFFSET.0 as i64,
        QR_OFFSET.1 as i64,
    );

    draw_text(
        &mut canvas,
        &assets.font,
        DESK_FONT_PX,
        template.desk_x,
        template.desk_y,
        BLACK,
        desk_name,
    );
    draw_text(
        &mut canvas,
        &assets.font,
        SHOP_FONT_PX,
        template.shop_x,
        template.shop_y,
        BLACK,
        &template.shop_name,
    );

    if let Logo::Present(logo) = &assets.logo {
        let logo_resized =
            imageops::resize(logo, template.logo_w, template.logo_h, FilterType::Lanczos3);
        imageops::overlay(
            &mut canvas,
            &logo_resized,
            template.logo_x as i64,
            template.logo_y as i64,
        );
    }

    draw_text(
        &mut canvas,
        &assets.font,
        template.footer_size as f32,
        template.footer_x,
        template.footer_y,
        BLACK,
        &template.footer_text,
    );

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Rounded accent border near the canvas edge. Purely decorative and always
/// drawn, whatever else lands on the canvas.
fn draw_border(canvas: &mut RgbaImage) {
    let x0 = BORDER_INSET as i32;
    let y0 = BORDER_INSET as i32;
    let x1 = (LABEL_WIDTH - BORDER_INSET) as i32;
    let y1 = (LABEL_HEIGHT - BORDER_INSET) as i32;
    let stroke = BORDER_STROKE as i32;
    let radius = BORDER_RADIUS as i32;

    fill_rounded_rect(canvas, x0, y0, x1, y1, radius, ACCENT);
    // The stroke extends inward; the interior reverts to background.
    fill_rounded_rect(
        canvas,
        x0 + stroke,
        y0 + stroke,
        x1 - stroke,
        y1 - stroke,
        (radius - stroke).max(0),
        WHITE,
    );
}

/// Fill a rounded rectangle with inclusive bounds `(x0, y0)..=(x1, y1)`.
fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    color: Rgba<u8>,
) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    for y in y0.max(0)..=y1.min(h - 1) {
        for x in x0.max(0)..=x1.min(w - 1) {
            if rounded_rect_contains(x, y, x0, y0, x1, y1, radius) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Point-in-rounded-rect test: inside the rect and, within a corner square,
/// inside that corner's circle.
fn rounded_rect_contains(x: i32, y: i32, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32) -> bool {
    let cx = if x < x0 + radius {
        x0 + radius
    } else if x > x1 - radius {
        x1 - radius
    } else {
        return true;
    };
    let cy = if y < y0 + radius {
        y0 + radius
    } else if y > y1 - radius {
        y1 - radius
    } else {
        return true;
    };
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= radius * radius
}
