//! Label template: the fixed dimensional constants shared by every label
//! in a run, plus the operator-adjustable placement values.
//!
//! The adjustable values arrive from the web UI once per invocation and are
//! held immutable for its duration. Out-of-range values are clamped to the
//! slider bounds, never rejected; overlapping placements are allowed.

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

/// Label canvas width in pixels (2.5 in @ 288 dpi).
pub const LABEL_WIDTH: u32 = 720;
/// Label canvas height in pixels (3 in @ 288 dpi).
pub const LABEL_HEIGHT: u32 = 864;

/// Fixed QR placement: top-left offset on the label canvas.
pub const QR_OFFSET: (u32, u32) = (160, 130);
/// Fixed QR size: uploads are force-resized to this square.
pub const QR_SIZE: u32 = 400;

/// Border inset from the canvas edge.
pub const BORDER_INSET: u32 = 5;
/// Border corner radius.
pub const BORDER_RADIUS: u32 = 40;
/// Border stroke width.
pub const BORDER_STROKE: u32 = 66;
/// Border accent color (#474FF6).
pub const ACCENT: Rgba<u8> = Rgba([0x47, 0x4F, 0xF6, 0xFF]);

/// Desk-number font size in pixels.
pub const DESK_FONT_PX: f32 = 72.0;
/// Shop-name font size in pixels.
pub const SHOP_FONT_PX: f32 = 48.0;

/// Page grid columns.
pub const GRID_COLS: u32 = 3;
/// Page grid rows.
pub const GRID_ROWS: u32 = 3;
/// Labels per page (3x3 grid).
pub const LABELS_PER_PAGE: usize = (GRID_COLS * GRID_ROWS) as usize;

/// Page canvas width (3 labels across).
pub const PAGE_WIDTH: u32 = GRID_COLS * LABEL_WIDTH;
/// Page canvas height (3 labels down).
pub const PAGE_HEIGHT: u32 = GRID_ROWS * LABEL_HEIGHT;

/// Canvas background.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Operator-adjustable configuration for one invocation.
///
/// Field names match the web form fields one-to-one. Defaults reproduce the
/// stock layout: desk number above the QR, shop name below it, logo and
/// footer along the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelTemplate {
    pub shop_name: String,
    pub footer_text: String,
    pub desk_x: u32,
    pub desk_y: u32,
    pub shop_x: u32,
    pub shop_y: u32,
    pub footer_x: u32,
    pub footer_y: u32,
    /// Footer font size in pixels, adjustable per run.
    pub footer_size: u32,
    pub logo_x: u32,
    pub logo_y: u32,
    pub logo_w: u32,
    pub logo_h: u32,
}

impl Default for LabelTemplate {
    fn default() -> Self {
        Self {
            shop_name: "My Restaurant".to_string(),
            footer_text: "SCAN TO ORDER".to_string(),
            desk_x: 290,
            desk_y: 20,
            shop_x: 200,
            shop_y: 550,
            footer_x: 180,
            footer_y: 750,
            footer_size: 48,
            logo_x: (LABEL_WIDTH - 160) / 2,
            logo_y: 680,
            logo_w: 160,
            logo_h: 50,
        }
    }
}

impl LabelTemplate {
    /// Clamp every adjustable value to its slider range.
    ///
    /// X offsets are bounded to the canvas width, Y offsets to the canvas
    /// height; the logo and footer sizes have their own ranges.
    pub fn clamped(mut self) -> Self {
        self.desk_x = self.desk_x.min(LABEL_WIDTH);
        self.desk_y = self.desk_y.min(LABEL_HEIGHT);
        self.shop_x = self.shop_x.min(LABEL_WIDTH);
        self.shop_y = self.shop_y.min(LABEL_HEIGHT);
        self.footer_x = self.footer_x.min(LABEL_WIDTH);
        self.footer_y = self.footer_y.min(LABEL_HEIGHT);
        self.footer_size = self.footer_size.clamp(20, 100);
        self.logo_x = self.logo_x.min(LABEL_WIDTH);
        self.logo_y = self.logo_y.min(LABEL_HEIGHT);
        self.logo_w = self.logo_w.clamp(50, 300);
        self.logo_h = self.logo_h.clamp(20, 150);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logo_is_centered() {
        let t = LabelTemplate::default();
        assert_eq!(t.logo_x, 280);
        assert_eq!(t.logo_x + t.logo_w + t.logo_x, LABEL_WIDTH);
    }

    #[test]
    fn clamp_bounds_positions_to_canvas() {
        let t = LabelTemplate {
            desk_x: 9999,
            desk_y: 9999,
            footer_x: 721,
            ..Default::default()
        }
        .clamped();
        assert_eq!(t.desk_x, LABEL_WIDTH);
        assert_eq!(t.desk_y, LABEL_HEIGHT);
        assert_eq!(t.footer_x, LABEL_WIDTH);
    }

    #[test]
    fn clamp_bounds_sizes_to_ranges() {
        let t = LabelTemplate {
            footer_size: 4,
            logo_w: 10_000,
            logo_h: 1,
            ..Default::default()
        }
        .clamped();
        assert_eq!(t.footer_size, 20);
        assert_eq!(t.logo_w, 300);
        assert_eq!(t.logo_h, 20);
    }

    #[test]
    fn clamp_keeps_in_range_values() {
        let t = LabelTemplate::default();
        assert_eq!(t.clone().clamped(), t);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let t: LabelTemplate = serde_json::from_str(r#"{"desk_x": 100}"#).unwrap();
        assert_eq!(t.desk_x, 100);
        assert_eq!(t.desk_y, 20);
        assert_eq!(t.footer_text, "SCAN TO ORDER");
    }

    #[test]
    fn page_dimensions() {
        assert_eq!(PAGE_WIDTH, 2160);
        assert_eq!(PAGE_HEIGHT, 2592);
        assert_eq!(LABELS_PER_PAGE, 9);
    }
}
