//! Page tiling: an ordered run of labels becomes 3x3 grid pages.
//!
//! Labels fill each page in row-major order; a final partial page keeps its
//! remaining cells blank. Upload order is preserved: item N lands on page
//! N / 9 at cell N % 9.

use image::{RgbImage, imageops};

use crate::template::{GRID_COLS, LABEL_HEIGHT, LABEL_WIDTH, LABELS_PER_PAGE, PAGE_HEIGHT, PAGE_WIDTH, WHITE};

/// Tile labels into full-size page canvases, at most nine per page.
pub fn tile(labels: &[RgbImage]) -> Vec<RgbImage> {
    labels
        .chunks(LABELS_PER_PAGE)
        .map(|chunk| {
            let mut page = RgbImage::from_pixel(PAGE_WIDTH, PAGE_HEIGHT, WHITE);
            for (idx, label) in chunk.iter().enumerate() {
                let row = idx as u32 / GRID_COLS;
                let col = idx as u32 % GRID_COLS;
                imageops::replace(
                    &mut page,
                    label,
                    (col * LABEL_WIDTH) as i64,
                    (row * LABEL_HEIGHT) as i64,
                );
            }
            page
        })
        .collect()
}

/// Top-left pixel of grid cell `idx` (0..=8) on a page.
pub fn cell_origin(idx: usize) -> (u32, u32) {
    let row = idx as u32 / GRID_COLS;
    let col = idx as u32 % GRID_COLS;
    (col * LABEL_WIDTH, row * LABEL_HEIGHT)
}
