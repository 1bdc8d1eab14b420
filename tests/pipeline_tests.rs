//! # Pipeline Tests
//!
//! End-to-end checks over the whole composition pipeline: uploaded bytes in,
//! labels composed, pages tiled, PDF out. These use the bundled font and
//! synthetic in-memory QR images, so they run offline.

use image::{DynamicImage, Rgba, RgbaImage, RgbImage};
use mesita::assets::LabelAssets;
use mesita::export;
use mesita::label::QrItem;
use mesita::page::cell_origin;
use mesita::pipeline;
use mesita::template::{LABEL_HEIGHT, LABEL_WIDTH, LabelTemplate, PAGE_HEIGHT, PAGE_WIDTH};
use std::path::PathBuf;

/// Border accent color as it appears on the final RGB pages.
const ACCENT: [u8; 3] = [0x47, 0x4F, 0xF6];

fn test_assets() -> LabelAssets {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    LabelAssets::load(&dir).unwrap()
}

/// A square checkerboard standing in for QR art.
fn checker(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

fn png_upload(name: &str, size: u32) -> QrItem {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(checker(size))
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    QrItem::from_upload(name, &bytes).unwrap()
}

fn jpeg_upload(name: &str, size: u32) -> QrItem {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(checker(size)).to_rgb8())
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .unwrap();
    QrItem::from_upload(name, &bytes).unwrap()
}

/// A grid cell is populated iff the label border was drawn into it.
fn cell_is_populated(page: &RgbImage, idx: usize) -> bool {
    let (ox, oy) = cell_origin(idx);
    // Sample the mid-left border band of the would-be label.
    let p = page.get_pixel(ox + 15, oy + LABEL_HEIGHT / 2);
    p.0 == ACCENT
}

fn cell_is_blank(page: &RgbImage, idx: usize) -> bool {
    let (ox, oy) = cell_origin(idx);
    (0..LABEL_HEIGHT)
        .step_by(7)
        .all(|y| (0..LABEL_WIDTH).step_by(7).all(|x| page.get_pixel(ox + x, oy + y).0 == [255, 255, 255]))
}

fn pdf_page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn two_uploads_fill_two_cells_and_leave_seven_blank() {
    let assets = test_assets();
    let items = vec![png_upload("A1.png", 120), jpeg_upload("B2.jpg", 64)];
    assert_eq!(items[0].desk_name, "A1");
    assert_eq!(items[1].desk_name, "B2");

    let pages = pipeline::render_pages(&items, &LabelTemplate::default(), &assets);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].dimensions(), (PAGE_WIDTH, PAGE_HEIGHT));

    assert!(cell_is_populated(&pages[0], 0));
    assert!(cell_is_populated(&pages[0], 1));
    for idx in 2..9 {
        assert!(cell_is_blank(&pages[0], idx), "cell {} should be blank", idx);
    }
}

#[test]
fn different_desk_names_render_different_labels() {
    let assets = test_assets();
    let template = LabelTemplate::default();
    let items = vec![png_upload("A1.png", 120), png_upload("B2.png", 120)];
    let pages = pipeline::render_pages(&items, &template, &assets);

    // Same QR art, different desk names: the two cells must differ inside
    // the desk-text area and only there above the QR block.
    let (x0, y0) = cell_origin(0);
    let (x1, y1) = cell_origin(1);
    let mut differs = false;
    for dy in 0..120 {
        for dx in 200..500 {
            if pages[0].get_pixel(x0 + dx, y0 + dy) != pages[0].get_pixel(x1 + dx, y1 + dy) {
                differs = true;
            }
        }
    }
    assert!(differs, "desk-name text should differ between cells");
}

#[test]
fn nine_items_fill_exactly_one_page() {
    let assets = test_assets();
    let items: Vec<_> = (1..=9).map(|i| png_upload(&format!("T{}.png", i), 80)).collect();
    let pages = pipeline::render_pages(&items, &LabelTemplate::default(), &assets);
    assert_eq!(pages.len(), 1);
    for idx in 0..9 {
        assert!(cell_is_populated(&pages[0], idx), "cell {} should be populated", idx);
    }
}

#[test]
fn ten_items_spill_onto_a_second_page() {
    let assets = test_assets();
    let items: Vec<_> = (1..=10).map(|i| png_upload(&format!("T{}.png", i), 80)).collect();
    let pages = pipeline::render_pages(&items, &LabelTemplate::default(), &assets);
    assert_eq!(pages.len(), 2);
    assert!(cell_is_populated(&pages[1], 0));
    for idx in 1..9 {
        assert!(cell_is_blank(&pages[1], idx), "cell {} should be blank", idx);
    }
}

#[test]
fn pipeline_is_deterministic() {
    let assets = test_assets();
    let template = LabelTemplate::default();
    let items = vec![png_upload("A1.png", 100)];
    let first = pipeline::render_pages(&items, &template, &assets);
    let second = pipeline::render_pages(&items, &template, &assets);
    assert_eq!(first[0].as_raw(), second[0].as_raw());
}

#[test]
fn document_page_count_matches_tiled_pages() {
    let assets = test_assets();
    let template = LabelTemplate::default();
    for (n, expected) in [(1usize, 1usize), (9, 1), (10, 2)] {
        let items: Vec<_> = (0..n).map(|i| png_upload(&format!("T{}.png", i), 64)).collect();
        let pdf = pipeline::render_document(&items, &template, &assets).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(pdf_page_count(&pdf), expected, "n = {}", n);
    }
}

#[test]
fn preview_matches_first_page() {
    let assets = test_assets();
    let template = LabelTemplate::default();
    let items = vec![png_upload("A1.png", 100), png_upload("B2.png", 100)];
    let pages = pipeline::render_pages(&items, &template, &assets);

    let png = export::encode_preview_png(&pages[0]).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), pages[0].dimensions());
    assert_eq!(decoded.as_raw(), pages[0].as_raw());
}

#[test]
fn adjusted_template_moves_the_desk_text() {
    let assets = test_assets();
    let items = vec![png_upload("A1.png", 100)];

    let stock = pipeline::render_pages(&items, &LabelTemplate::default(), &assets);
    let moved_template = LabelTemplate {
        desk_y: 40,
        ..Default::default()
    };
    let moved = pipeline::render_pages(&items, &moved_template, &assets);

    assert_ne!(stock[0].as_raw(), moved[0].as_raw());
}
