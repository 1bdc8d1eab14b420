//! Document export: page canvases to a multi-page PDF, plus the PNG
//! preview encoding for the first page.
//!
//! printpdf 0.8 data-oriented API: each page canvas becomes an RGB8 image
//! XObject placed at the render DPI, one PDF page per canvas, serialized
//! fully in memory.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};

use crate::error::MesitaError;

/// Pixel density of the page canvases (2.5 x 3 inch labels at 720x864).
pub const RENDER_DPI: f32 = 288.0;

/// Suggested filename for the downloaded document.
pub const DOWNLOAD_FILENAME: &str = "mesita_tags.pdf";

/// Document title embedded in the PDF metadata.
const DOC_TITLE: &str = "Mesita Table Tags";

/// Serialize pages, in order, into one multi-page PDF held in memory.
///
/// The first canvas becomes the document's first page; the rest follow in
/// order. An empty input is an error; callers only invoke the pipeline
/// when at least one QR item was supplied.
pub fn encode(pages: &[RgbImage]) -> Result<Vec<u8>, MesitaError> {
    if pages.is_empty() {
        return Err(MesitaError::EmptyDocument);
    }

    let mut doc = PdfDocument::new(DOC_TITLE);
    let mut pdf_pages = Vec::with_capacity(pages.len());

    for page in pages {
        let (w_px, h_px) = page.dimensions();
        let raw = RawImage {
            pixels: RawImageData::U8(page.as_raw().clone()),
            width: w_px as usize,
            height: h_px as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // Page size in mm so the canvas maps 1:1 at the render DPI.
        let page_w = Mm(w_px as f32 / RENDER_DPI * 25.4);
        let page_h = Mm(h_px as f32 / RENDER_DPI * 25.4);

        let ops = vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(0.0)),
                scale_x: None,
                scale_y: None,
                dpi: Some(RENDER_DPI),
                rotate: None,
            },
        }];

        pdf_pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pdf_pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Encode one page canvas as PNG for the inline preview.
pub fn encode_preview_png(page: &RgbImage) -> Result<Vec<u8>, MesitaError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(
            page.as_raw(),
            page.width(),
            page.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| MesitaError::Encode(format!("failed to encode preview PNG: {}", e)))?;
    Ok(buf)
}
