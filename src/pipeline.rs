//! One operator invocation, start to finish: compose a label per uploaded
//! QR item, tile the labels into pages, and (for export) encode the PDF.
//!
//! The whole run is synchronous and owns its canvases; configuration is
//! read once and held immutable for the duration.

use image::RgbImage;

use crate::assets::LabelAssets;
use crate::error::MesitaError;
use crate::export;
use crate::label::{QrItem, compose};
use crate::page::tile;
use crate::template::LabelTemplate;

/// Compose every item in upload order and tile the results into pages.
pub fn render_pages(
    items: &[QrItem],
    template: &LabelTemplate,
    assets: &LabelAssets,
) -> Vec<RgbImage> {
    let labels: Vec<RgbImage> = items
        .iter()
        .map(|item| compose(&item.image, &item.desk_name, template, assets))
        .collect();
    tile(&labels)
}

/// Full export path: pages to a downloadable PDF byte buffer.
pub fn render_document(
    items: &[QrItem],
    template: &LabelTemplate,
    assets: &LabelAssets,
) -> Result<Vec<u8>, MesitaError> {
    export::encode(&render_pages(items, template, assets))
}
