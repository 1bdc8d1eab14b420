//! # Mesita - Table-Tent QR Label Composer
//!
//! Mesita turns a batch of pre-rendered QR code images into print-ready
//! table-tent labels for restaurant desks. It provides:
//!
//! - **Label composition**: border, QR, desk number, shop name, optional
//!   logo, and footer on a fixed 720x864 canvas
//! - **Page tiling**: labels arranged nine to a page in a 3x3 grid
//! - **PDF export**: all pages serialized as one multi-page document
//! - **Web UI**: upload, layout sliders, inline preview, and download
//!
//! ## Quick Start
//!
//! ```no_run
//! use mesita::{assets::LabelAssets, label::QrItem, pipeline, template::LabelTemplate};
//!
//! // Load the bold font (required) and logo (optional)
//! let assets = LabelAssets::load("assets".as_ref())?;
//!
//! // One item per uploaded QR image; the desk name comes from the file name
//! let bytes = std::fs::read("A1.png")?;
//! let items = vec![QrItem::from_upload("A1.png", &bytes)?];
//!
//! // Compose, tile, and export with the stock layout
//! let pdf = pipeline::render_document(&items, &LabelTemplate::default(), &assets)?;
//! std::fs::write("mesita_tags.pdf", pdf)?;
//!
//! # Ok::<(), mesita::MesitaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`assets`] | Font and logo loading |
//! | [`template`] | Template constants and adjustable layout |
//! | [`label`] | Single-label composition |
//! | [`page`] | 3x3 page tiling |
//! | [`export`] | PDF and preview-PNG encoding |
//! | [`pipeline`] | One invocation end to end |
//! | [`server`] | HTTP interface |
//! | [`error`] | Error types |

pub mod assets;
pub mod error;
pub mod export;
pub mod label;
pub mod page;
pub mod pipeline;
pub mod server;
pub mod template;
pub mod text;

// Re-exports for convenience
pub use error::MesitaError;
pub use template::LabelTemplate;
