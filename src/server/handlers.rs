//! Label composition API handlers.
//!
//! Both endpoints take the same multipart body: repeated `qr` file fields
//! (in upload order) plus one text field per template knob. The whole
//! pipeline runs inside the request; nothing is retained between calls.

use axum::{
    Json,
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::MesitaError,
    export::{self, DOWNLOAD_FILENAME},
    label::QrItem,
    pipeline,
    template::LabelTemplate,
};

use super::state::AppState;

/// Response from the status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// False when the logo asset was missing at startup; the UI shows a
    /// non-blocking warning.
    pub logo_present: bool,
    /// Template defaults so the sliders start where the server would.
    pub defaults: LabelTemplate,
}

/// GET /api/status - asset availability and template defaults.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        logo_present: state.assets.logo.is_present(),
        defaults: LabelTemplate::default(),
    })
}

/// One parsed upload request: files in upload order plus the template.
struct TagRequest {
    files: Vec<(String, Vec<u8>)>,
    template: LabelTemplate,
}

/// POST /api/tags/preview - render and return the first page as PNG.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = parse_request(multipart).await?;
    println!("[labels] preview request: {} QR image(s)", request.files.len());

    let png_bytes = tokio::task::spawn_blocking(move || {
        let pages = build_pages(&state, &request)?;
        let first = pages.first().ok_or(MesitaError::EmptyDocument)?;
        export::encode_preview_png(first)
    })
    .await
    .map_err(task_error)?
    .map_err(pipeline_error)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
}

/// POST /api/tags/pdf - render all pages and return the PDF download.
pub async fn pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let request = parse_request(multipart).await?;
    println!("[labels] export request: {} QR image(s)", request.files.len());

    let pdf_bytes = tokio::task::spawn_blocking(move || {
        let pages = build_pages(&state, &request)?;
        export::encode(&pages)
    })
    .await
    .map_err(task_error)?
    .map_err(pipeline_error)?;

    println!("[labels] exported {} byte PDF", pdf_bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
            ),
        ],
        pdf_bytes,
    ))
}

/// Decode every upload and run the composition pipeline.
///
/// A single undecodable image aborts the whole batch.
fn build_pages(
    state: &AppState,
    request: &TagRequest,
) -> Result<Vec<image::RgbImage>, MesitaError> {
    let items = request
        .files
        .iter()
        .map(|(filename, bytes)| QrItem::from_upload(filename, bytes))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pipeline::render_pages(&items, &request.template, &state.assets))
}

/// Pull the uploaded files and template fields out of the multipart body.
async fn parse_request(mut multipart: Multipart) -> Result<TagRequest, (StatusCode, String)> {
    let mut files = Vec::new();
    let mut template = LabelTemplate::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "qr" {
            let filename = field.file_name().unwrap_or("unknown").to_string();
            let bytes = field.bytes().await.map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read {}: {}", filename, e),
                )
            })?;
            files.push((filename, bytes.to_vec()));
        } else {
            let value = field.text().await.map_err(|e| {
                (
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read field {}: {}", name, e),
                )
            })?;
            apply_field(&mut template, &name, &value)?;
        }
    }

    if files.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "No QR images uploaded".to_string()));
    }

    Ok(TagRequest {
        files,
        template: template.clamped(),
    })
}

/// Set one template knob from a form field. Unknown fields are ignored.
fn apply_field(
    template: &mut LabelTemplate,
    name: &str,
    value: &str,
) -> Result<(), (StatusCode, String)> {
    match name {
        "shop_name" => template.shop_name = value.to_string(),
        "footer_text" => template.footer_text = value.to_string(),
        "desk_x" => template.desk_x = parse_u32(name, value)?,
        "desk_y" => template.desk_y = parse_u32(name, value)?,
        "shop_x" => template.shop_x = parse_u32(name, value)?,
        "shop_y" => template.shop_y = parse_u32(name, value)?,
        "footer_x" => template.footer_x = parse_u32(name, value)?,
        "footer_y" => template.footer_y = parse_u32(name, value)?,
        "footer_size" => template.footer_size = parse_u32(name, value)?,
        "logo_x" => template.logo_x = parse_u32(name, value)?,
        "logo_y" => template.logo_y = parse_u32(name, value)?,
        "logo_w" => template.logo_w = parse_u32(name, value)?,
        "logo_h" => template.logo_h = parse_u32(name, value)?,
        _ => {}
    }
    Ok(())
}

fn parse_u32(name: &str, value: &str) -> Result<u32, (StatusCode, String)> {
    value.trim().parse().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid value for {}: {}", name, value),
        )
    })
}

fn task_error(e: tokio::task::JoinError) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Task error: {}", e),
    )
}

/// Map pipeline failures: bad uploads are the client's fault, the rest ours.
fn pipeline_error(e: MesitaError) -> (StatusCode, String) {
    let status = match &e {
        MesitaError::Image(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
