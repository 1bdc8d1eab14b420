//! # Error Types
//!
//! This module defines error types used throughout the mesita library.

use thiserror::Error;

/// Main error type for mesita operations
#[derive(Debug, Error)]
pub enum MesitaError {
    /// Asset loading errors (font file, logo file)
    #[error("Asset error: {0}")]
    Asset(String),

    /// Font parsing errors
    #[error("Font error: {0}")]
    Font(String),

    /// Image decoding or processing errors
    #[error("Image error: {0}")]
    Image(String),

    /// Document encoding errors
    #[error("Encode error: {0}")]
    Encode(String),

    /// No pages to encode
    #[error("Cannot encode an empty document")]
    EmptyDocument,

    /// Server-level errors (bind, accept)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
