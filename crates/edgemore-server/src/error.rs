use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::FormRejection;
use thiserror::Error;

/// Why a submitted estimate form could not be read.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read request body: {0}")]
    Body(axum::Error),

    #[error("{0}")]
    Urlencoded(#[from] FormRejection),

    #[error("{0}")]
    Multipart(#[from] MultipartRejection),

    #[error("{0}")]
    MultipartField(#[from] MultipartError),
}
