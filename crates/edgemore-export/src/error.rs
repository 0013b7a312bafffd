use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("writing PDF failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
